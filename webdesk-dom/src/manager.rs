//! Page bootstrap and event wiring.
//!
//! Turns every `.desktop` element into a workplace: dresses its `.window`
//! children in chrome, then attaches the surface-level pointer listeners
//! that feed the interaction core. All shared state lives behind
//! `Rc<RefCell<..>>`; handlers run to completion on the UI thread, so
//! borrows never overlap.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use webdesk_core::{Options, StateStore, WindowId, Workplace};

use crate::chrome::{self, Chrome};
use crate::error::DeskError;
use crate::hit::{self, WindowIndex};
use crate::storage::LocalStore;
use crate::surface::DomSurface;

type SharedWorkplace = Rc<RefCell<Workplace<DomSurface>>>;
type SharedIndex = Rc<RefCell<WindowIndex>>;

/// Element id holding optional JSON overrides for [`Options`].
const OPTIONS_ELEMENT_ID: &str = "webdesk-options";

/// Owned handle to every workplace built from the page. The event closures
/// are leaked for the page lifetime; dropping this does not tear the
/// widgets down.
pub struct Desk {
    workplaces: Vec<SharedWorkplace>,
}

impl Desk {
    pub fn workplace_count(&self) -> usize {
        self.workplaces.len()
    }

    pub fn window_count(&self) -> usize {
        self.workplaces
            .iter()
            .map(|workplace| workplace.borrow().window_count())
            .sum()
    }
}

/// Reads optional page options, then boots every desktop surface.
pub fn bootstrap() -> Result<Desk, DeskError> {
    let document = document()?;
    let options = page_options(&document);
    run(&document, options)
}

/// Turns every `.desktop` element of `document` into a workplace.
pub fn run(document: &Document, options: Options) -> Result<Desk, DeskError> {
    let mut workplaces = Vec::new();
    let surfaces = document.get_elements_by_class_name("desktop");
    for i in 0..surfaces.length() {
        let Some(surface) = surfaces.item(i) else {
            continue;
        };
        let desktop: HtmlElement = surface.dyn_into().map_err(|_| DeskError::ElementCast)?;
        workplaces.push(build_workplace(document, &desktop, options.clone())?);
    }
    log::info!("{} desktop surface(s) initialized", workplaces.len());
    Ok(Desk { workplaces })
}

fn document() -> Result<Document, DeskError> {
    web_sys::window()
        .ok_or(DeskError::NoWindow)?
        .document()
        .ok_or(DeskError::NoDocument)
}

fn page_options(document: &Document) -> Options {
    let Some(text) = document
        .get_element_by_id(OPTIONS_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return Options::default();
    };
    match Options::from_json(&text) {
        Ok(options) => options,
        Err(err) => {
            log::warn!("ignoring malformed options JSON: {err}");
            Options::default()
        }
    }
}

fn build_workplace(
    document: &Document,
    desktop: &HtmlElement,
    options: Options,
) -> Result<SharedWorkplace, DeskError> {
    let chrome_options = options.clone();
    let store: Rc<RefCell<dyn StateStore>> = Rc::new(RefCell::new(LocalStore::from_page()));
    let workplace: SharedWorkplace = Rc::new(RefCell::new(Workplace::new(options, store)));
    let index: SharedIndex = Rc::new(RefCell::new(WindowIndex::default()));

    // Snapshot first; the live collection must not be walked while chrome
    // construction mutates the tree.
    let elements = desktop.get_elements_by_class_name("window");
    let mut window_elements = Vec::new();
    for i in 0..elements.length() {
        if let Some(element) = elements.item(i) {
            let element: HtmlElement = element.dyn_into().map_err(|_| DeskError::ElementCast)?;
            window_elements.push(element);
        }
    }

    for element in window_elements {
        let chrome = chrome::build(document, &element, &chrome_options)?;
        let surface = DomSurface::new(
            element.clone(),
            desktop.clone(),
            chrome.ribbon.clone(),
            chrome.body.clone(),
        );
        let id = workplace.borrow_mut().add_window(surface);
        index.borrow_mut().insert(element.into(), id);
        wire_window_controls(&chrome, id, &workplace, &index)?;
    }

    workplace.borrow_mut().activate_last();
    wire_surface_events(desktop, &workplace, &index)?;
    Ok(workplace)
}

fn wire_window_controls(
    chrome: &Chrome,
    id: WindowId,
    workplace: &SharedWorkplace,
    index: &SharedIndex,
) -> Result<(), DeskError> {
    let close = {
        let workplace = Rc::clone(workplace);
        let index = Rc::clone(index);
        Closure::wrap(Box::new(move |_event: MouseEvent| {
            workplace.borrow_mut().close(id);
            index.borrow_mut().remove(id);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    chrome
        .close
        .add_event_listener_with_callback("click", close.as_ref().unchecked_ref())?;
    close.forget();

    let maximize = {
        let workplace = Rc::clone(workplace);
        Closure::wrap(Box::new(move |_event: MouseEvent| {
            workplace.borrow_mut().toggle_maximize(id);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    chrome
        .maximize
        .add_event_listener_with_callback("click", maximize.as_ref().unchecked_ref())?;
    maximize.forget();

    let ribbon_toggle = {
        let workplace = Rc::clone(workplace);
        Closure::wrap(Box::new(move |_event: MouseEvent| {
            workplace.borrow_mut().toggle_maximize(id);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    chrome
        .ribbon
        .add_event_listener_with_callback("dblclick", ribbon_toggle.as_ref().unchecked_ref())?;
    ribbon_toggle.forget();

    Ok(())
}

fn wire_surface_events(
    desktop: &HtmlElement,
    workplace: &SharedWorkplace,
    index: &SharedIndex,
) -> Result<(), DeskError> {
    let down = {
        let workplace = Rc::clone(workplace);
        let index = Rc::clone(index);
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let hit = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| hit::resolve(&target, &index.borrow()));
            workplace
                .borrow_mut()
                .pointer_down(hit, event.client_x(), event.client_y());
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    desktop.add_event_listener_with_callback("mousedown", down.as_ref().unchecked_ref())?;
    down.forget();

    let drag = {
        let workplace = Rc::clone(workplace);
        Closure::wrap(Box::new(move |event: MouseEvent| {
            workplace
                .borrow_mut()
                .pointer_move(event.client_x(), event.client_y());
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    desktop.add_event_listener_with_callback("mousemove", drag.as_ref().unchecked_ref())?;
    drag.forget();

    let up = {
        let workplace = Rc::clone(workplace);
        Closure::wrap(Box::new(move |_event: MouseEvent| {
            workplace.borrow_mut().pointer_up();
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    desktop.add_event_listener_with_callback("mouseup", up.as_ref().unchecked_ref())?;
    up.forget();

    let enter = {
        let workplace = Rc::clone(workplace);
        Closure::wrap(Box::new(move |event: MouseEvent| {
            workplace.borrow_mut().pointer_enter(event.buttons() > 0);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    desktop.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;
    enter.forget();

    Ok(())
}
