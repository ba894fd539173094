//! Chrome construction.
//!
//! Dresses a bare `.window` element: ribbon with actions and title, resize
//! edges with corner hit-targets, and a body region that receives the
//! element's original children. The generated class names are part of the
//! visible contract; page styling depends on them.

use web_sys::{Document, HtmlElement};

use webdesk_core::{Control, Edge, Options, Region};

use crate::error::DeskError;

/// Attribute carrying the element's resolved hit-target role.
pub(crate) const ROLE_ATTR: &str = "data-role";

/// Handles to the chrome parts needed after construction.
pub struct Chrome {
    pub ribbon: HtmlElement,
    pub body: HtmlElement,
    pub close: HtmlElement,
    pub maximize: HtmlElement,
}

/// Builds the chrome for `element` in place and returns the handles.
pub fn build(
    document: &Document,
    element: &HtmlElement,
    options: &Options,
) -> Result<Chrome, DeskError> {
    let title = element
        .get_attribute("title")
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| options.default_title.clone());

    // Original children become the body content.
    let body = create_div(document, "body", Region::Body)?;
    while let Some(child) = element.first_child() {
        body.append_child(&child)?;
    }

    let ribbon = create_div(document, "ribbon no-select", Region::Ribbon)?;
    let actions = document.create_element("div")?;
    actions.set_class_name("actions");

    let close = create_div(document, "close", Region::Control(Control::Close))?;
    close.set_text_content(Some("x"));
    actions.append_child(&close)?;

    let maximize = create_div(document, "maximize", Region::Control(Control::Maximize))?;
    maximize.set_text_content(Some("+"));
    actions.append_child(&maximize)?;

    ribbon.append_child(&actions)?;

    let heading = document.create_element("h1")?;
    heading.set_text_content(Some(&title));
    ribbon.append_child(&heading)?;
    // The title now lives in the chrome; keep it out of the hover tooltip.
    element.set_attribute("title", "")?;

    element.append_child(&ribbon)?;

    for edge in &options.edges {
        let edge_el = create_div(document, &format!("edge {edge}"), Region::Edge(*edge))?;
        let corner = create_div(document, "corner", Region::Corner { parent: *edge })?;
        // The top corner overlaps its edge, so it sits directly on the
        // window element instead.
        if *edge == Edge::Top {
            element.append_child(&corner)?;
        } else {
            edge_el.append_child(&corner)?;
        }
        element.append_child(&edge_el)?;
    }

    element.append_child(&body)?;

    Ok(Chrome {
        ribbon,
        body,
        close,
        maximize,
    })
}

fn create_div(
    document: &Document,
    classes: &str,
    region: Region,
) -> Result<HtmlElement, DeskError> {
    use wasm_bindgen::JsCast;

    let element: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(|_| DeskError::ElementCast)?;
    element.set_class_name(classes);
    element.set_attribute(ROLE_ATTR, region.as_role())?;
    Ok(element)
}
