//! DOM-backed window surface.

use web_sys::HtmlElement;

use webdesk_core::{Rect, WindowSurface};

/// [`WindowSurface`] over the live window element.
///
/// Style and class writes cannot meaningfully fail on attached elements;
/// their results are dropped so the repaint path never raises.
pub struct DomSurface {
    element: HtmlElement,
    parent: HtmlElement,
    ribbon: HtmlElement,
    body: HtmlElement,
}

impl DomSurface {
    pub fn new(
        element: HtmlElement,
        parent: HtmlElement,
        ribbon: HtmlElement,
        body: HtmlElement,
    ) -> Self {
        Self {
            element,
            parent,
            ribbon,
            body,
        }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn toggle_class(target: &HtmlElement, class: &str, on: bool) {
        let _ = if on {
            target.class_list().add_1(class)
        } else {
            target.class_list().remove_1(class)
        };
    }
}

impl WindowSurface for DomSurface {
    fn offset_position(&self) -> (i32, i32) {
        (self.element.offset_left(), self.element.offset_top())
    }

    fn offset_size(&self) -> (i32, i32) {
        (self.element.offset_width(), self.element.offset_height())
    }

    fn client_size(&self) -> (i32, i32) {
        (self.element.client_width(), self.element.client_height())
    }

    fn chrome_height(&self) -> i32 {
        self.ribbon.offset_height()
    }

    fn apply_rect(&mut self, rect: Rect) {
        let style = self.element.style();
        let _ = style.set_property("width", &format!("{}px", rect.width));
        let _ = style.set_property("height", &format!("{}px", rect.height));
        let _ = style.set_property("left", &format!("{}px", rect.left));
        let _ = style.set_property("top", &format!("{}px", rect.top));
    }

    fn apply_fill(&mut self) {
        let style = self.element.style();
        let _ = style.remove_property("width");
        let _ = style.remove_property("height");
        let _ = style.set_property("left", "0");
        let _ = style.set_property("top", "0");
    }

    fn set_maximized_marker(&mut self, on: bool) {
        Self::toggle_class(&self.element, "maximized", on);
    }

    fn set_active_marker(&mut self, on: bool) {
        Self::toggle_class(&self.element, "active", on);
    }

    fn set_raised(&mut self, on: bool) {
        let style = self.element.style();
        if on {
            let _ = style.set_property("z-index", "1");
        } else {
            let _ = style.remove_property("z-index");
        }
    }

    fn set_selection_enabled(&mut self, on: bool) {
        Self::toggle_class(&self.parent, "no-select", !on);
    }

    fn set_body_height(&mut self, height: i32) {
        let _ = self.body.style().set_property("height", &format!("{height}px"));
    }

    fn detach(&mut self) {
        let _ = self.parent.remove_child(&self.element);
    }
}
