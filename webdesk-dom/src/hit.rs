//! Event-target resolution.
//!
//! Maps a raw pointer target to the owning window and the role of the
//! element hit. Targets inside window body content resolve to nothing, so
//! pointer events on page content are never treated as chrome drags.

use web_sys::Element;

use webdesk_core::{Hit, Region, WindowId};

use crate::chrome::ROLE_ATTR;

/// Maps live window elements to their ids for ancestor-walk lookups.
#[derive(Default)]
pub struct WindowIndex {
    entries: Vec<(Element, WindowId)>,
}

impl WindowIndex {
    pub fn insert(&mut self, element: Element, id: WindowId) {
        self.entries.push((element, id));
    }

    pub fn remove(&mut self, id: WindowId) {
        self.entries.retain(|(_, entry_id)| *entry_id != id);
    }

    fn id_of(&self, element: &Element) -> Option<WindowId> {
        self.entries
            .iter()
            .find(|(entry, _)| entry.is_same_node(Some(element.as_ref())))
            .map(|(_, id)| *id)
    }
}

/// Resolves `target` to a window hit.
///
/// The window is the nearest strict ancestor tagged `window`; the walk
/// misses when a `body`-tagged ancestor exists, or when the window element
/// itself was the target. The region comes from the role attribute on the
/// target or its nearest tagged ancestor below the window element.
pub fn resolve(target: &Element, index: &WindowIndex) -> Option<Hit> {
    let window_element = ancestor_with_class(target, "window")?;
    if ancestor_with_class(target, "body").is_some() {
        return None;
    }
    let id = index.id_of(&window_element)?;
    Some(Hit {
        window: id,
        region: region_of(target, &window_element),
    })
}

fn ancestor_with_class(element: &Element, class: &str) -> Option<Element> {
    let mut current = element.parent_element();
    while let Some(candidate) = current {
        if candidate.class_list().contains(class) {
            return Some(candidate);
        }
        current = candidate.parent_element();
    }
    None
}

fn region_of(target: &Element, window_element: &Element) -> Region {
    let mut current = Some(target.clone());
    while let Some(element) = current {
        if element.is_same_node(Some(window_element.as_ref())) {
            break;
        }
        if let Some(region) = element
            .get_attribute(ROLE_ATTR)
            .as_deref()
            .and_then(Region::from_role)
        {
            return region;
        }
        current = element.parent_element();
    }
    Region::Other
}
