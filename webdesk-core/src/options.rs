//! Widget configuration.

use serde::{Deserialize, Serialize};

use crate::region::Edge;

pub const DEFAULT_TITLE: &str = "Empty Window";
pub const DEFAULT_MIN_WIDTH: i32 = 200;
pub const DEFAULT_MIN_HEIGHT: i32 = 100;

/// Recognized widget options. A page may supply overrides as JSON; missing
/// fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Chrome title used when a window element carries no `title` attribute.
    pub default_title: String,
    /// Resize floor for window width.
    pub min_width: i32,
    /// Resize floor for window height.
    pub min_height: i32,
    /// Edges to build resize hit-targets for.
    pub edges: Vec<Edge>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            edges: vec![Edge::Top, Edge::Right, Edge::Bottom, Edge::Left],
        }
    }
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_values() {
        let options = Options::default();
        assert_eq!(options.default_title, "Empty Window");
        assert_eq!(options.min_width, 200);
        assert_eq!(options.min_height, 100);
        assert_eq!(
            options.edges,
            vec![Edge::Top, Edge::Right, Edge::Bottom, Edge::Left]
        );
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let options = Options::from_json(r#"{"min_width": 320, "default_title": "Untitled"}"#)
            .unwrap();
        assert_eq!(options.min_width, 320);
        assert_eq!(options.default_title, "Untitled");
        assert_eq!(options.min_height, 100);
        assert_eq!(options.edges.len(), 4);
    }

    #[test]
    fn edges_deserialize_lowercase() {
        let options = Options::from_json(r#"{"edges": ["top", "left"]}"#).unwrap();
        assert_eq!(options.edges, vec![Edge::Top, Edge::Left]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Options::from_json("{min_width: 50}").is_err());
    }
}
