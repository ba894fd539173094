//! Hit-target roles.
//!
//! Every interactive element of a window's chrome carries a role, resolved
//! once when the chrome is built. Pointer handlers dispatch on the role
//! instead of inspecting class strings at event time.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Cardinal window edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Chrome control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Close,
    Maximize,
}

/// Role of the element a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Title bar. Dragging it moves the window.
    Ribbon,
    /// One of the four resize edges.
    Edge(Edge),
    /// Corner hit-target, keyed by the edge it sits on.
    Corner { parent: Edge },
    /// Content area. Pointer-down here focuses the window without dragging.
    Body,
    /// Close or maximize button; the pointer machinery ignores these.
    Control(Control),
    /// Any other part of the window element. Dragging it moves the window.
    Other,
}

impl Region {
    /// Edges engaged when a resize starts on this region. Corners combine
    /// two adjacent edges, keyed by the side of the window they sit on.
    pub fn engaged_edges(self) -> &'static [Edge] {
        match self {
            Region::Edge(Edge::Top) => &[Edge::Top],
            Region::Edge(Edge::Right) => &[Edge::Right],
            Region::Edge(Edge::Bottom) => &[Edge::Bottom],
            Region::Edge(Edge::Left) => &[Edge::Left],
            Region::Corner { parent: Edge::Right } => &[Edge::Right, Edge::Top],
            Region::Corner { parent: Edge::Bottom } => &[Edge::Right, Edge::Bottom],
            Region::Corner { parent: Edge::Left } => &[Edge::Left, Edge::Bottom],
            Region::Corner { parent: Edge::Top } => &[Edge::Left, Edge::Top],
            _ => &[],
        }
    }

    /// Whether a drag starting on this region resizes rather than moves.
    pub fn is_resize_target(self) -> bool {
        matches!(self, Region::Edge(_) | Region::Corner { .. })
    }

    /// Attribute value written onto the element at construction.
    pub fn as_role(self) -> &'static str {
        match self {
            Region::Ribbon => "ribbon",
            Region::Edge(Edge::Top) => "edge-top",
            Region::Edge(Edge::Right) => "edge-right",
            Region::Edge(Edge::Bottom) => "edge-bottom",
            Region::Edge(Edge::Left) => "edge-left",
            Region::Corner { parent: Edge::Top } => "corner-top",
            Region::Corner { parent: Edge::Right } => "corner-right",
            Region::Corner { parent: Edge::Bottom } => "corner-bottom",
            Region::Corner { parent: Edge::Left } => "corner-left",
            Region::Body => "body",
            Region::Control(Control::Close) => "close",
            Region::Control(Control::Maximize) => "maximize",
            Region::Other => "other",
        }
    }

    /// Parses a role attribute written by [`Region::as_role`].
    pub fn from_role(role: &str) -> Option<Self> {
        if let Some(edge) = role.strip_prefix("edge-") {
            return edge.parse::<Edge>().ok().map(Region::Edge);
        }
        if let Some(edge) = role.strip_prefix("corner-") {
            return edge.parse::<Edge>().ok().map(|parent| Region::Corner { parent });
        }
        match role {
            "ribbon" => Some(Region::Ribbon),
            "body" => Some(Region::Body),
            "close" => Some(Region::Control(Control::Close)),
            "maximize" => Some(Region::Control(Control::Maximize)),
            "other" => Some(Region::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip() {
        let regions = [
            Region::Ribbon,
            Region::Edge(Edge::Top),
            Region::Edge(Edge::Right),
            Region::Edge(Edge::Bottom),
            Region::Edge(Edge::Left),
            Region::Corner { parent: Edge::Top },
            Region::Corner { parent: Edge::Right },
            Region::Corner { parent: Edge::Bottom },
            Region::Corner { parent: Edge::Left },
            Region::Body,
            Region::Control(Control::Close),
            Region::Control(Control::Maximize),
            Region::Other,
        ];
        for region in regions {
            assert_eq!(Region::from_role(region.as_role()), Some(region));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(Region::from_role("titlebar"), None);
        assert_eq!(Region::from_role("edge-middle"), None);
    }

    #[test]
    fn corners_combine_two_adjacent_edges() {
        assert_eq!(
            Region::Corner { parent: Edge::Right }.engaged_edges(),
            &[Edge::Right, Edge::Top]
        );
        assert_eq!(
            Region::Corner { parent: Edge::Bottom }.engaged_edges(),
            &[Edge::Right, Edge::Bottom]
        );
        assert_eq!(
            Region::Corner { parent: Edge::Left }.engaged_edges(),
            &[Edge::Left, Edge::Bottom]
        );
        assert_eq!(
            Region::Corner { parent: Edge::Top }.engaged_edges(),
            &[Edge::Left, Edge::Top]
        );
    }

    #[test]
    fn ribbon_and_body_engage_nothing() {
        assert!(Region::Ribbon.engaged_edges().is_empty());
        assert!(Region::Body.engaged_edges().is_empty());
        assert!(!Region::Ribbon.is_resize_target());
        assert!(Region::Corner { parent: Edge::Top }.is_resize_target());
    }
}
