//! Window rectangle math.
//!
//! Move and resize are delta-based: every computation starts from the
//! baseline rectangle captured at activation, never from the live one.

use serde::{Deserialize, Serialize};

use crate::region::{Edge, Region};

/// On-screen rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Pending geometry produced by one resize step.
///
/// `None` fields are left untouched at commit time; a computed value of
/// zero still commits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizePlan {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub left: Option<i32>,
    pub top: Option<i32>,
}

impl ResizePlan {
    /// Computes the plan for a pointer delta against the captured baseline.
    /// Regions that engage no edge yield an empty plan.
    pub fn compute(captured: Rect, dx: i32, dy: i32, region: Region) -> Self {
        let mut plan = Self::default();
        for edge in region.engaged_edges() {
            plan.apply_edge(captured, dx, dy, *edge);
        }
        plan
    }

    fn apply_edge(&mut self, captured: Rect, dx: i32, dy: i32, edge: Edge) {
        match edge {
            Edge::Top => {
                self.height = Some(captured.height - dy);
                self.top = Some(captured.top + dy);
            }
            Edge::Bottom => {
                self.height = Some(captured.height + dy);
            }
            Edge::Left => {
                self.width = Some(captured.width - dx);
                self.left = Some(captured.left + dx);
            }
            Edge::Right => {
                self.width = Some(captured.width + dx);
            }
        }
    }

    /// Clamps width and height to the configured floor. A clamped dimension
    /// drops its paired offset, so the rectangle keeps its captured position
    /// on that axis instead of sliding.
    pub fn clamp(&mut self, min_width: i32, min_height: i32) {
        if let Some(width) = self.width {
            if width < min_width {
                self.width = Some(min_width);
                self.left = None;
            }
        }
        if let Some(height) = self.height {
            if height < min_height {
                self.height = Some(min_height);
                self.top = None;
            }
        }
    }

    /// Writes every computed field into `rect`.
    pub fn commit(&self, rect: &mut Rect) {
        if let Some(width) = self.width {
            rect.width = width;
        }
        if let Some(height) = self.height {
            rect.height = height;
        }
        if let Some(left) = self.left {
            rect.left = left;
        }
        if let Some(top) = self.top {
            rect.top = top;
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn captured() -> Rect {
        Rect::new(50, 50, 300, 200)
    }

    #[test]
    fn right_edge_grows_width_only() {
        let plan = ResizePlan::compute(captured(), 40, 0, Region::Edge(Edge::Right));
        assert_eq!(plan.width, Some(340));
        assert_eq!(plan.height, None);
        assert_eq!(plan.left, None);
        assert_eq!(plan.top, None);
    }

    #[test]
    fn top_edge_moves_top_and_shrinks_height() {
        let plan = ResizePlan::compute(captured(), 0, 30, Region::Edge(Edge::Top));
        assert_eq!(plan.height, Some(170));
        assert_eq!(plan.top, Some(80));
    }

    #[test]
    fn left_edge_moves_left_and_shrinks_width() {
        let plan = ResizePlan::compute(captured(), 25, 0, Region::Edge(Edge::Left));
        assert_eq!(plan.width, Some(275));
        assert_eq!(plan.left, Some(75));
    }

    #[test]
    fn left_corner_applies_left_and_bottom() {
        let plan = ResizePlan::compute(captured(), -20, 30, Region::Corner { parent: Edge::Left });
        assert_eq!(plan.width, Some(320));
        assert_eq!(plan.left, Some(30));
        assert_eq!(plan.height, Some(230));
        assert_eq!(plan.top, None);
    }

    #[test]
    fn clamped_height_drops_top_offset() {
        let mut plan = ResizePlan::compute(captured(), 0, 150, Region::Edge(Edge::Top));
        assert_eq!(plan.height, Some(50));
        plan.clamp(200, 100);
        assert_eq!(plan.height, Some(100));
        assert_eq!(plan.top, None);
    }

    #[test]
    fn clamped_width_drops_left_offset() {
        let mut plan = ResizePlan::compute(captured(), 250, 0, Region::Edge(Edge::Left));
        plan.clamp(200, 100);
        assert_eq!(plan.width, Some(200));
        assert_eq!(plan.left, None);
    }

    #[test]
    fn commit_writes_zero_values() {
        let plan = ResizePlan {
            left: Some(0),
            top: Some(0),
            width: None,
            height: None,
        };
        let mut rect = captured();
        plan.commit(&mut rect);
        assert_eq!(rect, Rect::new(0, 0, 300, 200));
    }

    #[test]
    fn empty_plan_commits_nothing() {
        let plan = ResizePlan::compute(captured(), 40, 40, Region::Ribbon);
        let mut rect = captured();
        plan.commit(&mut rect);
        assert_eq!(rect, captured());
    }

    proptest! {
        #[test]
        fn resize_never_undercuts_minimums(
            left in -500i32..500,
            top in -500i32..500,
            width in 200i32..1000,
            height in 100i32..1000,
            dx in -2000i32..2000,
            dy in -2000i32..2000,
            edge_index in 0usize..8,
        ) {
            let regions = [
                Region::Edge(Edge::Top),
                Region::Edge(Edge::Right),
                Region::Edge(Edge::Bottom),
                Region::Edge(Edge::Left),
                Region::Corner { parent: Edge::Top },
                Region::Corner { parent: Edge::Right },
                Region::Corner { parent: Edge::Bottom },
                Region::Corner { parent: Edge::Left },
            ];
            let baseline = Rect::new(left, top, width, height);
            let mut plan = ResizePlan::compute(baseline, dx, dy, regions[edge_index]);
            plan.clamp(200, 100);
            let mut rect = baseline;
            plan.commit(&mut rect);
            prop_assert!(rect.width >= 200);
            prop_assert!(rect.height >= 100);
        }

        #[test]
        fn clamped_axis_keeps_captured_offset(
            dx in -2000i32..2000,
            dy in -2000i32..2000,
        ) {
            let baseline = Rect::new(50, 50, 300, 200);
            let mut plan = ResizePlan::compute(
                baseline,
                dx,
                dy,
                Region::Corner { parent: Edge::Top },
            );
            plan.clamp(200, 100);
            let mut rect = baseline;
            plan.commit(&mut rect);
            if rect.width == 200 && 300 - dx < 200 {
                prop_assert_eq!(rect.left, baseline.left);
            }
            if rect.height == 100 && 200 - dy < 100 {
                prop_assert_eq!(rect.top, baseline.top);
            }
        }
    }
}
