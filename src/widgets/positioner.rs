//! Floating popover placement.
//!
//! Computes where a popover opens relative to its trigger from trigger and
//! viewport geometry. The spec is recomputed every frame while the popover
//! is open (which covers scroll and resize), never persisted. Applying the
//! resulting position to the egui `Area` is the one imperative step in the
//! widget set; everything feeding it is pure and unit-testable.

use egui::{Pos2, Rect, Vec2};

/// Which side of the trigger the popover opens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

/// Which trigger edge the popover is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    /// Popover's left edge on the trigger's left edge
    Left,
    /// Popover's right edge on the trigger's right edge
    Right,
    /// Centered in the viewport (modal fallback)
    Center,
}

/// Computed placement directive for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionSpec {
    pub side: Side,
    pub align: Align,
    /// Vertical space the popover may use on the chosen side
    pub max_height: f32,
    /// True below the mobile breakpoint: ignore the trigger and center
    pub uses_modal_centering: bool,
}

/// Placement policy: margins and the viewport-width breakpoint under which
/// edge-anchored placement is abandoned for centered-modal presentation.
#[derive(Clone, Copy, Debug)]
pub struct FloatingPositioner {
    /// Gap kept between popover, trigger and viewport edges
    pub margin: f32,
    /// Viewport widths below this use modal centering
    pub mobile_breakpoint: f32,
}

impl Default for FloatingPositioner {
    fn default() -> Self {
        Self {
            margin: 8.0,
            mobile_breakpoint: 600.0,
        }
    }
}

impl FloatingPositioner {
    pub fn new(mobile_breakpoint: f32) -> Self {
        Self {
            mobile_breakpoint,
            ..Self::default()
        }
    }

    /// Choose a placement for `popover_size` relative to `trigger` inside
    /// `viewport`.
    ///
    /// Opens upward when the space below cannot fit the popover and there
    /// is more space above than below; anchors to the trigger's right edge
    /// when the span right of the trigger's left edge cannot fit the
    /// popover's width.
    pub fn compute(&self, trigger: Rect, popover_size: Vec2, viewport: Rect) -> PositionSpec {
        if viewport.width() < self.mobile_breakpoint {
            return PositionSpec {
                side: Side::Below,
                align: Align::Center,
                max_height: (viewport.height() - 2.0 * self.margin).min(popover_size.y),
                uses_modal_centering: true,
            };
        }

        let below_space = viewport.bottom() - trigger.bottom() - self.margin;
        let above_space = trigger.top() - viewport.top() - self.margin;
        let side = if below_space < popover_size.y && above_space > below_space {
            Side::Above
        } else {
            Side::Below
        };

        let right_space = viewport.right() - trigger.left();
        let align = if right_space < popover_size.x {
            Align::Right
        } else {
            Align::Left
        };

        let available = match side {
            Side::Above => above_space,
            Side::Below => below_space,
        };

        PositionSpec {
            side,
            align,
            max_height: popover_size.y.min(available.max(0.0)),
            uses_modal_centering: false,
        }
    }

    /// Concrete top-left screen position for the popover under `spec`.
    pub fn anchor_pos(
        &self,
        spec: &PositionSpec,
        trigger: Rect,
        popover_size: Vec2,
        viewport: Rect,
    ) -> Pos2 {
        if spec.uses_modal_centering {
            return viewport.center() - popover_size / 2.0;
        }

        let height = popover_size.y.min(spec.max_height);
        let y = match spec.side {
            Side::Below => trigger.bottom() + self.margin,
            Side::Above => trigger.top() - self.margin - height,
        };

        let x = match spec.align {
            Align::Left => trigger.left(),
            Align::Right => trigger.right() - popover_size.x,
            Align::Center => viewport.center().x - popover_size.x / 2.0,
        };

        // Keep the popover inside the viewport even for degenerate triggers
        let x = x
            .min(viewport.right() - popover_size.x - self.margin)
            .max(viewport.left() + self.margin);
        let y = y
            .min(viewport.bottom() - height - self.margin)
            .max(viewport.top() + self.margin);

        Pos2::new(x, y)
    }
}
