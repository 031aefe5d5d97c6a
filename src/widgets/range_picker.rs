//! Date-range picker.
//!
//! [`RangeSelectionController`] implements the two-click range-selection
//! protocol over a tentative range; [`RangePicker`] renders it as a
//! dual-pane popover anchored by the floating positioner.

use chrono::{Local, NaiveDate};
use egui::Vec2;

use crate::models::locale::Locale;
use crate::models::selection::{enumerate_days, DisabledDates, SelectionRange, ViewMonth};

use super::calendar_grid::GridConfig;
use super::dual_grid::DualCalendarGrid;
use super::palette::CellPalette;
use super::positioner::FloatingPositioner;
use super::theme::PickerTheme;

/// Where the two-click protocol currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No tentative endpoint yet
    Empty,
    /// Start picked, end still open; hover shows a preview
    HasStart,
    /// Both endpoints picked; the next click starts over
    HasBoth,
}

/// Two-step range selection over one or two grids.
///
/// Owns the tentative range, both pane view months, and the hover-preview
/// cursor. All transitions are synchronous; the committed value only moves
/// on an explicit [`commit`](Self::commit).
#[derive(Debug)]
pub struct RangeSelectionController {
    committed: SelectionRange,
    tentative: SelectionRange,
    left_month: ViewMonth,
    right_month: ViewMonth,
    hovered: Option<NaiveDate>,
    end_edit_only: bool,
}

impl RangeSelectionController {
    /// Seed from the host's committed value, or today when empty.
    pub fn new(committed: SelectionRange, today: NaiveDate) -> Self {
        let anchor = committed.from.unwrap_or(today);
        let left_month = ViewMonth::from_date(anchor);
        Self {
            committed,
            tentative: committed,
            left_month,
            right_month: left_month.next(),
            hovered: None,
            end_edit_only: false,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.tentative.from, self.tentative.to) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::HasStart,
            (Some(_), Some(_)) => SelectionPhase::HasBoth,
        }
    }

    pub fn tentative(&self) -> SelectionRange {
        self.tentative
    }

    pub fn committed(&self) -> SelectionRange {
        self.committed
    }

    pub fn left_month(&self) -> ViewMonth {
        self.left_month
    }

    pub fn right_month(&self) -> ViewMonth {
        self.right_month
    }

    /// Floor for the right pane's "previous month" navigation: it may
    /// never show the left pane's month or anything earlier.
    pub fn right_month_floor(&self) -> ViewMonth {
        self.left_month.next()
    }

    /// Write back pane months after the grids navigated, keeping the right
    /// pane strictly after the left one.
    pub fn set_pane_months(&mut self, left: ViewMonth, right: ViewMonth) {
        self.left_month = left;
        self.right_month = if right <= left { left.next() } else { right };
    }

    /// Restrict subsequent clicks to re-picking the end date of an already
    /// complete range, seeding the panes from the existing start. Returns
    /// false (and does nothing) when the range is not complete.
    pub fn begin_end_edit(&mut self) -> bool {
        let Some(from) = self.tentative.from else {
            return false;
        };
        if self.tentative.to.is_none() {
            return false;
        }
        self.end_edit_only = true;
        self.seed_panes(from);
        true
    }

    pub fn is_end_edit(&self) -> bool {
        self.end_edit_only
    }

    /// Apply one date click according to the current phase.
    pub fn click(&mut self, date: NaiveDate) {
        if self.end_edit_only {
            // Only `to` moves; picking before the start swaps, same as the
            // regular second click.
            if let Some(from) = self.tentative.from {
                self.tentative = if date < from {
                    SelectionRange {
                        from: Some(date),
                        to: Some(from),
                    }
                } else {
                    SelectionRange {
                        from: Some(from),
                        to: Some(date),
                    }
                };
            }
            return;
        }

        match self.phase() {
            SelectionPhase::Empty | SelectionPhase::HasBoth => {
                self.tentative = SelectionRange {
                    from: Some(date),
                    to: None,
                };
                self.seed_panes(date);
            }
            SelectionPhase::HasStart => {
                let from = self.tentative.from.expect("HasStart implies from");
                self.tentative = if date < from {
                    SelectionRange {
                        from: Some(date),
                        to: Some(from),
                    }
                } else {
                    SelectionRange {
                        from: Some(from),
                        to: Some(date),
                    }
                };
            }
        }
    }

    /// Update the hover cursor used for range previews.
    pub fn hover(&mut self, date: Option<NaiveDate>) {
        self.hovered = date;
    }

    /// The hypothetical range shown while hovering with an open start.
    pub fn preview(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.end_edit_only {
            return None;
        }
        match (self.phase(), self.hovered) {
            (SelectionPhase::HasStart, Some(hovered)) => {
                let from = self.tentative.from.expect("HasStart implies from");
                Some((from.min(hovered), from.max(hovered)))
            }
            _ => None,
        }
    }

    /// Days the grids should highlight this frame: the hover preview when
    /// one is active, otherwise the tentative range. Linear in the range
    /// length, recomputed per render.
    pub fn highlighted_days(&self) -> Vec<NaiveDate> {
        if let Some((lo, hi)) = self.preview() {
            enumerate_days(lo, hi)
        } else {
            self.tentative.days()
        }
    }

    /// Tentative endpoints, for drawing as selected.
    pub fn endpoints(&self) -> Vec<NaiveDate> {
        [self.tentative.from, self.tentative.to]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Confirm the tentative range. An open range collapses to a single
    /// day. Committing twice without edits yields the same value.
    pub fn commit(&mut self) -> SelectionRange {
        if let (Some(from), None) = (self.tentative.from, self.tentative.to) {
            self.tentative = SelectionRange::single(from);
        }
        self.committed = self.tentative;
        self.end_edit_only = false;
        self.hovered = None;
        log::debug!(
            "range committed: {:?}..{:?}",
            self.committed.from,
            self.committed.to
        );
        self.committed
    }

    /// Discard tentative edits and fall back to the committed value.
    pub fn cancel(&mut self) {
        self.tentative = self.committed;
        self.hovered = None;
        self.end_edit_only = false;
        log::debug!("range selection cancelled");
    }

    fn seed_panes(&mut self, anchor: NaiveDate) {
        self.left_month = ViewMonth::from_date(anchor);
        self.right_month = self.left_month.next();
    }
}

/// Host-facing configuration for the picker popup.
pub struct RangePickerConfig<'a> {
    pub bounds: &'a DisabledDates,
    pub disabled: bool,
    pub week_starts_on: u8,
    pub locale: &'a Locale,
    pub theme: &'a PickerTheme,
    /// Viewport widths below this center the popover (mobile fallback)
    pub mobile_breakpoint: f32,
}

/// What the picker reported this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RangePickerResponse {
    /// Set only on explicit commit ("OK"); the host's new value
    pub committed: Option<SelectionRange>,
    /// Per-cell hover callbacks for the host
    pub hover_entered: Option<NaiveDate>,
    pub hover_left: Option<NaiveDate>,
    pub is_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pane {
    Left,
    Right,
}

/// Dual-pane date-range picker popup with a trigger button.
pub struct RangePicker {
    id_salt: String,
    controller: Option<RangeSelectionController>,
    left_grid: DualCalendarGrid,
    right_grid: DualCalendarGrid,
    active_pane: Pane,
}

const PANE_GAP: f32 = 16.0;
const POPOVER_SIZE: Vec2 = Vec2::new(590.0, 300.0);

impl RangePicker {
    pub fn new(id_salt: impl Into<String>) -> Self {
        let id_salt = id_salt.into();
        Self {
            left_grid: DualCalendarGrid::new(format!("{id_salt}_left")),
            right_grid: DualCalendarGrid::new(format!("{id_salt}_right")),
            id_salt,
            controller: None,
            active_pane: Pane::Left,
        }
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_some()
    }

    /// Open the picker seeded from the committed value.
    pub fn open(&mut self, committed: SelectionRange) {
        self.open_at(committed, Local::now().date_naive());
    }

    /// Open directly in end-date editing mode. Falls back to a normal open
    /// when the committed range is not complete.
    pub fn open_for_end_edit(&mut self, committed: SelectionRange) {
        self.open(committed);
        if let Some(controller) = &mut self.controller {
            controller.begin_end_edit();
        }
    }

    fn open_at(&mut self, committed: SelectionRange, today: NaiveDate) {
        self.controller = Some(RangeSelectionController::new(committed, today));
        self.left_grid.reset_focus();
        self.right_grid.reset_focus();
        self.active_pane = Pane::Left;
    }

    fn close(&mut self) {
        self.controller = None;
    }

    /// Trigger button plus (while open) the anchored popover. `committed`
    /// is the host's current value; a new value is reported via
    /// [`RangePickerResponse::committed`] only on OK.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        committed: &SelectionRange,
        config: &RangePickerConfig<'_>,
    ) -> RangePickerResponse {
        let mut response = RangePickerResponse::default();

        let label = match (committed.from, committed.to) {
            (Some(from), Some(to)) if from == to => from.format("%Y-%m-%d").to_string(),
            (Some(from), Some(to)) => {
                format!("{} – {}", from.format("%Y-%m-%d"), to.format("%Y-%m-%d"))
            }
            _ => "Select dates".to_string(),
        };
        let trigger = ui.add_enabled(!config.disabled, egui::Button::new(label));

        if trigger.clicked() {
            if self.is_open() {
                // Toggling the trigger closed discards tentative edits
                if let Some(controller) = &mut self.controller {
                    controller.cancel();
                }
                self.close();
            } else {
                self.open(*committed);
            }
        }

        if config.disabled && self.is_open() {
            self.close();
        }

        if self.is_open() {
            self.show_popover(ui, trigger.rect, config, &mut response);
        }
        response.is_open = self.is_open();
        response
    }

    fn show_popover(
        &mut self,
        ui: &mut egui::Ui,
        trigger_rect: egui::Rect,
        config: &RangePickerConfig<'_>,
        response: &mut RangePickerResponse,
    ) {
        let ctx = ui.ctx().clone();
        let viewport = ctx.screen_rect();

        // Recomputed every frame while open, so scroll and resize are
        // tracked without any listener plumbing.
        let positioner = FloatingPositioner::new(config.mobile_breakpoint);
        let spec = positioner.compute(trigger_rect, POPOVER_SIZE, viewport);
        let pos = positioner.anchor_pos(&spec, trigger_rect, POPOVER_SIZE, viewport);

        let palette = CellPalette::from_theme(config.theme);
        let controller = self
            .controller
            .as_mut()
            .expect("popover is only shown while open");

        let highlighted = controller.highlighted_days();
        let selected = controller.endpoints();

        let mut left_month = controller.left_month();
        let mut right_month = controller.right_month();
        let right_floor = controller.right_month_floor();

        let mut clicked_date = None;
        let mut commit_pressed = false;
        let mut cancel_pressed = false;

        let area = egui::Area::new(egui::Id::new(&self.id_salt).with("popover"))
            .order(egui::Order::Foreground)
            .fixed_pos(pos)
            .show(&ctx, |ui| {
                ui.set_max_height(spec.max_height.max(0.0));
                egui::Frame::popup(&ctx.style())
                    .fill(config.theme.panel_background)
                    .show(ui, |ui| {
                        ui.horizontal_top(|ui| {
                            let left_config = GridConfig {
                                selected: &selected,
                                highlighted: &highlighted,
                                bounds: config.bounds,
                                disabled: config.disabled,
                                week_starts_on: config.week_starts_on,
                                min_view_month: None,
                                locale: config.locale,
                                palette,
                            };
                            let left_result = self.left_grid.show(
                                ui,
                                &mut left_month,
                                self.active_pane == Pane::Left,
                                &left_config,
                            );

                            ui.add_space(PANE_GAP);

                            let right_config = GridConfig {
                                min_view_month: Some(right_floor),
                                ..left_config
                            };
                            let right_result = self.right_grid.show(
                                ui,
                                &mut right_month,
                                self.active_pane == Pane::Right,
                                &right_config,
                            );

                            for (pane, result) in [
                                (Pane::Left, &left_result),
                                (Pane::Right, &right_result),
                            ] {
                                if result.picked.is_some() || result.hover_entered.is_some() {
                                    self.active_pane = pane;
                                }
                                if let Some(date) = result.picked {
                                    clicked_date = Some(date);
                                }
                                if let Some(date) = result.hover_entered {
                                    response.hover_entered = Some(date);
                                } else if result.hover_left.is_some()
                                    && response.hover_entered.is_none()
                                {
                                    response.hover_left = result.hover_left;
                                }
                            }
                        });

                        ui.add_space(6.0);
                        ui.horizontal(|ui| {
                            if ui.button("OK").clicked() {
                                commit_pressed = true;
                            }
                            if ui.button("Cancel").clicked() {
                                cancel_pressed = true;
                            }
                            if controller.is_end_edit() {
                                ui.label(
                                    egui::RichText::new("editing end date")
                                        .size(11.0)
                                        .color(config.theme.text_secondary),
                                );
                            }
                        });
                    });
            });

        let months_before = (controller.left_month(), controller.right_month());
        controller.set_pane_months(left_month, right_month);

        if let Some(date) = clicked_date {
            controller.click(date);
        }

        // A click that restarted the selection reseeds the panes; that is a
        // non-focus-driven view change, so both keyboard cursors reset.
        if (controller.left_month(), controller.right_month()) != months_before
            && clicked_date.is_some()
        {
            self.left_grid.reset_focus();
            self.right_grid.reset_focus();
        }

        match (response.hover_entered, response.hover_left) {
            (Some(date), _) => controller.hover(Some(date)),
            (None, Some(_)) => controller.hover(None),
            _ => {}
        }

        let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        let clicked_outside = area.response.clicked_elsewhere() && !trigger_rect.contains(
            ctx.input(|i| i.pointer.interact_pos().unwrap_or(egui::Pos2::ZERO)),
        );

        if commit_pressed {
            response.committed = Some(controller.commit());
            self.close();
        } else if cancel_pressed || escape || clicked_outside {
            controller.cancel();
            self.close();
        }
    }
}
