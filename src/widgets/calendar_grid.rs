//! Month grid widget.
//!
//! Renders a fixed 6-week (42 cell) grid for one view month, with
//! leading/trailing placeholder cells, disabled-date rules, keyboard
//! navigation, and per-cell hover reporting for range previews.

use chrono::{Datelike, Duration, NaiveDate};
use egui::{Align2, FontId, Sense, Stroke, Vec2};

use crate::models::locale::Locale;
use crate::models::selection::{DisabledDates, ViewMonth};
use crate::utils::date;

use super::palette::CellPalette;

/// A month grid always shows 6 weeks of 7 days.
pub const GRID_CELLS: usize = 42;

/// Lay out one month as exactly [`GRID_CELLS`] slots: leading placeholders
/// (`None`) up to the month's first weekday adjusted by the week-start
/// offset, one slot per calendar day, then trailing placeholders.
pub fn month_slots(view_month: ViewMonth, week_starts_on: u8) -> Vec<Option<NaiveDate>> {
    let days_in_month = date::days_in_month(view_month.year, view_month.month);
    let leading = ((date::first_weekday_of_month(view_month.year, view_month.month) as i32
        - week_starts_on as i32)
        + 7)
        % 7;

    (0..GRID_CELLS as i32)
        .map(|slot| {
            let day = slot - leading + 1;
            if day < 1 || day > days_in_month as i32 {
                None
            } else {
                NaiveDate::from_ymd_opt(view_month.year, view_month.month, day as u32)
            }
        })
        .collect()
}

const CELL_WIDTH: f32 = 36.0;
const CELL_HEIGHT: f32 = 30.0;
const CELL_SPACING: f32 = 2.0;

/// Per-frame grid configuration supplied by the host or the range
/// controller. The grid never mutates any of this.
pub struct GridConfig<'a> {
    /// Days drawn as selected (range endpoints, or the single picked day)
    pub selected: &'a [NaiveDate],
    /// Days drawn with the range/preview highlight
    pub highlighted: &'a [NaiveDate],
    /// Min/max bounds and explicitly disabled days
    pub bounds: &'a DisabledDates,
    /// Grid-wide disabled flag; inert cells and nav when set
    pub disabled: bool,
    /// 0=Sunday..6=Saturday
    pub week_starts_on: u8,
    /// Floor for "previous month" navigation (dual-pane right edge rule)
    pub min_view_month: Option<ViewMonth>,
    pub locale: &'a Locale,
    pub palette: CellPalette,
}

/// What happened inside a grid during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridResult {
    /// A non-disabled day cell was clicked or committed via Enter/Space
    pub picked: Option<NaiveDate>,
    /// The pointer entered this day cell this frame
    pub hover_entered: Option<NaiveDate>,
    /// The pointer left this day cell this frame
    pub hover_left: Option<NaiveDate>,
    /// The view month changed (nav arrows or focus crossing a boundary)
    pub month_changed: bool,
}

/// Visual state of one day cell. When several apply, the highest-priority
/// one wins: selected > highlighted > focused > disabled > default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellState {
    Selected,
    Highlighted,
    Focused,
    Disabled,
    Default,
}

/// Focus and hover state shared by the owned and dual grid variants.
#[derive(Debug, Default)]
pub(crate) struct GridCore {
    /// Keyboard-navigation cursor, decoupled from selection
    focused: Option<NaiveDate>,
    /// Day cell hovered last frame, for enter/leave transitions
    hovered: Option<NaiveDate>,
}

impl GridCore {
    pub(crate) fn focused(&self) -> Option<NaiveDate> {
        self.focused
    }

    /// Clear the keyboard cursor. Called on non-focus-driven view-month
    /// changes (nav arrows, controller reseeding).
    pub(crate) fn reset_focus(&mut self) {
        self.focused = None;
    }

    /// Month title with prev/next navigation arrows.
    ///
    /// Returns true when the view month changed. Arrow-driven changes reset
    /// the keyboard cursor.
    pub(crate) fn show_header(
        &mut self,
        ui: &mut egui::Ui,
        view_month: &mut ViewMonth,
        config: &GridConfig<'_>,
    ) -> bool {
        let mut changed = false;

        let prev_allowed = !config.disabled
            && config
                .min_view_month
                .map_or(true, |floor| view_month.prev() >= floor);
        let next_allowed = !config.disabled;

        let grid_width = 7.0 * CELL_WIDTH + 6.0 * CELL_SPACING;

        ui.horizontal(|ui| {
            if ui
                .add_enabled(prev_allowed, egui::Button::new("◀").small())
                .clicked()
            {
                *view_month = view_month.prev();
                self.reset_focus();
                changed = true;
            }

            let title = format!(
                "{} {}",
                config.locale.month_name(view_month.month),
                view_month.year
            );
            ui.add_sized(
                Vec2::new(grid_width - 2.0 * 24.0, 20.0),
                egui::Label::new(
                    egui::RichText::new(title)
                        .size(14.0)
                        .color(config.palette.text)
                        .strong(),
                ),
            );

            if ui
                .add_enabled(next_allowed, egui::Button::new("▶").small())
                .clicked()
            {
                *view_month = view_month.next();
                self.reset_focus();
                changed = true;
            }
        });

        changed
    }

    /// Keyboard navigation: arrows move the cursor by ±1 day (left/right)
    /// or ±7 days (up/down); Enter/Space commits the focused day under the
    /// same disabled rules as a click. Moving the cursor outside the view
    /// month retargets the view month to follow it.
    pub(crate) fn handle_keyboard(
        &mut self,
        ui: &egui::Ui,
        view_month: &mut ViewMonth,
        config: &GridConfig<'_>,
    ) -> (Option<NaiveDate>, bool) {
        if config.disabled {
            return (None, false);
        }

        let (delta, commit) = ui.input(|i| {
            let mut delta = 0i64;
            if i.key_pressed(egui::Key::ArrowLeft) {
                delta -= 1;
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                delta += 1;
            }
            if i.key_pressed(egui::Key::ArrowUp) {
                delta -= 7;
            }
            if i.key_pressed(egui::Key::ArrowDown) {
                delta += 7;
            }
            let commit = i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space);
            (delta, commit)
        });

        let mut month_changed = false;

        if delta != 0 {
            match self.focused {
                Some(current) => {
                    let target = current + Duration::days(delta);
                    self.focused = Some(target);
                    if !view_month.contains(target) {
                        // Focus-driven change: the grid follows the cursor,
                        // and the cursor survives the month switch.
                        *view_month = ViewMonth::from_date(target);
                        month_changed = true;
                    }
                }
                None => {
                    // First arrow press lands the cursor without moving it:
                    // on a visible selected day if any, else on day 1.
                    let landing = config
                        .selected
                        .iter()
                        .copied()
                        .find(|d| view_month.contains(*d))
                        .unwrap_or_else(|| view_month.first_day());
                    self.focused = Some(landing);
                }
            }
        }

        let mut picked = None;
        if commit {
            if let Some(focused) = self.focused {
                if view_month.contains(focused) && !date::is_disabled(focused, config.bounds) {
                    picked = Some(focused);
                }
            }
        }

        (picked, month_changed)
    }

    /// Weekday header row plus the 42 day/placeholder cells.
    ///
    /// Returns the clicked day (if any) and the day hovered this frame.
    pub(crate) fn show_cells(
        &mut self,
        ui: &mut egui::Ui,
        id_salt: &str,
        view_month: ViewMonth,
        config: &GridConfig<'_>,
    ) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let palette = config.palette;
        let slots = month_slots(view_month, config.week_starts_on);

        let mut clicked = None;
        let mut hovered_now = None;

        egui::Grid::new(format!("{id_salt}_cells"))
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                // Weekday labels, rotated by the week-start offset
                for name in config.locale.weekday_names(config.week_starts_on) {
                    ui.allocate_ui_with_layout(
                        Vec2::new(CELL_WIDTH, 18.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            ui.label(
                                egui::RichText::new(name)
                                    .size(11.0)
                                    .color(palette.header_text)
                                    .strong(),
                            );
                        },
                    );
                }
                ui.end_row();

                for (slot, cell) in slots.iter().enumerate() {
                    match cell {
                        None => {
                            // Placeholder cell: never selectable, never focusable
                            let (rect, _response) = ui.allocate_exact_size(
                                Vec2::new(CELL_WIDTH, CELL_HEIGHT),
                                Sense::hover(),
                            );
                            ui.painter().rect_filled(rect, 2.0, palette.placeholder_bg);
                        }
                        Some(cell_date) => {
                            let (cell_clicked, cell_hovered) =
                                self.show_day_cell(ui, *cell_date, config);
                            if cell_clicked {
                                clicked = Some(*cell_date);
                            }
                            if cell_hovered {
                                hovered_now = Some(*cell_date);
                            }
                        }
                    }

                    if (slot + 1) % 7 == 0 {
                        ui.end_row();
                    }
                }
            });

        (clicked, hovered_now)
    }

    /// Render one day cell, returning (clicked, hovered).
    fn show_day_cell(
        &mut self,
        ui: &mut egui::Ui,
        cell_date: NaiveDate,
        config: &GridConfig<'_>,
    ) -> (bool, bool) {
        let palette = config.palette;
        let day_disabled = config.disabled || date::is_disabled(cell_date, config.bounds);
        let state = self.cell_state(cell_date, day_disabled, config);

        let (rect, response) = ui.allocate_exact_size(
            Vec2::new(CELL_WIDTH, CELL_HEIGHT),
            Sense::click().union(Sense::hover()),
        );

        let bg = match state {
            CellState::Selected => palette.selected_bg,
            CellState::Highlighted => palette.highlight_bg,
            CellState::Focused | CellState::Disabled | CellState::Default => palette.day_bg,
        };
        ui.painter().rect_filled(rect, 3.0, bg);
        ui.painter()
            .rect_stroke(rect, 3.0, Stroke::new(1.0, palette.border));

        if state == CellState::Focused {
            ui.painter()
                .rect_stroke(rect, 3.0, Stroke::new(2.0, palette.focus_ring));
        }

        if response.hovered() && !day_disabled {
            ui.painter()
                .rect_stroke(rect, 3.0, Stroke::new(2.0, palette.hover_border));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        let text_color = match state {
            CellState::Selected => palette.selected_text,
            CellState::Disabled => palette.disabled_text,
            _ => palette.text,
        };
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            format!("{}", cell_date.day()),
            FontId::proportional(13.0),
            text_color,
        );

        let mut clicked = false;
        if response.clicked() && !day_disabled {
            self.focused = Some(cell_date);
            clicked = true;
        }

        (clicked, response.hovered())
    }

    fn cell_state(
        &self,
        cell_date: NaiveDate,
        day_disabled: bool,
        config: &GridConfig<'_>,
    ) -> CellState {
        if config.selected.iter().any(|d| date::is_same_day(*d, cell_date)) {
            CellState::Selected
        } else if config
            .highlighted
            .iter()
            .any(|d| date::is_same_day(*d, cell_date))
        {
            CellState::Highlighted
        } else if self.focused == Some(cell_date) {
            CellState::Focused
        } else if day_disabled {
            CellState::Disabled
        } else {
            CellState::Default
        }
    }

    /// Fold this frame's hover target into enter/leave transitions.
    pub(crate) fn hover_transitions(
        &mut self,
        hovered_now: Option<NaiveDate>,
    ) -> (Option<NaiveDate>, Option<NaiveDate>) {
        if hovered_now == self.hovered {
            return (None, None);
        }
        let left = self.hovered;
        self.hovered = hovered_now;
        (hovered_now, left)
    }
}

/// A month grid that owns its view month. Used directly for single-date
/// pickers; the range picker uses [`super::DualCalendarGrid`] instead.
pub struct CalendarGrid {
    id_salt: String,
    view_month: ViewMonth,
    core: GridCore,
}

impl CalendarGrid {
    pub fn new(id_salt: impl Into<String>, initial: ViewMonth) -> Self {
        Self {
            id_salt: id_salt.into(),
            view_month: initial,
            core: GridCore::default(),
        }
    }

    pub fn view_month(&self) -> ViewMonth {
        self.view_month
    }

    /// Retarget the grid from outside (e.g. reopening the picker on a new
    /// committed value). Non-focus-driven, so the keyboard cursor resets.
    pub fn set_view_month(&mut self, month: ViewMonth) {
        if month != self.view_month {
            self.view_month = month;
            self.core.reset_focus();
        }
    }

    pub fn focused(&self) -> Option<NaiveDate> {
        self.core.focused()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, config: &GridConfig<'_>) -> GridResult {
        let mut result = GridResult::default();

        let (key_picked, key_month_changed) =
            self.core
                .handle_keyboard(ui, &mut self.view_month, config);
        result.picked = key_picked;
        result.month_changed |= key_month_changed;

        ui.vertical(|ui| {
            result.month_changed |= self.core.show_header(ui, &mut self.view_month, config);
            let (clicked, hovered_now) =
                self.core
                    .show_cells(ui, &self.id_salt, self.view_month, config);
            if clicked.is_some() {
                result.picked = clicked;
            }
            let (entered, left) = self.core.hover_transitions(hovered_now);
            result.hover_entered = entered;
            result.hover_left = left;
        });

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::locale::Locale;
    use crate::widgets::palette::CellPalette;
    use crate::widgets::theme::PickerTheme;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_is_always_42_slots() {
        let slots = month_slots(ViewMonth::new(2024, 2), 0);
        assert_eq!(slots.len(), GRID_CELLS);
    }

    #[test]
    fn test_february_2024_week_starting_sunday() {
        // Leap-year February starting on a Thursday: 4 leading placeholders,
        // 29 day cells, the rest trailing placeholders.
        let slots = month_slots(ViewMonth::new(2024, 2), 0);
        assert!(slots[..4].iter().all(Option::is_none));
        assert_eq!(slots[4], Some(date(2024, 2, 1)));
        assert_eq!(slots.iter().flatten().count(), 29);
        assert_eq!(slots[4 + 28], Some(date(2024, 2, 29)));
        assert!(slots[4 + 29..].iter().all(Option::is_none));
    }

    #[test]
    fn test_week_start_offset_shifts_leading_placeholders() {
        // Monday start: Thursday becomes column 3
        let slots = month_slots(ViewMonth::new(2024, 2), 1);
        assert!(slots[..3].iter().all(Option::is_none));
        assert_eq!(slots[3], Some(date(2024, 2, 1)));
    }

    #[test]
    fn test_day_cells_are_consecutive() {
        let slots = month_slots(ViewMonth::new(2024, 7), 0);
        let days: Vec<NaiveDate> = slots.iter().flatten().copied().collect();
        assert_eq!(days.len(), 31);
        for pair in days.windows(2) {
            assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
        }
    }

    fn config<'a>(
        selected: &'a [NaiveDate],
        highlighted: &'a [NaiveDate],
        bounds: &'a DisabledDates,
        palette: CellPalette,
        locale: &'a Locale,
    ) -> GridConfig<'a> {
        GridConfig {
            selected,
            highlighted,
            bounds,
            disabled: false,
            week_starts_on: 0,
            min_view_month: None,
            locale,
            palette,
        }
    }

    #[test]
    fn test_cell_state_precedence() {
        let palette = CellPalette::from_theme(&PickerTheme::light());
        let locale = Locale::default();
        let day = date(2024, 3, 15);
        let selected = [day];
        let highlighted = [day];
        let bounds = DisabledDates {
            dates: vec![day],
            ..Default::default()
        };

        let mut core = GridCore::default();
        core.focused = Some(day);

        // Everything applies at once: selected wins
        let cfg = config(&selected, &highlighted, &bounds, palette, &locale);
        assert_eq!(core.cell_state(day, true, &cfg), CellState::Selected);

        // Drop selected: highlighted wins
        let cfg = config(&[], &highlighted, &bounds, palette, &locale);
        assert_eq!(core.cell_state(day, true, &cfg), CellState::Highlighted);

        // Drop highlighted: focused wins over disabled
        let cfg = config(&[], &[], &bounds, palette, &locale);
        assert_eq!(core.cell_state(day, true, &cfg), CellState::Focused);

        // No focus: disabled
        core.focused = None;
        assert_eq!(core.cell_state(day, true, &cfg), CellState::Disabled);

        // Nothing applies
        let clean = DisabledDates::default();
        let cfg = config(&[], &[], &clean, palette, &locale);
        assert_eq!(core.cell_state(day, false, &cfg), CellState::Default);
    }
}
