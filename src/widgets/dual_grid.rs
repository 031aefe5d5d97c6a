//! Dual-pane month grid.
//!
//! Same per-cell behavior as [`CalendarGrid`], but the view month is
//! supplied externally (the range controller owns both pane months) and a
//! `min_view_month` floor in the config keeps the second pane from
//! navigating earlier than the first.

use chrono::NaiveDate;

use crate::models::selection::ViewMonth;

use super::calendar_grid::{GridConfig, GridCore, GridResult};

pub struct DualCalendarGrid {
    id_salt: String,
    core: GridCore,
}

impl DualCalendarGrid {
    pub fn new(id_salt: impl Into<String>) -> Self {
        Self {
            id_salt: id_salt.into(),
            core: GridCore::default(),
        }
    }

    pub fn focused(&self) -> Option<NaiveDate> {
        self.core.focused()
    }

    /// Clear the keyboard cursor after a non-focus-driven month change
    /// (the controller reseeding pane months).
    pub fn reset_focus(&mut self) {
        self.core.reset_focus();
    }

    /// Render one pane. `view_month` is borrowed from the controller;
    /// `keyboard_active` routes key events to at most one pane at a time.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        view_month: &mut ViewMonth,
        keyboard_active: bool,
        config: &GridConfig<'_>,
    ) -> GridResult {
        let mut result = GridResult::default();

        if keyboard_active {
            let (picked, month_changed) = self.core.handle_keyboard(ui, view_month, config);
            result.picked = picked;
            result.month_changed |= month_changed;
        }

        ui.vertical(|ui| {
            result.month_changed |= self.core.show_header(ui, view_month, config);
            let (clicked, hovered_now) =
                self.core.show_cells(ui, &self.id_salt, *view_month, config);
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
