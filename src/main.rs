// Range Calendar Demo Application
// Main entry point

use std::time::{Duration as StdDuration, Instant};

use chrono::{Duration, Local, NaiveDate};

use range_calendar::models::locale::Locale;
use range_calendar::models::selection::{DisabledDates, SelectionRange, ViewMonth};
use range_calendar::models::settings::PickerSettings;
use range_calendar::widgets::calendar_grid::{CalendarGrid, GridConfig};
use range_calendar::widgets::palette::CellPalette;
use range_calendar::widgets::popover::{CloseFade, HoverDelay};
use range_calendar::widgets::positioner::FloatingPositioner;
use range_calendar::widgets::range_picker::{RangePicker, RangePickerConfig};
use range_calendar::widgets::theme::PickerTheme;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Range Calendar demo");

    let settings = PickerSettings::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Range Calendar Demo",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new(settings)))),
    )
}

struct DemoApp {
    settings: PickerSettings,
    theme: PickerTheme,
    locale: Locale,
    bounds: DisabledDates,
    pickers_disabled: bool,

    /// Committed value held by the host; the picker only reads it
    committed_range: SelectionRange,
    range_picker: RangePicker,

    /// Inline single-date picker built directly on the month grid
    single_grid: CalendarGrid,
    single_value: Option<NaiveDate>,
    last_hovered: Option<NaiveDate>,

    /// Hover-triggered help popover with debounced open/close
    help_delay: HoverDelay,
    help_fade: CloseFade,
    help_was_open: bool,
}

impl DemoApp {
    fn new(settings: PickerSettings) -> Self {
        let theme = PickerTheme::from_tag(&settings.theme);
        let locale = Locale::from_tag(&settings.locale);
        let today = Local::now().date_naive();

        // Demo bounds: ±1 year around today, with a couple of blocked days
        let now = Local::now().fixed_offset();
        let bounds = DisabledDates {
            min: Some(now - Duration::days(365)),
            max: Some(now + Duration::days(365)),
            dates: vec![today + Duration::days(3), today + Duration::days(4)],
        };

        Self {
            theme,
            locale,
            bounds,
            pickers_disabled: false,
            committed_range: SelectionRange::empty(),
            range_picker: RangePicker::new("demo_range"),
            single_grid: CalendarGrid::new("demo_single", ViewMonth::from_date(today)),
            single_value: None,
            last_hovered: None,
            help_delay: HoverDelay::new(
                StdDuration::from_millis(150),
                StdDuration::from_millis(250),
            ),
            help_fade: CloseFade::new(StdDuration::from_millis(180)),
            help_was_open: false,
            settings,
        }
    }

    /// Hover help: debounced open/close, and the popover stays in the
    /// render tree until its fade-out elapses.
    fn show_hover_help(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        let label = ui.label(
            egui::RichText::new("ⓘ hover for tips")
                .size(11.0)
                .color(self.theme.text_secondary),
        );

        if label.hovered() {
            self.help_delay.request_open(now);
        } else {
            self.help_delay.request_close(now);
        }

        let open = self.help_delay.tick(now);
        if open {
            self.help_fade.cancel();
        } else if self.help_was_open {
            self.help_fade.begin(now);
        }
        self.help_was_open = open;

        if open || self.help_fade.still_rendered(now) {
            let ctx = ui.ctx().clone();
            let size = egui::Vec2::new(260.0, 70.0);
            let positioner = FloatingPositioner::new(self.settings.mobile_breakpoint);
            let spec = positioner.compute(label.rect, size, ctx.screen_rect());
            let pos = positioner.anchor_pos(&spec, label.rect, size, ctx.screen_rect());

            egui::Area::new(egui::Id::new("demo_hover_help"))
                .order(egui::Order::Tooltip)
                .fixed_pos(pos)
                .show(&ctx, |ui| {
                    egui::Frame::popup(&ctx.style())
                        .fill(self.theme.panel_background)
                        .show(ui, |ui| {
                            ui.set_max_width(size.x);
                            ui.label("Click a start and an end day to pick a range.");
                            ui.label("Picking the end before the start swaps them.");
                        });
                });
            ctx.request_repaint();
        } else if let Some(deadline) = self.help_delay.next_deadline() {
            ui.ctx()
                .request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.theme.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Range Calendar");
            ui.add_space(8.0);
            ui.checkbox(&mut self.pickers_disabled, "Disable pickers");
            ui.add_space(12.0);

            ui.label(egui::RichText::new("Date range").strong());
            ui.horizontal(|ui| {
                let config = RangePickerConfig {
                    bounds: &self.bounds,
                    disabled: self.pickers_disabled,
                    week_starts_on: self.settings.first_day_of_week,
                    locale: &self.locale,
                    theme: &self.theme,
                    mobile_breakpoint: self.settings.mobile_breakpoint,
                };
                let response = self.range_picker.show(ui, &self.committed_range, &config);

                if let Some(range) = response.committed {
                    log::info!("host received new range: {:?}..{:?}", range.from, range.to);
                    self.committed_range = range;
                }
                if let Some(date) = response.hover_entered {
                    self.last_hovered = Some(date);
                } else if response.hover_left.is_some() {
                    self.last_hovered = None;
                }

                if self.committed_range.is_complete()
                    && !self.range_picker.is_open()
                    && ui
                        .add_enabled(!self.pickers_disabled, egui::Button::new("Edit end date"))
                        .clicked()
                {
                    self.range_picker.open_for_end_edit(self.committed_range);
                }
            });

            if let Some(date) = self.last_hovered {
                ui.label(
                    egui::RichText::new(format!("hovering {date}"))
                        .size(11.0)
                        .color(self.theme.text_secondary),
                );
            }

            ui.add_space(4.0);
            self.show_hover_help(ui);

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(16.0);

            ui.label(egui::RichText::new("Single date").strong());
            let selected: Vec<NaiveDate> = self.single_value.into_iter().collect();
            let config = GridConfig {
                selected: &selected,
                highlighted: &[],
                bounds: &self.bounds,
                disabled: self.pickers_disabled,
                week_starts_on: self.settings.first_day_of_week,
                min_view_month: None,
                locale: &self.locale,
                palette: CellPalette::from_theme(&self.theme),
            };
            let result = self.single_grid.show(ui, &config);
            if let Some(date) = result.picked {
                self.single_value = Some(date);
            }
            if let Some(date) = self.single_value {
                ui.label(format!("picked: {date}"));
            }
        });
    }
}
