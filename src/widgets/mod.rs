// Widget exports

pub mod calendar_grid;
pub mod dual_grid;
pub mod palette;
pub mod popover;
pub mod positioner;
pub mod range_picker;
pub mod theme;

pub use calendar_grid::{CalendarGrid, GridConfig, GridResult};
pub use dual_grid::DualCalendarGrid;
pub use popover::{CloseFade, HoverDelay};
pub use positioner::{Align, FloatingPositioner, PositionSpec, Side};
pub use range_picker::{RangePicker, RangeSelectionController, SelectionPhase};
pub use theme::PickerTheme;
