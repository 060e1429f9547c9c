//! Display-only view models derived from responses and scenario inputs.

pub mod assignment_table;
pub mod error_display;
pub mod margin_chips;
pub mod ml_badge;
pub mod result_panel;
pub mod slider_field;

pub use assignment_table::{AssignmentRow, AssignmentView, LegLine};
pub use error_display::ErrorDisplay;
pub use margin_chips::MARGIN_PRESETS;
pub use ml_badge::{BadgeTone, MlBadge};
pub use result_panel::PriceView;
pub use slider_field::SliderField;
