//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal tab/mode selector with arrow markers
//! - `InputField` - Text input with focus handling and placeholder
//! - `StatusIndicator` - Spinner, error, and info lines

mod input_field;
mod status_indicator;
mod tab_selector;

pub use input_field::{render_input_field, visible_tail, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, TabItem};
