//! UIコンポーネント

pub mod header;
pub mod image_panel;
pub mod image_preview;
pub mod notification_stack;
pub mod progress_bar;
pub mod results_panel;
pub mod shortcuts_help;
pub mod symptoms_panel;
pub mod upload_area;
