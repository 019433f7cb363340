//! QuickAid Common Library
//!
//! CLIとWeb(WASM)で共有される型とルール

pub mod endpoint;
pub mod error;
pub mod notification;
pub mod panel;
pub mod progress;
pub mod render;
pub mod symptoms;
pub mod tracker;
pub mod upload;

pub use endpoint::{Endpoint, HealthStatus, SymptomsRequest};
pub use error::{Error, Result, ValidationError};
pub use notification::{Notification, NotificationQueue, Severity};
pub use panel::{Panel, PanelState, Shortcut};
pub use progress::ProgressSimulation;
pub use render::{pretty_json, RenderedResult};
pub use symptoms::{validate_symptoms, CounterState, SymptomCounter};
pub use tracker::{Channel, RequestTracker, Ticket};
pub use upload::{format_file_size, validate_file, FileInfo};
