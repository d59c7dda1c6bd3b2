//! CLI command implementations.

mod access;
mod common;
mod config;
mod editable;
mod responses;
mod summary;
mod window;

pub use access::AccessCmd;
pub use config::ConfigCmd;
pub use editable::EditableCmd;
pub use responses::ResponsesCmd;
pub use summary::SummaryCmd;
pub use window::WindowCmd;
