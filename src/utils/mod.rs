// Gateway module for utils - all external access goes through these re-exports

mod errors;
mod logger;

pub use errors::{AssistantError, ConvertError};
pub use logger::init_logger;
