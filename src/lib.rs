pub mod app;
pub mod assistant;
pub mod cli;
pub mod constants;
pub mod convert;
pub mod utils;

pub use app::{load_config, Config};
pub use assistant::{Assistant, GeminiClient};
pub use convert::{convert, Category};
pub use utils::{AssistantError, ConvertError};
