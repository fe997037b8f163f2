// Gateway module for the assistant backends

mod gemini;
mod traits;

pub use gemini::GeminiClient;
pub use traits::Assistant;
