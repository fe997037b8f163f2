use thiserror::Error;

use crate::convert::Category;

/// Error type for the conversion library
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("unknown {category} unit '{unit}'")]
    UnknownUnit { unit: String, category: Category },
}

/// Error type for the assistant gateway
///
/// These never reach the user directly: `ask` recovers every variant into a
/// fixed user-facing string. The variants stay distinguishable for logging.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("assistant endpoint returned HTTP {status}")]
    Unavailable { status: u16 },

    #[error("assistant response did not contain a candidate")]
    MalformedResponse,

    #[error("network error: {0}")]
    Transport(String),
}
