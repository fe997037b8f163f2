/// Constants module to avoid magic numbers in the codebase

// Assistant endpoint
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

// Timeouts
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

// User-facing fallback strings for failed assistant calls
pub const FALLBACK_UNAVAILABLE: &str = "Error: Unable to fetch response.";
pub const FALLBACK_NO_CANDIDATE: &str = "Sorry, I couldn't process that.";

// Output formatting
pub const DEFAULT_PRECISION: usize = 2;
