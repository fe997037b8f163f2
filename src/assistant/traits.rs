use async_trait::async_trait;

/// Core trait an assistant backend must implement
///
/// `ask` never fails: backends recover every failure into user-visible
/// text, so callers print whatever comes back.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Relay a free-text prompt and return the answer (or a fallback string)
    async fn ask(&self, prompt: &str) -> String;

    /// Name of the backing model
    fn name(&self) -> &str;
}
