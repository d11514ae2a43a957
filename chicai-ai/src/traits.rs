use async_trait::async_trait;
use serde_json::Value;

/// Raw transport to a generative model backend.
///
/// Takes a complete `generateContent` request body and hands back the decoded
/// response body. Errors that the backend reported itself are returned as
/// `chicai_common::Error` values inside the `anyhow::Error` so callers can
/// recover them with `downcast`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn generate_content(&self, model: &str, body: Value) -> anyhow::Result<Value>;
}
