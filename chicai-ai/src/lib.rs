pub mod client;
pub mod models;
pub mod provider;
pub mod recommendation;
pub mod response;
pub mod traits;
pub mod tryon;

// Re-export public APIs
pub use client::AiClient;
pub use models::ProviderConfig;
pub use provider::GeminiProvider;
pub use traits::ModelProvider;
