//! Generative text service clients for Concierge.
//!
//! Every client implements [`concierge_interface::TextGenerator`].
//!
//! # Example
//!
//! ```no_run
//! use concierge_config::GeneratorConfig;
//! use concierge_core::CompletionRequest;
//! use concierge_interface::TextGenerator;
//! use concierge_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_config(&GeneratorConfig::default())?;
//! let request = CompletionRequest::builder()
//!     .model("gemini-2.5-flash")
//!     .prompt("Hello")
//!     .build()?;
//! let response = client.complete(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    Candidate, Content, GeminiClient, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part,
};
