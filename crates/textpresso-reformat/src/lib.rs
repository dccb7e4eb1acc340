//! Textpresso Query Reformatter
//!
//! Turns a free-text question about plant genetics research into a structured
//! JSON request for the Textpresso literature-search API. A language model maps
//! the text onto the fixed query schema; a post-processing overlay then forces
//! the credential, include-flags, and result count to the caller-supplied
//! values regardless of what the model produced.
//!
//! # Features
//!
//! - **Prompt-to-schema mapping**: fixed instruction block covering the
//!   envelope schema and keyword-construction rules (AND/OR joining,
//!   parenthetical grouping, filler-word removal)
//! - **Caller-controlled overlay**: `token`, the three include-flags, and
//!   `count` always reflect the caller, never the model
//! - **Open envelope**: everything else the model emits passes through
//!   unexamined
//!
//! # Example
//!
//! ```no_run
//! use textpresso_reformat::{Config, QueryReformatter, ReformatOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let reformatter = QueryReformatter::new(Config::default());
//!     let request = reformatter
//!         .reformat(
//!             "maize plant height",
//!             "textpresso-access-token",
//!             "model-api-key",
//!             &ReformatOptions::default(),
//!         )
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&request)?);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
mod prompt;
pub mod reformat;

pub use client::ChatClient;
pub use config::Config;
pub use error::{ClientError, ReformatError};
pub use models::SearchRequest;
pub use reformat::{QueryReformatter, ReformatOptions};
