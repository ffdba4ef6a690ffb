//! Typed async client for the AI note-taking backend.
//!
//! ```no_run
//! # async fn demo() -> notes_client::Result<()> {
//! use notes_client::{ClientConfig, NotesClient};
//! use notes_client::types::CreateNoteData;
//!
//! let client = NotesClient::new(ClientConfig::from_env())?;
//! let note = client.notes().create(&CreateNoteData::new("Todo", "buy milk")).await?;
//! let summary = client.ai().summarize(&note.content).await?;
//! println!("{}", summary.summary);
//! # Ok(())
//! # }
//! ```

pub mod ai;
pub mod client;
pub mod config;
pub mod error;
pub mod notes;
pub mod search;

#[cfg(test)]
mod test_support;

pub use client::NotesClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use notes_client_types as types;
