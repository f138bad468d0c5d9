//! # deckcheck
//!
//! Slide-deck content extraction and fact-checking for PPTX presentations.
//!
//! The core of the crate parses a presentation archive, pulls out slide text
//! runs in document order and embedded images as base64 data URIs. On top of
//! that sits a pipeline that transcribes optional narration audio through a
//! speech-to-text service and asks a language model for a factual-accuracy
//! report on the combined content.
//!
//! ## Quick Start
//!
//! ```no_run
//! use deckcheck::extract_content;
//!
//! let result = extract_content("talk.pptx")?;
//! for text in &result.texts {
//!     println!("{}", text);
//! }
//! for image in &result.images {
//!     println!("{} ({} chars inline)", image.filename, image.data_uri.len());
//! }
//! # Ok::<(), deckcheck::Error>(())
//! ```
//!
//! ## Fact-checking
//!
//! ```no_run
//! use deckcheck::factcheck::FactChecker;
//! use deckcheck::llm::LlmConfig;
//! use deckcheck::stt::SttConfig;
//!
//! # async fn run() -> deckcheck::Result<()> {
//! let checker = FactChecker::new(SttConfig::new("aai-key"), LlmConfig::new("gemini-key"));
//! let report = checker.run("talk.pptx", None).await?;
//! println!("{}", report.fact_check);
//! # Ok(())
//! # }
//! ```
//!
//! Extraction is all-or-nothing per call: a corrupt archive, unreadable
//! entry, or malformed slide aborts with a typed [`Error`] and no partial
//! result is returned.

pub mod container;
pub mod error;
pub mod extract;
pub mod factcheck;
pub mod llm;
pub mod media;
pub mod slide;
pub mod stt;

// Re-exports
pub use container::PptxContainer;
pub use error::{Error, Result};
pub use extract::{extract_content, DeckExtractor, ExtractionResult};
pub use factcheck::{FactCheckReport, FactChecker};
pub use media::ExtractedImage;
