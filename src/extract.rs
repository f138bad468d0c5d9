//! Deck content extraction: slide text runs plus embedded images.

use crate::container::PptxContainer;
use crate::error::Result;
use crate::media::{self, ExtractedImage};
use crate::slide;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Aggregate content pulled from one presentation archive.
///
/// `texts` holds every text run in slide order x in-slide document order;
/// `images` holds every recognized media entry as an inline data URI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub texts: Vec<String>,
    pub images: Vec<ExtractedImage>,
}

/// Extractor for slide-deck content.
///
/// Every call to [`extract`](DeckExtractor::extract) rescans the archive;
/// nothing is cached across calls. Failure is all-or-nothing: the first
/// unreadable entry or malformed slide aborts the call and any partial
/// accumulation is discarded.
pub struct DeckExtractor {
    container: PptxContainer,
}

impl DeckExtractor {
    /// Open a presentation archive for extraction.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            container: PptxContainer::open(path)?,
        })
    }

    /// Create an extractor from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            container: PptxContainer::from_bytes(data)?,
        })
    }

    /// Extract all slide text runs and embedded images.
    ///
    /// Slide parts, then media parts, are processed in archive iteration
    /// order. Slide numbering in entry paths is NOT consulted: if the
    /// archive lists slide2 before slide1, slide2's text comes first.
    pub fn extract(&self) -> Result<ExtractionResult> {
        let entries: Vec<String> = self.container.entry_names().to_vec();

        let mut texts = Vec::new();
        for entry in entries.iter().filter(|e| slide::is_slide_part(e)) {
            let xml = self.container.read_xml(entry)?;
            texts.extend(slide::extract_text_runs(entry, &xml)?);
        }

        let mut images = Vec::new();
        for entry in entries.iter().filter(|e| media::is_media_part(e)) {
            let data = self.container.read_bytes(entry)?;
            images.push(media::encode_image(entry, &data));
        }

        log::debug!(
            "extracted {} text runs and {} images from {} entries",
            texts.len(),
            images.len(),
            entries.len()
        );

        Ok(ExtractionResult { texts, images })
    }

    /// Get a reference to the underlying container.
    pub fn container(&self) -> &PptxContainer {
        &self.container
    }
}

/// Extract deck content from a file path in one call.
///
/// # Example
///
/// ```no_run
/// use deckcheck::extract_content;
///
/// let result = extract_content("talk.pptx")?;
/// println!("{} text runs, {} images", result.texts.len(), result.images.len());
/// # Ok::<(), deckcheck::Error>(())
/// ```
pub fn extract_content(path: impl AsRef<Path>) -> Result<ExtractionResult> {
    DeckExtractor::open(path)?.extract()
}
