//! Fact-check pipeline: extraction, optional transcription, model review.

use crate::error::Result;
use crate::extract::{extract_content, ExtractionResult};
use crate::llm::{LlmClient, LlmConfig};
use crate::media::ExtractedImage;
use crate::stt::{SttClient, SttConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Transcript placeholder when the caller supplies no narration audio.
const NO_AUDIO: &str = "No audio provided.";

/// Fact-check output for one deck: model report plus everything that was
/// fed into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckReport {
    pub fact_check: String,
    pub texts: Vec<String>,
    pub images: Vec<ExtractedImage>,
    pub transcript: String,
}

/// Runs the end-to-end review of a slide deck.
pub struct FactChecker {
    stt: SttClient,
    llm: LlmClient,
}

impl FactChecker {
    pub fn new(stt_config: SttConfig, llm_config: LlmConfig) -> Self {
        Self {
            stt: SttClient::new(stt_config),
            llm: LlmClient::new(llm_config),
        }
    }

    /// Extract deck content, transcribe narration if present, and ask the
    /// model for a factual-accuracy report.
    ///
    /// Extraction failures abort before any network call is made.
    pub async fn run(
        &self,
        deck_path: impl AsRef<Path>,
        audio_path: Option<&Path>,
    ) -> Result<FactCheckReport> {
        let ExtractionResult { texts, images } = extract_content(deck_path)?;
        log::info!("deck extracted: {} text runs, {} images", texts.len(), images.len());

        let transcript = match audio_path {
            Some(path) => {
                let audio = fs::read(path)?;
                self.stt.transcribe(audio).await?
            }
            None => NO_AUDIO.to_string(),
        };

        let prompt = build_prompt(&texts, &transcript);
        let fact_check = self.llm.generate(&prompt).await?;

        Ok(FactCheckReport {
            fact_check,
            texts,
            images,
            transcript,
        })
    }
}

/// Assemble the review prompt from slide text and the narration transcript.
pub fn build_prompt(texts: &[String], transcript: &str) -> String {
    format!(
        "You are an expert fact checker. Here's a slide deck with optional spoken narration.\n\n\
         **Slide Content:**\n{}\n\n\
         **Narration Transcript:**\n{}\n\n\
         Please:\n\
         - Extract factual claims\n\
         - Classify each as Correct / Misleading / Incorrect\n\
         - Provide short explanations\n\n\
         Return result in clear bullet-point format.\n",
        texts.join("\n"),
        transcript
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_slide_text_and_transcript() {
        let texts = vec!["Revenue grew 20%".to_string(), "We are profitable".to_string()];
        let prompt = build_prompt(&texts, "we doubled revenue last year");

        assert!(prompt.contains("Revenue grew 20%\nWe are profitable"));
        assert!(prompt.contains("we doubled revenue last year"));
        assert!(prompt.contains("Correct / Misleading / Incorrect"));
    }

    #[test]
    fn test_prompt_with_no_content() {
        let prompt = build_prompt(&[], NO_AUDIO);
        assert!(prompt.contains("**Slide Content:**\n\n"));
        assert!(prompt.contains(NO_AUDIO));
    }

    #[test]
    fn test_report_serializes_with_base64_field() {
        let report = FactCheckReport {
            fact_check: "- All claims correct".to_string(),
            texts: vec!["hello".to_string()],
            images: vec![crate::media::encode_image("ppt/media/image1.png", &[1, 2])],
            transcript: NO_AUDIO.to_string(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["fact_check"], "- All claims correct");
        assert!(value["images"][0]["base64"].is_string());
        assert_eq!(value["transcript"], NO_AUDIO);
    }
}
