//! Speech-to-text client for narration audio (AssemblyAI).
//!
//! Transcription is a three-step exchange: upload the raw audio bytes, create
//! a transcript job for the uploaded URL, then poll the job until it reports
//! `completed` or `failed`. Audio is uploaded as-is; codec conversion is the
//! caller's concern.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default AssemblyAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com/v2";

/// Placeholder returned when a completed transcript has no text.
const EMPTY_TRANSCRIPT: &str = "No transcription available.";

/// Configuration for the speech-to-text service.
///
/// The API key is always injected by the caller; it is never read from the
/// environment or baked in here.
#[derive(Debug, Clone)]
pub struct SttConfig {
    pub api_key: String,
    pub base_url: String,
    /// Delay between transcript status polls.
    pub poll_interval: Duration,
}

impl SttConfig {
    /// Config with the default endpoint and a 5-second poll interval.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    id: String,
    status: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the transcription service.
pub struct SttClient {
    http: reqwest::Client,
    config: SttConfig,
}

impl SttClient {
    pub fn new(config: SttConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Transcribe one audio buffer to text.
    ///
    /// Fails with [`Error::Transcription`] if the service reports the job
    /// failed, or [`Error::Http`] on transport problems. A completed job
    /// with empty text yields a fixed placeholder string.
    pub async fn transcribe(&self, audio: Vec<u8>) -> Result<String> {
        log::info!("uploading {} bytes of audio for transcription", audio.len());

        let upload: UploadResponse = self
            .http
            .post(format!("{}/upload", self.config.base_url))
            .header("authorization", &self.config.api_key)
            .header("content-type", "application/octet-stream")
            .body(audio)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let created: TranscriptResponse = self
            .http
            .post(format!("{}/transcript", self.config.base_url))
            .header("authorization", &self.config.api_key)
            .json(&TranscriptRequest {
                audio_url: &upload.upload_url,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        log::debug!("transcript {} queued ({})", created.id, created.status);

        loop {
            let job: TranscriptResponse = self
                .http
                .get(format!("{}/transcript/{}", self.config.base_url, created.id))
                .header("authorization", &self.config.api_key)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            match job.status.as_str() {
                "completed" => {
                    return Ok(job
                        .text
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| EMPTY_TRANSCRIPT.to_string()));
                }
                "failed" | "error" => {
                    return Err(Error::Transcription(
                        job.error
                            .unwrap_or_else(|| format!("service reported status '{}'", job.status)),
                    ));
                }
                _ => tokio::time::sleep(self.config.poll_interval).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SttConfig::new("key-123");
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.poll_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_upload_response_parses() {
        let json = r#"{"upload_url": "https://cdn.example/upload/abc"}"#;
        let parsed: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.upload_url, "https://cdn.example/upload/abc");
    }

    #[test]
    fn test_transcript_response_parses_sparse_fields() {
        let json = r#"{"id": "t1", "status": "queued"}"#;
        let parsed: TranscriptResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "t1");
        assert_eq!(parsed.status, "queued");
        assert!(parsed.text.is_none());
        assert!(parsed.error.is_none());

        let json = r#"{"id": "t1", "status": "completed", "text": "hello world"}"#;
        let parsed: TranscriptResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text.as_deref(), Some("hello world"));
    }

    #[test]
    fn test_transcript_request_body() {
        let body = serde_json::to_value(TranscriptRequest {
            audio_url: "https://cdn.example/upload/abc",
        })
        .unwrap();
        assert_eq!(body["audio_url"], "https://cdn.example/upload/abc");
    }
}
