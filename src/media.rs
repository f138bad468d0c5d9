//! Media part filtering and inline data-URI encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Directory holding embedded media inside the package.
const MEDIA_PREFIX: &str = "ppt/media/";

/// Image extensions recognized as extractable media.
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpeg", "jpg", "gif"];

/// Returns true for entries under `ppt/media/` with a recognized image
/// extension (matched case-insensitively).
pub fn is_media_part(path: &str) -> bool {
    if !path.starts_with(MEDIA_PREFIX) {
        return false;
    }
    match extension(path) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// An embedded image extracted from the archive.
///
/// `data_uri` serializes under the field name `base64` for caller
/// compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedImage {
    /// Basename of the media entry path (no directory).
    pub filename: String,
    /// `data:image/<subtype>;base64,<data>` with the raw entry bytes inlined.
    #[serde(rename = "base64")]
    pub data_uri: String,
}

/// Encode one media entry as an inline image.
///
/// The MIME subtype is the lower-cased file extension; `jpg` stays `jpg`,
/// it is never normalized to `jpeg`.
pub fn encode_image(path: &str, data: &[u8]) -> ExtractedImage {
    let filename = path.rsplit('/').next().unwrap_or(path).to_string();
    let subtype = extension(path).unwrap_or_default().to_lowercase();
    let data_uri = format!("data:image/{};base64,{}", subtype, STANDARD.encode(data));
    ExtractedImage { filename, data_uri }
}

/// Extension characters after the final `.`, if any.
fn extension(path: &str) -> Option<&str> {
    let basename = path.rsplit('/').next().unwrap_or(path);
    basename.rsplit_once('.').map(|(_, ext)| ext)
}
