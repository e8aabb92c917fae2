use serde::Deserialize;

use super::UploadError;

/// What the transport got back, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    pub status: u16,
    pub body: String,
}

impl UploadResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Success body of `POST /api/upload`.
///
/// Other fields the service returns (`fileName`, `size`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmpfileResponse {
    pub download_link: String,
    #[serde(default)]
    pub download_link_encoded: Option<String>,
}

impl TmpfileResponse {
    /// The shareable link: the encoded form when the service sent one.
    pub fn canonical_link(&self) -> &str {
        match self.download_link_encoded.as_deref() {
            Some(encoded) if !encoded.is_empty() => encoded,
            _ => &self.download_link,
        }
    }
}

/// Turn a raw response into the canonical link, or the error to show.
pub fn interpret_response(response: &UploadResponse) -> Result<String, UploadError> {
    if !response.is_success() {
        return Err(UploadError::http_status(response.status, &response.body));
    }

    let parsed: TmpfileResponse = serde_json::from_str(&response.body)
        .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;

    let link = parsed.canonical_link().trim();
    if link.is_empty() {
        return Err(UploadError::MalformedResponse(
            "response did not contain a download link".to_string(),
        ));
    }
    Ok(link.to_string())
}
