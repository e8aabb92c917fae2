use anyhow::Result;
use async_trait::async_trait;

use crate::upload::{SanitizedUpload, UploadResponse};

/// Sends an upload to the hosting service.
///
/// Returns whatever status and body came back; interpreting them is the
/// pipeline's job. `Err` means no response was received at all. Dropping the
/// returned future must abort the request.
#[async_trait]
pub trait UploadTransportPort: Send + Sync {
    async fn submit(&self, upload: &SanitizedUpload) -> Result<UploadResponse>;
}
