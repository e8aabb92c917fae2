use crate::upload::UploadStage;

/// Receives stage changes of an outstanding run.
pub trait UploadProgressPort: Send + Sync {
    fn report(&self, stage: &UploadStage);
}
