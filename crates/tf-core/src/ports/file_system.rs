use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub is_dir: bool,
    pub size_bytes: u64,
}

/// Local filesystem access needed by the file branch of an upload.
#[async_trait]
pub trait FileSystemPort: Send + Sync {
    /// `false` when the path is missing or cannot be checked.
    async fn exists(&self, path: &Path) -> bool;

    async fn stat(&self, path: &Path) -> Result<FileStat>;

    async fn read_all(&self, path: &Path) -> Result<Bytes>;
}
