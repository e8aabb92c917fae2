use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use tf_core::ports::{FileStat, FileSystemPort};
use tokio::fs;

/// Local filesystem access through `tokio::fs`.
pub struct TokioFileSystem;

#[async_trait]
impl FileSystemPort for TokioFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn stat(&self, path: &Path) -> Result<FileStat> {
        let meta = fs::metadata(path).await?;
        Ok(FileStat {
            is_dir: meta.is_dir(),
            size_bytes: meta.len(),
        })
    }

    async fn read_all(&self, path: &Path) -> Result<Bytes> {
        let data = fs::read(path).await?;
        Ok(Bytes::from(data))
    }
}
