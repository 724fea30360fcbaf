//! 文件操作错误定义

use crate::storage::ArtifactKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {artifact} artifact to {}: {source}", .path.display())]
    WriteFailed {
        artifact: ArtifactKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scan id: {0}")]
    InvalidScanId(String),

    #[error("Invalid capture: {0}")]
    InvalidCapture(#[from] roomscan_core::CaptureError),
}

impl FileError {
    /// 写入失败时对应的产物
    pub fn artifact(&self) -> Option<ArtifactKind> {
        match self {
            FileError::WriteFailed { artifact, .. } => Some(*artifact),
            _ => None,
        }
    }
}
