//! 扫描产物存储
//!
//! 每个扫描标识对应根目录下的一个子目录。每个产物先写入同目录下的
//! 临时文件，同步到磁盘后再重命名为最终文件名，读者永远看不到写了
//! 一半的产物。

use crate::error::FileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// 扫描标识最大长度
const MAX_SCAN_ID_LEN: usize = 128;

/// 产物类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// 房间元数据 JSON
    Metadata,
    /// SVG 平面图
    Floorplan,
    /// 上传清单
    Manifest,
}

impl ArtifactKind {
    /// 扫描目录内的文件名
    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::Metadata => "room.json",
            ArtifactKind::Floorplan => "floorplan.svg",
            ArtifactKind::Manifest => "manifest.json",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Metadata => "metadata",
            ArtifactKind::Floorplan => "floorplan",
            ArtifactKind::Manifest => "manifest",
        };
        f.write_str(name)
    }
}

/// 扫描标识
///
/// 只允许 ASCII 字母、数字、`-` 和 `_`，可直接作为目录名。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScanId(String);

impl ScanId {
    pub fn new(id: impl Into<String>) -> Result<Self, FileError> {
        let id = id.into();
        if id.is_empty() || id.len() > MAX_SCAN_ID_LEN {
            return Err(FileError::InvalidScanId(id));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(FileError::InvalidScanId(id));
        }
        Ok(Self(id))
    }

    /// 生成随机标识（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ScanId {
    type Error = FileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScanId> for String {
    fn from(id: ScanId) -> Self {
        id.0
    }
}

impl fmt::Display for ScanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 基于目录的产物存储
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 扫描目录
    pub fn scan_dir(&self, scan_id: &ScanId) -> PathBuf {
        self.root.join(scan_id.as_str())
    }

    /// 产物的最终路径
    pub fn artifact_path(&self, scan_id: &ScanId, kind: ArtifactKind) -> PathBuf {
        self.scan_dir(scan_id).join(kind.file_name())
    }

    /// 原子写入一个产物，返回最终路径
    ///
    /// 失败时临时文件被删除，已存在的同名产物保持不变。
    pub fn write_artifact(
        &self,
        scan_id: &ScanId,
        kind: ArtifactKind,
        bytes: &[u8],
    ) -> Result<PathBuf, FileError> {
        let dir = self.scan_dir(scan_id);
        let path = dir.join(kind.file_name());
        let failed = |source| FileError::WriteFailed {
            artifact: kind,
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&dir).map_err(failed)?;

        let temp = dir.join(format!(".{}.{}.tmp", kind.file_name(), Uuid::new_v4().simple()));
        if let Err(e) = write_synced(&temp, bytes).and_then(|_| fs::rename(&temp, &path)) {
            // 临时文件可能不存在，忽略清理错误
            fs::remove_file(&temp).ok();
            return Err(failed(e));
        }

        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        info!("Saved {} artifact for scan {}", kind, scan_id);
        Ok(path)
    }

    /// 读取一个已写入的产物
    pub fn read_artifact(
        &self,
        scan_id: &ScanId,
        kind: ArtifactKind,
    ) -> Result<Vec<u8>, FileError> {
        Ok(fs::read(self.artifact_path(scan_id, kind))?)
    }
}

/// 写入并同步到磁盘，文件句柄在返回前关闭
fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ArtifactStore {
        let root = std::env::temp_dir().join(format!(
            "roomscan-storage-{}-{}",
            name,
            Uuid::new_v4().simple()
        ));
        ArtifactStore::new(root)
    }

    #[test]
    fn test_scan_id_validation() {
        assert!(ScanId::new("scan_2024-01-01").is_ok());
        assert!(ScanId::new("").is_err());
        assert!(ScanId::new("../etc").is_err());
        assert!(ScanId::new("a/b").is_err());
        assert!(ScanId::new("x".repeat(129)).is_err());
        assert!(ScanId::new(ScanId::generate().to_string()).is_ok());
    }

    #[test]
    fn test_scan_id_serde() {
        let id = ScanId::new("living-room").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"living-room\"");

        assert!(serde_json::from_str::<ScanId>("\"bad id\"").is_err());
    }

    #[test]
    fn test_write_and_read_artifact() {
        let store = temp_store("write");
        let scan = ScanId::new("scan1").unwrap();

        let path = store.write_artifact(&scan, ArtifactKind::Metadata, b"{}").unwrap();
        assert_eq!(path, store.scan_dir(&scan).join("room.json"));
        assert_eq!(store.read_artifact(&scan, ArtifactKind::Metadata).unwrap(), b"{}");

        // 覆盖写入
        store.write_artifact(&scan, ArtifactKind::Metadata, b"[1]").unwrap();
        assert_eq!(store.read_artifact(&scan, ArtifactKind::Metadata).unwrap(), b"[1]");

        // 不残留临时文件
        let leftovers: Vec<_> = fs::read_dir(store.scan_dir(&scan))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());

        fs::remove_dir_all(store.root()).ok();
    }

    #[test]
    fn test_write_failure_names_artifact() {
        let store = temp_store("fail");
        let scan = ScanId::new("blocked").unwrap();

        // 扫描目录位置被普通文件占用
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.scan_dir(&scan), b"not a directory").unwrap();

        let err = store
            .write_artifact(&scan, ArtifactKind::Floorplan, b"<svg/>")
            .unwrap_err();
        assert_eq!(err.artifact(), Some(ArtifactKind::Floorplan));
        assert!(err.to_string().contains("floorplan"));

        fs::remove_dir_all(store.root()).ok();
    }
}
