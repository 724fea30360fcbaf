//! 扫描信息与上传清单

use crate::error::FileError;
use crate::record::{RoomDimensions, RoomExport};
use crate::storage::{ArtifactKind, ScanId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 上传时随产物一起提交的扫描信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanInfo {
    /// 房间名称
    pub room_name: String,

    /// 房间类型（卧室、厨房等）
    pub room_type: String,

    /// 用户标识
    pub user_id: String,

    /// 设备型号
    pub device_model: String,

    /// 扫描时间
    pub scanned_at: DateTime<Utc>,
}

impl Default for ScanInfo {
    fn default() -> Self {
        Self {
            room_name: "Untitled Room".to_string(),
            room_type: "other".to_string(),
            user_id: String::new(),
            device_model: String::new(),
            scanned_at: Utc::now(),
        }
    }
}

/// 上传清单
///
/// 在两个产物都写入之后最后写入，存在即表示扫描目录完整。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadManifest {
    pub scan_id: ScanId,
    pub info: ScanInfo,
    pub metadata_file: String,
    pub floorplan_file: String,
    pub dimensions: RoomDimensions,
    pub furniture_count: usize,
}

impl UploadManifest {
    pub fn new(scan_id: ScanId, info: ScanInfo, record: &RoomExport) -> Self {
        Self {
            scan_id,
            info,
            metadata_file: ArtifactKind::Metadata.file_name().to_string(),
            floorplan_file: ArtifactKind::Floorplan.file_name().to_string(),
            dimensions: record.dimensions,
            furniture_count: record.furniture.len(),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, FileError> {
        let mut bytes = serde_json::to_vec_pretty(self)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, FileError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
