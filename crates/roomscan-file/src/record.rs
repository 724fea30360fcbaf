//! 房间元数据记录
//!
//! 每次扫描生成一次、写入一次、之后不再修改。JSON 输出中各层的键
//! 均按字母序排列：结构体字段按字母序声明，序列化顺序即声明顺序。

use crate::error::FileError;
use roomscan_core::bounds::RoomBounds;
use roomscan_core::capture::{CapturedObject, CapturedRoom};
use serde::{Deserialize, Serialize};

/// 房间尺寸，均不小于 0
///
/// `length` 为 X 跨度，`width` 为 Z 跨度，`height` 为 Y 跨度。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl RoomDimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            height,
            length,
            width,
        }
    }

    /// 由包围盒推导；没有包围盒时全部为 0
    pub fn from_bounds(bounds: Option<&RoomBounds>) -> Self {
        match bounds {
            Some(b) => {
                let extent = b.extent();
                Self::new(extent.x.max(0.0), extent.z.max(0.0), extent.y.max(0.0))
            }
            None => Self::default(),
        }
    }
}

/// 家具条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    /// 世界坐标 `[x, y, z]`
    pub position: [f64; 3],
    /// 原样取自分类标签
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&CapturedObject> for FurnitureItem {
    fn from(object: &CapturedObject) -> Self {
        let c = object.center();
        Self {
            position: [c.x, c.y, c.z],
            kind: object.category.clone(),
        }
    }
}

/// 房间导出记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomExport {
    pub dimensions: RoomDimensions,
    pub furniture: Vec<FurnitureItem>,
}

impl RoomExport {
    /// 从房间和已计算的包围盒构建，家具顺序与输入一致
    pub fn from_room(room: &CapturedRoom, bounds: Option<&RoomBounds>) -> Self {
        Self {
            dimensions: RoomDimensions::from_bounds(bounds),
            furniture: room.objects.iter().map(FurnitureItem::from).collect(),
        }
    }

    /// 序列化为带缩进的 JSON
    pub fn to_json(&self) -> Result<Vec<u8>, FileError> {
        let mut bytes = serde_json::to_vec_pretty(self)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// 从 JSON 解析
    pub fn from_json(bytes: &[u8]) -> Result<Self, FileError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
