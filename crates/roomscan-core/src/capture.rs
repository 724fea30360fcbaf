//! 捕获结果数据模型
//!
//! 由外部捕获会话产出的房间快照。管线只读取这些值，从不修改。

use crate::error::CaptureError;
use crate::math::{Point3, Vector3};
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};

/// 墙面或地面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedSurface {
    /// 空间变换
    pub transform: Transform3D,
    /// 局部空间尺寸
    pub dimensions: Vector3,
}

impl CapturedSurface {
    pub fn new(transform: Transform3D, dimensions: Vector3) -> Self {
        Self {
            transform,
            dimensions,
        }
    }

    /// 中心点（变换的平移分量）
    pub fn center(&self) -> Point3 {
        self.transform.translation_component()
    }
}

/// 家具或固定设施
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedObject {
    /// 空间变换
    pub transform: Transform3D,
    /// 局部空间尺寸
    pub dimensions: Vector3,
    /// 自由文本分类标签，可能包含 "door" 之类的子串
    pub category: String,
}

impl CapturedObject {
    pub fn new(transform: Transform3D, dimensions: Vector3, category: impl Into<String>) -> Self {
        Self {
            transform,
            dimensions,
            category: category.into(),
        }
    }

    /// 中心点（变换的平移分量）
    pub fn center(&self) -> Point3 {
        self.transform.translation_component()
    }
}

/// 捕获的房间
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturedRoom {
    #[serde(default)]
    pub walls: Vec<CapturedSurface>,
    #[serde(default)]
    pub floors: Vec<CapturedSurface>,
    #[serde(default)]
    pub objects: Vec<CapturedObject>,
}

impl CapturedRoom {
    /// 创建空房间
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wall(mut self, wall: CapturedSurface) -> Self {
        self.walls.push(wall);
        self
    }

    pub fn with_floor(mut self, floor: CapturedSurface) -> Self {
        self.floors.push(floor);
        self
    }

    pub fn with_object(mut self, object: CapturedObject) -> Self {
        self.objects.push(object);
        self
    }

    /// 墙面与地面总数
    pub fn surface_count(&self) -> usize {
        self.walls.len() + self.floors.len()
    }

    /// 是否没有任何几何
    pub fn is_empty(&self) -> bool {
        self.surface_count() == 0 && self.objects.is_empty()
    }

    /// 校验所有变换和尺寸
    ///
    /// 几何管线本身不做校验；此方法在输入边界调用，拒绝 NaN/无穷值
    /// 以及负尺寸。
    pub fn validate(&self) -> Result<(), CaptureError> {
        for (index, wall) in self.walls.iter().enumerate() {
            check_geometry("walls", index, &wall.transform, &wall.dimensions)?;
        }
        for (index, floor) in self.floors.iter().enumerate() {
            check_geometry("floors", index, &floor.transform, &floor.dimensions)?;
        }
        for (index, object) in self.objects.iter().enumerate() {
            check_geometry("objects", index, &object.transform, &object.dimensions)?;
        }
        Ok(())
    }
}

fn check_geometry(
    collection: &'static str,
    index: usize,
    transform: &Transform3D,
    dimensions: &Vector3,
) -> Result<(), CaptureError> {
    if !transform.is_finite() {
        return Err(CaptureError::NonFinite {
            collection,
            index,
            field: "transform",
        });
    }
    if !dimensions.iter().all(|v| v.is_finite()) {
        return Err(CaptureError::NonFinite {
            collection,
            index,
            field: "dimensions",
        });
    }
    if dimensions.iter().any(|v| *v < 0.0) {
        return Err(CaptureError::NegativeDimensions { collection, index });
    }
    Ok(())
}
