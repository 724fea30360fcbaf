//! 平面图线段生成
//!
//! 墙面和门都表示为有向线段，投影到 (x, z) 平面，供平面图统一绘制。
//! 门的识别基于分类标签而非几何形状，通过 [`DoorClassifier`] 可替换。

use crate::axis::primary_axis;
use crate::capture::{CapturedObject, CapturedRoom, CapturedSurface};
use crate::math::{project_xz, Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// 2D线段，起点与终点之间没有顺序约定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment2D {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment2D {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// 以中心、方向和半长构造并投影到 (x, z)
    pub fn centered(center: &Point3, axis: &Vector3, half_length: f64) -> Self {
        let offset = axis * half_length;
        Self {
            start: project_xz(&(*center - offset)),
            end: project_xz(&(*center + offset)),
        }
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// 计算线段中点
    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}

/// 判断物体是否为门
pub trait DoorClassifier {
    fn is_door(&self, object: &CapturedObject) -> bool;
}

impl<F> DoorClassifier for F
where
    F: Fn(&CapturedObject) -> bool,
{
    fn is_door(&self, object: &CapturedObject) -> bool {
        self(object)
    }
}

/// 基于标签子串的门识别（不区分大小写）
#[derive(Debug, Clone)]
pub struct LabelDoorClassifier {
    needle: String,
}

impl LabelDoorClassifier {
    pub fn new(needle: impl AsRef<str>) -> Self {
        Self {
            needle: needle.as_ref().to_lowercase(),
        }
    }
}

impl Default for LabelDoorClassifier {
    fn default() -> Self {
        Self::new("door")
    }
}

impl DoorClassifier for LabelDoorClassifier {
    fn is_door(&self, object: &CapturedObject) -> bool {
        object.category.to_lowercase().contains(&self.needle)
    }
}

/// 平面图线段集合，顺序与输入一致
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorplanSegments {
    pub walls: Vec<LineSegment2D>,
    pub doors: Vec<LineSegment2D>,
}

/// 单面墙的线段，长度取 `dimensions.x`
pub fn wall_segment(wall: &CapturedSurface) -> LineSegment2D {
    let axis = primary_axis(&wall.transform);
    LineSegment2D::centered(&wall.center(), &axis, wall.dimensions.x / 2.0)
}

/// 单扇门的线段，长度取 `dimensions.x` 与 `dimensions.z` 的较大者
pub fn door_segment(door: &CapturedObject) -> LineSegment2D {
    let axis = primary_axis(&door.transform);
    let half_length = door.dimensions.x.max(door.dimensions.z) / 2.0;
    LineSegment2D::centered(&door.center(), &axis, half_length)
}

/// 为所有墙面生成线段
pub fn build_wall_segments(room: &CapturedRoom) -> Vec<LineSegment2D> {
    room.walls.iter().map(wall_segment).collect()
}

/// 为分类器认定的门生成线段
pub fn build_door_segments(
    room: &CapturedRoom,
    classifier: &impl DoorClassifier,
) -> Vec<LineSegment2D> {
    room.objects
        .iter()
        .filter(|o| classifier.is_door(o))
        .map(door_segment)
        .collect()
}

/// 一次生成墙面与门的线段
pub fn build_segments(room: &CapturedRoom, classifier: &impl DoorClassifier) -> FloorplanSegments {
    FloorplanSegments {
        walls: build_wall_segments(room),
        doors: build_door_segments(room, classifier),
    }
}
