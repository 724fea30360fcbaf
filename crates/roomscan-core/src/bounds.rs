//! 房间包围盒计算
//!
//! 每个表面贡献两个候选点 `center ± dimensions / 2`。这是对表面定向
//! 包围盒的轴对齐近似，不计算旋转后的真实角点。没有墙面和地面时
//! 退回到物体。

use crate::capture::CapturedRoom;
use crate::math::{component_max, component_min, Point2, Point3, Vector3};
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};

/// 3D轴对齐包围盒
///
/// 不变量：`min` 的每个分量都不大于 `max` 的对应分量。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomBounds {
    pub min: Point3,
    pub max: Point3,
}

impl RoomBounds {
    /// 创建新的包围盒
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// 从点集创建包围盒，点集为空时返回 `None`
    pub fn from_points(points: impl IntoIterator<Item = Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::new(first, first);
        for p in iter {
            bounds.expand_to_include(&p);
        }
        Some(bounds)
    }

    /// 扩展包围盒以包含指定点
    pub fn expand_to_include(&mut self, point: &Point3) {
        self.min = component_min(&self.min, point);
        self.max = component_max(&self.max, point);
    }

    /// 各轴跨度 `max - min`
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// 最小点的俯视投影，作为平面图原点
    pub fn origin_xz(&self) -> Point2 {
        Point2::new(self.min.x, self.min.z)
    }

    /// 检查是否包含指定点
    pub fn contains(&self, point: &Point3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// 单个表面或物体的两个候选极值点
fn extreme_points(transform: &Transform3D, dimensions: &Vector3) -> [Point3; 2] {
    let center = transform.translation_component();
    let half = dimensions / 2.0;
    [center - half, center + half]
}

/// 计算房间包围盒
///
/// 优先使用墙面与地面；两者都为空时使用物体。
/// 没有任何候选点时返回 `None`。
pub fn compute_bounds(room: &CapturedRoom) -> Option<RoomBounds> {
    if room.surface_count() > 0 {
        RoomBounds::from_points(
            room.walls
                .iter()
                .chain(room.floors.iter())
                .flat_map(|s| extreme_points(&s.transform, &s.dimensions)),
        )
    } else {
        RoomBounds::from_points(
            room.objects
                .iter()
                .flat_map(|o| extreme_points(&o.transform, &o.dimensions)),
        )
    }
}
