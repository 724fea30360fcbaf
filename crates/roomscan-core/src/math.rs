//! 数学基础类型
//!
//! 基于 nalgebra 提供的向量和点类型的别名。

use nalgebra as na;

/// 2D点类型（平面图坐标，`y` 分量对应世界坐标的 Z）
pub type Point2 = na::Point2<f64>;

/// 3D点类型
pub type Point3 = na::Point3<f64>;

/// 2D向量类型
pub type Vector2 = na::Vector2<f64>;

/// 3D向量类型
pub type Vector3 = na::Vector3<f64>;

/// 3D变换矩阵
pub type Matrix4 = na::Matrix4<f64>;

/// 数值容差，用于几何比较
pub const EPSILON: f64 = 1e-10;

/// 主轴退化判定阈值
pub const AXIS_EPSILON: f64 = 1e-6;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 判断两个2D点是否近似相等
#[inline]
pub fn points_approx_eq(a: &Point2, b: &Point2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

/// 俯视投影：丢弃竖直分量，保留 (x, z)
#[inline]
pub fn project_xz(point: &Point3) -> Point2 {
    Point2::new(point.x, point.z)
}

/// 逐分量取最小值
#[inline]
pub fn component_min(a: &Point3, b: &Point3) -> Point3 {
    Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

/// 逐分量取最大值
#[inline]
pub fn component_max(a: &Point3, b: &Point3) -> Point3 {
    Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}
