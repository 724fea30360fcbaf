//! 主轴提取
//!
//! 从空间变换中取出表面或物体的水平朝向，保证返回单位向量。

use crate::math::{Vector3, AXIS_EPSILON};
use crate::transform::Transform3D;

/// 提取变换的主方向
///
/// 依次尝试旋转矩阵的第一列、第三列，长度低于 [`AXIS_EPSILON`]
/// 视为退化；全部退化时返回 X 轴。
/// 非有限长度（NaN/无穷）同样视为退化。
pub fn primary_axis(transform: &Transform3D) -> Vector3 {
    [transform.column(0), transform.column(2)]
        .into_iter()
        .find_map(|candidate| {
            let length = candidate.norm();
            (length.is_finite() && length >= AXIS_EPSILON).then(|| candidate / length)
        })
        .unwrap_or_else(Vector3::x)
}
