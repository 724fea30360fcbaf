//! 3D刚体/仿射变换
//!
//! 捕获设备为每个表面和物体附带一个 4×4 列主序矩阵。管线只读取
//! 平移列和旋转部分的第一、第三列。

use crate::math::{Matrix4, Point3, Vector3};
use nalgebra::Vector4;
use serde::{Deserialize, Serialize};

/// 3D仿射变换
///
/// 序列化为 16 个按列主序排列的数值，与捕获设备的原生布局一致。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform3D {
    matrix: Matrix4,
}

impl Transform3D {
    /// 创建单位变换
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// 创建平移变换
    pub fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(x, y, z)),
        }
    }

    /// 创建绕竖直轴（Y）的旋转变换
    pub fn rotation_y(angle: f64) -> Self {
        Self {
            matrix: Matrix4::new_rotation(Vector3::new(0.0, angle, 0.0)),
        }
    }

    /// 从矩阵创建变换
    pub fn from_matrix(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    /// 从四个列向量创建变换
    pub fn from_columns(columns: [[f64; 4]; 4]) -> Self {
        Self {
            matrix: Matrix4::from_fn(|row, col| columns[col][row]),
        }
    }

    /// 组合两个变换（self 在后，other 在前）
    pub fn then(&self, other: &Transform3D) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// 获取变换矩阵
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// 提取平移分量（第四列）
    pub fn translation_component(&self) -> Point3 {
        let t = self.column(3);
        Point3::new(t.x, t.y, t.z)
    }

    /// 提取指定列的前三个分量
    ///
    /// 列 0..=2 为旋转（含缩放）部分的轴，列 3 为平移。
    pub fn column(&self, index: usize) -> Vector3 {
        Vector3::new(
            self.matrix[(0, index)],
            self.matrix[(1, index)],
            self.matrix[(2, index)],
        )
    }

    /// 变换一个点
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(point.x, point.y, point.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// 所有矩阵元素是否均为有限值
    pub fn is_finite(&self) -> bool {
        self.matrix.iter().all(|v| v.is_finite())
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}
