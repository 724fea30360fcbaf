//! 世界坐标到平面图画布坐标的映射
//!
//! `canvas = (world - origin) * scale + margin`，世界 Z 轴映射为画布 Y 轴
//! （俯视平面图约定）。内部不做取整，格式化由序列化阶段负责。

use crate::bounds::RoomBounds;
use crate::math::{project_xz, Point2, Point3};

/// 默认缩放：1 世界单位（米）= 100 画布单位
pub const DEFAULT_SCALE: f64 = 100.0;

/// 默认画布边距
pub const DEFAULT_MARGIN: f64 = 20.0;

/// 画布坐标映射器
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    /// 包围盒最小点的俯视投影
    pub origin: Point2,
    /// 世界单位到画布单位的比例
    pub scale: f64,
    /// 画布边距
    pub margin: f64,
}

impl CoordinateMapper {
    pub fn new(origin: Point2, scale: f64, margin: f64) -> Self {
        Self {
            origin,
            scale,
            margin,
        }
    }

    /// 以包围盒为原点；没有包围盒时原点为 (0, 0)
    pub fn for_bounds(bounds: Option<&RoomBounds>, scale: f64, margin: f64) -> Self {
        let origin = bounds.map(RoomBounds::origin_xz).unwrap_or_else(Point2::origin);
        Self::new(origin, scale, margin)
    }

    /// 映射一个俯视平面点，`point.y` 为世界 Z
    pub fn map(&self, point: &Point2) -> Point2 {
        Point2::new(
            (point.x - self.origin.x) * self.scale + self.margin,
            (point.y - self.origin.y) * self.scale + self.margin,
        )
    }

    /// 映射一个世界坐标点，丢弃高度
    pub fn map_world(&self, point: &Point3) -> Point2 {
        self.map(&project_xz(point))
    }

    /// 将世界长度换算为画布长度
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.scale
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(Point2::origin(), DEFAULT_SCALE, DEFAULT_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, points_approx_eq};

    #[test]
    fn test_origin_maps_to_margin() {
        let mapper = CoordinateMapper::new(Point2::new(-1.0, 2.0), 100.0, 20.0);
        let p = mapper.map(&Point2::new(-1.0, 2.0));
        assert!(points_approx_eq(&p, &Point2::new(20.0, 20.0)));
    }

    #[test]
    fn test_world_z_becomes_canvas_y() {
        let mapper = CoordinateMapper::default();
        let p = mapper.map_world(&Point3::new(1.5, 42.0, 2.25));

        assert!(approx_eq(p.x, 170.0));
        assert!(approx_eq(p.y, 245.0));
    }

    #[test]
    fn test_difference_independent_of_margin() {
        let a = Point2::new(3.2, -0.7);
        let b = Point2::new(-1.1, 4.4);

        for margin in [0.0, 20.0, 137.5] {
            let mapper = CoordinateMapper::new(Point2::new(0.3, 0.9), 50.0, margin);
            let d = mapper.map(&a) - mapper.map(&b);
            let expected = (a - b) * 50.0;

            assert!((d.x - expected.x).abs() < 1e-9);
            assert!((d.y - expected.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_for_bounds_without_geometry() {
        let mapper = CoordinateMapper::for_bounds(None, 100.0, 20.0);
        assert_eq!(mapper.origin, Point2::origin());

        let bounds = RoomBounds::new(Point3::new(-2.0, 0.0, -1.0), Point3::new(2.0, 3.0, 1.0));
        let mapper = CoordinateMapper::for_bounds(Some(&bounds), 100.0, 20.0);
        assert_eq!(mapper.origin, Point2::new(-2.0, -1.0));
        assert!(approx_eq(mapper.scale_length(4.0), 400.0));
    }
}
