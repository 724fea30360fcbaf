//! RoomScan 几何提取管线
//!
//! 将捕获会话产出的房间（一组带变换和尺寸的表面与物体）转换为
//! 平面图所需的几何摘要。
//!
//! # 流程
//!
//! - [`bounds::compute_bounds`]：轴对齐包围盒，表面优先，退回物体
//! - [`axis::primary_axis`]：从变换中提取稳定的水平朝向
//! - [`segment::build_segments`]：墙面与门的 2D 线段
//! - [`mapper::CoordinateMapper`]：世界坐标到画布坐标
//!
//! 所有计算都是纯函数，不会失败；
//! 输入校验由 [`CapturedRoom::validate`] 在边界完成。
//!
//! # 示例
//!
//! ```rust
//! use roomscan_core::prelude::*;
//!
//! let room = CapturedRoom::new().with_wall(CapturedSurface::new(
//!     Transform3D::identity(),
//!     Vector3::new(4.0, 3.0, 0.2),
//! ));
//!
//! let walls = build_wall_segments(&room);
//! assert_eq!(walls.len(), 1);
//! ```

pub mod axis;
pub mod bounds;
pub mod capture;
pub mod error;
pub mod mapper;
pub mod math;
pub mod segment;
pub mod transform;

pub use capture::CapturedRoom;
pub use error::CaptureError;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::axis::primary_axis;
    pub use crate::bounds::{compute_bounds, RoomBounds};
    pub use crate::capture::{CapturedObject, CapturedRoom, CapturedSurface};
    pub use crate::mapper::CoordinateMapper;
    pub use crate::math::{Point2, Point3, Vector2, Vector3};
    pub use crate::segment::{
        build_door_segments, build_segments, build_wall_segments, DoorClassifier,
        FloorplanSegments, LabelDoorClassifier, LineSegment2D,
    };
    pub use crate::transform::Transform3D;
}
