//! RoomScan 导出
//!
//! 将捕获的房间导出为两个产物并写入扫描目录：
//! - `room.json`：尺寸与家具元数据
//! - `floorplan.svg`：俯视平面图
//!
//! 可选的 `manifest.json` 供上传流程读取。

pub mod capture_io;
pub mod error;
pub mod export;
pub mod floorplan;
pub mod record;
pub mod scan;
pub mod storage;
pub mod style;

pub use capture_io::{load_captured_room, parse_captured_room};
pub use error::FileError;
pub use export::{ExportArtifacts, RoomExporter, SavedArtifacts};
pub use record::{FurnitureItem, RoomDimensions, RoomExport};
pub use scan::{ScanInfo, UploadManifest};
pub use storage::{ArtifactKind, ArtifactStore, ScanId};
pub use style::FloorplanStyle;
