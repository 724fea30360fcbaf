//! 房间导出
//!
//! 编排包围盒、线段、尺寸计算和两种序列化。
//! 几何与序列化部分是纯计算，只有 [`ExportArtifacts::persist`] 会写磁盘。写入失败后可以直接对同一份
//! [`ExportArtifacts`] 重试，无需重新计算。

use crate::error::FileError;
use crate::floorplan::SvgFloorplan;
use crate::record::RoomExport;
use crate::scan::{ScanInfo, UploadManifest};
use crate::storage::{ArtifactKind, ArtifactStore, ScanId};
use crate::style::FloorplanStyle;
use roomscan_core::bounds::{compute_bounds, RoomBounds};
use roomscan_core::capture::CapturedRoom;
use roomscan_core::mapper::CoordinateMapper;
use roomscan_core::segment::{
    build_segments, DoorClassifier, FloorplanSegments, LabelDoorClassifier,
};
use std::path::PathBuf;
use tracing::debug;

/// 一次导出的全部结果
#[derive(Debug, Clone)]
pub struct ExportArtifacts {
    /// 包围盒，没有几何时为 `None`
    pub bounds: Option<RoomBounds>,
    /// 元数据记录
    pub record: RoomExport,
    /// 墙面与门的线段
    pub segments: FloorplanSegments,
    /// 元数据 JSON
    pub metadata_json: Vec<u8>,
    /// SVG 平面图
    pub floorplan_svg: Vec<u8>,
}

/// 已写入的产物路径
#[derive(Debug, Clone, PartialEq)]
pub struct SavedArtifacts {
    pub scan_dir: PathBuf,
    pub metadata: PathBuf,
    pub floorplan: PathBuf,
    pub manifest: Option<PathBuf>,
}

impl ExportArtifacts {
    /// 依次写入元数据和平面图
    pub fn persist(
        &self,
        store: &ArtifactStore,
        scan_id: &ScanId,
    ) -> Result<SavedArtifacts, FileError> {
        let metadata =
            store.write_artifact(scan_id, ArtifactKind::Metadata, &self.metadata_json)?;
        let floorplan =
            store.write_artifact(scan_id, ArtifactKind::Floorplan, &self.floorplan_svg)?;

        Ok(SavedArtifacts {
            scan_dir: store.scan_dir(scan_id),
            metadata,
            floorplan,
            manifest: None,
        })
    }

    /// 写入两个产物后再写上传清单
    pub fn persist_with_manifest(
        &self,
        store: &ArtifactStore,
        scan_id: &ScanId,
        info: ScanInfo,
    ) -> Result<SavedArtifacts, FileError> {
        let mut saved = self.persist(store, scan_id)?;

        let manifest = UploadManifest::new(scan_id.clone(), info, &self.record);
        let path = store.write_artifact(scan_id, ArtifactKind::Manifest, &manifest.to_json()?)?;
        saved.manifest = Some(path);

        Ok(saved)
    }
}

/// 房间导出器
pub struct RoomExporter<C = LabelDoorClassifier> {
    style: FloorplanStyle,
    classifier: C,
}

impl RoomExporter {
    /// 使用默认的标签门识别
    pub fn new(style: FloorplanStyle) -> Self {
        Self {
            style,
            classifier: LabelDoorClassifier::default(),
        }
    }
}

impl Default for RoomExporter {
    fn default() -> Self {
        Self::new(FloorplanStyle::default())
    }
}

impl<C: DoorClassifier> RoomExporter<C> {
    /// 替换门识别策略
    pub fn with_classifier<D: DoorClassifier>(self, classifier: D) -> RoomExporter<D> {
        RoomExporter {
            style: self.style,
            classifier,
        }
    }

    pub fn style(&self) -> &FloorplanStyle {
        &self.style
    }

    /// 计算并序列化，不写磁盘
    pub fn export(&self, room: &CapturedRoom) -> Result<ExportArtifacts, FileError> {
        let bounds = compute_bounds(room);
        let record = RoomExport::from_room(room, bounds.as_ref());
        let segments = build_segments(room, &self.classifier);

        debug!(
            "Exporting room: bounds={:?}, {} walls, {} doors, {} furniture",
            bounds,
            segments.walls.len(),
            segments.doors.len(),
            record.furniture.len()
        );

        let metadata_json = record.to_json()?;
        let floorplan_svg = self.render_floorplan(bounds.as_ref(), &record, &segments).into_bytes();

        Ok(ExportArtifacts {
            bounds,
            record,
            segments,
            metadata_json,
            floorplan_svg,
        })
    }

    /// 渲染 SVG 平面图
    pub fn render_floorplan(
        &self,
        bounds: Option<&RoomBounds>,
        record: &RoomExport,
        segments: &FloorplanSegments,
    ) -> String {
        let mapper = CoordinateMapper::for_bounds(bounds, self.style.scale, self.style.margin);
        SvgFloorplan::new(&self.style, mapper).render(
            &record.dimensions,
            segments,
            &record.furniture,
        )
    }

    /// 导出并写入存储
    pub fn export_to_store(
        &self,
        room: &CapturedRoom,
        store: &ArtifactStore,
        scan_id: &ScanId,
    ) -> Result<SavedArtifacts, FileError> {
        self.export(room)?.persist(store, scan_id)
    }
}
