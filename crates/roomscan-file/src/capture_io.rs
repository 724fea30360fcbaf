//! 捕获文件读取
//!
//! 捕获会话把房间序列化为 JSON，变换为 16 个列主序数值。读取后在边界
//! 处校验，拒绝非有限值和负尺寸，几何管线不再重复检查。

use crate::error::FileError;
use roomscan_core::capture::CapturedRoom;
use std::path::Path;
use tracing::{debug, warn};

/// 从 JSON 字节解析并校验
pub fn parse_captured_room(bytes: &[u8]) -> Result<CapturedRoom, FileError> {
    let room: CapturedRoom = serde_json::from_slice(bytes)?;
    if let Err(e) = room.validate() {
        warn!("Rejected captured room: {}", e);
        return Err(e.into());
    }
    debug!(
        "Loaded captured room: {} walls, {} floors, {} objects",
        room.walls.len(),
        room.floors.len(),
        room.objects.len()
    );
    Ok(room)
}

/// 从文件读取捕获的房间
pub fn load_captured_room(path: &Path) -> Result<CapturedRoom, FileError> {
    let bytes = std::fs::read(path)?;
    parse_captured_room(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomscan_core::CaptureError;

    const IDENTITY: &str = "[1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]";

    #[test]
    fn test_parse_valid_room() {
        let json = format!(
            r#"{{
                "walls": [{{"transform": {t}, "dimensions": [4, 3, 0.2]}}],
                "objects": [{{"transform": {t}, "dimensions": [1, 1, 1], "category": "Chair"}}]
            }}"#,
            t = IDENTITY
        );
        let room = parse_captured_room(json.as_bytes()).unwrap();

        assert_eq!(room.walls.len(), 1);
        assert!(room.floors.is_empty());
        assert_eq!(room.objects[0].category, "Chair");
    }

    #[test]
    fn test_parse_rejects_negative_dimensions() {
        let json = format!(
            r#"{{"floors": [{{"transform": {t}, "dimensions": [4, -1, 3]}}]}}"#,
            t = IDENTITY
        );
        let err = parse_captured_room(json.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            FileError::InvalidCapture(CaptureError::NegativeDimensions {
                collection: "floors",
                index: 0,
            })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_captured_room(b"{\"walls\": [{\"transform\": [1, 2]}]}").unwrap_err();
        assert!(matches!(err, FileError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("roomscan-does-not-exist.json");
        assert!(matches!(load_captured_room(&path), Err(FileError::Io(_))));
    }
}
