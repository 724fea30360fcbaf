//! 导出配置，从环境变量加载。

use roomscan_core::mapper::{DEFAULT_MARGIN, DEFAULT_SCALE};
use std::path::PathBuf;
use tracing::Level;

/// 比例必须为有限正数
pub fn is_valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}

/// 边距必须为有限非负数
pub fn is_valid_margin(margin: f64) -> bool {
    margin.is_finite() && margin >= 0.0
}

/// 导出配置
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// 扫描产物根目录
    pub output_dir: PathBuf,
    /// 平面图比例
    pub scale: f64,
    /// 平面图边距
    pub margin: f64,
    /// 日志级别
    pub log_level: Level,
}

impl ExportConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载，便于测试
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            output_dir: lookup("ROOMSCAN_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./scans")),
            scale: lookup("ROOMSCAN_SCALE")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| is_valid_scale(*v))
                .unwrap_or(DEFAULT_SCALE),
            margin: lookup("ROOMSCAN_MARGIN")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| is_valid_margin(*v))
                .unwrap_or(DEFAULT_MARGIN),
            log_level: lookup("ROOMSCAN_LOG")
                .and_then(|v| v.parse().ok())
                .unwrap_or(Level::INFO),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
