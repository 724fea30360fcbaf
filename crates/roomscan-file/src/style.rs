//! 平面图样式
//!
//! 颜色、线宽以及画布比例和边距。

use roomscan_core::mapper::{DEFAULT_MARGIN, DEFAULT_SCALE};
use serde::{Deserialize, Serialize};

/// RGB颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 从十六进制值创建（如 0xFF0000 表示红色）
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// SVG 颜色字符串
    pub fn to_svg(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GRAY: Color = Color::new(128, 128, 128);
    pub const DARK_GRAY: Color = Color::new(51, 51, 51);
    pub const DOOR_BROWN: Color = Color::from_hex(0xB5651D);
    pub const FURNITURE_BLUE: Color = Color::from_hex(0x1E88E5);
}

/// 描边样式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// 平面图样式设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorplanStyle {
    /// 世界单位到画布单位的比例
    pub scale: f64,
    /// 画布边距
    pub margin: f64,
    /// 画布背景
    pub background: Color,
    /// 外边界矩形
    pub boundary: Stroke,
    /// 墙线
    pub wall: Stroke,
    /// 门线
    pub door: Stroke,
    /// 家具标记颜色
    pub furniture: Color,
    /// 家具标记半径
    pub marker_radius: f64,
    /// 标签字号
    pub label_font_size: f64,
}

impl Default for FloorplanStyle {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            margin: DEFAULT_MARGIN,
            background: Color::WHITE,
            boundary: Stroke::new(Color::GRAY, 1.0),
            wall: Stroke::new(Color::DARK_GRAY, 4.0),
            door: Stroke::new(Color::DOOR_BROWN, 3.0),
            furniture: Color::FURNITURE_BLUE,
            marker_radius: 4.0,
            label_font_size: 10.0,
        }
    }
}

impl FloorplanStyle {
    /// 使用指定比例和边距，其余保持默认
    pub fn with_scale_and_margin(scale: f64, margin: f64) -> Self {
        Self {
            scale,
            margin,
            ..Default::default()
        }
    }
}
