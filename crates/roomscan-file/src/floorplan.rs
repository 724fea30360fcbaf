//! SVG 平面图渲染
//!
//! 画布大小为 `尺寸 * scale + 2 * margin`。边界矩形、墙线、门线、
//! 家具标记与标签依次绘制，所有数值保留两位小数。

use crate::record::{FurnitureItem, RoomDimensions};
use crate::style::{FloorplanStyle, Stroke};
use roomscan_core::mapper::CoordinateMapper;
use roomscan_core::math::{Point2, Point3};
use roomscan_core::segment::{FloorplanSegments, LineSegment2D};

/// 两位小数格式化，`-0.00` 归一为 `0.00`
pub fn fmt2(value: f64) -> String {
    let s = format!("{:.2}", value);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

/// 转义 XML 文本内容
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// 画布尺寸 `(宽, 高)`
pub fn canvas_size(dimensions: &RoomDimensions, scale: f64, margin: f64) -> (f64, f64) {
    (
        dimensions.length * scale + 2.0 * margin,
        dimensions.width * scale + 2.0 * margin,
    )
}

/// SVG 平面图渲染器
pub struct SvgFloorplan<'a> {
    style: &'a FloorplanStyle,
    mapper: CoordinateMapper,
}

impl<'a> SvgFloorplan<'a> {
    /// `mapper` 的比例和边距应与 `style` 一致
    pub fn new(style: &'a FloorplanStyle, mapper: CoordinateMapper) -> Self {
        Self { style, mapper }
    }

    /// 渲染为 SVG 字符串
    pub fn render(
        &self,
        dimensions: &RoomDimensions,
        segments: &FloorplanSegments,
        furniture: &[FurnitureItem],
    ) -> String {
        let style = self.style;
        let (width, height) = canvas_size(dimensions, style.scale, style.margin);

        let mut svg = String::new();

        // SVG 头部
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <rect x="0.00" y="0.00" width="{w}" height="{h}" fill="{bg}"/>
"#,
            w = fmt2(width),
            h = fmt2(height),
            bg = style.background.to_svg(),
        ));

        // 外边界
        svg.push_str(&format!(
            "  <rect x=\"{m}\" y=\"{m}\" width=\"{bw}\" height=\"{bh}\" fill=\"none\" {stroke}/>\n",
            m = fmt2(style.margin),
            bw = fmt2(self.mapper.scale_length(dimensions.length)),
            bh = fmt2(self.mapper.scale_length(dimensions.width)),
            stroke = stroke_attrs(&style.boundary),
        ));

        self.push_segments(&mut svg, "walls", &style.wall, &segments.walls);
        self.push_segments(&mut svg, "doors", &style.door, &segments.doors);

        svg.push_str("  <g id=\"furniture\">\n");
        for item in furniture {
            let [x, y, z] = item.position;
            let p = self.mapper.map_world(&Point3::new(x, y, z));
            svg.push_str(&format!(
                "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                fmt2(p.x),
                fmt2(p.y),
                fmt2(style.marker_radius),
                style.furniture.to_svg(),
            ));
            svg.push_str(&format!(
                concat!(
                    "    <text x=\"{}\" y=\"{}\" font-size=\"{}\" ",
                    "font-family=\"sans-serif\" fill=\"{}\">{}</text>\n",
                ),
                fmt2(p.x + style.marker_radius + 2.0),
                fmt2(p.y + style.label_font_size / 3.0),
                fmt2(style.label_font_size),
                style.furniture.to_svg(),
                escape_xml(&item.kind),
            ));
        }
        svg.push_str("  </g>\n");

        // SVG 尾部
        svg.push_str("</svg>\n");

        svg
    }

    fn push_segments(
        &self,
        svg: &mut String,
        id: &str,
        stroke: &Stroke,
        segments: &[LineSegment2D],
    ) {
        svg.push_str(&format!(
            "  <g id=\"{}\" {} stroke-linecap=\"round\">\n",
            id,
            stroke_attrs(stroke)
        ));
        for segment in segments {
            let (a, b) = self.map_segment(segment);
            svg.push_str(&format!(
                "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>\n",
                fmt2(a.x),
                fmt2(a.y),
                fmt2(b.x),
                fmt2(b.y),
            ));
        }
        svg.push_str("  </g>\n");
    }

    fn map_segment(&self, segment: &LineSegment2D) -> (Point2, Point2) {
        (self.mapper.map(&segment.start), self.mapper.map(&segment.end))
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    format!(
        r#"stroke="{}" stroke-width="{}""#,
        stroke.color.to_svg(),
        fmt2(stroke.width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(
        dimensions: RoomDimensions,
        segments: FloorplanSegments,
        furniture: &[FurnitureItem],
    ) -> String {
        let style = FloorplanStyle::default();
        let mapper = CoordinateMapper::new(Point2::origin(), style.scale, style.margin);
        SvgFloorplan::new(&style, mapper).render(&dimensions, &segments, furniture)
    }

    #[test]
    fn test_fmt2() {
        assert_eq!(fmt2(570.0), "570.00");
        assert_eq!(fmt2(1.005), "1.00");
        assert_eq!(fmt2(2.675), "2.67");
        assert_eq!(fmt2(-0.0), "0.00");
        assert_eq!(fmt2(-0.001), "0.00");
        assert_eq!(fmt2(-12.5), "-12.50");
    }

    #[test]
    fn test_fmt2_rounds_once() {
        assert_eq!(fmt2(0.125), format!("{:.2}", 0.125));
        assert_eq!(fmt2(2.675), format!("{:.2}", 2.675));
        assert_eq!(fmt2(-0.004), "0.00");

        let huge = fmt2(1e307);
        assert!(huge.ends_with(".00"));
        assert!(!huge.contains("inf"));
    }

    #[test]
    fn test_canvas_size() {
        let dims = RoomDimensions::new(5.5, 4.2, 2.4);
        let (w, h) = canvas_size(&dims, 100.0, 20.0);

        assert!((w - 590.0).abs() < 1e-9);
        assert!((h - 460.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_structure() {
        let segments = FloorplanSegments {
            walls: vec![
                LineSegment2D::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)),
                LineSegment2D::new(Point2::new(4.0, 0.0), Point2::new(4.0, 3.0)),
            ],
            doors: vec![LineSegment2D::new(Point2::new(1.0, 0.0), Point2::new(1.9, 0.0))],
        };
        let furniture = vec![FurnitureItem {
            position: [2.0, 0.4, 1.5],
            kind: "Table".to_string(),
        }];
        let svg = render(RoomDimensions::new(4.0, 3.0, 2.5), segments, &furniture);

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="440.00" height="340.00""#));
        assert!(svg.contains(r#"<rect x="20.00" y="20.00" width="400.00" height="300.00""#));
        assert!(svg.contains(r#"<line x1="20.00" y1="20.00" x2="420.00" y2="20.00"/>"#));
        assert!(svg.contains(r#"<line x1="120.00" y1="20.00" x2="210.00" y2="20.00"/>"#));
        assert!(svg.contains(r#"<circle cx="220.00" cy="170.00""#));
        assert!(svg.contains(">Table</text>"));
        assert_eq!(svg.matches("<line").count(), 3);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_walls_and_doors_use_distinct_strokes() {
        let style = FloorplanStyle::default();
        let svg = render(RoomDimensions::default(), FloorplanSegments::default(), &[]);

        let walls = format!(r#"<g id="walls" {}"#, stroke_attrs(&style.wall));
        let doors = format!(r#"<g id="doors" {}"#, stroke_attrs(&style.door));
        assert!(svg.contains(&walls));
        assert!(svg.contains(&doors));
        assert_ne!(walls.replace("walls", ""), doors.replace("doors", ""));
    }

    #[test]
    fn test_empty_room_is_zero_area_boundary() {
        let svg = render(RoomDimensions::default(), FloorplanSegments::default(), &[]);

        assert!(svg.contains(r#"width="40.00" height="40.00""#));
        assert!(svg.contains(r#"<rect x="20.00" y="20.00" width="0.00" height="0.00""#));
        assert_eq!(svg.matches("<line").count(), 0);
        assert_eq!(svg.matches("<circle").count(), 0);
    }

    #[test]
    fn test_labels_are_escaped() {
        let furniture = vec![FurnitureItem {
            position: [0.0, 0.0, 0.0],
            kind: "Tom & Jerry's <couch>".to_string(),
        }];
        let dims = RoomDimensions::new(1.0, 1.0, 1.0);
        let svg = render(dims, FloorplanSegments::default(), &furniture);

        assert!(svg.contains(">Tom &amp; Jerry&apos;s &lt;couch&gt;</text>"));
    }
}
