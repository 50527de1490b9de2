//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! Implements [`PaintSink`], so the layout engine can drive it directly.

use crate::geom::Rect;
use crate::renderer::constants::*;
use crate::renderer::metrics::FontSpec;
use crate::renderer::paint::PaintSink;

pub struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
    font: FontSpec,
}

impl SvgBuilder {
    pub fn new(width: f64, height: f64, font: FontSpec) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            font,
        }
    }

    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: '{}', 'Times New Roman', serif;">"#,
            self.width, self.height, self.width, self.height, self.font.family
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl PaintSink for SvgBuilder {
    fn fill_rect(&mut self, rect: Rect) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            rect.x, rect.y, rect.width, rect.height, NOTE_COLOR
        ));
    }

    fn draw_ellipse(&mut self, rect: Rect) {
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        self.elements.push(format!(
            r#"<ellipse cx="{:.1}" cy="{:.1}" rx="{:.1}" ry="{:.1}" fill="{}"/>"#,
            rect.x + rx,
            rect.y + ry,
            rx,
            ry,
            NOTE_COLOR
        ));
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) {
        let escaped = text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" fill="{}" text-anchor="start">{}</text>"#,
            x, y, self.font.point_size, NOTE_COLOR, escaped
        ));
    }
}

/// Fallback document for inputs with nothing to render.
pub fn empty_svg(message: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 400 100\">\
         <text x=\"200\" y=\"50\" text-anchor=\"middle\" font-size=\"14\" fill=\"gray\">{}</text>\
         </svg>",
        message
    )
}
