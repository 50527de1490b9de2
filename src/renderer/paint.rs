//! Paint-sink boundary: the ordered draw commands the layout engine emits.
//!
//! The engine paints with exactly three primitives — filled rectangles
//! (beam segments, duration dashes), ellipses (octave dots), and text
//! (the digit, anchored at the bottom-left of its box since text APIs
//! draw from a baseline). Backends implement [`PaintSink`];
//! [`PaintRecorder`] captures the command list for FFI exchange.

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// One draw command, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintOp {
    FillRect { rect: Rect },
    DrawEllipse { rect: Rect },
    DrawText { x: f64, y: f64, text: String },
}

/// Receiver of draw commands.
pub trait PaintSink {
    fn fill_rect(&mut self, rect: Rect);
    fn draw_ellipse(&mut self, rect: Rect);
    fn draw_text(&mut self, x: f64, y: f64, text: &str);
}

/// Sink that records the command list instead of painting.
#[derive(Debug, Default)]
pub struct PaintRecorder {
    pub ops: Vec<PaintOp>,
}

impl PaintRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaintSink for PaintRecorder {
    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(PaintOp::FillRect { rect });
    }

    fn draw_ellipse(&mut self, rect: Rect) {
        self.ops.push(PaintOp::DrawEllipse { rect });
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) {
        self.ops.push(PaintOp::DrawText { x, y, text: text.to_string() });
    }
}
