//! Numbered-notation renderer — lays out one beamed group of duration
//! events and produces paint commands or a self-contained SVG string.
//!
//! The layout core ([`note`] and [`beam`]) consumes positions the host has
//! already finalized. The orchestration here also offers a simple
//! left-to-right placement so a group can be rendered end-to-end without a
//! host, which is what the FFI surface and the tests use.

pub mod beam;
pub mod constants;
pub mod metrics;
pub mod note;
pub mod numbering;
pub mod paint;
pub mod svg_builder;

use log::debug;

use crate::geom::{Point, Size};
use crate::model::{GroupEvent, Key};
use beam::{draw_beams, layout_beams, BeamEvent, BeamLayout};
use constants::*;
use metrics::{BuiltinDigitMetrics, FontMetrics, FontSpec};
use note::{draw_chord, layout_chord, layout_rest, ChordLayout, PlacedNote};
use paint::{PaintOp, PaintRecorder, PaintSink};
use svg_builder::{empty_svg, SvgBuilder};

/// One event of a group after glyph layout and placement.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutEvent {
    /// Page position of the event's local origin (base digit top-left).
    pub origin: Point,
    pub chord: ChordLayout,
    pub level_depth: usize,
}

/// Complete layout of one beamed group: placed events, beam segments, and
/// the overall page size.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    pub events: Vec<LaidOutEvent>,
    pub beams: BeamLayout,
    pub size: Size,
}

/// Lay out a whole group: per-event glyphs, left-to-right placement, and
/// beam bars. The group must be non-empty.
pub fn layout_group(
    events: &[GroupEvent],
    key: Key,
    font: &FontSpec,
    metrics: &dyn FontMetrics,
) -> GroupLayout {
    assert!(!events.is_empty(), "group layout invoked without events");

    let chords: Vec<ChordLayout> = events
        .iter()
        .map(|ev| {
            if ev.rest {
                let glyph = layout_rest(ev.duration, font, metrics);
                let bbox = glyph.bbox;
                ChordLayout {
                    notes: vec![PlacedNote { glyph, pos: Point::default() }],
                    bbox,
                }
            } else {
                layout_chord(&ev.pitches, ev.duration, key, font, metrics)
            }
        })
        .collect();

    // All events share one origin row; leave headroom for whatever the
    // chords extend above it (upper-octave dots, stacked chord notes).
    let top_extent = chords
        .iter()
        .map(|c| -c.bbox.y)
        .fold(0.0f64, f64::max);
    let origin_y = PAGE_MARGIN_TOP + top_extent;

    let mut laid_out = Vec::with_capacity(events.len());
    let mut x = PAGE_MARGIN_LEFT;
    for (ev, chord) in events.iter().zip(chords) {
        let origin = Point::new(x, origin_y);
        let dash_extent =
            chord.dash_count() as f64 * (DURATION_DASH_X_SPACE + DURATION_DASH_WIDTH);
        x += chord.bbox.width + dash_extent + EVENT_X_GAP;
        laid_out.push(LaidOutEvent {
            origin,
            chord,
            level_depth: ev.duration.hooks(),
        });
    }

    let beam_events: Vec<BeamEvent> = laid_out
        .iter()
        .map(|ev| {
            let base = ev.chord.base();
            BeamEvent {
                x: ev.origin.x + ev.chord.bbox.x,
                width: ev.chord.bbox.width,
                glyph_bottom: ev.origin.y + base.pos.y + base.glyph.bbox.bottom(),
                level_depth: ev.level_depth,
                has_low_octave_dots: base.glyph.octave < 0,
            }
        })
        .collect();
    let beams = layout_beams(&beam_events);

    let content_bottom = laid_out
        .iter()
        .map(|ev| ev.origin.y + ev.chord.bbox.bottom())
        .chain(std::iter::once(beams.bbox.bottom()))
        .fold(0.0f64, f64::max);
    let size = Size::new(
        x - EVENT_X_GAP + PAGE_MARGIN_RIGHT,
        content_bottom + PAGE_MARGIN_TOP,
    );

    debug!(
        "group layout: {} events, {} beam segments, page {}x{}",
        laid_out.len(),
        beams.segments.len(),
        size.width,
        size.height
    );

    GroupLayout { events: laid_out, beams, size }
}

/// Paint a laid-out group: glyphs first, beam bars last.
pub fn paint_group(sink: &mut dyn PaintSink, layout: &GroupLayout) {
    for ev in &layout.events {
        draw_chord(sink, ev.origin, &ev.chord);
    }
    draw_beams(sink, &layout.beams);
}

/// Render a group to the ordered paint-command list.
pub fn render_group_to_ops(events: &[GroupEvent], key: Key) -> Vec<PaintOp> {
    if events.is_empty() {
        return Vec::new();
    }
    let font = default_font();
    let layout = layout_group(events, key, &font, &BuiltinDigitMetrics);
    let mut recorder = PaintRecorder::new();
    paint_group(&mut recorder, &layout);
    recorder.ops
}

/// Render a group into a complete SVG string.
pub fn render_group_to_svg(events: &[GroupEvent], key: Key) -> String {
    if events.is_empty() {
        return empty_svg("No events in group");
    }
    let font = default_font();
    let layout = layout_group(events, key, &font, &BuiltinDigitMetrics);
    let mut svg = SvgBuilder::new(layout.size.width, layout.size.height, font);
    paint_group(&mut svg, &layout);
    svg.build()
}

fn default_font() -> FontSpec {
    FontSpec::new("Georgia", NOTE_FONT_SIZE)
}
