//! Digit-glyph layout for notes and rests, and chord stacking.
//!
//! Every glyph is laid out with the digit box's top-left corner at the
//! local origin, whether or not octave dots exist. Rests (digit 0) and
//! notes therefore sit on the same level and can be aligned without
//! knowing which of them carry dots.

use crate::geom::{Point, Rect, Size};
use crate::model::{Duration, Key, Pitch};
use crate::renderer::constants::*;
use crate::renderer::metrics::{FontMetrics, FontSpec};
use crate::renderer::numbering::{degree_number, octave_offset};
use crate::renderer::paint::PaintSink;

/// Layout result for one digit glyph: the digit box, the octave-dot box
/// when the octave offset is nonzero, and the duration-dash count.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteGlyphLayout {
    /// Scale-degree digit 1–7; 0 for rests.
    pub degree: u8,
    /// Signed octave offset; dots go above for positive, below for negative.
    pub octave: i32,
    /// Tight digit box, top-left anchored at the local origin.
    pub digit_box: Rect,
    /// Octave-dot box; `None` exactly when `octave == 0`.
    pub octave_dot_box: Option<Rect>,
    /// Number of duration dashes that follow the glyph (whole = 3, half = 1).
    pub dash_count: u32,
    /// Union of digit and octave-dot boxes.
    pub bbox: Rect,
}

impl NoteGlyphLayout {
    pub fn height(&self) -> f64 {
        self.bbox.height
    }
}

/// Lay out the glyph for one resolved note.
///
/// `degree` must be 1–7 and `octave` within the representable dot range;
/// both are host-guaranteed, so violations fail fast.
pub fn layout_note(
    degree: u8,
    octave: i32,
    duration: Duration,
    font: &FontSpec,
    metrics: &dyn FontMetrics,
) -> NoteGlyphLayout {
    assert!((1..=7).contains(&degree), "note degree {degree} outside 1..=7");
    assert!(
        octave.abs() <= MAX_OCTAVE_DOTS,
        "octave offset {octave} outside representable range"
    );
    layout_digit(degree, octave, duration, font, metrics)
}

/// Lay out the glyph for a rest: digit 0, never any octave dots.
pub fn layout_rest(
    duration: Duration,
    font: &FontSpec,
    metrics: &dyn FontMetrics,
) -> NoteGlyphLayout {
    layout_digit(0, 0, duration, font, metrics)
}

fn layout_digit(
    degree: u8,
    octave: i32,
    duration: Duration,
    font: &FontSpec,
    metrics: &dyn FontMetrics,
) -> NoteGlyphLayout {
    let text = digit_text(degree);
    let Size { width, height } = metrics.tight_bounding_box(font, &text);
    // Font bounding boxes overstate glyph height; scale it down so the
    // stacked octave dots sit at a believable distance.
    let digit_box = Rect::new(0.0, 0.0, width, height * FONT_BBOX_HEIGHT_RATIO);

    let octave_dot_box = if octave < 0 {
        // Lower octave: dots hang below the digit.
        Some(Rect::new(
            0.0,
            digit_box.bottom() + OCTAVE_DOTBOX_Y_OFFSET,
            digit_box.width,
            OCTAVE_DOTBOX_HEIGHT,
        ))
    } else if octave > 0 {
        // Upper octave: dots stack above the digit.
        Some(Rect::new(
            0.0,
            digit_box.y - OCTAVE_DOTBOX_HEIGHT - OCTAVE_DOTBOX_Y_OFFSET,
            digit_box.width,
            OCTAVE_DOTBOX_HEIGHT,
        ))
    } else {
        None
    };

    let bbox = digit_box.united(&octave_dot_box.unwrap_or_else(Rect::null));

    NoteGlyphLayout {
        degree,
        octave,
        digit_box,
        octave_dot_box,
        dash_count: duration.dash_count(),
        bbox,
    }
}

fn digit_text(degree: u8) -> String {
    degree.to_string()
}

/// One note glyph placed within its chord.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNote {
    pub glyph: NoteGlyphLayout,
    /// Offset of the glyph's local origin from the chord origin.
    pub pos: Point,
}

/// Layout result for one chord (or single note, or rest): the stacked
/// glyphs and their aggregate bounding box. The base (lowest-sounding)
/// glyph is always first and is the only dash carrier.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordLayout {
    pub notes: Vec<PlacedNote>,
    pub bbox: Rect,
}

impl ChordLayout {
    /// The base glyph, i.e. the lowest-sounding note (or the rest digit).
    pub fn base(&self) -> &PlacedNote {
        &self.notes[0]
    }

    /// Duration dashes the chord carries, exactly once per chord.
    pub fn dash_count(&self) -> u32 {
        self.base().glyph.dash_count
    }

    /// Dash rectangles in chord-local coordinates, running left-to-right
    /// from just right of the carrier glyph's own bounding box.
    pub fn dash_rects(&self) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(self.dash_count() as usize);
        let mut x = self.base().glyph.bbox.width + DURATION_DASH_X_SPACE;
        // Dashes sit halfway down the base digit.
        let y = self.base().glyph.digit_box.height * 0.5;
        for _ in 0..self.dash_count() {
            rects.push(Rect::new(x, y, DURATION_DASH_WIDTH, DURATION_DASH_HEIGHT));
            x += DURATION_DASH_WIDTH + DURATION_DASH_X_SPACE;
        }
        rects
    }
}

/// Lay out a chord: resolve each pitch against `key`, then stack the
/// glyphs bottom-up with the lowest-sounding note at the chord origin and
/// every higher note lifted by the heights of the glyphs beneath it.
///
/// `pitches` must be non-empty; rests go through [`layout_rest`].
pub fn layout_chord(
    pitches: &[Pitch],
    duration: Duration,
    key: Key,
    font: &FontSpec,
    metrics: &dyn FontMetrics,
) -> ChordLayout {
    assert!(!pitches.is_empty(), "chord layout invoked without pitches");

    let mut sorted: Vec<Pitch> = pitches.to_vec();
    sorted.sort_by_key(|p| p.midi());

    let glyphs: Vec<NoteGlyphLayout> = sorted
        .iter()
        .map(|p| {
            let degree = degree_number(p.tpc(), key);
            let octave = octave_offset(p.midi(), key);
            layout_note(degree, octave, duration, font, metrics)
        })
        .collect();

    let mut notes = Vec::with_capacity(glyphs.len());
    let mut bbox = Rect::null();
    let mut y = 0.0;
    for (i, glyph) in glyphs.into_iter().enumerate() {
        // Every glyph above the base is lifted by its own full height on
        // top of the glyphs already stacked beneath it.
        if i > 0 {
            y -= glyph.height();
        }
        let pos = Point::new(0.0, y);
        bbox = bbox.united(&glyph.bbox.translated(pos.x, pos.y));
        notes.push(PlacedNote { glyph, pos });
    }

    ChordLayout { notes, bbox }
}

/// Paint one chord (digits, octave dots, duration dashes) at `origin`,
/// the page position of the chord's local origin.
pub fn draw_chord(sink: &mut dyn PaintSink, origin: Point, chord: &ChordLayout) {
    for placed in &chord.notes {
        draw_glyph(sink, Point::new(origin.x + placed.pos.x, origin.y + placed.pos.y), &placed.glyph);
    }

    // Duration dashes are drawn once per chord, carried by the base note.
    for dash in chord.dash_rects() {
        sink.fill_rect(dash.translated(origin.x, origin.y));
    }
}

fn draw_glyph(sink: &mut dyn PaintSink, pos: Point, glyph: &NoteGlyphLayout) {
    // The box y is the top of the digit, but text draws from the font
    // baseline, so hand the sink the bottom of the box instead.
    sink.draw_text(
        pos.x + glyph.digit_box.x,
        pos.y + glyph.digit_box.y + glyph.digit_box.height,
        &digit_text(glyph.degree),
    );

    if let Some(dot_box) = glyph.octave_dot_box {
        // TODO: draw as many dots as the octave magnitude indicates;
        // currently a single dot stands for any octave distance.
        let x_offset = (dot_box.width - OCTAVE_DOT_WIDTH) * 0.5;
        sink.draw_ellipse(Rect::new(
            pos.x + dot_box.x + x_offset,
            pos.y + dot_box.y,
            OCTAVE_DOT_WIDTH,
            OCTAVE_DOT_HEIGHT,
        ));
    }
}
