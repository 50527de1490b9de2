//! Shared constants for the numbered-notation renderer (all in user units).

// ── Page & margins ──────────────────────────────────────────────────
pub const PAGE_MARGIN_LEFT: f64 = 50.0;
pub const PAGE_MARGIN_RIGHT: f64 = 30.0;
pub const PAGE_MARGIN_TOP: f64 = 30.0;

// ── Digit glyphs ────────────────────────────────────────────────────
/// Ratio used to reduce the height of the font bounding box returned by
/// the metrics provider; tight font boxes still overstate glyph height.
pub const FONT_BBOX_HEIGHT_RATIO: f64 = 0.7;
/// Point size of the digit font on a default staff.
pub const NOTE_FONT_SIZE: f64 = 26.0;

// ── Octave dots ─────────────────────────────────────────────────────
/// Largest octave distance the model represents.
pub const MAX_OCTAVE_DOTS: i32 = 4;
pub const OCTAVE_DOT_WIDTH: f64 = 10.0;
pub const OCTAVE_DOT_HEIGHT: f64 = 10.0;
/// Horizontal space between octave dots
pub const OCTAVE_DOT_X_SPACE: f64 = 3.0;
/// Vertical space between octave dots
pub const OCTAVE_DOT_Y_SPACE: f64 = 3.0;
/// Dot-box height reserves room for a 2x2 dot grid.
pub const OCTAVE_DOTBOX_HEIGHT: f64 = 2.0 * (OCTAVE_DOT_HEIGHT + OCTAVE_DOT_Y_SPACE);
/// Y-offset between the octave-dot box and the digit box
pub const OCTAVE_DOTBOX_Y_OFFSET: f64 = 10.0;

// ── Duration dashes ─────────────────────────────────────────────────
/// Horizontal space before and between duration dashes
pub const DURATION_DASH_X_SPACE: f64 = 50.0;
pub const DURATION_DASH_WIDTH: f64 = 40.0;
pub const DURATION_DASH_HEIGHT: f64 = 8.0;

// ── Beams ───────────────────────────────────────────────────────────
pub const BEAM_HEIGHT: f64 = 4.0;
/// Vertical space between beams of adjacent levels
pub const BEAM_Y_SPACE: f64 = 8.0;

// ── Event spacing (demo/FFI placement only) ─────────────────────────
pub const EVENT_X_GAP: f64 = 28.0;

// ── Colors ──────────────────────────────────────────────────────────
pub const NOTE_COLOR: &str = "#1a1a1a";
