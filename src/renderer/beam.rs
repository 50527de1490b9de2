//! Beam-group partitioning and horizontal bar layout.
//!
//! Numbered notation draws beams as horizontal bars underneath the digit
//! row rather than as slanted bars between stems. For each nesting level
//! the group is partitioned into maximal contiguous runs of events deep
//! enough to carry a bar at that level, and one segment is emitted per
//! run. All x-coordinates are absolute page positions supplied by the
//! host; the starting y derives from the first event's glyph box.

use log::debug;

use crate::geom::Rect;
use crate::renderer::constants::*;
use crate::renderer::paint::PaintSink;

/// The narrow per-event view the beam engine consumes. Built by the
/// orchestrator from host positions and the glyph layout; the engine has
/// no use for the rest of the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamEvent {
    /// Absolute page x of the event's left edge.
    pub x: f64,
    /// Width of the event's glyph bounding box.
    pub width: f64,
    /// Page y of the bottom edge of the event's base glyph box.
    pub glyph_bottom: f64,
    /// Number of beam levels this event participates in.
    pub level_depth: usize,
    /// Whether the glyph box already extends down over lower-octave dots.
    pub has_low_octave_dots: bool,
}

/// One horizontal bar at one nesting level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamSegment {
    /// 0 is the level closest to the glyphs; higher levels sit further down.
    pub level: usize,
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

/// Full beam layout for one group: the ordered segment list and the
/// aggregate bounding box. Recomputed from scratch on every pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BeamLayout {
    pub segments: Vec<BeamSegment>,
    pub bbox: Rect,
}

/// Maximal contiguous index ranges `(start, end)` (inclusive) whose events
/// all satisfy `level_depth > level`.
///
/// Single left-to-right scan: a run closes the moment a non-qualifying
/// event is seen and scanning resumes right after it. A size-1 run is
/// emitted as a degenerate range; its segment still spans the event's own
/// glyph width.
pub fn level_runs(events: &[BeamEvent], level: usize) -> Vec<(usize, usize)> {
    let n = events.len();
    let mut runs = Vec::new();
    let mut i = 0;
    while i < n {
        if events[i].level_depth <= level {
            i += 1;
            continue;
        }
        // Found the start of a run; advance to its end.
        let start = i;
        let mut j = i + 1;
        while j < n && events[j].level_depth > level {
            j += 1;
        }
        runs.push((start, j - 1));
        i = j;
    }
    runs
}

/// Compute all beam segments and the aggregate bounding box for one group.
///
/// The group must be non-empty with finalized x positions; an empty group
/// is a host-contract violation and fails fast rather than producing a
/// plausible-looking empty layout.
pub fn layout_beams(events: &[BeamEvent]) -> BeamLayout {
    assert!(!events.is_empty(), "beam layout invoked on empty group");

    let levels = events.iter().map(|e| e.level_depth).max().unwrap_or(0);

    // The first event anchors the level-0 bar. Boxes without lower-octave
    // dots reserve that space anyway so bars line up across the group.
    let first = &events[0];
    let mut y = first.glyph_bottom;
    if !first.has_low_octave_dots {
        y += OCTAVE_DOTBOX_Y_OFFSET + OCTAVE_DOTBOX_HEIGHT;
    }
    let beam_distance = BEAM_HEIGHT + BEAM_Y_SPACE;

    let mut layout = BeamLayout::default();
    for level in 0..levels {
        for (start, end) in level_runs(events, level) {
            let x1 = events[start].x;
            let x2 = events[end].x + events[end].width;
            layout.segments.push(BeamSegment { level, x1, x2, y });
            layout.bbox = layout
                .bbox
                .united(&Rect::new(x1, y, x2 - x1, beam_distance));
        }
        y += beam_distance;
    }

    debug!(
        "beam layout: {} events, {} levels, {} segments",
        events.len(),
        levels,
        layout.segments.len()
    );
    layout
}

/// Paint the beam bars as filled rectangles.
pub fn draw_beams(sink: &mut dyn PaintSink, layout: &BeamLayout) {
    for seg in &layout.segments {
        sink.fill_rect(Rect::new(seg.x1, seg.y, seg.x2 - seg.x1, BEAM_HEIGHT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(x: f64, width: f64, level_depth: usize) -> BeamEvent {
        BeamEvent {
            x,
            width,
            glyph_bottom: 20.0,
            level_depth,
            has_low_octave_dots: false,
        }
    }

    #[test]
    fn runs_split_at_shallow_events() {
        let events: Vec<BeamEvent> = [1, 1, 0, 1]
            .iter()
            .enumerate()
            .map(|(i, &d)| event(i as f64 * 30.0, 12.0, d))
            .collect();

        // Index 2 breaks contiguity: two runs, not one.
        assert_eq!(level_runs(&events, 0), vec![(0, 1), (3, 3)]);
        assert_eq!(level_runs(&events, 1), vec![]);
    }

    #[test]
    fn runs_cover_exactly_the_qualifying_indices() {
        let depths = [2, 2, 1, 3, 3, 0, 1];
        let events: Vec<BeamEvent> = depths
            .iter()
            .enumerate()
            .map(|(i, &d)| event(i as f64 * 25.0, 10.0, d))
            .collect();

        assert_eq!(level_runs(&events, 0), vec![(0, 4), (6, 6)]);
        assert_eq!(level_runs(&events, 1), vec![(0, 1), (3, 4)]);
        assert_eq!(level_runs(&events, 2), vec![(3, 4)]);
        assert_eq!(level_runs(&events, 3), vec![]);
    }

    #[test]
    fn single_event_group_gets_one_segment_per_level() {
        let events = vec![event(100.0, 14.0, 2)];
        let layout = layout_beams(&events);

        assert_eq!(layout.segments.len(), 2);
        let s0 = layout.segments[0];
        let s1 = layout.segments[1];
        assert_eq!(s0.level, 0);
        assert_eq!(s1.level, 1);
        // Both bars span the event's own glyph width.
        assert_eq!((s0.x1, s0.x2), (100.0, 114.0));
        assert_eq!((s1.x1, s1.x2), (100.0, 114.0));
        assert_eq!(s1.y - s0.y, BEAM_HEIGHT + BEAM_Y_SPACE);
    }

    #[test]
    fn baseline_reserves_low_dot_space_only_when_absent() {
        let mut events = vec![event(0.0, 10.0, 1), event(30.0, 10.0, 1)];
        let without_dots = layout_beams(&events);
        assert_eq!(
            without_dots.segments[0].y,
            20.0 + OCTAVE_DOTBOX_Y_OFFSET + OCTAVE_DOTBOX_HEIGHT
        );

        // A first event whose box already includes lower-octave dots
        // anchors the bar directly at its bottom edge.
        events[0].has_low_octave_dots = true;
        let with_dots = layout_beams(&events);
        assert_eq!(with_dots.segments[0].y, 20.0);
    }

    #[test]
    fn segment_x_span_runs_from_first_left_edge_to_last_right_edge() {
        let events = vec![event(10.0, 12.0, 1), event(50.0, 16.0, 1)];
        let layout = layout_beams(&events);
        assert_eq!(layout.segments.len(), 1);
        assert_eq!(layout.segments[0].x1, 10.0);
        assert_eq!(layout.segments[0].x2, 66.0);
    }

    #[test]
    fn bbox_covers_all_segments() {
        let events = vec![event(0.0, 10.0, 2), event(40.0, 10.0, 1)];
        let layout = layout_beams(&events);
        // Level 0 spans both events, level 1 only the first.
        assert_eq!(layout.segments.len(), 2);
        let y0 = layout.segments[0].y;
        assert_eq!(layout.bbox.x, 0.0);
        assert_eq!(layout.bbox.y, y0);
        assert_eq!(layout.bbox.width, 50.0);
        assert_eq!(layout.bbox.height, 2.0 * (BEAM_HEIGHT + BEAM_Y_SPACE));
    }

    #[test]
    fn layout_is_idempotent() {
        let events = vec![event(0.0, 10.0, 2), event(30.0, 12.0, 2), event(70.0, 10.0, 1)];
        assert_eq!(layout_beams(&events), layout_beams(&events));
    }

    #[test]
    #[should_panic(expected = "empty group")]
    fn empty_group_is_a_contract_violation() {
        layout_beams(&[]);
    }
}
