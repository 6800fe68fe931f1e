//! Shared constants for the whiteboard crate.

// ── Notes ───────────────────────────────────────────────────────

/// Note width in CSS pixels. Drag-release clamping and rendering both use
/// this value, so a clamped note can never overhang its quadrant.
pub const NOTE_WIDTH: f64 = 150.0;

/// Note height in CSS pixels. See [`NOTE_WIDTH`].
pub const NOTE_HEIGHT: f64 = 100.0;

// ── Quadrants ───────────────────────────────────────────────────

/// Number of fixed quadrant panels on the board.
pub const QUADRANT_COUNT: usize = 4;

/// Display titles for the four quadrants, in index order.
pub const QUADRANT_TITLES: [&str; QUADRANT_COUNT] = [
    "Pain Points / Needs",
    "Ideas / Features",
    "Goals / Outcomes",
    "Constraints / Resources",
];
