//! The active placement tool and its click transitions.
//!
//! The tool is a sum type carrying its own payload: a sticky tool that is
//! still waiting for a palette choice is `Sticky(None)`, a first-class
//! state rather than an out-of-band flag. Transitions are pure functions
//! consuming the current tool and returning the next tool plus what the
//! board surface should do; the surface owns the signal and applies both.

#[cfg(test)]
#[path = "tool_test.rs"]
mod tool_test;

use crate::note::{NoteKind, StickyColor};

/// The currently armed placement tool. `None` at the board level means
/// clicks are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTool {
    /// Next quadrant click places a text note.
    Text,
    /// Next quadrant click places a sticky of the carried color; `None`
    /// means the palette choice is still pending.
    Sticky(Option<StickyColor>),
    /// Next note click deletes that note.
    Delete,
}

/// What a quadrant click should spawn, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSpawn {
    pub kind: NoteKind,
    pub color: StickyColor,
}

impl ActiveTool {
    /// Arm the sticky tool with a chosen palette color.
    #[must_use]
    pub fn sticky_with(color: StickyColor) -> Self {
        Self::Sticky(Some(color))
    }

    /// Transition for a click inside a quadrant, at empty board space.
    ///
    /// Returns the next tool state and the note to spawn, if any:
    /// - `Text` spawns a text note and disarms;
    /// - `Sticky(Some(color))` spawns that sticky and disarms;
    /// - `Sticky(None)` (palette choice pending) spawns nothing and
    ///   disarms;
    /// - `Delete` spawns nothing and stays armed; empty space is not a
    ///   delete target.
    ///
    /// Clicks outside every quadrant never reach this transition.
    #[must_use]
    pub fn on_quadrant_click(self) -> (Option<Self>, Option<NoteSpawn>) {
        match self {
            Self::Text => (
                None,
                Some(NoteSpawn { kind: NoteKind::Text, color: StickyColor::default() }),
            ),
            Self::Sticky(Some(color)) => (None, Some(NoteSpawn { kind: NoteKind::Sticky, color })),
            Self::Sticky(None) => (None, None),
            Self::Delete => (Some(Self::Delete), None),
        }
    }

    /// Transition for a click on an existing note.
    ///
    /// Returns the next tool state and whether the clicked note should be
    /// deleted. Only the delete tool reacts; it removes exactly that note
    /// and disarms.
    #[must_use]
    pub fn on_note_click(self) -> (Option<Self>, bool) {
        match self {
            Self::Delete => (None, true),
            other => (Some(other), false),
        }
    }

    /// Whether the color palette should be visible: the sticky tool is
    /// armed but no color has been chosen yet.
    #[must_use]
    pub fn awaiting_color(self) -> bool {
        matches!(self, Self::Sticky(None))
    }
}
