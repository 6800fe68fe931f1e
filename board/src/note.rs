//! Note model and the in-memory store.
//!
//! A note is a draggable text box or colored sticky owned by exactly one
//! quadrant for its lifetime. The store serializes all mutations through
//! `&mut self` methods; positions are only written on drag release, clamped
//! against the owning quadrant's current size. No undo, no history.

#[cfg(test)]
#[path = "note_test.rs"]
mod note_test;

use serde::{Deserialize, Serialize};

use crate::geom::clamp_note_position;

/// Unique identifier for a note. Monotonic within a store, never reused.
pub type NoteId = i64;

/// The kind of a note. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// Borderless free-text box.
    Text,
    /// Colored sticky note.
    Sticky,
}

/// Sticky note color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickyColor {
    #[default]
    Yellow,
    Pink,
    Green,
    Blue,
    Purple,
}

impl StickyColor {
    /// Palette display order.
    pub const ALL: [Self; 5] = [Self::Yellow, Self::Pink, Self::Green, Self::Blue, Self::Purple];

    /// CSS modifier class for this color.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Yellow => "note--yellow",
            Self::Pink => "note--pink",
            Self::Green => "note--green",
            Self::Blue => "note--blue",
            Self::Purple => "note--purple",
        }
    }

    /// Human-readable color name, used for accessibility labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }
}

/// A note on the whiteboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, assigned by the store at creation.
    pub id: NoteId,
    /// Text box or sticky. Immutable after creation.
    pub kind: NoteKind,
    /// Free text content. Empty at creation.
    pub content: String,
    /// Position relative to the owning quadrant's top-left corner.
    pub x: f64,
    /// See `x`.
    pub y: f64,
    /// Sticky color. Meaningful only when `kind` is [`NoteKind::Sticky`];
    /// text notes carry the default and never render it.
    pub color: StickyColor,
    /// Index of the owning quadrant (0–3). Fixed at creation.
    pub quadrant: usize,
}

/// In-memory store of the whiteboard's notes.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl NoteStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { notes: Vec::new(), next_id: 1 }
    }

    /// Raise the id counter to at least `base`.
    ///
    /// Pages seed this from the browser clock so ids are time-derived; the
    /// `max` keeps the counter monotonic if seeded more than once.
    pub fn seed_ids(&mut self, base: NoteId) {
        self.next_id = self.next_id.max(base);
    }

    /// Create a note with a fresh id and empty content at a quadrant-local
    /// position. Returns the new note's id.
    pub fn create(&mut self, kind: NoteKind, color: StickyColor, quadrant: usize, x: f64, y: f64) -> NoteId {
        let id = self.next_id;
        self.next_id += 1;
        self.notes.push(Note {
            id,
            kind,
            content: String::new(),
            x,
            y,
            color,
            quadrant,
        });
        id
    }

    /// Replace a note's content. No validation. Returns false if the id is
    /// unknown.
    pub fn update_content(&mut self, id: NoteId, content: &str) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        note.content = content.to_owned();
        true
    }

    /// Commit a drag-released position, clamped against the owning
    /// quadrant's current size. Returns false if the id is unknown.
    pub fn finalize_position(&mut self, id: NoteId, x: f64, y: f64, quad_width: f64, quad_height: f64) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        let (x, y) = clamp_note_position(x, y, quad_width, quad_height);
        note.x = x;
        note.y = y;
        true
    }

    /// Remove a note by id, returning it if it was present.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(idx))
    }

    /// Return a note by id.
    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// All notes in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes owned by one quadrant, cloned for rendering.
    #[must_use]
    pub fn in_quadrant(&self, quadrant: usize) -> Vec<Note> {
        self.notes.iter().filter(|n| n.quadrant == quadrant).cloned().collect()
    }

    /// Trimmed, non-empty note content grouped by quadrant, in insertion
    /// order. Feeds the generate-ideas request body.
    #[must_use]
    pub fn grouped_content(&self) -> [Vec<String>; crate::consts::QUADRANT_COUNT] {
        let mut grouped: [Vec<String>; crate::consts::QUADRANT_COUNT] = Default::default();
        for note in &self.notes {
            let trimmed = note.content.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(bucket) = grouped.get_mut(note.quadrant) {
                bucket.push(trimmed.to_owned());
            }
        }
        grouped
    }

    /// Number of notes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns `true` if the store contains no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
