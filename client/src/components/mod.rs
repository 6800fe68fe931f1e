//! Reusable UI components for the whiteboard page.

pub mod draggable_note;
pub mod tool_rail;
