use super::*;
use crate::note::{NoteKind, NoteStore, StickyColor};

// =============================================================
// Quadrant clicks
// =============================================================

#[test]
fn text_tool_spawns_text_note_and_disarms() {
    let (next, spawn) = ActiveTool::Text.on_quadrant_click();
    assert_eq!(next, None);
    assert_eq!(spawn.map(|s| s.kind), Some(NoteKind::Text));
}

#[test]
fn sticky_tool_with_color_spawns_that_color_and_disarms() {
    let (next, spawn) = ActiveTool::sticky_with(StickyColor::Pink).on_quadrant_click();
    assert_eq!(next, None);
    let spawn = spawn.unwrap();
    assert_eq!(spawn.kind, NoteKind::Sticky);
    assert_eq!(spawn.color, StickyColor::Pink);
}

#[test]
fn sticky_tool_awaiting_color_spawns_nothing_and_disarms() {
    let (next, spawn) = ActiveTool::Sticky(None).on_quadrant_click();
    assert_eq!(next, None);
    assert_eq!(spawn, None);
}

#[test]
fn delete_tool_on_empty_space_spawns_nothing_and_stays_armed() {
    let (next, spawn) = ActiveTool::Delete.on_quadrant_click();
    assert_eq!(next, Some(ActiveTool::Delete));
    assert_eq!(spawn, None);
}

// =============================================================
// Note clicks
// =============================================================

#[test]
fn delete_tool_on_note_deletes_and_disarms() {
    let (next, delete) = ActiveTool::Delete.on_note_click();
    assert_eq!(next, None);
    assert!(delete);
}

#[test]
fn non_delete_tools_ignore_note_clicks() {
    for tool in [ActiveTool::Text, ActiveTool::Sticky(None), ActiveTool::sticky_with(StickyColor::Blue)] {
        let (next, delete) = tool.on_note_click();
        assert_eq!(next, Some(tool));
        assert!(!delete);
    }
}

// =============================================================
// Palette visibility
// =============================================================

#[test]
fn palette_shows_only_while_sticky_awaits_color() {
    assert!(ActiveTool::Sticky(None).awaiting_color());
    assert!(!ActiveTool::sticky_with(StickyColor::Green).awaiting_color());
    assert!(!ActiveTool::Text.awaiting_color());
    assert!(!ActiveTool::Delete.awaiting_color());
}

// =============================================================
// Full click flows against a store
// =============================================================

#[test]
fn sticky_click_flow_creates_pink_note_in_quadrant_2() {
    let mut store = NoteStore::new();
    let mut tool = Some(ActiveTool::sticky_with(StickyColor::Pink));

    let armed = tool.unwrap();
    let (next, spawn) = armed.on_quadrant_click();
    tool = next;
    let spawn = spawn.unwrap();
    let id = store.create(spawn.kind, spawn.color, 2, 30.0, 40.0);

    assert_eq!(tool, None);
    let note = store.get(id).unwrap();
    assert_eq!(note.kind, NoteKind::Sticky);
    assert_eq!(note.color, StickyColor::Pink);
    assert_eq!(note.quadrant, 2);
}

#[test]
fn delete_click_flow_removes_exactly_the_clicked_note() {
    let mut store = NoteStore::new();
    let keep = store.create(NoteKind::Text, StickyColor::Yellow, 0, 0.0, 0.0);
    let target = store.create(NoteKind::Sticky, StickyColor::Blue, 0, 10.0, 10.0);
    let mut tool = Some(ActiveTool::Delete);

    let armed = tool.unwrap();
    let (next, delete) = armed.on_note_click();
    tool = next;
    if delete {
        store.remove(target);
    }

    assert_eq!(tool, None);
    assert!(store.get(target).is_none());
    assert!(store.get(keep).is_some());
}

#[test]
fn delete_click_on_blank_space_leaves_set_unchanged() {
    let mut store = NoteStore::new();
    store.create(NoteKind::Text, StickyColor::Yellow, 1, 0.0, 0.0);
    let before = store.clone();

    let (next, spawn) = ActiveTool::Delete.on_quadrant_click();
    assert_eq!(spawn, None);
    assert_eq!(next, Some(ActiveTool::Delete));
    assert_eq!(store, before);
}
