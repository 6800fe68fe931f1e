//! Draggable note: the per-note drag controller and content editor.
//!
//! DESIGN
//! ======
//! The controller is a transparent position reporter: pointer-down captures
//! the pointer, pointer-move tracks a live offset, and pointer-up reports
//! the new quadrant-relative position to the board surface through
//! `on_stop`. Converting and clamping that position is the board surface's
//! job, not the controller's. Content edits go straight to the note store;
//! plain clicks run the delete transition against the active tool.

use board::consts::{NOTE_HEIGHT, NOTE_WIDTH};
use board::note::{NoteId, NoteKind, NoteStore};
use board::tool::ActiveTool;
use leptos::html::Div;
use leptos::prelude::*;

/// Live drag gesture: where the pointer went down and how far it has moved.
#[derive(Clone, Copy, Debug)]
struct Drag {
    origin_x: f64,
    origin_y: f64,
    dx: f64,
    dy: f64,
}

/// One draggable note (text box or colored sticky) inside its quadrant.
///
/// Reads its own note from the store by id so removals and committed drag
/// positions flow back in reactively.
#[component]
pub fn DraggableNote(id: NoteId, #[prop(into)] on_stop: Callback<(NoteId, f64, f64)>) -> impl IntoView {
    let notes = expect_context::<RwSignal<NoteStore>>();
    let tool = expect_context::<RwSignal<Option<ActiveTool>>>();

    let wrapper = NodeRef::<Div>::new();
    let drag = RwSignal::new(None::<Drag>);

    let note = move || notes.with(|s| s.get(id).cloned());

    // Rendered size matches the clamp constants, so a committed position
    // can never leave the note overhanging its quadrant.
    let position = move || {
        let (x, y) = note().map(|n| (n.x, n.y)).unwrap_or_default();
        let (dx, dy) = drag.get().map(|d| (d.dx, d.dy)).unwrap_or_default();
        format!(
            "left: {}px; top: {}px; width: {NOTE_WIDTH}px; height: {NOTE_HEIGHT}px;",
            x + dx,
            y + dy
        )
    };

    let note_class = move || match note() {
        Some(n) if n.kind == NoteKind::Sticky => format!("note note--sticky {}", n.color.css_class()),
        _ => "note note--text".to_owned(),
    };

    let placeholder = move || {
        if note().is_some_and(|n| n.kind == NoteKind::Sticky) {
            "Enter note..."
        } else {
            "Enter text..."
        }
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = wrapper.get() {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
        drag.set(Some(Drag {
            origin_x: f64::from(ev.client_x()),
            origin_y: f64::from(ev.client_y()),
            dx: 0.0,
            dy: 0.0,
        }));
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        drag.update(|d| {
            if let Some(d) = d {
                d.dx = f64::from(ev.client_x()) - d.origin_x;
                d.dy = f64::from(ev.client_y()) - d.origin_y;
            }
        });
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        let Some(d) = drag.get() else {
            return;
        };
        drag.set(None);
        if let Some(n) = note() {
            on_stop.run((id, n.x + d.dx, n.y + d.dy));
        }
    };

    // Delete-tool clicks remove exactly this note; any other tool ignores
    // the click and the board surface sees it afterwards with the tool
    // already transitioned.
    let on_click = move |_ev: leptos::ev::MouseEvent| {
        let Some(active) = tool.get() else {
            return;
        };
        let (next, delete) = active.on_note_click();
        tool.set(next);
        if delete {
            notes.update(|s| {
                s.remove(id);
            });
        }
    };

    view! {
        <div
            node_ref=wrapper
            class="note-wrapper"
            style=position
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:click=on_click
        >
            <textarea
                class=note_class
                placeholder=placeholder
                aria-label=move || format!("Note {id}")
                prop:value=move || note().map(|n| n.content).unwrap_or_default()
                on:input=move |ev| {
                    let content = event_target_value(&ev);
                    notes.update(|s| {
                        s.update_content(id, &content);
                    });
                }
            ></textarea>
        </div>
    }
}
