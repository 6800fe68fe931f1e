//! Whiteboard page: the four-quadrant board surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the quadrant panels and is the only place that converts
//! viewport clicks into quadrant-relative coordinates, runs the tool
//! transitions, and clamps drag releases against the live quadrant size.
//! Generate Ideas groups the notes by quadrant, calls the gateway, parses
//! the delimited response, and moves on to idea selection.

#[cfg(test)]
#[path = "whiteboard_test.rs"]
mod whiteboard_test;

use board::consts::{QUADRANT_COUNT, QUADRANT_TITLES};
#[cfg(feature = "hydrate")]
use board::geom::{Point, locate_quadrant};
use board::note::{NoteId, NoteStore};
use board::tool::ActiveTool;
use leptos::html::Div;
use leptos::prelude::*;

use crate::components::draggable_note::DraggableNote;
use crate::components::tool_rail::ToolRail;
use crate::net::types::IdeasRequest;
#[cfg(feature = "hydrate")]
use crate::state::session::{IDEA_CACHE_KEY, SESSION_KEY, SessionSnapshot};
#[cfg(feature = "hydrate")]
use crate::util::dialog;
#[cfg(feature = "hydrate")]
use crate::util::ideas::parse_idea_blocks;
#[cfg(feature = "hydrate")]
use crate::util::storage;
#[cfg(feature = "hydrate")]
use crate::util::trends::trend_tags;

/// Build the generate-ideas request from an industry and the store's
/// grouped note content, in quadrant order: pain points, ideas, goals,
/// constraints.
fn ideas_request_from(industry: &str, grouped: [Vec<String>; QUADRANT_COUNT]) -> IdeasRequest {
    let [pain_points, ideas, goals, constraints] = grouped;
    IdeasRequest {
        industry: industry.to_owned(),
        pain_points,
        ideas,
        goals,
        constraints,
    }
}

/// Live bounding rectangles of the four quadrant panels, in index order.
/// `None` until every panel is mounted.
#[cfg(feature = "hydrate")]
fn quadrant_rects(refs: &[NodeRef<Div>; QUADRANT_COUNT]) -> Option<Vec<board::geom::Rect>> {
    refs.iter()
        .map(|node| {
            node.get().map(|el| {
                let rect = el.get_bounding_client_rect();
                board::geom::Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
            })
        })
        .collect()
}

/// Whiteboard page — tool rail, trend header, and the 2×2 quadrant grid.
#[component]
pub fn WhiteboardPage() -> impl IntoView {
    let notes = expect_context::<RwSignal<NoteStore>>();
    let tool = expect_context::<RwSignal<Option<ActiveTool>>>();

    let industry = RwSignal::new(String::new());
    let tags = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    let quadrant_refs: [NodeRef<Div>; QUADRANT_COUNT] =
        [NodeRef::new(), NodeRef::new(), NodeRef::new(), NodeRef::new()];

    // Seed note ids from the clock and pull the stored industry/trends.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            notes.update(|s| s.seed_ids(js_sys::Date::now() as i64));
            let snapshot: SessionSnapshot = storage::load_json(SESSION_KEY).unwrap_or_default();
            industry.set(snapshot.industry.clone().unwrap_or_default());
            tags.set(snapshot.trends.as_deref().map(trend_tags).unwrap_or_default());
        }
    });

    // Hit-test the click against the quadrants, then run the armed tool's
    // transition. Clicks outside every quadrant are ignored entirely.
    let on_board_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(active) = tool.get() else {
                return;
            };
            let Some(rects) = quadrant_rects(&quadrant_refs) else {
                return;
            };
            let click = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let Some((quadrant, local)) = locate_quadrant(click, &rects) else {
                return;
            };
            let (next, spawn) = active.on_quadrant_click();
            tool.set(next);
            if let Some(spawn) = spawn {
                notes.update(|s| {
                    s.create(spawn.kind, spawn.color, quadrant, local.x, local.y);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    // Drag releases come back as raw quadrant-relative positions; clamp
    // them against the owning quadrant's current size and commit.
    let on_note_stop = Callback::new(move |(id, x, y): (NoteId, f64, f64)| {
        #[cfg(feature = "hydrate")]
        {
            let Some(quadrant) = notes.with(|s| s.get(id).map(|n| n.quadrant)) else {
                return;
            };
            let Some(panel) = quadrant_refs.get(quadrant).and_then(NodeRef::get) else {
                return;
            };
            let rect = panel.get_bounding_client_rect();
            notes.update(|s| {
                s.finalize_position(id, x, y, rect.width(), rect.height());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, x, y);
        }
    });

    let on_generate_ideas = move |_ev: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        let request = ideas_request_from(&industry.get(), notes.with(NoteStore::grouped_content));
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_ideas(&request).await {
                Ok(blob) => {
                    let parsed = parse_idea_blocks(&blob);
                    if parsed.is_empty() {
                        dialog::alert("Received empty idea list. Please try again.");
                        busy.set(false);
                        return;
                    }
                    storage::save_json(IDEA_CACHE_KEY, &parsed);
                    let mut snapshot: SessionSnapshot = storage::load_json(SESSION_KEY).unwrap_or_default();
                    snapshot.merge(SessionSnapshot {
                        ideas: Some(parsed),
                        industry: Some(request.industry.clone()),
                        ..Default::default()
                    });
                    storage::save_json(SESSION_KEY, &snapshot);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/select-idea");
                    }
                }
                Err(crate::net::error::GatewayError::EmptyIdeas) => {
                    dialog::alert("Received empty idea list. Please try again.");
                    busy.set(false);
                }
                Err(e) => {
                    log::error!("failed to generate ideas: {e}");
                    dialog::alert("Error generating ideas. See console.");
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            drop(request);
            busy.set(false);
        }
    };

    view! {
        <div class="whiteboard-page">
            <ToolRail/>

            <div class="whiteboard-page__main">
                <div class="whiteboard-header">
                    <div class="whiteboard-header__industry">"Industry: " {move || industry.get()}</div>
                    <div class="whiteboard-header__trends">
                        {move || {
                            tags.get()
                                .into_iter()
                                .map(|tag| view! { <span class="whiteboard-header__tag">{tag}</span> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <button
                        class="whiteboard-header__generate"
                        disabled=move || busy.get()
                        on:click=on_generate_ideas
                    >
                        "Generate Ideas"
                    </button>
                </div>

                <div class="quadrant-grid" on:click=on_board_click>
                    {QUADRANT_TITLES
                        .iter()
                        .enumerate()
                        .map(|(index, title)| {
                            let panel_ref = quadrant_refs[index];
                            view! {
                                <div class="quadrant" node_ref=panel_ref>
                                    <h3 class="quadrant__title">{*title}</h3>
                                    <For
                                        each=move || notes.with(|s| s.in_quadrant(index))
                                        key=|note| note.id
                                        children=move |note| {
                                            view! { <DraggableNote id=note.id on_stop=on_note_stop/> }
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
