//! Select-idea page: pick one generated idea and request the plan.
//!
//! Ideas come from the session snapshot, falling back to the idea-cache
//! blob when the snapshot has none. Generate Plan validates the snapshot's
//! prerequisites before calling the gateway; every member's skills are
//! normalized at this boundary.

#[cfg(test)]
#[path = "select_idea_test.rs"]
mod select_idea_test;

use leptos::prelude::*;

use crate::net::types::{PlanRequest, PlanTeamMember};
#[cfg(feature = "hydrate")]
use crate::state::session::IDEA_CACHE_KEY;
use crate::state::session::{SESSION_KEY, SessionSnapshot};
use crate::util::dialog;
#[cfg(feature = "hydrate")]
use crate::util::ideas::idea_blocks;
use crate::util::storage;

/// Load idea line-blocks: the snapshot's idea list first, then the
/// fallback cache of the last generated list.
#[cfg(feature = "hydrate")]
fn load_idea_blocks() -> Vec<Vec<String>> {
    let snapshot: SessionSnapshot = storage::load_json(SESSION_KEY).unwrap_or_default();
    let ideas = snapshot
        .ideas
        .filter(|list| !list.is_empty())
        .or_else(|| storage::load_json::<Vec<String>>(IDEA_CACHE_KEY))
        .unwrap_or_default();
    idea_blocks(&ideas)
}

/// Build the plan request from the stored snapshot and the chosen idea.
///
/// Returns `None` when the snapshot is missing a required field (industry,
/// team size, or a non-empty member list); the caller alerts and makes no
/// call. Member skills are normalized here, once.
fn plan_request_from(snapshot: &SessionSnapshot, selected_idea: String) -> Option<PlanRequest> {
    if !snapshot.has_plan_prerequisites() {
        return None;
    }
    let members = snapshot
        .team_members
        .as_ref()?
        .iter()
        .map(|m| PlanTeamMember { name: m.name.clone(), skills: m.skills.normalize() })
        .collect();
    Some(PlanRequest {
        industry: snapshot.industry.clone()?,
        team_size: snapshot.team_size?,
        team_members: members,
        selected_idea,
    })
}

/// Select-idea page — one card per generated idea block.
#[component]
pub fn SelectIdeaPage() -> impl IntoView {
    let blocks = RwSignal::new(Vec::<Vec<String>>::new());
    let selected = RwSignal::new(None::<usize>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let loaded = load_idea_blocks();
            if loaded.is_empty() {
                log::warn!("no stored ideas to display");
            }
            blocks.set(loaded);
        }
    });

    let on_generate_plan = move |_ev: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        let Some(index) = selected.get() else {
            dialog::alert("Please select an idea to continue.");
            return;
        };
        let Some(block) = blocks.with(|b| b.get(index).cloned()) else {
            return;
        };
        let selected_idea = block.join("\n");
        let snapshot: SessionSnapshot = storage::load_json(SESSION_KEY).unwrap_or_default();
        let Some(request) = plan_request_from(&snapshot, selected_idea.clone()) else {
            dialog::alert("Missing required fields: industry, team size, or team members.");
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_plan(&request).await {
                Ok(file_url) => {
                    let mut snapshot: SessionSnapshot = storage::load_json(SESSION_KEY).unwrap_or_default();
                    snapshot.merge(SessionSnapshot {
                        selected_idea: Some(selected_idea),
                        plan_file: Some(file_url),
                        ..Default::default()
                    });
                    storage::save_json(SESSION_KEY, &snapshot);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/plan-ready");
                    }
                }
                Err(e) => {
                    log::error!("plan generation failed: {e}");
                    dialog::alert(&format!("Failed to generate PDF: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            drop((request, selected_idea));
            busy.set(false);
        }
    };

    view! {
        <div class="select-idea-page">
            <h1 class="select-idea-page__title">"Choose one idea to build on"</h1>
            <div class="idea-list">
                <For
                    each={move || blocks.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, _)| *index
                    children=move |(index, lines)| {
                        let card_selected = move || selected.get() == Some(index);
                        view! {
                            <div
                                class="idea-card"
                                class:idea-card--selected=card_selected
                                on:click=move |_| selected.set(Some(index))
                            >
                                <div class="idea-card__marker">
                                    {move || if card_selected() { "●" } else { "○" }}
                                </div>
                                <div class="idea-card__body">
                                    {lines
                                        .iter()
                                        .map(|line| view! { <p class="idea-card__line">{line.clone()}</p> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            <div class="select-idea-page__actions">
                <button
                    class="select-idea-page__generate"
                    disabled=move || busy.get()
                    on:click=on_generate_plan
                >
                    "Generate a Plan →"
                </button>
            </div>
        </div>
    }
}
