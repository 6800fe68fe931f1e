//! Setup page: industry, team size, and the team-member table.
//!
//! Continue posts the members' raw skills to the hashtag endpoint, merges
//! everything the page collected into the session snapshot, and moves on
//! to the whiteboard. A failed call alerts and stays put.

#[cfg(test)]
#[path = "setup_test.rs"]
mod setup_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::session::SESSION_KEY;
use crate::state::session::{SessionSnapshot, Skills, TeamMember};
#[cfg(feature = "hydrate")]
use crate::util::dialog;
#[cfg(feature = "hydrate")]
use crate::util::storage;

/// One editable member row: name and the raw comma-delimited skills string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberDraft {
    pub name: String,
    pub skills: String,
}

/// Resize the member rows to `size`, padding with empty rows and
/// truncating from the end; rows that survive keep what was typed.
fn resize_member_drafts(mut drafts: Vec<MemberDraft>, size: usize) -> Vec<MemberDraft> {
    while drafts.len() < size {
        drafts.push(MemberDraft::default());
    }
    drafts.truncate(size);
    drafts
}

/// Turn the draft rows into stored team members: names trimmed, skills
/// normalized once at this boundary and stored as the list shape.
fn members_from_drafts(drafts: &[MemberDraft]) -> Vec<TeamMember> {
    drafts
        .iter()
        .map(|d| TeamMember {
            name: d.name.trim().to_owned(),
            skills: Skills::normalized_from(&d.skills),
        })
        .collect()
}

/// Landing page: collect the team, fetch industry trends, and continue to
/// the whiteboard.
#[component]
pub fn SetupPage() -> impl IntoView {
    let industry = RwSignal::new("Healthcare".to_owned());
    let team_size = RwSignal::new(3_u32);
    let members = RwSignal::new(resize_member_drafts(Vec::new(), 3));
    let busy = RwSignal::new(false);

    // Keep one row per member as the size changes.
    Effect::new(move || {
        let size = team_size.get() as usize;
        members.update(|m| *m = resize_member_drafts(std::mem::take(m), size));
    });

    let on_continue = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let drafts = members.get();
        let request = crate::net::types::HashtagsRequest {
            industry: industry.get().trim().to_owned(),
            skills: drafts.iter().map(|d| d.skills.trim().to_owned()).collect(),
        };
        let team = members_from_drafts(&drafts);
        let update = SessionSnapshot {
            industry: Some(request.industry.clone()),
            team_size: Some(team_size.get()),
            team_members: Some(team),
            ..Default::default()
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_hashtags(&request).await {
                Ok(trends) => {
                    let mut snapshot: SessionSnapshot = storage::load_json(SESSION_KEY).unwrap_or_default();
                    snapshot.merge(SessionSnapshot { trends: Some(trends), ..update });
                    storage::save_json(SESSION_KEY, &snapshot);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/whiteboard");
                    }
                }
                Err(e) => {
                    log::error!("failed to generate trends: {e}");
                    dialog::alert("Failed to generate project trends. Please try again.");
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            drop((request, update));
            busy.set(false);
        }
    };

    view! {
        <div class="setup-page">
            <h1 class="setup-page__title">"ThinkFlow: Smart Project Kickstart"</h1>
            <p class="setup-page__intro">
                "This assistant helps your team generate AI-powered project ideas in your \
                 chosen industry, based on your members' real skills. Start by entering \
                 your team's focus and composition."
            </p>

            <form class="setup-form" on:submit=on_continue>
                <label class="setup-form__label">"Target Industry"</label>
                <input
                    class="setup-form__input"
                    placeholder="e.g. Healthcare, Finance, Education"
                    prop:value=move || industry.get()
                    on:input=move |ev| industry.set(event_target_value(&ev))
                />

                <label class="setup-form__label">"Team Size"</label>
                <input
                    class="setup-form__input"
                    type="number"
                    min="1"
                    prop:value=move || team_size.get().to_string()
                    on:input=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            team_size.set(size);
                        }
                    }
                />

                <h2 class="setup-form__subtitle">"Team Members & Skills"</h2>
                <p class="setup-form__hint">"List of your team and their key competencies"</p>
                <table class="setup-form__members">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Skills"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            members
                                .get()
                                .iter()
                                .enumerate()
                                .map(|(i, member)| {
                                    view! {
                                        <tr>
                                            <td>
                                                <input
                                                    class="setup-form__member-input"
                                                    prop:value=member.name.clone()
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        members.update(|m| {
                                                            if let Some(row) = m.get_mut(i) {
                                                                row.name = value;
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    class="setup-form__member-input"
                                                    prop:value=member.skills.clone()
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        members.update(|m| {
                                                            if let Some(row) = m.get_mut(i) {
                                                                row.skills = value;
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>

                <button class="setup-form__continue" type="submit" disabled=move || busy.get()>
                    "Continue →"
                </button>
            </form>
        </div>
    }
}
