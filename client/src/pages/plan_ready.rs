//! Plan-ready page: the generated document, resolved and downloadable.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::session::{SESSION_KEY, SessionSnapshot};
#[cfg(feature = "hydrate")]
use crate::util::file_url::resolve_generated_file;
#[cfg(feature = "hydrate")]
use crate::util::storage;

/// Final page — resolves the stored plan path against the gateway host and
/// offers it as a download link.
#[component]
pub fn PlanReadyPage() -> impl IntoView {
    let plan_url = RwSignal::new(None::<String>);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let snapshot: SessionSnapshot = storage::load_json(SESSION_KEY).unwrap_or_default();
            plan_url.set(snapshot.plan_file.as_deref().map(resolve_generated_file));
        }
    });

    view! {
        <div class="plan-ready-page">
            <h1 class="plan-ready-page__title">"Project Plan Ready!"</h1>
            <p class="plan-ready-page__text">
                "Your ThinkFlow project plan has been generated and saved."
            </p>
            <p class="plan-ready-page__hint">
                "You can find the document in your project folder or download it below."
            </p>
            <Show when=move || plan_url.get().is_some()>
                <a
                    class="plan-ready-page__download"
                    href=move || plan_url.get().unwrap_or_default()
                    download=""
                >
                    "Download Project Plan PDF"
                </a>
            </Show>
        </div>
    }
}
