//! Root application component with routing and context providers.

use board::note::NoteStore;
use board::tool::ActiveTool;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    plan_ready::PlanReadyPage, select_idea::SelectIdeaPage, setup::SetupPage, whiteboard::WhiteboardPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the whiteboard's shared state contexts and sets up client-side
/// routing across the four flow pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let notes = RwSignal::new(NoteStore::new());
    let tool = RwSignal::new(None::<ActiveTool>);

    provide_context(notes);
    provide_context(tool);

    view! {
        <Stylesheet id="leptos" href="/pkg/thinkflow.css"/>
        <Title text="ThinkFlow"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SetupPage/>
                <Route path=StaticSegment("whiteboard") view=WhiteboardPage/>
                <Route path=StaticSegment("select-idea") view=SelectIdeaPage/>
                <Route path=StaticSegment("plan-ready") view=PlanReadyPage/>
            </Routes>
        </Router>
    }
}
