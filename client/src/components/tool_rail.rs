//! Vertical strip of tool buttons for selecting the active placement tool.
//!
//! DESIGN
//! ======
//! Keeps active-tool switching centralized so the board surface can treat
//! tool choice as state, not direct DOM coupling. Arming the sticky tool
//! shows the color palette; picking a swatch carries the color in the tool
//! state itself, so the next quadrant click knows what to place.

use board::note::StickyColor;
use board::tool::ActiveTool;
use leptos::prelude::*;

/// Vertical rail with the delete, text, and sticky tools plus the sticky
/// color palette.
#[component]
pub fn ToolRail() -> impl IntoView {
    let tool = expect_context::<RwSignal<Option<ActiveTool>>>();

    let delete_active = move || matches!(tool.get(), Some(ActiveTool::Delete));
    let text_active = move || matches!(tool.get(), Some(ActiveTool::Text));
    let sticky_active = move || matches!(tool.get(), Some(ActiveTool::Sticky(_)));
    let palette_open = move || tool.get().is_some_and(ActiveTool::awaiting_color);

    view! {
        <div class="tool-rail">
            <button
                class="tool-rail__btn tool-rail__btn--delete"
                class:tool-rail__btn--active=delete_active
                title="Delete note"
                on:click=move |_| tool.set(Some(ActiveTool::Delete))
            >
                "✕"
            </button>
            <button
                class="tool-rail__btn tool-rail__btn--text"
                class:tool-rail__btn--active=text_active
                title="Place text"
                on:click=move |_| tool.set(Some(ActiveTool::Text))
            >
                "T"
            </button>
            <button
                class="tool-rail__btn tool-rail__btn--sticky"
                class:tool-rail__btn--active=sticky_active
                title="Place sticky note"
                on:click=move |_| tool.set(Some(ActiveTool::Sticky(None)))
            >
                "▣"
            </button>

            <Show when=palette_open>
                <div class="tool-rail__palette">
                    {StickyColor::ALL
                        .iter()
                        .map(|&color| {
                            view! {
                                <button
                                    class=format!("tool-rail__swatch {}", color.css_class())
                                    aria-label=format!("Select {} sticky note", color.label())
                                    on:click=move |_| tool.set(Some(ActiveTool::sticky_with(color)))
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
