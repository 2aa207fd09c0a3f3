//! Top bar with the page title and the theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme::{self, Theme};

/// Top toolbar for the card page.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toolbar">
            <span class="toolbar__title">"Flip Cards"</span>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let next = theme::toggle_page();
                    ui.update(|u| u.dark_mode = next == Theme::Dark);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </div>
    }
}
