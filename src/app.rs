//! Root application component and startup wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::flip_card::FlipCard;
use crate::components::toolbar::Toolbar;
use crate::state::ui::UiState;
use crate::util::theme;

/// Front/back copy for the demo deck.
const DECK: [(&str, &str); 3] = [
    (
        "Ownership",
        "Every value has a single owning binding; when it goes out of scope the value is dropped.",
    ),
    (
        "Borrowing",
        "Shared or exclusive references grant access to a value without transferring ownership.",
    ),
    (
        "Lifetime",
        "The region of code during which a reference is guaranteed to stay valid.",
    ),
];

/// Root application component.
///
/// Provides the shared UI state context, re-applies any saved theme once
/// after mount, and renders the toolbar plus the card deck.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Re-apply the saved theme once the page has mounted. The host runs
    // this exactly once per page load.
    Effect::new(move || {
        let dark = theme::restore_page();
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Title text="Flip Cards"/>

        <Toolbar/>

        <main class="deck">
            {DECK
                .iter()
                .map(|&(front, back)| {
                    view! {
                        <FlipCard front=front.to_owned() back=back.to_owned()/>
                    }
                })
                .collect::<Vec<_>>()}
        </main>
    }
}
