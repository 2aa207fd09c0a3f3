//! A card that flips between its front and back faces when clicked.

use leptos::html::Div;
use leptos::prelude::*;

/// One self-contained flip card.
///
/// Clicking toggles the flipped class on the card's own element; the CSS
/// transition does the rest. Cards never share flip state.
#[component]
pub fn FlipCard(front: String, back: String) -> impl IntoView {
    let card_ref = NodeRef::<Div>::new();

    let on_flip = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = card_ref.get() {
                let card: &web_sys::Element = el.as_ref();
                crate::util::card::flip(card);
            }
        }
    };

    view! {
        <div class="flip-card" node_ref=card_ref on:click=on_flip>
            <div class="flip-card__inner">
                <div class="flip-card__face flip-card__face--front">{front}</div>
                <div class="flip-card__face flip-card__face--back">{back}</div>
            </div>
        </div>
    }
}
