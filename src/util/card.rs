//! Card flip behavior.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::util::class_target::ClassTarget;

/// Class that shows a card's back face.
pub const FLIPPED_CLASS: &str = "flipped";

/// Invert the flipped state of `card`, returning whether it now shows its
/// back face. Two flips return the card to its original face.
pub fn flip(card: &impl ClassTarget) -> bool {
    card.toggle_class(FLIPPED_CLASS)
}
