use super::*;
use crate::util::class_target::ClassTarget;
use crate::util::test_support::FakeElement;

#[test]
fn flip_adds_class_when_absent() {
    let card = FakeElement::default();
    assert!(flip(&card));
    assert!(card.has_class(FLIPPED_CLASS));
}

#[test]
fn flip_removes_class_when_present() {
    let card = FakeElement::with_classes(&[FLIPPED_CLASS]);
    assert!(!flip(&card));
    assert!(!card.has_class(FLIPPED_CLASS));
}

#[test]
fn even_flip_counts_preserve_state() {
    let card = FakeElement::default();
    for _ in 0..4 {
        flip(&card);
    }
    assert!(!card.has_class(FLIPPED_CLASS));

    let showing_back = FakeElement::with_classes(&[FLIPPED_CLASS]);
    for _ in 0..6 {
        flip(&showing_back);
    }
    assert!(showing_back.has_class(FLIPPED_CLASS));
}

#[test]
fn odd_flip_counts_invert_state() {
    let card = FakeElement::default();
    for _ in 0..3 {
        flip(&card);
    }
    assert!(card.has_class(FLIPPED_CLASS));
}

#[test]
fn cards_flip_independently() {
    let first = FakeElement::default();
    let second = FakeElement::default();

    flip(&first);

    assert!(first.has_class(FLIPPED_CLASS));
    assert!(!second.has_class(FLIPPED_CLASS));
}

#[test]
fn flip_leaves_unrelated_classes_alone() {
    let card = FakeElement::with_classes(&["flip-card"]);
    flip(&card);
    assert!(card.has_class("flip-card"));
    assert!(card.has_class(FLIPPED_CLASS));
}
