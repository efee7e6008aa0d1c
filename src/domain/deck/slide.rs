//! Deck and Slide entities.

use std::fmt;

use super::entry::EntrySequence;
use crate::domain::foundation::{SlideIndex, ValidationError};

/// Whether a slide (and its indicator) is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Active,
    #[default]
    Inactive,
}

impl Visibility {
    pub fn is_active(&self) -> bool {
        matches!(self, Visibility::Active)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visibility::Active => "active",
            Visibility::Inactive => "inactive",
        };
        write!(f, "{}", s)
    }
}

/// A single slide, identified by its position in the deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    index: SlideIndex,
    title: String,
    visibility: Visibility,
    entry: Option<EntrySequence>,
}

impl Slide {
    pub fn index(&self) -> SlideIndex {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Animation replayed whenever this slide becomes active.
    pub fn entry(&self) -> Option<&EntrySequence> {
        self.entry.as_ref()
    }
}

/// Fixed, ordered collection of slides.
///
/// The length is set at construction and never changes. Exactly one slide is
/// active at any time; the first slide starts active.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Builds a deck from `(title, entry)` pairs in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if no slides are given.
    pub fn new(
        slides: impl IntoIterator<Item = (String, Option<EntrySequence>)>,
    ) -> Result<Self, ValidationError> {
        let slides: Vec<Slide> = slides
            .into_iter()
            .enumerate()
            .map(|(i, (title, entry))| Slide {
                index: SlideIndex::new(i),
                title,
                visibility: if i == 0 {
                    Visibility::Active
                } else {
                    Visibility::Inactive
                },
                entry,
            })
            .collect();

        if slides.is_empty() {
            return Err(ValidationError::empty_field("slides"));
        }
        Ok(Self { slides })
    }

    /// Number of slides (N).
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty decks.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> SlideIndex {
        SlideIndex::new(self.slides.len() - 1)
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.slides.len()
    }

    pub fn slide(&self, index: SlideIndex) -> Option<&Slide> {
        self.slides.get(index.value())
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_count(&self) -> usize {
        self.slides
            .iter()
            .filter(|s| s.visibility.is_active())
            .count()
    }

    pub(crate) fn set_visibility(&mut self, index: SlideIndex, visibility: Visibility) {
        if let Some(slide) = self.slides.get_mut(index.value()) {
            slide.visibility = visibility;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(n: usize) -> Vec<(String, Option<EntrySequence>)> {
        (0..n).map(|i| (format!("Slide {}", i + 1), None)).collect()
    }

    #[test]
    fn new_deck_activates_first_slide_only() {
        let deck = Deck::new(titles(4)).unwrap();
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.active_count(), 1);
        assert!(deck.slides()[0].visibility().is_active());
    }

    #[test]
    fn empty_deck_is_rejected() {
        let result = Deck::new(titles(0));
        assert_eq!(result, Err(ValidationError::empty_field("slides")));
    }

    #[test]
    fn slides_are_indexed_by_position() {
        let deck = Deck::new(titles(3)).unwrap();
        assert_eq!(deck.last_index(), SlideIndex::new(2));
        assert_eq!(deck.slide(SlideIndex::new(1)).unwrap().title(), "Slide 2");
        assert!(deck.slide(SlideIndex::new(3)).is_none());
        assert!(deck.contains(2));
        assert!(!deck.contains(3));
    }

    #[test]
    fn visibility_displays_as_css_class() {
        assert_eq!(Visibility::Active.to_string(), "active");
        assert_eq!(Visibility::default(), Visibility::Inactive);
    }
}
