//! DeckManifest - declarative description of a presentation's page structure.
//!
//! The manifest is read once at start-up (from YAML or built in code) and
//! turned into the typed `Deck` and decision set. After that the view layer
//! is only ever written to.

use serde::{Deserialize, Serialize};

use super::entry::{ElementGroup, EntryEffect, EntrySequence};
use super::slide::Deck;
use crate::domain::foundation::{Percentage, ValidationError};

/// Most elements one entry sequence may animate.
pub const MAX_ENTRY_ELEMENTS: usize = 100;

/// Longest delay, in milliseconds, before an entry sequence settles.
pub const MAX_ENTRY_DELAY_MS: u64 = 60_000;

/// One slide entry in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideManifest {
    pub title: String,
    #[serde(default)]
    pub entry: Option<EntrySequence>,
}

/// Page structure for a presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckManifest {
    pub slides: Vec<SlideManifest>,
    /// Decision checkbox labels, in page order.
    #[serde(default)]
    pub decisions: Vec<String>,
}

impl DeckManifest {
    /// Parses a manifest from YAML.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if the document does not
    /// match the manifest schema.
    pub fn from_yaml(source: &str) -> Result<Self, ValidationError> {
        serde_yaml::from_str(source)
            .map_err(|e| ValidationError::invalid_format("manifest", e.to_string()))
    }

    /// Builds the typed deck.
    pub fn build_deck(&self) -> Result<Deck, ValidationError> {
        for (i, label) in self.decisions.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("decisions[{}]", i)));
            }
        }
        for (i, slide) in self.slides.iter().enumerate() {
            if let Some(entry) = &slide.entry {
                check_entry_timing(i, entry)?;
            }
        }
        Deck::new(
            self.slides
                .iter()
                .map(|s| (s.title.clone(), s.entry.clone())),
        )
    }

    /// The four-slide incident briefing deck.
    pub fn incident_briefing() -> Self {
        Self {
            slides: vec![
                SlideManifest {
                    title: "Incident Status".to_string(),
                    entry: Some(EntrySequence {
                        group: ElementGroup::new("status-item"),
                        effect: EntryEffect::Rise {
                            offset_px: 20,
                            duration_ms: 400,
                            count: 4,
                        },
                        step_ms: 150,
                        lead_in_ms: 0,
                    }),
                },
                SlideManifest {
                    title: "Timeline".to_string(),
                    entry: Some(EntrySequence {
                        group: ElementGroup::new("timeline-row"),
                        effect: EntryEffect::SlideIn {
                            offset_px: -20,
                            duration_ms: 300,
                            count: 6,
                        },
                        step_ms: 100,
                        lead_in_ms: 0,
                    }),
                },
                SlideManifest {
                    title: "Recovery Progress".to_string(),
                    entry: Some(EntrySequence {
                        group: ElementGroup::new("progress-fill"),
                        effect: EntryEffect::Grow {
                            duration_ms: 800,
                            widths: vec![
                                Percentage::new(85),
                                Percentage::new(60),
                                Percentage::new(35),
                            ],
                        },
                        step_ms: 200,
                        lead_in_ms: 300,
                    }),
                },
                SlideManifest {
                    title: "Recommendations".to_string(),
                    entry: Some(EntrySequence {
                        group: ElementGroup::new("recommendation-block"),
                        effect: EntryEffect::Rise {
                            offset_px: 30,
                            duration_ms: 500,
                            count: 3,
                        },
                        step_ms: 200,
                        lead_in_ms: 0,
                    }),
                },
            ],
            decisions: vec![
                "Approve emergency change window for database failover".to_string(),
                "Authorize customer-facing incident communication".to_string(),
                "Engage vendor escalation support".to_string(),
            ],
        }
    }
}

fn check_entry_timing(slide: usize, entry: &EntrySequence) -> Result<(), ValidationError> {
    let count = entry.element_count();
    if count > MAX_ENTRY_ELEMENTS {
        return Err(ValidationError::out_of_range(
            format!("slides[{}].entry.count", slide),
            0,
            MAX_ENTRY_ELEMENTS as i64,
            i64::try_from(count).unwrap_or(i64::MAX),
        ));
    }
    match entry.total_delay_ms() {
        Some(ms) if ms <= MAX_ENTRY_DELAY_MS => Ok(()),
        total => Err(ValidationError::out_of_range(
            format!("slides[{}].entry.delay_ms", slide),
            0,
            MAX_ENTRY_DELAY_MS as i64,
            total.map_or(i64::MAX, |ms| i64::try_from(ms).unwrap_or(i64::MAX)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_briefing_has_four_animated_slides() {
        let manifest = DeckManifest::incident_briefing();
        let deck = manifest.build_deck().unwrap();
        assert_eq!(deck.len(), 4);
        assert!(deck.slides().iter().all(|s| s.entry().is_some()));
        assert_eq!(manifest.decisions.len(), 3);
    }

    #[test]
    fn from_yaml_parses_slides_and_decisions() {
        let yaml = r#"
slides:
  - title: Overview
  - title: Numbers
    entry:
      group: progress-fill
      step_ms: 200
      lead_in_ms: 300
      effect:
        kind: grow
        duration_ms: 800
        widths: [50, 75]
decisions:
  - Ship it
  - Hire help
"#;
        let manifest = DeckManifest::from_yaml(yaml).unwrap();
        assert_eq!(manifest.slides.len(), 2);
        assert!(manifest.slides[0].entry.is_none());
        assert_eq!(manifest.slides[1].entry.as_ref().unwrap().element_count(), 2);
        assert_eq!(manifest.decisions, vec!["Ship it", "Hire help"]);
    }

    #[test]
    fn from_yaml_rejects_out_of_range_width() {
        let yaml = r#"
slides:
  - title: Bad
    entry:
      group: progress-fill
      step_ms: 200
      effect:
        kind: grow
        duration_ms: 800
        widths: [140]
"#;
        assert!(DeckManifest::from_yaml(yaml).is_err());
    }

    #[test]
    fn build_deck_rejects_overflowing_entry_step() {
        let yaml = r#"
slides:
  - title: Overview
    entry:
      group: status-item
      step_ms: 18446744073709551615
      effect:
        kind: rise
        offset_px: 20
        duration_ms: 400
        count: 3
  - title: Numbers
"#;
        let manifest = DeckManifest::from_yaml(yaml).unwrap();
        let err = manifest.build_deck().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { ref field, max: 60_000, .. }
                if field == "slides[0].entry.delay_ms"
        ));
    }

    #[test]
    fn build_deck_rejects_too_many_entry_elements() {
        let mut manifest = DeckManifest::incident_briefing();
        if let Some(EntrySequence {
            effect: EntryEffect::Rise { count, .. },
            ..
        }) = manifest.slides[0].entry.as_mut()
        {
            *count = MAX_ENTRY_ELEMENTS + 1;
        }
        let err = manifest.build_deck().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { ref field, .. } if field == "slides[0].entry.count"
        ));
    }

    #[test]
    fn build_deck_rejects_empty_slide_list() {
        let manifest = DeckManifest {
            slides: vec![],
            decisions: vec![],
        };
        assert!(manifest.build_deck().is_err());
    }

    #[test]
    fn build_deck_rejects_blank_decision_label() {
        let mut manifest = DeckManifest::incident_briefing();
        manifest.decisions.push("  ".to_string());
        assert_eq!(
            manifest.build_deck(),
            Err(ValidationError::empty_field("decisions[3]"))
        );
    }
}
