//! Slide entry sequences - staggered animations replayed on slide activation.
//!
//! Each slide may own one group of animated elements. When the slide becomes
//! active every element is reset to its initial style, and element `i` is
//! then moved to its final style after `lead_in + i * step`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::domain::foundation::Percentage;

/// Name of an animated element group on a slide (e.g. `status-item`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementGroup(String);

impl ElementGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One element within a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub group: ElementGroup,
    pub index: usize,
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.group, self.index)
    }
}

/// Translation applied to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    TranslateX(i32),
    TranslateY(i32),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::TranslateX(0) => write!(f, "translateX(0)"),
            Transform::TranslateY(0) => write!(f, "translateY(0)"),
            Transform::TranslateX(px) => write!(f, "translateX({}px)", px),
            Transform::TranslateY(px) => write!(f, "translateY({}px)", px),
        }
    }
}

/// Which properties a transition animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionProperty {
    All,
    Width,
}

/// An eased transition of the given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub property: TransitionProperty,
    pub duration_ms: u64,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let property = match self.property {
            TransitionProperty::All => "all",
            TransitionProperty::Width => "width",
        };
        write!(f, "{} {}s ease", property, self.duration_ms as f64 / 1000.0)
    }
}

/// Inline style set on an element. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementStyle {
    pub transform: Option<Transform>,
    pub opacity: Option<f32>,
    pub width: Option<Percentage>,
    pub transition: Option<Transition>,
}

impl ElementStyle {
    /// Renders the style as inline CSS declarations.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(transform) = self.transform {
            decls.push(format!("transform: {}", transform));
        }
        if let Some(opacity) = self.opacity {
            decls.push(format!("opacity: {}", opacity));
        }
        if let Some(width) = self.width {
            decls.push(format!("width: {}", width));
        }
        if let Some(transition) = self.transition {
            decls.push(format!("transition: {}", transition));
        }
        decls.join("; ")
    }
}

/// Visual effect played by every element of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryEffect {
    /// Fade in while moving up from `offset_px` below.
    Rise {
        offset_px: i32,
        duration_ms: u64,
        count: usize,
    },
    /// Fade in while moving horizontally from `offset_px`.
    SlideIn {
        offset_px: i32,
        duration_ms: u64,
        count: usize,
    },
    /// Grow each bar from 0% to its own target width.
    Grow {
        duration_ms: u64,
        widths: Vec<Percentage>,
    },
}

/// A scheduled style change produced by an entry sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryStep {
    pub element: ElementRef,
    pub delay: Duration,
    pub style: ElementStyle,
}

/// The animation a slide plays each time it becomes active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySequence {
    pub group: ElementGroup,
    pub effect: EntryEffect,
    pub step_ms: u64,
    #[serde(default)]
    pub lead_in_ms: u64,
}

impl EntrySequence {
    pub fn element_count(&self) -> usize {
        match &self.effect {
            EntryEffect::Rise { count, .. } | EntryEffect::SlideIn { count, .. } => *count,
            EntryEffect::Grow { widths, .. } => widths.len(),
        }
    }

    pub fn element(&self, index: usize) -> ElementRef {
        ElementRef {
            group: self.group.clone(),
            index,
        }
    }

    /// Delay before element `index` reaches its final style.
    pub fn delay_for(&self, index: usize) -> Duration {
        let stagger = self.step_ms.saturating_mul(index as u64);
        Duration::from_millis(stagger.saturating_add(self.lead_in_ms))
    }

    /// Delay before the last element settles, or `None` if it overflows.
    pub fn total_delay_ms(&self) -> Option<u64> {
        let last = self.element_count().saturating_sub(1) as u64;
        self.step_ms.checked_mul(last)?.checked_add(self.lead_in_ms)
    }

    /// Style applied immediately on activation.
    pub fn initial_style(&self) -> ElementStyle {
        match &self.effect {
            EntryEffect::Rise { offset_px, .. } => ElementStyle {
                transform: Some(Transform::TranslateY(*offset_px)),
                opacity: Some(0.0),
                ..Default::default()
            },
            EntryEffect::SlideIn { offset_px, .. } => ElementStyle {
                transform: Some(Transform::TranslateX(*offset_px)),
                opacity: Some(0.0),
                ..Default::default()
            },
            EntryEffect::Grow { .. } => ElementStyle {
                width: Some(Percentage::ZERO),
                ..Default::default()
            },
        }
    }

    /// Style element `index` settles on.
    pub fn final_style(&self, index: usize) -> ElementStyle {
        match &self.effect {
            EntryEffect::Rise { duration_ms, .. } => ElementStyle {
                transform: Some(Transform::TranslateY(0)),
                opacity: Some(1.0),
                transition: Some(Transition {
                    property: TransitionProperty::All,
                    duration_ms: *duration_ms,
                }),
                ..Default::default()
            },
            EntryEffect::SlideIn { duration_ms, .. } => ElementStyle {
                transform: Some(Transform::TranslateX(0)),
                opacity: Some(1.0),
                transition: Some(Transition {
                    property: TransitionProperty::All,
                    duration_ms: *duration_ms,
                }),
                ..Default::default()
            },
            EntryEffect::Grow {
                duration_ms,
                widths,
            } => ElementStyle {
                width: Some(widths.get(index).copied().unwrap_or(Percentage::HUNDRED)),
                transition: Some(Transition {
                    property: TransitionProperty::Width,
                    duration_ms: *duration_ms,
                }),
                ..Default::default()
            },
        }
    }

    /// Every deferred style change, in element order.
    pub fn steps(&self) -> Vec<EntryStep> {
        (0..self.element_count())
            .map(|i| EntryStep {
                element: self.element(i),
                delay: self.delay_for(i),
                style: self.final_style(i),
            })
            .collect()
    }
}
