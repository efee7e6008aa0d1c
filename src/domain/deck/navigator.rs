//! SlideNavigator - finite-state controller over a deck.
//!
//! States are the slide indices `0..N`; the initial state is 0 and there is no
//! terminal state. `next()` on the last slide restarts at the first slide.

use std::sync::Arc;

use tracing::debug;

use super::input::NavigationCommand;
use super::slide::{Deck, Visibility};
use super::view_state::NavigationViewState;
use crate::domain::foundation::SlideIndex;
use crate::ports::{DeckView, TaskHandle, TaskScheduler};

/// Owns the current slide index and renders every transition.
pub struct SlideNavigator {
    deck: Deck,
    current: SlideIndex,
    view: Arc<dyn DeckView>,
    scheduler: Arc<dyn TaskScheduler>,
    /// Entry animation steps still waiting to fire.
    pending_entry: Vec<TaskHandle>,
}

impl SlideNavigator {
    /// Creates a navigator positioned on the first slide and renders that
    /// initial state. The entry sequence is not played for the initial slide.
    pub fn new(deck: Deck, view: Arc<dyn DeckView>, scheduler: Arc<dyn TaskScheduler>) -> Self {
        let navigator = Self {
            deck,
            current: SlideIndex::FIRST,
            view,
            scheduler,
            pending_entry: Vec::new(),
        };
        navigator.view.set_slide_active(navigator.current, true);
        navigator.view.set_indicator_active(navigator.current, true);
        navigator.render_chrome();
        navigator
    }

    pub fn current_index(&self) -> usize {
        self.current.value()
    }

    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn view_state(&self) -> NavigationViewState {
        NavigationViewState::derive(self.current.value(), self.deck.len())
    }

    /// Handles held for the active slide's entry sequence. They are
    /// cancelled on the next activation.
    pub fn pending_animation_count(&self) -> usize {
        self.pending_entry.len()
    }

    /// Moves to `index`. Out-of-range requests are ignored and return false.
    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.deck.contains(index) {
            debug!(index, total = self.deck.len(), "Ignoring out-of-range slide request");
            return false;
        }

        let previous = self.current;
        self.deck.set_visibility(previous, Visibility::Inactive);
        self.view.set_slide_active(previous, false);
        self.view.set_indicator_active(previous, false);

        self.current = SlideIndex::new(index);
        self.deck.set_visibility(self.current, Visibility::Active);
        self.view.set_slide_active(self.current, true);
        self.view.set_indicator_active(self.current, true);

        self.render_chrome();
        self.play_entry();

        debug!(from = previous.value(), to = index, "Slide changed");
        true
    }

    /// Advances one slide, restarting at the first slide from the last one.
    pub fn next(&mut self) -> bool {
        if self.current == self.deck.last_index() {
            self.go_to(0)
        } else {
            self.go_to(self.current.value() + 1)
        }
    }

    /// Goes back one slide. No-op on the first slide.
    pub fn previous(&mut self) -> bool {
        if self.current == SlideIndex::FIRST {
            return false;
        }
        self.go_to(self.current.value() - 1)
    }

    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.deck.last_index().value())
    }

    pub fn apply(&mut self, command: NavigationCommand) -> bool {
        match command {
            NavigationCommand::Previous => self.previous(),
            NavigationCommand::Next => self.next(),
            NavigationCommand::GoTo(index) => self.go_to(index),
            NavigationCommand::First => self.first(),
            NavigationCommand::Last => self.last(),
        }
    }

    fn render_chrome(&self) {
        let state = self.view_state();
        self.view.set_counter(state.counter);
        self.view.set_previous_disabled(state.previous_disabled);
        self.view.set_next_disabled(state.next_disabled);
        self.view.set_next_label(state.next_label);
    }

    /// Replays the active slide's entry sequence, cancelling whatever the
    /// previous activation left pending.
    fn play_entry(&mut self) {
        for handle in self.pending_entry.drain(..) {
            self.scheduler.cancel(handle);
        }

        let Some(sequence) = self.deck.slide(self.current).and_then(|s| s.entry()) else {
            return;
        };

        let initial = sequence.initial_style();
        for i in 0..sequence.element_count() {
            self.view.apply_style(&sequence.element(i), &initial);
        }

        for step in sequence.steps() {
            let view = Arc::clone(&self.view);
            let handle = self.scheduler.schedule(
                step.delay,
                Box::new(move || view.apply_style(&step.element, &step.style)),
            );
            self.pending_entry.push(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ManualTaskScheduler, RecordingDeckView};
    use crate::domain::deck::{DeckManifest, NextButtonLabel};
    use crate::domain::foundation::Percentage;
    use proptest::prelude::*;
    use std::time::Duration;

    fn navigator() -> (SlideNavigator, Arc<RecordingDeckView>, Arc<ManualTaskScheduler>) {
        let deck = DeckManifest::incident_briefing().build_deck().unwrap();
        let view = Arc::new(RecordingDeckView::new(deck.len()));
        let scheduler = Arc::new(ManualTaskScheduler::new());
        let nav = SlideNavigator::new(deck, view.clone(), scheduler.clone());
        (nav, view, scheduler)
    }

    fn assert_single_active(nav: &SlideNavigator, view: &RecordingDeckView, expected: usize) {
        assert_eq!(nav.current_index(), expected);
        assert_eq!(nav.deck().active_count(), 1);
        assert_eq!(view.active_slides(), vec![expected]);
        assert_eq!(view.active_indicators(), vec![expected]);
    }

    #[test]
    fn starts_on_first_slide_with_chrome_rendered() {
        let (nav, view, scheduler) = navigator();
        assert_single_active(&nav, &view, 0);
        assert_eq!(view.counter(), Some(1));
        assert_eq!(view.previous_disabled(), Some(true));
        assert_eq!(view.next_label(), Some(NextButtonLabel::Next));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn go_to_each_index_leaves_exactly_one_active() {
        let (mut nav, view, _) = navigator();
        for i in [2, 0, 3, 1, 1] {
            assert!(nav.go_to(i));
            assert_single_active(&nav, &view, i);
        }
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let (mut nav, view, _) = navigator();
        nav.go_to(2);
        assert!(!nav.go_to(4));
        assert!(!nav.go_to(usize::MAX));
        assert_single_active(&nav, &view, 2);
    }

    #[test]
    fn next_from_last_slide_restarts() {
        let (mut nav, view, _) = navigator();
        nav.last();
        assert!(nav.next());
        assert_single_active(&nav, &view, 0);
    }

    #[test]
    fn previous_on_first_slide_is_noop() {
        let (mut nav, view, _) = navigator();
        assert!(!nav.previous());
        assert_single_active(&nav, &view, 0);
    }

    #[test]
    fn four_nexts_visit_every_slide_and_wrap() {
        let (mut nav, _, _) = navigator();
        let visited: Vec<usize> = (0..4)
            .map(|_| {
                nav.next();
                nav.current_index()
            })
            .collect();
        assert_eq!(visited, vec![1, 2, 3, 0]);
    }

    #[test]
    fn last_slide_shows_restart_label() {
        let (mut nav, view, _) = navigator();
        nav.apply(NavigationCommand::Last);
        assert_eq!(view.next_label(), Some(NextButtonLabel::Restart));
        assert_eq!(view.next_disabled(), Some(false));
        assert_eq!(view.counter(), Some(4));
        nav.apply(NavigationCommand::Previous);
        assert_eq!(view.next_label(), Some(NextButtonLabel::Next));
        assert_eq!(view.previous_disabled(), Some(false));
    }

    #[test]
    fn entering_progress_slide_resets_then_grows_bars() {
        let (mut nav, view, scheduler) = navigator();
        nav.go_to(2);

        assert_eq!(view.width_of("progress-fill", 0), Some(Percentage::ZERO));
        assert_eq!(scheduler.pending_count(), 3);

        scheduler.advance(Duration::from_millis(299));
        assert_eq!(view.width_of("progress-fill", 0), Some(Percentage::ZERO));

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(view.width_of("progress-fill", 0), Some(Percentage::new(85)));
        assert_eq!(view.width_of("progress-fill", 1), Some(Percentage::ZERO));

        scheduler.advance(Duration::from_millis(400));
        assert_eq!(view.width_of("progress-fill", 2), Some(Percentage::new(35)));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn leaving_a_slide_cancels_its_pending_animation() {
        let (mut nav, view, scheduler) = navigator();
        nav.go_to(2);
        nav.go_to(3);

        assert_eq!(scheduler.pending_count(), 3);
        assert_eq!(nav.pending_animation_count(), 3);

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(view.width_of("progress-fill", 0), Some(Percentage::ZERO));
        assert_eq!(view.opacity_of("recommendation-block", 2), Some(1.0));
    }

    #[test]
    fn reentering_a_slide_replays_its_animation() {
        let (mut nav, view, scheduler) = navigator();
        nav.go_to(1);
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(view.opacity_of("timeline-row", 0), Some(1.0));

        nav.go_to(1);
        assert_eq!(view.opacity_of("timeline-row", 0), Some(0.0));
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(view.opacity_of("timeline-row", 5), Some(1.0));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Next,
        Previous,
        GoTo(usize),
        First,
        Last,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Next),
            Just(Op::Previous),
            (0usize..8).prop_map(Op::GoTo),
            Just(Op::First),
            Just(Op::Last),
        ]
    }

    proptest! {
        #[test]
        fn any_operation_sequence_keeps_one_active_slide(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let (mut nav, view, _) = navigator();
            for op in ops {
                let before = nav.current_index();
                match op {
                    Op::Next => { nav.next(); }
                    Op::Previous => { nav.previous(); }
                    Op::GoTo(i) => {
                        let moved = nav.go_to(i);
                        if i >= 4 {
                            prop_assert!(!moved);
                            prop_assert_eq!(nav.current_index(), before);
                        }
                    }
                    Op::First => { nav.first(); }
                    Op::Last => { nav.last(); }
                }
                let current = nav.current_index();
                prop_assert!(current < 4);
                prop_assert_eq!(nav.deck().active_count(), 1);
                prop_assert_eq!(view.active_slides(), vec![current]);
                prop_assert_eq!(view.previous_disabled(), Some(current == 0));
                prop_assert_eq!(view.next_disabled(), Some(false));
                prop_assert_eq!(
                    view.next_label() == Some(NextButtonLabel::Restart),
                    current == 3
                );
            }
        }
    }
}
