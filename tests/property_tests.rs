//! Property-based tests for the dispatch engine.
//!
//! These tests use proptest to verify properties hold across many randomly
//! generated event sequences, checking the machine against a pure
//! reference model and counting action invocations.

use flatstate::builder::{StateBuilder, StateTableBuilder};
use flatstate::checkpoint::Checkpoint;
use flatstate::core::{EventId, StateId, StateTable, TransitionOutcome};
use flatstate::engine::Machine;
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const A: StateId = StateId::new(0);
const B: StateId = StateId::new(1);
const C: StateId = StateId::new(2);

/// The three-letter machine, actions omitted: only the transition
/// structure matters here.
fn letters_table() -> Arc<StateTable<()>> {
    let table = StateTableBuilder::new()
        .state(
            StateBuilder::named("A").on_event(|_: &mut (), event, _| match event.raw() {
                0 => TransitionOutcome::transition(C),
                3 => TransitionOutcome::transition(C),
                _ => TransitionOutcome::Unhandled,
            }),
        )
        .state(
            StateBuilder::named("B").on_event(|_: &mut (), event, _| match event.raw() {
                2 => TransitionOutcome::transition(A),
                4 => TransitionOutcome::transition(C),
                _ => TransitionOutcome::Unhandled,
            }),
        )
        .state(
            StateBuilder::named("C").on_event(|_: &mut (), event, _| match event.raw() {
                0 => TransitionOutcome::Internal,
                1 => TransitionOutcome::transition(B),
                _ => TransitionOutcome::Unhandled,
            }),
        )
        .build()
        .unwrap();
    Arc::new(table)
}

/// Pure reference model of `letters_table`: `Some(next)` for a state
/// change, `None` when the state is retained.
fn model_next(state: usize, event: u32) -> Option<usize> {
    match (state, event) {
        (0, 0) | (0, 3) => Some(2),
        (1, 2) => Some(0),
        (1, 4) => Some(2),
        (2, 1) => Some(1),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct Counters {
    entries: u32,
    exits: u32,
    effects: u32,
}

const S0: StateId = StateId::new(0);
const S1: StateId = StateId::new(1);

fn counting_state(name: &str, other: StateId, own: StateId) -> StateBuilder<Counters> {
    StateBuilder::named(name)
        .on_entry(|ctx: &mut Counters, _, _| ctx.entries += 1)
        .on_event(move |_ctx: &mut Counters, event, _| match event.raw() {
            0 => TransitionOutcome::transition(other),
            1 => TransitionOutcome::transition(own),
            2 => TransitionOutcome::Internal,
            3 => TransitionOutcome::transition_with(other, |ctx: &mut Counters, _, _| {
                ctx.effects += 1
            }),
            _ => TransitionOutcome::Unhandled,
        })
        .on_exit(|ctx: &mut Counters, _, _| ctx.exits += 1)
}

/// Two states bouncing between each other; every entry, exit, and effect
/// invocation is counted in the context.
fn counting_table() -> Arc<StateTable<Counters>> {
    Arc::new(
        StateTableBuilder::new()
            .state(counting_state("s0", S1, S0))
            .state(counting_state("s1", S0, S1))
            .build()
            .unwrap(),
    )
}

prop_compose! {
    fn letter_events()(raw in prop::collection::vec(0..6u32, 0..24)) -> Vec<EventId> {
        raw.into_iter().map(EventId::new).collect()
    }
}

prop_compose! {
    fn counting_events()(raw in prop::collection::vec(0..6u32, 0..24)) -> Vec<EventId> {
        raw.into_iter().map(EventId::new).collect()
    }
}

proptest! {
    #[test]
    fn machine_agrees_with_reference_model(events in letter_events()) {
        let mut machine = Machine::new(letters_table(), ());
        machine.initialize(A).unwrap();

        let mut model = 0usize;
        for event in events {
            machine.send(event, None);
            if let Some(next) = model_next(model, event.raw()) {
                model = next;
            }
            prop_assert_eq!(machine.current_state(), Some(StateId::new(model)));
        }
    }

    #[test]
    fn history_path_matches_reference_model(events in letter_events()) {
        let mut machine = Machine::new(letters_table(), ());
        machine.initialize(A).unwrap();

        let mut model = 0usize;
        let mut expected = vec![A];
        for event in &events {
            machine.send(*event, None);
            if let Some(next) = model_next(model, event.raw()) {
                model = next;
                expected.push(StateId::new(next));
            }
        }

        let path = machine.history().get_path();
        if expected.len() == 1 {
            // No transition ever completed, so the log is empty.
            prop_assert!(path.is_empty());
        } else {
            prop_assert_eq!(path, expected);
        }
    }

    #[test]
    fn current_state_is_always_a_valid_table_index(
        raw in prop::collection::vec(0..40u32, 0..32)
    ) {
        let mut machine = Machine::new(counting_table(), Counters::default());
        machine.initialize(S0).unwrap();

        for event in raw {
            machine.send(EventId::new(event), None);
            let current = machine.current_state().unwrap();
            prop_assert!(current.index() < machine.table().len());
        }
    }

    #[test]
    fn entries_exceed_exits_by_one_while_active(events in counting_events()) {
        let mut machine = Machine::new(counting_table(), Counters::default());
        machine.initialize(S0).unwrap();

        for event in events {
            machine.send(event, None);
            prop_assert_eq!(
                machine.context().entries,
                machine.context().exits + 1
            );
        }

        machine.terminate();
        prop_assert_eq!(machine.context().entries, machine.context().exits);
    }

    #[test]
    fn ignored_events_change_nothing(
        raw in prop::collection::vec(prop::sample::select(vec![2u32, 4, 5, 17]), 0..16)
    ) {
        let mut machine = Machine::new(counting_table(), Counters::default());
        machine.initialize(S0).unwrap();

        for event in raw {
            machine.send(EventId::new(event), None);
        }

        prop_assert_eq!(machine.current_state(), Some(S0));
        prop_assert!(machine.history().transitions().is_empty());
        prop_assert_eq!(machine.context().entries, 1);
        prop_assert_eq!(machine.context().exits, 0);
    }

    #[test]
    fn effects_fire_exactly_once_per_effect_transition(count in 0..10u32) {
        let mut machine = Machine::new(counting_table(), Counters::default());
        machine.initialize(S0).unwrap();

        for _ in 0..count {
            machine.send(EventId::new(3), None);
        }

        prop_assert_eq!(machine.context().effects, count);
        prop_assert_eq!(machine.context().exits, count);
        prop_assert_eq!(machine.context().entries, count + 1);
    }

    #[test]
    fn event_id_roundtrip_serialization(raw in any::<u32>()) {
        let event = EventId::new(raw);
        let json = serde_json::to_string(&event).unwrap();
        let back: EventId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, event);
    }

    #[test]
    fn checkpoint_roundtrip_preserves_machine(events in counting_events()) {
        let table = counting_table();
        let mut machine = Machine::new(Arc::clone(&table), Counters::default());
        machine.initialize(S0).unwrap();

        for event in events {
            machine.send(event, None);
        }

        let json = machine.checkpoint().to_json().unwrap();
        let checkpoint: Checkpoint<Counters> = Checkpoint::from_json(&json).unwrap();
        let mut restored = Machine::restore(Arc::clone(&table), checkpoint).unwrap();

        prop_assert_eq!(restored.current_state(), machine.current_state());
        prop_assert_eq!(restored.context(), machine.context());
        prop_assert_eq!(
            restored.history().transitions(),
            machine.history().transitions()
        );

        // Both continue identically from the snapshot point.
        let original = machine.send(EventId::new(0), None);
        let resumed = restored.send(EventId::new(0), None);
        prop_assert_eq!(original, resumed);
    }
}
