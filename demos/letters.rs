//! Three-State Console Machine
//!
//! An interactive machine with states A, B, and C driven by single-letter
//! events typed on stdin. Demonstrates:
//! - External transitions (`a` in state A, `b` in state C, ...)
//! - A guard condition choosing between two targets (`d` in state A)
//! - An internal transition with handler-side output (`a` in state C)
//! - A transition effect (`e` in state B)
//!
//! Run with: cargo run --example letters

use flatstate::builder::{StateBuilder, StateTableBuilder};
use flatstate::core::{EventId, StateId, StateTable, TransitionOutcome};
use flatstate::engine::Machine;
use flatstate::event_ids;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const A: StateId = StateId::new(0);
const B: StateId = StateId::new(1);
const C: StateId = StateId::new(2);

event_ids! {
    EV_A = 0,
    EV_B = 1,
    EV_C = 2,
    EV_D = 3,
    EV_E = 4,
}

#[derive(Default)]
struct Ctx {
    guard: bool,
}

fn letter_table() -> Arc<StateTable<Ctx>> {
    let table = StateTableBuilder::new()
        .state(
            StateBuilder::named("A")
                .on_entry(|_ctx: &mut Ctx, _event, _payload| println!("A entry"))
                .on_event(|ctx: &mut Ctx, event, _payload| match event {
                    EV_A => TransitionOutcome::transition(C),
                    EV_D => {
                        println!("A deciding on guard");
                        if ctx.guard {
                            TransitionOutcome::transition(B)
                        } else {
                            TransitionOutcome::transition(C)
                        }
                    }
                    _ => TransitionOutcome::Unhandled,
                })
                .on_exit(|_ctx: &mut Ctx, _event, _payload| println!("A exit")),
        )
        .state(
            StateBuilder::named("B")
                .on_event(|_ctx: &mut Ctx, event, _payload| match event {
                    EV_C => TransitionOutcome::transition(A),
                    EV_E => TransitionOutcome::transition_with(
                        C,
                        |_ctx: &mut Ctx, _event, _payload| println!("B-to-C transition effect"),
                    ),
                    _ => TransitionOutcome::Unhandled,
                })
                .on_exit(|_ctx: &mut Ctx, _event, _payload| println!("B exit")),
        )
        .state(
            StateBuilder::named("C")
                .on_entry(|_ctx: &mut Ctx, _event, _payload| println!("C entry"))
                .on_event(|_ctx: &mut Ctx, event, _payload| match event {
                    EV_A => {
                        println!("C internal");
                        TransitionOutcome::Internal
                    }
                    EV_B => TransitionOutcome::transition(B),
                    _ => TransitionOutcome::Unhandled,
                }),
        )
        .build()
        .unwrap();
    Arc::new(table)
}

fn state_letter(state: StateId) -> char {
    (b'A' + state.index() as u8) as char
}

fn main() {
    println!("=== Three-State Console Machine ===\n");

    let mut machine = Machine::new(letter_table(), Ctx::default());
    let current = machine.initialize(A).unwrap();
    println!("Initial state: {}\n", state_letter(current));

    println!("Events: a..e; 'g' toggles the guard; 'q' quits");

    let stdin = io::stdin();
    loop {
        print!("Enter event: ");
        io::stdout().flush().unwrap();

        let Some(Ok(line)) = stdin.lock().lines().next() else {
            break;
        };
        let Some(input) = line.trim().chars().next() else {
            continue;
        };

        match input {
            'q' => break,
            'g' => {
                let guard = !machine.context().guard;
                machine.context_mut().guard = guard;
                println!("Guard is now {guard}");
            }
            'a'..='e' => {
                let event = EventId::new(input as u32 - 'a' as u32);
                let outcome = machine.send(event, None);
                if let Some(state) = outcome.state() {
                    println!("Current state: {}", state_letter(state));
                }
            }
            other => println!("Unknown input '{other}'"),
        }
    }

    machine.terminate();
    println!(
        "\nTerminated after {} events and {} transitions",
        machine.metadata().events_received,
        machine.metadata().transitions_taken
    );
}
