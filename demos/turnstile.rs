//! Coin-Operated Turnstile
//!
//! The classic two-state turnstile, showing:
//! - A guard condition (the turnstile can be taken out of service)
//! - An internal transition performing its own side effect (blocked pushes)
//! - A transition effect releasing the arm between exit and entry
//!
//! Run with: cargo run --example turnstile

use flatstate::builder::{StateBuilder, StateTableBuilder};
use flatstate::core::{Guard, StateId, StateTable, TransitionOutcome};
use flatstate::engine::Machine;
use flatstate::event_ids;
use std::sync::Arc;

const LOCKED: StateId = StateId::new(0);
const UNLOCKED: StateId = StateId::new(1);

event_ids! {
    COIN = 0,
    PUSH = 1,
}

#[derive(Default)]
struct Turnstile {
    coins: u32,
    blocked_pushes: u32,
    out_of_service: bool,
}

fn turnstile_table() -> Arc<StateTable<Turnstile>> {
    let in_service = Guard::new(|ctx: &Turnstile| !ctx.out_of_service);

    let table = StateTableBuilder::new()
        .state(
            StateBuilder::named("locked")
                .on_event(move |ctx: &mut Turnstile, event, _payload| match event {
                    COIN if in_service.check(ctx) => {
                        ctx.coins += 1;
                        TransitionOutcome::transition_with(
                            UNLOCKED,
                            |_ctx: &mut Turnstile, _event, _payload| {
                                println!("  [effect] arm released");
                            },
                        )
                    }
                    PUSH => {
                        // Internal: count the bounce, stay locked.
                        ctx.blocked_pushes += 1;
                        TransitionOutcome::Internal
                    }
                    _ => TransitionOutcome::Unhandled,
                })
                .on_exit(|_ctx: &mut Turnstile, _event, _payload| println!("leaving locked")),
        )
        .state(
            StateBuilder::named("unlocked")
                .on_entry(|_ctx: &mut Turnstile, _event, _payload| println!("entering unlocked"))
                .on_event(|_ctx: &mut Turnstile, event, _payload| match event {
                    PUSH => TransitionOutcome::transition(LOCKED),
                    _ => TransitionOutcome::Unhandled,
                })
                .on_exit(|_ctx: &mut Turnstile, _event, _payload| println!("leaving unlocked")),
        )
        .build()
        .unwrap();
    Arc::new(table)
}

fn main() {
    println!("=== Coin-Operated Turnstile ===\n");

    let mut machine = Machine::new(turnstile_table(), Turnstile::default());
    machine.initialize(LOCKED).unwrap();

    println!("push against a locked turnstile:");
    machine.send(PUSH, None);
    machine.send(PUSH, None);

    println!("insert a coin:");
    machine.send(COIN, None);

    println!("walk through:");
    machine.send(PUSH, None);

    println!("out of service, coins are ignored:");
    machine.context_mut().out_of_service = true;
    machine.send(COIN, None);

    machine.terminate();

    let ctx = machine.context();
    println!("\ncoins accepted:  {}", ctx.coins);
    println!("blocked pushes:  {}", ctx.blocked_pushes);
    println!(
        "events/transitions: {}/{}",
        machine.metadata().events_received,
        machine.metadata().transitions_taken
    );
    println!(
        "states visited: {:?}",
        machine
            .history()
            .get_path()
            .iter()
            .map(|id| machine.table().name(*id).unwrap_or("?"))
            .collect::<Vec<_>>()
    );
}
