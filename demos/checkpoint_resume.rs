//! Checkpoint and Resume
//!
//! Runs an order workflow halfway, snapshots it to JSON, rebuilds a fresh
//! machine from the snapshot, and finishes the workflow there. The state
//! table itself is not serialized — the restored machine is re-bound to
//! the table at restore time.
//!
//! Run with: cargo run --example checkpoint_resume

use flatstate::builder::{StateBuilder, StateTableBuilder};
use flatstate::checkpoint::Checkpoint;
use flatstate::core::{StateId, StateTable, TransitionOutcome};
use flatstate::engine::Machine;
use flatstate::event_ids;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const RECEIVED: StateId = StateId::new(0);
const PAID: StateId = StateId::new(1);
const SHIPPED: StateId = StateId::new(2);

event_ids! {
    PAY = 0,
    SHIP = 1,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Order {
    audit: Vec<String>,
}

fn order_table() -> Arc<StateTable<Order>> {
    let table = StateTableBuilder::new()
        .state(
            StateBuilder::named("received")
                .on_event(|_ctx: &mut Order, event, _payload| match event {
                    PAY => TransitionOutcome::transition(PAID),
                    _ => TransitionOutcome::Unhandled,
                })
                .on_exit(|ctx: &mut Order, _event, _payload| {
                    ctx.audit.push("payment received".to_string())
                }),
        )
        .state(
            StateBuilder::named("paid").on_event(|_ctx: &mut Order, event, _payload| {
                match event {
                    SHIP => TransitionOutcome::transition(SHIPPED),
                    _ => TransitionOutcome::Unhandled,
                }
            }),
        )
        .state(
            StateBuilder::named("shipped").on_entry(|ctx: &mut Order, _event, _payload| {
                ctx.audit.push("package handed to carrier".to_string())
            }),
        )
        .build()
        .unwrap();
    Arc::new(table)
}

fn main() {
    println!("=== Checkpoint and Resume ===\n");

    let table = order_table();

    let mut machine = Machine::new(Arc::clone(&table), Order::default());
    machine.initialize(RECEIVED).unwrap();
    machine.send(PAY, None);

    println!(
        "state before snapshot: {:?}",
        machine.current_state_name()
    );

    let json = machine.checkpoint().to_json().unwrap();
    println!("\nsnapshot:\n{json}\n");
    drop(machine);

    // Later, possibly in another process: rebuild and finish the workflow.
    let checkpoint: Checkpoint<Order> = Checkpoint::from_json(&json).unwrap();
    let mut resumed = Machine::restore(Arc::clone(&table), checkpoint).unwrap();

    println!(
        "state after restore:   {:?}",
        resumed.current_state_name()
    );

    resumed.send(SHIP, None);

    println!("state after shipping:  {:?}", resumed.current_state_name());
    println!("audit trail: {:?}", resumed.context().audit);
    println!(
        "transitions recorded:  {}",
        resumed.history().transitions().len()
    );
}
