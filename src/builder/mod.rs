//! Builder API for state table construction.
//!
//! Tables are assembled fluently, one state at a time, and validated at
//! `build()`:
//!
//! ```rust
//! use flatstate::builder::{StateBuilder, StateTableBuilder};
//! use flatstate::core::{StateId, TransitionOutcome};
//!
//! const OFF: StateId = StateId::new(0);
//! const ON: StateId = StateId::new(1);
//!
//! let table = StateTableBuilder::<u32>::new()
//!     .state(
//!         StateBuilder::named("off").on_event(|_count, _event, _payload| {
//!             TransitionOutcome::transition(ON)
//!         }),
//!     )
//!     .state(
//!         StateBuilder::named("on")
//!             .on_entry(|count: &mut u32, _event, _payload| *count += 1)
//!             .on_event(|_count, _event, _payload| TransitionOutcome::transition(OFF)),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.state_id("on"), Some(ON));
//! ```

pub mod error;
pub mod macros;
pub mod state;
pub mod table;

pub use error::BuildError;
pub use state::StateBuilder;
pub use table::StateTableBuilder;
