//! Event identifiers delivered to state machines.
//!
//! Events are opaque identifiers in the `u32` domain. Two values at the top
//! of that domain are reserved for the engine's lifecycle callbacks and are
//! never sent by ordinary callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier naming an event occurrence.
///
/// The identifier itself is opaque to the engine; only transition functions
/// assign meaning to it. Payload data travels separately, as a borrowed
/// reference passed alongside the identifier for the duration of a single
/// dispatch.
///
/// # Reserved identifiers
///
/// [`EventId::INIT`] and [`EventId::EXIT`] are delivered by the engine to
/// entry and exit actions during `initialize` and `terminate`. They exist so
/// lifecycle callbacks share the ordinary action signature; sending them
/// through `send` is a caller error the engine does not check for.
///
/// # Example
///
/// ```rust
/// use flatstate::core::EventId;
///
/// const COIN: EventId = EventId::new(0);
///
/// assert_eq!(COIN.raw(), 0);
/// assert!(!COIN.is_reserved());
/// assert!(EventId::INIT.is_reserved());
/// assert_ne!(EventId::INIT, EventId::EXIT);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u32);

impl EventId {
    /// Reserved identifier passed to the initial state's entry action.
    pub const INIT: EventId = EventId(u32::MAX);

    /// Reserved identifier passed to the final exit action on termination.
    pub const EXIT: EventId = EventId(u32::MAX - 1);

    /// Create an event identifier from a raw value.
    ///
    /// `const` so tables can declare their event vocabulary as constants
    /// and match on them in transition functions.
    pub const fn new(raw: u32) -> Self {
        EventId(raw)
    }

    /// The raw identifier value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this is one of the engine's reserved lifecycle identifiers.
    pub const fn is_reserved(self) -> bool {
        self.0 >= Self::EXIT.0
    }
}

impl From<u32> for EventId {
    fn from(raw: u32) -> Self {
        EventId(raw)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INIT => f.write_str("init"),
            Self::EXIT => f.write_str("exit"),
            Self(raw) => write!(f, "{raw}"),
        }
    }
}
