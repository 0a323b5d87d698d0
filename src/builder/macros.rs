//! Macros for declaring event vocabularies.

/// Declare named event identifier constants.
///
/// Each entry becomes a `const` of type
/// [`EventId`](crate::core::EventId), usable directly as a `match`
/// pattern inside transition functions.
///
/// # Example
///
/// ```
/// use flatstate::event_ids;
///
/// event_ids! {
///     COIN = 0,
///     PUSH = 1,
/// }
///
/// assert_eq!(COIN.raw(), 0);
/// assert_ne!(COIN, PUSH);
/// ```
#[macro_export]
macro_rules! event_ids {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis $name:ident = $value:expr
        ),+ $(,)?
    ) => {
        $(
            $(#[$meta])*
            $vis const $name: $crate::core::EventId = $crate::core::EventId::new($value);
        )+
    };
}
