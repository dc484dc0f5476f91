/// The runtime value type.
///
/// Defines [`Value`](core::Value), its conversions from literals, truthiness
/// and the text programs see when a value is printed.
pub mod core;
