/// Runtime values.
///
/// Defines the `Value` enum: `null`, booleans, 64-bit integers and 64-bit
/// floats. Values are what literals carry, what identifiers resolve to, and
/// what every operator produces.
pub mod core;
/// Numeric view of a value.
///
/// Defines the `Number` union (`Integer` or `Float`) together with the
/// explicit coercion rules used at every arithmetic and comparison boundary:
/// two integers stay integers, any other pairing is widened to floats.
pub mod number;
