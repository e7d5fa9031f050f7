/// A type alias for a floating point type used across the crate.
/// NOTE: the engine keeps all costs and durations in this type, so changing it (e.g. to f32)
/// affects precision of accumulated route totals.
pub type Float = f64;
