/// Rounds `value` to the nearest multiple of `precision`.
///
/// Half-way cases round away from zero. A `precision` of zero is not a
/// supported input. The generation path does not call this; it is kept
/// for snapping hand-edited dot coordinates back onto a grid.
pub fn round_to(value: f64, precision: f64) -> f64 {
    (value / precision).round() * precision
}
