use num_traits::ToPrimitive;

/// Element types the aggregation folds can sum.
pub trait NumericOps: ToPrimitive + Clone {}

impl<T: ToPrimitive + Clone> NumericOps for T {}

/// Converts a stored value into its contribution to a fold.
///
/// Values without an `f64` representation count as `0.0`.
pub(crate) fn fold_value<T: ToPrimitive>(value: &T) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
