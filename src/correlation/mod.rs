// Exact-formula correlation coefficients between two observation series
//
// - Pearson: sample covariance over the product of sample standard deviations
// - Spearman: Pearson over mid-ranks
// - Kendall tau-b: concordance with tie correction, O(N log N) via inversion
//   counting over tie groups
//
// Results are rounded to 6 digits and never clamped to [-1, 1]. A constant
// series yields `Score::Undefined` rather than an error; only unequal lengths
// are rejected.

mod kendall;
mod pearson;

pub use kendall::kendall;
pub use pearson::{pearson, spearman, DEGENERATE_EPSILON};
