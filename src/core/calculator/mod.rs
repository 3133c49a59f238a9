//! Pure scoring and lineup math. Nothing here does I/O or returns errors:
//! missing data degrades to zero or to an undefined (`None`) value.

pub mod flow;
pub mod impact;
pub mod lineup;
pub mod scoring;
pub mod urgency;

use std::cmp::Ordering;

/// Descending order for optional metrics, undefined values always last.
pub fn cmp_desc_undefined_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Keeps a ratio only when it is a real number.
pub(crate) fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}
