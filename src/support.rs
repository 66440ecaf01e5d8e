//! Small numeric helpers shared by the calculators.
//!
//! Every rate is defined as 0 when its denominator collection is empty, so
//! callers never special-case empty snapshots.

use crate::Rate;

/// Round to 2 decimal places. Percentage precision at the serialization boundary.
pub fn round2(x: f64) -> f64 {
    (x * 100.).round() / 100.
}

/// Round to 4 decimal places. Multiplier/ratio precision at the serialization boundary.
pub fn round4(x: f64) -> f64 {
    (x * 10_000.).round() / 10_000.
}

/// Arithmetic mean, 0 on empty input.
pub fn mean<I>(xs: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = xs.into_iter().fold((0., 0usize), |(s, n), x| (s + x, n + 1));
    match n {
        0 => 0.,
        n => sum / n as f64,
    }
}

/// Median with the even-count convention of averaging the middle pair. 0 on empty input.
pub fn median(xs: &[usize]) -> f64 {
    let mut sorted = xs.to_vec();
    sorted.sort_unstable();
    match sorted.len() {
        0 => 0.,
        n if n % 2 == 1 => sorted[n / 2] as f64,
        n => (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.,
    }
}

/// Share of `part` in `whole` on a 0-100 scale, 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> Rate {
    match whole {
        0 => 0.,
        w => part as f64 / w as f64 * 100.,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_zero() {
        assert!(mean(std::iter::empty()) == 0.);
    }

    #[test]
    fn median_averages_middle_pair() {
        assert!(median(&[1, 2, 3, 4]) == 2.5);
        assert!(median(&[3, 1, 2]) == 2.);
        assert!(median(&[]) == 0.);
    }

    #[test]
    fn percent_of_empty_denominator_is_zero() {
        assert!(percent(5, 0) == 0.);
        assert!(percent(1, 4) == 25.);
    }

    #[test]
    fn rounding_precision() {
        assert!(round2(33.333333) == 33.33);
        assert!(round4(1.123456) == 1.1235);
    }
}
