//! Sample statistics for checking generated variates against the analytical
//! distribution.
//!
//! These are sample-validation helpers, not a general statistics toolkit:
//! they back the sampler tests and let callers run the same checks on their
//! own draws. Heavy-tailed samples have no finite variance, so moment-based
//! summaries are meaningless here; everything in this module is order-based.
//!
//! # Algorithms
//!
//! - **Quantile**: R-7 linear interpolation (default in R, Python, Excel).
//!   Reference: Hyndman & Fan (1996), "Sample Quantiles in Statistical
//!   Packages", *The American Statistician* 50(4).
//! - **Kolmogorov–Smirnov**: one-sample statistic `D = sup |F̂(x) − F(x)|`
//!   evaluated at the jump points of the empirical CDF.

/// Sorts a copy of `data`, or `None` if it is empty or contains NaN.
fn sorted_copy(data: &[f64]) -> Option<Vec<f64>> {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Some(sorted)
}

/// Computes the median of `data` without mutating the input.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_holtsmark::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    let sorted = sorted_copy(data)?;
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Computes the `p`-th quantile using the R-7 linear interpolation method.
///
/// # Algorithm
/// For sorted data `x[0..n]` and quantile `p ∈ [0, 1]`:
/// 1. Compute `h = (n − 1) × p`
/// 2. Let `j = ⌊h⌋` and `g = h − j`
/// 3. Return `(1 − g) × x[j] + g × x[j+1]`
///
/// # Complexity
/// Time: O(n log n) (dominated by sort), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty, `p` is outside `[0, 1]`, or data contains NaN.
///
/// # Examples
/// ```
/// use u_holtsmark::stats::quantile;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(quantile(&data, 0.0), Some(1.0));
/// assert_eq!(quantile(&data, 0.5), Some(3.0));
/// assert_eq!(quantile(&data, 0.125), Some(1.5));
/// ```
pub fn quantile(data: &[f64], p: f64) -> Option<f64> {
    if !(0.0..=1.0).contains(&p) {
        return None;
    }
    let sorted = sorted_copy(data)?;
    let n = sorted.len();
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();

    if j + 1 >= n {
        Some(sorted[n - 1])
    } else {
        Some((1.0 - g) * sorted[j] + g * sorted[j + 1])
    }
}

/// One-sample Kolmogorov–Smirnov statistic of `data` against `cdf`.
///
/// ```text
/// D = max_i max( i/n − F(x₍ᵢ₎), F(x₍ᵢ₎) − (i−1)/n )
/// ```
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_holtsmark::stats::ks_statistic;
/// // Uniform(0, 1) evaluated at its own quartile midpoints
/// let d = ks_statistic(&[0.125, 0.375, 0.625, 0.875], |x| x).unwrap();
/// assert!((d - 0.125).abs() < 1e-15);
/// ```
pub fn ks_statistic(data: &[f64], cdf: impl Fn(f64) -> f64) -> Option<f64> {
    let sorted = sorted_copy(data)?;
    let n = sorted.len() as f64;

    let d = sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let above = (i + 1) as f64 / n - f;
            let below = f - i as f64 / n;
            above.max(below)
        })
        .fold(0.0_f64, f64::max);
    Some(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[5.0]), Some(5.0));
        assert_eq!(median(&[1.0, f64::NAN]), None);
        assert_eq!(median(&[f64::NEG_INFINITY, 0.0, f64::INFINITY]), Some(0.0));
    }

    #[test]
    fn test_quantile_r7() {
        let data = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile(&data, 1.0), Some(40.0));
        // h = 3 × 0.25 = 0.75 → 10 + 0.75 × 10
        assert!((quantile(&data, 0.25).unwrap() - 17.5).abs() < 1e-12);
        assert_eq!(quantile(&data, -0.1), None);
        assert_eq!(quantile(&data, 1.1), None);
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_ks_statistic() {
        assert_eq!(ks_statistic(&[], |x| x), None);
        // A single point at the median is off by exactly one half.
        assert_eq!(ks_statistic(&[0.5], |x| x), Some(0.5));
        // Everything piled at 0 against Uniform(0,1).
        assert_eq!(ks_statistic(&[0.0, 0.0], |x| x), Some(1.0));
    }
}
