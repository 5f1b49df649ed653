//! The Holtsmark distribution in location–scale form.
//!
//! [`Holtsmark`] wraps the canonical functions of [`crate::special`] with a
//! location `μ` and a scale `c > 0`: `X = μ + c·U` where `U` is standard
//! Holtsmark.
//!
//! | Quantity | Value |
//! |---|---|
//! | Mean, median, mode | μ |
//! | Variance | +∞ |
//! | Skewness, kurtosis | undefined (NaN) |
//! | Entropy | 2.0694485051346244 + ln c |
//!
//! # Stability
//!
//! Independent Holtsmark variables are closed under addition: the sum of
//! `(μ₁, c₁)` and `(μ₂, c₂)` is Holtsmark with location `μ₁ + μ₂` and scale
//! [`combine_scales`]`(c₁, c₂)`.

use std::ops::{Add, Sub};

use rand::distr::Distribution;
use rand::Rng;
use thiserror::Error;

use crate::{random, special};

/// Differential entropy of the standard Holtsmark distribution (nats).
const STANDARD_ENTROPY: f64 = 2.069_448_505_134_624_400_32;

/// Error type for invalid distribution parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),
}

/// Scale of the sum of two independent Holtsmark variables.
///
/// ```text
/// c = (c₁^{3/2} + c₂^{3/2})^{2/3}
/// ```
///
/// Evaluated relative to the larger scale so it stays finite whenever the
/// result is representable.
///
/// # Examples
/// ```
/// use u_holtsmark::combine_scales;
/// let c = combine_scales(1.0, 1.0);
/// assert!((c - 2f64.powf(2.0 / 3.0)).abs() < 1e-15);
/// assert_eq!(combine_scales(3.0, 0.0), 3.0);
/// ```
pub fn combine_scales(c1: f64, c2: f64) -> f64 {
    let (hi, lo) = if c1 >= c2 { (c1, c2) } else { (c2, c1) };
    if hi == 0.0 {
        return 0.0;
    }
    let ratio = lo / hi;
    hi * (1.0 + ratio * ratio.sqrt()).powf(2.0 / 3.0)
}

/// Holtsmark distribution with location `μ` and scale `c`.
///
/// # Mathematical Definition
/// - Characteristic function: φ(t) = exp(iμt − |ct|^{3/2})
/// - PDF: f(x) = h((x−μ)/c) / c, with `h` the standard density
/// - CDF: F(x) = H((x−μ)/c)
///
/// # Examples
/// ```
/// use u_holtsmark::Holtsmark;
/// let d = Holtsmark::new(1.0, 2.0).unwrap();
/// assert!((d.cdf(1.0) - 0.5).abs() < 1e-15);
/// assert_eq!(d.quantile(0.5), Some(1.0));
/// assert_eq!(d.quantile(1.5), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawHoltsmark")
)]
pub struct Holtsmark {
    mu: f64,
    c: f64,
}

impl Holtsmark {
    /// Creates a Holtsmark distribution with location `mu` and scale `c`.
    ///
    /// # Errors
    /// Returns `Err` if `c ≤ 0` or either parameter is not finite.
    pub fn new(mu: f64, c: f64) -> Result<Self, DistributionError> {
        if !mu.is_finite() || !c.is_finite() || c <= 0.0 {
            log::debug!("rejecting Holtsmark parameters mu={mu}, c={c}");
            return Err(DistributionError::InvalidParameters(format!(
                "Holtsmark requires finite μ and c > 0, got μ={mu}, c={c}"
            )));
        }
        Ok(Self { mu, c })
    }

    /// The standard distribution, `μ = 0` and `c = 1`.
    pub fn standard() -> Self {
        Self { mu: 0.0, c: 1.0 }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn median(&self) -> f64 {
        self.mu
    }

    pub fn mode(&self) -> f64 {
        self.mu
    }

    /// Always `+∞`: the second moment diverges.
    pub fn variance(&self) -> f64 {
        f64::INFINITY
    }

    pub fn std_dev(&self) -> f64 {
        f64::INFINITY
    }

    /// Undefined; returns NaN.
    pub fn skewness(&self) -> f64 {
        f64::NAN
    }

    /// Undefined; returns NaN.
    pub fn kurtosis(&self) -> f64 {
        f64::NAN
    }

    /// Differential entropy in nats: `H₀ + ln c`.
    pub fn entropy(&self) -> f64 {
        STANDARD_ENTROPY + self.c.ln()
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.mu) / self.c
    }

    /// PDF: h((x−μ)/c) / c.
    pub fn pdf(&self, x: f64) -> f64 {
        special::holtsmark_pdf(self.standardize(x)) / self.c
    }

    /// CDF: P(X ≤ x).
    pub fn cdf(&self, x: f64) -> f64 {
        special::holtsmark_cdf(self.standardize(x), false)
    }

    /// Survival function: P(X > x), accurate deep in the upper tail.
    pub fn ccdf(&self, x: f64) -> f64 {
        special::holtsmark_cdf(self.standardize(x), true)
    }

    /// Inverse CDF (quantile): μ + c·Q(p).
    ///
    /// Returns `None` if `p` is outside `[0, 1]`. The endpoints map to `∓∞`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(self.mu + self.c * special::holtsmark_quantile(p, false))
    }

    /// Upper-tail quantile: the `x` with `P(X > x) = q`.
    ///
    /// Returns `None` if `q` is outside `[0, 1]`.
    pub fn quantile_upper(&self, q: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&q) {
            return None;
        }
        Some(self.mu + self.c * special::holtsmark_quantile(q, true))
    }

    /// Distribution of `X + Y` for independent `X ~ self`, `Y ~ other`.
    ///
    /// # Errors
    /// Returns `Err` if the combined location or scale overflows.
    pub fn sum(&self, other: &Self) -> Result<Self, DistributionError> {
        Self::new(self.mu + other.mu, combine_scales(self.c, other.c))
    }

    /// Distribution of `X − Y` for independent `X ~ self`, `Y ~ other`.
    ///
    /// `−Y` has the same scale as `Y`, so only the location differs from
    /// [`Holtsmark::sum`].
    ///
    /// # Errors
    /// Returns `Err` if the combined location or scale overflows.
    pub fn difference(&self, other: &Self) -> Result<Self, DistributionError> {
        Self::new(self.mu - other.mu, combine_scales(self.c, other.c))
    }
}

impl Default for Holtsmark {
    fn default() -> Self {
        Self::standard()
    }
}

impl Add for Holtsmark {
    type Output = Result<Holtsmark, DistributionError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(&rhs)
    }
}

impl Sub for Holtsmark {
    type Output = Result<Holtsmark, DistributionError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(&rhs)
    }
}

impl Distribution<f64> for Holtsmark {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.mu + self.c * random::sample(rng)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHoltsmark {
    mu: f64,
    c: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHoltsmark> for Holtsmark {
    type Error = DistributionError;

    fn try_from(raw: RawHoltsmark) -> Result<Self, Self::Error> {
        Self::new(raw.mu, raw.c)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn cdf_in_01(
            mu in -100.0_f64..100.0,
            c in 0.01_f64..100.0,
            x in -1e4_f64..1e4,
        ) {
            let d = Holtsmark::new(mu, c).unwrap();
            let p = d.cdf(x);
            prop_assert!((0.0..=1.0).contains(&p));
            prop_assert!((p + d.ccdf(x) - 1.0).abs() < 1e-15);
        }

        #[test]
        fn quantile_roundtrip(
            mu in -100.0_f64..100.0,
            c in 0.01_f64..100.0,
            p in 0.001_f64..0.999,
        ) {
            let d = Holtsmark::new(mu, c).unwrap();
            let x = d.quantile(p).unwrap();
            let p_back = d.cdf(x);
            prop_assert!((p_back - p).abs() < 1e-9, "roundtrip: p={p} -> x={x} -> p_back={p_back}");
        }

        #[test]
        fn pdf_scales_inversely(
            c in 0.01_f64..100.0,
            u in -50.0_f64..50.0,
        ) {
            let d = Holtsmark::new(0.0, c).unwrap();
            let expected = special::holtsmark_pdf(u) / c;
            let got = d.pdf(u * c);
            prop_assert!((got - expected).abs() <= 1e-12 * expected.abs().max(1e-300));
        }

        #[test]
        fn combine_scales_homogeneous(
            c1 in 0.01_f64..100.0,
            c2 in 0.01_f64..100.0,
            k in 0.01_f64..100.0,
        ) {
            let lhs = combine_scales(k * c1, k * c2);
            let rhs = k * combine_scales(c1, c2);
            prop_assert!(((lhs - rhs) / rhs).abs() < 1e-12);
            prop_assert_eq!(combine_scales(c1, c2), combine_scales(c2, c1));
            prop_assert!(combine_scales(c1, c2) >= c1.max(c2));
        }
    }
}
