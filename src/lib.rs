//! # u-holtsmark
//!
//! The Holtsmark distribution: the symmetric α-stable law with α = 3/2.
//!
//! Density, distribution function and quantile function are evaluated from
//! piecewise rational approximations to near machine precision, including
//! far into the heavy tails. Variates are drawn exactly with the
//! Chambers–Mallows–Stuck construction.
//!
//! ## Modules
//!
//! - [`special`]: Canonical PDF, CDF and quantile (μ = 0, c = 1)
//! - [`distributions`]: [`Holtsmark`] location–scale type and stable-sum algebra
//! - [`random`]: Seeded RNG and the CMS sampler
//! - [`stats`]: Order statistics for validating samples
//!
//! ## Design Philosophy
//!
//! - **Tail accuracy first**: complementary modes for the CDF and quantile
//!   avoid cancellation in `1 − p`
//! - **Total functions**: NaN in, NaN out; no panics on any `f64` input
//! - **Property-based testing**: symmetry and inversion verified via proptest
//!
//! ## Example
//!
//! ```
//! use u_holtsmark::{holtsmark_cdf, holtsmark_quantile};
//!
//! let x = holtsmark_quantile(1e-9, true);
//! let q = holtsmark_cdf(x, true);
//! assert!(((q - 1e-9) / 1e-9).abs() < 1e-12);
//! ```

pub mod distributions;
pub mod random;
mod rational;
pub mod special;
pub mod stats;

pub use distributions::{combine_scales, DistributionError, Holtsmark};
pub use random::sample_standard;
pub use special::{holtsmark_cdf, holtsmark_pdf, holtsmark_quantile};
