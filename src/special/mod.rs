//! Canonical Holtsmark functions.
//!
//! The standard Holtsmark law is the symmetric α-stable distribution with
//! α = 3/2, characteristic function `exp(−|t|^{3/2})`. Its density has no
//! closed form; these functions evaluate it, its CDF and its quantile from
//! precomputed piecewise rational approximations to near machine precision.
//!
//! All arguments are canonical: for location `μ` and scale `c`, pass
//! `u = (x − μ)/c`. See [`crate::distributions::Holtsmark`] for the
//! location/scale form.
//!
//! | Function | Domain | Symmetry |
//! |---|---|---|
//! | [`holtsmark_pdf`] | ℝ | even |
//! | [`holtsmark_cdf`] | ℝ, lower/upper | `F(−u) = 1 − F(u)` |
//! | [`holtsmark_quantile`] | `[0, 1]`, lower/upper | `Q(1 − p) = −Q(p)` |

mod cdf;
mod pdf;
mod quantile;

pub use cdf::holtsmark_cdf;
pub use pdf::holtsmark_pdf;
pub use quantile::holtsmark_quantile;
