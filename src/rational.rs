//! Rational (Padé) approximants and piecewise segment tables.
//!
//! Every Holtsmark evaluator is a table of rational approximants, each fitted
//! on one interval of its argument. This module holds the pieces they share:
//!
//! - [`poly`] / [`pade`]: Horner evaluation and the rational quotient.
//! - [`Segment`] / [`SegmentTable`]: an ordered partition of a bounded domain,
//!   selected by inclusive upper bound.
//! - [`ExponentBand`]: approximants indexed by the binary exponent of a
//!   probability, evaluated on a logarithmic argument.
//!
//! All tables are `static` data; nothing here allocates or holds state.

/// Evaluates `Σ coeffs[i]·xⁱ` by Horner's rule.
///
/// Coefficients are ordered from the constant term upward. An empty slice
/// evaluates to zero.
#[inline]
pub(crate) fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Rational approximant `poly(x, numer) / poly(x, denom)`.
///
/// Every table in this crate is fitted so that the denominator stays at or
/// above 0.5 on the interval its segment covers; this bounds the relative
/// error amplification of the division. A smaller value means a table was
/// paired with the wrong interval and is caught in debug builds only.
#[inline]
pub(crate) fn pade(x: f64, numer: &[f64], denom: &[f64]) -> f64 {
    let sc = poly(x, numer);
    let sd = poly(x, denom);

    // NaN arguments pass through untouched.
    debug_assert!(
        sd >= 0.5 || sd.is_nan(),
        "rational denominator {sd} below 0.5 at x = {x}"
    );

    sc / sd
}

/// A numerator/denominator coefficient pair.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rational {
    numer: &'static [f64],
    denom: &'static [f64],
}

impl Rational {
    pub(crate) const fn new(numer: &'static [f64], denom: &'static [f64]) -> Self {
        Self { numer, denom }
    }

    #[inline]
    pub(crate) fn eval(&self, x: f64) -> f64 {
        pade(x, self.numer, self.denom)
    }
}

/// How a segment maps its argument onto the approximant's fitted variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shift {
    /// Evaluate at `x − lower`.
    FromLower,
    /// Evaluate at `upper − x`.
    BelowUpper,
}

/// One interval `(lower, upper]` of a piecewise approximation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment {
    pub(crate) lower: f64,
    pub(crate) upper: f64,
    shift: Shift,
    approx: Rational,
}

impl Segment {
    pub(crate) const fn new(
        lower: f64,
        upper: f64,
        shift: Shift,
        numer: &'static [f64],
        denom: &'static [f64],
    ) -> Self {
        Self {
            lower,
            upper,
            shift,
            approx: Rational::new(numer, denom),
        }
    }

    #[inline]
    pub(crate) fn eval(&self, x: f64) -> f64 {
        let t = match self.shift {
            Shift::FromLower => x - self.lower,
            Shift::BelowUpper => self.upper - x,
        };
        self.approx.eval(t)
    }
}

/// Ordered, contiguous segments covering `[segments[0].lower, last.upper]`.
///
/// Adjacent segments share a boundary; a boundary value belongs to the
/// lower-indexed segment.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SegmentTable {
    segments: &'static [Segment],
}

impl SegmentTable {
    pub(crate) const fn new(segments: &'static [Segment]) -> Self {
        Self { segments }
    }

    /// Returns the first segment with `x <= upper`.
    ///
    /// `None` when `x` lies above the table (the caller's tail branch) or is
    /// NaN. The caller is responsible for `x >= segments[0].lower`.
    #[inline]
    pub(crate) fn find(&self, x: f64) -> Option<&'static Segment> {
        self.segments.iter().find(|s| x <= s.upper)
    }

    #[cfg(test)]
    pub(crate) fn segments(&self) -> &'static [Segment] {
        self.segments
    }
}

/// Approximant for probabilities whose binary exponent is `>= min_exponent`
/// (and below the previous band's), evaluated at `−log2(p·2^rescale)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExponentBand {
    pub(crate) min_exponent: i32,
    pub(crate) rescale: i32,
    approx: Rational,
}

impl ExponentBand {
    pub(crate) const fn new(
        min_exponent: i32,
        rescale: i32,
        numer: &'static [f64],
        denom: &'static [f64],
    ) -> Self {
        Self {
            min_exponent,
            rescale,
            approx: Rational::new(numer, denom),
        }
    }

    #[inline]
    pub(crate) fn eval(&self, p: f64) -> f64 {
        // Scaling by a power of two is exact, including for subnormal `p`.
        let scaled = libm::ldexp(p, self.rescale);
        self.approx.eval(-scaled.log2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poly_horner() {
        // 1 + 2x + 3x² at x = 2 → 17
        assert_eq!(poly(2.0, &[1.0, 2.0, 3.0]), 17.0);
        assert_eq!(poly(5.0, &[4.0]), 4.0);
        assert_eq!(poly(5.0, &[]), 0.0);
    }

    #[test]
    fn test_pade_quotient() {
        // (1 + x) / (1 + x²) at x = 1 → 1
        assert_eq!(pade(1.0, &[1.0, 1.0], &[1.0, 0.0, 1.0]), 1.0);
        assert!((pade(0.5, &[0.0, 2.0], &[1.0, 1.0]) - 1.0 / 1.5).abs() < 1e-15);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "below 0.5")]
    fn test_pade_denominator_floor() {
        pade(1.0, &[1.0], &[1.0, -0.9]);
    }

    const NUMER: [f64; 1] = [1.0];
    const DENOM: [f64; 1] = [1.0];
    static SEGMENTS: [Segment; 3] = [
        Segment::new(0.0, 1.0, Shift::FromLower, &NUMER, &DENOM),
        Segment::new(1.0, 2.0, Shift::FromLower, &NUMER, &DENOM),
        Segment::new(2.0, 4.0, Shift::BelowUpper, &NUMER, &DENOM),
    ];
    static TABLE: SegmentTable = SegmentTable::new(&SEGMENTS);

    #[test]
    fn test_find_boundaries_resolve_low() {
        assert_eq!(TABLE.find(0.0).map(|s| s.upper), Some(1.0));
        assert_eq!(TABLE.find(1.0).map(|s| s.upper), Some(1.0));
        assert_eq!(TABLE.find(1.5).map(|s| s.upper), Some(2.0));
        assert_eq!(TABLE.find(2.0).map(|s| s.upper), Some(2.0));
        assert_eq!(TABLE.find(4.0).map(|s| s.upper), Some(4.0));
        assert!(TABLE.find(4.0000001).is_none());
        assert!(TABLE.find(f64::NAN).is_none());
    }

    #[test]
    fn test_segment_shift() {
        const LINEAR: [f64; 2] = [0.0, 1.0];
        let from_lower = Segment::new(2.0, 4.0, Shift::FromLower, &LINEAR, &DENOM);
        let below_upper = Segment::new(2.0, 4.0, Shift::BelowUpper, &LINEAR, &DENOM);
        assert_eq!(from_lower.eval(3.5), 1.5);
        assert_eq!(below_upper.eval(3.5), 0.5);
    }

    #[test]
    fn test_exponent_band_argument() {
        const LINEAR: [f64; 2] = [0.0, 1.0];
        let band = ExponentBand::new(-6, 4, &LINEAR, &DENOM);
        // p = 2^-6 → −log2(2^-2) = 2
        assert_eq!(band.eval(2.0_f64.powi(-6)), 2.0);
        assert_eq!(band.eval(2.0_f64.powi(-4)), 0.0);

        // Smallest subnormal, 2^-1074, is rescaled without rounding.
        let deep = ExponentBand::new(-1074, 10, &LINEAR, &DENOM);
        assert_eq!(deep.eval(f64::from_bits(1)), 1064.0);
    }
}
