//! Holtsmark cumulative distribution function.

#![allow(clippy::excessive_precision)]

use crate::rational::{Rational, Segment, SegmentTable, Shift};

// Each approximant yields the upper tail probability P(U > v) for v >= 0.
static SEGMENTS: [Segment; 8] = [
    Segment::new(0.0, 0.5, Shift::FromLower, &CDF_0_0P5_NUMER, &CDF_0_0P5_DENOM),
    Segment::new(0.5, 1.0, Shift::FromLower, &CDF_0P5_1_NUMER, &CDF_0P5_1_DENOM),
    Segment::new(1.0, 2.0, Shift::FromLower, &CDF_1_2_NUMER, &CDF_1_2_DENOM),
    Segment::new(2.0, 4.0, Shift::FromLower, &CDF_2_4_NUMER, &CDF_2_4_DENOM),
    Segment::new(4.0, 8.0, Shift::FromLower, &CDF_4_8_NUMER, &CDF_4_8_DENOM),
    Segment::new(8.0, 16.0, Shift::FromLower, &CDF_8_16_NUMER, &CDF_8_16_DENOM),
    Segment::new(16.0, 32.0, Shift::FromLower, &CDF_16_32_NUMER, &CDF_16_32_DENOM),
    Segment::new(32.0, 64.0, Shift::FromLower, &CDF_32_64_NUMER, &CDF_32_64_DENOM),
];

static TABLE: SegmentTable = SegmentTable::new(&SEGMENTS);

static TAIL: Rational = Rational::new(&CDF_LIMIT_NUMER, &CDF_LIMIT_DENOM);

/// Upper tail probability `P(U > v)` for `v >= 0`.
fn upper_tail(v: f64) -> f64 {
    match TABLE.find(v) {
        Some(segment) => segment.eval(v),
        None => {
            // P(U > v) ~ C·v^(-3/2); one power slower than the density.
            let s = v.sqrt();
            let t = 1.0 / (s * s * s);
            TAIL.eval(t) * t
        }
    }
}

/// CDF of the standard Holtsmark distribution (μ = 0, c = 1).
///
/// With `complementary = false` returns `P(U ≤ u)`; with `true` returns
/// `P(U > u)`. Computing the upper tail directly keeps full relative
/// precision far out in the right tail, where `1 − cdf` would cancel.
///
/// # Algorithm
/// The tables give `P(U > |u|)` on `[0, 64]` (eight segments) and, beyond 64,
/// `R(t)·t` with `t = |u|^(-3/2)`. By symmetry that single quantity covers
/// all four sign/tail combinations: it is the answer when exactly one of
/// "`u ≤ 0`" and "`complementary`" holds, and its complement otherwise.
///
/// # Returns
/// - A value in `[0, 1]`; `0.5` at `u = 0` in both modes.
/// - `f64::NAN` if `u` is NaN.
///
/// # Examples
/// ```
/// use u_holtsmark::special::holtsmark_cdf;
/// assert_eq!(holtsmark_cdf(0.0, false), 0.5);
/// let (lower, upper) = (holtsmark_cdf(1.5, false), holtsmark_cdf(1.5, true));
/// assert!((lower + upper - 1.0).abs() < 1e-15);
/// ```
pub fn holtsmark_cdf(u: f64, complementary: bool) -> f64 {
    let reflect = (u <= 0.0) ^ complementary;
    let base = upper_tail(u.abs());

    if reflect {
        base
    } else {
        1.0 - base
    }
}

// ============================================================================
// Coefficients
// ============================================================================

const CDF_0_0P5_NUMER: [f64; 6] = [
    5.00000000000000000000e-1,
    -1.34752580674786639030e-1,
    1.86318418252163378528e-2,
    1.04499798132512381447e-2,
    -1.60831910014592923855e-3,
    1.38823662364438342844e-4,
];
const CDF_0_0P5_DENOM: [f64; 7] = [
    1.00000000000000000000e0,
    3.05200341554753776087e-1,
    2.12663999430421346175e-1,
    7.23836000984872591553e-2,
    1.67941072412796299986e-2,
    4.71213644318790580839e-3,
    5.86825130959777535991e-4,
];
const CDF_0P5_1_NUMER: [f64; 7] = [
    3.60595773518728397351e-1,
    5.75238626843218819756e-1,
    -3.31245319943021227117e-1,
    1.48132966310216368831e-1,
    -2.32875122617713403365e-2,
    2.08038303148835575624e-3,
    6.01511310581302829460e-6,
];
const CDF_0P5_1_DENOM: [f64; 7] = [
    1.00000000000000000000e0,
    2.32264360456739861886e0,
    6.39715443864749851087e-1,
    5.03940458163958921325e-1,
    8.84780893031413729292e-2,
    3.01497774031208621961e-2,
    3.45886005612108195390e-3,
];
const CDF_1_2_NUMER: [f64; 8] = [
    2.43657975600729535515e-1,
    -6.02286263626532324632e-2,
    4.68361231392743283350e-2,
    -1.13497179885838883972e-3,
    1.20141595689136205012e-3,
    3.02402304689333413256e-4,
    -1.22652173865646814676e-6,
    2.29521832683440044997e-6,
];
const CDF_1_2_DENOM: [f64; 9] = [
    1.00000000000000000000e0,
    5.82002427359748247121e-1,
    3.96529686558825119743e-1,
    1.49690294526117385174e-1,
    5.15049953937764895435e-2,
    1.30218216530450637564e-2,
    2.53640337919037463659e-3,
    3.79575042317720710311e-4,
    2.94034997185982139717e-5,
];
const CDF_2_4_NUMER: [f64; 9] = [
    1.05039829654829164883e-1,
    1.66621813028423002562e-2,
    2.93820049104275137099e-2,
    3.36850260303189378587e-3,
    2.27925819398326978014e-3,
    1.66394162680543987783e-4,
    4.51400415642703075050e-5,
    2.12164734714059446913e-7,
    1.69306881760242775488e-8,
];
const CDF_2_4_DENOM: [f64; 9] = [
    1.00000000000000000000e0,
    9.63461239051296108254e-1,
    6.54183344973801096611e-1,
    2.92007762594247903696e-1,
    1.00918751132022401499e-1,
    2.55899135910670703945e-2,
    4.85740416919283630358e-3,
    6.11435190489589619906e-4,
    4.10953248859973756440e-5,
];
const CDF_4_8_NUMER: [f64; 8] = [
    3.05754562114095142887e-2,
    3.25462617990002726083e-2,
    1.78205524297204753048e-2,
    5.61565369088816402420e-3,
    1.05695297340067353106e-3,
    9.93588579804511250576e-5,
    2.94302107205379334662e-6,
    1.09016076876928010898e-8,
];
const CDF_4_8_DENOM: [f64; 9] = [
    1.00000000000000000000e0,
    1.51164395622515150122e0,
    1.09391911233213526071e0,
    4.77950346062744800732e-1,
    1.34082684956852773925e-1,
    2.37572579895639589816e-2,
    2.41806218388337284640e-3,
    1.10378140456646280084e-4,
    1.31559373832822136249e-6,
];
const CDF_8_16_NUMER: [f64; 8] = [
    9.47408470248235718880e-3,
    4.70888722333356024081e-3,
    8.66397831692913140221e-4,
    7.11721056656424862090e-5,
    2.56320582355149253994e-6,
    3.37749186035552101702e-8,
    8.32182844837952178153e-11,
    -8.80541360484428526226e-14,
];
const CDF_8_16_DENOM: [f64; 8] = [
    1.00000000000000000000e0,
    6.98261117346347123707e-1,
    1.97823959738695249267e-1,
    2.89311735096848395080e-2,
    2.30087055379997473849e-3,
    9.60592522700377510007e-5,
    1.84474415187428058231e-6,
    1.14339998084523151203e-8,
];
const CDF_16_32_NUMER: [f64; 8] = [
    3.19610991747326729867e-3,
    5.11880074251341162590e-4,
    2.80704092977662888563e-5,
    6.31310155466346114729e-7,
    5.29618446795457166842e-9,
    9.20292337847562746519e-12,
    -9.16761719448360345363e-15,
    1.20433396121606479712e-17,
];
const CDF_16_32_DENOM: [f64; 7] = [
    1.00000000000000000000e0,
    2.56283944667056551858e-1,
    2.56811818304462676948e-2,
    1.26678062261253559927e-3,
    3.17001344827541091252e-5,
    3.68737201224811007437e-7,
    1.47625352605312785910e-9,
];
const CDF_32_64_NUMER: [f64; 8] = [
    1.11172037056341397612e-3,
    7.84545643188695076893e-5,
    1.94862940242223222641e-6,
    2.02704958737259525509e-8,
    7.99772378955335076832e-11,
    6.62544230949971310060e-14,
    -3.18234118727325492149e-17,
    2.03424457039308806437e-20,
];
const CDF_32_64_DENOM: [f64; 7] = [
    1.00000000000000000000e0,
    1.17861198759233241198e-1,
    5.45962263583663240699e-3,
    1.25274651876378267111e-4,
    1.46857544539612002745e-6,
    8.06441204620771968579e-9,
    1.53682779460286464073e-11,
];
const CDF_LIMIT_NUMER: [f64; 4] = [
    1.99471140200716338970e-1,
    -6.90933799347184400422e-1,
    4.30385245884336871950e-1,
    3.52790131116013716885e-1,
];
const CDF_LIMIT_DENOM: [f64; 3] = [
    1.00000000000000000000e0,
    -5.05959751628952574534e0,
    8.04408113719341786819e0,
];

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_err(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn test_cdf_median() {
        assert_eq!(holtsmark_cdf(0.0, false), 0.5);
        assert_eq!(holtsmark_cdf(0.0, true), 0.5);
        assert_eq!(holtsmark_cdf(-0.0, false), 0.5);
    }

    #[test]
    fn test_cdf_reference_values() {
        let cases = [
            (1.0, false, 0.756_342_024_399_270_5),
            (-2.0, false, 0.105_039_829_654_829_16),
            (5.0, true, 0.020_669_087_140_116_19),
        ];
        for (u, complementary, expected) in cases {
            let got = holtsmark_cdf(u, complementary);
            assert!(
                rel_err(got, expected) < 1e-14,
                "cdf({u}, {complementary}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_cdf_special_inputs() {
        assert!(holtsmark_cdf(f64::NAN, false).is_nan());
        assert!(holtsmark_cdf(f64::NAN, true).is_nan());
        assert_eq!(holtsmark_cdf(f64::INFINITY, false), 1.0);
        assert_eq!(holtsmark_cdf(f64::NEG_INFINITY, false), 0.0);
        assert_eq!(holtsmark_cdf(f64::INFINITY, true), 0.0);
        assert_eq!(holtsmark_cdf(f64::NEG_INFINITY, true), 1.0);
    }

    #[test]
    fn test_cdf_quadrants() {
        let u = 3.0;
        let tail = upper_tail(u);
        assert_eq!(holtsmark_cdf(u, true), tail);
        assert_eq!(holtsmark_cdf(-u, false), tail);
        assert_eq!(holtsmark_cdf(u, false), 1.0 - tail);
        assert_eq!(holtsmark_cdf(-u, true), 1.0 - tail);
    }

    #[test]
    fn test_cdf_segment_seams() {
        for pair in TABLE.segments().windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            assert_eq!(left.upper, right.lower);
            let a = left.eval(left.upper);
            let b = right.eval(right.lower);
            assert!(
                rel_err(a, b) < 1e-14,
                "seam at {}: {a} vs {b}",
                left.upper
            );
        }
    }

    #[test]
    fn test_cdf_tail_seam() {
        let last = TABLE.segments().last().unwrap();
        let inside = last.eval(64.0);
        let t = 1.0 / 512.0;
        let outside = TAIL.eval(t) * t;
        assert!(rel_err(inside, outside) < 1e-14, "{inside} vs {outside}");
    }

    #[test]
    fn test_cdf_monotonic() {
        let mut prev = 0.0;
        for i in -10_000..=10_000 {
            let u = i as f64 * 0.01;
            let c = holtsmark_cdf(u, false);
            assert!(c >= prev - 1e-15, "CDF not monotonic at u={u}");
            prev = c;
        }
    }

    #[test]
    fn test_cdf_asymptotic_expansion() {
        // P(U > u) ~ (1/π) Σ (-1)^(k+1) Γ(3k/2)/k! sin(3kπ/4) u^(-3k/2)
        let u: f64 = 100.0;
        let series = 0.199_471_140_200_716_35 * u.powf(-1.5)
            + 0.318_309_886_183_790_7 * u.powf(-3.0)
            + 0.436_343_119_189_066_76 * u.powf(-4.5);
        let got = holtsmark_cdf(u, true);
        assert!(rel_err(got, series) < 1e-9, "ccdf(100) = {got}, series {series}");
    }

    #[test]
    fn test_cdf_far_tail_keeps_precision() {
        let u: f64 = 1e12;
        let got = holtsmark_cdf(-u, false);
        let leading = 0.199_471_140_200_716_339 * u.powf(-1.5);
        assert!(got > 0.0);
        assert!(rel_err(got, leading) < 1e-12, "{got} vs {leading}");
    }
}
