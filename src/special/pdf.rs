//! Holtsmark probability density.

#![allow(clippy::excessive_precision)]

use crate::rational::{Rational, Segment, SegmentTable, Shift};

static SEGMENTS: [Segment; 7] = [
    Segment::new(0.0, 1.0, Shift::FromLower, &PDF_0_1_NUMER, &PDF_0_1_DENOM),
    Segment::new(1.0, 2.0, Shift::FromLower, &PDF_1_2_NUMER, &PDF_1_2_DENOM),
    Segment::new(2.0, 4.0, Shift::FromLower, &PDF_2_4_NUMER, &PDF_2_4_DENOM),
    Segment::new(4.0, 8.0, Shift::FromLower, &PDF_4_8_NUMER, &PDF_4_8_DENOM),
    Segment::new(8.0, 16.0, Shift::FromLower, &PDF_8_16_NUMER, &PDF_8_16_DENOM),
    Segment::new(16.0, 32.0, Shift::FromLower, &PDF_16_32_NUMER, &PDF_16_32_DENOM),
    Segment::new(32.0, 64.0, Shift::FromLower, &PDF_32_64_NUMER, &PDF_32_64_DENOM),
];

static TABLE: SegmentTable = SegmentTable::new(&SEGMENTS);

/// Fitted in `t = |u|^(-3/2)` for `|u| > 64`.
static TAIL: Rational = Rational::new(&PDF_LIMIT_NUMER, &PDF_LIMIT_DENOM);

/// Density of the standard Holtsmark distribution (μ = 0, c = 1).
///
/// # Algorithm
/// Even function, evaluated at `v = |u|`. On `[0, 64]` a rational
/// approximant is selected from seven segments with breakpoints
/// `1, 2, 4, …, 64` and evaluated at the distance from the segment's lower
/// bound. Beyond 64 the density follows the stable tail law
/// `f(u) ~ C·|u|^(-5/2)`; with `t = v^(-3/2)` the approximant `R(t)` gives
/// `f(u) = R(t)·t / v`.
///
/// # Accuracy
/// Close to machine precision over the whole real line.
///
/// # Returns
/// - A non-negative value; `0.0` at `±∞`.
/// - `f64::NAN` if `u` is NaN.
///
/// # Examples
/// ```
/// use u_holtsmark::special::holtsmark_pdf;
/// // f(0) = Γ(5/3) / π
/// assert!((holtsmark_pdf(0.0) - 0.28735275145216444).abs() < 1e-15);
/// assert_eq!(holtsmark_pdf(2.5), holtsmark_pdf(-2.5));
/// ```
pub fn holtsmark_pdf(u: f64) -> f64 {
    let v = u.abs();

    match TABLE.find(v) {
        Some(segment) => segment.eval(v),
        None => {
            let s = v.sqrt();
            let t = 1.0 / (s * s * s);
            TAIL.eval(t) * t / v
        }
    }
}

// ============================================================================
// Coefficients
// ============================================================================

const PDF_0_1_NUMER: [f64; 8] = [
    2.87352751452164445024e-1,
    1.18577398160636011811e-3,
    -2.16526599226820153260e-2,
    2.06462093371223113592e-3,
    2.43382128013710116747e-3,
    -2.15930711444603559520e-4,
    -1.04197836740809694657e-4,
    1.74679078247026597959e-5,
];
const PDF_0_1_DENOM: [f64; 8] = [
    1.00000000000000000000e0,
    4.12654472808214997252e-3,
    2.93891863033354755743e-1,
    8.70867222155141724171e-3,
    3.15027515421842640745e-2,
    2.11141832312672190669e-3,
    1.23545521355569424975e-3,
    1.58181113865348637475e-4,
];
const PDF_1_2_NUMER: [f64; 8] = [
    2.02038159607840130389e-1,
    -1.20368541260123112191e-2,
    -3.19235497414059987151e-3,
    8.88546222140257289852e-3,
    -5.37287599824602316660e-4,
    -2.39059149972922243276e-4,
    9.19551014849109417931e-5,
    -8.45210544648986348854e-6,
];
const PDF_1_2_DENOM: [f64; 8] = [
    1.00000000000000000000e0,
    6.11634701234079515138e-1,
    4.39922162828115412952e-1,
    1.73609068791154078128e-1,
    6.15831808473403962054e-2,
    1.64364949550314788638e-2,
    2.94399615562137394932e-3,
    4.99662797033514776061e-4,
];
const PDF_2_4_NUMER: [f64; 10] = [
    8.45396231261375200568e-2,
    -9.15509628797205847643e-3,
    1.82052933284907579374e-2,
    -2.44157914076021125182e-4,
    8.40871885414177705035e-4,
    7.26592615882060553326e-5,
    -1.87768359214600016641e-6,
    1.65716961206268668529e-6,
    -1.73979640146948858436e-7,
    7.24351142163396584236e-9,
];
const PDF_2_4_DENOM: [f64; 9] = [
    1.00000000000000000000e0,
    8.88099527896838765666e-1,
    6.53896948546877341992e-1,
    2.96296982585381844864e-1,
    1.14107585229341489833e-1,
    3.08914671331207488189e-2,
    7.03139384769200902107e-3,
    1.01201814277918577790e-3,
    1.12200113270398674535e-4,
];
const PDF_4_8_NUMER: [f64; 11] = [
    1.36729417918039395222e-2,
    1.19749117683408419115e-2,
    6.26780921592414207398e-3,
    1.84846137440857608948e-3,
    3.39307829797262466829e-4,
    2.73606960463362090866e-5,
    -1.14419838471713498717e-7,
    1.64552336875610576993e-8,
    -7.95501797873739398143e-10,
    2.55422885338760255125e-11,
    -4.12196487201928768038e-13,
];
const PDF_4_8_DENOM: [f64; 9] = [
    1.00000000000000000000e0,
    1.61334003864149486454e0,
    1.28348868912975898501e0,
    6.36594545291321210154e-1,
    2.11478937436277242988e-1,
    4.71550897200311391579e-2,
    6.64679677197059316835e-3,
    4.93706832858615742810e-4,
    9.26919465059204396228e-6,
];
const PDF_8_16_NUMER: [f64; 8] = [
    1.90649774685568282390e-3,
    7.43708409389806210196e-4,
    9.53777347766128955847e-5,
    3.79800193823252979170e-6,
    2.84836656088572745575e-8,
    -1.22715411241721187620e-10,
    8.56789906419220801109e-13,
    -4.17784858891714869163e-15,
];
const PDF_8_16_DENOM: [f64; 7] = [
    1.00000000000000000000e0,
    7.29383849235788831455e-1,
    2.16287201867831015266e-1,
    3.28789040872705709070e-2,
    2.64660789801664804789e-3,
    1.03662724048874906931e-4,
    1.47658125632566407978e-6,
];
const PDF_16_32_NUMER: [f64; 9] = [
    3.07231582988207590928e-4,
    5.16108848485823513911e-5,
    3.05776014220862257678e-6,
    7.64787444325088143218e-8,
    7.40426355029090813961e-10,
    1.57451122102115077046e-12,
    -2.14505675750572782093e-15,
    5.11204601013038698192e-18,
    -9.00826023095223871551e-21,
];
const PDF_16_32_DENOM: [f64; 8] = [
    1.00000000000000000000e0,
    3.28966789835486457746e-1,
    4.46981634258601621625e-2,
    3.22521297380474263906e-3,
    1.31985203433890010111e-4,
    3.01507121087942156530e-6,
    3.47777238523841835495e-8,
    1.50780503777979189972e-10,
];
const PDF_32_64_NUMER: [f64; 8] = [
    5.25741312407933720817e-5,
    2.34425802342454046697e-6,
    3.30042747965497652847e-8,
    1.58564820095683252738e-10,
    1.54070758384735212486e-13,
    -8.89232435250437247197e-17,
    8.14099948000080417199e-20,
    -4.61828164399178360925e-23,
];
const PDF_32_64_DENOM: [f64; 7] = [
    1.00000000000000000000e0,
    1.23544974283127158019e-1,
    6.01210465184576626802e-3,
    1.45390926665383063500e-4,
    1.80594709695117864840e-6,
    1.06088985542982155880e-8,
    2.20287881724613104903e-11,
];
const PDF_LIMIT_NUMER: [f64; 4] = [
    2.99206710301074508455e-1,
    -8.62469397757826072306e-1,
    1.74661995423629075890e-1,
    8.75909164947413479137e-1,
];
const PDF_LIMIT_DENOM: [f64; 3] = [
    1.00000000000000000000e0,
    -6.07405848111002255020e0,
    1.34068401972703571636e1,
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
    fn test_pdf_peak() {
        // Γ(5/3)/π
        let expected = 0.287_352_751_452_164_445;
        assert!((holtsmark_pdf(0.0) - expected).abs() < 1e-15);
        assert_eq!(holtsmark_pdf(-0.0), holtsmark_pdf(0.0));
    }

    #[test]
    fn test_pdf_reference_values() {
        let cases = [
            (1.0, 0.202_038_159_607_840_13),
            (3.5, 0.020_251_519_170_441_074),
            (-20.0, 0.000_173_366_906_892_471),
        ];
        for (u, expected) in cases {
            let got = holtsmark_pdf(u);
            assert!(
                rel_err(got, expected) < 1e-14,
                "pdf({u}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_pdf_special_inputs() {
        assert!(holtsmark_pdf(f64::NAN).is_nan());
        assert_eq!(holtsmark_pdf(f64::INFINITY), 0.0);
        assert_eq!(holtsmark_pdf(f64::NEG_INFINITY), 0.0);
        assert!(holtsmark_pdf(1e300) >= 0.0);
    }

    #[test]
    fn test_pdf_segment_seams() {
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
    fn test_pdf_tail_seam() {
        let last = TABLE.segments().last().unwrap();
        let inside = last.eval(64.0);
        let t = 1.0 / 512.0;
        let outside = TAIL.eval(t) * t / 64.0;
        assert!(rel_err(inside, outside) < 1e-14, "{inside} vs {outside}");
    }

    #[test]
    fn test_pdf_decreasing_away_from_zero() {
        let mut prev = holtsmark_pdf(0.0);
        for i in 1..=2000 {
            let u = i as f64 * 0.05;
            let f = holtsmark_pdf(u);
            assert!(f <= prev * (1.0 + 1e-14), "pdf increased at u={u}");
            prev = f;
        }
    }

    #[test]
    fn test_pdf_asymptotic_expansion() {
        // f(u) ~ (1/π) Σ (-1)^(k+1) Γ(3k/2+1)/k! sin(3kπ/4) u^(-3k/2-1)
        let u: f64 = 100.0;
        let series = 0.299_206_710_301_074_6 * u.powf(-2.5)
            + 0.954_929_658_551_372 * u.powf(-4.0)
            + 1.963_544_036_350_801 * u.powf(-5.5);
        let got = holtsmark_pdf(u);
        assert!(rel_err(got, series) < 1e-9, "pdf(100) = {got}, series {series}");
    }

    #[test]
    fn test_pdf_tail_coefficient() {
        // u^(5/2)·f(u) → 3Γ(3/2)sin(3π/4)/(2π)
        let c = 0.299_206_710_301_074_508;
        for u in [1e6_f64, 1e10, 1e14] {
            let scaled = holtsmark_pdf(u) * u.powf(2.5);
            assert!(rel_err(scaled, c) < 1e-8, "u={u}: {scaled}");
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn pdf_even(u in -1e4_f64..1e4) {
            prop_assert_eq!(holtsmark_pdf(u), holtsmark_pdf(-u));
        }

        #[test]
        fn pdf_positive_and_bounded(u in -1e8_f64..1e8) {
            let f = holtsmark_pdf(u);
            prop_assert!(f > 0.0 && f <= holtsmark_pdf(0.0), "pdf({}) = {}", u, f);
        }
    }
}
