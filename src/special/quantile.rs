//! Holtsmark quantile function (inverse CDF).

#![allow(clippy::excessive_precision)]

use crate::rational::{ExponentBand, Segment, SegmentTable, Shift};

/// Probabilities below this use the exponent bands.
const MEDIAN_REGION_FLOOR: f64 = 0.125;

// Evaluated at the distance below each sub-interval's ceiling.
static MEDIAN_SEGMENTS: [Segment; 8] = [
    Segment::new(
        0.125,
        0.140625,
        Shift::BelowUpper,
        &QUANTILE_0P125_0P140625_NUMER,
        &QUANTILE_0P125_0P140625_DENOM,
    ),
    Segment::new(
        0.140625,
        0.15625,
        Shift::BelowUpper,
        &QUANTILE_0P140625_0P15625_NUMER,
        &QUANTILE_0P140625_0P15625_DENOM,
    ),
    Segment::new(
        0.15625,
        0.1875,
        Shift::BelowUpper,
        &QUANTILE_0P15625_0P1875_NUMER,
        &QUANTILE_0P15625_0P1875_DENOM,
    ),
    Segment::new(
        0.1875,
        0.25,
        Shift::BelowUpper,
        &QUANTILE_0P1875_0P25_NUMER,
        &QUANTILE_0P1875_0P25_DENOM,
    ),
    Segment::new(
        0.25,
        0.28125,
        Shift::BelowUpper,
        &QUANTILE_0P25_0P28125_NUMER,
        &QUANTILE_0P25_0P28125_DENOM,
    ),
    Segment::new(
        0.28125,
        0.3125,
        Shift::BelowUpper,
        &QUANTILE_0P28125_0P3125_NUMER,
        &QUANTILE_0P28125_0P3125_DENOM,
    ),
    Segment::new(
        0.3125,
        0.375,
        Shift::BelowUpper,
        &QUANTILE_0P3125_0P375_NUMER,
        &QUANTILE_0P3125_0P375_DENOM,
    ),
    Segment::new(
        0.375,
        0.5,
        Shift::BelowUpper,
        &QUANTILE_0P375_0P5_NUMER,
        &QUANTILE_0P375_0P5_DENOM,
    ),
];

static MEDIAN_TABLE: SegmentTable = SegmentTable::new(&MEDIAN_SEGMENTS);

// Each band rescales p by its exclusive upper exponent, so the approximant
// argument −log2(p·2^k) starts at 0 on the band's upper edge.
static TAIL_BANDS: [ExponentBand; 7] = [
    ExponentBand::new(-4, 3, &QUANTILE_EXP_M3_4_NUMER, &QUANTILE_EXP_M3_4_DENOM),
    ExponentBand::new(-6, 4, &QUANTILE_EXP_M4_6_NUMER, &QUANTILE_EXP_M4_6_DENOM),
    ExponentBand::new(-8, 6, &QUANTILE_EXP_M6_8_NUMER, &QUANTILE_EXP_M6_8_DENOM),
    ExponentBand::new(-16, 8, &QUANTILE_EXP_M8_16_NUMER, &QUANTILE_EXP_M8_16_DENOM),
    ExponentBand::new(-32, 16, &QUANTILE_EXP_M16_32_NUMER, &QUANTILE_EXP_M16_32_DENOM),
    ExponentBand::new(-64, 32, &QUANTILE_EXP_M32_64_NUMER, &QUANTILE_EXP_M32_64_DENOM),
    ExponentBand::new(-96, 64, &QUANTILE_EXP_M64_96_NUMER, &QUANTILE_EXP_M64_96_DENOM),
];

/// Leading coefficient of the left tail, `Q(p) ~ −p^(-2/3) / (2·∛π)`.
fn asymptotic_coefficient() -> f64 {
    1.0 / (2.0 * std::f64::consts::PI.cbrt())
}

/// Band covering the binary exponent of `p`, or `None` below `2^-96`.
///
/// `p = 0` has no exponent and falls through to the asymptote, which then
/// yields an infinite magnitude.
fn tail_band(p: f64) -> Option<&'static ExponentBand> {
    if p == 0.0 {
        return None;
    }
    let exponent = libm::ilogb(p);
    TAIL_BANDS.iter().find(|band| exponent >= band.min_exponent)
}

/// `|Q(p)|` for `p < 0.125`.
fn tail_magnitude(p: f64) -> f64 {
    let v = match tail_band(p) {
        Some(band) => band.eval(p),
        None => {
            #[cfg(debug_assertions)]
            log::trace!("holtsmark quantile: p = {p:e} below 2^-96, using asymptotic form");
            asymptotic_coefficient()
        }
    };

    let r = p.cbrt();
    v / (r * r)
}

/// Quantile function (inverse CDF) of the standard Holtsmark distribution.
///
/// With `complementary = false` returns `u` such that `P(U ≤ u) = p`; with
/// `true` returns `u` such that `P(U > u) = p`. The two are negatives of
/// each other.
///
/// # Algorithm
/// Odd symmetry reduces `p > 0.5` to `1 − p`. On `[0.125, 0.5]` eight
/// rational approximants cover sub-intervals with ceilings
/// `0.140625, 0.15625, 0.1875, 0.25, 0.28125, 0.3125, 0.375, 0.5`, each
/// evaluated at `ceiling − p`. Below 0.125 the stable tail law
/// `P(U < u) ~ C·|u|^(-3/2)` is inverted: a correction `v` is taken from a
/// band selected by the binary exponent of `p` (bands end at exponents
/// −4, −6, −8, −16, −32, −64, −96) and the magnitude is `v·p^(-2/3)`. Below
/// `2^-96`, `v` is the exact asymptotic constant `1 / (2·∛π)`.
///
/// # Returns
/// - `+0.0` at `p = 0.5` in both modes.
/// - `f64::NAN` if `p` is NaN or outside `[0, 1]`.
/// - `∓∞` at `p = 0` and `±∞` at `p = 1` (sign flipped for the upper tail).
///
/// # Examples
/// ```
/// use u_holtsmark::special::{holtsmark_cdf, holtsmark_quantile};
/// assert_eq!(holtsmark_quantile(0.5, false), 0.0);
/// let u = holtsmark_quantile(0.01, false);
/// assert!((holtsmark_cdf(u, false) - 0.01).abs() < 1e-15);
/// assert_eq!(holtsmark_quantile(0.01, true), -u);
/// ```
pub fn holtsmark_quantile(p: f64, complementary: bool) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.5 {
        return 0.0;
    }
    if p > 0.5 {
        return -holtsmark_quantile(1.0 - p, complementary);
    }

    let magnitude = if p >= MEDIAN_REGION_FLOOR {
        // The table spans [0.125, 0.5] with no gaps.
        MEDIAN_TABLE.find(p).map_or(f64::NAN, |segment| segment.eval(p))
    } else {
        tail_magnitude(p)
    };

    if complementary {
        magnitude
    } else {
        -magnitude
    }
}

// ============================================================================
// Coefficients
// ============================================================================

const QUANTILE_0P125_0P140625_NUMER: [f64; 5] = [
    1.64755907881888895243e0,
    -9.46223268108472131461e0,
    -1.46485828319487451039e1,
    7.25486790973800512399e1,
    1.24891835115130504600e1,
];
const QUANTILE_0P125_0P140625_DENOM: [f64; 5] = [
    1.00000000000000000000e0,
    -1.08445161397758561876e1,
    2.64180561262881565213e1,
    6.05469887177596690605e0,
    -1.89634431425301124532e1,
];
const QUANTILE_0P140625_0P15625_NUMER: [f64; 5] = [
    1.52359744792606448551e0,
    -8.06431964734279358901e0,
    -1.34734713642884116677e1,
    6.60891706311952626104e1,
    -9.13941763584971462836e-1,
];
const QUANTILE_0P140625_0P15625_DENOM: [f64; 5] = [
    1.00000000000000000000e0,
    -1.02170445962169570921e1,
    2.48827421714146675366e1,
    1.18985608603199195528e0,
    -1.72878893066704167528e1,
];
const QUANTILE_0P15625_0P1875_NUMER: [f64; 5] = [
    1.31030403921397562363e0,
    1.16504406379173711366e1,
    -8.14308477961457578548e1,
    -1.40759937615479063068e2,
    6.26326063408466033160e2,
];
const QUANTILE_0P15625_0P1875_DENOM: [f64; 6] = [
    1.00000000000000000000e0,
    4.12589389551612894734e0,
    -9.40067348012281374404e1,
    2.35795998097346762045e2,
    2.31515054688888762501e1,
    -1.63201289312224479049e2,
];
const QUANTILE_0P1875_0P25_NUMER: [f64; 7] = [
    9.68933181713583005209e-1,
    7.49553732900960722458e0,
    -3.42717276813871206860e1,
    -1.16327624742001106254e2,
    3.44015086242673128090e2,
    6.78292351447349643702e1,
    -1.97870428032134245496e2,
];
const QUANTILE_0P1875_0P25_DENOM: [f64; 7] = [
    1.00000000000000000000e0,
    2.73171003061503859864e0,
    -5.69774659769725058898e1,
    1.15769902958643617266e2,
    6.11073403960390191083e1,
    -1.65072996333156424625e2,
    -7.42925581406063537242e0,
];
const QUANTILE_0P25_0P28125_NUMER: [f64; 5] = [
    8.24180933056718074476e-1,
    4.76452509127764244393e-1,
    -1.35090981158803003137e1,
    9.20753678163114872540e0,
    1.00034227601935604425e1,
];
const QUANTILE_0P25_0P28125_DENOM: [f64; 5] = [
    1.00000000000000000000e0,
    -4.80540734643520927196e0,
    2.66403537720458778267e0,
    7.44369383656293972199e0,
    -2.41052288724237612587e0,
];
const QUANTILE_0P28125_0P3125_NUMER: [f64; 5] = [
    6.90498457639035315479e-1,
    1.42973901835715680920e0,
    -1.17118525918434220208e1,
    3.30514012302929917478e0,
    8.99659786405910843540e0,
];
const QUANTILE_0P28125_0P3125_DENOM: [f64; 5] = [
    1.00000000000000000000e0,
    -3.91608147997264525031e0,
    4.51563972106315597123e-1,
    6.66076245874745266562e0,
    -9.94148434923448964903e-1,
];
const QUANTILE_0P3125_0P375_NUMER: [f64; 5] = [
    4.45602574935161564368e-1,
    2.40903879910268494867e0,
    -9.82794302165885089168e0,
    -2.79117626346573577254e0,
    1.48986643596020950145e1,
];
const QUANTILE_0P3125_0P375_DENOM: [f64; 6] = [
    1.00000000000000000000e0,
    -2.99188829301159725281e0,
    -2.00433579647621385335e0,
    7.98973404171181782792e0,
    3.59444385562866023801e-1,
    -2.34737380803510920247e0,
];
const QUANTILE_0P375_0P5_NUMER: [f64; 8] = [
    0.00000000000000000000e0,
    3.48004323935095437104e0,
    9.42839552086342750948e-1,
    -2.08787999555964682038e1,
    -3.20444361481410826111e0,
    3.15453348812026005283e1,
    1.26228984012477252670e0,
    -7.29712647060353688734e0,
];
const QUANTILE_0P375_0P5_DENOM: [f64; 7] = [
    1.00000000000000000000e0,
    2.70927539469944016591e-1,
    -7.49018205981475505380e0,
    -1.32465067141516448800e0,
    1.60714345242576402393e1,
    1.21071053538685280247e0,
    -8.57794054432440208538e0,
];
const QUANTILE_EXP_M3_4_NUMER: [f64; 8] = [
    4.46943301497773314460e-1,
    -1.07267614417424412546e-2,
    -7.21097021064631831756e-2,
    2.93948745441334193469e-2,
    -7.33259305010485915480e-4,
    -1.38660725579083612045e-3,
    2.95410432808739478857e-4,
    -2.88688017391292485867e-5,
];
const QUANTILE_EXP_M3_4_DENOM: [f64; 7] = [
    1.00000000000000000000e0,
    -2.72809429017073648893e-2,
    -7.85526213469762960803e-2,
    2.41360900478283465241e-2,
    3.44597797125179611095e-3,
    -8.65046428689780375806e-4,
    -1.04147382037315517658e-4,
];
const QUANTILE_EXP_M4_6_NUMER: [f64; 10] = [
    4.25344469980677332786e-1,
    3.42055470008289997369e-2,
    9.33607217644370441642e-2,
    4.57057092587794346086e-2,
    1.16149976708336017542e-2,
    6.40479797962035786337e-3,
    1.58526153828271386329e-3,
    3.84032908993313260466e-4,
    6.98960839033991110525e-5,
    9.66690587477825432174e-6,
];
const QUANTILE_EXP_M4_6_DENOM: [f64; 10] = [
    1.00000000000000000000e0,
    1.60044610004497775009e-1,
    2.41675490962065446592e-1,
    1.13752642382290596388e-1,
    4.05058759031434785584e-2,
    1.59432816225295660111e-2,
    4.79286678946992027479e-3,
    1.16048151070154814260e-3,
    2.01755520912887201472e-4,
    2.82884561026909054732e-5,
];
const QUANTILE_EXP_M6_8_NUMER: [f64; 9] = [
    3.68520435599726877886e-1,
    8.26682725061327242371e-1,
    6.85235826889543887309e-1,
    3.28640408399661746210e-1,
    9.04801242897407528807e-2,
    1.57470088502958130451e-2,
    1.61541023176880542598e-3,
    9.78919203915954346945e-5,
    9.71371309261213597491e-8,
];
const QUANTILE_EXP_M6_8_DENOM: [f64; 8] = [
    1.00000000000000000000e0,
    2.29132755303753682133e0,
    1.95530118226232968288e0,
    9.55029685883545321419e-1,
    2.68254036588585643328e-1,
    4.61398419640231283164e-2,
    4.66131710581568432246e-3,
    2.94491397241310968725e-4,
];
const QUANTILE_EXP_M8_16_NUMER: [f64; 10] = [
    3.48432718168951419458e-1,
    2.99680703419193973028e-1,
    1.09531896991852433149e-1,
    2.28766133215975559897e-2,
    3.09836969941710802698e-3,
    2.89346186674853481383e-4,
    1.96344583080243707169e-5,
    9.48415601271652569275e-7,
    3.08821091232356755783e-8,
    5.58003465656339818416e-10,
];
const QUANTILE_EXP_M8_16_DENOM: [f64; 10] = [
    1.00000000000000000000e0,
    8.73938978582311007855e-1,
    3.21771888210250878162e-1,
    6.70432401844821772827e-2,
    9.05369648218831664411e-3,
    8.50098390828726795296e-4,
    5.73568804840571459050e-5,
    2.78374120155590875053e-6,
    9.03427646135263412003e-8,
    1.63556457120944847882e-9,
];
const QUANTILE_EXP_M16_32_NUMER: [f64; 10] = [
    3.41419813138786920868e-1,
    1.30219412019722274099e-1,
    2.36047671342109636195e-2,
    2.67913051721210953893e-3,
    2.10896260337301129968e-4,
    1.19804595761611765179e-5,
    4.91470756460287578143e-7,
    1.38299844947707591018e-8,
    2.25766283556816829070e-10,
    -8.46510608386806647654e-18,
];
const QUANTILE_EXP_M16_32_DENOM: [f64; 9] = [
    1.00000000000000000000e0,
    3.81461950831351846380e-1,
    6.91390438866520696447e-2,
    7.84798596829449138229e-3,
    6.17735117400536913546e-4,
    3.50937328177439258136e-5,
    1.43958654321452532854e-6,
    4.05109749922716264456e-8,
    6.61306247924109415113e-10,
];
const QUANTILE_EXP_M32_64_NUMER: [f64; 9] = [
    3.41392032051575965049e-1,
    1.53372256183388434238e-1,
    3.33822240038718319714e-2,
    4.66328786929735228532e-3,
    4.67981207864367711082e-4,
    3.48119463063280710691e-5,
    2.17755850282052679342e-6,
    7.40424342670289242177e-8,
    4.61294046336533026640e-9,
];
const QUANTILE_EXP_M32_64_DENOM: [f64; 9] = [
    1.00000000000000000000e0,
    4.49255524669251621744e-1,
    9.77826688966262423974e-2,
    1.36596271675764346980e-2,
    1.37080296105355418281e-3,
    1.01970588303201339768e-4,
    6.37846903580539445994e-6,
    2.16883897125962281968e-7,
    1.35121503608967367232e-8,
];
const QUANTILE_EXP_M64_96_NUMER: [f64; 2] = [
    3.41392031627647840817e-1,
    2.18544418142248369868e-1,
];
const QUANTILE_EXP_M64_96_DENOM: [f64; 2] = [
    1.00000000000000000000e0,
    6.40156763765980698523e-1,
];

// ============================================================================
// Tests
// ============================================================================
