#![allow(clippy::excessive_precision)]

/// Gauss-Kronrod pair used by [`qag`](super::qag) on every subinterval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KronrodRule {
    /// 7-point Gauss, 15-point Kronrod.
    #[default]
    Gk15,
    /// 10-point Gauss, 21-point Kronrod.
    Gk21,
    /// 15-point Gauss, 31-point Kronrod.
    Gk31,
}

/// One Kronrod rule evaluation on `[a, b]`.
#[derive(Debug, Clone, Copy)]
pub struct KronrodEstimate {
    /// Kronrod approximation of the integral.
    pub result: f64,
    /// Error estimate from the Gauss/Kronrod difference.
    pub abs_error: f64,
    /// Approximation of the integral of `|f|`.
    pub resabs: f64,
    /// Approximation of the integral of `|f - mean(f)|`.
    pub resasc: f64,
}

// Non-negative Kronrod abscissae on [-1, 1], descending; odd indices are
// the Gauss nodes and the last entry is the centre.

const XGK15: [f64; 8] = [
    0.991455371120812639206854697526329,
    0.949107912342758524526189684047851,
    0.864864423359769072789712788640926,
    0.741531185599394439863864773280788,
    0.586087235467691130294144845693013,
    0.405845151377397166906606412076961,
    0.207784955007898467600689403773245,
    0.000000000000000000000000000000000,
];

const WG7: [f64; 4] = [
    0.129484966168869693270611432679082,
    0.279705391489276667901467771423780,
    0.381830050505118944950369775488975,
    0.417959183673469387755102040816327,
];

const WGK15: [f64; 8] = [
    0.022935322010529224963732008058970,
    0.063092092629978553290700663189204,
    0.104790010322250183839876322541518,
    0.140653259715525918745189590510238,
    0.169004726639267902826583426598550,
    0.190350578064785409913256402421014,
    0.204432940075298892414161999234649,
    0.209482141084727828012999174891714,
];

const XGK21: [f64; 11] = [
    0.995657163025808080735527280689003,
    0.973906528517171720077964012084452,
    0.930157491355708226001207180059508,
    0.865063366688984510732096688423493,
    0.780817726586416897063717578345042,
    0.679409568299024406234327365114874,
    0.562757134668604683339000099272694,
    0.433395394129247190799265943165784,
    0.294392862701460198131126603103866,
    0.148874338981631210884826001129720,
    0.000000000000000000000000000000000,
];

const WG10: [f64; 5] = [
    0.066671344308688137593568809893332,
    0.149451349150580593145776339657697,
    0.219086362515982043995534934228163,
    0.269266719309996355091226921569469,
    0.295524224714752870173892994651338,
];

const WGK21: [f64; 11] = [
    0.011694638867371874278064396062192,
    0.032558162307964727478818972459390,
    0.054755896574351996031381300244580,
    0.075039674810919952767043140916190,
    0.093125454583697605535065465083366,
    0.109387158802297641899210590325805,
    0.123491976262065851077958109831074,
    0.134709217311473325928054001771707,
    0.142775938577060080797094273138717,
    0.147739104901338491374841515972068,
    0.149445554002916905664936468389821,
];

const XGK31: [f64; 16] = [
    0.998002298693397060285172840152271,
    0.987992518020485428489565718586613,
    0.967739075679139134257347978784337,
    0.937273392400705904307758947710209,
    0.897264532344081900882509656454496,
    0.848206583410427216200648320774217,
    0.790418501442465932967649294817947,
    0.724417731360170047416186054613938,
    0.650996741297416970533735895313275,
    0.570972172608538847537226737253911,
    0.485081863640239680693655740232351,
    0.394151347077563369897207370981045,
    0.299180007153168812166780024266389,
    0.201194093997434522300628303394596,
    0.101142066918717499027074231752278,
    0.000000000000000000000000000000000,
];

const WG15: [f64; 8] = [
    0.030753241996117268354628393577204,
    0.070366047488108124709267416450667,
    0.107159220467171935011869546685869,
    0.139570677926154314447804794511028,
    0.166269205816993933553200860481209,
    0.186161000015562211026800561866423,
    0.198431485327111576456118326443839,
    0.202578241925561272880620199967519,
];

const WGK31: [f64; 16] = [
    0.005377479872923348987792051430128,
    0.015007947329316122538374763075807,
    0.025460847326715320186874001019653,
    0.035346360791375846222037948478360,
    0.044589751324764876608227299373280,
    0.053481524690928087265343147239430,
    0.062009567800670640285139230960803,
    0.069854121318728258709520077099147,
    0.076849680757720378894432777482659,
    0.083080502823133021038289247286104,
    0.088564443056211770647275443693774,
    0.093126598170825321225486872747346,
    0.096642726983623678505179907627589,
    0.099173598721791959332393173484603,
    0.100769845523875595044946662617570,
    0.101330007014791549017374792767493,
];

impl KronrodRule {
    /// Number of integrand evaluations per application.
    pub fn points(self) -> usize {
        match self {
            Self::Gk15 => 15,
            Self::Gk21 => 21,
            Self::Gk31 => 31,
        }
    }

    fn tables(self) -> (&'static [f64], &'static [f64], &'static [f64]) {
        match self {
            Self::Gk15 => (&XGK15, &WG7, &WGK15),
            Self::Gk21 => (&XGK21, &WG10, &WGK21),
            Self::Gk31 => (&XGK31, &WG15, &WGK31),
        }
    }
}

/// Scale the raw Gauss/Kronrod difference into a realistic error estimate.
fn rescale_error(err: f64, resabs: f64, resasc: f64) -> f64 {
    let mut err = err.abs();
    if resasc != 0.0 && err != 0.0 {
        let scale = (200.0 * err / resasc).powf(1.5);
        err = if scale < 1.0 { resasc * scale } else { resasc };
    }
    if resabs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        let min_err = 50.0 * f64::EPSILON * resabs;
        if min_err > err {
            err = min_err;
        }
    }
    err
}

/// Apply a Gauss-Kronrod rule to `f` on `[a, b]`.
///
/// ```
/// use geonum::quad::{qk, KronrodRule};
///
/// let est = qk(KronrodRule::Gk21, 0.0, 1.0, &|x: f64| x.powi(5));
/// assert!((est.result - 1.0 / 6.0).abs() < 1e-15);
/// ```
pub fn qk<F: Fn(f64) -> f64 + ?Sized>(rule: KronrodRule, a: f64, b: f64, f: &F) -> KronrodEstimate {
    let (xgk, wg, wgk) = rule.tables();
    let n = xgk.len();

    let center = 0.5 * (a + b);
    let half_length = 0.5 * (b - a);
    let abs_half_length = half_length.abs();
    let f_center = f(center);

    let mut result_gauss = 0.0;
    let mut result_kronrod = f_center * wgk[n - 1];
    let mut result_abs = result_kronrod.abs();
    if n % 2 == 0 {
        result_gauss = f_center * wg[n / 2 - 1];
    }

    let mut fv1 = [0.0; 16];
    let mut fv2 = [0.0; 16];

    for j in 0..(n - 1) / 2 {
        let jtw = 2 * j + 1;
        let abscissa = half_length * xgk[jtw];
        let fval1 = f(center - abscissa);
        let fval2 = f(center + abscissa);
        let fsum = fval1 + fval2;
        fv1[jtw] = fval1;
        fv2[jtw] = fval2;
        result_gauss += wg[j] * fsum;
        result_kronrod += wgk[jtw] * fsum;
        result_abs += wgk[jtw] * (fval1.abs() + fval2.abs());
    }

    for j in 0..n / 2 {
        let jtwm1 = 2 * j;
        let abscissa = half_length * xgk[jtwm1];
        let fval1 = f(center - abscissa);
        let fval2 = f(center + abscissa);
        fv1[jtwm1] = fval1;
        fv2[jtwm1] = fval2;
        result_kronrod += wgk[jtwm1] * (fval1 + fval2);
        result_abs += wgk[jtwm1] * (fval1.abs() + fval2.abs());
    }

    let mean = result_kronrod * 0.5;
    let mut result_asc = wgk[n - 1] * (f_center - mean).abs();
    for j in 0..n - 1 {
        result_asc += wgk[j] * ((fv1[j] - mean).abs() + (fv2[j] - mean).abs());
    }

    let err = (result_kronrod - result_gauss) * half_length;
    let resabs = result_abs * abs_half_length;
    let resasc = result_asc * abs_half_length;

    KronrodEstimate {
        result: result_kronrod * half_length,
        abs_error: rescale_error(err, resabs, resasc),
        resabs,
        resasc,
    }
}
