//! Two-parameter logistic regression fitted by Newton-Raphson.

use std::fmt;

use thiserror::Error;

use crate::derived::AnalyzedListing;

const MAX_ITERATIONS: usize = 35;
const TOLERANCE: f64 = 1e-8;
/// Two-sided 95% normal quantile.
const Z_95: f64 = 1.959_963_984_540_054;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegressionError {
    #[error("no observations to fit")]
    Empty,
    #[error("outcome has no variation (all {0})")]
    NoVariation(u8),
    #[error("predictor has no variation")]
    ConstantPredictor,
    #[error("perfect separation: the predictor fully determines the outcome")]
    PerfectSeparation,
    #[error("Hessian is singular after {iterations} iterations")]
    SingularHessian { iterations: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coefficient {
    pub name: &'static str,
    pub estimate: f64,
    pub std_err: f64,
    pub z: f64,
    pub p_value: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogitFit {
    pub outcome: &'static str,
    /// Intercept first, then the slope.
    pub coefficients: [Coefficient; 2],
    pub observations: usize,
    pub log_likelihood: f64,
    pub null_log_likelihood: f64,
    pub pseudo_r_squared: f64,
    pub llr_p_value: f64,
    pub iterations: usize,
    pub converged: bool,
}

impl LogitFit {
    #[must_use]
    pub fn intercept(&self) -> &Coefficient {
        &self.coefficients[0]
    }

    #[must_use]
    pub fn slope(&self) -> &Coefficient {
        &self.coefficients[1]
    }
}

/// Fits `P(senior) = sigmoid(b0 + b1 * title_length)` over every listing.
///
/// # Errors
///
/// See [`fit_logit`].
pub fn senior_title_model(listings: &[AnalyzedListing]) -> Result<LogitFit, RegressionError> {
    #[allow(clippy::cast_precision_loss)]
    let x: Vec<f64> = listings.iter().map(|l| l.title_length as f64).collect();
    let y: Vec<bool> = listings.iter().map(AnalyzedListing::is_senior).collect();
    let mut fit = fit_logit(&x, &y, "title_length")?;
    fit.outcome = "is_senior";
    Ok(fit)
}

/// Fits a logistic regression of `y` on `x` with an intercept.
///
/// # Errors
///
/// - [`RegressionError::Empty`] for no observations.
/// - [`RegressionError::NoVariation`] when every `y` is the same.
/// - [`RegressionError::ConstantPredictor`] when every `x` is the same.
/// - [`RegressionError::PerfectSeparation`] when the fit predicts every
///   outcome exactly.
/// - [`RegressionError::SingularHessian`] when the information matrix cannot
///   be inverted.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length.
pub fn fit_logit(
    x: &[f64],
    y: &[bool],
    predictor: &'static str,
) -> Result<LogitFit, RegressionError> {
    assert_eq!(x.len(), y.len(), "x and y must be the same length");
    let n = x.len();
    if n == 0 {
        return Err(RegressionError::Empty);
    }
    let positives = y.iter().filter(|&&v| v).count();
    if positives == 0 {
        return Err(RegressionError::NoVariation(0));
    }
    if positives == n {
        return Err(RegressionError::NoVariation(1));
    }
    if x.iter().all(|&v| (v - x[0]).abs() < f64::EPSILON) {
        return Err(RegressionError::ConstantPredictor);
    }

    let mut beta = [0.0_f64; 2];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < MAX_ITERATIONS {
        iterations += 1;
        let step = newton_step(x, y, beta);
        if perfectly_predicted(x, y, beta) {
            return Err(RegressionError::PerfectSeparation);
        }
        let Some(delta) = step else {
            return Err(RegressionError::SingularHessian { iterations });
        };
        beta[0] += delta[0];
        beta[1] += delta[1];
        if delta[0].abs().max(delta[1].abs()) < TOLERANCE {
            converged = true;
            break;
        }
    }

    let cov = information(x, beta)
        .and_then(invert)
        .ok_or(RegressionError::SingularHessian { iterations })?;

    let log_likelihood = log_likelihood(x, y, beta);
    #[allow(clippy::cast_precision_loss)]
    let (n_f, pos_f) = (n as f64, positives as f64);
    let p0 = pos_f / n_f;
    let null_log_likelihood = pos_f * p0.ln() + (n_f - pos_f) * (1.0 - p0).ln();
    let llr = 2.0 * (log_likelihood - null_log_likelihood);

    let coefficient = |name: &'static str, i: usize| {
        let estimate = beta[i];
        let std_err = cov[i][i].sqrt();
        let z = estimate / std_err;
        Coefficient {
            name,
            estimate,
            std_err,
            z,
            p_value: erfc(z.abs() / std::f64::consts::SQRT_2),
            ci_low: estimate - Z_95 * std_err,
            ci_high: estimate + Z_95 * std_err,
        }
    };

    tracing::debug!(iterations, converged, "logit fit finished");

    Ok(LogitFit {
        outcome: "y",
        coefficients: [coefficient("const", 0), coefficient(predictor, 1)],
        observations: n,
        log_likelihood,
        null_log_likelihood,
        pseudo_r_squared: 1.0 - log_likelihood / null_log_likelihood,
        // Chi-squared survival with one degree of freedom.
        llr_p_value: erfc((llr.max(0.0) / 2.0).sqrt()),
        iterations,
        converged,
    })
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// `ln(1 + e^z)` without overflow.
fn softplus(z: f64) -> f64 {
    z.max(0.0) + (-z.abs()).exp().ln_1p()
}

fn log_likelihood(x: &[f64], y: &[bool], beta: [f64; 2]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let z = beta[0] + beta[1] * xi;
            let hit = if yi { z } else { 0.0 };
            hit - softplus(z)
        })
        .sum()
}

/// Fisher information `X' W X`, or `None` if it is not finite.
fn information(x: &[f64], beta: [f64; 2]) -> Option<[[f64; 2]; 2]> {
    let mut h = [[0.0_f64; 2]; 2];
    for &xi in x {
        let p = sigmoid(beta[0] + beta[1] * xi);
        let w = p * (1.0 - p);
        h[0][0] += w;
        h[0][1] += w * xi;
        h[1][1] += w * xi * xi;
    }
    h[1][0] = h[0][1];
    h.iter().flatten().all(|v| v.is_finite()).then_some(h)
}

fn invert(m: [[f64; 2]; 2]) -> Option<[[f64; 2]; 2]> {
    let det = m[0][0] * m[1][1] - m[0][1] * m[1][0];
    let scale = (m[0][0] * m[1][1]).abs();
    if !det.is_finite() || det.abs() <= f64::EPSILON * scale || det == 0.0 {
        return None;
    }
    Some([
        [m[1][1] / det, -m[0][1] / det],
        [-m[1][0] / det, m[0][0] / det],
    ])
}

fn newton_step(x: &[f64], y: &[bool], beta: [f64; 2]) -> Option<[f64; 2]> {
    let mut g = [0.0_f64; 2];
    for (&xi, &yi) in x.iter().zip(y) {
        let p = sigmoid(beta[0] + beta[1] * xi);
        let r = f64::from(u8::from(yi)) - p;
        g[0] += r;
        g[1] += r * xi;
    }
    let inv = invert(information(x, beta)?)?;
    let delta = [
        inv[0][0] * g[0] + inv[0][1] * g[1],
        inv[1][0] * g[0] + inv[1][1] * g[1],
    ];
    delta.iter().all(|d| d.is_finite()).then_some(delta)
}

fn perfectly_predicted(x: &[f64], y: &[bool], beta: [f64; 2]) -> bool {
    x.iter().zip(y).all(|(&xi, &yi)| {
        let p = sigmoid(beta[0] + beta[1] * xi);
        let target = f64::from(u8::from(yi));
        (p - target).abs() < 1e-10
    })
}

/// Complementary error function, fractional error below 1.2e-7.
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -z * z - 1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87 + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let r = t * poly.exp();
    if x >= 0.0 {
        r
    } else {
        2.0 - r
    }
}

impl fmt::Display for LogitFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "                 Logit Regression Results")?;
        writeln!(f, "{}", "=".repeat(62))?;
        writeln!(
            f,
            "Dep. Variable:   {:<14} No. Observations: {:>8}",
            self.outcome, self.observations
        )?;
        writeln!(f, "Method:          {:<14} Converged:        {:>8}", "MLE", self.converged)?;
        writeln!(
            f,
            "Iterations:      {:<14} Pseudo R-squ.:    {:>8.4}",
            self.iterations, self.pseudo_r_squared
        )?;
        writeln!(
            f,
            "Log-Likelihood:  {:<14.3} LL-Null:          {:>8.3}",
            self.log_likelihood, self.null_log_likelihood
        )?;
        writeln!(f, "{:<31} LLR p-value:      {:>8.4}", "", self.llr_p_value)?;
        writeln!(f, "{}", "=".repeat(62))?;
        writeln!(
            f,
            "{:<14}{:>9}{:>9}{:>8}{:>8}{:>8}{:>8}",
            "", "coef", "std err", "z", "P>|z|", "[0.025", "0.975]"
        )?;
        writeln!(f, "{}", "-".repeat(62))?;
        for c in &self.coefficients {
            writeln!(
                f,
                "{:<14}{:>9.4}{:>9.4}{:>8.3}{:>8.3}{:>8.3}{:>8.3}",
                c.name, c.estimate, c.std_err, c.z, c.p_value, c.ci_low, c.ci_high
            )?;
        }
        write!(f, "{}", "=".repeat(62))
    }
}
