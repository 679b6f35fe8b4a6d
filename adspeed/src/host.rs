// The command line host: supplies the scoring curve the audits call into

use adspeed_core::AuditHost;

/// Scores values on the log-normal curve used by page-performance reports:
/// the median maps to 0.5 and the point of diminishing returns to roughly 0.92.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliHost;

impl CliHost {
    pub fn new() -> Self {
        Self
    }
}

impl AuditHost for CliHost {
    fn compute_log_normal_score(&self, value: f64, podr: f64, median: f64) -> f64 {
        if value <= 0.0 {
            return 1.0;
        }

        let location = median.ln();
        let log_ratio = (podr / median).ln();
        let shape = (1.0 - 3.0 * log_ratio - ((log_ratio - 3.0).powi(2) - 8.0).sqrt()).sqrt() / 2.0;

        let standardized_x = (value.ln() - location) / (std::f64::consts::SQRT_2 * shape);
        let complementary_percentile = (1.0 - erf(standardized_x)) / 2.0;

        complementary_percentile.clamp(0.0, 1.0)
    }
}

// Abramowitz and Stegun 7.1.26, max error 1.5e-7
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = x.signum();
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let y = t * (A1 + t * (A2 + t * (A3 + t * (A4 + t * A5))));
    sign * (1.0 - y * (-x * x).exp())
}
