use log::warn;
use std::env;

/// Environment variable consulted by [`ValidationConfig::from_env`]
pub const TOLERANCE_ENV_VAR: &str = "NAIVEBAYES_TOLERANCE";

/// Controls how strictly the validator compares probability sums against 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationConfig {
    /// Maximum allowed absolute difference between a sum and 1.0.
    /// Zero means exact floating-point equality.
    pub tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::exact()
    }
}

impl ValidationConfig {
    /// Require every distribution to sum to exactly 1.0
    pub fn exact() -> Self {
        ValidationConfig { tolerance: 0.0 }
    }

    /// Accept sums within `tolerance` of 1.0. Negative or non-finite
    /// values fall back to exact comparison.
    pub fn with_tolerance(tolerance: f64) -> Self {
        if tolerance.is_finite() && tolerance >= 0.0 {
            ValidationConfig { tolerance }
        } else {
            warn!("Ignoring invalid tolerance {}, using exact comparison", tolerance);
            Self::exact()
        }
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        match env::var(TOLERANCE_ENV_VAR) {
            Ok(value) => Self::parse_tolerance(&value),
            Err(_) => Self::default(),
        }
    }

    /// Parses a tolerance as given in the environment. Unparsable text falls
    /// back to exact comparison.
    pub fn parse_tolerance(value: &str) -> Self {
        match value.trim().parse::<f64>() {
            Ok(tolerance) => Self::with_tolerance(tolerance),
            Err(_) => {
                warn!("Unparsable {} '{}', using exact comparison", TOLERANCE_ENV_VAR, value);
                Self::default()
            }
        }
    }

    pub fn is_exact(&self) -> bool {
        self.tolerance == 0.0
    }

    /// Whether `sum` counts as a unit probability mass. NaN never does.
    pub fn accepts(&self, sum: f64) -> bool {
        if self.is_exact() {
            sum == 1.0
        } else {
            (sum - 1.0).abs() <= self.tolerance
        }
    }
}
