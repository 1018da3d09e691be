//! Parabolic SAR parameters and their validation.
//!
//! Two real parameters drive the indicator: the acceleration step and the
//! acceleration cap. Both accept [`REAL_DEFAULT`] as a "use the default"
//! sentinel and must otherwise lie in `[0, REAL_MAX]`.

use crate::error::{Error, Result};

/// Default acceleration step.
pub const DEFAULT_ACCELERATION: f64 = 0.02;

/// Default acceleration cap.
pub const DEFAULT_MAXIMUM: f64 = 0.20;

/// Sentinel meaning "substitute the default value".
pub const REAL_DEFAULT: f64 = -4e37;

/// Largest accepted magnitude for a real parameter.
pub const REAL_MAX: f64 = 3e37;

/// Acceleration step and cap for a SAR run.
///
/// # Example
///
/// ```
/// use fast_sar::params::{SarParams, REAL_DEFAULT};
///
/// let params = SarParams::new(REAL_DEFAULT, 0.5).resolve().unwrap();
/// assert_eq!(params.acceleration, 0.02);
/// assert_eq!(params.maximum, 0.5);
///
/// // An incoherent step is clamped to the cap for the whole run.
/// let clamped = SarParams::new(0.5, 0.2);
/// assert_eq!(clamped.effective_acceleration(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SarParams {
    /// Acceleration factor step, also the factor's starting value.
    pub acceleration: f64,
    /// Acceleration factor cap.
    pub maximum: f64,
}

impl Default for SarParams {
    /// Creates parameters with the standard values (0.02, 0.20).
    fn default() -> Self {
        Self {
            acceleration: DEFAULT_ACCELERATION,
            maximum: DEFAULT_MAXIMUM,
        }
    }
}

impl SarParams {
    /// Creates parameters from raw values. Nothing is validated until
    /// [`resolve`](Self::resolve) is called.
    #[must_use]
    pub const fn new(acceleration: f64, maximum: f64) -> Self {
        Self {
            acceleration,
            maximum,
        }
    }

    /// Sets the acceleration step.
    #[must_use]
    pub const fn acceleration(mut self, acceleration: f64) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Sets the acceleration cap.
    #[must_use]
    pub const fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = maximum;
        self
    }

    /// Substitutes defaults for [`REAL_DEFAULT`] and checks both bounds.
    ///
    /// # Errors
    ///
    /// Returns `Error::BadParam` if either value is NaN or outside
    /// `[0, REAL_MAX]`.
    pub fn resolve(self) -> Result<Self> {
        Ok(Self {
            acceleration: resolve_real("acceleration", self.acceleration, DEFAULT_ACCELERATION)?,
            maximum: resolve_real("maximum", self.maximum, DEFAULT_MAXIMUM)?,
        })
    }

    /// Returns the step actually used by the recurrence.
    ///
    /// A step larger than the cap is replaced by the cap.
    #[inline]
    #[must_use]
    pub fn effective_acceleration(&self) -> f64 {
        if self.acceleration > self.maximum {
            self.maximum
        } else {
            self.acceleration
        }
    }
}

#[allow(clippy::float_cmp)]
fn resolve_real(name: &'static str, value: f64, default: f64) -> Result<f64> {
    if value == REAL_DEFAULT {
        return Ok(default);
    }
    if value.is_nan() || !(0.0..=REAL_MAX).contains(&value) {
        return Err(Error::BadParam {
            name,
            reason: "must be within [0, 3e37]",
        });
    }
    Ok(value)
}
