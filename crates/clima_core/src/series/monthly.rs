//! Monthly temperature series.

use super::error::SeriesError;
use crate::math::interpolators::{Interpolator, LagrangeInterpolator};
use chrono::Month;

/// One year of monthly temperature readings for a single city and kind.
///
/// Holds exactly twelve values, January through December, in degrees
/// Celsius. The series pairs with the fixed month axis 1.0..=12.0 to form
/// the sample set handed to the interpolation engine; the engine itself
/// accepts any sample count, the twelve-month shape lives here.
///
/// # Example
///
/// ```
/// use clima_core::series::MonthlySeries;
///
/// let series = MonthlySeries::new([
///     27.0, 27.5, 28.0, 28.5, 28.5, 28.0,
///     28.0, 28.5, 28.5, 28.0, 27.5, 27.0,
/// ]);
///
/// // Whole months reproduce the stored reading
/// let march = series.estimate_at(3.0).unwrap();
/// assert_eq!(march, 28.0);
///
/// // Fractional months interpolate
/// let estimate = series.estimate_at(3.5).unwrap();
/// assert!(estimate.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MonthlySeries {
    /// January..December readings
    values: [f64; 12],
}

impl MonthlySeries {
    /// Number of months in a series.
    pub const MONTH_COUNT: usize = 12;

    /// The engine abscissae for a monthly series: month numbers 1 through 12.
    pub const MONTH_AXIS: [f64; 12] = [
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
    ];

    /// Construct a series from twelve January..December values.
    pub fn new(values: [f64; 12]) -> Self {
        Self { values }
    }

    /// Construct a series from a slice of monthly values.
    ///
    /// # Arguments
    ///
    /// * `values` - Exactly twelve values, January through December
    ///
    /// # Returns
    ///
    /// * `Ok(MonthlySeries)` - Successfully constructed series
    /// * `Err(SeriesError::WrongLength)` - Other than twelve values
    ///
    /// # Example
    ///
    /// ```
    /// use clima_core::series::MonthlySeries;
    ///
    /// let result = MonthlySeries::from_slice(&[20.0, 21.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn from_slice(values: &[f64]) -> Result<Self, SeriesError> {
        let values: [f64; 12] = values
            .try_into()
            .map_err(|_| SeriesError::WrongLength { got: values.len() })?;
        Ok(Self { values })
    }

    /// Returns the twelve monthly readings, January first.
    #[inline]
    pub fn values(&self) -> &[f64; 12] {
        &self.values
    }

    /// Returns the reading for a calendar month.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Month;
    /// use clima_core::series::MonthlySeries;
    ///
    /// let series = MonthlySeries::new([
    ///     10.0, 12.0, 11.0, 15.0, 18.0, 22.0,
    ///     25.0, 26.0, 24.0, 20.0, 15.0, 11.0,
    /// ]);
    /// assert_eq!(series.value(Month::January), 10.0);
    /// assert_eq!(series.value(Month::December), 11.0);
    /// ```
    #[inline]
    pub fn value(&self, month: Month) -> f64 {
        self.values[month.number_from_month() as usize - 1]
    }

    /// Returns the smallest monthly reading.
    pub fn min_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Returns the largest monthly reading.
    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Estimate the temperature at a fractional month.
    ///
    /// Builds the degree-11 Lagrange polynomial through the twelve samples
    /// `(month, reading)` and evaluates it at `month`. Any finite month is
    /// accepted; values outside [1, 12] extrapolate. Range policy for
    /// user-supplied months belongs to the caller.
    ///
    /// # Arguments
    ///
    /// * `month` - The query month, e.g. 6.5 for mid June
    ///
    /// # Returns
    ///
    /// * `Ok(estimate)` - The interpolated temperature
    /// * `Err(SeriesError::Interpolation)` - Never for this fixed axis;
    ///   kept so the engine contract surfaces unchanged
    ///
    /// # Example
    ///
    /// ```
    /// use clima_core::series::MonthlySeries;
    ///
    /// let series = MonthlySeries::new([
    ///     10.0, 12.0, 11.0, 15.0, 18.0, 22.0,
    ///     25.0, 26.0, 24.0, 20.0, 15.0, 11.0,
    /// ]);
    ///
    /// let estimate = series.estimate_at(6.5).unwrap();
    /// assert!((estimate - 23.724220275878906).abs() < 1e-9);
    /// ```
    pub fn estimate_at(&self, month: f64) -> Result<f64, SeriesError> {
        let interp = LagrangeInterpolator::new(&Self::MONTH_AXIS, &self.values)?;
        Ok(interp.interpolate(month)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_series() -> MonthlySeries {
        MonthlySeries::new([
            10.0, 12.0, 11.0, 15.0, 18.0, 22.0, 25.0, 26.0, 24.0, 20.0, 15.0, 11.0,
        ])
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_month_axis_is_one_through_twelve() {
        assert_eq!(MonthlySeries::MONTH_COUNT, 12);
        for (i, &x) in MonthlySeries::MONTH_AXIS.iter().enumerate() {
            assert_eq!(x, (i + 1) as f64);
        }
    }

    #[test]
    fn test_new_and_values() {
        let series = sample_series();
        assert_eq!(series.values()[0], 10.0);
        assert_eq!(series.values()[11], 11.0);
    }

    #[test]
    fn test_from_slice_valid() {
        let values: Vec<f64> = (1..=12).map(|m| m as f64).collect();
        let series = MonthlySeries::from_slice(&values).unwrap();
        assert_eq!(series.values()[5], 6.0);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let result = MonthlySeries::from_slice(&[1.0, 2.0, 3.0]);
        match result.unwrap_err() {
            SeriesError::WrongLength { got } => assert_eq!(got, 3),
            _ => panic!("Expected WrongLength error"),
        }

        let thirteen: Vec<f64> = (0..13).map(|m| m as f64).collect();
        assert!(matches!(
            MonthlySeries::from_slice(&thirteen).unwrap_err(),
            SeriesError::WrongLength { got: 13 }
        ));
    }

    #[test]
    fn test_value_by_calendar_month() {
        let series = sample_series();
        assert_eq!(series.value(Month::January), 10.0);
        assert_eq!(series.value(Month::June), 22.0);
        assert_eq!(series.value(Month::December), 11.0);
    }

    #[test]
    fn test_min_and_max_value() {
        let series = sample_series();
        assert_eq!(series.min_value(), 10.0);
        assert_eq!(series.max_value(), 26.0);
    }

    // ========================================
    // Estimation Tests
    // ========================================

    #[test]
    fn test_estimate_at_whole_month_reproduces_reading() {
        let series = sample_series();
        for (i, &x) in MonthlySeries::MONTH_AXIS.iter().enumerate() {
            assert_eq!(series.estimate_at(x).unwrap(), series.values()[i]);
        }
    }

    #[test]
    fn test_estimate_at_midyear_matches_reference() {
        let series = sample_series();
        let estimate = series.estimate_at(6.5).unwrap();
        assert_relative_eq!(estimate, 23.724220275878906, max_relative = 1e-9);
    }

    #[test]
    fn test_estimate_extrapolates_outside_month_axis() {
        let series = sample_series();
        assert_relative_eq!(series.estimate_at(0.0).unwrap(), -690.0, max_relative = 1e-9);
        assert_relative_eq!(series.estimate_at(13.0).unwrap(), 376.0, max_relative = 1e-9);
    }

    #[test]
    fn test_estimate_accepts_any_finite_month() {
        let series = sample_series();
        assert!(series.estimate_at(-3.25).is_ok());
        assert!(series.estimate_at(20.0).is_ok());
    }

    // ========================================
    // Serde Tests
    // ========================================

    #[test]
    fn test_serialises_as_plain_array() {
        let series = sample_series();
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(
            json,
            "[10.0,12.0,11.0,15.0,18.0,22.0,25.0,26.0,24.0,20.0,15.0,11.0]"
        );

        let parsed: MonthlySeries = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, series);
    }
}
