//! Tunable knobs of a [`ZmanimCalendar`](crate::ZmanimCalendar).

use crate::calculator::Calculator;
use crate::types::ZmanimError;

/// Configuration of zmanim and holiday queries.
///
/// Build it with the `with_*` methods and check it with [`ZmanimConfig::validate`].
///
/// # Example
///
/// ```
/// use zmanim::{Calculator, ZmanimConfig};
///
/// let config = ZmanimConfig::default()
///     .with_calculator(Calculator::SunTimes)
///     .with_candle_lighting_offset(40.0)
///     .with_in_israel(true);
///
/// assert!(config.validate().is_ok());
/// assert!(config.clone().with_candle_lighting_offset(-5.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZmanimConfig {
    /// Solar algorithm.
    calculator: Calculator,
    /// Minutes before sea-level sunset for candle lighting.
    candle_lighting_offset: f64,
    /// Minutes after sunset for the Ateret Torah tzais.
    ateret_torah_sunset_offset: f64,
    /// Israel holiday schedule (one day of yom tov, no Isru Chag shift).
    in_israel: bool,
    /// Include Yom HaShoah, Yom Hazikaron, Yom Haatzmaut and Yom Yerushalayim.
    use_modern_holidays: bool,
}

impl ZmanimConfig {
    /// Default candle lighting offset in minutes.
    pub const DEFAULT_CANDLE_LIGHTING_OFFSET: f64 = 18.0;
    /// Default Ateret Torah offset in minutes.
    pub const DEFAULT_ATERET_TORAH_SUNSET_OFFSET: f64 = 40.0;

    /// NOAA calculator, 18 minute candle lighting, 40 minute Ateret Torah, diaspora rules.
    pub fn new() -> Self {
        Self {
            calculator: Calculator::default(),
            candle_lighting_offset: Self::DEFAULT_CANDLE_LIGHTING_OFFSET,
            ateret_torah_sunset_offset: Self::DEFAULT_ATERET_TORAH_SUNSET_OFFSET,
            in_israel: false,
            use_modern_holidays: false,
        }
    }

    /// Sets the solar algorithm used by every zman.
    pub fn with_calculator(mut self, calculator: Calculator) -> Self {
        self.calculator = calculator;
        self
    }

    /// Sets how many minutes before sea-level sunset candles are lit.
    ///
    /// # Arguments
    ///
    /// * `minutes` - 18 in most communities, 40 in Jerusalem. Checked by [`validate`](Self::validate)
    pub fn with_candle_lighting_offset(mut self, minutes: f64) -> Self {
        self.candle_lighting_offset = minutes;
        self
    }

    /// Sets the minutes after sea-level sunset of the Ateret Torah tzais.
    pub fn with_ateret_torah_sunset_offset(mut self, minutes: f64) -> Self {
        self.ateret_torah_sunset_offset = minutes;
        self
    }

    /// Selects the Israeli holiday schedule.
    pub fn with_in_israel(mut self, in_israel: bool) -> Self {
        self.in_israel = in_israel;
        self
    }

    /// Includes the modern Israeli commemorative days in [`JewishCalendar::holiday`](crate::JewishCalendar::holiday).
    pub fn with_modern_holidays(mut self, use_modern_holidays: bool) -> Self {
        self.use_modern_holidays = use_modern_holidays;
        self
    }

    pub fn calculator(&self) -> Calculator {
        self.calculator
    }

    /// Minutes before sea-level sunset.
    pub fn candle_lighting_offset(&self) -> f64 {
        self.candle_lighting_offset
    }

    /// Minutes after sea-level sunset.
    pub fn ateret_torah_sunset_offset(&self) -> f64 {
        self.ateret_torah_sunset_offset
    }

    pub fn in_israel(&self) -> bool {
        self.in_israel
    }

    pub fn use_modern_holidays(&self) -> bool {
        self.use_modern_holidays
    }

    /// Checks that both offsets are finite, non-negative and under a day.
    ///
    /// # Errors
    ///
    /// [`ZmanimError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ZmanimError> {
        check_minutes("candle_lighting_offset", self.candle_lighting_offset)?;
        check_minutes("ateret_torah_sunset_offset", self.ateret_torah_sunset_offset)?;
        Ok(())
    }
}

impl Default for ZmanimConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_minutes(field: &'static str, value: f64) -> Result<(), ZmanimError> {
    if value.is_finite() && (0.0..1440.0).contains(&value) {
        Ok(())
    } else {
        Err(ZmanimError::InvalidConfig { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ZmanimConfig::default();
        assert_eq!(cfg.calculator(), Calculator::Noaa);
        assert_eq!(cfg.candle_lighting_offset(), 18.0);
        assert_eq!(cfg.ateret_torah_sunset_offset(), 40.0);
        assert!(!cfg.in_israel());
        assert!(!cfg.use_modern_holidays());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let cfg = ZmanimConfig::new()
            .with_calculator(Calculator::Legacy)
            .with_ateret_torah_sunset_offset(30.0)
            .with_modern_holidays(true);
        assert_eq!(cfg.calculator(), Calculator::Legacy);
        assert_eq!(cfg.ateret_torah_sunset_offset(), 30.0);
        assert!(cfg.use_modern_holidays());
    }

    #[test]
    fn validate_names_bad_field() {
        let err = ZmanimConfig::new().with_ateret_torah_sunset_offset(f64::NAN).validate();
        assert!(matches!(
            err,
            Err(ZmanimError::InvalidConfig { field: "ateret_torah_sunset_offset", .. })
        ));
        assert_eq!(
            ZmanimConfig::new().with_candle_lighting_offset(-1.0).validate(),
            Err(ZmanimError::InvalidConfig { field: "candle_lighting_offset", value: -1.0 })
        );
    }
}
