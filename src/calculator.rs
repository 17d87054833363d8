//! Solar event calculators.
//!
//! Every algorithm answers the same question: at what UTC hour of the given
//! civil date does the sun's center cross the requested zenith angle? The
//! answer is a fractional hour in [0, 24), or `None` when the sun never
//! reaches that angle on that date at that latitude (polar day or night).

use chrono::NaiveDate;
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::geo::GeoLocation;
use crate::legacy::LegacyCalculator;
use crate::noaa::NoaaCalculator;
use crate::sun_times::SunTimesCalculator;
use crate::zenith;

/// Average atmospheric refraction at the horizon, in degrees (34 arcminutes).
pub const REFRACTION: f64 = 34.0 / 60.0;

/// Apparent solar radius, in degrees (16 arcminutes).
pub const SOLAR_RADIUS: f64 = 16.0 / 60.0;

/// Earth radius in kilometers used by the elevation dip.
pub const EARTH_RADIUS: f64 = 6356.9;

/// Strategy interface implemented by every sunrise/sunset algorithm.
///
/// `zenith` is in degrees from the vertical (90 is the geometric horizon).
/// When `adjust_for_elevation` is true the location's elevation lowers the
/// visible horizon; see [`adjust_zenith`].
pub trait AstronomicalCalculator {
    /// Human readable algorithm name.
    fn name(&self) -> &'static str;

    /// UTC hour of the morning crossing of `zenith`, `None` if it never happens.
    fn utc_sunrise(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64>;

    /// UTC hour of the evening crossing of `zenith`, `None` if it never happens.
    fn utc_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64>;
}

/// Selects which algorithm an [`AstronomicalCalendar`](crate::AstronomicalCalendar) uses.
///
/// The algorithms agree to within a minute at mid latitudes and may be
/// swapped without affecting anything else.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Calculator {
    /// NOAA spreadsheet algorithm, refined with a second pass. The most accurate.
    #[default]
    Noaa,
    /// Single pass US Naval Almanac "sunrise/sunset" algorithm.
    SunTimes,
    /// Superseded single pass port of the NOAA equations. Kept for comparison only.
    Legacy,
}

impl AstronomicalCalculator for Calculator {
    fn name(&self) -> &'static str {
        match self {
            Calculator::Noaa => NoaaCalculator.name(),
            Calculator::SunTimes => SunTimesCalculator.name(),
            Calculator::Legacy => LegacyCalculator.name(),
        }
    }

    fn utc_sunrise(&self, date: NaiveDate, location: &GeoLocation, zenith: f64, adjust_for_elevation: bool) -> Option<f64> {
        match self {
            Calculator::Noaa => NoaaCalculator.utc_sunrise(date, location, zenith, adjust_for_elevation),
            Calculator::SunTimes => SunTimesCalculator.utc_sunrise(date, location, zenith, adjust_for_elevation),
            Calculator::Legacy => LegacyCalculator.utc_sunrise(date, location, zenith, adjust_for_elevation),
        }
    }

    fn utc_sunset(&self, date: NaiveDate, location: &GeoLocation, zenith: f64, adjust_for_elevation: bool) -> Option<f64> {
        match self {
            Calculator::Noaa => NoaaCalculator.utc_sunset(date, location, zenith, adjust_for_elevation),
            Calculator::SunTimes => SunTimesCalculator.utc_sunset(date, location, zenith, adjust_for_elevation),
            Calculator::Legacy => LegacyCalculator.utc_sunset(date, location, zenith, adjust_for_elevation),
        }
    }
}

/// Dip of the visible horizon, in degrees, for an observer `elevation` meters up.
///
/// `acos(R / (R + h))` with the earth radius [`EARTH_RADIUS`].
pub fn elevation_adjustment(elevation: f64) -> f64 {
    (EARTH_RADIUS / (EARTH_RADIUS + elevation / 1000.0)).acos().to_degrees()
}

/// Zenith actually used for a sunrise/sunset computation.
///
/// Only the exact geometric zenith (90 degrees) is corrected: by the solar
/// radius, by refraction and by the elevation dip. Twilight angles are taken
/// as given.
pub fn adjust_zenith(zenith: f64, elevation: f64) -> f64 {
    if zenith == zenith::GEOMETRIC {
        zenith + SOLAR_RADIUS + REFRACTION + elevation_adjustment(elevation)
    } else {
        zenith
    }
}

/// Elevation to feed [`adjust_zenith`].
pub(crate) fn effective_elevation(location: &GeoLocation, adjust_for_elevation: bool) -> f64 {
    if adjust_for_elevation {
        location.elevation()
    } else {
        0.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn lakewood() -> GeoLocation {
        GeoLocation::new("Lakewood, NJ", 40.09596, -74.22213, 0.0, chrono_tz::America::New_York).unwrap()
    }

    #[test]
    fn elevation_adjustment_is_zero_at_sea_level() {
        assert_eq!(elevation_adjustment(0.0), 0.0);
        // ~1 degree at 1 km
        let dip = elevation_adjustment(1000.0);
        assert!((dip - 1.0162).abs() < 1e-3, "dip {dip}");
    }

    #[test]
    fn only_geometric_zenith_is_adjusted() {
        assert!((adjust_zenith(90.0, 0.0) - (90.0 + 50.0 / 60.0)).abs() < 1e-12);
        assert_eq!(adjust_zenith(96.0, 500.0), 96.0);
        assert_eq!(adjust_zenith(90.000_001, 0.0), 90.000_001);
    }

    #[test]
    fn enum_dispatches_to_each_algorithm() {
        let date = NaiveDate::from_ymd_opt(2010, 4, 2).unwrap();
        let loc = lakewood();
        for calc in [Calculator::Noaa, Calculator::SunTimes, Calculator::Legacy] {
            let rise = calc.utc_sunrise(date, &loc, 90.0, true).unwrap();
            let set = calc.utc_sunset(date, &loc, 90.0, true).unwrap();
            // 10:39 UTC and 23:22 UTC, give or take a minute
            assert!((rise - 10.66).abs() < 0.02, "{} rise {rise}", calc.name());
            assert!((set - 23.37).abs() < 0.02, "{} set {set}", calc.name());
        }
        assert_eq!(Calculator::default(), Calculator::Noaa);
        assert_ne!(Calculator::Noaa.name(), Calculator::SunTimes.name());
    }
}
