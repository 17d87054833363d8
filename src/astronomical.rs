//! The date + location orchestrator.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use chrono_tz::Tz;
#[allow(unused_imports)]
use core_maths::CoreFloat;
use tracing::{debug, instrument, warn};

use crate::calculator::{AstronomicalCalculator, Calculator};
use crate::geo::GeoLocation;
use crate::time::{fractional_hours_to_time, MINUTE_MILLIS};
use crate::types::SolarEvent;
use crate::zenith;

/// Deepest solar dip, in degrees below the horizon, the dip searches will try.
pub const MAX_SOLAR_DIP: f64 = 40.0;

/// Search step for [`AstronomicalCalendar::sunrise_solar_dip_from_offset`]
const SUNRISE_DIP_STEP: f64 = 0.0001;

/// Search step for [`AstronomicalCalendar::sunset_solar_dip_from_offset`]
const SUNSET_DIP_STEP: f64 = 0.001;

/// Sunrise, sunset and twilight for one civil date at one location.
///
/// All queries return `None` when the sun does not reach the requested angle
/// on that date, e.g. inside the polar circles. Results are localized to the
/// location's time zone.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use zmanim::{AstronomicalCalendar, Calculator, GeoLocation};
///
/// let lakewood = GeoLocation::new("Lakewood, NJ", 40.09596, -74.22213, 0.0, chrono_tz::America::New_York).unwrap();
/// let date = NaiveDate::from_ymd_opt(2010, 4, 2).unwrap();
/// let calendar = AstronomicalCalendar::new(date, lakewood, Calculator::SunTimes);
///
/// let sunrise = calendar.sunrise().unwrap();
/// assert_eq!(sunrise.format("%H:%M:%S%.3f").to_string(), "06:39:41.832");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AstronomicalCalendar {
    date: NaiveDate,
    location: GeoLocation,
    calculator: Calculator,
}

impl AstronomicalCalendar {
    /// Creates a calendar for one civil date at one place.
    ///
    /// # Arguments
    ///
    /// * `date` - Civil date in the location's time zone
    /// * `location` - Observer position, elevation and time zone
    /// * `calculator` - Sunrise/sunset algorithm, see [`Calculator`]
    pub fn new(date: NaiveDate, location: GeoLocation, calculator: Calculator) -> Self {
        Self {
            date,
            location,
            calculator,
        }
    }

    /// The civil date every query is answered for.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn calculator(&self) -> Calculator {
        self.calculator
    }

    /// Moves the calendar to another date. Nothing is cached, so later queries see it at once.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Replaces the location; results come back in the new location's time zone.
    pub fn set_location(&mut self, location: GeoLocation) {
        self.location = location;
    }

    /// Switches the sunrise/sunset algorithm.
    pub fn set_calculator(&mut self, calculator: Calculator) {
        self.calculator = calculator;
    }

    /// Sunrise, corrected for refraction, solar radius and elevation.
    pub fn sunrise(&self) -> Option<DateTime<Tz>> {
        self.localize(self.utc_sunrise(zenith::GEOMETRIC), SolarEvent::Sunrise)
    }

    /// Sunrise as if the observer stood at sea level.
    ///
    /// The base for every degree and minute offset in the morning, since
    /// elevation does not change when the sky starts to lighten.
    pub fn sea_level_sunrise(&self) -> Option<DateTime<Tz>> {
        self.localize(self.utc_sea_level_sunrise(zenith::GEOMETRIC), SolarEvent::Sunrise)
    }

    /// Time the sun's center crosses `zenith` in the morning.
    pub fn sunrise_offset_by_degrees(&self, zenith: f64) -> Option<DateTime<Tz>> {
        self.localize(self.utc_sunrise(zenith), SolarEvent::Sunrise)
    }

    /// Sunset, corrected for refraction, solar radius and elevation.
    pub fn sunset(&self) -> Option<DateTime<Tz>> {
        let sunset = self.localize(self.utc_sunset(zenith::GEOMETRIC), SolarEvent::Sunset);
        adjust_sunset(sunset, self.sunrise())
    }

    /// Sunset as if the observer stood at sea level.
    pub fn sea_level_sunset(&self) -> Option<DateTime<Tz>> {
        let sunset = self.localize(self.utc_sea_level_sunset(zenith::GEOMETRIC), SolarEvent::Sunset);
        adjust_sunset(sunset, self.sea_level_sunrise())
    }

    /// Time the sun's center crosses `zenith` in the evening.
    pub fn sunset_offset_by_degrees(&self, zenith: f64) -> Option<DateTime<Tz>> {
        let sunset = self.localize(self.utc_sunset(zenith), SolarEvent::Sunset);
        adjust_sunset(sunset, self.sunrise_offset_by_degrees(zenith))
    }

    /// Start of civil twilight, the sun 6 degrees below the horizon in the morning.
    ///
    /// # Returns
    ///
    /// - `Some(time)` in the location's time zone
    /// - `None` if the sun never gets 6 degrees below the horizon (or never rises that high)
    pub fn begin_civil_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(zenith::CIVIL)
    }

    /// End of civil twilight, `None` under the same conditions as [`begin_civil_twilight`](Self::begin_civil_twilight).
    pub fn end_civil_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(zenith::CIVIL)
    }

    /// Start of nautical twilight, 12 degrees below the horizon.
    pub fn begin_nautical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(zenith::NAUTICAL)
    }

    /// End of nautical twilight.
    pub fn end_nautical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(zenith::NAUTICAL)
    }

    /// Start of astronomical twilight, 18 degrees below the horizon.
    ///
    /// `None` on summer nights at high latitudes, when the sky never gets fully dark.
    pub fn begin_astronomical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(zenith::ASTRONOMICAL)
    }

    /// End of astronomical twilight.
    pub fn end_astronomical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(zenith::ASTRONOMICAL)
    }

    /// UTC hour of the morning crossing of `zenith`, elevation included.
    pub fn utc_sunrise(&self, zenith: f64) -> Option<f64> {
        self.calculator.utc_sunrise(self.date, &self.location, zenith, true)
    }

    /// UTC hour of the morning crossing of `zenith` at sea level.
    pub fn utc_sea_level_sunrise(&self, zenith: f64) -> Option<f64> {
        self.calculator.utc_sunrise(self.date, &self.location, zenith, false)
    }

    /// UTC hour of the evening crossing of `zenith`, elevation included.
    pub fn utc_sunset(&self, zenith: f64) -> Option<f64> {
        self.calculator.utc_sunset(self.date, &self.location, zenith, true)
    }

    /// UTC hour of the evening crossing of `zenith` at sea level.
    pub fn utc_sea_level_sunset(&self, zenith: f64) -> Option<f64> {
        self.calculator.utc_sunset(self.date, &self.location, zenith, false)
    }

    /// A twelfth of the sea-level day.
    pub fn temporal_hour(&self) -> Option<TimeDelta> {
        temporal_hour_between(self.sea_level_sunrise(), self.sea_level_sunset())
    }

    /// Solar noon, halfway between sea-level sunrise and sunset.
    pub fn sun_transit(&self) -> Option<DateTime<Tz>> {
        sun_transit_between(self.sea_level_sunrise(), self.sea_level_sunset())
    }

    /// Localizes a UTC fractional hour on this calendar's date.
    ///
    /// The hour is folded into [0, 24) and truncated to the millisecond. When
    /// the local solar day straddles UTC midnight (far east sunrises, far west
    /// sunsets) the UTC date is moved so that the event lands on the
    /// calendar's civil date. Returns `None` for non-finite input.
    pub fn date_from_time(&self, time: f64, event: SolarEvent) -> Option<DateTime<Tz>> {
        let clock = fractional_hours_to_time(time)?;
        let local_time_hours = (self.location.longitude() as i32) / 15;
        let hours = clock.hour() as i32;
        let date = match event {
            SolarEvent::Sunrise if local_time_hours + hours > 18 => self.date.pred_opt()?,
            SolarEvent::Sunset if local_time_hours + hours < 6 => self.date.succ_opt()?,
            _ => self.date,
        };
        let utc = NaiveDateTime::new(date, clock).and_utc();
        Some(utc.with_timezone(&self.location.time_zone()))
    }

    /// Degrees below the horizon the sun is `minutes` before sea-level sunrise.
    ///
    /// Linear search in steps of 0.0001 degrees: slow, do not call it in a
    /// loop. Negative minutes search above the horizon. `None` if sea-level
    /// sunrise is undefined or the dip would exceed [`MAX_SOLAR_DIP`].
    #[instrument(level = "debug", skip(self), fields(date = %self.date))]
    pub fn sunrise_solar_dip_from_offset(&self, minutes: f64) -> Option<f64> {
        let sea_level = self.sea_level_sunrise()?;
        let target = time_offset(Some(sea_level), minutes_delta(-minutes))?;
        let step = if minutes > 0.0 { SUNRISE_DIP_STEP } else { -SUNRISE_DIP_STEP };
        let mut offset_by_degrees = Some(sea_level);
        let mut steps: u32 = 0;
        let mut degrees = 0.0;
        while offset_by_degrees.is_none_or(|t| (minutes < 0.0 && t < target) || (minutes > 0.0 && t > target)) {
            steps += 1;
            degrees = f64::from(steps) * step;
            if degrees.abs() > MAX_SOLAR_DIP {
                warn!(minutes, "sunrise solar dip search exhausted");
                return None;
            }
            offset_by_degrees = self.sunrise_offset_by_degrees(zenith::GEOMETRIC + degrees);
        }
        Some(degrees)
    }

    /// Degrees below the horizon the sun is `minutes` after sea-level sunset.
    ///
    /// Same search as [`sunrise_solar_dip_from_offset`](Self::sunrise_solar_dip_from_offset)
    /// with a 0.001 degree step.
    #[instrument(level = "debug", skip(self), fields(date = %self.date))]
    pub fn sunset_solar_dip_from_offset(&self, minutes: f64) -> Option<f64> {
        let sea_level = self.sea_level_sunset()?;
        let target = time_offset(Some(sea_level), minutes_delta(minutes))?;
        let step = if minutes > 0.0 { SUNSET_DIP_STEP } else { -SUNSET_DIP_STEP };
        let mut offset_by_degrees = Some(sea_level);
        let mut steps: u32 = 0;
        let mut degrees = 0.0;
        while offset_by_degrees.is_none_or(|t| (minutes > 0.0 && t < target) || (minutes < 0.0 && t > target)) {
            steps += 1;
            degrees = f64::from(steps) * step;
            if degrees.abs() > MAX_SOLAR_DIP {
                warn!(minutes, "sunset solar dip search exhausted");
                return None;
            }
            offset_by_degrees = self.sunset_offset_by_degrees(zenith::GEOMETRIC + degrees);
        }
        Some(degrees)
    }

    fn localize(&self, time: Option<f64>, event: SolarEvent) -> Option<DateTime<Tz>> {
        match time {
            Some(time) => self.date_from_time(time, event),
            None => {
                debug!(date = %self.date, location = self.location.name(), ?event, "no solar event on this date");
                None
            }
        }
    }
}

/// `time + offset`, `None` if either is undefined.
pub fn time_offset(time: Option<DateTime<Tz>>, offset: Option<TimeDelta>) -> Option<DateTime<Tz>> {
    time?.checked_add_signed(offset?)
}

/// A twelfth of the span from `start` to `end`, truncated to the millisecond.
pub fn temporal_hour_between(start: Option<DateTime<Tz>>, end: Option<DateTime<Tz>>) -> Option<TimeDelta> {
    let span = end? - start?;
    Some(TimeDelta::milliseconds(span.num_milliseconds() / 12))
}

/// Midpoint of a day measured from `start` to `end`: six of its temporal hours after `start`.
pub fn sun_transit_between(start: Option<DateTime<Tz>>, end: Option<DateTime<Tz>>) -> Option<DateTime<Tz>> {
    let hour = temporal_hour_between(start, end)?;
    time_offset(start, Some(hour * 6))
}

/// A (possibly fractional) number of minutes as a duration, truncated to the millisecond.
pub fn minutes_delta(minutes: f64) -> Option<TimeDelta> {
    let millis = minutes * MINUTE_MILLIS as f64;
    millis.is_finite().then(|| TimeDelta::milliseconds(millis as i64))
}

/// Moves sunset a day forward when it does not come after sunrise.
fn adjust_sunset(sunset: Option<DateTime<Tz>>, sunrise: Option<DateTime<Tz>>) -> Option<DateTime<Tz>> {
    match (sunset, sunrise) {
        (Some(set), Some(rise)) if rise >= set => {
            debug!(%set, %rise, "sunset precedes sunrise, moving it a day forward");
            set.checked_add_days(Days::new(1))
        }
        (sunset, _) => sunset,
    }
}
