//! The zmanim catalog.
//!
//! Every zman is a [`Formula`] over a handful of solar [`Event`]s. The named
//! accessors on [`ZmanimCalendar`] and the [`CATALOG`] table are generated
//! from one list, so a formula is written exactly once. Any undefined input
//! (no sunrise, no 16.1 degree dawn, ...) makes the result `None`.

use chrono::{DateTime, NaiveDate, TimeDelta};
use chrono_tz::Tz;
use tracing::trace;

use crate::astronomical::{minutes_delta, sun_transit_between, temporal_hour_between, time_offset, AstronomicalCalendar};
use crate::config::ZmanimConfig;
use crate::geo::GeoLocation;
use crate::jewish_date::{JewishDate, JewishMonth};
use crate::time::HOUR_MILLIS;
use crate::types::ZmanimError;
use crate::zenith;

use Event::{Chatzos, FixedLocalChatzos, SeaLevelSunrise, SeaLevelSunset};

/// A point of the day every zman is measured from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// Elevation adjusted sunrise.
    Sunrise,
    /// Elevation adjusted sunset.
    Sunset,
    SeaLevelSunrise,
    SeaLevelSunset,
    /// Morning crossing of a zenith, see [`crate::zenith`].
    SunriseAtZenith(f64),
    /// Evening crossing of a zenith, see [`crate::zenith`].
    SunsetAtZenith(f64),
    /// Solar transit, halfway between sea-level sunrise and sunset.
    Chatzos,
    /// 12:00 local mean time.
    FixedLocalChatzos,
    /// Sea-level sunset plus the configured Ateret Torah offset.
    AteretTorahTzais,
    /// Sea-level sunset minus the configured candle lighting offset.
    CandleLighting,
}

/// The two ends of a day whose twelfth is a *shaah zmanis*.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Day {
    /// Sea-level sunrise to sea-level sunset.
    Gra,
    /// 60 minutes before sunrise to 60 minutes after sunset.
    Mga60,
    /// 72 minutes before sunrise to 72 minutes after sunset.
    Mga72,
    /// 1.2 shaos zmaniyos before sunrise to 1.2 after sunset.
    Mga72Zmanis,
    Mga90,
    Mga90Zmanis,
    Mga96,
    Mga96Zmanis,
    Mga120,
    Mga120Zmanis,
    Degrees16Point1,
    Degrees18,
    Degrees19Point8,
    Degrees26,
    /// Alos 72 zmaniyos to the Ateret Torah tzais.
    AteretTorah,
    /// Sunrise to sunset at 1.583 degrees.
    BaalHatanya,
    /// Alos 16.1 degrees to sea-level sunset.
    Alos16Point1ToSunset,
    /// Alos 16.1 degrees to tzais 7.083 degrees.
    Alos16Point1ToTzaisGeonim7Point083,
    /// Alos 16.1 degrees to tzais 3.7 degrees (Ahavat Shalom).
    Alos16Point1ToTzais3Point7,
    /// Alos 16.1 degrees to tzais 3.8 degrees (Ahavat Shalom).
    Alos16Point1ToTzais3Point8,
}

/// How a zman is derived from the [`Event`]s of the day.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Formula {
    /// The event itself.
    At(Event),
    /// The event moved by a number of clock minutes (negative is earlier).
    Minutes(Event, f64),
    /// The event moved by a number of Gra shaos zmaniyos.
    Zmanis(Event, f64),
    /// The start of a day plus a number of that day's shaos zmaniyos.
    Proportional(Day, f64),
}

const fn at(event: Event) -> Formula {
    Formula::At(event)
}

const fn minutes(event: Event, minutes: f64) -> Formula {
    Formula::Minutes(event, minutes)
}

const fn zmanis(event: Event, hours: f64) -> Formula {
    Formula::Zmanis(event, hours)
}

const fn hours(day: Day, hours: f64) -> Formula {
    Formula::Proportional(day, hours)
}

const fn dawn(zenith: f64) -> Event {
    Event::SunriseAtZenith(zenith)
}

const fn dusk(zenith: f64) -> Event {
    Event::SunsetAtZenith(zenith)
}

impl Day {
    /// Start and end of this day.
    pub const fn bounds(self) -> (Formula, Formula) {
        match self {
            Day::Gra => (at(SeaLevelSunrise), at(SeaLevelSunset)),
            Day::Mga60 => (minutes(SeaLevelSunrise, -60.0), minutes(SeaLevelSunset, 60.0)),
            Day::Mga72 => (minutes(SeaLevelSunrise, -72.0), minutes(SeaLevelSunset, 72.0)),
            Day::Mga72Zmanis => (zmanis(SeaLevelSunrise, -1.2), zmanis(SeaLevelSunset, 1.2)),
            Day::Mga90 => (minutes(SeaLevelSunrise, -90.0), minutes(SeaLevelSunset, 90.0)),
            Day::Mga90Zmanis => (zmanis(SeaLevelSunrise, -1.5), zmanis(SeaLevelSunset, 1.5)),
            Day::Mga96 => (minutes(SeaLevelSunrise, -96.0), minutes(SeaLevelSunset, 96.0)),
            Day::Mga96Zmanis => (zmanis(SeaLevelSunrise, -1.6), zmanis(SeaLevelSunset, 1.6)),
            Day::Mga120 => (minutes(SeaLevelSunrise, -120.0), minutes(SeaLevelSunset, 120.0)),
            Day::Mga120Zmanis => (zmanis(SeaLevelSunrise, -2.0), zmanis(SeaLevelSunset, 2.0)),
            Day::Degrees16Point1 => (at(dawn(zenith::DEGREES_16_POINT_1)), at(dusk(zenith::DEGREES_16_POINT_1))),
            Day::Degrees18 => (at(dawn(zenith::DEGREES_18)), at(dusk(zenith::DEGREES_18))),
            Day::Degrees19Point8 => (at(dawn(zenith::DEGREES_19_POINT_8)), at(dusk(zenith::DEGREES_19_POINT_8))),
            Day::Degrees26 => (at(dawn(zenith::DEGREES_26)), at(dusk(zenith::DEGREES_26))),
            Day::AteretTorah => (zmanis(SeaLevelSunrise, -1.2), at(Event::AteretTorahTzais)),
            Day::BaalHatanya => (at(dawn(zenith::DEGREES_1_POINT_583)), at(dusk(zenith::DEGREES_1_POINT_583))),
            Day::Alos16Point1ToSunset => (at(dawn(zenith::DEGREES_16_POINT_1)), at(SeaLevelSunset)),
            Day::Alos16Point1ToTzaisGeonim7Point083 => {
                (at(dawn(zenith::DEGREES_16_POINT_1)), at(dusk(zenith::DEGREES_7_POINT_083)))
            }
            Day::Alos16Point1ToTzais3Point7 => (at(dawn(zenith::DEGREES_16_POINT_1)), at(dusk(zenith::DEGREES_3_POINT_7))),
            Day::Alos16Point1ToTzais3Point8 => (at(dawn(zenith::DEGREES_16_POINT_1)), at(dusk(zenith::DEGREES_3_POINT_8))),
        }
    }
}

/// Zmanim for one date and location.
///
/// Wraps an [`AstronomicalCalendar`] and a [`ZmanimConfig`]; every named zman is also listed in [`CATALOG`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use zmanim::{Calculator, GeoLocation, ZmanimCalendar, ZmanimConfig};
///
/// let lakewood = GeoLocation::new("Lakewood, NJ", 40.09596, -74.22213, 0.0, chrono_tz::America::New_York).unwrap();
/// let date = NaiveDate::from_ymd_opt(2010, 4, 2).unwrap();
/// let config = ZmanimConfig::default().with_calculator(Calculator::SunTimes);
/// let zmanim = ZmanimCalendar::new(date, lakewood, config).unwrap();
///
/// let shma = zmanim.sof_zman_shma_gra().unwrap();
/// assert_eq!(shma.format("%H:%M:%S%.3f").to_string(), "09:50:17.301");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ZmanimCalendar {
    astronomical: AstronomicalCalendar,
    config: ZmanimConfig,
}

impl ZmanimCalendar {
    /// # Errors
    ///
    /// [`ZmanimError::InvalidConfig`] when `config` does not validate.
    pub fn new(date: NaiveDate, location: GeoLocation, config: ZmanimConfig) -> Result<Self, ZmanimError> {
        config.validate()?;
        Ok(Self {
            astronomical: AstronomicalCalendar::new(date, location, config.calculator()),
            config,
        })
    }

    /// The underlying sunrise/sunset calendar.
    pub fn astronomical(&self) -> &AstronomicalCalendar {
        &self.astronomical
    }

    pub fn config(&self) -> &ZmanimConfig {
        &self.config
    }

    pub fn date(&self) -> NaiveDate {
        self.astronomical.date()
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.astronomical.set_date(date);
    }

    /// # Errors
    ///
    /// [`ZmanimError::InvalidConfig`] when `config` does not validate; the calendar is left unchanged.
    pub fn set_config(&mut self, config: ZmanimConfig) -> Result<(), ZmanimError> {
        config.validate()?;
        self.astronomical.set_calculator(config.calculator());
        self.config = config;
        Ok(())
    }

    /// Evaluates a formula for this date.
    pub fn zman(&self, formula: Formula) -> Option<DateTime<Tz>> {
        let time = match formula {
            Formula::At(event) => self.event(event),
            Formula::Minutes(event, m) => time_offset(self.event(event), minutes_delta(m)),
            Formula::Zmanis(event, h) => time_offset(self.event(event), scale(self.shaah_zmanis(Day::Gra), h)),
            Formula::Proportional(day, h) => {
                let (start, _) = day.bounds();
                time_offset(self.zman(start), scale(self.shaah_zmanis(day), h))
            }
        };
        if time.is_none() {
            trace!(?formula, date = %self.date(), "zman undefined");
        }
        time
    }

    /// A twelfth of `day`.
    pub fn shaah_zmanis(&self, day: Day) -> Option<TimeDelta> {
        let (start, end) = day.bounds();
        temporal_hour_between(self.zman(start), self.zman(end))
    }

    /// Evaluates a single [`Event`].
    pub fn event(&self, event: Event) -> Option<DateTime<Tz>> {
        let astro = &self.astronomical;
        match event {
            Event::Sunrise => astro.sunrise(),
            Event::Sunset => astro.sunset(),
            Event::SeaLevelSunrise => astro.sea_level_sunrise(),
            Event::SeaLevelSunset => astro.sea_level_sunset(),
            Event::SunriseAtZenith(z) => astro.sunrise_offset_by_degrees(z),
            Event::SunsetAtZenith(z) => astro.sunset_offset_by_degrees(z),
            Event::Chatzos => astro.sun_transit(),
            Event::FixedLocalChatzos => self.local_mean_noon(),
            Event::AteretTorahTzais => {
                time_offset(astro.sea_level_sunset(), minutes_delta(self.config.ateret_torah_sunset_offset()))
            }
            Event::CandleLighting => {
                time_offset(astro.sea_level_sunset(), minutes_delta(-self.config.candle_lighting_offset()))
            }
        }
    }

    /// The later of [`mincha_gedola`](Self::mincha_gedola) and half an hour after chatzos.
    ///
    /// In winter a half shaah zmanis is shorter than 30 minutes.
    pub fn mincha_gedola_greater_than_30(&self) -> Option<DateTime<Tz>> {
        let thirty = self.mincha_gedola_30_minutes()?;
        let gra = self.mincha_gedola()?;
        Some(thirty.max(gra))
    }

    /// Chatzos plus the greater of 30 minutes and half a shaah zmanis of alos 16.1 to tzais 3.7.
    pub fn mincha_gedola_ahavat_shalom(&self) -> Option<DateTime<Tz>> {
        let thirty = self.mincha_gedola_30_minutes()?;
        let half = self.shaah_zmanis(Day::Alos16Point1ToTzais3Point7)? / 2;
        let proportional = time_offset(self.chatzos(), Some(half))?;
        Some(thirty.max(proportional))
    }

    /// Rabbeinu Tam's two stars: sunset plus 5/18 of the time from alos 19.8 to sunrise.
    pub fn bain_hasmashos_rt_2_stars(&self) -> Option<DateTime<Tz>> {
        let alos = self.alos_19_point_8_degrees()?;
        let sunrise = self.astronomical.sunrise()?;
        let span = (sunrise - alos).num_milliseconds() as f64 * (5.0 / 18.0);
        time_offset(self.astronomical.sunset(), Some(TimeDelta::milliseconds(span as i64)))
    }

    /// Chatzos halayla: halfway between tonight's sea-level sunset and tomorrow's sea-level sunrise.
    pub fn solar_midnight(&self) -> Option<DateTime<Tz>> {
        let mut tomorrow = self.astronomical.clone();
        tomorrow.set_date(self.date().succ_opt()?);
        sun_transit_between(self.astronomical.sea_level_sunset(), tomorrow.sea_level_sunrise())
    }

    /// Last time to eat chametz on erev Pesach, per the Gra. `None` on other days.
    pub fn sof_zman_achilas_chametz_gra(&self) -> Option<DateTime<Tz>> {
        self.on_erev_pesach(hours(Day::Gra, 4.0))
    }

    /// Last time to eat chametz on erev Pesach, per the MGA with a 72 minute day.
    pub fn sof_zman_achilas_chametz_mga_72_minutes(&self) -> Option<DateTime<Tz>> {
        self.on_erev_pesach(hours(Day::Mga72, 4.0))
    }

    pub fn sof_zman_achilas_chametz_mga_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.on_erev_pesach(hours(Day::Degrees16Point1, 4.0))
    }

    /// Last time to burn chametz on erev Pesach, per the Gra. `None` on other days.
    pub fn sof_zman_biur_chametz_gra(&self) -> Option<DateTime<Tz>> {
        self.on_erev_pesach(hours(Day::Gra, 5.0))
    }

    pub fn sof_zman_biur_chametz_mga_72_minutes(&self) -> Option<DateTime<Tz>> {
        self.on_erev_pesach(hours(Day::Mga72, 5.0))
    }

    pub fn sof_zman_biur_chametz_mga_16_point_1_degrees(&self) -> Option<DateTime<Tz>> {
        self.on_erev_pesach(hours(Day::Degrees16Point1, 5.0))
    }

    fn on_erev_pesach(&self, formula: Formula) -> Option<DateTime<Tz>> {
        let jewish = JewishDate::from_gregorian(self.date()).ok()?;
        if jewish.month() == JewishMonth::Nissan && jewish.day() == 14 {
            self.zman(formula)
        } else {
            None
        }
    }

    /// 12:00 local mean time, independent of the equation of time.
    fn local_mean_noon(&self) -> Option<DateTime<Tz>> {
        let location = self.astronomical.location();
        let midnight = self.date().and_hms_opt(0, 0, 0)?.and_utc();
        let utc_hours = 12.0 - location.longitude() / 15.0;
        let noon = midnight.checked_add_signed(TimeDelta::milliseconds((utc_hours * HOUR_MILLIS as f64) as i64))?;
        Some(noon.with_timezone(&location.time_zone()))
    }
}

/// `hours` shaos zmaniyos, truncated to the millisecond.
fn scale(shaah: Option<TimeDelta>, hours: f64) -> Option<TimeDelta> {
    let millis = shaah?.num_milliseconds() as f64 * hours;
    Some(TimeDelta::milliseconds(millis as i64))
}

macro_rules! zmanim_catalog {
    ($($(#[$attr:meta])* $name:ident => $formula:expr;)*) => {
        impl ZmanimCalendar {
            $(
                $(#[$attr])*
                pub fn $name(&self) -> Option<DateTime<Tz>> {
                    self.zman($formula)
                }
            )*
        }

        /// Every named zman with its formula, in accessor order.
        pub const CATALOG: &[(&str, Formula)] = &[$((stringify!($name), $formula),)*];
    };
}

macro_rules! shaah_zmanis_accessors {
    ($($(#[$attr:meta])* $name:ident => $day:expr;)*) => {
        impl ZmanimCalendar {
            $(
                $(#[$attr])*
                pub fn $name(&self) -> Option<TimeDelta> {
                    self.shaah_zmanis($day)
                }
            )*
        }
    };
}

zmanim_catalog! {
    /// Dawn, when the sun is 16.1 degrees below the horizon.
    alos_hashachar => at(dawn(zenith::DEGREES_16_POINT_1));
    /// Dawn, 72 minutes before sea-level sunrise.
    alos_72 => minutes(SeaLevelSunrise, -72.0);
    /// Dawn, 60 minutes before sea-level sunrise (four mil of 15 minutes).
    alos_60 => minutes(SeaLevelSunrise, -60.0);
    /// 1.2 shaos zmaniyos before sunrise.
    alos_72_zmanis => zmanis(SeaLevelSunrise, -1.2);
    /// Dawn, 90 minutes before sea-level sunrise (four mil of 22.5 minutes).
    alos_90 => minutes(SeaLevelSunrise, -90.0);
    alos_90_zmanis => zmanis(SeaLevelSunrise, -1.5);
    alos_96 => minutes(SeaLevelSunrise, -96.0);
    alos_96_zmanis => zmanis(SeaLevelSunrise, -1.6);
    /// Dawn, 120 minutes before sea-level sunrise (five mil of 24 minutes).
    alos_120 => minutes(SeaLevelSunrise, -120.0);
    alos_120_zmanis => zmanis(SeaLevelSunrise, -2.0);
    alos_16_point_1_degrees => at(dawn(zenith::DEGREES_16_POINT_1));
    alos_18_degrees => at(dawn(zenith::DEGREES_18));
    /// Dawn at the depression of the sun 90 minutes before sunrise in Jerusalem at the equinox.
    alos_19_point_8_degrees => at(dawn(zenith::DEGREES_19_POINT_8));
    alos_26_degrees => at(dawn(zenith::DEGREES_26));
    /// Dawn per the Baal Hatanya, 16.9 degrees.
    alos_baal_hatanya => at(dawn(zenith::DEGREES_16_POINT_9));

    /// Earliest tallis and tefillin, when the sky is light enough to recognise an acquaintance.
    misheyakir_10_point_2_degrees => at(dawn(zenith::DEGREES_10_POINT_2));
    misheyakir_11_degrees => at(dawn(zenith::DEGREES_11));
    misheyakir_11_point_5_degrees => at(dawn(zenith::DEGREES_11_POINT_5));

    /// Sunrise when the sun's center is 1.583 degrees below the horizon.
    sunrise_baal_hatanya => at(dawn(zenith::DEGREES_1_POINT_583));
    /// Sunset when the sun's center is 1.583 degrees below the horizon.
    sunset_baal_hatanya => at(dusk(zenith::DEGREES_1_POINT_583));

    /// Three shaos zmaniyos into the Gra day.
    sof_zman_shma_gra => hours(Day::Gra, 3.0);
    /// Three shaos zmaniyos into the day from alos 72 to tzais 72.
    sof_zman_shma_mga => hours(Day::Mga72, 3.0);
    sof_zman_shma_mga_72_minutes => hours(Day::Mga72, 3.0);
    sof_zman_shma_mga_72_minutes_zmanis => hours(Day::Mga72Zmanis, 3.0);
    sof_zman_shma_mga_90_minutes => hours(Day::Mga90, 3.0);
    sof_zman_shma_mga_90_minutes_zmanis => hours(Day::Mga90Zmanis, 3.0);
    sof_zman_shma_mga_96_minutes => hours(Day::Mga96, 3.0);
    sof_zman_shma_mga_96_minutes_zmanis => hours(Day::Mga96Zmanis, 3.0);
    sof_zman_shma_mga_120_minutes => hours(Day::Mga120, 3.0);
    /// Three shaos zmaniyos into the day from alos to tzais at 16.1 degrees.
    sof_zman_shma_mga_16_point_1_degrees => hours(Day::Degrees16Point1, 3.0);
    sof_zman_shma_mga_18_degrees => hours(Day::Degrees18, 3.0);
    sof_zman_shma_mga_19_point_8_degrees => hours(Day::Degrees19Point8, 3.0);
    /// Three clock hours before solar transit.
    sof_zman_shma_3_hours_before_chatzos => minutes(Chatzos, -180.0);
    sof_zman_shma_alos_16_point_1_to_sunset => hours(Day::Alos16Point1ToSunset, 3.0);
    sof_zman_shma_alos_16_point_1_to_tzais_geonim_7_point_083 => hours(Day::Alos16Point1ToTzaisGeonim7Point083, 3.0);
    /// Three shaos zmaniyos from alos 72 zmaniyos to the Ateret Torah tzais.
    sof_zman_shma_ateret_torah => hours(Day::AteretTorah, 3.0);
    sof_zman_shma_baal_hatanya => hours(Day::BaalHatanya, 3.0);
    /// Three shaos zmaniyos from alos 16.1 degrees to tzais 3.8 degrees.
    sof_zman_shma_ahavat_shalom => hours(Day::Alos16Point1ToTzais3Point8, 3.0);
    /// Three hours before fixed local chatzos.
    sof_zman_shma_fixed_local => minutes(FixedLocalChatzos, -180.0);

    /// Four shaos zmaniyos into the Gra day.
    sof_zman_tfila_gra => hours(Day::Gra, 4.0);
    /// Four shaos zmaniyos into the day from alos 72 to tzais 72.
    sof_zman_tfila_mga => hours(Day::Mga72, 4.0);
    sof_zman_tfila_mga_72_minutes => hours(Day::Mga72, 4.0);
    sof_zman_tfila_mga_72_minutes_zmanis => hours(Day::Mga72Zmanis, 4.0);
    sof_zman_tfila_mga_90_minutes => hours(Day::Mga90, 4.0);
    sof_zman_tfila_mga_90_minutes_zmanis => hours(Day::Mga90Zmanis, 4.0);
    sof_zman_tfila_mga_96_minutes => hours(Day::Mga96, 4.0);
    sof_zman_tfila_mga_96_minutes_zmanis => hours(Day::Mga96Zmanis, 4.0);
    sof_zman_tfila_mga_120_minutes => hours(Day::Mga120, 4.0);
    sof_zman_tfila_mga_16_point_1_degrees => hours(Day::Degrees16Point1, 4.0);
    sof_zman_tfila_mga_18_degrees => hours(Day::Degrees18, 4.0);
    sof_zman_tfila_mga_19_point_8_degrees => hours(Day::Degrees19Point8, 4.0);
    sof_zman_tfila_2_hours_before_chatzos => minutes(Chatzos, -120.0);
    sof_zman_tfila_ateret_torah => hours(Day::AteretTorah, 4.0);
    sof_zman_tfila_baal_hatanya => hours(Day::BaalHatanya, 4.0);
    /// Two hours before fixed local chatzos.
    sof_zman_tfila_fixed_local => minutes(FixedLocalChatzos, -120.0);

    /// Solar transit.
    chatzos => at(Chatzos);
    /// 12:00 local mean time.
    fixed_local_chatzos => at(FixedLocalChatzos);

    /// Six and a half shaos zmaniyos into the Gra day.
    mincha_gedola => hours(Day::Gra, 6.5);
    /// Half an hour after chatzos.
    mincha_gedola_30_minutes => minutes(Chatzos, 30.0);
    mincha_gedola_72_minutes => hours(Day::Mga72, 6.5);
    mincha_gedola_16_point_1_degrees => hours(Day::Degrees16Point1, 6.5);
    mincha_gedola_ateret_torah => hours(Day::AteretTorah, 6.5);
    mincha_gedola_baal_hatanya => hours(Day::BaalHatanya, 6.5);

    /// Nine and a half shaos zmaniyos into the Gra day.
    mincha_ketana => hours(Day::Gra, 9.5);
    mincha_ketana_72_minutes => hours(Day::Mga72, 9.5);
    mincha_ketana_16_point_1_degrees => hours(Day::Degrees16Point1, 9.5);
    mincha_ketana_ateret_torah => hours(Day::AteretTorah, 9.5);
    mincha_ketana_baal_hatanya => hours(Day::BaalHatanya, 9.5);
    /// Nine and a half shaos zmaniyos from alos 16.1 degrees to tzais 3.8 degrees.
    mincha_ketana_ahavat_shalom => hours(Day::Alos16Point1ToTzais3Point8, 9.5);

    /// Ten and three quarter shaos zmaniyos into the Gra day.
    plag_hamincha => hours(Day::Gra, 10.75);
    plag_hamincha_60_minutes => hours(Day::Mga60, 10.75);
    plag_hamincha_72_minutes => hours(Day::Mga72, 10.75);
    plag_hamincha_72_minutes_zmanis => hours(Day::Mga72Zmanis, 10.75);
    plag_hamincha_90_minutes => hours(Day::Mga90, 10.75);
    plag_hamincha_90_minutes_zmanis => hours(Day::Mga90Zmanis, 10.75);
    plag_hamincha_96_minutes => hours(Day::Mga96, 10.75);
    plag_hamincha_96_minutes_zmanis => hours(Day::Mga96Zmanis, 10.75);
    plag_hamincha_120_minutes => hours(Day::Mga120, 10.75);
    plag_hamincha_120_minutes_zmanis => hours(Day::Mga120Zmanis, 10.75);
    plag_hamincha_16_point_1_degrees => hours(Day::Degrees16Point1, 10.75);
    plag_hamincha_18_degrees => hours(Day::Degrees18, 10.75);
    plag_hamincha_19_point_8_degrees => hours(Day::Degrees19Point8, 10.75);
    plag_hamincha_26_degrees => hours(Day::Degrees26, 10.75);
    /// Plag measured from alos 16.1 degrees to sea-level sunset.
    plag_hamincha_alos_to_sunset => hours(Day::Alos16Point1ToSunset, 10.75);
    plag_hamincha_alos_16_point_1_to_tzais_geonim_7_point_083 => hours(Day::Alos16Point1ToTzaisGeonim7Point083, 10.75);
    plag_hamincha_ateret_torah => hours(Day::AteretTorah, 10.75);
    plag_hamincha_baal_hatanya => hours(Day::BaalHatanya, 10.75);
    plag_hamincha_ahavat_shalom => hours(Day::Alos16Point1ToTzais3Point8, 10.75);

    /// Sea-level sunset minus the configured candle lighting offset.
    candle_lighting => at(Event::CandleLighting);

    /// End of bain hashmashos per Rabbeinu Tam, at 13.24 degrees.
    bain_hasmashos_rt_13_point_24_degrees => at(dusk(zenith::DEGREES_13_POINT_24));
    /// Rabbeinu Tam, 3.25 mil of 18 minutes after sunset.
    bain_hasmashos_rt_58_point_5_minutes => minutes(SeaLevelSunset, 58.5);
    bain_hasmashos_rt_13_point_5_minutes_before_7_point_083_degrees => minutes(dusk(zenith::DEGREES_7_POINT_083), -13.5);
    bain_hasmashos_yereim_13_point_5_minutes => minutes(SeaLevelSunset, -13.5);
    bain_hasmashos_yereim_16_point_875_minutes => minutes(SeaLevelSunset, -16.875);
    /// Start of bain hashmashos per the Yereim, 3/4 of an 18 minute mil before sunset.
    bain_hasmashos_yereim_18_minutes => minutes(SeaLevelSunset, -18.0);
    /// Start of bain hashmashos while the sun is still 2.1 degrees above the horizon.
    bain_hasmashos_yereim_2_point_1_degrees => at(dusk(zenith::ABOVE_HORIZON_2_POINT_1));
    bain_hasmashos_yereim_2_point_8_degrees => at(dusk(zenith::ABOVE_HORIZON_2_POINT_8));
    bain_hasmashos_yereim_3_point_05_degrees => at(dusk(zenith::ABOVE_HORIZON_3_POINT_05));

    /// Nightfall, when the sun is 8.5 degrees below the horizon.
    tzais => at(dusk(zenith::DEGREES_8_POINT_5));
    /// Nightfall, 72 minutes after sea-level sunset.
    tzais_72 => minutes(SeaLevelSunset, 72.0);
    /// Nightfall 50 minutes after sea-level sunset.
    tzais_50 => minutes(SeaLevelSunset, 50.0);
    tzais_60 => minutes(SeaLevelSunset, 60.0);
    tzais_72_zmanis => zmanis(SeaLevelSunset, 1.2);
    tzais_90 => minutes(SeaLevelSunset, 90.0);
    tzais_90_zmanis => zmanis(SeaLevelSunset, 1.5);
    tzais_96 => minutes(SeaLevelSunset, 96.0);
    tzais_96_zmanis => zmanis(SeaLevelSunset, 1.6);
    tzais_120 => minutes(SeaLevelSunset, 120.0);
    tzais_120_zmanis => zmanis(SeaLevelSunset, 2.0);
    tzais_16_point_1_degrees => at(dusk(zenith::DEGREES_16_POINT_1));
    tzais_18_degrees => at(dusk(zenith::DEGREES_18));
    tzais_19_point_8_degrees => at(dusk(zenith::DEGREES_19_POINT_8));
    tzais_26_degrees => at(dusk(zenith::DEGREES_26));
    /// Sea-level sunset plus the configured Ateret Torah offset.
    tzais_ateret_torah => at(Event::AteretTorahTzais);
    /// Nightfall per the Baal Hatanya, 6 degrees.
    tzais_baal_hatanya => at(dusk(zenith::DEGREES_6));
    tzais_geonim_3_point_65_degrees => at(dusk(zenith::DEGREES_3_POINT_65));
    tzais_geonim_3_point_676_degrees => at(dusk(zenith::DEGREES_3_POINT_676));
    /// Tzais 3.7 degrees (Ahavat Shalom).
    tzais_geonim_3_point_7_degrees => at(dusk(zenith::DEGREES_3_POINT_7));
    tzais_geonim_3_point_8_degrees => at(dusk(zenith::DEGREES_3_POINT_8));
    tzais_geonim_4_point_37_degrees => at(dusk(zenith::DEGREES_4_POINT_37));
    tzais_geonim_4_point_61_degrees => at(dusk(zenith::DEGREES_4_POINT_61));
    tzais_geonim_4_point_8_degrees => at(dusk(zenith::DEGREES_4_POINT_8));
    tzais_geonim_5_point_88_degrees => at(dusk(zenith::DEGREES_5_POINT_88));
    tzais_geonim_5_point_95_degrees => at(dusk(zenith::DEGREES_5_POINT_95));
    /// Three medium stars, 7 degrees 5 minutes below the horizon.
    tzais_geonim_7_point_083_degrees => at(dusk(zenith::DEGREES_7_POINT_083));
    tzais_geonim_8_point_5_degrees => at(dusk(zenith::DEGREES_8_POINT_5));
}

shaah_zmanis_accessors! {
    /// A twelfth of the sea-level day; the unit of every `zmanis` offset.
    shaah_zmanis_gra => Day::Gra;
    /// A twelfth of the day from alos 72 to tzais 72.
    shaah_zmanis_mga => Day::Mga72;
    shaah_zmanis_60_minutes => Day::Mga60;
    shaah_zmanis_72_minutes => Day::Mga72;
    shaah_zmanis_72_minutes_zmanis => Day::Mga72Zmanis;
    shaah_zmanis_90_minutes => Day::Mga90;
    shaah_zmanis_90_minutes_zmanis => Day::Mga90Zmanis;
    shaah_zmanis_96_minutes => Day::Mga96;
    shaah_zmanis_96_minutes_zmanis => Day::Mga96Zmanis;
    shaah_zmanis_120_minutes => Day::Mga120;
    shaah_zmanis_120_minutes_zmanis => Day::Mga120Zmanis;
    /// A twelfth of the day from alos to tzais at 16.1 degrees.
    shaah_zmanis_16_point_1_degrees => Day::Degrees16Point1;
    shaah_zmanis_18_degrees => Day::Degrees18;
    shaah_zmanis_19_point_8_degrees => Day::Degrees19Point8;
    shaah_zmanis_26_degrees => Day::Degrees26;
    /// A twelfth of the day from alos 72 zmaniyos to the Ateret Torah tzais.
    shaah_zmanis_ateret_torah => Day::AteretTorah;
    /// A twelfth of the day between the 1.583 degree sunrise and sunset.
    shaah_zmanis_baal_hatanya => Day::BaalHatanya;
    shaah_zmanis_alos_16_point_1_to_tzais_3_point_7 => Day::Alos16Point1ToTzais3Point7;
    shaah_zmanis_alos_16_point_1_to_tzais_3_point_8 => Day::Alos16Point1ToTzais3Point8;
}
