//! Named zenith angles, in degrees from the vertical.
//!
//! [`GEOMETRIC`] is the only value the calculators correct for refraction,
//! solar radius and elevation. All the others are used exactly as written.

/// The geometric horizon.
pub const GEOMETRIC: f64 = 90.0;
/// Civil twilight, 6 degrees below the horizon.
pub const CIVIL: f64 = 96.0;
/// Nautical twilight, 12 degrees below the horizon.
pub const NAUTICAL: f64 = 102.0;
/// Astronomical twilight, 18 degrees below the horizon.
pub const ASTRONOMICAL: f64 = 108.0;

/// 1.583 degrees below the horizon (Baal Hatanya sunrise/sunset)
pub const DEGREES_1_POINT_583: f64 = GEOMETRIC + 1.583;
/// 2.1 degrees *above* the horizon, the sun 13.5 minutes before sunset in Jerusalem at the equinox (Yereim)
pub const ABOVE_HORIZON_2_POINT_1: f64 = GEOMETRIC - 2.1;
/// 2.8 degrees above the horizon, 16.875 minutes before sunset (Yereim)
pub const ABOVE_HORIZON_2_POINT_8: f64 = GEOMETRIC - 2.8;
/// 3.05 degrees above the horizon, 18 minutes before sunset (Yereim)
pub const ABOVE_HORIZON_3_POINT_05: f64 = GEOMETRIC - 3.05;
/// Tzais 3.65 degrees, 13.5 minutes after sunset in Jerusalem at the equinox
pub const DEGREES_3_POINT_65: f64 = GEOMETRIC + 3.65;
/// Tzais 3.676 degrees, 3/4 of an 18 minute mil after sunset
pub const DEGREES_3_POINT_676: f64 = GEOMETRIC + 3.676;
/// Tzais 3.7 degrees (Ahavat Shalom)
pub const DEGREES_3_POINT_7: f64 = GEOMETRIC + 3.7;
/// Tzais 3.8 degrees (Ahavat Shalom)
pub const DEGREES_3_POINT_8: f64 = GEOMETRIC + 3.8;
/// Tzais 4.37 degrees, 3/4 of a 22.5 minute mil
pub const DEGREES_4_POINT_37: f64 = GEOMETRIC + 4.37;
/// Tzais 4.61 degrees, 3/4 of a 24 minute mil
pub const DEGREES_4_POINT_61: f64 = GEOMETRIC + 4.61;
/// Tzais 4.8 degrees
pub const DEGREES_4_POINT_8: f64 = GEOMETRIC + 4.8;
/// Tzais 5.88 degrees
pub const DEGREES_5_POINT_88: f64 = GEOMETRIC + 5.88;
/// Tzais 5.95 degrees, 24 minutes after sunset in Jerusalem at the equinox
pub const DEGREES_5_POINT_95: f64 = GEOMETRIC + 5.95;
/// Baal Hatanya tzais
pub const DEGREES_6: f64 = GEOMETRIC + 6.0;
/// Tzais of the Geonim, 3/4 of a 30 minute mil after sunset in Jerusalem at the equinox
pub const DEGREES_7_POINT_083: f64 = GEOMETRIC + 7.0 + 5.0 / 60.0;
/// Tzais 8.5 degrees, when three small stars are visible
pub const DEGREES_8_POINT_5: f64 = GEOMETRIC + 8.5;
/// Misheyakir 10.2 degrees
pub const DEGREES_10_POINT_2: f64 = GEOMETRIC + 10.2;
/// Misheyakir 11 degrees
pub const DEGREES_11: f64 = GEOMETRIC + 11.0;
/// Misheyakir 11.5 degrees
pub const DEGREES_11_POINT_5: f64 = GEOMETRIC + 11.5;
/// Rabbeinu Tam tzais by degrees, used as the end of bain hashmashos
pub const DEGREES_13_POINT_24: f64 = GEOMETRIC + 13.24;
/// Alos and tzais 72 minutes from sunset in Jerusalem at the equinox
pub const DEGREES_16_POINT_1: f64 = GEOMETRIC + 16.1;
/// Baal Hatanya alos
pub const DEGREES_16_POINT_9: f64 = GEOMETRIC + 16.9;
/// Alos and tzais 18 degrees, same as [`ASTRONOMICAL`]
pub const DEGREES_18: f64 = GEOMETRIC + 18.0;
/// Alos and tzais 90 minutes from sunset in Jerusalem at the equinox
pub const DEGREES_19_POINT_8: f64 = GEOMETRIC + 19.8;
/// Alos and tzais 120 minutes from sunset in Jerusalem at the equinox
pub const DEGREES_26: f64 = GEOMETRIC + 26.0;
