//! Observer location.
//!
//! [`GeoLocation`] carries everything the solar calculators need to know about
//! where the observer stands, plus the geodesic helpers (Vincenty inverse
//! formula on the WGS-84 ellipsoid, rhumb lines) that operate on pairs of
//! locations.

use alloc::string::{String, ToString};
use core::f64::consts::PI;
use core::hash::{Hash, Hasher};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::time::MINUTE_MILLIS;
use crate::types::ZmanimError;

/// WGS-84 semi-major axis (equatorial radius) in meters
const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS-84 semi-minor axis (polar radius) in meters
const WGS84_SEMI_MINOR_AXIS: f64 = 6_356_752.3142;

/// WGS-84 flattening
const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Iteration cap for the Vincenty lambda recursion
const VINCENTY_MAX_ITERATIONS: u32 = 20;

/// Convergence threshold for the Vincenty lambda recursion
const VINCENTY_EPSILON: f64 = 1e-12;

/// Hemisphere used by the degrees/minutes/seconds setters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hemisphere {
    /// North of the equator (positive latitude)
    North,
    /// South of the equator (negative latitude)
    South,
    /// East of Greenwich (positive longitude)
    East,
    /// West of Greenwich (negative longitude)
    West,
}

/// A named point on the earth with its elevation and civil time zone.
///
/// All coordinates are validated on construction and by the setters: latitude
/// must lie in [-90, 90], longitude in [-180, 180] (east positive) and the
/// elevation, in meters, must be finite and not negative.
///
/// # Example
///
/// ```
/// use zmanim::GeoLocation;
///
/// let lakewood = GeoLocation::from_tz_name("Lakewood, NJ", 40.09596, -74.22213, 0.0, "America/New_York").unwrap();
/// assert_eq!(lakewood.time_zone(), chrono_tz::America::New_York);
/// assert!(GeoLocation::new("Nowhere", 91.0, 0.0, 0.0, chrono_tz::UTC).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct GeoLocation {
    name: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    time_zone: Tz,
}

impl GeoLocation {
    /// Creates a validated location.
    ///
    /// # Errors
    ///
    /// Returns [`ZmanimError::LatitudeOutOfRange`], [`ZmanimError::LongitudeOutOfRange`]
    /// or [`ZmanimError::ElevationOutOfRange`] when a coordinate is invalid.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        time_zone: Tz,
    ) -> Result<Self, ZmanimError> {
        Ok(Self {
            name: name.into(),
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
            elevation: check_elevation(elevation)?,
            time_zone,
        })
    }

    /// Creates a validated location, resolving the time zone by its IANA name.
    ///
    /// # Errors
    ///
    /// Fails like [`GeoLocation::new`], or with [`ZmanimError::UnknownTimeZone`].
    pub fn from_tz_name(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        time_zone: &str,
    ) -> Result<Self, ZmanimError> {
        let tz = time_zone.parse::<Tz>().map_err(|_| ZmanimError::UnknownTimeZone {
            name: time_zone.to_string(),
        })?;
        Self::new(name, latitude, longitude, elevation, tz)
    }

    /// Greenwich, at sea level, in UTC.
    pub fn greenwich() -> Self {
        Self {
            name: "Greenwich, England".to_string(),
            latitude: 51.4772,
            longitude: 0.0,
            elevation: 0.0,
            time_zone: chrono_tz::UTC,
        }
    }

    /// Location name, used for display only.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees, north positive.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Elevation above sea level in meters.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Civil time zone used to localize results.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_time_zone(&mut self, time_zone: Tz) {
        self.time_zone = time_zone;
    }

    /// # Errors
    ///
    /// [`ZmanimError::LatitudeOutOfRange`] when outside [-90, 90]; the location is left unchanged.
    pub fn set_latitude(&mut self, latitude: f64) -> Result<(), ZmanimError> {
        self.latitude = check_latitude(latitude)?;
        Ok(())
    }

    /// # Errors
    ///
    /// [`ZmanimError::LongitudeOutOfRange`] when outside [-180, 180]; the location is left unchanged.
    pub fn set_longitude(&mut self, longitude: f64) -> Result<(), ZmanimError> {
        self.longitude = check_longitude(longitude)?;
        Ok(())
    }

    /// # Errors
    ///
    /// [`ZmanimError::ElevationOutOfRange`] when negative or not finite; the location is left unchanged.
    pub fn set_elevation(&mut self, elevation: f64) -> Result<(), ZmanimError> {
        self.elevation = check_elevation(elevation)?;
        Ok(())
    }

    /// Sets the latitude from degrees, minutes and seconds.
    ///
    /// # Errors
    ///
    /// Fails when the hemisphere is east/west or the resulting angle is out of range.
    pub fn set_latitude_dms(
        &mut self,
        degrees: u32,
        minutes: u32,
        seconds: f64,
        hemisphere: Hemisphere,
    ) -> Result<(), ZmanimError> {
        let magnitude = dms_to_degrees(degrees, minutes, seconds);
        let latitude = match hemisphere {
            Hemisphere::North => magnitude,
            Hemisphere::South => -magnitude,
            Hemisphere::East | Hemisphere::West => f64::NAN,
        };
        self.set_latitude(latitude)
    }

    /// Sets the longitude from degrees, minutes and seconds.
    ///
    /// # Errors
    ///
    /// Fails when the hemisphere is north/south or the resulting angle is out of range.
    pub fn set_longitude_dms(
        &mut self,
        degrees: u32,
        minutes: u32,
        seconds: f64,
        hemisphere: Hemisphere,
    ) -> Result<(), ZmanimError> {
        let magnitude = dms_to_degrees(degrees, minutes, seconds);
        let longitude = match hemisphere {
            Hemisphere::East => magnitude,
            Hemisphere::West => -magnitude,
            Hemisphere::North | Hemisphere::South => f64::NAN,
        };
        self.set_longitude(longitude)
    }

    /// Offset of local mean time from the zone's standard time at `instant`.
    ///
    /// Each degree of longitude is four minutes of mean solar time. Daylight
    /// saving time is ignored: only the zone's base UTC offset is subtracted,
    /// so Lakewood (-74.22213) yields +3 minutes 6.689 seconds in both
    /// winter and summer.
    pub fn local_mean_time_offset(&self, instant: DateTime<Utc>) -> TimeDelta {
        let standard = self
            .time_zone
            .offset_from_utc_datetime(&instant.naive_utc())
            .base_utc_offset();
        let solar = TimeDelta::milliseconds((self.longitude * 4.0 * MINUTE_MILLIS as f64) as i64);
        solar - standard
    }

    /// Initial bearing in degrees of the geodesic towards `other`.
    ///
    /// `None` when the Vincenty iteration fails to converge (nearly antipodal points).
    pub fn geodesic_initial_bearing(&self, other: &GeoLocation) -> Option<f64> {
        self.vincenty(other).map(|v| v.initial_bearing)
    }

    /// Bearing in degrees on arrival at `other` along the geodesic.
    pub fn geodesic_final_bearing(&self, other: &GeoLocation) -> Option<f64> {
        self.vincenty(other).map(|v| v.final_bearing)
    }

    /// Geodesic distance in meters to `other`.
    pub fn geodesic_distance(&self, other: &GeoLocation) -> Option<f64> {
        self.vincenty(other).map(|v| v.distance)
    }

    /// Constant bearing in degrees of the rhumb line towards `other`.
    pub fn rhumb_line_bearing(&self, other: &GeoLocation) -> f64 {
        let mut d_lon = (other.longitude - self.longitude).to_radians();
        let d_phi = mercator_stretch(other.latitude) - mercator_stretch(self.latitude);
        if d_lon.abs() > PI {
            d_lon = if d_lon > 0.0 { -(2.0 * PI - d_lon) } else { 2.0 * PI + d_lon };
        }
        d_lon.atan2(d_phi).to_degrees()
    }

    /// Rhumb line distance in meters to `other`.
    pub fn rhumb_line_distance(&self, other: &GeoLocation) -> f64 {
        let d_lat = other.latitude.to_radians() - self.latitude.to_radians();
        let mut d_lon = (other.longitude - self.longitude).abs().to_radians();
        let d_phi = mercator_stretch(other.latitude) - mercator_stretch(self.latitude);
        // East-west lines have no stretch; fall back to the parallel's scale.
        let q = if d_phi.abs() > 1e-12 { d_lat / d_phi } else { self.latitude.to_radians().cos() };
        if d_lon > PI {
            d_lon = 2.0 * PI - d_lon;
        }
        (d_lat * d_lat + q * q * d_lon * d_lon).sqrt() * WGS84_SEMI_MAJOR_AXIS
    }

    fn vincenty(&self, other: &GeoLocation) -> Option<Vincenty> {
        let a = WGS84_SEMI_MAJOR_AXIS;
        let b = WGS84_SEMI_MINOR_AXIS;
        let f = WGS84_FLATTENING;
        let l = (other.longitude - self.longitude).to_radians();
        let u1 = ((1.0 - f) * self.latitude.to_radians().tan()).atan();
        let u2 = ((1.0 - f) * other.latitude.to_radians().tan()).atan();
        let (sin_u1, cos_u1) = (u1.sin(), u1.cos());
        let (sin_u2, cos_u2) = (u2.sin(), u2.cos());

        let mut lambda = l;
        let mut lambda_prev = 2.0 * PI;
        let mut iterations = 0;
        let (mut sin_lambda, mut cos_lambda) = (0.0, 0.0);
        let (mut sin_sigma, mut cos_sigma, mut sigma) = (0.0, 0.0, 0.0);
        let (mut cos_sq_alpha, mut cos_2_sigma_m) = (0.0, 0.0);

        while (lambda - lambda_prev).abs() > VINCENTY_EPSILON {
            if iterations == VINCENTY_MAX_ITERATIONS {
                return None;
            }
            iterations += 1;
            sin_lambda = lambda.sin();
            cos_lambda = lambda.cos();
            let cross = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
            sin_sigma = ((cos_u2 * sin_lambda) * (cos_u2 * sin_lambda) + cross * cross).sqrt();
            if sin_sigma == 0.0 {
                // coincident points
                return Some(Vincenty {
                    distance: 0.0,
                    initial_bearing: 0.0,
                    final_bearing: 0.0,
                });
            }
            cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            cos_2_sigma_m = if cos_sq_alpha == 0.0 {
                // equatorial line
                0.0
            } else {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            };
            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            lambda_prev = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2_sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2_sigma_m * cos_2_sigma_m)));
        }

        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
        let delta_sigma = big_b
            * sin_sigma
            * (cos_2_sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2_sigma_m * cos_2_sigma_m)
                        - big_b / 6.0
                            * cos_2_sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2_sigma_m * cos_2_sigma_m)));

        Some(Vincenty {
            distance: b * big_a * (sigma - delta_sigma),
            initial_bearing: (cos_u2 * sin_lambda)
                .atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda)
                .to_degrees(),
            final_bearing: (cos_u1 * sin_lambda)
                .atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda)
                .to_degrees(),
        })
    }
}

impl PartialEq for GeoLocation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
            && self.elevation.to_bits() == other.elevation.to_bits()
            && self.time_zone == other.time_zone
    }
}

impl Eq for GeoLocation {}

impl Hash for GeoLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
        self.elevation.to_bits().hash(state);
        self.time_zone.name().hash(state);
    }
}

struct Vincenty {
    distance: f64,
    initial_bearing: f64,
    final_bearing: f64,
}

fn check_latitude(latitude: f64) -> Result<f64, ZmanimError> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(ZmanimError::LatitudeOutOfRange { latitude })
    }
}

fn check_longitude(longitude: f64) -> Result<f64, ZmanimError> {
    if (-180.0..=180.0).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(ZmanimError::LongitudeOutOfRange { longitude })
    }
}

fn check_elevation(elevation: f64) -> Result<f64, ZmanimError> {
    if elevation.is_finite() && elevation >= 0.0 {
        Ok(elevation)
    } else {
        Err(ZmanimError::ElevationOutOfRange { elevation })
    }
}

fn dms_to_degrees(degrees: u32, minutes: u32, seconds: f64) -> f64 {
    f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0
}

/// Isometric latitude used by the rhumb line formulas.
fn mercator_stretch(latitude: f64) -> f64 {
    (latitude.to_radians() / 2.0 + PI / 4.0).tan().ln()
}
