use alloc::string::String;

use thiserror::Error;

/// Errors raised for malformed input.
///
/// A date or location where the sun never reaches the requested angle is not an
/// error: every solar query reports it as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZmanimError {
    /// Latitude outside [-90, 90] degrees
    #[error("latitude {latitude} is out of range [-90, 90]")]
    LatitudeOutOfRange {
        /// The rejected latitude.
        latitude: f64,
    },

    /// Longitude outside [-180, 180] degrees
    #[error("longitude {longitude} is out of range [-180, 180]")]
    LongitudeOutOfRange {
        /// The rejected longitude.
        longitude: f64,
    },

    /// Elevation below sea level or not finite
    #[error("elevation {elevation} must be a finite number of meters >= 0")]
    ElevationOutOfRange {
        /// The rejected elevation.
        elevation: f64,
    },

    /// Time zone name missing from the IANA database
    #[error("unknown time zone {name:?}")]
    UnknownTimeZone {
        /// The name that failed to resolve.
        name: String,
    },

    /// Jewish year/month/day combination that does not exist
    #[error("invalid Jewish date {year}-{month}-{day}")]
    InvalidJewishDate {
        /// Jewish year.
        year: i32,
        /// Month number, Nissan = 1.
        month: u8,
        /// Day of the month.
        day: u8,
    },

    /// Gregorian date earlier than 1 Tishrei of year 1
    #[error("{date} is before the start of the Jewish calendar")]
    DateBeforeJewishEpoch {
        /// The rejected date.
        date: chrono::NaiveDate,
    },

    /// Configuration value outside its allowed range
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Which side of solar noon an event belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Morning crossing of the zenith angle (sunrise, dawn).
    Sunrise,
    /// Evening crossing of the zenith angle (sunset, dusk).
    Sunset,
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_include_offending_value() {
        assert_eq!(
            ZmanimError::LatitudeOutOfRange { latitude: 91.0 }.to_string(),
            "latitude 91 is out of range [-90, 90]"
        );
        assert_eq!(
            ZmanimError::InvalidJewishDate { year: 5776, month: 13, day: 30 }.to_string(),
            "invalid Jewish date 5776-13-30"
        );
        assert_eq!(
            ZmanimError::UnknownTimeZone { name: "Mars/Olympus".into() }.to_string(),
            "unknown time zone \"Mars/Olympus\""
        );
    }

    #[test]
    fn error_is_core_error() {
        fn assert_impl<T: core::error::Error + Send + Sync>() {}
        assert_impl::<ZmanimError>();
    }
}
