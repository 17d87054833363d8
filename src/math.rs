#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Computes the floored modulo operation (Python-style modulo).
///
/// Unlike Rust's `%` operator which can return negative values, this function
/// always returns a non-negative result in the range [0, m).
///
/// # Examples
///
/// ```
/// # fn floored_mod(x: f64, m: f64) -> f64 { ((x % m) + m) % m }
/// assert_eq!(floored_mod(7.0, 3.0), 1.0);
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);  // Unlike -7 % 3 which would be -1
/// assert_eq!(floored_mod(25.5, 24.0), 1.5);
/// ```
pub(crate) fn floored_mod(x: f64, m: f64) -> f64 {
    ((x % m) + m) % m
}

/// Sine of an angle given in degrees.
pub(crate) fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees.
pub(crate) fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Tangent of an angle given in degrees.
pub(crate) fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

/// Arcsine returning degrees.
pub(crate) fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine returning degrees. NaN when `x` lies outside [-1, 1].
pub(crate) fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Wraps an hour value into [0, 24). NaN passes through untouched.
pub(crate) fn wrap_hours(mut hours: f64) -> f64 {
    while hours < 0.0 {
        hours += 24.0;
    }
    while hours >= 24.0 {
        hours -= 24.0;
    }
    hours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floored_mod_is_never_negative() {
        assert_eq!(floored_mod(-1.0, 24.0), 23.0);
        assert_eq!(floored_mod(48.0, 24.0), 0.0);
    }

    #[test]
    fn acos_out_of_domain_is_nan() {
        assert!(acos_deg(1.5).is_nan());
        assert!((acos_deg(0.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_hours_keeps_nan() {
        assert!(wrap_hours(f64::NAN).is_nan());
        assert!((wrap_hours(-0.5) - 23.5).abs() < 1e-12);
        assert!((wrap_hours(49.0) - 1.0).abs() < 1e-12);
    }
}
