// Copyright (c) 2020-2024 Via Technology Ltd. All Rights Reserved.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The ivac module encodes and decodes latitudes and longitudes in the
//! fixed width position string format of IVAO/IVAC sector files:
//!
//! - a hemisphere prefix: `N` or `S` for a latitude, `E` or `W` for a longitude;
//! - whole degrees, zero padded to 2 digits for a latitude, 3 for a longitude;
//! - whole minutes, zero padded to 2 digits;
//! - whole seconds, zero padded to 2 digits;
//! - fractions of a second, without a separator.
//!
//! E.g. 51.4775 N is "N51283900" and 0.4614 W is "W000274104".
//!
//! The format holds hundredths of a second, so encoding rounds to the
//! nearest hundredth of a second.

use crate::trig::Degrees;
use crate::{Error, Result};

/// The type of coordinate in a position string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl Coordinate {
    /// The prefixes of the positive and negative hemispheres.
    const fn prefixes(self) -> (char, char) {
        match self {
            Self::Latitude => ('N', 'S'),
            Self::Longitude => ('E', 'W'),
        }
    }

    /// The width of the degrees field.
    const fn degree_digits(self) -> usize {
        match self {
            Self::Latitude => 2,
            Self::Longitude => 3,
        }
    }

    /// The maximum magnitude in degrees.
    const fn limit(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }

    const fn from_prefix(prefix: char) -> Option<(Self, bool)> {
        match prefix {
            'N' => Some((Self::Latitude, false)),
            'S' => Some((Self::Latitude, true)),
            'E' => Some((Self::Longitude, false)),
            'W' => Some((Self::Longitude, true)),
            _ => None,
        }
    }

    const fn invalid(self, value: f64) -> Error {
        match self {
            Self::Latitude => Error::InvalidLatitude(value),
            Self::Longitude => Error::InvalidLongitude(value),
        }
    }
}

/// The number of hundredths of a second in a degree.
const HUNDREDTHS_PER_DEGREE: f64 = 360_000.0;

/// Encode a latitude or longitude as a position string.
/// * `value` - the latitude or longitude.
/// * `coordinate` - whether `value` is a latitude or a longitude.
///
/// returns the position string, rounded to the nearest hundredth of a second.
///
/// # Errors
///
/// `Error::InvalidLatitude` or `Error::InvalidLongitude` if `value` is not
/// finite or beyond 90 or 180 degrees respectively.
///
/// # Examples
/// ```
/// use nav_sphere::ivac::{encode, Coordinate};
/// use nav_sphere::Degrees;
///
/// assert_eq!("N51283900", encode(Degrees(51.4775), Coordinate::Latitude).unwrap());
/// assert_eq!("W000274104", encode(Degrees(-0.4614), Coordinate::Longitude).unwrap());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode(value: Degrees, coordinate: Coordinate) -> Result<String> {
    let magnitude = libm::fabs(value.0);
    if !magnitude.is_finite() || coordinate.limit() < magnitude {
        log::debug!("position out of range: {}", value.0);
        return Err(coordinate.invalid(value.0));
    }

    // magnitude is finite, non-negative and at most 180 degrees
    let total = libm::round(magnitude * HUNDREDTHS_PER_DEGREE) as u64;
    let hundredths = total % 100;
    let seconds = (total / 100) % 60;
    let minutes = (total / 6_000) % 60;
    let degrees = total / 360_000;

    let (positive, negative) = coordinate.prefixes();
    let prefix = if value.0 < 0.0 && 0 < total {
        negative
    } else {
        positive
    };
    Ok(format!(
        "{prefix}{degrees:0width$}{minutes:02}{seconds:02}{hundredths:02}",
        width = coordinate.degree_digits()
    ))
}

fn invalid_position(value: &str, reason: &'static str) -> Error {
    log::debug!("invalid position string {value:?}: {reason}");
    Error::InvalidPosition {
        value: value.to_owned(),
        reason,
    }
}

/// Decode a position string.
/// * `value` - the position string, any number of fractional second digits
///   may follow the seconds.
///
/// returns the latitude or longitude in `Degrees`, negative in the
/// Southern and Western hemispheres.
///
/// # Errors
///
/// `Error::InvalidPosition` if `value` is not a valid position string.
///
/// # Examples
/// ```
/// use nav_sphere::ivac::decode;
///
/// let lat = decode("N51283900").unwrap();
/// assert!((lat.0 - 51.4775).abs() < 1.0e-12);
///
/// let lon = decode("W000274104").unwrap();
/// assert!((lon.0 + 0.4614).abs() < 1.0e-12);
/// ```
pub fn decode(value: &str) -> Result<Degrees> {
    let mut chars = value.chars();
    let (coordinate, is_negative) = chars
        .next()
        .and_then(Coordinate::from_prefix)
        .ok_or_else(|| invalid_position(value, "unknown prefix"))?;

    let digits = chars.as_str();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_position(value, "expected digits"));
    }

    let width = coordinate.degree_digits();
    if digits.len() < width + 4 {
        return Err(invalid_position(value, "too short"));
    }

    let field = |range: std::ops::Range<usize>| {
        digits[range]
            .parse::<u32>()
            .map_err(|_| invalid_position(value, "expected digits"))
    };
    let degrees = field(0..width)?;
    let minutes = field(width..width + 2)?;
    if 60 <= minutes {
        return Err(invalid_position(value, "minutes out of range"));
    }

    let fraction = &digits[width + 4..];
    let seconds = format!(
        "{}.{}",
        &digits[width + 2..width + 4],
        if fraction.is_empty() { "0" } else { fraction }
    )
    .parse::<f64>()
    .map_err(|_| invalid_position(value, "expected digits"))?;
    if 60.0 <= seconds {
        return Err(invalid_position(value, "seconds out of range"));
    }

    let magnitude = f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0;
    if coordinate.limit() < magnitude {
        return Err(invalid_position(value, "out of range"));
    }

    let value = Degrees(magnitude);
    Ok(if is_negative { -value } else { value })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::is_within_tolerance;

    #[test]
    fn test_encode_latitude() {
        assert_eq!("N51283900", encode(Degrees(51.4775), Coordinate::Latitude).unwrap());
        assert_eq!("S33564596", encode(Degrees(-33.9461), Coordinate::Latitude).unwrap());
        assert_eq!("N00000000", encode(Degrees(0.0), Coordinate::Latitude).unwrap());
        assert_eq!("N90000000", encode(Degrees(90.0), Coordinate::Latitude).unwrap());
        assert_eq!("S90000000", encode(Degrees(-90.0), Coordinate::Latitude).unwrap());
    }

    #[test]
    fn test_encode_longitude() {
        assert_eq!("W000274104", encode(Degrees(-0.4614), Coordinate::Longitude).unwrap());
        assert_eq!("W073464404", encode(Degrees(-73.7789), Coordinate::Longitude).unwrap());
        assert_eq!("E151103792", encode(Degrees(151.1772), Coordinate::Longitude).unwrap());
        assert_eq!("E000000000", encode(Degrees(0.0), Coordinate::Longitude).unwrap());
        assert_eq!("W180000000", encode(Degrees(-180.0), Coordinate::Longitude).unwrap());
    }

    #[test]
    fn test_encode_rounding() {
        // rounds up into the next degree
        assert_eq!("N60000000", encode(Degrees(59.999_999), Coordinate::Latitude).unwrap());
        // a tiny negative value rounds to zero in the positive hemisphere
        assert_eq!("E000000000", encode(Degrees(-1.0e-9), Coordinate::Longitude).unwrap());
        assert_eq!("N00000000", encode(Degrees(-0.0), Coordinate::Latitude).unwrap());
    }

    #[test]
    fn test_encode_invalid() {
        assert_eq!(
            Err(Error::InvalidLatitude(90.5)),
            encode(Degrees(90.5), Coordinate::Latitude)
        );
        assert_eq!(
            Err(Error::InvalidLongitude(-180.5)),
            encode(Degrees(-180.5), Coordinate::Longitude)
        );
        assert!(matches!(
            encode(Degrees(f64::NAN), Coordinate::Latitude),
            Err(Error::InvalidLatitude(_))
        ));
        assert_eq!(
            Err(Error::InvalidLongitude(f64::INFINITY)),
            encode(Degrees(f64::INFINITY), Coordinate::Longitude)
        );
    }

    #[test]
    fn test_decode() {
        assert!(is_within_tolerance(51.4775, decode("N51283900").unwrap().0, 1.0e-12));
        assert!(is_within_tolerance(-33.9461, decode("S33564596").unwrap().0, 1.0e-12));
        assert!(is_within_tolerance(-0.4614, decode("W000274104").unwrap().0, 1.0e-12));
        assert!(is_within_tolerance(180.0, decode("E180000000").unwrap().0, 1.0e-12));
        assert_eq!(0.0, decode("N00000000").unwrap().0);
    }

    #[test]
    fn test_decode_fractional_seconds() {
        // no fractional digits
        assert!(is_within_tolerance(51.4775, decode("N512839").unwrap().0, 1.0e-12));
        // one fractional digit
        assert!(is_within_tolerance(
            51.0 + 28.0 / 60.0 + 39.5 / 3600.0,
            decode("N5128395").unwrap().0,
            1.0e-12
        ));
        // more than two fractional digits
        assert!(is_within_tolerance(
            51.0 + 28.0 / 60.0 + 39.125 / 3600.0,
            decode("N51283912500").unwrap().0,
            1.0e-12
        ));
    }

    #[test]
    fn test_decode_invalid() {
        let reason = |value: &str| match decode(value) {
            Err(Error::InvalidPosition { reason, .. }) => reason,
            other => panic!("unexpected result: {other:?}"),
        };

        assert_eq!("unknown prefix", reason(""));
        assert_eq!("unknown prefix", reason("X51283900"));
        assert_eq!("unknown prefix", reason("n51283900"));
        assert_eq!("expected digits", reason("N51A83900"));
        assert_eq!("expected digits", reason("N51 283900"));
        assert_eq!("expected digits", reason("N-1283900"));
        assert_eq!("too short", reason("N5128"));
        assert_eq!("too short", reason("E000274"));
        assert_eq!("minutes out of range", reason("N51603900"));
        assert_eq!("seconds out of range", reason("N51286000"));
        assert_eq!("out of range", reason("N91000000"));
        assert_eq!("out of range", reason("W180000001"));
    }

    #[test]
    fn test_encode_decode() {
        let max_error = 0.5 / HUNDREDTHS_PER_DEGREE + 1.0e-12;
        for i in -90..=90_i32 {
            let value = Degrees(f64::from(i) * 1.987_654_321);
            let coordinate = if Degrees::is_latitude(value.0) {
                Coordinate::Latitude
            } else {
                Coordinate::Longitude
            };
            let text = encode(value, coordinate).unwrap();
            assert!(is_within_tolerance(value.0, decode(&text).unwrap().0, max_error));
        }
    }
}
