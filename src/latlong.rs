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

//! The latlong module contains the `LatLong` type for representing positions
//! on the surface of a sphere.
//!
//! A `LatLong` stores its latitude and longitude in `Radians`.
//! The latitude lies in the range -PI/2 to PI/2 and the longitude is
//! normalised into the range -PI < longitude <= PI on construction.
//!
//! `LatLongs` are constructed from `Degrees` with `TryFrom`, which rejects
//! invalid latitudes and non-finite values rather than clamping them.
//! They are serialized and deserialized in `Degrees` using
//! [serde](https://crates.io/crates/serde).

pub mod geojson;

use crate::trig::{Degrees, Radians};
use crate::{clamp, Error, Validate};
use contracts::{debug_invariant, debug_requires};
use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A position as a latitude and longitude pair of `Radians`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLong {
    lat: Radians,
    lon: Radians,
}

impl Validate for LatLong {
    /// Test whether a `LatLong` is valid.
    /// I.e. whether the latitude lies in the range: -PI/2 <= value <= PI/2
    /// and the longitude lies in the range: -PI <= value <= PI
    fn is_valid(&self) -> bool {
        self.lat.is_valid_latitude() && self.lon.is_valid()
    }
}

#[debug_invariant(self.is_valid())]
impl LatLong {
    /// Construct a `LatLong` from a latitude and longitude in `Radians`.
    /// The longitude is normalised, the latitude must be valid.
    #[debug_requires(lat.is_valid_latitude())]
    #[must_use]
    pub fn new(lat: Radians, lon: Radians) -> Self {
        Self {
            lat,
            lon: lon.normalise(),
        }
    }

    #[must_use]
    pub fn lat(&self) -> Radians {
        self.lat
    }

    #[must_use]
    pub fn lon(&self) -> Radians {
        self.lon
    }

    /// The latitude in `Degrees`.
    #[must_use]
    pub fn lat_degrees(&self) -> Degrees {
        Degrees::from(self.lat)
    }

    /// The longitude in `Degrees`.
    #[must_use]
    pub fn lon_degrees(&self) -> Degrees {
        Degrees::from(self.lon)
    }
}

impl TryFrom<(Degrees, Degrees)> for LatLong {
    type Error = Error;

    /// Attempt to convert a latitude, longitude pair of `Degrees`.
    /// The longitude may take any finite value, it is normalised.
    ///
    /// # Errors
    ///
    /// `Error::InvalidLatitude` if the latitude is not in the range -90 to 90,
    /// `Error::InvalidLongitude` if the longitude is not finite.
    fn try_from(value: (Degrees, Degrees)) -> Result<Self, Self::Error> {
        let (lat, lon) = value;
        if !lat.is_valid_latitude() {
            return Err(Error::InvalidLatitude(lat.0));
        }
        if !lon.0.is_finite() {
            return Err(Error::InvalidLongitude(lon.0));
        }
        let lon = lon.normalise();

        // absorb any rounding in the conversion at the poles
        let lat = Radians(clamp(
            Radians::from(lat).0,
            -std::f64::consts::FRAC_PI_2,
            std::f64::consts::FRAC_PI_2,
        ));
        Ok(Self::new(lat, Radians::from(lon)))
    }
}

impl From<&LatLong> for (Degrees, Degrees) {
    /// Convert a `LatLong` to a latitude, longitude pair of `Degrees`.
    fn from(value: &LatLong) -> Self {
        (value.lat_degrees(), value.lon_degrees())
    }
}

impl std::fmt::Display for LatLong {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat_degrees().0, self.lon_degrees().0)
    }
}

impl Serialize for LatLong {
    /// Serialize a `LatLong` as a latitude and longitude in Degrees.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("LatLong", 2)?;
        state.serialize_field("lat", &self.lat_degrees())?;
        state.serialize_field("lon", &self.lon_degrees())?;
        state.end()
    }
}

/// The serialized form of a `LatLong`.
#[derive(Deserialize)]
struct DegreesLatLong {
    lat: Degrees,
    lon: Degrees,
}

impl<'de> Deserialize<'de> for LatLong {
    /// Deserialize a latitude and longitude in Degrees to a `LatLong`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = DegreesLatLong::deserialize(deserializer)?;
        Self::try_from((value.lat, value.lon)).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_within_tolerance;

    #[test]
    fn test_latlong_traits() {
        let a = LatLong::new(Radians(0.0), Radians(std::f64::consts::FRAC_PI_2));

        let a_clone = a.clone();
        assert!(a_clone == a);
        assert!(a.is_valid());

        print!("LatLong: {:?}", a);
        assert_eq!("(0.000000, 90.000000)", a.to_string());
    }

    #[test]
    fn test_latlong_normalises_longitude() {
        let a = LatLong::new(Radians(0.5), Radians(3.0 * std::f64::consts::FRAC_PI_2));
        assert!(is_within_tolerance(
            -std::f64::consts::FRAC_PI_2,
            a.lon().0,
            4.0 * std::f64::EPSILON
        ));

        let b = LatLong::new(Radians(0.5), Radians(-std::f64::consts::PI));
        assert_eq!(std::f64::consts::PI, b.lon().0);
    }

    #[test]
    fn test_latlong_try_from_degrees() {
        let a = LatLong::try_from((Degrees(90.0), Degrees(540.0))).unwrap();
        assert_eq!(std::f64::consts::FRAC_PI_2, a.lat().0);
        assert_eq!(std::f64::consts::PI, a.lon().0);
        assert_eq!(Degrees(90.0), a.lat_degrees());
        assert_eq!(Degrees(180.0), a.lon_degrees());

        let b = LatLong::try_from((Degrees(-45.0), Degrees(-190.0))).unwrap();
        let (lat, lon): (Degrees, Degrees) = (&b).into();
        assert!(is_within_tolerance(-45.0, lat.0, 32.0 * std::f64::EPSILON));
        assert!(is_within_tolerance(170.0, lon.0, 128.0 * std::f64::EPSILON));

        // longitudes are normalised in degrees, before conversion
        let c = LatLong::try_from((Degrees(0.0), Degrees(-180.0))).unwrap();
        assert_eq!(std::f64::consts::PI, c.lon().0);
        let d = LatLong::try_from((Degrees(0.0), Degrees(-270.0))).unwrap();
        assert_eq!(std::f64::consts::FRAC_PI_2, d.lon().0);

        assert_eq!(
            Err(Error::InvalidLatitude(90.01)),
            LatLong::try_from((Degrees(90.01), Degrees(0.0)))
        );
        assert!(matches!(
            LatLong::try_from((Degrees(f64::NAN), Degrees(0.0))),
            Err(Error::InvalidLatitude(_))
        ));
        assert_eq!(
            Err(Error::InvalidLongitude(f64::INFINITY)),
            LatLong::try_from((Degrees(0.0), Degrees(f64::INFINITY)))
        );
    }

    #[test]
    fn test_latlong_serde() {
        let a = LatLong::try_from((Degrees(30.0), Degrees(-60.0))).unwrap();

        let serialized = serde_json::to_string(&a).unwrap();
        assert!(serialized.starts_with("{\"lat\":"));

        let deserialized: LatLong = serde_json::from_str(&serialized).unwrap();
        assert!(is_within_tolerance(a.lat().0, deserialized.lat().0, 4.0 * std::f64::EPSILON));
        assert!(is_within_tolerance(a.lon().0, deserialized.lon().0, 4.0 * std::f64::EPSILON));

        let invalid = serde_json::from_str::<LatLong>("{\"lat\":91.0,\"lon\":0.0}");
        assert!(invalid.is_err());
    }
}
