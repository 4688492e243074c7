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

//! The units module contains the `Units` of linear distance and the
//! `EarthModel` used to convert between linear distances and great circle
//! distances on the unit sphere.
//!
//! # Examples
//! ```
//! use nav_sphere::{EarthModel, Radians, Units};
//!
//! let model = EarthModel::from(Units::NauticalMiles);
//! assert_eq!(3443.9, model.radius());
//! assert_eq!(Radians(1.0), model.to_radians(3443.9));
//! assert_eq!(3443.9, model.to_distance(Radians(1.0)));
//! ```

use crate::trig::Radians;
use crate::{Error, Validate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The mean radius of the Earth in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// The mean radius of the Earth in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3443.9;

/// The units of linear distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Units {
    #[default]
    #[serde(rename = "km")]
    Kilometres,
    #[serde(rename = "nm")]
    NauticalMiles,
}

impl Units {
    /// The radius of the Earth in these units.
    #[must_use]
    pub const fn earth_radius(self) -> f64 {
        match self {
            Self::Kilometres => EARTH_RADIUS_KM,
            Self::NauticalMiles => EARTH_RADIUS_NM,
        }
    }

    /// The unit tag: "km" or "nm".
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kilometres => "km",
            Self::NauticalMiles => "nm",
        }
    }
}

impl FromStr for Units {
    type Err = Error;

    /// Parse a unit tag, ignoring case.
    ///
    /// # Errors
    ///
    /// `Error::UnknownUnits` if the tag is not "km" or "nm".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("km") {
            Ok(Self::Kilometres)
        } else if tag.eq_ignore_ascii_case("nm") {
            Ok(Self::NauticalMiles)
        } else {
            log::debug!("unknown units: {s:?}");
            Err(Error::UnknownUnits(s.to_owned()))
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A spherical model of the Earth: its radius in a unit of linear distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct EarthModel {
    radius: f64,
}

impl Validate for EarthModel {
    /// Test whether the radius is finite and positive.
    fn is_valid(&self) -> bool {
        self.radius.is_finite() && 0.0 < self.radius
    }
}

impl EarthModel {
    /// Construct an `EarthModel` with the given radius.
    ///
    /// # Errors
    ///
    /// `Error::InvalidRadius` if the radius is not finite and positive.
    pub fn new(radius: f64) -> Result<Self, Error> {
        let model = Self { radius };
        if model.is_valid() {
            Ok(model)
        } else {
            log::debug!("invalid Earth radius: {radius}");
            Err(Error::InvalidRadius(radius))
        }
    }

    /// The radius of the Earth.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Convert a linear distance to a great circle distance on the unit sphere.
    #[must_use]
    pub const fn to_radians(&self, distance: f64) -> Radians {
        Radians(distance / self.radius)
    }

    /// Convert a great circle distance on the unit sphere to a linear distance.
    #[must_use]
    pub const fn to_distance(&self, distance: Radians) -> f64 {
        distance.0 * self.radius
    }
}

impl Default for EarthModel {
    fn default() -> Self {
        Self::from(Units::default())
    }
}

impl From<Units> for EarthModel {
    fn from(units: Units) -> Self {
        Self {
            radius: units.earth_radius(),
        }
    }
}

impl TryFrom<f64> for EarthModel {
    type Error = Error;

    fn try_from(radius: f64) -> Result<Self, Self::Error> {
        Self::new(radius)
    }
}

impl From<EarthModel> for f64 {
    fn from(model: EarthModel) -> Self {
        model.radius
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_units_traits() {
        assert_eq!(Units::Kilometres, Units::default());
        assert_eq!(6371.0, Units::Kilometres.earth_radius());
        assert_eq!(3443.9, Units::NauticalMiles.earth_radius());

        assert_eq!("km", Units::Kilometres.to_string());
        assert_eq!("nm", Units::NauticalMiles.to_string());
    }

    #[test]
    fn test_units_from_str() {
        assert_eq!(Ok(Units::Kilometres), "km".parse());
        assert_eq!(Ok(Units::Kilometres), "KM".parse());
        assert_eq!(Ok(Units::NauticalMiles), " Nm ".parse());
        assert_eq!(
            Err(Error::UnknownUnits(String::from("mi"))),
            "mi".parse::<Units>()
        );
    }

    #[test]
    fn test_units_serde() {
        assert_eq!("\"nm\"", serde_json::to_string(&Units::NauticalMiles).unwrap());
        assert_eq!(Units::Kilometres, serde_json::from_str("\"km\"").unwrap());
        assert!(serde_json::from_str::<Units>("\"miles\"").is_err());
    }

    #[test]
    fn test_earth_model_new() {
        let model = EarthModel::new(6378.137).unwrap();
        assert_eq!(6378.137, model.radius());
        assert!(model.is_valid());

        assert_eq!(Err(Error::InvalidRadius(0.0)), EarthModel::new(0.0));
        assert_eq!(Err(Error::InvalidRadius(-1.0)), EarthModel::new(-1.0));
        assert!(matches!(
            EarthModel::new(f64::NAN),
            Err(Error::InvalidRadius(_))
        ));
        assert_eq!(
            Err(Error::InvalidRadius(f64::INFINITY)),
            EarthModel::new(f64::INFINITY)
        );
    }

    #[test]
    fn test_earth_model_conversions() {
        let model = EarthModel::default();
        assert_eq!(EARTH_RADIUS_KM, model.radius());

        let distance = model.to_radians(1000.0);
        assert_eq!(1000.0 / 6371.0, distance.0);
        assert!(crate::is_within_tolerance(
            1000.0,
            model.to_distance(distance),
            1.0e-12
        ));

        assert_eq!(0.0, model.to_distance(model.to_radians(0.0)));
    }

    #[test]
    fn test_earth_model_serde() {
        let model = EarthModel::from(Units::NauticalMiles);
        let serialized = serde_json::to_string(&model).unwrap();
        assert_eq!("3443.9", serialized);

        let deserialized: EarthModel = serde_json::from_str(&serialized).unwrap();
        assert_eq!(model, deserialized);

        assert!(serde_json::from_str::<EarthModel>("-6371.0").is_err());
    }
}
