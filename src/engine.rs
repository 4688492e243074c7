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

//! The engine module contains the `Engine`: the navigation solvers bound to
//! an `EarthModel`.
//!
//! An `Engine` takes azimuths in `Degrees` and distances in the units of its
//! `EarthModel`, validates them, and calls the unit sphere solvers of the
//! `sphere` module. Positions are `LatLong`s, which are validated on
//! construction.
//!
//! An `Engine` holds no other state: to work in different units, construct
//! another `Engine`.

use crate::latlong::LatLong;
use crate::sphere::intersection::{
    calculate_angular_intersection, calculate_linear_intersection, Side,
};
use crate::sphere::{calculate_azimuth_and_distance, calculate_position};
use crate::trig::{Degrees, Radians};
use crate::units::{EarthModel, Units};
use crate::{Error, Result};
use serde::Serialize;

/// The solution of the *direct* problem.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DirectSolution {
    /// The position at the end of the path.
    pub position: LatLong,
    /// The azimuth from `position` back to the start of the path.
    pub reverse_azimuth: Degrees,
}

/// The solution of the *inverse* problem.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InverseSolution {
    /// The initial azimuth from the first position to the second.
    pub azimuth: Degrees,
    /// The initial azimuth from the second position back to the first.
    pub reverse_azimuth: Degrees,
    /// The great circle distance between the positions, in the units of
    /// the `EarthModel`.
    pub distance: f64,
}

/// Convert an azimuth to a bearing in `Radians`.
fn to_azimuth(azimuth: Degrees) -> Result<Radians> {
    if Degrees::is_bearing(azimuth.0) {
        Ok(Radians::from(azimuth))
    } else {
        log::debug!("invalid azimuth: {}", azimuth.0);
        Err(Error::InvalidAzimuth(azimuth.0))
    }
}

/// Convert `Radians` to an azimuth in `Degrees`: 0 <= azimuth < 360.
fn from_azimuth(azimuth: Radians) -> Degrees {
    Degrees::from(azimuth).to_bearing()
}

/// The navigation solvers for an `EarthModel`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Engine {
    model: EarthModel,
}

impl Engine {
    #[must_use]
    pub const fn new(model: EarthModel) -> Self {
        Self { model }
    }

    /// The `EarthModel` of the `Engine`.
    #[must_use]
    pub const fn model(&self) -> EarthModel {
        self.model
    }

    /// Convert a distance to a great circle distance on the unit sphere.
    fn to_radians(&self, distance: f64) -> Result<Radians> {
        if distance.is_finite() && 0.0 <= distance {
            Ok(self.model.to_radians(distance))
        } else {
            log::debug!("invalid distance: {distance}");
            Err(Error::InvalidDistance(distance))
        }
    }

    /// Convert a distance to a great circle distance on the unit sphere,
    /// no further than the antipode.
    fn to_radians_within_antipode(&self, distance: f64) -> Result<Radians> {
        let radians = self.to_radians(distance)?;
        if radians.0 <= std::f64::consts::PI {
            Ok(radians)
        } else {
            log::debug!("distance beyond the antipode: {distance}");
            Err(Error::InvalidDistance(distance))
        }
    }

    /// Calculate the position at a distance along an azimuth from a position,
    /// i.e. solve the *direct* problem.
    /// * `origin` - the start position.
    /// * `distance` - the distance in the units of the `EarthModel`.
    /// * `azimuth` - the initial azimuth from North: 0 <= azimuth <= 360
    ///
    /// returns the position at `distance` and the azimuth from it back to
    /// `origin`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidDistance` if `distance` is negative or not finite,
    /// `Error::InvalidAzimuth` if `azimuth` is not in the range 0 to 360.
    ///
    /// # Examples
    /// ```
    /// use nav_sphere::{Degrees, Engine, LatLong};
    ///
    /// let engine = Engine::default();
    /// let origin = LatLong::try_from((Degrees(0.0), Degrees(0.0))).unwrap();
    ///
    /// // a quarter of the circumference along the Equator
    /// let distance = engine.model().radius() * std::f64::consts::FRAC_PI_2;
    /// let result = engine.direct(&origin, distance, Degrees(90.0)).unwrap();
    /// assert!(result.position.lat_degrees().0.abs() < 1.0e-12);
    /// assert!((result.position.lon_degrees().0 - 90.0).abs() < 1.0e-12);
    /// assert!((result.reverse_azimuth.0 - 270.0).abs() < 1.0e-12);
    /// ```
    pub fn direct(
        &self,
        origin: &LatLong,
        distance: f64,
        azimuth: Degrees,
    ) -> Result<DirectSolution> {
        let azimuth = to_azimuth(azimuth)?;
        let distance = self.to_radians(distance)?;

        let position = calculate_position(origin, distance, azimuth);
        let (reverse_azimuth, _) = calculate_azimuth_and_distance(&position, origin);
        Ok(DirectSolution {
            position,
            reverse_azimuth: from_azimuth(reverse_azimuth),
        })
    }

    /// Calculate the azimuths and distance between two positions,
    /// i.e. solve the *inverse* problem.
    /// * `a`, `b` - the positions.
    ///
    /// If the positions are coincident both azimuths are zero.
    #[must_use]
    pub fn inverse(&self, a: &LatLong, b: &LatLong) -> InverseSolution {
        let (azimuth, distance) = calculate_azimuth_and_distance(a, b);
        let (reverse_azimuth, _) = calculate_azimuth_and_distance(b, a);
        InverseSolution {
            azimuth: from_azimuth(azimuth),
            reverse_azimuth: from_azimuth(reverse_azimuth),
            distance: self.model.to_distance(distance),
        }
    }

    /// The great circle distance between two positions in the units of the
    /// `EarthModel`.
    #[must_use]
    pub fn distance(&self, a: &LatLong, b: &LatLong) -> f64 {
        self.inverse(a, b).distance
    }

    /// The initial azimuth from position `a` to `b`.
    #[must_use]
    pub fn azimuth(&self, a: &LatLong, b: &LatLong) -> Degrees {
        self.inverse(a, b).azimuth
    }

    /// The bearing back to position `a` from `b`, i.e. the reverse azimuth.
    #[must_use]
    pub fn bearing(&self, a: &LatLong, b: &LatLong) -> Degrees {
        self.inverse(a, b).reverse_azimuth
    }

    /// Calculate the position where paths from two positions along the given
    /// azimuths meet, i.e. solve the *angular* problem.
    /// The solution does not depend on the radius of the `EarthModel`.
    /// * `a`, `b` - the known positions.
    /// * `azimuth_a`, `azimuth_b` - the azimuths from `a` and `b`:
    ///   0 <= azimuth <= 360
    ///
    /// # Errors
    ///
    /// `Error::InvalidAzimuth` if an azimuth is not in the range 0 to 360,
    /// `Error::NoIntersection` if the paths do not meet ahead of both positions.
    #[allow(clippy::unused_self)]
    pub fn angular_intersection(
        &self,
        a: &LatLong,
        b: &LatLong,
        azimuth_a: Degrees,
        azimuth_b: Degrees,
    ) -> Result<LatLong> {
        let azimuth_a = to_azimuth(azimuth_a)?;
        let azimuth_b = to_azimuth(azimuth_b)?;
        calculate_angular_intersection(a, b, azimuth_a, azimuth_b)
    }

    /// Calculate the position at the given distances from two positions,
    /// i.e. solve the *linear* problem.
    /// * `a`, `b` - the known positions.
    /// * `distance_a`, `distance_b` - the distances from `a` and `b` in the
    ///   units of the `EarthModel`.
    /// * `side` - the side of the path from `a` to `b` of the position.
    ///
    /// # Errors
    ///
    /// `Error::InvalidDistance` if a distance is negative, not finite or
    /// further than the antipode,
    /// `Error::NoIntersection` if the distance circles do not meet.
    pub fn linear_intersection(
        &self,
        a: &LatLong,
        b: &LatLong,
        distance_a: f64,
        distance_b: f64,
        side: Side,
    ) -> Result<LatLong> {
        let distance_a = self.to_radians_within_antipode(distance_a)?;
        let distance_b = self.to_radians_within_antipode(distance_b)?;
        calculate_linear_intersection(a, b, distance_a, distance_b, side)
    }
}

impl From<Units> for Engine {
    fn from(units: Units) -> Self {
        Self::new(EarthModel::from(units))
    }
}
