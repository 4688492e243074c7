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

//! The sphere module contains functions for calculating distances, azimuths
//! and positions on the surface of a unit sphere.
//!
//! All distances on the surface of the unit sphere are measured in radians.
//! Physical distances can be calculated by multiplying by the radius of the
//! sphere, see the `units` module.
//!
//! - `calculate_azimuth_and_distance` solves the *inverse* problem: the
//!   initial azimuth and great circle distance of one position from another.
//! - `calculate_position` solves the *direct* problem: the position at a
//!   great circle distance along an azimuth from a position.
//!
//! The `intersection` module uses them to solve the *angular* and *linear*
//! intersection problems.

#![allow(clippy::float_cmp, clippy::suboptimal_flops)]

pub mod intersection;

use crate::latlong::LatLong;
use crate::trig::{haversine, Radians, UnitNegRange};
use crate::{is_small, Validate};
use contracts::{debug_ensures, debug_requires};

/// The minimum sine of an angle that is not treated as zero.
pub const MIN_SIN_ANGLE: f64 = 16384.0 * std::f64::EPSILON;

/// Calculate the great circle distance between two positions.
/// It uses the haversine formula, which is well conditioned for both
/// close and nearly antipodal positions.
/// * `a`, `b` - the positions.
///
/// returns the great circle distance in radians: 0 <= distance <= PI
#[debug_requires(a.is_valid() && b.is_valid())]
#[debug_ensures((0.0..=std::f64::consts::PI).contains(&ret.0))]
#[must_use]
pub fn calculate_gc_distance(a: &LatLong, b: &LatLong) -> Radians {
    let h = haversine(b.lat() - a.lat())
        + a.lat().cos() * b.lat().cos() * haversine(b.lon() - a.lon());
    let h = UnitNegRange::clamp(h);
    Radians(2.0 * libm::atan2(libm::sqrt(h.0), libm::sqrt(1.0 - h.0)))
}

/// Calculate the initial azimuth of the great circle from position a to b.
/// * `a`, `b` - the positions.
///
/// returns the azimuth relative to North: 0 <= azimuth < 2 * PI
#[debug_requires(a.is_valid() && b.is_valid())]
#[must_use]
pub fn calculate_gc_azimuth(a: &LatLong, b: &LatLong) -> Radians {
    let delta_long = b.lon() - a.lon();
    let sin_azimuth = delta_long.sin() * b.lat().cos();
    let cos_azimuth =
        a.lat().cos() * b.lat().sin() - a.lat().sin() * b.lat().cos() * delta_long.cos();
    Radians(libm::atan2(sin_azimuth, cos_azimuth)).to_bearing()
}

/// Calculate the azimuth and distance along the great circle of point b from
/// point a, i.e. solve the *inverse* problem.
/// * `a`, `b` - the start and end positions
///
/// returns the Great Circle azimuth relative to North and distance of point b
/// from point a.
/// If the positions are coincident the azimuth is zero.
/// If the positions are antipodal every azimuth is valid, the azimuth
/// returned is not geometrically meaningful.
#[debug_requires(a.is_valid() && b.is_valid())]
#[must_use]
pub fn calculate_azimuth_and_distance(a: &LatLong, b: &LatLong) -> (Radians, Radians) {
    let distance = calculate_gc_distance(a, b);
    if is_small(distance.0, std::f64::EPSILON) {
        (Radians(0.0), distance)
    } else {
        (calculate_gc_azimuth(a, b), distance)
    }
}

/// Calculate the position at a great circle distance along an azimuth from
/// position a, i.e. solve the *direct* problem.
/// * `a` - the start position.
/// * `distance` - the great circle distance, must not be negative.
/// * `azimuth` - the initial azimuth relative to North.
///
/// returns the position at the end of the great circle path.
#[debug_requires(a.is_valid() && distance.0.is_finite() && 0.0 <= distance.0)]
#[debug_ensures(ret.is_valid())]
#[must_use]
pub fn calculate_position(a: &LatLong, distance: Radians, azimuth: Radians) -> LatLong {
    if distance.0 == 0.0 {
        return *a;
    }

    let (sin_lat, cos_lat) = (a.lat().sin(), a.lat().cos());
    let (sin_d, cos_d) = (distance.sin(), distance.cos());
    let (sin_az, cos_az) = (azimuth.sin(), azimuth.cos());

    let lat = UnitNegRange::clamp(sin_lat * cos_d + cos_lat * sin_d * cos_az).asin();

    // cos_lat is factored out of both terms, so the longitude is defined at the poles
    let delta_long = Radians(libm::atan2(
        sin_az * sin_d,
        cos_lat * cos_d - sin_lat * sin_d * cos_az,
    ));

    LatLong::new(lat, a.lon() + delta_long)
}
