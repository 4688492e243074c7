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

//! The intersection module contains functions for calculating the third
//! vertex of a spherical triangle from two known vertices, given either:
//!
//! - the azimuths from the known vertices to the third vertex, the
//!   *angular* intersection, see `calculate_angular_intersection`;
//! - the distances from the known vertices to the third vertex, the
//!   *linear* intersection, see `calculate_linear_intersection`.
//!
//! Both are solved in closed form with the spherical law of cosines.
//! A problem without a solution returns `Error::NoIntersection` with the
//! `Failure` that was detected; a position is never returned in its place.

#![allow(clippy::similar_names)]

use super::{
    calculate_azimuth_and_distance, calculate_gc_azimuth, calculate_gc_distance,
    calculate_position, MIN_SIN_ANGLE,
};
use crate::latlong::LatLong;
use crate::trig::Radians;
use crate::{clamp, is_small, is_within_tolerance, Error, Result, Validate};
use contracts::debug_requires;
use serde::{Deserialize, Serialize};

/// The tolerance permitted on the half angle of a linear intersection,
/// and on the distance to a point circle, before the circles are disjoint.
pub const INTERSECTION_TOLERANCE: f64 = 1.0e-10;

/// The reason that an intersection has no solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    /// The known points are the same point: there are infinitely many solutions.
    CoincidentPoints,
    /// The known points are antipodal: every great circle passes through both.
    AntipodalPoints,
    /// Both azimuths lie along the great circle between the known points.
    CollinearAzimuths,
    /// The azimuths point away from each other.
    DivergentAzimuths,
    /// The distance circles do not meet.
    DisjointCircles,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::CoincidentPoints => "points are coincident",
            Self::AntipodalPoints => "points are antipodal",
            Self::CollinearAzimuths => "azimuths are collinear",
            Self::DivergentAzimuths => "azimuths diverge",
            Self::DisjointCircles => "circles do not intersect",
        };
        f.write_str(text)
    }
}

/// The side of the great circle from the first to the second known point
/// on which a linear intersection lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Counter-clockwise from the great circle, flag 0.
    Left,
    /// Clockwise from the great circle, flag 1.
    Right,
}

impl From<bool> for Side {
    /// true is clockwise, i.e. `Side::Right`.
    fn from(clockwise: bool) -> Self {
        if clockwise {
            Self::Right
        } else {
            Self::Left
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = Error;

    /// Convert a side flag: 0 is `Side::Left`, 1 is `Side::Right`.
    fn try_from(flag: u8) -> Result<Self> {
        match flag {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            _ => Err(Error::InvalidSide(flag)),
        }
    }
}

fn no_intersection(failure: Failure) -> Error {
    log::debug!("no intersection: {failure}");
    Error::NoIntersection(failure)
}

/// Check that the known points define a unique great circle.
/// returns the azimuth and distance of b from a.
fn known_points(a: &LatLong, b: &LatLong) -> Result<(Radians, Radians)> {
    let (azimuth, distance) = calculate_azimuth_and_distance(a, b);
    if is_small(libm::fabs(distance.sin()), MIN_SIN_ANGLE) {
        return Err(no_intersection(
            if distance.0 < std::f64::consts::FRAC_PI_2 {
                Failure::CoincidentPoints
            } else {
                Failure::AntipodalPoints
            },
        ));
    }
    Ok((azimuth, distance))
}

/// Calculate the position where great circles from two points along the
/// given azimuths intersect, i.e. solve the *angular* problem.
///
/// The intersection is ahead of both points along their azimuths,
/// not the antipodal intersection of the great circles.
/// * `a`, `b` - the known points.
/// * `azimuth_a`, `azimuth_b` - the azimuths from `a` and `b` to the unknown point.
///
/// returns the intersection position.
///
/// # Errors
///
/// `Error::NoIntersection` with:
/// - `Failure::CoincidentPoints` or `Failure::AntipodalPoints` if `a` and `b`
///   do not define a unique great circle;
/// - `Failure::CollinearAzimuths` if both azimuths lie along the great circle
///   between `a` and `b`;
/// - `Failure::DivergentAzimuths` if the azimuths point away from each other.
#[debug_requires(a.is_valid() && b.is_valid())]
pub fn calculate_angular_intersection(
    a: &LatLong,
    b: &LatLong,
    azimuth_a: Radians,
    azimuth_b: Radians,
) -> Result<LatLong> {
    let (azimuth_ab, distance_ab) = known_points(a, b)?;
    let azimuth_ba = calculate_gc_azimuth(b, a);

    // the interior angles of the triangle at a and b, signed by direction
    let alpha_1 = azimuth_a - azimuth_ab;
    let alpha_2 = azimuth_ba - azimuth_b;
    let sin_alpha_1 = alpha_1.sin();
    let sin_alpha_2 = alpha_2.sin();

    let along_ab = is_small(libm::fabs(sin_alpha_1), MIN_SIN_ANGLE);
    let along_ba = is_small(libm::fabs(sin_alpha_2), MIN_SIN_ANGLE);
    match (along_ab, along_ba) {
        (true, true) => return Err(no_intersection(Failure::CollinearAzimuths)),
        // azimuth_a lies along the great circle: it meets the other at b
        (true, false) => {
            return if 0.0 < alpha_1.cos() {
                Ok(*b)
            } else {
                Err(no_intersection(Failure::DivergentAzimuths))
            };
        }
        (false, true) => {
            return if 0.0 < alpha_2.cos() {
                Ok(*a)
            } else {
                Err(no_intersection(Failure::DivergentAzimuths))
            };
        }
        (false, false) => {}
    }

    if sin_alpha_1 * sin_alpha_2 < 0.0 {
        return Err(no_intersection(Failure::DivergentAzimuths));
    }

    let alpha_1 = alpha_1.abs();
    let alpha_2 = alpha_2.abs();
    let (sin_alpha_1, cos_alpha_1) = (alpha_1.sin(), alpha_1.cos());
    let (sin_alpha_2, cos_alpha_2) = (alpha_2.sin(), alpha_2.cos());

    // the angle at the unknown point, from the law of cosines for angles
    let cos_alpha_3 =
        sin_alpha_1 * sin_alpha_2 * distance_ab.cos() - cos_alpha_1 * cos_alpha_2;
    let distance_ac = Radians(libm::atan2(
        distance_ab.sin() * sin_alpha_1 * sin_alpha_2,
        cos_alpha_2 + cos_alpha_1 * cos_alpha_3,
    ));

    let c = calculate_position(a, distance_ac, azimuth_a);
    log::trace!("angular intersection: {c}, {} radians from {a}", distance_ac.0);
    Ok(c)
}

/// Calculate the position at the given distances from two points,
/// i.e. solve the *linear* problem.
///
/// The two distance circles intersect at up to two positions, `side`
/// selects the position to the left or right of the great circle from `a`
/// to `b`.
/// * `a`, `b` - the known points.
/// * `distance_a`, `distance_b` - the distances from `a` and `b` to the
///   unknown point: 0 <= distance <= PI.
/// * `side` - the side of the great circle from `a` to `b`.
///
/// returns the intersection position.
///
/// # Errors
///
/// `Error::NoIntersection` with:
/// - `Failure::CoincidentPoints` or `Failure::AntipodalPoints` if `a` and `b`
///   do not define a unique great circle;
/// - `Failure::DisjointCircles` if the distance circles do not meet.
#[debug_requires(a.is_valid() && b.is_valid()
              && (0.0..=std::f64::consts::PI).contains(&distance_a.0)
              && (0.0..=std::f64::consts::PI).contains(&distance_b.0))]
pub fn calculate_linear_intersection(
    a: &LatLong,
    b: &LatLong,
    distance_a: Radians,
    distance_b: Radians,
    side: Side,
) -> Result<LatLong> {
    let (azimuth_ab, distance_ab) = known_points(a, b)?;

    // sin(distance_ab) is not small, see known_points
    if is_small(libm::fabs(distance_a.sin()), MIN_SIN_ANGLE) {
        // the circle about a is a point: a or its antipode
        let c = calculate_position(a, distance_a, azimuth_ab);
        return if is_within_tolerance(
            distance_b.0,
            calculate_gc_distance(&c, b).0,
            INTERSECTION_TOLERANCE,
        ) {
            Ok(c)
        } else {
            Err(no_intersection(Failure::DisjointCircles))
        };
    }

    // the half angle formula for the angle at a
    let s = 0.5 * (distance_ab.0 + distance_a.0 + distance_b.0);
    let sq_sin_half_angle = libm::sin(s - distance_a.0) * libm::sin(s - distance_ab.0)
        / (distance_a.sin() * distance_ab.sin());
    if !(-INTERSECTION_TOLERANCE..=1.0 + INTERSECTION_TOLERANCE).contains(&sq_sin_half_angle) {
        return Err(no_intersection(Failure::DisjointCircles));
    }

    let angle = Radians(2.0 * libm::asin(libm::sqrt(clamp(sq_sin_half_angle, 0.0, 1.0))));
    let azimuth = match side {
        Side::Left => azimuth_ab - angle,
        Side::Right => azimuth_ab + angle,
    };

    let c = calculate_position(a, distance_a, azimuth);
    log::trace!("linear intersection: {c}, {side:?} of {a}");
    Ok(c)
}
