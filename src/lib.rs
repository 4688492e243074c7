// Copyright (c) 2018-2024 Via Technology Ltd.

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

//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! This library uses spherical trigonometry to solve the navigation problems
//! of a spherical Earth:
//!
//! - the *direct* problem: the position at a distance and azimuth from a point;
//! - the *inverse* problem: the distance and azimuths between two points;
//! - the *angular* problem: a fix from two azimuths taken at two known points;
//! - the *linear* problem: a fix from two distances measured from two known points.
//!
//! The `trig`, `latlong` and `sphere` modules work in angular units on the
//! surface of a unit sphere. The `units` module converts between angular
//! and linear distances for a given Earth radius and the `engine` module
//! binds an `EarthModel` to the solvers, working in degrees.
//! The `ivac` module encodes and decodes IVAO/IVAC position strings.
//!
//! The library uses the [contracts](https://crates.io/crates/contracts) crate
//! to implement Design By Contract [(DbC)](https://wiki.c2.com/?DesignByContract).
//! It also defines a `Validate` trait to define an `is_valid` invariant
//! function to support Design By Contract invariants.
//!
//! Diagnostics are emitted through the [log](https://crates.io/crates/log)
//! facade; the library does not install a logger.
//!
//! # Examples
//! ```
//! use nav_sphere::{Degrees, Engine, LatLong, Units};
//!
//! let engine = Engine::from(Units::NauticalMiles);
//! let origin = LatLong::try_from((Degrees(51.4775), Degrees(-0.4614))).unwrap();
//! let result = engine.direct(&origin, 100.0, Degrees(90.0)).unwrap();
//!
//! let solution = engine.inverse(&origin, &result.position);
//! assert!((solution.distance - 100.0).abs() < 1.0e-9);
//! ```

pub mod engine;
pub mod error;
pub mod ivac;
pub mod latlong;
pub mod sphere;
pub mod trig;
pub mod units;

pub use engine::{DirectSolution, Engine, InverseSolution};
pub use error::{Error, Result};
pub use latlong::LatLong;
pub use sphere::intersection::{Failure, Side};
pub use trig::{Degrees, Radians};
pub use units::{EarthModel, Units};

use contracts::{debug_ensures, debug_requires};

/// Clamp value into the range: min to max inclusive.
/// * `value` - value to clamp
/// * `min` - minimum value.
/// * `max` - maximum value.
#[debug_ensures((min ..= max).contains(&ret))]
#[inline]
#[must_use]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy,
{
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

/// The Validate trait.
pub trait Validate {
    /// return true if the type is valid, false otherwise.
    fn is_valid(&self) -> bool;
}

/// Check whether a value is within tolerance of zero.
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if value is <= tolerance
#[debug_requires(value >= 0.0)]
#[inline]
#[must_use]
pub fn is_small(value: f64, tolerance: f64) -> bool {
    value <= tolerance
}

/// Check whether a value are within tolerance of a reference value.
/// * `reference` the required value
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if abs(reference - value) is <= tolerance
#[inline]
#[must_use]
pub fn is_within_tolerance(reference: f64, value: f64, tolerance: f64) -> bool {
    is_small(libm::fabs(reference - value), tolerance)
}
