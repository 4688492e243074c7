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

//! The error module contains the `Error` type returned by the library.

use crate::sphere::intersection::Failure;

/// The errors reported by the library.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// An angular or linear intersection has no solution.
    #[error("no intersection: {0}")]
    NoIntersection(Failure),

    #[error("invalid latitude: {0} degrees")]
    InvalidLatitude(f64),

    #[error("invalid longitude: {0} degrees")]
    InvalidLongitude(f64),

    #[error("invalid azimuth: {0} degrees")]
    InvalidAzimuth(f64),

    #[error("invalid distance: {0}")]
    InvalidDistance(f64),

    #[error("invalid Earth radius: {0}")]
    InvalidRadius(f64),

    #[error("invalid side flag: {0}, expected 0 or 1")]
    InvalidSide(u8),

    /// A position string that could not be decoded.
    #[error("invalid position string {value:?}: {reason}")]
    InvalidPosition { value: String, reason: &'static str },

    #[error("unknown units: {0:?}, expected \"km\" or \"nm\"")]
    UnknownUnits(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::NoIntersection(Failure::DivergentAzimuths);
        assert_eq!("no intersection: azimuths diverge", error.to_string());

        let error = Error::InvalidLatitude(91.0);
        assert_eq!("invalid latitude: 91 degrees", error.to_string());

        let error = Error::InvalidPosition {
            value: String::from("X1234"),
            reason: "unknown prefix",
        };
        assert_eq!(
            "invalid position string \"X1234\": unknown prefix",
            error.to_string()
        );

        let error = Error::UnknownUnits(String::from("mi"));
        assert_eq!(
            "unknown units: \"mi\", expected \"km\" or \"nm\"",
            error.to_string()
        );
    }
}
