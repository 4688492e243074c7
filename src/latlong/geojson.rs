// Copyright (c) 2024 Via Technology Ltd. All Rights Reserved.

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

//! The `geojson` module converts `LatLong`s to and from
//! [geo-types](https://crates.io/crates/geo-types) coordinates,
//! see: [RFC7946](https://datatracker.ietf.org/doc/html/rfc7946).
//!
//! Note: `geo_types` coordinate order is **lon, lat**, in degrees.

use crate::latlong::LatLong;
use crate::trig::Degrees;
use crate::Error;

impl TryFrom<&geo_types::Coord> for LatLong {
    type Error = Error;

    /// Attempt to convert a `geo_types::Coord` to a `LatLong`.
    fn try_from(item: &geo_types::Coord) -> Result<Self, Self::Error> {
        Self::try_from((Degrees(item.y), Degrees(item.x)))
    }
}

impl From<&LatLong> for geo_types::Coord {
    fn from(a: &LatLong) -> Self {
        Self {
            x: a.lon_degrees().0,
            y: a.lat_degrees().0,
        }
    }
}

impl TryFrom<&geo_types::Point> for LatLong {
    type Error = Error;

    /// Attempt to convert a `geo_types::Point` to a `LatLong`.
    fn try_from(item: &geo_types::Point) -> Result<Self, Self::Error> {
        Self::try_from(&item.0)
    }
}

impl From<&LatLong> for geo_types::Point {
    fn from(a: &LatLong) -> Self {
        Self::new(a.lon_degrees().0, a.lat_degrees().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_within_tolerance;

    #[test]
    fn test_latlong_geo_types_coord() {
        let coord = geo_types::Coord { x: 4.5, y: 50.9 };
        let a = LatLong::try_from(&coord).unwrap();
        assert!(is_within_tolerance(50.9, a.lat_degrees().0, 1.0e-12));
        assert!(is_within_tolerance(4.5, a.lon_degrees().0, 1.0e-12));

        let result = geo_types::Coord::from(&a);
        assert!(is_within_tolerance(coord.x, result.x, 1.0e-12));
        assert!(is_within_tolerance(coord.y, result.y, 1.0e-12));

        // latitude and longitude swapped
        let swapped = geo_types::Coord { x: 50.9, y: 104.5 };
        assert_eq!(
            Err(Error::InvalidLatitude(104.5)),
            LatLong::try_from(&swapped)
        );
    }

    #[test]
    fn test_latlong_geo_types_point() {
        let point = geo_types::Point::new(-0.4614, 51.4775);
        let a = LatLong::try_from(&point).unwrap();
        assert!(is_within_tolerance(51.4775, a.lat_degrees().0, 1.0e-12));

        let result = geo_types::Point::from(&a);
        assert!(is_within_tolerance(point.x(), result.x(), 1.0e-12));
        assert!(is_within_tolerance(point.y(), result.y(), 1.0e-12));
    }
}
