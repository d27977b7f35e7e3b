// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A geographic position in degrees.
///
/// `lat` grows northwards and `lng` grows eastwards, matching the axis
/// convention used by Leaflet and by the pan controller (`+Y` is north,
/// `+X` is east).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a new position from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns this position moved by `d_lat`/`d_lng` degrees.
    #[must_use]
    pub fn offset(self, d_lat: f64, d_lng: f64) -> Self {
        Self::new(self.lat + d_lat, self.lng + d_lng)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// An axis-aligned geographic rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLngBounds {
    /// South-west corner (minimum latitude and longitude).
    pub south_west: LatLng,
    /// North-east corner (maximum latitude and longitude).
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Creates bounds from two opposite corners.
    ///
    /// The corners are normalized so that `south_west` holds the minima.
    #[must_use]
    pub fn new(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Returns the center of the bounds.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) * 0.5,
            (self.south_west.lng + self.north_east.lng) * 0.5,
        )
    }

    /// Returns `true` if `pt` lies inside or on the edge of the bounds.
    #[must_use]
    pub fn contains(&self, pt: LatLng) -> bool {
        pt.lat >= self.south_west.lat
            && pt.lat <= self.north_east.lat
            && pt.lng >= self.south_west.lng
            && pt.lng <= self.north_east.lng
    }

    /// Returns the closest position to `pt` that lies inside the bounds.
    ///
    /// Corners set directly through the public fields may be inverted; they
    /// are treated as if normalized by [`LatLngBounds::new`].
    #[must_use]
    pub fn clamp(&self, pt: LatLng) -> LatLng {
        let b = Self::new(self.south_west, self.north_east);
        LatLng::new(
            pt.lat.max(b.south_west.lat).min(b.north_east.lat),
            pt.lng.max(b.south_west.lng).min(b.north_east.lng),
        )
    }
}
