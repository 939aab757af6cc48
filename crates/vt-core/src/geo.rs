//! Geographic coordinate type and the coordinate-conversion seam.
//!
//! Vehicle positions arrive in the simulator's planar (x, y) frame; GPS-trace
//! collection needs WGS-84 latitude/longitude.  The conversion lives behind
//! the [`GeoProjector`] trait because only the simulator knows its network's
//! projection — the harness never reimplements it.

/// A WGS-84 geographic coordinate.
///
/// Stored as `f64`: exported GPS traces should carry the simulator's full
/// conversion precision rather than rounding at collection time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Converts simulator-frame planar coordinates to geographic coordinates.
///
/// Implemented by the simulator client (the conversion is part of its network
/// description).  Called lazily — only when a GPS sample is actually kept, so
/// disabled GPS collection costs nothing.
pub trait GeoProjector {
    fn to_geo(&self, x: f64, y: f64) -> GeoPoint;
}
