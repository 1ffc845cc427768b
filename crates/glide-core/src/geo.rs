//! Geographic coordinate type and spherical geometry.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  The engine
//! compares coordinates for *exact* equality — a marker that was committed at
//! a route vertex must compare equal to that vertex after a polyline decode
//! round-trip — and f64 is what the codec's fixed-precision integers divide
//! back into losslessly.

/// A WGS-84 geographic coordinate in degrees.
///
/// Equality is exact field comparison, no epsilon.  Animation and re-slicing
/// decisions branch on "is the marker already at this vertex?", and the
/// engine always commits sampled positions before comparing, so the equal
/// case is bit-identical rather than merely close.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial bearing (forward azimuth) from `self` to `other`, in degrees.
    ///
    /// Range is (−180, 180]; 0° is true north, 90° east.  Callers that feed
    /// this into a heading animation use the raw numeric value — no mod-360
    /// normalization happens here or downstream.
    pub fn bearing_to(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        y.atan2(x).to_degrees()
    }

    /// Per-axis linear interpolation from `self` toward `other`.
    ///
    /// `f` is not clamped here; callers clamp their elapsed fraction first.
    #[inline]
    pub fn lerp(self, other: GeoPoint, f: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * f,
            lon: self.lon + (other.lon - self.lon) * f,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
