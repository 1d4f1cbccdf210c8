use geo_types::{Coord, Point};

pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LNG_RANGE: (f64, f64) = (-180.0, 180.0);

/// One point of interest read from the CSV file.
///
/// Coordinates are always finite and within their geographic ranges; the
/// parser refuses to build a record otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct PointRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
}

impl PointRecord {
    /// Leaflet's `[lat, lng]` ordering.
    pub fn lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    /// Planar point in `x = longitude, y = latitude` order, as `geo` expects.
    pub fn point(&self) -> Point<f64> {
        Point::from(Coord {
            x: self.longitude,
            y: self.latitude,
        })
    }
}
