//! Stockholm-region locations for realistic test fixtures.
//!
//! Coordinates are approximate public landmarks (WGS84).

use fleet_router::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    /// Longitude-first coordinate, as used on the wire.
    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lng, self.lat)
    }
}

// ============================================================================
// Depots (vehicle start/end)
// ============================================================================

pub const CENTRAL_STATION: Location = Location::new("Stockholm Central", 59.3303, 18.0586);
pub const SOLNA: Location = Location::new("Mall of Scandinavia", 59.3703, 18.0046);
pub const SODERTALJE: Location = Location::new("Södertälje centrum", 59.1955, 17.6253);
pub const GOTHENBURG: Location = Location::new("Göteborg Central", 57.7089, 11.9746);

// ============================================================================
// Inner-city jobs (all well inside 50 km of the centre)
// ============================================================================

pub const CITY_JOBS: &[Location] = &[
    Location::new("Stortorget", 59.3251, 18.0711),
    Location::new("Medborgarplatsen", 59.3142, 18.0735),
    Location::new("Stureplan", 59.3355, 18.0737),
    Location::new("Fridhemsplan", 59.3320, 18.0290),
    Location::new("Odenplan", 59.3430, 18.0497),
    Location::new("Skansen", 59.3267, 18.1037),
    Location::new("Bromma flygplats", 59.3544, 17.9416),
    Location::new("Nacka Forum", 59.3103, 18.1634),
    Location::new("Kista Galleria", 59.4032, 17.9445),
    Location::new("Täby centrum", 59.4439, 18.0687),
];

// ============================================================================
// Regional jobs
// ============================================================================

/// ~37 km north of the centre.
pub const ARLANDA: Location = Location::new("Arlanda", 59.6519, 17.9186);

/// ~63 km from the centre, ~28 km from Arlanda.
pub const UPPSALA: Location = Location::new("Uppsala domkyrka", 59.8581, 17.6330);

/// Far beyond reach of any Stockholm depot.
pub const REMOTE_JOBS: &[Location] = &[
    Location::new("Västerås", 59.6099, 16.5448),
    Location::new("Nyköping", 58.7530, 17.0086),
    Location::new("Malmö", 55.6050, 13.0038),
];
