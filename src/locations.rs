//! Location-name resolution. The chart builder only needs a `(lat, lon)`
//! pair; anything can sit behind [`ResolveLocation`]. The built-in
//! [`CityDirectory`] is a static table of well-known cities.

use tracing::warn;

use crate::Location;

/// Resolves a place name to geographic coordinates. Total: implementations
/// never fail, they degrade to [`Location::ORIGIN`] for unknown names.
pub trait ResolveLocation {
    fn resolve(&self, name: &str) -> Location;
}

/// Built-in directory of city coordinates (latitude, longitude).
pub struct CityDirectory;

const CITIES: [(&str, f64, f64); 25] = [
    ("New York, NY", 40.7128, -74.0060),
    ("Los Angeles, CA", 34.0522, -118.2437),
    ("Chicago, IL", 41.8781, -87.6298),
    ("Houston, TX", 29.7604, -95.3698),
    ("Phoenix, AZ", 33.4484, -112.0740),
    ("Philadelphia, PA", 39.9526, -75.1652),
    ("San Antonio, TX", 29.4241, -98.4936),
    ("San Diego, CA", 32.7157, -117.1611),
    ("Dallas, TX", 32.7767, -96.7970),
    ("San Jose, CA", 37.3382, -121.8863),
    ("London, UK", 51.5074, -0.1278),
    ("Paris, France", 48.8566, 2.3522),
    ("Tokyo, Japan", 35.6762, 139.6503),
    ("Sydney, Australia", -33.8688, 151.2093),
    ("Toronto, Canada", 43.6532, -79.3832),
    ("Berlin, Germany", 52.5200, 13.4050),
    ("Madrid, Spain", 40.4168, -3.7038),
    ("Rome, Italy", 41.9028, 12.4964),
    ("Beijing, China", 39.9042, 116.4074),
    ("Moscow, Russia", 55.7558, 37.6173),
    ("Dubai, UAE", 25.2048, 55.2708),
    ("Singapore", 1.3521, 103.8198),
    ("Mumbai, India", 19.0760, 72.8777),
    ("São Paulo, Brazil", -23.5505, -46.6333),
    ("Mexico City, Mexico", 19.4326, -99.1332),
];

impl ResolveLocation for CityDirectory {
    fn resolve(&self, name: &str) -> Location {
        match CITIES.iter().find(|(city, _, _)| *city == name) {
            Some(&(_, latitude, longitude)) => Location {
                latitude,
                longitude,
            },
            None => {
                warn!(
                    location = name,
                    "unknown birth location, falling back to the equator/prime-meridian origin"
                );
                Location::ORIGIN
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn known_cities_resolve_to_their_coordinates() {
        let directory = CityDirectory;
        let new_york = directory.resolve("New York, NY");
        assert_relative_eq!(new_york.latitude, 40.7128);
        assert_relative_eq!(new_york.longitude, -74.0060);

        let sydney = directory.resolve("Sydney, Australia");
        assert_relative_eq!(sydney.latitude, -33.8688);
        assert_relative_eq!(sydney.longitude, 151.2093);
    }

    #[test]
    fn unknown_names_fall_back_to_the_origin() {
        let directory = CityDirectory;
        assert_eq!(directory.resolve("Atlantis"), Location::ORIGIN);
        assert_eq!(directory.resolve(""), Location::ORIGIN);
        // Lookup is exact, not fuzzy.
        assert_eq!(directory.resolve("new york, ny"), Location::ORIGIN);
    }

    #[test]
    fn directory_has_no_duplicate_entries() {
        for (index, (name, _, _)) in CITIES.iter().enumerate() {
            assert!(
                CITIES[index + 1..].iter().all(|(other, _, _)| other != name),
                "{} listed twice",
                name
            );
        }
    }
}
