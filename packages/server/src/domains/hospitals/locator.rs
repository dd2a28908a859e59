use tracing::debug;

use super::models::Hospital;

/// Maximum number of hospitals listed in one reply
pub const MAX_HOSPITALS: usize = 5;

pub const NO_HOSPITALS_FOUND: &str = "No hospitals found";

/// Filters the hospital table by state or district.
pub struct HospitalLocator {
    hospitals: Vec<Hospital>,
}

impl HospitalLocator {
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self { hospitals }
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    /// Up to [`MAX_HOSPITALS`] hospitals in table order, optionally restricted to a location.
    pub fn find_hospitals(&self, location: Option<&str>) -> Vec<&Hospital> {
        self.hospitals
            .iter()
            .filter(|h| location.map_or(true, |loc| h.is_in(loc)))
            .take(MAX_HOSPITALS)
            .collect()
    }

    /// Hospitals formatted one per line, or [`NO_HOSPITALS_FOUND`].
    pub fn describe(&self, location: Option<&str>) -> String {
        let hospitals = self.find_hospitals(location);
        debug!(location, found = hospitals.len(), "Hospital lookup");

        if hospitals.is_empty() {
            return NO_HOSPITALS_FOUND.to_string();
        }

        hospitals
            .iter()
            .map(|h| h.display_line())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
