use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{ResponderError, Result};

/// A hospital row from the hospital table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "Hospital_Name")]
    pub name: String,
    #[serde(rename = "Emergency_Num")]
    pub emergency_number: String,
}

impl Hospital {
    pub fn new(
        state: impl Into<String>,
        district: impl Into<String>,
        name: impl Into<String>,
        emergency_number: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            district: district.into(),
            name: name.into(),
            emergency_number: emergency_number.into(),
        }
    }

    /// Load the hospital table from a CSV file with a header row, keeping row order.
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| ResponderError::data_load(path, e))?;
        Self::parse_all(file).map_err(|e| ResponderError::data_load(path, e))
    }

    pub fn parse_all<R: Read>(reader: R) -> csv::Result<Vec<Self>> {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader)
            .deserialize()
            .collect()
    }

    /// Case-insensitive exact match on state or district.
    pub fn is_in(&self, location: &str) -> bool {
        let location = location.to_lowercase();
        self.state.to_lowercase() == location || self.district.to_lowercase() == location
    }

    /// `"name (district) - number"`
    pub fn display_line(&self) -> String {
        format!("{} ({}) - {}", self.name, self.district, self.emergency_number)
    }
}
