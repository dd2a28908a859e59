use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::common::{ResponderError, Result};

/// One emergency service and the number to dial for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub service: String,
    #[serde(deserialize_with = "number_as_text")]
    pub number: String,
}

impl ServiceEntry {
    pub fn new(service: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            number: number.into(),
        }
    }

    /// Load the service directory from a JSON array file, keeping file order.
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ResponderError::data_load(path, e))?;
        Self::parse_all(&raw).map_err(|e| ResponderError::data_load(path, e))
    }

    pub fn parse_all(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }

    /// Lowercased whitespace-separated words of the service name.
    pub fn keywords(&self) -> Vec<String> {
        self.service
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// `"<service>: <number>"`
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.service, self.number)
    }
}

// Directory files mix "112" and 112
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberField {
    Text(String),
    Integer(u64),
}

fn number_as_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberField::deserialize(deserializer)? {
        NumberField::Text(text) => text,
        NumberField::Integer(n) => n.to_string(),
    })
}
