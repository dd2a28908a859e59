use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{ResponderError, Result};

/// A labeled category of query with example phrases and canned replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub tag: String,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct IntentsFile {
    intents: Vec<Intent>,
}

/// One example phrase and the tag it illustrates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentExample {
    pub tag: String,
    pub phrase: String,
}

impl Intent {
    pub fn new(tag: impl Into<String>, patterns: &[&str], responses: &[&str]) -> Self {
        Self {
            tag: tag.into(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Load intents from a `{"intents": [...]}` JSON file.
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ResponderError::data_load(path, e))?;
        Self::parse_all(&raw).map_err(|e| ResponderError::data_load(path, e))
    }

    pub fn parse_all(json: &str) -> serde_json::Result<Vec<Self>> {
        let file: IntentsFile = serde_json::from_str(json)?;
        Ok(file.intents)
    }

    /// Every pattern of every intent, in file order.
    pub fn examples(intents: &[Intent]) -> Vec<IntentExample> {
        intents
            .iter()
            .flat_map(|intent| {
                intent.patterns.iter().map(move |phrase| IntentExample {
                    tag: intent.tag.clone(),
                    phrase: phrase.clone(),
                })
            })
            .collect()
    }
}

/// Tag to canned reply. Only the first response of each intent is used.
#[derive(Debug, Clone, Default)]
pub struct ResponseTable {
    replies: HashMap<String, String>,
}

impl ResponseTable {
    /// Build the table, rejecting intents that have no response at all.
    ///
    /// A tag defined twice keeps the reply of its last definition.
    pub fn from_intents(intents: &[Intent]) -> Result<Self> {
        let mut replies = HashMap::with_capacity(intents.len());
        for intent in intents {
            let reply = intent.responses.first().ok_or_else(|| {
                ResponderError::InvalidData(format!("intent '{}' has no responses", intent.tag))
            })?;
            replies.insert(intent.tag.clone(), reply.clone());
        }
        Ok(Self { replies })
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.replies.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}
