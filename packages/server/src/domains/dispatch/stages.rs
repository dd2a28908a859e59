//! Stage handlers of the dispatch chain.
//!
//! Each classifying stage answers with `Some(reply)` or passes with `None`.
//! The generative stage is terminal: it always answers or fails.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use super::query::Query;
use crate::common::{GenerationError, Result};
use crate::domains::directory::LexicalMatcher;
use crate::domains::hospitals::HospitalLocator;
use crate::domains::intents::{IntentClassifier, ResponseTable};
use crate::kernel::BaseGenerator;

pub const PROMPT_PREFIX: &str = "Emergency context: ";

/// Which part of the chain produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    InvalidQuery,
    Emergency,
    Hospital,
    Intent,
    Generated,
}

pub trait Stage: Send + Sync {
    fn source(&self) -> ReplySource;

    fn respond(&self, query: &Query) -> Option<String>;
}

/// First stage, in order, that produces a reply.
pub fn first_reply<'a, S>(
    stages: impl IntoIterator<Item = &'a S>,
    query: &Query,
) -> Option<(ReplySource, String)>
where
    S: Stage + ?Sized + 'a,
{
    stages
        .into_iter()
        .find_map(|stage| stage.respond(query).map(|reply| (stage.source(), reply)))
}

// =============================================================================
// Emergency numbers
// =============================================================================

pub struct EmergencyStage {
    matcher: Arc<LexicalMatcher>,
}

impl EmergencyStage {
    pub fn new(matcher: Arc<LexicalMatcher>) -> Self {
        Self { matcher }
    }
}

impl Stage for EmergencyStage {
    fn source(&self) -> ReplySource {
        ReplySource::Emergency
    }

    fn respond(&self, query: &Query) -> Option<String> {
        self.matcher.find_emergency_number(query.text())
    }
}

// =============================================================================
// Hospital lookup
// =============================================================================

/// Runs only for queries mentioning "hospital"; always answers when it runs.
pub struct HospitalStage {
    locator: Arc<HospitalLocator>,
}

impl HospitalStage {
    pub fn new(locator: Arc<HospitalLocator>) -> Self {
        Self { locator }
    }
}

impl Stage for HospitalStage {
    fn source(&self) -> ReplySource {
        ReplySource::Hospital
    }

    fn respond(&self, query: &Query) -> Option<String> {
        if !query.mentions_hospital() {
            return None;
        }
        Some(self.locator.describe(query.location()))
    }
}

// =============================================================================
// Intent similarity
// =============================================================================

pub struct IntentStage {
    classifier: Arc<IntentClassifier>,
    responses: Arc<ResponseTable>,
}

impl IntentStage {
    pub fn new(classifier: Arc<IntentClassifier>, responses: Arc<ResponseTable>) -> Self {
        Self {
            classifier,
            responses,
        }
    }
}

impl Stage for IntentStage {
    fn source(&self) -> ReplySource {
        ReplySource::Intent
    }

    fn respond(&self, query: &Query) -> Option<String> {
        let matched = self.classifier.classify(query.text())?;
        self.responses.get(&matched.tag).map(str::to_string)
    }
}

// =============================================================================
// Generative fallback
// =============================================================================

pub struct GenerationStage {
    generator: Arc<dyn BaseGenerator>,
    timeout: Duration,
}

impl GenerationStage {
    pub fn new(generator: Arc<dyn BaseGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub fn prompt_for(query: &Query) -> String {
        format!("{}{}", PROMPT_PREFIX, query.text())
    }

    pub async fn respond(&self, query: &Query) -> Result<String> {
        let prompt = Self::prompt_for(query);
        info!(prompt_length = prompt.len(), "Falling back to generation");

        match tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => {
                warn!(error = %e, "Generation failed");
                Err(e.into())
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "Generation timed out");
                Err(GenerationError::Timeout(self.timeout).into())
            }
        }
    }
}
