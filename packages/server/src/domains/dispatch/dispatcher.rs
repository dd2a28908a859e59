use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::query::Query;
use super::stages::{
    first_reply, EmergencyStage, GenerationStage, HospitalStage, IntentStage, ReplySource, Stage,
};
use crate::common::Result;
use crate::kernel::{BaseGenerator, ServerDeps};

pub const INVALID_QUERY_REPLY: &str = "Please enter a valid query";

/// Progress of one message through the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Received,
    CheckedEmergency,
    CheckedHospital,
    CheckedIntent,
    Fallback,
    Responded,
}

impl DispatchState {
    /// State reached once the classifying stage for `source` has passed.
    /// `None` for sources that are not classifying stages.
    fn passed(source: ReplySource) -> Option<Self> {
        match source {
            ReplySource::Emergency => Some(Self::CheckedEmergency),
            ReplySource::Hospital => Some(Self::CheckedHospital),
            ReplySource::Intent => Some(Self::CheckedIntent),
            ReplySource::InvalidQuery | ReplySource::Generated => None,
        }
    }
}

/// A reply and the stage it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

impl Reply {
    pub fn invalid_query() -> Self {
        Self {
            text: INVALID_QUERY_REPLY.to_string(),
            source: ReplySource::InvalidQuery,
        }
    }
}

/// Runs classifying stages in order, then the generative fallback.
///
/// No stage runs more than once per message and there is no retry.
pub struct Dispatcher {
    stages: Vec<Box<dyn Stage>>,
    fallback: GenerationStage,
}

impl Dispatcher {
    /// Emergency numbers, then hospitals, then intents, then generation.
    pub fn new(deps: &ServerDeps) -> Self {
        let stages: Vec<Box<dyn Stage>> = vec![
            Box::new(EmergencyStage::new(deps.matcher.clone())),
            Box::new(HospitalStage::new(deps.hospitals.clone())),
            Box::new(IntentStage::new(
                deps.classifier.clone(),
                deps.responses.clone(),
            )),
        ];
        Self::with_stages(stages, deps.generator.clone(), deps.generation_timeout)
    }

    pub fn with_stages(
        stages: Vec<Box<dyn Stage>>,
        generator: Arc<dyn BaseGenerator>,
        generation_timeout: Duration,
    ) -> Self {
        Self {
            stages,
            fallback: GenerationStage::new(generator, generation_timeout),
        }
    }

    pub async fn dispatch(&self, message: &str) -> Result<Reply> {
        let Some(query) = Query::parse(message) else {
            debug!(state = ?DispatchState::Responded, "Empty message rejected");
            return Ok(Reply::invalid_query());
        };

        let (state, answered) = self.run_stages(&query);

        if let Some((source, text)) = answered {
            debug!(?state, ?source, "Stage answered");
            return Ok(Reply { text, source });
        }

        debug!(?state, "No stage answered");
        debug!(state = ?DispatchState::Fallback, "Falling back to generation");

        let text = self.fallback.respond(&query).await?;
        debug!(state = ?DispatchState::Responded, "Generated reply");

        Ok(Reply {
            text,
            source: ReplySource::Generated,
        })
    }

    /// Run the classifying stages, returning the state reached when the chain
    /// stopped: the last stage that passed before one answered, or the last
    /// stage overall when none did.
    fn run_stages(&self, query: &Query) -> (DispatchState, Option<(ReplySource, String)>) {
        let mut state = DispatchState::Received;
        let mut pending: Option<ReplySource> = None;

        // The next stage is only pulled once the previous one returned None
        let answered = first_reply(
            self.stages.iter().map(|stage| {
                if let Some(passed) = pending.replace(stage.source()) {
                    state = DispatchState::passed(passed).unwrap_or(state);
                }
                &**stage
            }),
            query,
        );

        if answered.is_none() {
            if let Some(passed) = pending {
                state = DispatchState::passed(passed).unwrap_or(state);
            }
        }

        (state, answered)
    }
}
