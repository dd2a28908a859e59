// TestDependencies - mock implementations for testing
//
// Provides a recording generator and a small fixture dataset so the
// dispatcher and HTTP layer can be exercised without a model backend.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseGenerator, ServerDeps};
use crate::common::{GenerationError, Result};
use crate::domains::directory::ServiceEntry;
use crate::domains::hospitals::Hospital;
use crate::domains::intents::Intent;

// =============================================================================
// Mock Generator
// =============================================================================

enum MockBehavior {
    Reply(String),
    Fail,
}

pub struct MockGenerator {
    behavior: MockBehavior,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            behavior: MockBehavior::Reply("Mock generated reply".to_string()),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.behavior = MockBehavior::Reply(reply.to_string());
        self
    }

    /// Every call fails with an API error
    pub fn failing(mut self) -> Self {
        self.behavior = MockBehavior::Fail;
        self
    }

    /// Sleep before answering (for timeout tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get all prompts received
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self) -> bool {
        !self.calls.lock().unwrap().is_empty()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behavior {
            MockBehavior::Reply(reply) => Ok(reply.clone()),
            MockBehavior::Fail => Err(GenerationError::Api("mock backend failure".to_string())),
        }
    }
}

// =============================================================================
// Fixture datasets
// =============================================================================

pub fn fixture_directory() -> Vec<ServiceEntry> {
    vec![
        ServiceEntry::new("Women Helpline", "1091"),
        ServiceEntry::new("Child Helpline", "1098"),
        ServiceEntry::new("Disaster Management", "1078"),
    ]
}

pub fn fixture_hospitals() -> Vec<Hospital> {
    vec![
        Hospital::new("Delhi", "New Delhi", "AIIMS", "01126588500"),
        Hospital::new("Maharashtra", "Pune", "Sassoon General Hospital", "02026128000"),
        Hospital::new("Maharashtra", "Pune", "Ruby Hall Clinic", "02066455100"),
        Hospital::new("Maharashtra", "Mumbai", "KEM Hospital", "02224107000"),
        Hospital::new("Karnataka", "Bengaluru Urban", "Victoria Hospital", "08026701150"),
    ]
}

pub fn fixture_intents() -> Vec<Intent> {
    vec![
        Intent::new(
            "greeting",
            &["hello", "hi there", "good morning"],
            &["Hello! Tell me what happened and I'll help you find the right number."],
        ),
        Intent::new(
            "burns",
            &["how to treat a burn", "I burned my hand"],
            &["Cool the burn under cool running water for 20 minutes. Do not apply ice."],
        ),
        Intent::new(
            "snake_bite",
            &["I was bitten by a snake", "snake bite first aid"],
            &["Keep still, keep the bitten limb below heart level and get to a hospital."],
        ),
    ]
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for [`ServerDeps`] over fixture data and a [`MockGenerator`]
pub struct TestDependencies {
    pub generator: Arc<MockGenerator>,
    pub directory: Vec<ServiceEntry>,
    pub hospitals: Vec<Hospital>,
    pub intents: Vec<Intent>,
    pub generation_timeout: Option<Duration>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            generator: Arc::new(MockGenerator::new()),
            directory: fixture_directory(),
            hospitals: fixture_hospitals(),
            intents: fixture_intents(),
            generation_timeout: None,
        }
    }

    pub fn mock_generator(mut self, generator: MockGenerator) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    pub fn with_directory(mut self, directory: Vec<ServiceEntry>) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_hospitals(mut self, hospitals: Vec<Hospital>) -> Self {
        self.hospitals = hospitals;
        self
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = Some(timeout);
        self
    }

    pub fn into_server_deps(self) -> Result<ServerDeps> {
        let deps = ServerDeps::new(
            self.directory,
            self.hospitals,
            &self.intents,
            self.generator,
        )?;
        Ok(match self.generation_timeout {
            Some(timeout) => deps.with_generation_timeout(timeout),
            None => deps,
        })
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
