//! Server dependencies shared by every request
//!
//! Static datasets and the fitted similarity index are built once here and
//! never mutated afterwards. The generator is a trait object so tests can
//! swap in a mock.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::common::Result;
use crate::config::Config;
use crate::domains::directory::{LexicalMatcher, ServiceEntry};
use crate::domains::hospitals::{Hospital, HospitalLocator};
use crate::domains::intents::{Intent, IntentClassifier, ResponseTable, SimilarityIndex};
use crate::kernel::BaseGenerator;

/// Default limit on one generation call
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only state accessible to every dispatch stage
#[derive(Clone)]
pub struct ServerDeps {
    pub matcher: Arc<LexicalMatcher>,
    pub hospitals: Arc<HospitalLocator>,
    pub classifier: Arc<IntentClassifier>,
    pub responses: Arc<ResponseTable>,
    pub generator: Arc<dyn BaseGenerator>,
    pub generation_timeout: Duration,
}

impl ServerDeps {
    /// Build dependencies from already-parsed datasets.
    pub fn new(
        directory: Vec<ServiceEntry>,
        hospitals: Vec<Hospital>,
        intents: &[Intent],
        generator: Arc<dyn BaseGenerator>,
    ) -> Result<Self> {
        let responses = ResponseTable::from_intents(intents)?;
        let index = SimilarityIndex::build(Intent::examples(intents))?;

        Ok(Self {
            matcher: Arc::new(LexicalMatcher::new(directory)),
            hospitals: Arc::new(HospitalLocator::new(hospitals)),
            classifier: Arc::new(IntentClassifier::new(index)),
            responses: Arc::new(responses),
            generator,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
        })
    }

    /// Load every dataset named in the configuration.
    ///
    /// Any missing or malformed file is an error; there is no partial mode.
    pub fn load(config: &Config, generator: Arc<dyn BaseGenerator>) -> Result<Self> {
        let intents = Intent::load_all(&config.intents_path)?;
        let directory = ServiceEntry::load_all(&config.emergency_numbers_path)?;
        let hospitals = Hospital::load_all(&config.hospitals_path)?;

        info!(
            intents = intents.len(),
            services = directory.len(),
            hospitals = hospitals.len(),
            "Datasets loaded"
        );

        Ok(Self::new(directory, hospitals, &intents, generator)?
            .with_generation_timeout(config.generation_timeout))
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }
}
