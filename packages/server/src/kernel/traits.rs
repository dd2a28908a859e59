// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to prompt for lives in the dispatch domain.
//
// Naming convention: Base* for trait names (e.g., BaseGenerator)

use async_trait::async_trait;

use crate::common::GenerationError;

// =============================================================================
// Generator Trait (Infrastructure - text-in/text-out LLM capability)
// =============================================================================

#[async_trait]
pub trait BaseGenerator: Send + Sync {
    /// Generate a free-text continuation for a prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
