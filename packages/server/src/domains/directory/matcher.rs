//! Keyword lookup of emergency numbers.

use tracing::debug;

use super::models::ServiceEntry;

/// Checked in order when no directory entry matches.
pub const FALLBACK_NUMBERS: [(&str, &str); 4] = [
    ("fire", "Fire: 101"),
    ("police", "Police: 100"),
    ("ambulance", "Ambulance: 102"),
    ("emergency", "National Emergency Number: 112"),
];

struct IndexedService {
    entry: ServiceEntry,
    keywords: Vec<String>,
}

/// Matches queries against the service directory, then the fixed fallbacks.
pub struct LexicalMatcher {
    services: Vec<IndexedService>,
}

impl LexicalMatcher {
    pub fn new(directory: Vec<ServiceEntry>) -> Self {
        let services = directory
            .into_iter()
            .map(|entry| IndexedService {
                keywords: entry.keywords(),
                entry,
            })
            .collect();
        Self { services }
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Find the emergency number a query is asking for.
    ///
    /// A directory entry matches when any word of its service name occurs
    /// anywhere in the lowercased query, so "firefighters" matches a "Fire"
    /// service. The first matching entry in directory order wins.
    pub fn find_emergency_number(&self, query: &str) -> Option<String> {
        let query = query.to_lowercase();

        if let Some(service) = self
            .services
            .iter()
            .find(|s| s.keywords.iter().any(|kw| query.contains(kw.as_str())))
        {
            debug!(service = %service.entry.service, "Directory service matched");
            return Some(service.entry.display_line());
        }

        FALLBACK_NUMBERS
            .iter()
            .find(|(keyword, _)| query.contains(keyword))
            .map(|(keyword, reply)| {
                debug!(keyword, "Fallback emergency keyword matched");
                reply.to_string()
            })
    }
}
