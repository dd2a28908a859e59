use crate::common::text::location_after_in;

/// A non-empty, trimmed chat message with its lowercase form precomputed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    lowered: String,
}

impl Query {
    /// `None` for empty or whitespace-only input.
    pub fn parse(message: &str) -> Option<Self> {
        let text = message.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            lowered: text.to_lowercase(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn mentions_hospital(&self) -> bool {
        self.lowered.contains("hospital")
    }

    /// Lowercased text after the last `" in "`, if any.
    pub fn location(&self) -> Option<&str> {
        location_after_in(&self.lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_rejects_blank() {
        assert_eq!(Query::parse("  Hello  ").unwrap().text(), "Hello");
        assert!(Query::parse("").is_none());
        assert!(Query::parse(" \t\n ").is_none());
    }

    #[test]
    fn test_hospital_location() {
        let query = Query::parse("Hospitals in New Delhi").unwrap();
        assert!(query.mentions_hospital());
        assert_eq!(query.location(), Some("new delhi"));

        let query = Query::parse("nearest HOSPITAL please").unwrap();
        assert!(query.mentions_hospital());
        assert_eq!(query.location(), None);
    }
}
