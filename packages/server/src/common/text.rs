use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Two or more word characters between word boundaries
    static ref TOKEN_REGEX: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Split text into lowercase word tokens for vectorization.
///
/// Single-character words and punctuation are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract the location of an already-lowercased query.
///
/// The query is split on `" in "` left to right without overlap and the last
/// piece is the location, so `"hospital in in pune"` yields `"in pune"`.
/// Returns `None` when the query has no `" in "` or nothing follows it.
pub fn location_after_in(lowered: &str) -> Option<&str> {
    if !lowered.contains(" in ") {
        return None;
    }
    let location = lowered.split(" in ").last()?.trim();
    if location.is_empty() {
        None
    } else {
        Some(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_short_words_and_punctuation() {
        assert_eq!(
            tokenize("I got a Snake-bite, help!"),
            vec!["got", "snake", "bite", "help"]
        );
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(tokenize("call 108 now"), vec!["call", "108", "now"]);
    }

    #[test]
    fn test_location_uses_last_occurrence() {
        assert_eq!(
            location_after_in("hospitals in india in pune "),
            Some("pune")
        );
    }

    #[test]
    fn test_location_separators_do_not_overlap() {
        assert_eq!(location_after_in("hospital in in pune"), Some("in pune"));
    }

    #[test]
    fn test_location_absent() {
        assert_eq!(location_after_in("nearest hospital"), None);
        assert_eq!(location_after_in("hospital in   "), None);
        // "inside" is not the " in " separator
        assert_eq!(location_after_in("hospital inside campus"), None);
    }
}
