//! Token extraction from raw class names.
//!
//! Each extractor works directly on the raw name and is independent of the
//! others: waiting-list markers, gender words and youth age brackets.
//! Skill levels are handled by the [`cascade`](crate::cascade).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cascade::{Gender, YouthAge};

// Gender patterns, tried in order. The word lists do not overlap.
//
// Word boundaries in this crate are ASCII-only: `æ`, `ø` and `å` count as
// separators, so "Mixæ" and "35år" still expose their tokens.
static GENDER_PATTERNS: Lazy<[(Regex, Gender); 5]> = Lazy::new(|| {
    [
        (Regex::new(r"(?i)(?-u:\b)(herrer|herre)(?-u:\b)").unwrap(), Gender::Herrer),
        (
            Regex::new(r"(?i)(?-u:\b)(damer|dame|dames|damespeed|kvinder|kvinde)(?-u:\b)")
                .unwrap(),
            Gender::Damer,
        ),
        (Regex::new(r"(?i)(?-u:\b)mix(?-u:\b)").unwrap(), Gender::Mix),
        (Regex::new(r"(?i)(?-u:\b)drenge(?-u:\b)").unwrap(), Gender::Drenge),
        (Regex::new(r"(?i)(?-u:\b)piger(?-u:\b)").unwrap(), Gender::Piger),
    ]
});

static YOUTH_AGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?-u:\b)U(12|14|16|18)(?-u:\b)").unwrap());

// Danish "venteliste" and English "waiting list" / "waitinglist"
static WAITING_LIST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)venteliste|waiting\s*list").unwrap());

/// Whether the class is a waiting-list queue rather than a real division.
pub fn is_waiting_list(name: &str) -> bool {
    WAITING_LIST_PATTERN.is_match(name)
}

/// Extract the normalized gender word, if any.
pub fn extract_gender(name: &str) -> Option<Gender> {
    GENDER_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(name))
        .map(|(_, gender)| *gender)
}

/// Extract the youth age bracket (`U12`, `U14`, `U16`, `U18`).
pub fn extract_youth_age(name: &str) -> Option<YouthAge> {
    let caps = YOUTH_AGE_PATTERN.captures(name)?;
    YouthAge::from_number(&caps[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiting_list_danish() {
        assert!(is_waiting_list("Dame DPF100 - Venteliste"));
        assert!(is_waiting_list("DPF 25 HERRER (VENTELISTE)"));
        assert!(is_waiting_list("Dame Venteliste"));
    }

    #[test]
    fn test_waiting_list_english() {
        assert!(is_waiting_list("Waiting list - Men DPF50"));
        assert!(is_waiting_list("waitinglist for DPF25"));
        assert!(is_waiting_list("WAITING   LIST"));
    }

    #[test]
    fn test_not_waiting_list() {
        assert!(!is_waiting_list("Herrer DPF50 (først til mølle)"));
        assert!(!is_waiting_list("Dame DPF25"));
        assert!(!is_waiting_list("Mix DPF35"));
    }

    #[test]
    fn test_gender_herrer() {
        assert_eq!(extract_gender("Herrer DPF50"), Some(Gender::Herrer));
        assert_eq!(extract_gender("HERRER DPF50"), Some(Gender::Herrer));
        assert_eq!(extract_gender("DPF50 herre"), Some(Gender::Herrer));
        assert_eq!(extract_gender("DPF50 HERRER-BLÅ"), Some(Gender::Herrer));
    }

    #[test]
    fn test_gender_damer() {
        assert_eq!(extract_gender("Damer DPF50"), Some(Gender::Damer));
        assert_eq!(extract_gender("dame DPF25"), Some(Gender::Damer));
        assert_eq!(extract_gender("Dames DPF25"), Some(Gender::Damer));
        assert_eq!(extract_gender("Damespeed"), Some(Gender::Damer));
        assert_eq!(extract_gender("DPF 100 Kvinder"), Some(Gender::Damer));
        assert_eq!(extract_gender("Kvinde DPF50"), Some(Gender::Damer));
    }

    #[test]
    fn test_gender_mix_and_youth() {
        assert_eq!(extract_gender("DPF 25 Mix"), Some(Gender::Mix));
        assert_eq!(extract_gender("U12 drenge DPF500"), Some(Gender::Drenge));
        assert_eq!(extract_gender("Piger U14 DPF500"), Some(Gender::Piger));
    }

    #[test]
    fn test_gender_needs_word_boundary() {
        assert_eq!(extract_gender("Herre50 FTM"), None);
        assert_eq!(extract_gender("Mixed doubles"), None);
    }

    #[test]
    fn test_no_gender() {
        assert_eq!(extract_gender("DPF50"), None);
        assert_eq!(extract_gender("Speed tournament"), None);
        assert_eq!(extract_gender("Finals"), None);
    }

    #[test]
    fn test_youth_age() {
        assert_eq!(extract_youth_age("Drenge U12 DPF500"), Some(YouthAge::U12));
        assert_eq!(extract_youth_age("U14 piger DPF500"), Some(YouthAge::U14));
        assert_eq!(extract_youth_age("drenge u16"), Some(YouthAge::U16));
        assert_eq!(extract_youth_age("U18 piger DPF500"), Some(YouthAge::U18));
    }

    #[test]
    fn test_no_youth_age() {
        assert_eq!(extract_youth_age("Herrer DPF50"), None);
        assert_eq!(extract_youth_age("Drenge U10"), None);
        assert_eq!(extract_youth_age("Drenge U140"), None);
    }

    #[test]
    fn test_danish_letters_are_separators() {
        assert_eq!(extract_gender("Mixæ DPF50"), Some(Gender::Mix));
        assert_eq!(extract_gender("Damerø 35"), Some(Gender::Damer));
        assert_eq!(extract_youth_age("U14år Piger"), Some(YouthAge::U14));
    }
}
