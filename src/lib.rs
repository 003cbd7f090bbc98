//! Padel series - tournament class name classifier
//!
//! Classifies the free-text class names published for padel tournaments
//! ("Herre DPF50 (FTM)", "Dame35 FTM", "U14 Piger DPF200") into normalized
//! series: a gender/age category, a DPF skill ranking and a display name.
//!
//! # Architecture
//!
//! Classification is a one-way pipeline of pure functions:
//! 1. Token extractors (waiting list, gender, youth age)
//! 2. A level resolution cascade of ordered stages
//! 3. Series synthesis per class name
//! 4. Per-event aggregation and corpus-wide collection
//!
//! The classifier is total: names it cannot classify come back as
//! "unknown" values, never as errors.
//!
//! # Example
//!
//! ```
//! use padel_series::{normalize_event_classes, ClassInput, Event};
//!
//! let event = Event::new(vec![
//!     ClassInput::new(1, "Herre50 FTM").with_player_count(8),
//!     ClassInput::new(2, "Herrer DPF50").with_player_count(12),
//!     ClassInput::new(3, "Dame DPF100 - Venteliste"),
//!     ClassInput::new(4, "Finals"),
//! ]);
//!
//! let result = normalize_event_classes(&event);
//! assert_eq!(result.classes.len(), 3);
//! assert_eq!(result.series.len(), 1);
//! assert_eq!(result.series[0].name, "Herrer DPF50");
//! assert_eq!(result.series[0].player_count, Some(20));
//! assert_eq!(result.unknown_series, vec!["Finals"]);
//! ```

pub use error::Error;

// Level resolution cascade
pub mod cascade;

// Waiting list, gender and youth age extraction
pub mod extract;

// Series synthesis and ordering
pub mod series;

// Per-class, per-event and corpus-wide normalization
pub mod event;

// Statistics and catalog facets
pub mod stats;

// Command-line options for the binary
pub mod cli;

pub use cascade::{extract_dpf_level, resolve_levels, Gender, LevelResolution, SkillLevel, YouthAge};
pub use event::{
    collect_unique_series, normalize_all_events, normalize_class, normalize_event_classes,
    ClassInput, ClassOutcome, Event, EventClassificationResult, EventDocument, NormalizedClass,
    NormalizedDocument, NormalizedEvent, SeriesAccumulator,
};
pub use extract::{extract_gender, extract_youth_age, is_waiting_list};
pub use series::{danish_cmp, normalize_class_name, sort_series, NormalizedName, Series};
pub use stats::{unique_categories, unique_rankings, Statistics};

mod error {
    use std::fmt;

    #[derive(Debug)]
    pub enum Error {
        Io(std::io::Error),
        Json(serde_json::Error),
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Error::Io(e) => write!(f, "IO error: {}", e),
                Error::Json(e) => write!(f, "JSON error: {}", e),
            }
        }
    }

    impl std::error::Error for Error {}

    impl From<std::io::Error> for Error {
        fn from(e: std::io::Error) -> Self {
            Error::Io(e)
        }
    }

    impl From<serde_json::Error> for Error {
        fn from(e: serde_json::Error) -> Self {
            Error::Json(e)
        }
    }
}
