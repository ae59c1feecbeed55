//! Interview feedback normalization.
//!
//! The backend has shipped three feedback payload shapes over time. Rather
//! than sniffing arbitrary field aliases, normalization accepts exactly
//! this closed set — the current detailed object, the legacy score/notes
//! object, and a bare text summary — and treats anything else as "no
//! feedback".

use serde::Deserialize;
use serde_json::Value;

/// Interviewer's hiring recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recommendation {
    /// Move forward with an offer.
    Hire,
    /// Needs another signal before deciding.
    Hold,
    /// Do not move forward.
    NoHire,
}

impl Recommendation {
    /// Parse the wire value; unknown strings yield `None` rather than a
    /// guess.
    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "hire" => Some(Self::Hire),
            "hold" => Some(Self::Hold),
            "no_hire" => Some(Self::NoHire),
            _ => None,
        }
    }
}

/// Normalized interview feedback, independent of which wire shape carried
/// it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterviewFeedback {
    /// 1–5 rating when the shape carried one.
    pub rating: Option<u8>,
    /// Free-text summary; always present, possibly empty.
    pub summary: String,
    /// Hiring recommendation when recognizable.
    pub recommendation: Option<Recommendation>,
    /// Named strengths when the shape carried them.
    pub strengths: Vec<String>,
}

/// The closed set of accepted wire shapes, tried in order.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFeedback {
    /// Current shape: `{rating?, comments, recommendation?, strengths?}`.
    Detailed {
        comments: String,
        #[serde(default)]
        rating: Option<u8>,
        #[serde(default)]
        recommendation: Option<String>,
        #[serde(default)]
        strengths: Vec<String>,
    },
    /// Legacy shape: `{score, notes?}`.
    Legacy {
        score: u8,
        #[serde(default)]
        notes: String,
    },
    /// Oldest shape: a bare summary string.
    Text(String),
}

/// What: Normalize a feedback payload into [`InterviewFeedback`].
///
/// Inputs:
/// - `v`: The envelope payload (already unwrapped).
///
/// Output:
/// - `Some(feedback)` for one of the accepted shapes; `None` for null,
///   unrecognized objects, or anything else — explicitly "no feedback",
///   never a best-effort guess.
pub fn normalize(v: &Value) -> Option<InterviewFeedback> {
    let raw: RawFeedback = serde_json::from_value(v.clone()).ok()?;
    let normalized = match raw {
        RawFeedback::Detailed {
            comments,
            rating,
            recommendation,
            strengths,
        } => InterviewFeedback {
            rating,
            summary: comments,
            recommendation: recommendation.as_deref().and_then(Recommendation::from_wire),
            strengths,
        },
        RawFeedback::Legacy { score, notes } => InterviewFeedback {
            rating: Some(score),
            summary: notes,
            recommendation: None,
            strengths: Vec::new(),
        },
        RawFeedback::Text(summary) => InterviewFeedback {
            rating: None,
            summary,
            recommendation: None,
            strengths: Vec::new(),
        },
    };
    Some(normalized)
}
