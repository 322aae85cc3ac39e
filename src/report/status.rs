use std::fmt;

use crate::matching::MatchTier;

/// User-facing outcome of one matching request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusMessage {
    /// A threshold rung accepted `count` accounts.
    Success { count: usize, threshold: f32 },
    /// No rung matched; `count` best accounts are shown instead.
    Fallback { count: usize, lowest_threshold: f32 },
    /// No rung matched and no fallback is configured.
    NoMatch { threshold: f32 },
    /// The selected category contains no accounts.
    NoCandidates,
}

impl StatusMessage {
    /// Derives the message from a tier and the number of returned matches.
    pub fn from_tier(tier: &MatchTier, count: usize, lowest_threshold: f32) -> Self {
        match *tier {
            MatchTier::Threshold { threshold, .. } => StatusMessage::Success { count, threshold },
            MatchTier::Fallback { .. } => StatusMessage::Fallback {
                count,
                lowest_threshold,
            },
            MatchTier::NoMatch { lowest_threshold } => StatusMessage::NoMatch {
                threshold: lowest_threshold,
            },
            MatchTier::NoCandidates => StatusMessage::NoCandidates,
        }
    }

    /// `true` for outcomes that should be shown as a warning.
    pub fn is_warning(&self) -> bool {
        !matches!(self, StatusMessage::Success { .. })
    }
}

fn percent(threshold: f32) -> i64 {
    (f64::from(threshold) * 100.0).round() as i64
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            StatusMessage::Success { count, threshold } => write!(
                f,
                "{} Sachkonten mit Score >{}% gefunden.",
                count,
                percent(threshold)
            ),
            StatusMessage::Fallback {
                count,
                lowest_threshold,
            } => write!(
                f,
                "Keine Sachkonten mit Score >{}% gefunden. \
                 Die {} ähnlichsten Sachkonten werden angezeigt.",
                percent(lowest_threshold),
                count
            ),
            StatusMessage::NoMatch { threshold } => write!(
                f,
                "Keine Sachkonten mit einer Wahrscheinlichkeit >{}% gefunden.",
                percent(threshold)
            ),
            StatusMessage::NoCandidates => {
                write!(f, "Keine Sachkonten in der gewählten Kategorie vorhanden.")
            }
        }
    }
}
