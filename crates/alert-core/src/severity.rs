//! The severity vocabulary.

/// Known severity levels, ordered from least to most severe.
///
/// Records keep their severity as a plain string so unrecognized values pass
/// through untouched. This enum is only used to rank and classify them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Unknown,
    Minor,
    Moderate,
    Severe,
    Extreme,
}

impl Severity {
    /// The vocabulary in ascending order.
    pub const ORDERED: [Severity; 5] = [
        Severity::Unknown,
        Severity::Minor,
        Severity::Moderate,
        Severity::Severe,
        Severity::Extreme,
    ];

    /// Rank given to severities outside the vocabulary.
    ///
    /// They sort before `Unknown` in ascending order.
    pub const UNRANKED: i32 = -1;

    /// Match a feed value against the vocabulary (exact, case-sensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Unknown" => Some(Severity::Unknown),
            "Minor" => Some(Severity::Minor),
            "Moderate" => Some(Severity::Moderate),
            "Severe" => Some(Severity::Severe),
            "Extreme" => Some(Severity::Extreme),
            _ => None,
        }
    }

    /// Position of a feed value in the vocabulary, or [`Severity::UNRANKED`].
    pub fn rank(value: &str) -> i32 {
        Self::parse(value)
            .map(|severity| severity as i32)
            .unwrap_or(Self::UNRANKED)
    }

    /// The canonical spelling used by the feed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Unknown => "Unknown",
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_follows_vocabulary_order() {
        let ranks: Vec<i32> = Severity::ORDERED
            .iter()
            .map(|s| Severity::rank(s.as_str()))
            .collect();

        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_rank_unrecognized() {
        assert_eq!(Severity::rank("Catastrophic"), Severity::UNRANKED);
        assert_eq!(Severity::rank(""), Severity::UNRANKED);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Severity::parse("Severe"), Some(Severity::Severe));
        assert_eq!(Severity::parse("severe"), None);
        assert_eq!(Severity::rank("EXTREME"), Severity::UNRANKED);
    }

    #[test]
    fn test_ord_matches_rank() {
        assert!(Severity::Extreme > Severity::Severe);
        assert!(Severity::Minor > Severity::Unknown);
    }
}
