//! Document number sequencing
//!
//! Document numbers are a fixed alphabetic prefix followed by a zero-padded
//! numeric suffix, e.g. `DP003` for production runs and `JOB045` for sale
//! orders. The suffix is padded to at least three digits; the width grows
//! naturally past 999 and is never truncated.

/// Known document number series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocPrefix {
    /// Production run numbers (`DP…`)
    Production,
    /// Sale order numbers (`JOB…`)
    Job,
}

impl DocPrefix {
    /// The literal prefix string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "DP",
            Self::Job => "JOB",
        }
    }

    /// Split a document number into its series and numeric suffix.
    /// Returns `None` for unrecognized prefixes.
    pub fn split(number: &str) -> Option<(DocPrefix, &str)> {
        for prefix in [Self::Production, Self::Job] {
            if let Some(suffix) = number.strip_prefix(prefix.as_str()) {
                return Some((prefix, suffix));
            }
        }
        None
    }

    /// The first number of the series (`DP001` / `JOB001`)
    pub fn first(&self) -> String {
        format!("{}{:03}", self.as_str(), 1)
    }
}

impl std::fmt::Display for DocPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derive the next document number from the current one.
///
/// Recognized series increment their numeric suffix, keeping the prefix and
/// zero-padding to at least three digits. Unrecognized prefixes and
/// non-numeric suffixes pass through unchanged.
pub fn next_number(current: &str) -> String {
    match DocPrefix::split(current) {
        Some((prefix, suffix)) => match suffix.parse::<u64>() {
            Ok(n) => format!("{}{:03}", prefix.as_str(), n.saturating_add(1)),
            Err(_) => current.to_string(),
        },
        None => current.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increments_production_series() {
        assert_eq!(next_number("DP003"), "DP004");
        assert_eq!(next_number("DP099"), "DP100");
    }

    #[test]
    fn test_width_grows_past_three_digits() {
        assert_eq!(next_number("DP999"), "DP1000");
        assert_eq!(next_number("DP1000"), "DP1001");
    }

    #[test]
    fn test_increments_job_series() {
        assert_eq!(next_number("JOB045"), "JOB046");
    }

    #[test]
    fn test_unknown_prefix_passes_through() {
        assert_eq!(next_number("XYZ001"), "XYZ001");
        assert_eq!(next_number(""), "");
    }

    #[test]
    fn test_non_numeric_suffix_passes_through() {
        assert_eq!(next_number("DPabc"), "DPabc");
        assert_eq!(next_number("JOB"), "JOB");
    }

    #[test]
    fn test_series_seed() {
        assert_eq!(DocPrefix::Production.first(), "DP001");
        assert_eq!(DocPrefix::Job.first(), "JOB001");
    }

    #[test]
    fn test_split() {
        assert_eq!(DocPrefix::split("DP010"), Some((DocPrefix::Production, "010")));
        assert_eq!(DocPrefix::split("JOB7"), Some((DocPrefix::Job, "7")));
        assert_eq!(DocPrefix::split("PO001"), None);
    }
}
