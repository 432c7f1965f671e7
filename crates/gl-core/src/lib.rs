use chrono::{Local, NaiveTime};
use std::{fmt, str::FromStr};

// ============================================================================
// ENVIRONMENT
// ============================================================================

/// Sovereign cloud the governance script should target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Public,
    Germany,
    UsGov,
    China,
    UsGovHigh,
    UsGovMil,
}

impl Environment {
    /// Picker order. Index 0 is preselected.
    pub const ALL: [Self; 6] = [
        Self::Public,
        Self::Germany,
        Self::UsGov,
        Self::China,
        Self::UsGovHigh,
        Self::UsGovMil,
    ];

    pub const DEFAULT: Self = Self::Public;

    /// Total over `usize`: anything outside the picker falls back to `Public`.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Public,
            1 => Self::Germany,
            2 => Self::UsGov,
            3 => Self::China,
            4 => Self::UsGovHigh,
            5 => Self::UsGovMil,
            _ => Self::DEFAULT,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Public => 0,
            Self::Germany => 1,
            Self::UsGov => 2,
            Self::China => 3,
            Self::UsGovHigh => 4,
            Self::UsGovMil => 5,
        }
    }

    /// Symbolic name understood by the governance script.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Germany => "Germany",
            Self::UsGov => "USGov",
            Self::China => "China",
            Self::UsGovHigh => "USGovHigh",
            Self::UsGovMil => "USGovMil",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Public => "Public (Commercial Cloud)",
            Self::Germany => "Germany (Microsoft Cloud Germany)",
            Self::UsGov => "USGov (Azure Government - GCC)",
            Self::China => "China (Microsoft Cloud China)",
            Self::UsGovHigh => "USGovHigh (Azure Government - GCC High)",
            Self::UsGovMil => "USGovMil (Azure Government - DoD)",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

/// Maps a picker selection to an environment.
pub fn resolve_environment(selection_index: usize) -> Environment {
    Environment::from_index(selection_index)
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment '{0}' (expected one of Public, Germany, USGov, China, USGovHigh, USGovMil or 0-5)")]
pub struct UnknownEnvironment(pub String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    /// Accepts the symbolic name (case-insensitive) or the picker index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            if index < Self::ALL.len() {
                return Ok(Self::from_index(index));
            }
            return Err(UnknownEnvironment(s.to_string()));
        }

        Self::ALL
            .into_iter()
            .find(|env| env.identifier().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownEnvironment(s.to_string()))
    }
}

// ============================================================================
// RUN STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Preparing,
    Executing,
    Succeeded,
    Failed,
}

impl RunState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Preparing | Self::Executing)
    }

    /// A new run may only begin from `Idle` or a terminal state.
    pub fn can_start(&self) -> bool {
        !self.is_busy()
    }
}

// ============================================================================
// LOG ENTRIES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: NaiveTime,
    pub text: String,
    pub severity: Severity,
}

impl LogEntry {
    /// Stamps the entry with the local wall-clock time.
    pub fn now(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            timestamp: Local::now().time(),
            text: text.into(),
            severity,
        }
    }

    pub fn stamp(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.stamp(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_indices_map_to_fixed_identifiers() {
        let expected = ["Public", "Germany", "USGov", "China", "USGovHigh", "USGovMil"];
        for (index, name) in expected.iter().enumerate() {
            assert_eq!(resolve_environment(index).identifier(), *name);
        }
    }

    #[test]
    fn unknown_index_falls_back_to_public() {
        for index in [6, 7, 42, usize::MAX] {
            assert_eq!(resolve_environment(index), Environment::Public);
        }
    }

    #[test]
    fn index_round_trips_through_picker_order() {
        for env in Environment::ALL {
            assert_eq!(Environment::from_index(env.index()), env);
        }
    }

    #[test]
    fn parses_names_case_insensitively_and_by_index() {
        assert_eq!("usgovhigh".parse::<Environment>(), Ok(Environment::UsGovHigh));
        assert_eq!(" China ".parse::<Environment>(), Ok(Environment::China));
        assert_eq!("2".parse::<Environment>(), Ok(Environment::UsGov));
        assert!("6".parse::<Environment>().is_err());
        assert!("Mars".parse::<Environment>().is_err());
    }

    #[test]
    fn only_public_is_default() {
        assert!(Environment::Public.is_default());
        assert!(Environment::ALL[1..].iter().all(|env| !env.is_default()));
    }

    #[test]
    fn busy_states_block_new_runs() {
        assert!(RunState::Idle.can_start());
        assert!(RunState::Succeeded.can_start());
        assert!(RunState::Failed.can_start());
        assert!(!RunState::Preparing.can_start());
        assert!(!RunState::Executing.can_start());
    }

    #[test]
    fn entry_renders_with_clock_prefix() {
        let entry = LogEntry {
            timestamp: NaiveTime::from_hms_opt(9, 5, 7).unwrap(),
            text: "✓ Extracted PowerShell script".into(),
            severity: Severity::Success,
        };
        assert_eq!(entry.to_string(), "09:05:07 | ✓ Extracted PowerShell script");
    }
}
