use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn success(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            label: label.into(),
        }
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            label: label.into(),
        }
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            label: label.into(),
        }
    }

    /// Some relationship targets were not side-loaded and only carry their id
    pub fn unresolved(missing: usize, total: usize) -> Self {
        Self {
            level: StatusLevel::Partial,
            label: format!("{} of {} target(s) not side-loaded", missing, total),
        }
    }

    /// Whether output under this badge still answers the request in full
    pub fn is_complete(&self) -> bool {
        matches!(self.level, StatusLevel::Success | StatusLevel::Info)
    }

    pub fn icon(&self) -> &str {
        match self.level {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
            StatusLevel::Partial => "🔗",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    /// Decoded fine, but labels fall back to bare ids
    Partial,
}

#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_badge() {
        let badge = StatusBadge::unresolved(2, 3);
        assert_eq!(badge.level, StatusLevel::Partial);
        assert_eq!(badge.label, "2 of 3 target(s) not side-loaded");
        assert_eq!(badge.icon(), "🔗");
        assert!(!badge.is_complete());
        assert!(StatusBadge::info("Showing 1 of 2 resources").is_complete());
    }

    #[test]
    fn test_partial_level_serializes_lowercase() {
        let value = serde_json::to_value(StatusBadge::unresolved(1, 1)).unwrap();
        assert_eq!(value["level"], "partial");
    }
}
