use serde::Serialize;

use super::common::{Guidance, StatusBadge};

#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }

    /// Mark the result partial when any of `total` targets missed `included`
    ///
    /// A badge that is already set is kept.
    pub fn with_unresolved(self, missing: usize, total: usize) -> Self {
        if missing == 0 || self.badge.is_some() {
            return self;
        }
        self.with_badge(StatusBadge::unresolved(missing, total))
    }

    /// False when a badge says labels are incomplete or something was not found
    pub fn is_complete(&self) -> bool {
        self.badge.as_ref().is_none_or(StatusBadge::is_complete)
    }
}
