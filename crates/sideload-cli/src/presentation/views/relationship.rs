use std::fmt;

use crate::presentation::view_models::{LinkageStateViewModel, RelationshipResolutionViewModel};

// --------------------------------------------------------
// Relationship Resolution View
// --------------------------------------------------------

impl fmt::Display for RelationshipResolutionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = match self.state {
            LinkageStateViewModel::Unset => "not present",
            LinkageStateViewModel::Null => "empty",
            LinkageStateViewModel::ToOne => "to-one",
            LinkageStateViewModel::ToMany => "to-many",
        };
        writeln!(f, "{} {} ({})", self.resource, self.relationship, state)?;

        let width = self
            .targets
            .iter()
            .map(|target| target.resource_type.chars().count() + target.id.chars().count() + 1)
            .max()
            .unwrap_or_default();
        for target in &self.targets {
            let key = format!("{}/{}", target.resource_type, target.id);
            let display = if target.display.is_empty() {
                "(not included)"
            } else {
                target.display.as_str()
            };
            writeln!(f, "  {:<width$}  {}", key, display, width = width)?;
        }

        Ok(())
    }
}
