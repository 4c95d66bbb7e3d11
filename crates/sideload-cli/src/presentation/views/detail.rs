use std::fmt;

use crate::presentation::formatters::attribute_value;
use crate::presentation::view_models::{RawBagViewModel, ResourceDetailViewModel};

// --------------------------------------------------------
// Resource Detail View
// --------------------------------------------------------

impl fmt::Display for ResourceDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}/{}", self.resource_type, self.id)?;

        writeln!(f)?;
        writeln!(f, "Attributes:")?;
        if self.attributes.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for attribute in &self.attributes {
            writeln!(
                f,
                "  {}: {}",
                attribute.name,
                attribute_value(&attribute.name, &attribute.value)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Relationships:")?;
        if self.relationships.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for entry in &self.relationships {
            let labels = entry.relationship.labels();
            if labels.is_empty() {
                writeln!(f, "  {}: -", entry.name)?;
            } else {
                writeln!(f, "  {}: {}", entry.name, labels)?;
            }
        }

        if let Some(meta) = &self.meta {
            writeln!(f)?;
            writeln!(f, "Meta: {}", meta)?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Raw Bag View
// --------------------------------------------------------

impl fmt::Display for RawBagViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pretty = serde_json::to_string_pretty(&self.0).map_err(|_| fmt::Error)?;
        writeln!(f, "{}", pretty)
    }
}
