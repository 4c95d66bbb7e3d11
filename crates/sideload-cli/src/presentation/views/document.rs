use std::fmt;

use crate::presentation::view_models::{DocumentSummaryViewModel, TypeCountViewModel};

// --------------------------------------------------------
// Document Summary View
// --------------------------------------------------------

impl fmt::Display for DocumentSummaryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Source:             {}", self.source)?;
        writeln!(f, "Kind:               {}", self.kind)?;
        writeln!(f, "Primary resources:  {}", self.primary_count)?;
        writeln!(f, "Included resources: {}", self.included_count)?;
        writeln!(f, "Unresolved targets: {}", self.unresolved_targets)?;

        write_type_counts(f, "Primary types", &self.primary_types)?;
        write_type_counts(f, "Included types", &self.included_types)?;

        if !self.links.is_empty() {
            writeln!(f)?;
            writeln!(f, "Links:")?;
            for link in &self.links {
                writeln!(f, "  {}: {}", link.name, link.href)?;
            }
        }

        if let Some(meta) = &self.meta {
            writeln!(f)?;
            writeln!(f, "Meta: {}", meta)?;
        }

        Ok(())
    }
}

fn write_type_counts(
    f: &mut fmt::Formatter,
    title: &str,
    counts: &[TypeCountViewModel],
) -> fmt::Result {
    if counts.is_empty() {
        return Ok(());
    }

    writeln!(f)?;
    writeln!(f, "{}:", title)?;
    let width = counts
        .iter()
        .map(|entry| entry.resource_type.chars().count())
        .max()
        .unwrap_or_default();
    for entry in counts {
        writeln!(
            f,
            "  {:<width$}  {}",
            entry.resource_type,
            entry.count,
            width = width
        )?;
    }
    Ok(())
}
