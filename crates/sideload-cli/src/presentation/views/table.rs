use std::fmt;

use crate::presentation::formatters::{attribute_value, cell, pad};
use crate::presentation::view_models::ResourceListViewModel;

// --------------------------------------------------------
// Resource Table View
// --------------------------------------------------------

impl fmt::Display for ResourceListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "No resources.")?;
            return Ok(());
        }

        let mut header = vec!["ID".to_string(), "TYPE".to_string()];
        header.extend(self.relationship_columns.iter().map(|c| c.to_uppercase()));
        header.extend(self.attribute_columns.iter().map(|c| c.to_uppercase()));

        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    cell(&row.id, self.width),
                    cell(&row.resource_type, self.width),
                ];
                cells.extend(self.relationship_columns.iter().map(|name| {
                    let labels = row
                        .relationships
                        .get(name)
                        .map(|relationship| relationship.labels())
                        .unwrap_or_default();
                    cell(&labels, self.width)
                }));
                cells.extend(self.attribute_columns.iter().map(|name| {
                    let value = row
                        .attributes
                        .get(name)
                        .map(|value| attribute_value(name, value))
                        .unwrap_or_default();
                    cell(&value, self.width)
                }));
                cells
            })
            .collect();

        let header: Vec<String> = header.iter().map(|h| cell(h, self.width)).collect();
        let widths: Vec<usize> = (0..header.len())
            .map(|column| {
                std::iter::once(&header)
                    .chain(body.iter())
                    .map(|cells| cells[column].chars().count())
                    .max()
                    .unwrap_or_default()
            })
            .collect();

        write_line(f, &header, &widths)?;
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(rule_width))?;
        for cells in &body {
            write_line(f, cells, &widths)?;
        }

        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(text, width)| pad(text, *width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}
