use sideload_types::{format_date_time, truncate};

/// Attribute text for display; `*-at` timestamps are shortened
pub fn attribute_value(name: &str, value: &str) -> String {
    if is_timestamp_name(name) {
        format_date_time(value)
    } else {
        value.to_string()
    }
}

fn is_timestamp_name(name: &str) -> bool {
    name.ends_with("-at") || name.ends_with("_at")
}

/// Single-line table cell of at most `width` characters
pub fn cell(text: &str, width: usize) -> String {
    let flattened = text
        .replace(['\n', '\r', '\t'], " ")
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    truncate(&flattened, width)
}

/// Pad to `width` characters
pub fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
