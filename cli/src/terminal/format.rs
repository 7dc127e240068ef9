use crate::terminal::colors;
use colored::*;
use restomap_common::location::MapRegion;
use serde_json::Value;

/// One detail line of a restaurant entry.
pub type Detail = (String, ColoredString);

/// Renders a JSON field value on one line.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::from("-"),
        Value::Array(items) if items.iter().all(|item| !item.is_object() && !item.is_array()) => {
            items
                .iter()
                .map(value_to_string)
                .collect::<Vec<String>>()
                .join(", ")
        }
        other => other.to_string(),
    }
}

pub fn field_to_detail(key: &str, value: &Value) -> Detail {
    let text = value_to_string(value);
    let colored = match value {
        Value::Number(_) | Value::Bool(_) => text.color(colors::ACCENT),
        Value::Null => text.color(colors::PLACEHOLDER),
        _ => text.color(colors::TEXT_DEFAULT),
    };
    (key.to_string(), colored)
}

pub fn region_to_string(region: &MapRegion) -> String {
    format!(
        "{:.5}, {:.5} (span {} x {})",
        region.latitude, region.longitude, region.latitude_delta, region.longitude_delta
    )
}
