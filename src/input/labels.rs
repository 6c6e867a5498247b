//! User-facing texts of the phone field.

use serde::{Deserialize, Serialize};

/// Labels and error messages shown around the phone field.
///
/// Deserializes from camelCase keys, so a partial JSON object overrides only
/// the texts it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextLabels {
    pub main_label: String,
    pub code_placeholder: String,
    pub search_placeholder_label: String,
    pub no_entries_found_label: String,
    pub national_number_label: String,
    pub hint_label: String,
    pub invalid_number_error: String,
    pub required_error: String,
    pub number_too_long_error: String,
}

impl Default for TextLabels {
    fn default() -> Self {
        Self {
            main_label: "Phone number".to_string(),
            code_placeholder: "Code".to_string(),
            search_placeholder_label: "Search".to_string(),
            no_entries_found_label: "No countries found".to_string(),
            national_number_label: "Number".to_string(),
            hint_label: "Select country and type your phone number".to_string(),
            invalid_number_error: "Number is not valid".to_string(),
            required_error: "This field is required".to_string(),
            number_too_long_error: "Phone number is too long".to_string(),
        }
    }
}
