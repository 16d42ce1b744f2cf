use bfhl_types::{FilteredView, ResponsePayload};
use serde::Serialize;
use std::fmt;

pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

/// One rendered field of a filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    pub field: String,
    pub label: String,
    pub values: Vec<String>,
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.values.join(","))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRepresentation {
    /// Indented dump of the whole response
    Full { json: String },

    /// One line per non-empty sequence field of the filtered view
    Lines { lines: Vec<DisplayLine> },

    /// Filtered view had nothing displayable
    NoData { message: String },
}

impl fmt::Display for DisplayRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayRepresentation::Full { json } => write!(f, "{}", json),
            DisplayRepresentation::Lines { lines } => {
                for (idx, line) in lines.iter().enumerate() {
                    if idx > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", line)?;
                }
                Ok(())
            }
            DisplayRepresentation::NoData { message } => write!(f, "{}", message),
        }
    }
}

/// Build the display for a response, narrowed by `view` when present.
///
/// Entries whose value is not a non-empty sequence are skipped.
pub fn render(response: &ResponsePayload, view: Option<&FilteredView>) -> DisplayRepresentation {
    let Some(view) = view else {
        return DisplayRepresentation::Full {
            json: response.to_pretty_json(),
        };
    };

    let lines: Vec<DisplayLine> = view
        .entries()
        .iter()
        .filter_map(|(field, value)| {
            value.display_items().map(|values| DisplayLine {
                field: field.key().to_string(),
                label: capitalize(field.key()),
                values,
            })
        })
        .collect();

    if lines.is_empty() {
        DisplayRepresentation::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    } else {
        DisplayRepresentation::Lines { lines }
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::apply_filters;
    use bfhl_types::{FilterField, FilterSelection};
    use serde_json::json;

    fn response(value: serde_json::Value) -> ResponsePayload {
        ResponsePayload::from_value(value).unwrap()
    }

    fn select(fields: &[FilterField]) -> FilterSelection {
        fields.iter().copied().collect()
    }

    #[test]
    fn single_selected_field_renders_one_line() {
        let payload = response(json!({
            "alphabets": ["A", "B"],
            "numbers": ["1"],
            "highest_lowercase_alphabet": [],
        }));
        let view = apply_filters(&payload, &select(&[FilterField::Alphabets]));

        insta::assert_snapshot!(render(&payload, view.as_ref()), @"Alphabets: A,B");
    }

    #[test]
    fn empty_sequences_are_omitted() {
        let payload = response(json!({
            "alphabets": ["A", "B"],
            "numbers": ["1", "334"],
            "highest_lowercase_alphabet": [],
        }));
        let view = apply_filters(&payload, &FilterSelection::all());
        let rendered = render(&payload, view.as_ref());

        let DisplayRepresentation::Lines { lines } = &rendered else {
            panic!("expected lines, got {:?}", rendered);
        };
        assert_eq!(lines.len(), 2);
        insta::assert_snapshot!(rendered, @r"
        Alphabets: A,B
        Numbers: 1,334
        ");
    }

    #[test]
    fn full_dump_without_view() {
        let payload = response(json!({"alphabets": ["A", "B"], "numbers": []}));
        let rendered = render(&payload, None);

        let text = rendered.to_string();
        assert!(text.contains("\"A\""));
        assert!(text.contains("\"B\""));
        insta::assert_snapshot!(text, @r#"
        {
          "alphabets": [
            "A",
            "B"
          ],
          "numbers": []
        }
        "#);
    }

    #[test]
    fn filtered_view_drops_empty_numbers_line() {
        let payload = response(json!({"alphabets": ["A", "B"], "numbers": []}));
        let view = apply_filters(
            &payload,
            &select(&[FilterField::Alphabets, FilterField::Numbers]),
        );
        let text = render(&payload, view.as_ref()).to_string();

        assert!(text.contains("A,B"));
        assert!(!text.contains("Numbers"));
    }

    #[test]
    fn nothing_displayable_yields_placeholder() {
        let payload = response(json!({
            "numbers": [],
            "highest_lowercase_alphabet": null,
            "alphabets": "A",
        }));
        let view = apply_filters(&payload, &FilterSelection::all());

        assert_eq!(
            render(&payload, view.as_ref()),
            DisplayRepresentation::NoData {
                message: NO_DATA_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn selected_keys_missing_from_response_yield_placeholder() {
        let payload = response(json!({"is_success": true}));
        let view = apply_filters(&payload, &FilterSelection::all());
        assert_eq!(render(&payload, view.as_ref()).to_string(), NO_DATA_MESSAGE);
    }

    #[test]
    fn capitalizes_only_first_character() {
        assert_eq!(capitalize("highest_lowercase_alphabet"), "Highest_lowercase_alphabet");
        assert_eq!(capitalize("numbers"), "Numbers");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let payload = response(json!({"numbers": ["7"]}));
        let view = apply_filters(&payload, &select(&[FilterField::Numbers]));
        assert_eq!(
            serde_json::to_value(render(&payload, view.as_ref())).unwrap(),
            json!({
                "kind": "lines",
                "lines": [{"field": "numbers", "label": "Numbers", "values": ["7"]}]
            })
        );
    }
}
