use serde_json::Value;

use crate::errors::ExtractError;

/// Column holding the per-record category labels in `siacus/dv_subject`.
pub const SUBJECT_FIELD: &str = "Subject";

/// The slice of a dataset row this crate consumes: its subject labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    pub subjects: Vec<String>,
}

impl SubjectRecord {
    /// Validate one raw row. The subject field must be present; a `null`
    /// value is the upstream encoding for "no labels" and yields an empty
    /// list, while an absent key is an error.
    pub fn from_row(row: &Value, index: usize) -> Result<Self, ExtractError> {
        let obj = row.as_object().ok_or_else(|| ExtractError::RecordShape {
            row: index,
            detail: format!("expected a JSON object, found {}", json_kind(row)),
        })?;

        let field = obj.get(SUBJECT_FIELD).ok_or(ExtractError::MissingField {
            field: SUBJECT_FIELD,
            row: index,
        })?;

        let subjects = match field {
            Value::Null => Vec::new(),
            // some exports store a single label as a bare string
            Value::String(label) => vec![label.clone()],
            Value::Array(items) => {
                let mut subjects = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(label) => subjects.push(label.to_owned()),
                        None => {
                            return Err(ExtractError::RecordShape {
                                row: index,
                                detail: format!(
                                    "'{SUBJECT_FIELD}' entries must be strings, found {}",
                                    json_kind(item)
                                ),
                            })
                        }
                    }
                }
                subjects
            }
            other => {
                return Err(ExtractError::RecordShape {
                    row: index,
                    detail: format!(
                        "'{SUBJECT_FIELD}' must be a list of strings, found {}",
                        json_kind(other)
                    ),
                })
            }
        };

        Ok(Self { subjects })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
