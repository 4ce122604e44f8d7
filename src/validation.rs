//! Input validation for insert payloads.
//!
//! Request bodies arrive as untyped JSON. Each insert type implements
//! [`FromPayload`], which checks that every client-supplied field is present
//! with the right primitive type, applies defaults for optional fields and
//! collects every problem into a single [`ValidationError`].
//!
//! Server-assigned fields (`id`, `createdAt`) and unknown keys are ignored.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::model::{
    DEFAULT_AUTHOR, DEFAULT_ICON, InsertLoveNote, InsertMemory, InsertTimelineEvent, timestamp,
};

/// One offending field and what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Every problem found in a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    fn single(field: &str, message: &str) -> Self {
        Self {
            issues: vec![FieldIssue {
                field: field.to_string(),
                message: message.to_string(),
            }],
        }
    }

    /// Names of the offending fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Builds a normalized insert value from an untyped payload.
pub trait FromPayload: Sized {
    fn from_payload(payload: &Value) -> Result<Self, ValidationError>;
}

/// Field reader over a JSON object that records issues instead of failing
/// on the first one.
struct Fields<'a> {
    object: &'a Map<String, Value>,
    issues: Vec<FieldIssue>,
}

impl<'a> Fields<'a> {
    fn of(payload: &'a Value) -> Result<Self, ValidationError> {
        match payload.as_object() {
            Some(object) => Ok(Self {
                object,
                issues: Vec::new(),
            }),
            None => Err(ValidationError::single("(root)", "Expected a JSON object")),
        }
    }

    fn issue(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// A required string. Empty strings are allowed.
    fn text(&mut self, field: &str) -> Option<String> {
        match self.object.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => {
                self.issue(field, "Required");
                None
            }
            Some(other) => {
                self.issue(field, format!("Expected string, received {}", type_name(other)));
                None
            }
        }
    }

    /// A required string that must contain something besides whitespace.
    fn non_empty_text(&mut self, field: &str) -> Option<String> {
        let value = self.text(field)?;
        if value.trim().is_empty() {
            self.issue(field, "Cannot be empty");
            return None;
        }
        Some(value)
    }

    /// An optional string; absent or `null` yields `default`.
    fn text_or(&mut self, field: &str, default: &str) -> Option<String> {
        match self.object.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => Some(default.to_string()),
            Some(other) => {
                self.issue(field, format!("Expected string, received {}", type_name(other)));
                None
            }
        }
    }

    /// A required date: a parseable string or epoch milliseconds.
    fn date(&mut self, field: &str) -> Option<DateTime<Utc>> {
        let parsed = match self.object.get(field) {
            Some(Value::String(s)) => timestamp::parse(s),
            Some(Value::Number(n)) => n.as_i64().and_then(timestamp::from_millis),
            Some(Value::Null) | None => {
                self.issue(field, "Required");
                return None;
            }
            Some(other) => {
                self.issue(field, format!("Expected date, received {}", type_name(other)));
                return None;
            }
        };
        match parsed {
            Some(date) if timestamp::is_storable(&date) => Some(date),
            _ => {
                self.issue(field, "Invalid date");
                None
            }
        }
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(v) if self.issues.is_empty() => Ok(v),
            _ => Err(ValidationError {
                issues: self.issues,
            }),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl FromPayload for InsertMemory {
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let mut f = Fields::of(payload)?;
        let title = f.non_empty_text("title");
        let description = f.non_empty_text("description");
        let image_url = f.text("imageUrl");
        let date = f.date("date");

        let value = match (title, description, image_url, date) {
            (Some(title), Some(description), Some(image_url), Some(date)) => Some(InsertMemory {
                title,
                description,
                image_url,
                date,
            }),
            _ => None,
        };
        f.finish(value)
    }
}

impl FromPayload for InsertLoveNote {
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let mut f = Fields::of(payload)?;
        let content = f.non_empty_text("content");
        let author = f.text_or("author", DEFAULT_AUTHOR);

        let value = match (content, author) {
            (Some(content), Some(author)) => Some(InsertLoveNote { content, author }),
            _ => None,
        };
        f.finish(value)
    }
}

impl FromPayload for InsertTimelineEvent {
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let mut f = Fields::of(payload)?;
        let title = f.non_empty_text("title");
        let description = f.non_empty_text("description");
        let date = f.date("date");
        let icon = f.text_or("icon", DEFAULT_ICON);

        let value = match (title, description, date, icon) {
            (Some(title), Some(description), Some(date), Some(icon)) => Some(InsertTimelineEvent {
                title,
                description,
                date,
                icon,
            }),
            _ => None,
        };
        f.finish(value)
    }
}
