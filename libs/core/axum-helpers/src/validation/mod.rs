//! Declarative request validation.
//!
//! A route owns an ordered list of [`Rule`]s. [`validate`] runs every rule
//! against the raw request input and collects one [`FieldError`] per failed
//! rule; [`gate`] turns a non-empty list into a 400 response. Handlers run
//! only after the gate has passed and read the raw values back with the
//! coercions in [`rules`].
//!
//! ```ignore
//! const RULES: &[Rule] = &[
//!     Rule::path("id", Constraint::Integer, "Invalid ID"),
//!     Rule::body("price", Constraint::Positive, "Invalid price"),
//! ];
//!
//! let input = RequestInput::new().with_param("id", &id).with_body(&body);
//! gate(validate(RULES, &input))?;
//! ```

pub mod rules;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::AppError;

/// Kind of check a rule performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Integer,
    NotEmpty,
    Numeric,
    Positive,
    Boolean,
}

impl Constraint {
    /// Constraint named by its snake_case code, e.g. `"not_empty"`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "integer" => Some(Self::Integer),
            "not_empty" => Some(Self::NotEmpty),
            "numeric" => Some(Self::Numeric),
            "positive" => Some(Self::Positive),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }

    fn check(self, value: Option<&Value>) -> bool {
        match self {
            Self::Integer => rules::is_integer(value),
            Self::NotEmpty => rules::is_not_empty(value),
            Self::Numeric => rules::is_numeric(value),
            Self::Positive => rules::is_positive(value),
            Self::Boolean => rules::is_boolean(value),
        }
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub constraint: Constraint,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint,
            message: message.into(),
        }
    }
}

/// Where a rule reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Path,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: &'static str,
    pub source: Source,
    pub constraint: Constraint,
    pub message: &'static str,
}

impl Rule {
    pub const fn path(field: &'static str, constraint: Constraint, message: &'static str) -> Self {
        Self {
            field,
            source: Source::Path,
            constraint,
            message,
        }
    }

    pub const fn body(field: &'static str, constraint: Constraint, message: &'static str) -> Self {
        Self {
            field,
            source: Source::Body,
            constraint,
            message,
        }
    }

    /// The error reported when this rule fails.
    pub fn failure(&self) -> FieldError {
        FieldError::new(self.field, self.constraint, self.message)
    }

    fn apply(&self, input: &RequestInput<'_>) -> Option<FieldError> {
        let value = input.lookup(self.source, self.field);
        if self.constraint.check(value.as_ref()) {
            None
        } else {
            Some(self.failure())
        }
    }
}

/// Raw request values a rule list runs against.
#[derive(Debug, Default)]
pub struct RequestInput<'a> {
    params: Vec<(&'static str, &'a str)>,
    body: Option<&'a Value>,
}

impl<'a> RequestInput<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: &'static str, value: &'a str) -> Self {
        self.params.push((name, value));
        self
    }

    pub fn with_body(mut self, body: &'a Value) -> Self {
        self.body = Some(body);
        self
    }

    fn lookup(&self, source: Source, field: &str) -> Option<Value> {
        match source {
            Source::Path => self
                .params
                .iter()
                .find(|(name, _)| *name == field)
                .map(|(_, v)| Value::String((*v).to_string())),
            Source::Body => self.body.and_then(|b| b.get(field)).cloned(),
        }
    }
}

/// Run every rule in order and collect all failures.
pub fn validate(rules: &[Rule], input: &RequestInput<'_>) -> Vec<FieldError> {
    rules.iter().filter_map(|rule| rule.apply(input)).collect()
}

/// Stop the request when any rule failed.
pub fn gate(errors: Vec<FieldError>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
