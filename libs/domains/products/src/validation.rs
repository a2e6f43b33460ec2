//! Field rules for each product operation and the readers that turn a
//! validated request into typed input.

use axum_helpers::validation::rules::{as_bool, as_i32, as_number, as_text};
use axum_helpers::{AppError, Constraint, RequestInput, Rule, gate, validate};
use serde_json::Value;
use strum::{Display, EnumIter};

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, UpdateProduct};

const ID_INTEGER: Rule = Rule::path("id", Constraint::Integer, "Invalid ID");
const NAME_REQUIRED: Rule = Rule::body("name", Constraint::NotEmpty, "The product name is required");
const PRICE_NUMERIC: Rule = Rule::body("price", Constraint::Numeric, "The price must be a number");
const PRICE_REQUIRED: Rule =
    Rule::body("price", Constraint::NotEmpty, "The product price is required");
const PRICE_POSITIVE: Rule = Rule::body("price", Constraint::Positive, "Invalid price");
const AVAILABILITY_BOOLEAN: Rule =
    Rule::body("availability", Constraint::Boolean, "Invalid availability value");

const ID_RULES: &[Rule] = &[ID_INTEGER];
const CREATE_RULES: &[Rule] = &[NAME_REQUIRED, PRICE_NUMERIC, PRICE_REQUIRED, PRICE_POSITIVE];
const UPDATE_RULES: &[Rule] = &[
    ID_INTEGER,
    NAME_REQUIRED,
    PRICE_NUMERIC,
    PRICE_REQUIRED,
    PRICE_POSITIVE,
    AVAILABILITY_BOOLEAN,
];

/// The six product endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ProductOperation {
    List,
    Get,
    Create,
    Update,
    ToggleAvailability,
    Delete,
}

impl ProductOperation {
    /// Rules run, in this order, before the handler.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Self::List => &[],
            Self::Get | Self::ToggleAvailability | Self::Delete => ID_RULES,
            Self::Create => CREATE_RULES,
            Self::Update => UPDATE_RULES,
        }
    }

    /// Validate then gate: every rule runs, any failure stops the request.
    pub fn check(self, input: &RequestInput<'_>) -> Result<(), AppError> {
        let errors = validate(self.rules(), input);
        if !errors.is_empty() {
            tracing::debug!(operation = %self, failed = errors.len(), "Request rejected by validation");
        }
        gate(errors)
    }
}

fn read<T>(body: &Value, rule: &Rule, reader: fn(&Value) -> Option<T>) -> ProductResult<T> {
    body.get(rule.field)
        .and_then(reader)
        .ok_or_else(|| ProductError::Validation(vec![rule.failure()]))
}

/// Path id of a request that passed [`ProductOperation::check`].
pub fn parse_id(raw: &str) -> ProductResult<i32> {
    as_i32(&Value::String(raw.to_string()))
        .ok_or_else(|| ProductError::Validation(vec![ID_INTEGER.failure()]))
}

impl CreateProduct {
    /// Typed input from a body that passed the create rules.
    pub fn from_body(body: &Value) -> ProductResult<Self> {
        Ok(Self {
            name: read(body, &NAME_REQUIRED, as_text)?,
            price: read(body, &PRICE_NUMERIC, as_number)?,
        })
    }
}

impl UpdateProduct {
    /// Typed input from a body that passed the update rules.
    pub fn from_body(body: &Value) -> ProductResult<Self> {
        Ok(Self {
            name: read(body, &NAME_REQUIRED, as_text)?,
            price: read(body, &PRICE_NUMERIC, as_number)?,
            availability: read(body, &AVAILABILITY_BOOLEAN, as_bool)?,
        })
    }
}
