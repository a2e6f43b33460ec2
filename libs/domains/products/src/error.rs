use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, Constraint, FieldError};
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(i32),

    #[error("Invalid input on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Field errors from the `validator` derive, ordered by field name.
impl From<ValidationErrors> for ProductError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let details = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().filter_map(move |e| {
                    let constraint = Constraint::from_code(&e.code)?;
                    let message = e
                        .message
                        .as_deref()
                        .unwrap_or(constraint_message(constraint));
                    Some(FieldError::new(field.to_string(), constraint, message))
                })
            })
            .collect();

        ProductError::Validation(details)
    }
}

fn constraint_message(constraint: Constraint) -> &'static str {
    match constraint {
        Constraint::Integer => "Invalid ID",
        Constraint::NotEmpty => "Value is required",
        Constraint::Numeric => "Value must be a number",
        Constraint::Positive => "Value must be greater than zero",
        Constraint::Boolean => "Value must be a boolean",
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Validation(details) => AppError::Validation(details),
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
