use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, never reused
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    /// `true` on creation
    #[schema(example = true)]
    pub availability: bool,
}

impl Product {
    /// Overwrite every mutable field.
    pub fn apply_update(&mut self, input: UpdateProduct) {
        self.name = input.name;
        self.price = input.price;
        self.availability = input.availability;
    }

    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
    }
}

/// Body of `POST /api/products`
///
/// Any `availability` sent by the client is ignored; new products start
/// available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, code = "not_empty", message = "The product name is required"))]
    #[schema(example = "Monitor")]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, code = "positive", message = "Invalid price"))]
    #[schema(example = 300.0)]
    pub price: f64,
}

/// Body of `PUT /api/products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, code = "not_empty", message = "The product name is required"))]
    #[schema(example = "Curved Monitor")]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, code = "positive", message = "Invalid price"))]
    #[schema(example = 350.0)]
    pub price: f64,

    #[schema(example = false)]
    pub availability: bool,
}

/// Body returned by a successful delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    #[schema(example = "Product deleted")]
    pub message: String,
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self {
            message: "Product deleted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 1,
            name: "Monitor".to_string(),
            price: 300.0,
            availability: true,
        }
    }

    #[test]
    fn test_apply_update_overwrites_all_fields() {
        let mut p = product();
        p.apply_update(UpdateProduct {
            name: "Keyboard".to_string(),
            price: 49.5,
            availability: false,
        });

        assert_eq!(p.id, 1);
        assert_eq!(p.name, "Keyboard");
        assert_eq!(p.price, 49.5);
        assert!(!p.availability);
    }

    #[test]
    fn test_toggle_twice_restores_value() {
        let mut p = product();
        p.toggle_availability();
        assert!(!p.availability);
        p.toggle_availability();
        assert_eq!(p, product());
    }

    #[test]
    fn test_create_product_validation() {
        let valid = CreateProduct {
            name: "Monitor".to_string(),
            price: 300.0,
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateProduct {
            name: String::new(),
            price: 0.0,
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("price"));
    }
}
