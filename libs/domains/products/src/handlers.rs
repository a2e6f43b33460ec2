//! HTTP handlers for Products API
//!
//! Every handler runs the same pipeline: field rules for its operation, the
//! input-error gate, then the service call.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, Constraint, FieldError, JsonBody, RequestInput,
    errors::responses::{
        BadRequestValidationResponse, ForbiddenOriginResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateProduct, DeleteConfirmation, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{ProductOperation, parse_id};

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, DeleteConfirmation, FieldError, Constraint),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ForbiddenOriginResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R> = State<Arc<ProductService<R>>>;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products, ascending by id", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): SharedService<R>,
) -> Result<Json<Vec<Product>>, AppError> {
    ProductOperation::List.check(&RequestInput::new())?;
    Ok(Json(service.list_products().await?))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created, available", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): SharedService<R>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    ProductOperation::Create.check(&RequestInput::new().with_body(&body))?;

    let input = CreateProduct::from_body(&body)?;
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    ProductOperation::Get.check(&RequestInput::new().with_param("id", &id))?;
    Ok(Json(service.get_product(parse_id(&id)?).await?))
}

/// Replace a product's name, price and availability
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Product>, AppError> {
    ProductOperation::Update.check(&RequestInput::new().with_param("id", &id).with_body(&body))?;

    let input = UpdateProduct::from_body(&body)?;
    Ok(Json(service.update_product(parse_id(&id)?, input).await?))
}

/// Flip a product's availability
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    ProductOperation::ToggleAvailability.check(&RequestInput::new().with_param("id", &id))?;
    Ok(Json(service.toggle_availability(parse_id(&id)?).await?))
}

/// Delete a product permanently
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteConfirmation),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    ProductOperation::Delete.check(&RequestInput::new().with_param("id", &id))?;
    Ok(Json(service.delete_product(parse_id(&id)?).await?))
}
