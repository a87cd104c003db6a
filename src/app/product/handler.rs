//! 商品处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use tracing::info;

use super::model::{Product, ProductFields};
use crate::{app::AppState, core::error::CoreError};

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let Json(fields) = payload?;

    let id = state.products.insert(&fields).await?;
    info!("Created product: {} ({})", fields.name, id);

    Ok((StatusCode::CREATED, Json(fields.into_product(id))))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.products.select_all().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let Path(id) = id?;

    let product = state
        .products
        .select_by_id(id)
        .await?
        .ok_or_else(|| CoreError::product_not_found(id))?;

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductFields>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    let Path(id) = id?;
    let Json(fields) = payload?;

    let product = state
        .products
        .update_by_id(id, &fields)
        .await?
        .ok_or_else(|| CoreError::product_not_found(id))?;
    info!("Updated product: {} ({})", product.name, product.id);

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let Path(id) = id?;

    let product = state
        .products
        .delete_by_id(id)
        .await?
        .ok_or_else(|| CoreError::product_not_found(id))?;
    info!("Deleted product: {} ({})", product.name, product.id);

    Ok(Json(product))
}
