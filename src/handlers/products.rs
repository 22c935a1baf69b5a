use axum::extract::State;

use crate::db::{queries, AppState};
use crate::error::{AppError, Result};
use crate::extractors::{Json, Path, Query};
use crate::models::{ProductDetail, ProductSummary};
use crate::pagination::{Page, PageQuery};

/// `GET /products/{id}` — product detail with nested categories.
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<ProductDetail>> {
    let conn = state.db.get()?;
    let product = queries::get_product_detail(&conn, product_id)?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
    Ok(Json(product))
}

/// `GET /products?name=&page=&size=` — paged catalog listing with an
/// optional case-insensitive name filter.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<ProductSummary>>> {
    let conn = state.db.get()?;
    let size = query.size();
    let page = query.page();
    let (products, total) =
        queries::search_products(&conn, query.name_filter(), size, query.offset())?;
    Ok(Json(Page::new(products, total, size, page)))
}
