//! Read-side queries. This service never writes outside of seeding.

use rusqlite::Connection;

use crate::error::Result;
use crate::models::*;

use super::from_row::{
    query_all, query_one, ORDER_HEADER_COLS, ORDER_ITEM_COLS, PAYMENT_COLS, PRODUCT_DETAIL_COLS,
    PRODUCT_SUMMARY_COLS, USER_COLS,
};

/// Load a user by login identity, roles included.
pub fn get_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
    let user: Option<User> = query_one(
        conn,
        &format!("SELECT {} FROM users WHERE email = ?", USER_COLS),
        &[&email],
    )?;

    match user {
        Some(mut user) => {
            user.roles = get_user_roles(conn, user.id)?;
            Ok(Some(user))
        }
        None => Ok(None),
    }
}

pub fn get_user_roles(conn: &Connection, user_id: i64) -> Result<Vec<Role>> {
    let mut stmt =
        conn.prepare("SELECT authority FROM user_roles WHERE user_id = ? ORDER BY authority")?;
    let authorities = stmt
        .query_map([user_id], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(authorities
        .iter()
        .filter_map(|a| Role::from_str(a))
        .collect())
}

/// Load a full order aggregate: header + client, optional payment, and
/// line items in insertion order. Returns `None` when the order id has no
/// backing record.
pub fn get_order_aggregate(conn: &Connection, order_id: i64) -> Result<Option<OrderAggregate>> {
    let header: Option<OrderHeader> = query_one(
        conn,
        &format!(
            "SELECT {} FROM orders o JOIN users u ON u.id = o.client_id WHERE o.id = ?",
            ORDER_HEADER_COLS
        ),
        &[&order_id],
    )?;

    let Some(header) = header else {
        return Ok(None);
    };

    let payment: Option<PaymentRow> = query_one(
        conn,
        &format!("SELECT {} FROM payments WHERE order_id = ?", PAYMENT_COLS),
        &[&order_id],
    )?;

    let items: Vec<OrderItemRow> = query_all(
        conn,
        &format!(
            "SELECT {} FROM order_items oi \
             LEFT JOIN products p ON p.id = oi.product_id \
             WHERE oi.order_id = ? ORDER BY oi.rowid",
            ORDER_ITEM_COLS
        ),
        &[&order_id],
    )?;

    Ok(Some(OrderAggregate {
        header,
        payment,
        items,
    }))
}

/// Load a product with its nested categories.
pub fn get_product_detail(conn: &Connection, product_id: i64) -> Result<Option<ProductDetail>> {
    let product: Option<ProductDetail> = query_one(
        conn,
        &format!("SELECT {} FROM products WHERE id = ?", PRODUCT_DETAIL_COLS),
        &[&product_id],
    )?;

    match product {
        Some(mut product) => {
            product.categories = query_all(
                conn,
                "SELECT c.id, c.name FROM categories c \
                 JOIN product_categories pc ON pc.category_id = c.id \
                 WHERE pc.product_id = ? ORDER BY c.id",
                &[&product_id],
            )?;
            Ok(Some(product))
        }
        None => Ok(None),
    }
}

/// Case-insensitive substring search over product names, paginated and
/// ordered by id. Returns the page of summaries plus the total match count.
pub fn search_products(
    conn: &Connection,
    name_filter: &str,
    limit: i64,
    offset: i64,
) -> Result<(Vec<ProductSummary>, i64)> {
    let pattern = format!("%{}%", name_filter.to_lowercase());

    let products: Vec<ProductSummary> = query_all(
        conn,
        &format!(
            "SELECT {} FROM products WHERE LOWER(name) LIKE ? ORDER BY id LIMIT ? OFFSET ?",
            PRODUCT_SUMMARY_COLS
        ),
        &[&pattern, &limit, &offset],
    )?;

    let total: i64 = conn.query_row(
        "SELECT COUNT(*) FROM products WHERE LOWER(name) LIKE ?",
        [&pattern],
        |row| row.get(0),
    )?;

    Ok((products, total))
}
