//! Row mapping trait and helpers for reducing boilerplate in queries.
//!
//! This module provides a `FromRow` trait that models can implement to
//! define how they are constructed from database rows, plus helper functions
//! for common query patterns.

use rusqlite::{Connection, OptionalExtension, Row, ToSql};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::*;

/// Parse a string column into an enum type, converting parse errors to
/// rusqlite errors instead of panicking on invalid stored values.
fn parse_enum<T: FromStr>(row: &Row, col: usize, col_name: &str) -> rusqlite::Result<T> {
    row.get::<_, String>(col)?.parse::<T>().map_err(|_| {
        rusqlite::Error::InvalidColumnType(col, col_name.to_string(), rusqlite::types::Type::Text)
    })
}

/// Parse a TEXT price column into a `Decimal`.
fn parse_decimal(row: &Row, col: usize, col_name: &str) -> rusqlite::Result<Decimal> {
    let raw: String = row.get(col)?;
    Decimal::from_str(&raw).map_err(|_| {
        rusqlite::Error::InvalidColumnType(col, col_name.to_string(), rusqlite::types::Type::Text)
    })
}

/// Trait for constructing a type from a database row.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

/// Query for a single optional result.
pub fn query_one<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> crate::error::Result<Option<T>> {
    conn.query_row(sql, params, T::from_row)
        .optional()
        .map_err(Into::into)
}

/// Query for multiple results.
pub fn query_all<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> crate::error::Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, T::from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

// ============ SQL SELECT Constants ============

pub const USER_COLS: &str = "id, name, email, phone, birth_date, password_hash";

pub const PRODUCT_SUMMARY_COLS: &str = "id, name, price, img_url";

pub const PRODUCT_DETAIL_COLS: &str = "id, name, description, price, img_url";

/// Order header joined with the owning client.
pub const ORDER_HEADER_COLS: &str =
    "o.id, o.moment, o.status, u.id, u.name, u.email";

pub const PAYMENT_COLS: &str = "id, moment";

/// Line items left-joined with products; product columns are nullable so a
/// dangling reference surfaces as a malformed aggregate instead of a panic.
pub const ORDER_ITEM_COLS: &str =
    "p.id, p.name, p.img_url, oi.price, oi.quantity";

// ============ FromRow Implementations ============

impl FromRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            birth_date: row.get(4)?,
            password_hash: row.get(5)?,
            // roles are loaded separately from user_roles
            roles: Vec::new(),
        })
    }
}

impl FromRow for Category {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }
}

impl FromRow for ProductSummary {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(ProductSummary {
            id: row.get(0)?,
            name: row.get(1)?,
            price: parse_decimal(row, 2, "price")?,
            img_url: row.get(3)?,
        })
    }
}

impl FromRow for ProductDetail {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(ProductDetail {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            price: parse_decimal(row, 3, "price")?,
            img_url: row.get(4)?,
            // categories are loaded separately
            categories: Vec::new(),
        })
    }
}

impl FromRow for OrderHeader {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(OrderHeader {
            id: row.get(0)?,
            moment: row.get(1)?,
            status: parse_enum(row, 2, "status")?,
            client_id: row.get(3)?,
            client_name: row.get(4)?,
            client_email: row.get(5)?,
        })
    }
}

impl FromRow for PaymentRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(PaymentRow {
            id: row.get(0)?,
            moment: row.get(1)?,
        })
    }
}

impl FromRow for OrderItemRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(OrderItemRow {
            product_id: row.get(0)?,
            product_name: row.get(1)?,
            img_url: row.get(2)?,
            price: parse_decimal(row, 3, "price")?,
            quantity: row.get(4)?,
        })
    }
}
