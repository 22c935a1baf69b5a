//! Order read-model assembly.
//!
//! Transforms a loaded [`OrderAggregate`] into the externally visible
//! representation. The total is computed here at read time with decimal
//! arithmetic, never stored.

use chrono::DateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{OrderAggregate, OrderItemRow, OrderStatus};

#[derive(Debug, Clone, Serialize)]
pub struct ClientSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentSummary {
    pub id: i64,
    /// ISO-8601 UTC, second precision.
    pub moment: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetail {
    pub product_id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
    pub img_url: Option<String>,
    pub sub_total: Decimal,
}

/// Externally visible order representation.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    pub id: i64,
    pub moment: String,
    pub status: OrderStatus,
    pub client: ClientSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentSummary>,
    pub items: Vec<OrderItemDetail>,
    pub total: Decimal,
}

/// Format a UNIX-seconds timestamp as ISO-8601 UTC with second precision.
fn format_moment(ts: i64) -> Result<String> {
    let moment = DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| AppError::MalformedAggregate(format!("timestamp {} out of range", ts)))?;
    Ok(moment.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

fn assemble_item(order_id: i64, row: &OrderItemRow) -> Result<OrderItemDetail> {
    let product_id = row.product_id.ok_or_else(|| {
        AppError::MalformedAggregate(format!("order {} has an item with no product", order_id))
    })?;
    let name = row.product_name.clone().ok_or_else(|| {
        AppError::MalformedAggregate(format!(
            "order {} references missing product {}",
            order_id, product_id
        ))
    })?;
    Ok(OrderItemDetail {
        product_id,
        name,
        price: row.price,
        quantity: row.quantity,
        img_url: row.img_url.clone(),
        sub_total: row.price * Decimal::from(row.quantity),
    })
}

/// Assemble the read-model for a loaded order aggregate.
///
/// Fails with `MalformedAggregate` (mapped to 500) when an item references
/// no product; the aggregate is otherwise taken at face value.
pub fn assemble_order(agg: &OrderAggregate) -> Result<OrderDetail> {
    let items = agg
        .items
        .iter()
        .map(|row| assemble_item(agg.header.id, row))
        .collect::<Result<Vec<_>>>()?;

    let total: Decimal = items.iter().map(|item| item.sub_total).sum();

    let payment = agg
        .payment
        .as_ref()
        .map(|p| -> Result<PaymentSummary> {
            Ok(PaymentSummary {
                id: p.id,
                moment: format_moment(p.moment)?,
            })
        })
        .transpose()?;

    Ok(OrderDetail {
        id: agg.header.id,
        moment: format_moment(agg.header.moment)?,
        status: agg.header.status,
        client: ClientSummary {
            id: agg.header.client_id,
            name: agg.header.client_name.clone(),
        },
        payment,
        items,
        total: total.round_dp(2),
    })
}
