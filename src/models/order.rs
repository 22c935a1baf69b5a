use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    WaitingPayment,
    Paid,
    Shipped,
    Delivered,
    Canceled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::WaitingPayment => "WAITING_PAYMENT",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Canceled => "CANCELED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "WAITING_PAYMENT" => Some(OrderStatus::WaitingPayment),
            "PAID" => Some(OrderStatus::Paid),
            "SHIPPED" => Some(OrderStatus::Shipped),
            "DELIVERED" => Some(OrderStatus::Delivered),
            "CANCELED" => Some(OrderStatus::Canceled),
            _ => None,
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::from_str(s).ok_or(())
    }
}

/// Order header joined with its owning client, as loaded from storage.
#[derive(Debug, Clone)]
pub struct OrderHeader {
    pub id: i64,
    /// Creation moment, UNIX seconds UTC.
    pub moment: i64,
    pub status: OrderStatus,
    pub client_id: i64,
    pub client_name: String,
    pub client_email: String,
}

#[derive(Debug, Clone)]
pub struct PaymentRow {
    pub id: i64,
    pub moment: i64,
}

/// Line item joined with its product. Product columns are optional because
/// the join is outer: a dangling product reference must surface as a
/// malformed aggregate, not a panic.
#[derive(Debug, Clone)]
pub struct OrderItemRow {
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub img_url: Option<String>,
    /// Unit price captured at purchase time.
    pub price: Decimal,
    pub quantity: i64,
}

/// Fully loaded order aggregate: header + client, optional payment, and
/// line items in insertion order.
#[derive(Debug, Clone)]
pub struct OrderAggregate {
    pub header: OrderHeader,
    pub payment: Option<PaymentRow>,
    pub items: Vec<OrderItemRow>,
}
