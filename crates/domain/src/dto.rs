//! Request payloads and response projections.
//!
//! JSON field names are camelCase on the wire. Monetary fields are
//! projected as decimal dollars; internally everything is [`Money`]
//! cents.

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId};
use serde::{Deserialize, Serialize};
use store::{Customer, OrderDetails, OrderStatus};

// -- Request types --

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Missing numeric fields default to zero so the validators report them
/// as rule violations instead of the deserializer rejecting the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub customer_id: i64,
    #[serde(default)]
    pub products: Vec<OrderLineRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    #[serde(default)]
    pub product_id: i64,
    #[serde(default)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    #[serde(default)]
    pub status: String,
}

// -- Response types --

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
        }
    }
}

/// Summary projection of an order: the customer's display name, the
/// line count, and the frozen total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer_name: String,
    pub status: OrderStatus,
    pub product_count: usize,
    pub order_date: DateTime<Utc>,
    pub total_price: f64,
}

impl From<&OrderDetails> for OrderSummary {
    fn from(details: &OrderDetails) -> Self {
        Self {
            id: details.order.id,
            customer_name: details.customer.name.clone(),
            status: details.order.status,
            product_count: details.lines.len(),
            order_date: details.order.order_date,
            total_price: details.order.total_price.as_dollars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_order_request_defaults_missing_fields() {
        let req: CreateOrderRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.customer_id, 0);
        assert!(req.products.is_empty());

        let req: CreateOrderRequest =
            serde_json::from_str(r#"{"customerId": 1, "products": [{"productId": 2}]}"#).unwrap();
        assert_eq!(req.customer_id, 1);
        assert_eq!(req.products[0].product_id, 2);
        assert_eq!(req.products[0].quantity, 0);
    }

    #[test]
    fn customer_dto_serializes_camel_case() {
        let dto = CustomerDto {
            id: CustomerId::new(1),
            name: "Ada".to_string(),
            email: "a@x.com".to_string(),
            phone: String::new(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["phone"], "");
    }

    #[test]
    fn order_summary_serializes_status_and_dollars() {
        let summary = OrderSummary {
            id: OrderId::new(1),
            customer_name: "Ada".to_string(),
            status: OrderStatus::Pending,
            product_count: 1,
            order_date: Utc::now(),
            total_price: 20.0,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["productCount"], 1);
        assert_eq!(json["totalPrice"], 20.0);
        assert_eq!(json["customerName"], "Ada");
    }
}
