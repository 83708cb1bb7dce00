//! Order placement and status-update workflow.
//!
//! Failure precedence for placement is strict: structural validation
//! first, then customer existence, then per-line product checks in
//! submission order, short-circuiting at the first failing line.

use chrono::Utc;
use common::{CustomerId, Money, OrderId, ProductId};
use store::{NewOrder, NewOrderLine, OrderStatus, Store};

use crate::dto::{CreateOrderRequest, OrderSummary, UpdateOrderStatusRequest};
use crate::error::DomainError;
use crate::validation::{Violation, validate_create_order, validate_status_update};

/// Service for placing orders and moving them through their lifecycle.
pub struct OrderService<S> {
    store: S,
}

impl<S: Store> OrderService<S> {
    /// Creates a new order service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Places an order.
    ///
    /// Each line's unit price is frozen at the value read during the
    /// stock-check pass; the total is the sum of those frozen subtotals.
    /// Stock is read here but not reserved — the decrement happens at
    /// delivery time and is not atomic with this check.
    #[tracing::instrument(skip(self, req))]
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<OrderSummary, DomainError> {
        let violations = validate_create_order(&req);
        if !violations.is_empty() {
            return Err(DomainError::Validation(violations));
        }

        let customer = self
            .store
            .find_customer(CustomerId::new(req.customer_id))
            .await?
            .ok_or(DomainError::CustomerNotFound)?;

        let mut lines = Vec::with_capacity(req.products.len());
        let mut total = Money::zero();

        for line_req in &req.products {
            let product_id = ProductId::new(line_req.product_id);
            let product = self
                .store
                .find_product(product_id)
                .await?
                .ok_or(DomainError::ProductNotFound(product_id))?;

            if !self
                .store
                .has_enough_stock(product_id, line_req.quantity)
                .await?
            {
                return Err(DomainError::InsufficientStock(product.name));
            }

            total += product.price.times(line_req.quantity);
            lines.push(NewOrderLine {
                product_id,
                quantity: line_req.quantity,
                unit_price: product.price,
            });
        }

        let line_count = lines.len();
        let order = self
            .store
            .insert_order(
                NewOrder {
                    customer_id: customer.id,
                    order_date: Utc::now(),
                    status: OrderStatus::Pending,
                    total_price: total,
                },
                lines,
            )
            .await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id, customer_id = %customer.id, total = %order.total_price, "order placed");

        Ok(OrderSummary {
            id: order.id,
            customer_name: customer.name,
            status: order.status,
            product_count: line_count,
            order_date: order.order_date,
            total_price: order.total_price.as_dollars(),
        })
    }

    /// Looks up an order's summary projection by id.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Option<OrderSummary>, DomainError> {
        let details = self.store.order_with_details(id).await?;
        Ok(details.as_ref().map(OrderSummary::from))
    }

    /// Updates an order's status.
    ///
    /// The status is assigned unconditionally; the stock side effect
    /// keys off the target value, so re-applying `Delivered` to an
    /// already-delivered order decrements stock again. The per-line
    /// decrements are individual updates with no rollback on partial
    /// failure.
    #[tracing::instrument(skip(self, req))]
    pub async fn update_status(
        &self,
        id: OrderId,
        req: UpdateOrderStatusRequest,
    ) -> Result<(), DomainError> {
        let violations = validate_status_update(&req);
        if !violations.is_empty() {
            return Err(DomainError::Validation(violations));
        }
        let Some(new_status) = OrderStatus::parse(&req.status) else {
            return Err(DomainError::Validation(vec![Violation::new(
                "Status must be either 'Pending' or 'Delivered'",
            )]));
        };

        let details = self
            .store
            .order_with_details(id)
            .await?
            .ok_or(DomainError::OrderNotFound(id))?;

        let mut order = details.order;
        order.status = new_status;

        if new_status == OrderStatus::Delivered {
            for detail in &details.lines {
                self.store
                    .decrement_stock(detail.line.product_id, detail.line.quantity)
                    .await?;
            }
        }

        self.store.update_order(&order).await?;

        tracing::info!(order_id = %id, status = %new_status, "order status updated");

        Ok(())
    }
}
