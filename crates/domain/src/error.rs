//! Domain error taxonomy.

use common::{OrderId, ProductId};
use store::StoreError;
use thiserror::Error;

use crate::validation::Violation;

/// Errors produced by the customer and order workflows.
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more structural validation rules were violated.
    /// Payload-shape rules are always reported together.
    #[error("Validation failed")]
    Validation(Vec<Violation>),

    /// The order's customer does not exist.
    #[error("Customer not found")]
    CustomerNotFound,

    /// A referenced product does not exist.
    #[error("Product with ID {0} not found")]
    ProductNotFound(ProductId),

    /// The order does not exist.
    #[error("Order with ID {0} not found")]
    OrderNotFound(OrderId),

    /// Another customer already uses this email.
    #[error("A customer with this email already exists")]
    DuplicateEmail,

    /// A line's quantity exceeds the product's available stock.
    #[error("Insufficient stock for product {0}")]
    InsufficientStock(String),

    /// Unexpected store/infrastructure failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
