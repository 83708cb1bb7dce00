//! Business workflows for the storefront API.
//!
//! This crate provides:
//! - Request payloads and response projections (DTOs)
//! - Structural validators producing violation lists as data
//! - The customer and order workflows over the repository traits
//! - The domain error taxonomy

pub mod customer;
pub mod dto;
pub mod error;
pub mod order;
pub mod validation;

pub use customer::CustomerService;
pub use dto::{
    CreateCustomerRequest, CreateOrderRequest, CustomerDto, OrderLineRequest, OrderSummary,
    UpdateOrderStatusRequest,
};
pub use error::DomainError;
pub use order::OrderService;
pub use validation::{
    Violation, validate_create_customer, validate_create_order, validate_status_update,
};
