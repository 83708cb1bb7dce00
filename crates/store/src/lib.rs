//! Persistent store for the storefront API.
//!
//! Defines the entity records, the per-entity repository traits, and two
//! interchangeable implementations: an in-memory store for tests and
//! local runs, and a PostgreSQL store backed by sqlx.

pub mod entities;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;
pub mod seed;

pub use common::{CustomerId, Money, OrderId, ProductId};
pub use entities::{
    Customer, NewCustomer, NewOrder, NewOrderLine, NewProduct, Order, OrderDetails, OrderLine,
    OrderLineDetail, OrderStatus, Product,
};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use repository::{CustomerRepository, OrderRepository, ProductRepository, Store};
pub use seed::seed_products;
