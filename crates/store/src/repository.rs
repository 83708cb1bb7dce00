use async_trait::async_trait;
use common::{CustomerId, OrderId, ProductId};

use crate::entities::{
    Customer, NewCustomer, NewOrder, NewOrderLine, NewProduct, Order, OrderDetails, Product,
};
use crate::error::Result;

/// Typed accessor for customer records.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Looks up a customer by id.
    async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>>;

    /// Returns all customers in insertion order.
    async fn all_customers(&self) -> Result<Vec<Customer>>;

    /// Inserts a customer and returns the record with its assigned id.
    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer>;

    /// Looks up a customer by exact email match.
    async fn customer_by_email(&self, email: &str) -> Result<Option<Customer>>;

    /// Returns true if any customer has the given email.
    async fn email_exists(&self, email: &str) -> Result<bool>;
}

/// Typed accessor for product records.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Looks up a product by id.
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>>;

    /// Returns all products in insertion order.
    async fn all_products(&self) -> Result<Vec<Product>>;

    /// Inserts a product and returns the record with its assigned id.
    async fn insert_product(&self, product: NewProduct) -> Result<Product>;

    /// Replaces a product record by id.
    async fn update_product(&self, product: &Product) -> Result<()>;

    /// Returns true if the product exists and has at least `quantity` in stock.
    async fn has_enough_stock(&self, id: ProductId, quantity: i32) -> Result<bool>;

    /// Decrements a product's stock by `quantity`.
    ///
    /// Read-modify-write, not guarded against concurrent decrement; a
    /// missing product is a silent no-op. Delivery of an order applies
    /// one decrement per line with no rollback on partial failure.
    async fn decrement_stock(&self, id: ProductId, quantity: i32) -> Result<()>;
}

/// Typed accessor for order records and their lines.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts an order and its lines as one atomic unit and returns the
    /// order with its assigned id.
    async fn insert_order(&self, order: NewOrder, lines: Vec<NewOrderLine>) -> Result<Order>;

    /// Replaces an order record by id. Lines are immutable once placed.
    async fn update_order(&self, order: &Order) -> Result<()>;

    /// Looks up an order with its customer and lines-with-products
    /// eager-loaded.
    async fn order_with_details(&self, id: OrderId) -> Result<Option<OrderDetails>>;

    /// Returns all orders placed by a customer.
    async fn orders_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>>;
}

/// Convenience bound for a complete store: all three repositories plus
/// the cloneability the HTTP layer needs to share it across handlers.
pub trait Store:
    CustomerRepository + ProductRepository + OrderRepository + Clone + Send + Sync + 'static
{
}

impl<T> Store for T where
    T: CustomerRepository + ProductRepository + OrderRepository + Clone + Send + Sync + 'static
{
}
