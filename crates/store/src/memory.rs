use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{CustomerId, OrderId, ProductId};

use crate::entities::{
    Customer, NewCustomer, NewOrder, NewOrderLine, NewProduct, Order, OrderDetails, OrderLine,
    OrderLineDetail, Product,
};
use crate::error::Result;
use crate::repository::{CustomerRepository, OrderRepository, ProductRepository};

#[derive(Default)]
struct Inner {
    customers: Vec<Customer>,
    products: Vec<Product>,
    orders: Vec<Order>,
    lines: Vec<OrderLine>,
    next_customer_id: i64,
    next_product_id: i64,
    next_order_id: i64,
}

/// In-memory store implementation for testing and local runs.
///
/// Stores all records behind a single `RwLock` and provides the same
/// interface as the PostgreSQL implementation. Ids are assigned
/// sequentially starting at 1.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of orders stored.
    pub async fn order_count(&self) -> usize {
        self.inner.read().await.orders.len()
    }

    /// Clears all records.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        *inner = Inner::default();
    }
}

#[async_trait]
impl CustomerRepository for MemoryStore {
    async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        let inner = self.inner.read().await;
        Ok(inner.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn all_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.inner.read().await.customers.clone())
    }

    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer> {
        let mut inner = self.inner.write().await;
        inner.next_customer_id += 1;
        let record = Customer {
            id: CustomerId::new(inner.next_customer_id),
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
        };
        inner.customers.push(record.clone());
        Ok(record)
    }

    async fn customer_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let inner = self.inner.read().await;
        Ok(inner.customers.iter().find(|c| c.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool> {
        let inner = self.inner.read().await;
        Ok(inner.customers.iter().any(|c| c.email == email))
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.products.iter().find(|p| p.id == id).cloned())
    }

    async fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.inner.read().await.products.clone())
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product> {
        let mut inner = self.inner.write().await;
        inner.next_product_id += 1;
        let record = Product {
            id: ProductId::new(inner.next_product_id),
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        };
        inner.products.push(record.clone());
        Ok(record)
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.products.iter_mut().find(|p| p.id == product.id) {
            *existing = product.clone();
        }
        Ok(())
    }

    async fn has_enough_stock(&self, id: ProductId, quantity: i32) -> Result<bool> {
        let inner = self.inner.read().await;
        Ok(inner
            .products
            .iter()
            .any(|p| p.id == id && p.stock >= quantity))
    }

    async fn decrement_stock(&self, id: ProductId, quantity: i32) -> Result<()> {
        let mut inner = self.inner.write().await;
        if let Some(product) = inner.products.iter_mut().find(|p| p.id == id) {
            product.stock -= quantity;
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn insert_order(&self, order: NewOrder, lines: Vec<NewOrderLine>) -> Result<Order> {
        let mut inner = self.inner.write().await;
        inner.next_order_id += 1;
        let record = Order {
            id: OrderId::new(inner.next_order_id),
            customer_id: order.customer_id,
            order_date: order.order_date,
            status: order.status,
            total_price: order.total_price,
        };
        inner.orders.push(record.clone());
        for line in lines {
            inner.lines.push(OrderLine {
                order_id: record.id,
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
            });
        }
        Ok(record)
    }

    async fn update_order(&self, order: &Order) -> Result<()> {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.orders.iter_mut().find(|o| o.id == order.id) {
            *existing = order.clone();
        }
        Ok(())
    }

    async fn order_with_details(&self, id: OrderId) -> Result<Option<OrderDetails>> {
        let inner = self.inner.read().await;
        let Some(order) = inner.orders.iter().find(|o| o.id == id).cloned() else {
            return Ok(None);
        };
        let Some(customer) = inner
            .customers
            .iter()
            .find(|c| c.id == order.customer_id)
            .cloned()
        else {
            return Ok(None);
        };
        let lines = inner
            .lines
            .iter()
            .filter(|l| l.order_id == id)
            .map(|line| {
                let product = inner
                    .products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .cloned()
                    .expect("order line references a stored product");
                OrderLineDetail {
                    line: line.clone(),
                    product,
                }
            })
            .collect();
        Ok(Some(OrderDetails {
            order,
            customer,
            lines,
        }))
    }

    async fn orders_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use common::Money;

    use super::*;
    use crate::entities::OrderStatus;

    fn new_customer(email: &str) -> NewCustomer {
        NewCustomer {
            name: "Ada".to_string(),
            email: email.to_string(),
            phone: String::new(),
        }
    }

    fn new_product(stock: i32) -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: Money::from_cents(1000),
            stock,
        }
    }

    #[tokio::test]
    async fn insert_customer_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = store.insert_customer(new_customer("a@x.com")).await.unwrap();
        let second = store.insert_customer(new_customer("b@x.com")).await.unwrap();
        assert_eq!(first.id.as_i64(), 1);
        assert_eq!(second.id.as_i64(), 2);

        let found = store.find_customer(first.id).await.unwrap().unwrap();
        assert_eq!(found, first);
    }

    #[tokio::test]
    async fn email_exists_matches_exactly() {
        let store = MemoryStore::new();
        store.insert_customer(new_customer("a@x.com")).await.unwrap();
        assert!(store.email_exists("a@x.com").await.unwrap());
        assert!(!store.email_exists("A@x.com").await.unwrap());
        assert!(!store.email_exists("b@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn stock_check_and_decrement() {
        let store = MemoryStore::new();
        let product = store.insert_product(new_product(5)).await.unwrap();

        assert!(store.has_enough_stock(product.id, 5).await.unwrap());
        assert!(!store.has_enough_stock(product.id, 6).await.unwrap());
        assert!(!store.has_enough_stock(ProductId::new(99), 1).await.unwrap());

        store.decrement_stock(product.id, 2).await.unwrap();
        let reloaded = store.find_product(product.id).await.unwrap().unwrap();
        assert_eq!(reloaded.stock, 3);
    }

    #[tokio::test]
    async fn decrement_of_missing_product_is_a_no_op() {
        let store = MemoryStore::new();
        store.decrement_stock(ProductId::new(42), 1).await.unwrap();
    }

    #[tokio::test]
    async fn insert_order_persists_order_and_lines_together() {
        let store = MemoryStore::new();
        let customer = store.insert_customer(new_customer("a@x.com")).await.unwrap();
        let product = store.insert_product(new_product(5)).await.unwrap();

        let order = store
            .insert_order(
                NewOrder {
                    customer_id: customer.id,
                    order_date: Utc::now(),
                    status: OrderStatus::Pending,
                    total_price: Money::from_cents(2000),
                },
                vec![NewOrderLine {
                    product_id: product.id,
                    quantity: 2,
                    unit_price: Money::from_cents(1000),
                }],
            )
            .await
            .unwrap();
        assert_eq!(order.id.as_i64(), 1);

        let details = store.order_with_details(order.id).await.unwrap().unwrap();
        assert_eq!(details.customer.id, customer.id);
        assert_eq!(details.lines.len(), 1);
        assert_eq!(details.lines[0].line.quantity, 2);
        assert_eq!(details.lines[0].product.id, product.id);
    }

    #[tokio::test]
    async fn order_with_details_returns_none_when_absent() {
        let store = MemoryStore::new();
        assert!(store
            .order_with_details(OrderId::new(1))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_order_replaces_status() {
        let store = MemoryStore::new();
        let customer = store.insert_customer(new_customer("a@x.com")).await.unwrap();
        let product = store.insert_product(new_product(5)).await.unwrap();
        let mut order = store
            .insert_order(
                NewOrder {
                    customer_id: customer.id,
                    order_date: Utc::now(),
                    status: OrderStatus::Pending,
                    total_price: Money::from_cents(1000),
                },
                vec![NewOrderLine {
                    product_id: product.id,
                    quantity: 1,
                    unit_price: Money::from_cents(1000),
                }],
            )
            .await
            .unwrap();

        order.status = OrderStatus::Delivered;
        store.update_order(&order).await.unwrap();

        let details = store.order_with_details(order.id).await.unwrap().unwrap();
        assert_eq!(details.order.status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn orders_by_customer_filters_by_owner() {
        let store = MemoryStore::new();
        let a = store.insert_customer(new_customer("a@x.com")).await.unwrap();
        let b = store.insert_customer(new_customer("b@x.com")).await.unwrap();
        let product = store.insert_product(new_product(10)).await.unwrap();

        for customer_id in [a.id, a.id, b.id] {
            store
                .insert_order(
                    NewOrder {
                        customer_id,
                        order_date: Utc::now(),
                        status: OrderStatus::Pending,
                        total_price: Money::from_cents(1000),
                    },
                    vec![NewOrderLine {
                        product_id: product.id,
                        quantity: 1,
                        unit_price: Money::from_cents(1000),
                    }],
                )
                .await
                .unwrap();
        }

        assert_eq!(store.orders_by_customer(a.id).await.unwrap().len(), 2);
        assert_eq!(store.orders_by_customer(b.id).await.unwrap().len(), 1);
    }
}
