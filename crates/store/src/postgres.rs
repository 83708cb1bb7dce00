use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use common::{CustomerId, Money, OrderId, ProductId};

use crate::entities::{
    Customer, NewCustomer, NewOrder, NewOrderLine, NewProduct, Order, OrderDetails, OrderLine,
    OrderLineDetail, OrderStatus, Product,
};
use crate::error::Result;
use crate::repository::{CustomerRepository, OrderRepository, ProductRepository};

/// PostgreSQL-backed store implementation.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new PostgreSQL store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_customer(row: &PgRow) -> Result<Customer> {
        Ok(Customer {
            id: CustomerId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
        })
    }

    fn row_to_product(row: &PgRow) -> Result<Product> {
        Ok(Product {
            id: ProductId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: Money::from_cents(row.try_get("price_cents")?),
            stock: row.try_get("stock")?,
        })
    }

    fn row_to_order(row: &PgRow) -> Result<Order> {
        let status: String = row.try_get("status")?;
        let status = OrderStatus::parse(&status)
            .ok_or_else(|| sqlx::Error::Decode(format!("unknown order status: {status}").into()))?;
        Ok(Order {
            id: OrderId::new(row.try_get("id")?),
            customer_id: CustomerId::new(row.try_get("customer_id")?),
            order_date: row.try_get("order_date")?,
            status,
            total_price: Money::from_cents(row.try_get("total_cents")?),
        })
    }
}

#[async_trait]
impl CustomerRepository for PostgresStore {
    async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        let row = sqlx::query("SELECT id, name, email, phone FROM customers WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(Self::row_to_customer).transpose()
    }

    async fn all_customers(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query("SELECT id, name, email, phone FROM customers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(Self::row_to_customer).collect()
    }

    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO customers (name, email, phone) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(Customer {
            id: CustomerId::new(id),
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
        })
    }

    async fn customer_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let row = sqlx::query("SELECT id, name, email, phone FROM customers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(Self::row_to_customer).transpose()
    }

    async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM customers WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}

#[async_trait]
impl ProductRepository for PostgresStore {
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>> {
        let row = sqlx::query(
            "SELECT id, name, description, price_cents, stock FROM products WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn all_products(&self) -> Result<Vec<Product>> {
        let rows =
            sqlx::query("SELECT id, name, description, price_cents, stock FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        rows.iter().map(Self::row_to_product).collect()
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, description, price_cents, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.cents())
        .bind(product.stock)
        .fetch_one(&self.pool)
        .await?;
        Ok(Product {
            id: ProductId::new(id),
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        })
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE products
            SET name = $2, description = $3, price_cents = $4, stock = $5
            WHERE id = $1
            "#,
        )
        .bind(product.id.as_i64())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.cents())
        .bind(product.stock)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn has_enough_stock(&self, id: ProductId, quantity: i32) -> Result<bool> {
        let stock: Option<i32> = sqlx::query_scalar("SELECT stock FROM products WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;
        Ok(stock.is_some_and(|s| s >= quantity))
    }

    async fn decrement_stock(&self, id: ProductId, quantity: i32) -> Result<()> {
        // Single UPDATE so the read-modify-write is at least row-atomic;
        // a missing product is a silent no-op.
        sqlx::query("UPDATE products SET stock = stock - $2 WHERE id = $1")
            .bind(id.as_i64())
            .bind(quantity)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for PostgresStore {
    async fn insert_order(&self, order: NewOrder, lines: Vec<NewOrderLine>) -> Result<Order> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (customer_id, order_date, status, total_cents)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(order.customer_id.as_i64())
        .bind(order.order_date)
        .bind(order.status.as_str())
        .bind(order.total_price.cents())
        .fetch_one(&mut *tx)
        .await?;

        for line in &lines {
            sqlx::query(
                r#"
                INSERT INTO order_lines (order_id, product_id, quantity, unit_price_cents)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(id)
            .bind(line.product_id.as_i64())
            .bind(line.quantity)
            .bind(line.unit_price.cents())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Order {
            id: OrderId::new(id),
            customer_id: order.customer_id,
            order_date: order.order_date,
            status: order.status,
            total_price: order.total_price,
        })
    }

    async fn update_order(&self, order: &Order) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE orders
            SET customer_id = $2, order_date = $3, status = $4, total_cents = $5
            WHERE id = $1
            "#,
        )
        .bind(order.id.as_i64())
        .bind(order.customer_id.as_i64())
        .bind(order.order_date)
        .bind(order.status.as_str())
        .bind(order.total_price.cents())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn order_with_details(&self, id: OrderId) -> Result<Option<OrderDetails>> {
        let Some(order_row) = sqlx::query(
            "SELECT id, customer_id, order_date, status, total_cents FROM orders WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };
        let order = Self::row_to_order(&order_row)?;

        let Some(customer_row) =
            sqlx::query("SELECT id, name, email, phone FROM customers WHERE id = $1")
                .bind(order.customer_id.as_i64())
                .fetch_optional(&self.pool)
                .await?
        else {
            return Ok(None);
        };
        let customer = Self::row_to_customer(&customer_row)?;

        let line_rows = sqlx::query(
            r#"
            SELECT
                l.order_id, l.product_id, l.quantity, l.unit_price_cents,
                p.id, p.name, p.description, p.price_cents, p.stock
            FROM order_lines l
            JOIN products p ON p.id = l.product_id
            WHERE l.order_id = $1
            ORDER BY l.product_id
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        let lines = line_rows
            .iter()
            .map(|row| {
                Ok(OrderLineDetail {
                    line: OrderLine {
                        order_id: OrderId::new(row.try_get("order_id")?),
                        product_id: ProductId::new(row.try_get("product_id")?),
                        quantity: row.try_get("quantity")?,
                        unit_price: Money::from_cents(row.try_get("unit_price_cents")?),
                    },
                    product: Self::row_to_product(row)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(OrderDetails {
            order,
            customer,
            lines,
        }))
    }

    async fn orders_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT id, customer_id, order_date, status, total_cents
            FROM orders
            WHERE customer_id = $1
            ORDER BY id
            "#,
        )
        .bind(customer_id.as_i64())
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(Self::row_to_order).collect()
    }
}
