//! Startup catalog seeding.

use common::Money;

use crate::entities::NewProduct;
use crate::error::Result;
use crate::repository::ProductRepository;

fn product(name: &str, description: &str, price_cents: i64, stock: i32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_cents(price_cents),
        stock,
    }
}

/// The initial product catalog.
fn catalog() -> Vec<NewProduct> {
    vec![
        product(
            "Laptop Dell XPS 13",
            "High-performance ultrabook with Intel Core i7 processor",
            129_999,
            25,
        ),
        product(
            "iPhone 14 Pro",
            "Latest Apple smartphone with advanced camera system",
            99_999,
            50,
        ),
        product(
            "Samsung 4K Monitor",
            "27-inch 4K UHD monitor for professional use",
            34_999,
            15,
        ),
        product(
            "Wireless Bluetooth Headphones",
            "Premium noise-cancelling wireless headphones",
            19_999,
            40,
        ),
        product(
            "Gaming Mechanical Keyboard",
            "RGB backlit mechanical keyboard for gaming",
            8_999,
            30,
        ),
        product(
            "Ergonomic Office Chair",
            "Comfortable office chair with lumbar support",
            29_999,
            20,
        ),
        product(
            "Portable SSD 1TB",
            "High-speed external storage device",
            14_999,
            35,
        ),
        product(
            "Webcam HD 1080p",
            "High-definition webcam for video conferencing",
            7_999,
            60,
        ),
    ]
}

/// Seeds the product catalog if the store holds no products yet.
///
/// Returns the number of products inserted (zero when already seeded).
pub async fn seed_products<S: ProductRepository>(store: &S) -> Result<usize> {
    if !store.all_products().await?.is_empty() {
        return Ok(0);
    }

    let catalog = catalog();
    let count = catalog.len();
    for product in catalog {
        store.insert_product(product).await?;
    }
    tracing::info!(count, "seeded product catalog");
    Ok(count)
}
