//! Sample catalog
//!
//! Not consulted by the listing flow. Used to seed an empty backend.

use crate::error::Result;
use crate::product::{NewProduct, Product, ProductId};
use crate::transport::ProductTransport;

/// The three sample products, with their reference ids
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::Number(1),
            name: "Shampoo Fortalecedor".to_string(),
            description: "Fortifica o cabelo e reduz queda.".to_string(),
            price: 49.90,
            images: vec!["https://via.placeholder.com/200x150?text=Shampoo".to_string()],
        },
        Product {
            id: ProductId::Number(2),
            name: "Máscara Hidratante".to_string(),
            description: "Hidratação intensa para cabelos secos.".to_string(),
            price: 39.90,
            images: vec!["https://via.placeholder.com/200x150?text=Mascara".to_string()],
        },
        Product {
            id: ProductId::Number(3),
            name: "Tônico Capilar".to_string(),
            description: "Estimula o crescimento acelerado.".to_string(),
            price: 59.90,
            images: vec!["https://via.placeholder.com/200x150?text=Tonico".to_string()],
        },
    ]
}

/// Sample products as create requests; the backend assigns fresh ids
pub fn sample_requests() -> Vec<NewProduct> {
    sample_products().into_iter().map(NewProduct::from).collect()
}

/// Create every sample product through `transport`
///
/// Stops at the first failure; products created before it stay created.
pub async fn seed<T>(transport: &T) -> Result<Vec<Product>>
where
    T: ProductTransport + ?Sized,
{
    let mut created = Vec::new();
    for request in sample_requests() {
        let product = transport
            .create_product(
                &request.name,
                &request.description,
                request.images,
                request.price,
            )
            .await?;
        created.push(product);
    }
    tracing::info!("Seeded {} sample products", created.len());
    Ok(created)
}
