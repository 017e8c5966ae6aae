//! Product records exchanged with the catalog backend

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned product identifier
///
/// Backends encode ids either as JSON numbers or strings. The client never
/// interprets the value; it only compares it and puts it back into paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for ProductId {
    type Err = std::convert::Infallible;

    /// Numeric text becomes `Number` only when it prints back identically,
    /// so ids like `007` stay textual.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Ok(ProductId::Number(n)),
            _ => Ok(ProductId::Text(s.to_string())),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

/// A catalog record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    pub price: f64,

    /// Image URLs, first one is the primary image
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

impl Product {
    /// First image URL, if it is present and non-blank
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
    }
}

/// Body of a create request; the backend assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub price: f64,
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            images: product.images,
            price: product.price,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_numeric_id_and_missing_images() {
        let json = r#"{"id": 3, "name": "Tônico", "description": "Estimula", "price": 59.9}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId::Number(3));
        assert!(product.images.is_empty());
        assert_eq!(product.primary_image(), None);
    }

    #[test]
    fn test_decode_string_id_and_null_images() {
        let json = r#"{"id": "a1b2", "name": "Shampoo", "description": null, "price": 10, "images": null}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId::Text("a1b2".to_string()));
        assert_eq!(product.description, "");
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_primary_image_skips_blank_url() {
        let product = Product {
            id: 1.into(),
            name: "Máscara".to_string(),
            description: String::new(),
            price: 39.9,
            images: vec!["  ".to_string(), "https://cdn.example/b.png".to_string()],
        };

        assert_eq!(product.primary_image(), None);
    }

    #[test]
    fn test_new_product_has_no_id_field() {
        let body = NewProduct {
            name: "Shampoo".to_string(),
            description: "desc".to_string(),
            images: vec!["url".to_string()],
            price: 49.9,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["images"][0], "url");
        assert_eq!(json["price"], 49.9);
    }

    #[test]
    fn test_product_id_from_str() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::Number(42));
        assert_eq!(
            "007".parse::<ProductId>().unwrap(),
            ProductId::Text("007".to_string())
        );
        assert_eq!(ProductId::Number(42).to_string(), "42");
    }
}
