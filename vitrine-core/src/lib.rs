//! Vitrine core library
//!
//! Client for a product catalog backend plus the two pages built on it:
//! a registration form and a listing with a detail modal.
//!
//! ```text
//! HttpTransport ──▶ ListingPage ──▶ ProductCache ──▶ DetailModal
//!       │
//!       └────────▶ RegistrationPage ──▶ Host (notices, navigation)
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod fallback;
pub mod format;
pub mod host;
pub mod html;
pub mod listing;
pub mod modal;
pub mod pages;
pub mod product;
pub mod registration;
pub mod transport;

pub use config::ClientConfig;
pub use error::{CatalogError, Result};
pub use product::{NewProduct, Product, ProductId};
pub use transport::{HttpTransport, ProductTransport};
