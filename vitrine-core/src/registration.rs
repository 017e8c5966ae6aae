//! Registration flow - form submission to product creation
//!
//! ```text
//! idle ──submit──▶ submitting ──created──▶ notice, reset form, navigate
//!                      │
//!                      └──failed──▶ notice, keep form ──▶ idle
//! ```

use tracing::{error, info, warn};

use crate::error::{CatalogError, Result};
use crate::host::{Host, Notice, NoticeKind};
use crate::product::Product;
use crate::transport::ProductTransport;

pub const CREATED_MESSAGE: &str = "✅ Produto cadastrado com sucesso!";
pub const BACKEND_FAILURE_MESSAGE: &str =
    "❌ Erro ao cadastrar produto! Verifique se o backend está rodando.";
pub const INVALID_PRICE_MESSAGE: &str = "❌ Preço inválido! Informe um valor numérico.";
pub const MISSING_NAME_MESSAGE: &str = "❌ Informe o nome do produto.";

/// Raw field values of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub description: String,
    /// Price as typed; parsed on submit
    pub price: String,
    pub image_url: String,
}

impl RegistrationForm {
    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parse the price field
///
/// Accepts anything `f64` parses after trimming; rejects NaN, infinities and
/// negative amounts, including `-0`.
pub fn parse_price(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let price = trimmed
        .parse::<f64>()
        .map_err(|_| CatalogError::Validation {
            field: "price",
            reason: format!("'{trimmed}' is not a number"),
        })?;

    if !price.is_finite() {
        return Err(CatalogError::Validation {
            field: "price",
            reason: format!("'{trimmed}' is not a finite amount"),
        });
    }
    if price.is_sign_negative() {
        return Err(CatalogError::Validation {
            field: "price",
            reason: format!("{price} is negative"),
        });
    }

    Ok(price)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationState {
    #[default]
    Idle,
    Submitting,
}

/// Result of one submission
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Backend accepted the product
    Created(Product),
    /// Form input was rejected before any request
    Invalid(CatalogError),
    /// The create call failed
    Failed(CatalogError),
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// Drives the registration page's submit handling
#[derive(Debug)]
pub struct RegistrationFlow {
    state: RegistrationState,
    listing_page: String,
}

impl RegistrationFlow {
    /// `listing_page` is where a successful submission navigates to
    pub fn new(listing_page: impl Into<String>) -> Self {
        Self {
            state: RegistrationState::Idle,
            listing_page: listing_page.into(),
        }
    }

    pub fn state(&self) -> RegistrationState {
        self.state
    }

    /// Handle a form submission
    ///
    /// The form is only reset after the backend accepted the product; on any
    /// failure the user's input stays in place for a retry.
    pub async fn submit<T, H>(
        &mut self,
        form: &mut RegistrationForm,
        transport: &T,
        host: &mut H,
    ) -> SubmitOutcome
    where
        T: ProductTransport + ?Sized,
        H: Host + ?Sized,
    {
        self.state = RegistrationState::Submitting;
        let outcome = self.run(form, transport, host).await;
        self.state = RegistrationState::Idle;
        outcome
    }

    async fn run<T, H>(
        &self,
        form: &mut RegistrationForm,
        transport: &T,
        host: &mut H,
    ) -> SubmitOutcome
    where
        T: ProductTransport + ?Sized,
        H: Host + ?Sized,
    {
        if form.name.trim().is_empty() {
            warn!("Registration rejected: empty name");
            host.notify(Notice::new(NoticeKind::Invalid, MISSING_NAME_MESSAGE));
            return SubmitOutcome::Invalid(CatalogError::Validation {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }

        let price = match parse_price(&form.price) {
            Ok(price) => price,
            Err(e) => {
                warn!("Registration rejected: {}", e);
                host.notify(Notice::new(NoticeKind::Invalid, INVALID_PRICE_MESSAGE));
                return SubmitOutcome::Invalid(e);
            }
        };

        let image_url = form.image_url.trim();
        let images = if image_url.is_empty() {
            Vec::new()
        } else {
            vec![image_url.to_string()]
        };

        match transport
            .create_product(&form.name, &form.description, images, price)
            .await
        {
            Ok(product) => {
                info!("Registered product {} ({})", product.name, product.id);
                host.notify(Notice::new(NoticeKind::Success, CREATED_MESSAGE));
                form.reset();
                host.navigate(&self.listing_page);
                SubmitOutcome::Created(product)
            }
            Err(e) => {
                error!("Registration failed: {}", e);
                host.notify(Notice::new(NoticeKind::Failure, BACKEND_FAILURE_MESSAGE));
                SubmitOutcome::Failed(e)
            }
        }
    }
}
