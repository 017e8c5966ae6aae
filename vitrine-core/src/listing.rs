//! Listing flow - fetch the catalog and render one card per product

use std::fmt::Write;

use tracing::{debug, error};

use crate::cache::ProductCache;
use crate::error::CatalogError;
use crate::format::{format_price, summarize, Placeholder};
use crate::html::{escape, ElementId, Image};
use crate::product::{Product, ProductId};
use crate::transport::ProductTransport;

pub const LOADING_MESSAGE: &str = "Carregando produtos...";
pub const EMPTY_MESSAGE: &str = "Nenhum produto cadastrado ainda.";
pub const LOAD_FAILURE_MESSAGE: &str = "❌ Erro ao carregar produtos!";
pub const DETAILS_LABEL: &str = "Ver Detalhes";

/// One product card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: ProductId,
    /// Position in the fetch the card came from
    pub index: usize,
    pub image: Image,
    pub name: String,
    pub summary: String,
    pub price: String,
}

impl Card {
    pub fn from_product(product: &Product, index: usize, placeholder_base: &str) -> Self {
        Self {
            id: product.id.clone(),
            index,
            image: Image::product_or_placeholder(
                product.primary_image(),
                &product.name,
                Placeholder::Card.url(placeholder_base),
            ),
            name: product.name.clone(),
            summary: summarize(&product.description),
            price: format_price(product.price),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"produto-card\">\n  {}\n  <h3>{}</h3>\n  <p>{}</p>\n  <strong>{}</strong>\n  \
             <button class=\"btn-detalhes\" data-product-id=\"{}\" data-index=\"{}\">{DETAILS_LABEL}</button>\n</div>",
            self.image.to_html(None),
            escape(&self.name),
            escape(&self.summary),
            escape(&self.price),
            escape(&self.id.to_string()),
            self.index,
        )
    }
}

/// What the listing container currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView {
    Loading,
    Empty,
    Cards(Vec<Card>),
    /// Fetch failed; names the backend the user should check
    Error { endpoint: String },
}

impl ListingView {
    pub fn to_html(&self) -> String {
        match self {
            ListingView::Loading => format!("<p>{LOADING_MESSAGE}</p>"),
            ListingView::Empty => format!("<p>{EMPTY_MESSAGE}</p>"),
            ListingView::Cards(cards) => {
                let mut out = String::new();
                for card in cards {
                    let _ = writeln!(out, "{}", card.to_html());
                }
                out
            }
            ListingView::Error { endpoint } => format!(
                "<p style=\"color: red;\">{LOAD_FAILURE_MESSAGE}</p>\n\
                 <p>Certifique-se que o backend está rodando em {}</p>",
                escape(endpoint)
            ),
        }
    }
}

/// The listing container element
#[derive(Debug, Clone, PartialEq)]
pub struct ListingContainer {
    view: ListingView,
}

impl Default for ListingContainer {
    fn default() -> Self {
        Self {
            view: ListingView::Loading,
        }
    }
}

impl ListingContainer {
    pub fn view(&self) -> &ListingView {
        &self.view
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div id=\"{}\" class=\"lista-produtos\">\n{}\n</div>",
            ElementId::ListingContainer.dom_id(),
            self.view.to_html()
        )
    }
}

/// Result of a page load
#[derive(Debug)]
pub enum LoadOutcome {
    /// The page has no listing container; nothing happened
    NoContainer,
    Empty,
    Loaded(usize),
    Failed(CatalogError),
}

/// Fetch the catalog into `container` and `cache`
///
/// The cache is only replaced on a successful fetch.
pub async fn load_listing<T>(
    container: Option<&mut ListingContainer>,
    cache: &mut ProductCache,
    transport: &T,
    placeholder_base: &str,
) -> LoadOutcome
where
    T: ProductTransport + ?Sized,
{
    let Some(container) = container else {
        debug!("No listing container on this page");
        return LoadOutcome::NoContainer;
    };

    container.view = ListingView::Loading;

    match transport.list_products().await {
        Ok(products) if products.is_empty() => {
            container.view = ListingView::Empty;
            cache.replace(products);
            LoadOutcome::Empty
        }
        Ok(products) => {
            let cards = products
                .iter()
                .enumerate()
                .map(|(index, product)| Card::from_product(product, index, placeholder_base))
                .collect();
            container.view = ListingView::Cards(cards);
            let count = products.len();
            cache.replace(products);
            LoadOutcome::Loaded(count)
        }
        Err(e) => {
            error!("Failed to load product listing: {}", e);
            container.view = ListingView::Error {
                endpoint: transport.endpoint().to_string(),
            };
            LoadOutcome::Failed(e)
        }
    }
}
