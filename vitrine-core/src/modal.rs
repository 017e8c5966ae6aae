//! Detail modal over the listing page

use tracing::debug;

use crate::cache::ProductCache;
use crate::format::{format_price, Placeholder};
use crate::html::{escape, ElementId, Image};
use crate::product::{Product, ProductId};

/// Content shown while the modal is open
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: ProductId,
    pub name: String,
    /// Full description, never truncated
    pub description: String,
    pub price: String,
    pub image: Image,
}

impl DetailView {
    pub fn from_product(product: &Product, placeholder_base: &str) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_price(product.price),
            image: Image::product_or_placeholder(
                product.primary_image(),
                &product.name,
                Placeholder::Detail.url(placeholder_base),
            ),
        }
    }
}

/// Hidden until `open` resolves a product
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    visible: bool,
    view: Option<DetailView>,
}

impl DetailModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the product with `id`, falling back to position `index`
    ///
    /// Returns `false` and stays hidden when neither resolves.
    pub fn open(
        &mut self,
        cache: &ProductCache,
        id: &ProductId,
        index: usize,
        placeholder_base: &str,
    ) -> bool {
        let Some(product) = cache.resolve(id, index) else {
            debug!("No cached product for id {} / position {}", id, index);
            return false;
        };

        self.view = Some(DetailView::from_product(product, placeholder_base));
        self.visible = true;
        true
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Pointer action anywhere on the page
    ///
    /// Only a click whose target is the background itself closes the modal;
    /// clicks inside the content region bubble up with their own target.
    pub fn handle_click(&mut self, target: ElementId) -> bool {
        if self.visible && target == ElementId::ModalBackground {
            self.close();
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last populated content, kept after closing like the DOM fields are
    pub fn view(&self) -> Option<&DetailView> {
        self.view.as_ref()
    }

    pub fn to_html(&self) -> String {
        let display = if self.visible { "flex" } else { "none" };
        let (name, description, price, image) = match &self.view {
            Some(view) => (
                escape(&view.name),
                escape(&view.description),
                escape(&view.price),
                view.image.to_html(Some(ElementId::ModalImage)),
            ),
            None => (
                String::new(),
                String::new(),
                String::new(),
                format!("<img id=\"{}\" src=\"\" alt=\"\">", ElementId::ModalImage.dom_id()),
            ),
        };

        format!(
            "<div id=\"{bg}\" class=\"modal-bg\" style=\"display: {display};\">\n\
             <div id=\"{content}\" class=\"modal\">\n\
             <button id=\"{close}\" class=\"fechar\">&times;</button>\n\
             {image}\n\
             <h2 id=\"{name_id}\">{name}</h2>\n\
             <p id=\"{desc_id}\">{description}</p>\n\
             <strong id=\"{price_id}\">{price}</strong>\n\
             </div>\n\
             </div>",
            bg = ElementId::ModalBackground.dom_id(),
            content = ElementId::ModalContent.dom_id(),
            close = ElementId::ModalClose.dom_id(),
            name_id = ElementId::ModalName.dom_id(),
            desc_id = ElementId::ModalDescription.dom_id(),
            price_id = ElementId::ModalPrice.dom_id(),
        )
    }
}
