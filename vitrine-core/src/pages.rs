//! The two pages: product registration and product listing
//!
//! Each page owns its state. User actions arrive as typed events and are
//! routed with a plain `match`.
//!
//! The rendered documents are static snapshots. They carry no scripts or
//! event handlers, so in a browser the details buttons, the close button and
//! background clicks do nothing. Interaction goes through
//! [`ListingPage::dispatch`], and the result is rendered again. The only
//! inline handler is the image `onerror` fallback.

use crate::cache::ProductCache;
use crate::config::ClientConfig;
use crate::host::Host;
use crate::html::{document, escape, ElementId};
use crate::listing::{load_listing, ListingContainer, LoadOutcome};
use crate::modal::DetailModal;
use crate::product::ProductId;
use crate::registration::{RegistrationFlow, RegistrationForm, SubmitOutcome};
use crate::transport::ProductTransport;

/// User actions on the listing page
#[derive(Debug, Clone, PartialEq)]
pub enum ListingEvent {
    /// A card's details button
    ViewDetails { id: ProductId, index: usize },
    /// The modal's close button
    CloseDetail,
    /// Any click, identified by the element it landed on
    Click { target: ElementId },
}

/// Listing page state: container, fetched products and the modal
#[derive(Debug, Clone)]
pub struct ListingPage {
    container: Option<ListingContainer>,
    cache: ProductCache,
    modal: DetailModal,
    placeholder_base: String,
}

impl ListingPage {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            container: Some(ListingContainer::default()),
            cache: ProductCache::new(),
            modal: DetailModal::new(),
            placeholder_base: config.placeholder_base.clone(),
        }
    }

    /// A page without a listing container, where loading does nothing
    pub fn without_container(config: &ClientConfig) -> Self {
        Self {
            container: None,
            ..Self::new(config)
        }
    }

    /// Page-load handler
    pub async fn load<T>(&mut self, transport: &T) -> LoadOutcome
    where
        T: ProductTransport + ?Sized,
    {
        load_listing(
            self.container.as_mut(),
            &mut self.cache,
            transport,
            &self.placeholder_base,
        )
        .await
    }

    /// Route one user action; returns whether the page changed
    pub fn dispatch(&mut self, event: ListingEvent) -> bool {
        match event {
            ListingEvent::ViewDetails { id, index } => {
                self.modal
                    .open(&self.cache, &id, index, &self.placeholder_base)
            }
            ListingEvent::CloseDetail => {
                let was_visible = self.modal.is_visible();
                self.modal.close();
                was_visible
            }
            ListingEvent::Click { target } => self.modal.handle_click(target),
        }
    }

    pub fn container(&self) -> Option<&ListingContainer> {
        self.container.as_ref()
    }

    pub fn cache(&self) -> &ProductCache {
        &self.cache
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    /// Full HTML document for the current state
    pub fn render(&self) -> String {
        let listing = self
            .container
            .as_ref()
            .map(ListingContainer::to_html)
            .unwrap_or_default();

        let body = format!(
            "<header>\n<h1>Produtos</h1>\n<a href=\"cadastro.html\">Cadastrar produto</a>\n</header>\n\
             <main>\n{listing}\n</main>\n{}",
            self.modal.to_html()
        );
        document("Produtos", &body)
    }
}

/// Registration page state: the form and its submit flow
#[derive(Debug)]
pub struct RegistrationPage {
    pub form: RegistrationForm,
    flow: RegistrationFlow,
}

impl RegistrationPage {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            form: RegistrationForm::default(),
            flow: RegistrationFlow::new(config.listing_page.clone()),
        }
    }

    /// Form submit handler
    pub async fn submit<T, H>(&mut self, transport: &T, host: &mut H) -> SubmitOutcome
    where
        T: ProductTransport + ?Sized,
        H: Host + ?Sized,
    {
        self.flow.submit(&mut self.form, transport, host).await
    }

    pub fn flow(&self) -> &RegistrationFlow {
        &self.flow
    }

    /// Full HTML document, fields showing their current values
    pub fn render(&self) -> String {
        let form = &self.form;
        let body = format!(
            "<header>\n<h1>Cadastro de Produto</h1>\n<a href=\"produtos.html\">Ver produtos</a>\n</header>\n\
             <main>\n<form id=\"{form_id}\">\n\
             <label for=\"{name_id}\">Nome</label>\n\
             <input type=\"text\" id=\"{name_id}\" name=\"name\" value=\"{name}\" required>\n\
             <label for=\"{desc_id}\">Descrição</label>\n\
             <textarea id=\"{desc_id}\" name=\"description\">{description}</textarea>\n\
             <label for=\"{price_id}\">Preço</label>\n\
             <input type=\"number\" id=\"{price_id}\" name=\"price\" step=\"0.01\" min=\"0\" value=\"{price}\" required>\n\
             <label for=\"{img_id}\">URL da imagem</label>\n\
             <input type=\"url\" id=\"{img_id}\" name=\"image\" value=\"{image}\">\n\
             <button type=\"submit\">Cadastrar</button>\n\
             </form>\n</main>",
            form_id = ElementId::RegistrationForm.dom_id(),
            name_id = ElementId::NameField.dom_id(),
            desc_id = ElementId::DescriptionField.dom_id(),
            price_id = ElementId::PriceField.dom_id(),
            img_id = ElementId::ImageField.dom_id(),
            name = escape(&form.name),
            description = escape(&form.description),
            price = escape(&form.price),
            image = escape(&form.image_url),
        );
        document("Cadastro de Produto", &body)
    }
}
