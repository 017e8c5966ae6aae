//! Product commands
//!
//! Each command drives one transport call or one page flow against the
//! configured backend.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use vitrine_core::fallback;
use vitrine_core::format::{format_price, summarize};
use vitrine_core::host::{Host, Notice};
use vitrine_core::listing::LoadOutcome;
use vitrine_core::pages::{ListingEvent, ListingPage, RegistrationPage};
use vitrine_core::registration::{RegistrationForm, SubmitOutcome};
use vitrine_core::{ClientConfig, HttpTransport, Product, ProductId, ProductTransport};

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// Register a product through the registration flow
    Create {
        /// Product name
        #[clap(long)]
        name: String,

        /// Free-text description
        #[clap(long, default_value = "")]
        description: String,

        /// Price, e.g. 49.90
        #[clap(long)]
        price: String,

        /// Image URL
        #[clap(long)]
        image: Option<String>,
    },

    /// List all products
    List {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show one product
    Show {
        /// Product id
        id: ProductId,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: ProductId,
    },

    /// Write one of the pages as an HTML document
    Render {
        #[clap(subcommand)]
        page: RenderPage,
    },

    /// Create the sample products on the backend
    Seed,
}

#[derive(Subcommand, Debug)]
pub enum RenderPage {
    /// Listing page, loaded from the backend
    Listing {
        /// Output file
        #[clap(long, short, default_value = "produtos.html")]
        out: PathBuf,

        /// Render with the detail modal open on this product
        #[clap(long)]
        open: Option<ProductId>,
    },

    /// Empty registration form
    Registration {
        /// Output file
        #[clap(long, short, default_value = "cadastro.html")]
        out: PathBuf,
    },
}

/// Host for terminal use: notices go to stdout, navigation is logged
struct TerminalHost;

impl Host for TerminalHost {
    fn notify(&mut self, notice: Notice) {
        println!("{}", notice.message);
    }

    fn navigate(&mut self, target: &str) {
        tracing::info!("Next page: {}", target);
    }
}

impl ProductCommand {
    pub async fn execute(self, config: &ClientConfig) -> Result<()> {
        let transport = HttpTransport::new(config)?;

        match self {
            ProductCommand::Create {
                name,
                description,
                price,
                image,
            } => {
                let form = RegistrationForm {
                    name,
                    description,
                    price,
                    image_url: image.unwrap_or_default(),
                };
                execute_create(config, &transport, form).await
            }
            ProductCommand::List { json } => execute_list(&transport, json).await,
            ProductCommand::Show { id, json } => execute_show(&transport, &id, json).await,
            ProductCommand::Delete { id } => execute_delete(&transport, &id).await,
            ProductCommand::Render { page } => match page {
                RenderPage::Listing { out, open } => {
                    execute_render_listing(config, &transport, &out, open).await
                }
                RenderPage::Registration { out } => execute_render_registration(config, &out),
            },
            ProductCommand::Seed => execute_seed(&transport).await,
        }
    }
}

async fn execute_create(
    config: &ClientConfig,
    transport: &HttpTransport,
    form: RegistrationForm,
) -> Result<()> {
    let mut page = RegistrationPage::new(config);
    page.form = form;

    match page.submit(transport, &mut TerminalHost).await {
        SubmitOutcome::Created(product) => {
            println!("Created product {} ({})", product.name, product.id);
            Ok(())
        }
        SubmitOutcome::Invalid(e) => Err(e.into()),
        SubmitOutcome::Failed(e) => Err(anyhow::Error::new(e)
            .context(format!("Is the backend running at {}?", config.base_url))),
    }
}

/// Table row for the product list
#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: format_price(product.price),
            description: summarize(&product.description),
        }
    }
}

async fn execute_list(transport: &HttpTransport, json_output: bool) -> Result<()> {
    let products = transport
        .list_products()
        .await
        .with_context(|| format!("Is the backend running at {}?", transport.endpoint()))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!("No products registered yet.");
        return Ok(());
    }

    println!("{} product(s):\n", products.len());
    let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();
    println!("{table}");

    Ok(())
}

async fn execute_show(transport: &HttpTransport, id: &ProductId, json_output: bool) -> Result<()> {
    let product = transport
        .get_product(id)
        .await
        .with_context(|| format!("Could not fetch product {id}"))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&product)?);
        return Ok(());
    }

    println!();
    println!("Product: {}", product.name);
    println!("Id:      {}", product.id);
    println!("Price:   {}", format_price(product.price));

    if !product.images.is_empty() {
        println!("Images:");
        for url in &product.images {
            println!("  {url}");
        }
    }

    println!();
    println!("Description:");
    for line in product.description.lines() {
        println!("  {line}");
    }

    Ok(())
}

async fn execute_delete(transport: &HttpTransport, id: &ProductId) -> Result<()> {
    transport
        .delete_product(id)
        .await
        .with_context(|| format!("Could not delete product {id}"))?;

    println!("Deleted product {id}");
    Ok(())
}

async fn execute_render_listing(
    config: &ClientConfig,
    transport: &HttpTransport,
    out: &Path,
    open: Option<ProductId>,
) -> Result<()> {
    let mut page = ListingPage::new(config);

    let load_error = match page.load(transport).await {
        LoadOutcome::Loaded(count) => {
            println!("Loaded {count} product(s)");
            None
        }
        LoadOutcome::Empty => {
            println!("No products registered yet");
            None
        }
        LoadOutcome::Failed(e) => Some(e),
        LoadOutcome::NoContainer => None,
    };

    // The page showing the inline error is still written before failing
    if let Some(e) = load_error {
        write_page(out, &page.render())?;
        return Err(anyhow::Error::new(e)
            .context(format!("Is the backend running at {}?", transport.endpoint())));
    }

    if let Some(id) = open {
        let index = page
            .cache()
            .products()
            .iter()
            .position(|p| p.id == id)
            .with_context(|| format!("Product {id} is not in the listing"))?;
        page.dispatch(ListingEvent::ViewDetails { id, index });
    }

    write_page(out, &page.render())
}

fn execute_render_registration(config: &ClientConfig, out: &Path) -> Result<()> {
    write_page(out, &RegistrationPage::new(config).render())
}

fn write_page(out: &Path, html: &str) -> Result<()> {
    std::fs::write(out, html).with_context(|| format!("Failed to write {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

async fn execute_seed(transport: &HttpTransport) -> Result<()> {
    let created = fallback::seed(transport)
        .await
        .with_context(|| format!("Seeding {} failed", transport.endpoint()))?;

    for product in &created {
        println!("Created product {} ({})", product.name, product.id);
    }
    Ok(())
}
