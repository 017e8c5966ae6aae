//! Shared helpers for integration tests
//!
//! Spins up an in-process product backend on an ephemeral port so the real
//! `HttpTransport` can be exercised end to end.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;
use tokio::net::TcpListener;
use vitrine_core::{ClientConfig, NewProduct, Product, ProductId};

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test binary)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// In-memory product store behind the fake backend
#[derive(Default)]
pub struct Store {
    pub products: Vec<Product>,
    next_id: i64,
}

pub type SharedStore = Arc<Mutex<Store>>;

async fn list(State(store): State<SharedStore>) -> Json<Vec<Product>> {
    Json(store.lock().unwrap().products.clone())
}

async fn create(
    State(store): State<SharedStore>,
    Json(body): Json<NewProduct>,
) -> (StatusCode, Json<Product>) {
    let mut store = store.lock().unwrap();
    store.next_id += 1;
    let product = Product {
        id: ProductId::Number(store.next_id),
        name: body.name,
        description: body.description,
        price: body.price,
        images: body.images,
    };
    store.products.push(product.clone());
    (StatusCode::CREATED, Json(product))
}

async fn fetch(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Product>, StatusCode> {
    let id: ProductId = id.parse().unwrap();
    store
        .lock()
        .unwrap()
        .products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn remove(State(store): State<SharedStore>, Path(id): Path<String>) -> StatusCode {
    let id: ProductId = id.parse().unwrap();
    let mut store = store.lock().unwrap();
    let before = store.products.len();
    store.products.retain(|p| p.id != id);
    if store.products.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Working backend; returns its base URL and the store behind it
pub async fn spawn_backend(products: Vec<Product>) -> (String, SharedStore) {
    init_test_logging();
    let next_id = products
        .iter()
        .filter_map(|p| match p.id {
            ProductId::Number(n) => Some(n),
            ProductId::Text(_) => None,
        })
        .max()
        .unwrap_or(0);
    let store = Arc::new(Mutex::new(Store { products, next_id }));

    let app = Router::new()
        .route("/product", get(list).post(create))
        .route("/product/:id", get(fetch).delete(remove))
        .with_state(store.clone());

    (serve(app).await, store)
}

/// Backend that answers every request with `status`
pub async fn spawn_failing_backend(status: u16) -> String {
    init_test_logging();
    let app = Router::new().fallback(move || async move {
        (StatusCode::from_u16(status).unwrap(), "backend failure")
    });
    serve(app).await
}

/// Backend that answers with a 200 body that is not product JSON
pub async fn spawn_garbage_backend() -> String {
    init_test_logging();
    let app = Router::new().fallback(|| async { (StatusCode::OK, "<html>not json</html>") });
    serve(app).await
}

/// Backend that waits `delay` before answering an empty list
pub async fn spawn_slow_backend(delay: Duration) -> String {
    init_test_logging();
    let app = Router::new().fallback(move || async move {
        tokio::time::sleep(delay).await;
        Json(Vec::<Product>::new())
    });
    serve(app).await
}

/// Address where nothing is listening
pub async fn unreachable_base_url() -> String {
    init_test_logging();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn config_for(base_url: &str) -> ClientConfig {
    ClientConfig::default().with_base_url(base_url).unwrap()
}

pub fn product(id: i64, name: &str, description: &str, price: f64, images: &[&str]) -> Product {
    Product {
        id: ProductId::Number(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}
