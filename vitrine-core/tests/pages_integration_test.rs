//! Page flows end to end over HTTP

mod common;

use common::{config_for, product, spawn_backend, unreachable_base_url};
use pretty_assertions::assert_eq;
use vitrine_core::host::{NoticeKind, RecordingHost};
use vitrine_core::html::ElementId;
use vitrine_core::listing::{ListingView, LoadOutcome, EMPTY_MESSAGE};
use vitrine_core::pages::{ListingEvent, ListingPage, RegistrationPage};
use vitrine_core::registration::{RegistrationForm, SubmitOutcome, BACKEND_FAILURE_MESSAGE};
use vitrine_core::HttpTransport;

#[tokio::test]
async fn test_empty_catalog_shows_only_message() {
    let (base_url, _store) = spawn_backend(vec![]).await;
    let config = config_for(&base_url);
    let transport = HttpTransport::new(&config).unwrap();
    let mut page = ListingPage::new(&config);

    let outcome = page.load(&transport).await;

    assert!(matches!(outcome, LoadOutcome::Empty));
    let container = page.container().unwrap();
    assert_eq!(container.view(), &ListingView::Empty);
    assert_eq!(container.view().to_html(), format!("<p>{EMPTY_MESSAGE}</p>"));
    assert!(!page.render().contains("produto-card"));
}

#[tokio::test]
async fn test_register_then_list_then_open_detail() {
    let (base_url, _store) = spawn_backend(vec![product(
        10,
        "Shampoo Fortalecedor",
        "Fortifica o cabelo e reduz queda.",
        49.9,
        &["https://cdn.example/shampoo.png"],
    )])
    .await;
    let config = config_for(&base_url);
    let transport = HttpTransport::new(&config).unwrap();
    let mut host = RecordingHost::new();

    let mut registration = RegistrationPage::new(&config);
    registration.form = RegistrationForm {
        name: "Tônico Capilar".to_string(),
        description: "Estimula o crescimento acelerado de fios mais fortes e saudáveis.".to_string(),
        price: "100".to_string(),
        image_url: String::new(),
    };
    let outcome = registration.submit(&transport, &mut host).await;
    assert!(outcome.is_created());
    assert_eq!(host.location.as_deref(), Some("produtos.html"));

    let mut listing = ListingPage::new(&config);
    assert!(matches!(listing.load(&transport).await, LoadOutcome::Loaded(2)));

    let html = listing.render();
    assert!(html.contains("R$ 49.90"));
    assert!(html.contains("R$ 100.00"));
    assert!(html.contains("Estimula o crescimento acelerado de fios mais fort..."));

    let created = listing.cache().at(1).unwrap().clone();
    assert!(listing.dispatch(ListingEvent::ViewDetails {
        id: created.id.clone(),
        index: 1,
    }));
    let view = listing.modal().view().unwrap();
    assert_eq!(view.name, "Tônico Capilar");
    assert_eq!(view.description, created.description);
    assert_eq!(view.price, "R$ 100.00");
    assert_eq!(
        view.image.src,
        "https://via.placeholder.com/400x300?text=Sem+Imagem"
    );

    assert!(!listing.dispatch(ListingEvent::Click {
        target: ElementId::ModalContent
    }));
    assert!(listing.dispatch(ListingEvent::Click {
        target: ElementId::ModalBackground
    }));
    assert!(!listing.modal().is_visible());
}

#[tokio::test]
async fn test_unreachable_backend_keeps_form_values() {
    let base_url = unreachable_base_url().await;
    let config = config_for(&base_url);
    let transport = HttpTransport::new(&config).unwrap();
    let mut host = RecordingHost::new();

    let mut page = RegistrationPage::new(&config);
    let entered = RegistrationForm {
        name: "Shampoo".to_string(),
        description: "desc".to_string(),
        price: "49.9".to_string(),
        image_url: "url".to_string(),
    };
    page.form = entered.clone();

    let outcome = page.submit(&transport, &mut host).await;

    match outcome {
        SubmitOutcome::Failed(e) => assert!(e.is_network(), "unexpected error: {e}"),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert_eq!(page.form, entered);
    assert_eq!(host.location, None);
    let notice = host.last_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert_eq!(notice.message, BACKEND_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_backend_listing_error() {
    let base_url = unreachable_base_url().await;
    let config = config_for(&base_url);
    let transport = HttpTransport::new(&config).unwrap();
    let mut page = ListingPage::new(&config);

    let outcome = page.load(&transport).await;

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    let html = page.render();
    assert!(html.contains("Erro ao carregar produtos!"));
    assert!(html.contains(&base_url));
    assert!(page.cache().is_empty());
}
