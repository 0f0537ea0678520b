mod common;

use std::rc::Rc;

use opencart_login::{
    ContextError, Route, ScenarioContext, SessionError, SessionFactory as _,
    StepError, Storefront,
};

use common::{FakeFactory, FakeSession, SessionStats};

fn factory() -> FakeFactory {
    FakeFactory::new(Storefront::default(), Rc::new(SessionStats::default()))
}

#[tokio::test]
async fn opens_single_session_per_scenario() {
    let factory = factory();
    let mut ctx = ScenarioContext::<FakeSession>::default();

    ctx.setup(&factory, &Storefront::default()).await.unwrap();
    let err = ctx.setup(&factory, &Storefront::default()).await.unwrap_err();

    assert!(matches!(err, SessionError::AlreadyOpen), "{err}");
    assert!(ctx.is_open());
    assert_eq!(factory.stats().opened.get(), 1);
}

#[tokio::test]
async fn quits_session_exactly_once() {
    let factory = factory();
    let mut ctx = ScenarioContext::<FakeSession>::default();
    ctx.setup(&factory, &Storefront::default()).await.unwrap();
    let session = ctx.session().unwrap().clone();

    assert!(ctx.teardown().await.unwrap());
    assert!(!ctx.teardown().await.unwrap());

    assert!(session.is_closed());
    assert!(!ctx.is_open());
    assert_eq!(factory.stats().quit.get(), 1);
}

#[tokio::test]
async fn teardown_without_session_is_noop() {
    let mut ctx = ScenarioContext::<FakeSession>::default();

    assert!(!ctx.teardown().await.unwrap());
}

#[tokio::test]
async fn requires_session_to_open_login_page() {
    let mut ctx = ScenarioContext::<FakeSession>::default();

    let err = ctx.open_login_page().await.unwrap_err();

    assert!(
        matches!(err, StepError::Context(ContextError::NoSession)),
        "{err}",
    );
}

#[tokio::test]
async fn requires_navigation_before_using_login_page() {
    let factory = factory();
    let mut ctx = ScenarioContext::<FakeSession>::default();
    ctx.setup(&factory, &Storefront::default()).await.unwrap();

    let err = ctx.login_page().unwrap_err();

    assert!(matches!(err, ContextError::NotOnLoginPage), "{err}");
}

#[tokio::test]
async fn navigates_to_configured_storefront() {
    let storefront = Storefront::new(
        "https://shop.example.com/opencart".parse().unwrap(),
        "de-de",
        Default::default(),
    )
    .unwrap();
    let factory = FakeFactory::new(
        storefront.clone(),
        Rc::new(SessionStats::default()),
    );
    let mut ctx = ScenarioContext::<FakeSession>::default();
    ctx.setup(&factory, &storefront).await.unwrap();

    let url = ctx.open_login_page().await.unwrap().current_url().await.unwrap();

    assert_eq!(url, storefront.url(Route::Login));
    assert!(
        url.as_str().starts_with("https://shop.example.com/opencart/"),
        "{url}",
    );
    assert!(ctx.login_page().is_ok());
}

#[tokio::test]
async fn forgets_login_page_on_teardown() {
    let factory = factory();
    let mut ctx = ScenarioContext::<FakeSession>::default();
    ctx.setup(&factory, &Storefront::default()).await.unwrap();
    _ = ctx.open_login_page().await.unwrap();

    assert!(ctx.teardown().await.unwrap());

    assert!(matches!(ctx.login_page(), Err(ContextError::NotOnLoginPage)));
}
