//! Runs the feature files against the in-memory storefront, without any
//! browser.

mod common;

use std::rc::Rc;

use common::{FakeFactory, OfflineWorld, SessionStats};

#[tokio::main]
async fn main() {
    opencart_login::init_tracing();

    let stats = Rc::new(SessionStats::default());
    let shared = Rc::clone(&stats);
    opencart_login::run::<OfflineWorld, _>("tests/features", move |cfg| {
        let storefront = cfg.storefront().expect("invalid storefront URL");
        FakeFactory::new(storefront, shared)
    })
    .await
    .expect("failed to start the suite");

    assert!(stats.opened.get() > 0, "no scenario has been run");
    assert_eq!(
        stats.opened.get(),
        stats.quit.get(),
        "every opened session must be quit exactly once",
    );
}
