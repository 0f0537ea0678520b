//! Runs the feature files in a real browser, driven through a WebDriver
//! server.

use opencart_login::{
    session::{WebDriverFactory, WebDriverSession},
    ScenarioContext, ScenarioWorld,
};

#[derive(Debug, Default, cucumber::World)]
struct BrowserWorld {
    scenario: ScenarioContext<WebDriverSession>,
}

impl ScenarioWorld for BrowserWorld {
    type Session = WebDriverSession;

    fn scenario(&mut self) -> &mut ScenarioContext<WebDriverSession> {
        &mut self.scenario
    }
}

#[tokio::main]
async fn main() {
    opencart_login::init_tracing();

    opencart_login::run::<BrowserWorld, _>(
        "tests/features",
        WebDriverFactory::new,
    )
    .await
    .expect("failed to start the suite");
}
