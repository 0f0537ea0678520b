// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Session`] speaking [W3C WebDriver] through [`fantoccini`].
//!
//! [W3C WebDriver]: https://www.w3.org/TR/webdriver

use async_trait::async_trait;
use derive_more::with_trait::Display;
use fantoccini::{wd::Capabilities, Client, ClientBuilder};
use serde_json::json;
use tracing::{debug, info};
use url::Url;

use crate::{
    config::SuiteConfig,
    error::{DriverError, LookupError, SessionError},
    locator::Locator,
};

use super::{Element, Session, SessionFactory};

/// Browser to ask the WebDriver server for.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, clap::ValueEnum)]
pub enum Browser {
    /// Google Chrome via `chromedriver`.
    #[default]
    #[display("chrome")]
    Chrome,

    /// Mozilla Firefox via `geckodriver`.
    #[display("firefox")]
    Firefox,
}

impl Browser {
    /// Builds WebDriver capabilities requesting this [`Browser`].
    #[must_use]
    pub fn capabilities(self, headless: bool) -> Capabilities {
        let mut caps = Capabilities::new();
        match self {
            Self::Chrome => {
                _ = caps.insert("browserName".into(), json!("chrome"));
                if headless {
                    _ = caps.insert(
                        "goog:chromeOptions".into(),
                        json!({ "args": ["--headless=new"] }),
                    );
                }
            }
            Self::Firefox => {
                _ = caps.insert("browserName".into(), json!("firefox"));
                if headless {
                    _ = caps.insert(
                        "moz:firefoxOptions".into(),
                        json!({ "args": ["-headless"] }),
                    );
                }
            }
        }
        caps
    }
}

/// [`SessionFactory`] connecting to a running WebDriver server.
#[derive(Clone, Debug)]
pub struct WebDriverFactory {
    endpoint: String,
    browser: Browser,
    headless: bool,
}

impl WebDriverFactory {
    /// Creates a new [`WebDriverFactory`] out of the [`SuiteConfig`].
    #[must_use]
    pub fn new(config: &SuiteConfig) -> Self {
        Self {
            endpoint: config.webdriver_url.to_string(),
            browser: config.browser,
            headless: config.headless,
        }
    }
}

#[async_trait(?Send)]
impl SessionFactory for WebDriverFactory {
    type Session = WebDriverSession;

    async fn open(&self) -> Result<WebDriverSession, SessionError> {
        info!(
            endpoint = %self.endpoint,
            browser = %self.browser,
            headless = self.headless,
            "starting browser session",
        );
        let client = ClientBuilder::native()
            .capabilities(self.browser.capabilities(self.headless))
            .connect(&self.endpoint)
            .await
            .map_err(|e| SessionError::Connect {
                endpoint: self.endpoint.clone(),
                source: e.into(),
            })?;
        Ok(WebDriverSession { client })
    }
}

/// [`Session`] backed by a [`fantoccini::Client`].
#[derive(Clone, Debug)]
pub struct WebDriverSession {
    client: Client,
}

#[async_trait(?Send)]
impl Session for WebDriverSession {
    type Element = WebDriverElement;

    async fn goto(&self, url: &Url) -> Result<(), DriverError> {
        self.client
            .goto(url.as_str())
            .await
            .map_err(|e| DriverError::command("goto", e))
    }

    async fn current_url(&self) -> Result<Url, DriverError> {
        self.client
            .current_url()
            .await
            .map_err(|e| DriverError::command("current_url", e))
    }

    async fn find(
        &self,
        locator: &Locator,
    ) -> Result<WebDriverElement, LookupError> {
        // WebDriver has no `name` strategy.
        let by_name;
        let query = match locator {
            Locator::Name(name) => {
                by_name = name_selector(name);
                fantoccini::Locator::Css(&by_name)
            }
            Locator::Id(id) => fantoccini::Locator::Id(id),
            Locator::XPath(expr) => fantoccini::Locator::XPath(expr),
            Locator::LinkText(text) => fantoccini::Locator::LinkText(text),
            Locator::Css(selector) => fantoccini::Locator::Css(selector),
        };
        debug!(%locator, "finding element");

        match self.client.find(query).await {
            Ok(element) => Ok(WebDriverElement { element }),
            Err(e) if e.is_no_such_element() => {
                Err(LookupError::NotFound { locator: locator.clone() })
            }
            Err(e) => Err(LookupError::Driver {
                locator: locator.clone(),
                source: DriverError::command("find", e),
            }),
        }
    }

    async fn quit(self) -> Result<(), DriverError> {
        info!("closing browser session");
        self.client
            .close()
            .await
            .map_err(|e| DriverError::command("close", e))
    }
}

/// Builds a CSS selector matching elements by their `name` attribute.
fn name_selector(name: &str) -> String {
    let mut selector = String::with_capacity(name.len() + 10);
    selector.push_str("[name=\"");
    for c in name.chars() {
        if matches!(c, '"' | '\\') {
            selector.push('\\');
        }
        selector.push(c);
    }
    selector.push_str("\"]");
    selector
}

/// [`Element`] backed by a [`fantoccini::elements::Element`].
#[derive(Clone, Debug)]
pub struct WebDriverElement {
    element: fantoccini::elements::Element,
}

#[async_trait(?Send)]
impl Element for WebDriverElement {
    async fn send_keys(&self, text: &str) -> Result<(), DriverError> {
        self.element
            .send_keys(text)
            .await
            .map_err(|e| DriverError::command("send_keys", e))
    }

    async fn click(&self) -> Result<(), DriverError> {
        self.element
            .click()
            .await
            .map_err(|e| DriverError::command("click", e))
    }

    async fn is_displayed(&self) -> Result<bool, DriverError> {
        self.element
            .is_displayed()
            .await
            .map_err(|e| DriverError::command("is_displayed", e))
    }

    async fn text(&self) -> Result<String, DriverError> {
        self.element
            .text()
            .await
            .map_err(|e| DriverError::command("text", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_headless_capabilities() {
        let caps = Browser::Chrome.capabilities(true);

        assert_eq!(caps["browserName"], "chrome");
        assert_eq!(caps["goog:chromeOptions"]["args"][0], "--headless=new");
    }

    #[test]
    fn name_selector_escapes_quotes_and_backslashes() {
        assert_eq!(name_selector("email"), r#"[name="email"]"#);
        assert_eq!(
            name_selector(r#"odd"na\me"#),
            r#"[name="odd\"na\\me"]"#,
        );
    }

    #[test]
    fn visible_browser_has_no_options() {
        let caps = Browser::Firefox.capabilities(false);

        assert_eq!(caps["browserName"], "firefox");
        assert!(!caps.contains_key("moz:firefoxOptions"));
    }
}
