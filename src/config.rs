// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Suite configuration and description of the storefront under test.
//!
//! [`SuiteConfig`] is a [`clap::Args`] block composed into the runner's own
//! CLI, so every option may be given either as a flag or an environment
//! variable:
//!
//! ```text
//! cargo test --test offline -- --base-url http://localhost:8080/ --tags @smoke
//! ```

use std::{
    fs::{self, File},
    io,
    path::PathBuf,
};

use url::Url;

use crate::session::Browser;

/// Default storefront under test.
pub const DEFAULT_BASE_URL: &str = "https://demo.opencart.com/";

/// Demo account registered on the default storefront.
pub const DEMO_EMAIL: &str = "qatestertest@gmail.com";

/// Password of the [`DEMO_EMAIL`] account.
pub const DEMO_PASSWORD: &str = "Test@123";

/// Name of the Cucumber JSON report inside [`SuiteConfig::report_dir`].
pub const JSON_REPORT: &str = "cucumber.json";

/// Custom CLI options of the suite.
#[derive(Clone, Debug, clap::Args)]
pub struct SuiteConfig {
    /// Root URL of the OpenCart storefront under test.
    #[arg(long, env = "OPENCART_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Language segment of storefront URLs.
    #[arg(long, env = "OPENCART_LANGUAGE", default_value = "en-gb")]
    pub language: String,

    /// E-mail of a registered customer account.
    #[arg(long, env = "OPENCART_EMAIL", default_value = DEMO_EMAIL)]
    pub email: String,

    /// Password of the `--email` account.
    #[arg(long, env = "OPENCART_PASSWORD", default_value = DEMO_PASSWORD)]
    pub password: String,

    /// WebDriver server to open browser sessions on.
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:4444")]
    pub webdriver_url: Url,

    /// Browser to request from the WebDriver server.
    #[arg(long, env = "BROWSER", value_enum, default_value_t)]
    pub browser: Browser,

    /// Run the browser without a visible window.
    #[arg(long, env = "HEADLESS")]
    pub headless: bool,

    /// Directory to write the Cucumber JSON report into.
    #[arg(long, env = "CUCUMBER_REPORT_DIR", default_value = "target/cucumber")]
    pub report_dir: PathBuf,
}

impl SuiteConfig {
    /// Describes the [`Storefront`] under test.
    ///
    /// # Errors
    ///
    /// If the `language` segment cannot be joined onto the `base_url`.
    pub fn storefront(&self) -> Result<Storefront, url::ParseError> {
        Storefront::new(
            self.base_url.clone(),
            &self.language,
            Credentials::new(&self.email, &self.password),
        )
    }

    /// Creates the [`JSON_REPORT`] file, along with missing parent
    /// directories.
    ///
    /// # Errors
    ///
    /// If the directory or the file cannot be created.
    pub fn create_json_report(&self) -> io::Result<File> {
        fs::create_dir_all(&self.report_dir)?;
        File::create(self.report_dir.join(JSON_REPORT))
    }
}

/// Login credentials of a customer account.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Credentials {
    /// Account e-mail.
    pub email: String,

    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates new [`Credentials`].
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD)
    }
}

/// Account routes of an OpenCart storefront, passed as its `route` query
/// parameter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Route {
    /// Customer login form.
    Login,

    /// Password reset request form.
    ForgottenPassword,

    /// Customer dashboard, shown after a successful login.
    Account,

    /// Logout confirmation.
    Logout,
}

impl Route {
    const ALL: [Self; 4] =
        [Self::Login, Self::ForgottenPassword, Self::Account, Self::Logout];

    /// Returns the `route` query value of this [`Route`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "account/login",
            Self::ForgottenPassword => "account/forgotten",
            Self::Account => "account/account",
            Self::Logout => "account/logout",
        }
    }

    /// Recognizes the [`Route`] the given `url` points to.
    #[must_use]
    pub fn of(url: &Url) -> Option<Self> {
        let (_, value) = url.query_pairs().find(|(k, _)| k == "route")?;
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

/// OpenCart storefront under test.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Storefront {
    root: Url,
    account: Credentials,
}

impl Storefront {
    /// Creates a new [`Storefront`] rooted at `base_url/language`.
    ///
    /// # Errors
    ///
    /// If the `language` is not a valid relative URL.
    pub fn new(
        mut base_url: Url,
        language: &str,
        account: Credentials,
    ) -> Result<Self, url::ParseError> {
        // Without the trailing slash `join()` would replace the last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let root = base_url.join(language.trim_matches('/'))?;
        Ok(Self { root, account })
    }

    /// Returns the absolute URL of the given [`Route`].
    #[must_use]
    pub fn url(&self, route: Route) -> Url {
        let mut url = self.root.clone();
        url.set_query(Some(&format!("route={}", route.as_str())));
        url
    }

    /// Returns the [`Credentials`] of the registered customer account.
    #[must_use]
    pub const fn account(&self) -> &Credentials {
        &self.account
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self {
            root: Url::parse(DEFAULT_BASE_URL)
                .and_then(|base| base.join("en-gb"))
                .unwrap_or_else(|e| unreachable!("valid default URL: {e}")),
            account: Credentials::default(),
        }
    }
}
