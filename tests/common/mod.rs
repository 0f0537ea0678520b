//! In-memory imitation of the OpenCart account pages, standing in for a real
//! browser.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use async_trait::async_trait;
use opencart_login::{
    DriverError, Element, LoginLocators, Locator, LookupError, Route,
    ScenarioContext, ScenarioWorld, Session, SessionError, SessionFactory,
    Storefront,
};
use url::Url;

pub const REJECTED_LOGIN: &str =
    "Warning: No match for E-Mail Address and/or Password.";

/// Counters of sessions opened and quit through a [`FakeFactory`].
#[derive(Debug, Default)]
pub struct SessionStats {
    pub opened: Cell<usize>,
    pub quit: Cell<usize>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Page {
    Blank,
    Login,
    Account,
    Forgotten,
    Logout,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Target {
    Email,
    Password,
    Submit,
    ForgottenLink,
    LogoutLink,
    ErrorBanner,
}

impl Target {
    fn of(locator: &Locator) -> Option<Self> {
        let l = LoginLocators::default();
        [
            (l.email, Self::Email),
            (l.password, Self::Password),
            (l.login_button, Self::Submit),
            (l.forgotten_password_link, Self::ForgottenLink),
            (l.logout_link, Self::LogoutLink),
            (l.error_banner, Self::ErrorBanner),
        ]
        .into_iter()
        .find_map(|(known, target)| (&known == locator).then_some(target))
    }
}

#[derive(Debug)]
struct Browser {
    storefront: Storefront,
    url: Url,
    page: Page,
    email: String,
    password: String,
    rejected: bool,
    closed: bool,
}

impl Browser {
    fn navigate(&mut self, url: Url) {
        self.page = match Route::of(&url) {
            Some(Route::Login) => Page::Login,
            Some(Route::ForgottenPassword) => Page::Forgotten,
            Some(Route::Account) => Page::Account,
            Some(Route::Logout) => Page::Logout,
            None => Page::Blank,
        };
        self.url = url;
        self.email.clear();
        self.password.clear();
        self.rejected = false;
    }

    fn has(&self, target: Target) -> bool {
        use Target as T;

        match self.page {
            Page::Login => !matches!(target, T::LogoutLink),
            Page::Forgotten => matches!(target, T::Email | T::Submit),
            Page::Account => matches!(target, T::LogoutLink),
            Page::Blank | Page::Logout => false,
        }
    }

    fn submit(&mut self) {
        if self.page != Page::Login {
            return;
        }
        let account = self.storefront.account();
        if self.email == account.email && self.password == account.password {
            let url = self.storefront.url(Route::Account);
            self.navigate(url);
        } else {
            self.password.clear();
            self.rejected = true;
        }
    }
}

/// [`Session`] over an in-memory [`Browser`].
#[derive(Clone, Debug)]
pub struct FakeSession {
    browser: Rc<RefCell<Browser>>,
    stats: Rc<SessionStats>,
}

impl FakeSession {
    pub fn new(storefront: Storefront, stats: Rc<SessionStats>) -> Self {
        let browser = Browser {
            storefront,
            url: Url::parse("about:blank").unwrap(),
            page: Page::Blank,
            email: String::new(),
            password: String::new(),
            rejected: false,
            closed: false,
        };
        Self { browser: Rc::new(RefCell::new(browser)), stats }
    }

    pub fn typed_email(&self) -> String {
        self.browser.borrow().email.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.browser.borrow().closed
    }

    fn ensure_open(&self, command: &'static str) -> Result<(), DriverError> {
        if self.is_closed() {
            return Err(DriverError::command(command, "invalid session id"));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl Session for FakeSession {
    type Element = FakeElement;

    async fn goto(&self, url: &Url) -> Result<(), DriverError> {
        self.ensure_open("goto")?;
        self.browser.borrow_mut().navigate(url.clone());
        Ok(())
    }

    async fn current_url(&self) -> Result<Url, DriverError> {
        self.ensure_open("current_url")?;
        Ok(self.browser.borrow().url.clone())
    }

    async fn find(
        &self,
        locator: &Locator,
    ) -> Result<FakeElement, LookupError> {
        self.ensure_open("find").map_err(|source| LookupError::Driver {
            locator: locator.clone(),
            source,
        })?;
        match Target::of(locator) {
            Some(target) if self.browser.borrow().has(target) => {
                Ok(FakeElement { browser: Rc::clone(&self.browser), target })
            }
            _ => Err(LookupError::NotFound { locator: locator.clone() }),
        }
    }

    async fn quit(self) -> Result<(), DriverError> {
        self.ensure_open("close")?;
        self.browser.borrow_mut().closed = true;
        self.stats.quit.set(self.stats.quit.get() + 1);
        Ok(())
    }
}

/// [`Element`] of a [`FakeSession`].
#[derive(Debug)]
pub struct FakeElement {
    browser: Rc<RefCell<Browser>>,
    target: Target,
}

#[async_trait(?Send)]
impl Element for FakeElement {
    async fn send_keys(&self, text: &str) -> Result<(), DriverError> {
        let mut browser = self.browser.borrow_mut();
        match self.target {
            Target::Email => browser.email.push_str(text),
            Target::Password => browser.password.push_str(text),
            _ => {
                return Err(DriverError::command(
                    "send_keys",
                    "element not interactable",
                ));
            }
        }
        Ok(())
    }

    async fn click(&self) -> Result<(), DriverError> {
        let mut browser = self.browser.borrow_mut();
        match self.target {
            Target::Submit => browser.submit(),
            Target::ForgottenLink => {
                let url = browser.storefront.url(Route::ForgottenPassword);
                browser.navigate(url);
            }
            Target::LogoutLink => {
                let url = browser.storefront.url(Route::Logout);
                browser.navigate(url);
            }
            Target::ErrorBanner if !browser.rejected => {
                return Err(DriverError::command(
                    "click",
                    "element not interactable",
                ));
            }
            Target::Email | Target::Password | Target::ErrorBanner => {}
        }
        Ok(())
    }

    async fn is_displayed(&self) -> Result<bool, DriverError> {
        let browser = self.browser.borrow();
        Ok(match self.target {
            Target::ErrorBanner => browser.rejected,
            _ => true,
        })
    }

    async fn text(&self) -> Result<String, DriverError> {
        let browser = self.browser.borrow();
        Ok(match self.target {
            Target::ErrorBanner if browser.rejected => REJECTED_LOGIN.into(),
            Target::ForgottenLink => "Forgotten Password".into(),
            Target::LogoutLink => "Logout".into(),
            Target::Submit => "Login".into(),
            _ => String::new(),
        })
    }
}

/// [`SessionFactory`] of [`FakeSession`]s.
#[derive(Debug, Default)]
pub struct FakeFactory {
    storefront: Storefront,
    stats: Rc<SessionStats>,
}

impl FakeFactory {
    pub fn new(storefront: Storefront, stats: Rc<SessionStats>) -> Self {
        Self { storefront, stats }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}

#[async_trait(?Send)]
impl SessionFactory for FakeFactory {
    type Session = FakeSession;

    async fn open(&self) -> Result<FakeSession, SessionError> {
        self.stats.opened.set(self.stats.opened.get() + 1);
        Ok(FakeSession::new(self.storefront.clone(), Rc::clone(&self.stats)))
    }
}

/// [`cucumber::World`] running scenarios against [`FakeSession`]s.
#[derive(Debug, Default, cucumber::World)]
pub struct OfflineWorld {
    scenario: ScenarioContext<FakeSession>,
}

impl ScenarioWorld for OfflineWorld {
    type Session = FakeSession;

    fn scenario(&mut self) -> &mut ScenarioContext<FakeSession> {
        &mut self.scenario
    }
}

/// Opens a [`FakeSession`] already on the login page of the default
/// [`Storefront`].
pub async fn login_page_session() -> FakeSession {
    let session = FakeFactory::default().open().await.unwrap();
    session
        .goto(&Storefront::default().url(Route::Login))
        .await
        .unwrap();
    session
}
