// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-scenario state passed explicitly to every step.
//!
//! The runner builds a fresh [`World`] for each scenario, so a
//! [`ScenarioContext`] never outlives the scenario it was created for. Its
//! browser session is opened by the before-hook and quit by the after-hook,
//! exactly once each.
//!
//! [`World`]: cucumber::World

use derive_more::with_trait::{Display, Error, From};
use tracing::info;

use crate::{
    config::{Route, Storefront},
    error::{DriverError, PageError, SessionError},
    page::LoginPage,
    session::{Session, SessionFactory},
};

/// [`World`] exposing its [`ScenarioContext`] to the step handlers.
///
/// [`World`]: cucumber::World
pub trait ScenarioWorld: 'static {
    /// Kind of browser [`Session`] the scenario runs in.
    type Session: Session;

    /// Returns the [`ScenarioContext`] of the running scenario.
    fn scenario(&mut self) -> &mut ScenarioContext<Self::Session>;
}

/// Reason a step could not use the [`ScenarioContext`].
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ContextError {
    /// The before-hook has not opened a browser session.
    #[display("no browser session is open for this scenario")]
    NoSession,

    /// No step has navigated to the login page yet.
    #[display("scenario is not on the login page, navigate to it first")]
    NotOnLoginPage,
}

/// Failure of a step.
#[derive(Debug, Display, Error, From)]
pub enum StepError {
    /// Scenario is not in a state the step requires.
    #[display("{_0}")]
    Context(ContextError),

    /// Page object action failed.
    #[display("{_0}")]
    Page(PageError),

    /// Browser command failed.
    #[display("{_0}")]
    Driver(DriverError),
}

/// Browser session and page objects of a single scenario.
#[derive(Debug)]
pub struct ScenarioContext<S> {
    session: Option<S>,
    storefront: Storefront,
    login_page: Option<LoginPage<S>>,
}

// Implemented manually to omit redundant `S: Default` trait bound, imposed by
// `#[derive(Default)]`.
impl<S> Default for ScenarioContext<S> {
    fn default() -> Self {
        Self {
            session: None,
            storefront: Storefront::default(),
            login_page: None,
        }
    }
}

impl<S: Session> ScenarioContext<S> {
    /// Opens a browser session for this scenario through the given
    /// [`SessionFactory`].
    ///
    /// # Errors
    ///
    /// - [`SessionError::AlreadyOpen`] if a session is open already;
    /// - whatever the [`SessionFactory`] fails with.
    pub async fn setup<F>(
        &mut self,
        factory: &F,
        storefront: &Storefront,
    ) -> Result<(), SessionError>
    where
        F: SessionFactory<Session = S> + ?Sized,
    {
        if self.session.is_some() {
            return Err(SessionError::AlreadyOpen);
        }
        self.session = Some(factory.open().await?);
        self.storefront = storefront.clone();
        Ok(())
    }

    /// Quits the browser session of this scenario, if any.
    ///
    /// The session is taken out before quitting, so it is never quit twice,
    /// even if quitting fails.
    ///
    /// Returns whether a session has been quit.
    ///
    /// # Errors
    ///
    /// If the browser fails to quit.
    pub async fn teardown(&mut self) -> Result<bool, DriverError> {
        self.login_page = None;
        let Some(session) = self.session.take() else {
            return Ok(false);
        };
        session.quit().await?;
        Ok(true)
    }

    /// Indicates whether a browser session is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the browser session of this scenario.
    ///
    /// # Errors
    ///
    /// [`ContextError::NoSession`] if none is open.
    pub const fn session(&self) -> Result<&S, ContextError> {
        match &self.session {
            Some(s) => Ok(s),
            None => Err(ContextError::NoSession),
        }
    }

    /// Returns the [`Storefront`] under test.
    #[must_use]
    pub const fn storefront(&self) -> &Storefront {
        &self.storefront
    }

    /// Navigates to the login page and makes it the current [`LoginPage`].
    ///
    /// # Errors
    ///
    /// If no session is open, or navigation fails.
    pub async fn open_login_page(
        &mut self,
    ) -> Result<&LoginPage<S>, StepError> {
        let session = self.session()?.clone();
        let url = self.storefront.url(Route::Login);
        info!(%url, "navigating to login page");
        session.goto(&url).await?;
        Ok(self.login_page.insert(LoginPage::new(session)))
    }

    /// Returns the current [`LoginPage`].
    ///
    /// # Errors
    ///
    /// [`ContextError::NotOnLoginPage`] if no step has navigated to it.
    pub const fn login_page(&self) -> Result<&LoginPage<S>, ContextError> {
        match &self.login_page {
            Some(p) => Ok(p),
            None => Err(ContextError::NotOnLoginPage),
        }
    }
}
