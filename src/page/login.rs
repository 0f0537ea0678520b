// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Page object of the OpenCart account login page.

use tracing::debug;
use url::Url;

use crate::{
    error::{DriverError, LookupError, PageError},
    locator::{LoginLocators, Locator},
    session::{Element as _, Session},
};

/// OpenCart account login page, as loaded in a [`Session`].
///
/// None of the methods check that the [`Session`] is actually on the login
/// page: a missing element surfaces as [`LookupError::NotFound`].
#[derive(Clone, Debug)]
pub struct LoginPage<S> {
    session: S,
    locators: LoginLocators,
}

impl<S: Session> LoginPage<S> {
    /// Creates a new [`LoginPage`] driving the given [`Session`] with the
    /// default OpenCart [`LoginLocators`].
    #[must_use]
    pub fn new(session: S) -> Self {
        Self::with_locators(session, LoginLocators::default())
    }

    /// Creates a new [`LoginPage`] with custom [`LoginLocators`], for themes
    /// deviating from the default markup.
    #[must_use]
    pub const fn with_locators(session: S, locators: LoginLocators) -> Self {
        Self { session, locators }
    }

    /// Returns the [`LoginLocators`] of this page.
    #[must_use]
    pub const fn locators(&self) -> &LoginLocators {
        &self.locators
    }

    /// Types the given `email` into the e-mail input.
    ///
    /// # Errors
    ///
    /// If the input is missing or not interactable.
    pub async fn enter_email(&self, email: &str) -> Result<(), PageError> {
        self.type_into(&self.locators.email, email).await
    }

    /// Types the given `password` into the password input.
    ///
    /// # Errors
    ///
    /// If the input is missing or not interactable.
    pub async fn enter_password(
        &self,
        password: &str,
    ) -> Result<(), PageError> {
        self.type_into(&self.locators.password, password).await
    }

    /// Submits the login form.
    ///
    /// # Errors
    ///
    /// If the button is missing or not interactable.
    pub async fn click_login_button(&self) -> Result<(), PageError> {
        self.click(&self.locators.login_button).await
    }

    /// Follows the "Forgotten Password" link.
    ///
    /// # Errors
    ///
    /// If the link is missing or not interactable.
    pub async fn click_forgotten_password_link(&self) -> Result<(), PageError> {
        self.click(&self.locators.forgotten_password_link).await
    }

    /// Indicates whether the "Forgotten Password" link is visible.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotFound`] if the link is not on the page at all.
    pub async fn is_forgotten_password_link_displayed(
        &self,
    ) -> Result<bool, PageError> {
        self.is_displayed(&self.locators.forgotten_password_link).await
    }

    /// Indicates whether the "Logout" link is visible, which is the case only
    /// for a logged in customer.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotFound`] if the link is not on the page at all.
    pub async fn is_logout_link_displayed(&self) -> Result<bool, PageError> {
        self.is_displayed(&self.locators.logout_link).await
    }

    /// Indicates whether the error banner is visible.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotFound`] if no banner is on the page at all.
    pub async fn is_error_banner_displayed(&self) -> Result<bool, PageError> {
        self.is_displayed(&self.locators.error_banner).await
    }

    /// Returns the text of the error banner.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotFound`] if no banner is on the page at all.
    pub async fn error_banner_text(&self) -> Result<String, PageError> {
        let banner = self.find(&self.locators.error_banner).await?;
        Ok(banner.text().await?)
    }

    /// Fills in both inputs and submits the form.
    ///
    /// Not atomic: if a later action fails, earlier ones have already taken
    /// effect on the live page.
    ///
    /// # Errors
    ///
    /// If any of the form elements is missing or not interactable.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(), PageError> {
        self.enter_email(email).await?;
        self.enter_password(password).await?;
        self.click_login_button().await
    }

    /// Returns the URL currently loaded in the [`Session`], e.g. to check
    /// where the "Forgotten Password" link led to.
    ///
    /// # Errors
    ///
    /// If the browser fails to report it.
    pub async fn current_url(&self) -> Result<Url, DriverError> {
        self.session.current_url().await
    }

    async fn find(&self, locator: &Locator) -> Result<S::Element, LookupError> {
        self.session.find(locator).await
    }

    async fn type_into(
        &self,
        locator: &Locator,
        text: &str,
    ) -> Result<(), PageError> {
        debug!(%locator, "typing");
        self.find(locator).await?.send_keys(text).await?;
        Ok(())
    }

    async fn click(&self, locator: &Locator) -> Result<(), PageError> {
        debug!(%locator, "clicking");
        self.find(locator).await?.click().await?;
        Ok(())
    }

    async fn is_displayed(&self, locator: &Locator) -> Result<bool, PageError> {
        let shown = self.find(locator).await?.is_displayed().await?;
        debug!(%locator, shown, "checked visibility");
        Ok(shown)
    }
}
