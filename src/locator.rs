// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Locator`]s identifying elements on a rendered page.

use derive_more::with_trait::Display;

/// Rule for finding an element within a rendered page.
///
/// A [`Locator`] may resolve to zero or more elements, only the first one is
/// ever interacted with.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub enum Locator {
    /// Element with the given `name` attribute.
    #[display("name={_0:?}")]
    Name(String),

    /// Element with the given `id` attribute.
    #[display("id={_0:?}")]
    Id(String),

    /// Element matching the given [XPath] expression.
    ///
    /// [XPath]: https://www.w3.org/TR/xpath-31
    #[display("xpath={_0:?}")]
    XPath(String),

    /// Anchor element whose visible text is exactly the given one.
    #[display("link={_0:?}")]
    LinkText(String),

    /// Element matching the given CSS selector.
    #[display("css={_0:?}")]
    Css(String),
}

impl Locator {
    /// Creates a [`Locator::Name`].
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a [`Locator::Id`].
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates a [`Locator::XPath`].
    #[must_use]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::XPath(expr.into())
    }

    /// Creates a [`Locator::LinkText`].
    #[must_use]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// Creates a [`Locator::Css`].
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }
}

/// [`Locator`]s of the OpenCart account login page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoginLocators {
    /// E-mail input.
    pub email: Locator,

    /// Password input.
    pub password: Locator,

    /// Form submit button.
    pub login_button: Locator,

    /// "Forgotten Password" link next to the password input.
    pub forgotten_password_link: Locator,

    /// "Logout" link in the account sidebar, present once logged in.
    pub logout_link: Locator,

    /// Danger alert shown after a rejected login attempt.
    pub error_banner: Locator,
}

impl Default for LoginLocators {
    fn default() -> Self {
        Self {
            email: Locator::name("email"),
            password: Locator::xpath("//input[@type='password']"),
            login_button: Locator::xpath("//button[@type='submit']"),
            forgotten_password_link: Locator::link_text("Forgotten Password"),
            logout_link: Locator::link_text("Logout"),
            error_banner: Locator::css(".alert-danger"),
        }
    }
}
