// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Browser session abstraction consumed by page objects.
//!
//! A [`Session`] is a cheap handle to one live browser instance: cloning it
//! never spawns a new browser, and every clone drives the same one. The only
//! owner of the browser lifecycle is the [`ScenarioContext`], which opens it
//! through a [`SessionFactory`] and quits it once the scenario finishes.
//!
//! [`ScenarioContext`]: crate::ScenarioContext

pub mod webdriver;

use std::fmt::Debug;

use async_trait::async_trait;
use url::Url;

use crate::{
    error::{DriverError, LookupError, SessionError},
    locator::Locator,
};

#[doc(inline)]
pub use self::webdriver::{Browser, WebDriverFactory, WebDriverSession};

/// Handle to a live browser instance.
#[async_trait(?Send)]
pub trait Session: Clone + Debug + 'static {
    /// Element handle produced by [`Session::find()`].
    type Element: Element;

    /// Navigates to the given `url` and waits for the page to load.
    async fn goto(&self, url: &Url) -> Result<(), DriverError>;

    /// Returns the URL of the currently loaded page.
    async fn current_url(&self) -> Result<Url, DriverError>;

    /// Resolves the given [`Locator`] into the first matching element.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotFound`] if nothing matches.
    async fn find(&self, locator: &Locator)
        -> Result<Self::Element, LookupError>;

    /// Closes the browser. Every clone of this [`Session`] becomes unusable.
    async fn quit(self) -> Result<(), DriverError>;
}

/// Handle to an element of the page loaded in a [`Session`].
#[async_trait(?Send)]
pub trait Element {
    /// Types the given `text` into this element.
    async fn send_keys(&self, text: &str) -> Result<(), DriverError>;

    /// Clicks this element.
    async fn click(&self) -> Result<(), DriverError>;

    /// Indicates whether this element is rendered visible.
    async fn is_displayed(&self) -> Result<bool, DriverError>;

    /// Returns the visible text of this element.
    async fn text(&self) -> Result<String, DriverError>;
}

/// Opener of fresh [`Session`]s, one per scenario.
#[async_trait(?Send)]
pub trait SessionFactory: 'static {
    /// Kind of [`Session`]s opened.
    type Session: Session;

    /// Launches a new browser instance.
    async fn open(&self) -> Result<Self::Session, SessionError>;
}
