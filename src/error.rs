// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of browser interactions and suite setup.
//!
//! Element-resolution failures ([`LookupError`]) are kept apart from failures
//! of the browser commands themselves ([`DriverError`]), so callers may tell
//! "not on the expected page" from "browser went away".

use std::{error::Error as StdError, io};

use derive_more::with_trait::{Display, Error, From};

use crate::{locator::Locator, step::RegistryError};

/// Type-erased error of an underlying browser automation client.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Failure of a browser command.
#[derive(Debug, Display, Error)]
pub enum DriverError {
    /// Browser rejected or failed to execute the command.
    #[display("browser command `{command}` failed: {source}")]
    Command {
        /// Name of the failed command.
        #[error(not(source))]
        command: &'static str,

        /// Client error.
        source: BoxError,
    },
}

impl DriverError {
    /// Creates a [`DriverError::Command`] from any client error.
    pub fn command(
        command: &'static str,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Command { command, source: source.into() }
    }
}

/// Failure to resolve a [`Locator`] into an element.
#[derive(Debug, Display, Error)]
pub enum LookupError {
    /// Nothing on the current page matches the [`Locator`].
    #[display("no element matches {locator}")]
    NotFound {
        /// [`Locator`] matching nothing.
        #[error(not(source))]
        locator: Locator,
    },

    /// Browser failed while looking the [`Locator`] up.
    #[display("failed to look up {locator}: {source}")]
    Driver {
        /// [`Locator`] being looked up.
        #[error(not(source))]
        locator: Locator,

        /// Underlying failure.
        source: DriverError,
    },
}

impl LookupError {
    /// Returns the [`Locator`] which failed to resolve.
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        match self {
            Self::NotFound { locator } | Self::Driver { locator, .. } => {
                locator
            }
        }
    }

    /// Indicates whether the element is absent from the page, as opposed to
    /// the browser failing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Failure of a page object action.
#[derive(Debug, Display, Error, From)]
pub enum PageError {
    /// Element could not be resolved.
    #[display("{_0}")]
    Lookup(LookupError),

    /// Element was resolved, but interacting with it failed.
    #[display("{_0}")]
    Driver(DriverError),
}

impl PageError {
    /// Indicates whether this error stems from a missing element.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Lookup(e) if e.is_not_found())
    }
}

/// Failure to open or reuse a browser session.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// WebDriver server refused to create a session.
    #[display("failed to start browser session at {endpoint}: {source}")]
    Connect {
        /// WebDriver server URL.
        #[error(not(source))]
        endpoint: String,

        /// Client error.
        source: BoxError,
    },

    /// The scenario already owns an open session.
    #[display("browser session is already open for this scenario")]
    AlreadyOpen,
}

/// Failure to prepare a suite run.
#[derive(Debug, Display, Error, From)]
pub enum SuiteError {
    /// Step bindings are inconsistent.
    #[display("invalid step bindings: {_0}")]
    Registry(RegistryError),

    /// Storefront URL could not be built.
    #[display("invalid storefront URL: {_0}")]
    Url(url::ParseError),

    /// Report file could not be created.
    #[display("failed to create report: {_0}")]
    Report(io::Error),
}
