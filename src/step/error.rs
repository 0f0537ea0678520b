// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of building a [`StepRegistry`] and matching steps against it.
//!
//! [`StepRegistry`]: super::StepRegistry

use std::fmt;

use derive_more::with_trait::{Display, Error};
use itertools::Itertools as _;

/// Error of building a [`StepRegistry`].
///
/// [`StepRegistry`]: super::StepRegistry
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum RegistryError {
    /// The same phrase is bound twice.
    #[display(
        "phrase `{phrase}` is bound to both `{existing}` and `{duplicate}`"
    )]
    Duplicate {
        /// Duplicated phrase.
        #[error(not(source))]
        phrase: &'static str,

        /// Name of the handler registered first.
        existing: &'static str,

        /// Name of the handler attempted to be registered.
        duplicate: &'static str,
    },

    /// Phrase is not a valid regular expression.
    #[display("phrase `{phrase}` of `{handler}` is invalid: {reason}")]
    Pattern {
        /// Invalid phrase.
        #[error(not(source))]
        phrase: &'static str,

        /// Name of the handler.
        handler: &'static str,

        /// Regex compilation error message.
        reason: String,
    },
}

/// Error of a [`gherkin::Step`] matching multiple bindings of a
/// [`StepRegistry`].
///
/// [`gherkin::Step`]: cucumber::gherkin::Step
/// [`StepRegistry`]: super::StepRegistry
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub struct AmbiguousStepError {
    /// Text of the ambiguous step.
    #[error(not(source))]
    pub step: String,

    /// Phrases the step matches, with the names of their handlers.
    pub possible_matches: Vec<(&'static str, &'static str)>,
}

impl AmbiguousStepError {
    /// Creates a new [`AmbiguousStepError`], sorting the `possible_matches`.
    #[must_use]
    pub fn new(
        step: impl Into<String>,
        possible_matches: impl IntoIterator<
            Item = (&'static str, &'static str),
        >,
    ) -> Self {
        Self {
            step: step.into(),
            possible_matches: possible_matches.into_iter().sorted().collect(),
        }
    }
}

impl fmt::Display for AmbiguousStepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step `{}` has possible matches:", self.step)?;
        for (phrase, handler) in &self.possible_matches {
            write!(f, "\n{phrase} --> {handler}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_matches_are_sorted() {
        let err = AmbiguousStepError::new(
            "I click on the login button",
            [
                ("^I click on the login button$", "click_login"),
                ("^I click on (.+)$", "click_anything"),
            ],
        );

        assert_eq!(err.possible_matches[0].1, "click_anything");
        assert_eq!(
            err.to_string(),
            "Step `I click on the login button` has possible matches:\n\
             ^I click on (.+)$ --> click_anything\n\
             ^I click on the login button$ --> click_login",
        );
    }

    #[test]
    fn duplicate_names_both_handlers() {
        let err = RegistryError::Duplicate {
            phrase: "^I am on the OpenCart login page$",
            existing: "on_login_page",
            duplicate: "on_login_page_again",
        };

        let msg = err.to_string();
        assert!(msg.contains("on_login_page`"));
        assert!(msg.contains("on_login_page_again"));
    }
}
