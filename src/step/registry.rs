// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`StepRegistry`] storing [`Handler`]s along with their phrase patterns.

use cucumber::{
    gherkin::{self, StepType},
    step,
};
use derive_more::with_trait::Debug;
use futures::future::LocalBoxFuture;
use regex::Regex;

use super::error::{AmbiguousStepError, RegistryError};

/// Alias for a step handler [`fn`], the same shape the runner executes.
pub type Handler<World> =
    for<'a> fn(&'a mut World, step::Context) -> LocalBoxFuture<'a, ()>;

/// Single phrase bound to a [`Handler`].
#[derive(Debug)]
pub struct Binding<World> {
    /// Keyword the phrase is bound under.
    pub kind: StepType,

    /// Source of the phrase pattern.
    pub phrase: &'static str,

    /// Human-readable name of the [`Handler`].
    pub name: &'static str,

    regex: Regex,

    #[debug("{:p}", *handler)]
    handler: Handler<World>,
}

// Implemented manually to omit redundant `World: Clone` trait bound, imposed by
// `#[derive(Clone)]`.
impl<World> Clone for Binding<World> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            phrase: self.phrase,
            name: self.name,
            regex: self.regex.clone(),
            handler: self.handler,
        }
    }
}

impl<World> Binding<World> {
    /// Returns the bound [`Handler`].
    #[must_use]
    pub const fn handler(&self) -> Handler<World> {
        self.handler
    }

    /// Returns the captured groups of the given step `text`, the whole match
    /// excluded, or [`None`] if the phrase doesn't match.
    #[must_use]
    pub fn captures(&self, text: &str) -> Option<Vec<String>> {
        let caps = self.regex.captures(text)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|m| m.map_or_else(String::new, |m| m.as_str().to_owned()))
                .collect(),
        )
    }
}

/// Registration table of [`Binding`]s.
///
/// Every phrase is registered at most once across all keywords.
#[derive(Debug)]
pub struct StepRegistry<World> {
    bindings: Vec<Binding<World>>,
}

// Implemented manually to omit redundant `World: Default` trait bound, imposed
// by `#[derive(Default)]`.
impl<World> Default for StepRegistry<World> {
    fn default() -> Self {
        Self { bindings: Vec::new() }
    }
}

impl<World> Clone for StepRegistry<World> {
    fn clone(&self) -> Self {
        Self { bindings: self.bindings.clone() }
    }
}

impl<World> StepRegistry<World> {
    /// Creates a new empty [`StepRegistry`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a [Given] `phrase`.
    ///
    /// # Errors
    ///
    /// See [`StepRegistry::bind()`].
    ///
    /// [Given]: https://cucumber.io/docs/gherkin/reference#given
    pub fn given(
        self,
        phrase: &'static str,
        name: &'static str,
        handler: Handler<World>,
    ) -> Result<Self, RegistryError> {
        self.bind(StepType::Given, phrase, name, handler)
    }

    /// Binds a [When] `phrase`.
    ///
    /// # Errors
    ///
    /// See [`StepRegistry::bind()`].
    ///
    /// [When]: https://cucumber.io/docs/gherkin/reference#when
    pub fn when(
        self,
        phrase: &'static str,
        name: &'static str,
        handler: Handler<World>,
    ) -> Result<Self, RegistryError> {
        self.bind(StepType::When, phrase, name, handler)
    }

    /// Binds a [Then] `phrase`.
    ///
    /// # Errors
    ///
    /// See [`StepRegistry::bind()`].
    ///
    /// [Then]: https://cucumber.io/docs/gherkin/reference#then
    pub fn then(
        self,
        phrase: &'static str,
        name: &'static str,
        handler: Handler<World>,
    ) -> Result<Self, RegistryError> {
        self.bind(StepType::Then, phrase, name, handler)
    }

    /// Binds the given `phrase` under the given keyword `kind`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Duplicate`] if the `phrase` is already bound, under
    ///   any keyword;
    /// - [`RegistryError::Pattern`] if the `phrase` is not a valid [`Regex`].
    pub fn bind(
        mut self,
        kind: StepType,
        phrase: &'static str,
        name: &'static str,
        handler: Handler<World>,
    ) -> Result<Self, RegistryError> {
        let existing = self.bindings.iter().find(|b| b.phrase == phrase);
        if let Some(existing) = existing {
            return Err(RegistryError::Duplicate {
                phrase,
                existing: existing.name,
                duplicate: name,
            });
        }
        let regex = Regex::new(phrase).map_err(|e| RegistryError::Pattern {
            phrase,
            handler: name,
            reason: e.to_string(),
        })?;
        self.bindings.push(Binding { kind, phrase, name, regex, handler });
        Ok(self)
    }

    /// Iterates over all the registered [`Binding`]s in registration order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding<World>> + '_ {
        self.bindings.iter()
    }

    /// Returns the number of registered [`Binding`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Indicates whether nothing is registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the [`Binding`] matching the given [`gherkin::Step`], if any.
    ///
    /// # Errors
    ///
    /// If the [`gherkin::Step`] matches multiple [`Binding`]s.
    pub fn find(
        &self,
        step: &gherkin::Step,
    ) -> Result<Option<&Binding<World>>, AmbiguousStepError> {
        self.find_text(step.ty, &step.value)
    }

    /// Returns the [`Binding`] of the given keyword `kind` matching the given
    /// step `text`, if any.
    ///
    /// # Errors
    ///
    /// If the `text` matches multiple [`Binding`]s.
    pub fn find_text(
        &self,
        kind: StepType,
        text: &str,
    ) -> Result<Option<&Binding<World>>, AmbiguousStepError> {
        let mut matched = self
            .bindings
            .iter()
            .filter(|b| b.kind == kind && b.regex.is_match(text))
            .collect::<Vec<_>>();

        match matched.len() {
            0 | 1 => Ok(matched.pop()),
            _ => Err(AmbiguousStepError::new(
                text,
                matched.into_iter().map(|b| (b.phrase, b.name)),
            )),
        }
    }

    /// Converts this [`StepRegistry`] into the runner's [`step::Collection`].
    #[must_use]
    pub fn into_collection(self) -> step::Collection<World> {
        self.bindings.into_iter().fold(
            step::Collection::new(),
            |steps, Binding { kind, regex, handler, .. }| match kind {
                StepType::Given => steps.given(None, regex, handler),
                StepType::When => steps.when(None, regex, handler),
                StepType::Then => steps.then(None, regex, handler),
            },
        )
    }
}
