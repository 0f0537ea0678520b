// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Registration table of step bindings.
//!
//! Every phrase maps to exactly one [`Handler`]: the [`StepRegistry`] refuses
//! a phrase registered twice at construction time, long before any scenario
//! runs, and can be checked against feature files for phrases matching more
//! than one binding.
//!
//! - [`registry`]: the table itself and its conversion into the runner's
//!   [`Collection`]
//! - [`error`]: registration and matching failures
//!
//! [`Collection`]: cucumber::step::Collection

pub mod error;
pub mod registry;

pub use self::{
    error::{AmbiguousStepError, RegistryError},
    registry::{Binding, Handler, StepRegistry},
};
