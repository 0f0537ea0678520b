// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    trivial_casts,
    trivial_numeric_casts
)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_debug_implementations,
    unused_import_braces,
    unused_qualifications
)]

pub mod config;
pub mod error;
pub mod locator;
pub mod page;
pub mod session;
pub mod step;
pub mod steps;
pub mod suite;
pub mod world;

#[doc(inline)]
pub use self::{
    config::{Credentials, Route, Storefront, SuiteConfig},
    error::{DriverError, LookupError, PageError, SessionError, SuiteError},
    locator::{LoginLocators, Locator},
    page::LoginPage,
    session::{Element, Session, SessionFactory},
    step::{RegistryError, StepRegistry},
    suite::{init_tracing, run},
    world::{ContextError, ScenarioContext, ScenarioWorld, StepError},
};
