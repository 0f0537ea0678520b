// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step handlers bound to the phrases of the feature files.

pub mod login;

use std::future::Future;

use futures::{future::LocalBoxFuture, FutureExt as _};

use crate::world::StepError;

/// Boxes a fallible step body, turning its error into a step failure.
///
/// The runner only knows panicking steps as failed ones, so the error's
/// display text becomes the failure message.
pub(crate) fn settle<'a>(
    body: impl Future<Output = Result<(), StepError>> + 'a,
) -> LocalBoxFuture<'a, ()> {
    async move {
        if let Err(e) = body.await {
            panic!("{e}");
        }
    }
    .boxed_local()
}

/// Returns the `index`th captured group of a matched phrase, the whole match
/// being the 0th one.
///
/// Returns an empty string for a group that didn't participate in the match.
pub(crate) fn capture(
    matches: &[(Option<String>, String)],
    index: usize,
) -> &str {
    matches.get(index).map_or("", |(_, value)| value.as_str())
}
