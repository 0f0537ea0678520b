// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Wiring of the step bindings, hooks and report writers into a
//! [`Cucumber`] run.

use std::{fmt::Debug, io, path::Path, rc::Rc};

use cucumber::{
    cli,
    writer::{self, Coloring},
    Cucumber, World, WriterExt as _,
};
use futures::FutureExt as _;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{Route, SuiteConfig},
    error::SuiteError,
    session::SessionFactory,
    steps,
    world::ScenarioWorld,
};

/// Number of scenarios, hence browser sessions, run concurrently unless
/// overridden with `--concurrency`.
pub const DEFAULT_PARALLEL_SESSIONS: usize = 4;

/// Installs a [`tracing`] subscriber filtered by the `RUST_LOG` environment
/// variable. Does nothing if one is installed already.
pub fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Runs the feature files found at `features` with the login step bindings.
///
/// Options are parsed from the command line, [`SuiteConfig`] being appended
/// to the runner's own ones. Every scenario opens its own browser session
/// through the [`SessionFactory`] made by `connect`, and quits it once
/// finished, whatever the outcome.
///
/// Exits the process through a panic if any scenario fails, like
/// [`Cucumber::run_and_exit()`] does.
///
/// # Errors
///
/// If the step bindings are inconsistent, the storefront URL is invalid or
/// the report file cannot be created. Nothing is run in that case.
pub async fn run<W, F>(
    features: impl AsRef<Path>,
    connect: impl FnOnce(&SuiteConfig) -> F,
) -> Result<(), SuiteError>
where
    W: ScenarioWorld<Session = F::Session> + World + Debug,
    F: SessionFactory,
{
    let steps = steps::login::registry::<W>()?;
    let opts = cli::Opts::<_, _, _, SuiteConfig>::parsed();
    let storefront = Rc::new(opts.custom.storefront()?);
    let report = opts.custom.create_json_report()?;
    let factory = Rc::new(connect(&opts.custom));
    info!(
        login = %storefront.url(Route::Login),
        report = %opts.custom.report_dir.display(),
        "running login suite",
    );

    Cucumber::<W, _, _, _, _>::new()
        .steps(steps.into_collection())
        .max_concurrent_scenarios(DEFAULT_PARALLEL_SESSIONS)
        .before(move |_, _, scenario, world| {
            let factory = Rc::clone(&factory);
            let storefront = Rc::clone(&storefront);
            async move {
                info!(scenario = %scenario.name, "opening browser session");
                if let Err(e) =
                    world.scenario().setup(&*factory, &storefront).await
                {
                    error!(scenario = %scenario.name, "{e}");
                    panic!("{e}");
                }
            }
            .boxed_local()
        })
        .after(|_, _, scenario, _, world| {
            async move {
                let Some(world) = world else { return };
                match world.scenario().teardown().await {
                    Ok(quit) => {
                        info!(
                            scenario = %scenario.name,
                            quit,
                            "scenario finished",
                        );
                    }
                    Err(e) => {
                        error!(scenario = %scenario.name, "{e}");
                        panic!("failed to quit browser session: {e}");
                    }
                }
            }
            .boxed_local()
        })
        .with_writer(
            writer::Basic::raw(io::stdout(), Coloring::Auto, 0)
                .summarized()
                .tee::<W, _>(writer::Json::for_tee(report))
                .normalized(),
        )
        .fail_on_skipped()
        .with_cli(opts)
        .run_and_exit(features)
        .await;

    Ok(())
}
