// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Steps of the login feature.

use cucumber::step::Context;
use futures::future::LocalBoxFuture;
use tracing::debug;

use crate::{
    config::Route,
    step::{RegistryError, StepRegistry},
    world::{ScenarioWorld, StepError},
};

use super::{capture, settle};

pub const ON_LOGIN_PAGE: &str = r"^I am on the OpenCart login page$";
pub const VALID_CREDENTIALS: &str =
    r"^I have entered a valid username and password$";
pub const INVALID_CREDENTIALS: &str =
    r#"^I have entered an invalid "([^"]*)" and "([^"]*)"$"#;
pub const CLICK_LOGIN: &str = r"^I click on the login button$";
pub const LOG_IN_WITH: &str = r#"^I log in with "([^"]*)" and "([^"]*)"$"#;
pub const CLICK_FORGOTTEN_PASSWORD: &str =
    r#"^I click on the "Forgotten Password" link$"#;
pub const LOGGED_IN: &str = r"^I should be logged in successfully$";
pub const ERROR_MESSAGE: &str =
    r#"^I should see an error message indicating "([^"]*)"$"#;
pub const REDIRECTED_TO_RESET: &str =
    r"^I should be redirected to the password reset page$";
pub const FORGOTTEN_PASSWORD_SHOWN: &str =
    r#"^I should see the "Forgotten Password" link$"#;

/// Builds the [`StepRegistry`] of the login feature.
///
/// # Errors
///
/// If any phrase is bound twice or is not a valid pattern.
pub fn registry<W: ScenarioWorld>() -> Result<StepRegistry<W>, RegistryError> {
    StepRegistry::<W>::new()
        .given(
            ON_LOGIN_PAGE,
            "i_am_on_the_login_page",
            i_am_on_the_login_page::<W>,
        )?
        .given(
            VALID_CREDENTIALS,
            "entered_valid_credentials",
            entered_valid_credentials::<W>,
        )?
        .given(
            INVALID_CREDENTIALS,
            "entered_invalid_credentials",
            entered_invalid_credentials::<W>,
        )?
        .when(
            CLICK_LOGIN,
            "click_login_button",
            click_login_button::<W>,
        )?
        .when(
            LOG_IN_WITH,
            "log_in_with",
            log_in_with::<W>,
        )?
        .when(
            CLICK_FORGOTTEN_PASSWORD,
            "click_forgotten_password",
            click_forgotten_password::<W>,
        )?
        .then(
            LOGGED_IN,
            "logged_in_successfully",
            logged_in_successfully::<W>,
        )?
        .then(
            ERROR_MESSAGE,
            "error_message_shown",
            error_message_shown::<W>,
        )?
        .then(
            REDIRECTED_TO_RESET,
            "redirected_to_reset",
            redirected_to_reset::<W>,
        )?
        .then(
            FORGOTTEN_PASSWORD_SHOWN,
            "forgotten_password_shown",
            forgotten_password_shown::<W>,
        )
}

fn i_am_on_the_login_page<W: ScenarioWorld>(
    world: &mut W,
    _: Context,
) -> LocalBoxFuture<'_, ()> {
    settle(async move {
        _ = world.scenario().open_login_page().await?;
        Ok::<_, StepError>(())
    })
}

fn entered_valid_credentials<W: ScenarioWorld>(
    world: &mut W,
    _: Context,
) -> LocalBoxFuture<'_, ()> {
    settle(async move {
        let scenario = world.scenario();
        let account = scenario.storefront().account();
        let page = scenario.login_page()?;
        page.enter_email(&account.email).await?;
        page.enter_password(&account.password).await?;
        Ok::<_, StepError>(())
    })
}

fn entered_invalid_credentials<W: ScenarioWorld>(
    world: &mut W,
    ctx: Context,
) -> LocalBoxFuture<'_, ()> {
    let email = capture(&ctx.matches, 1).to_owned();
    let password = capture(&ctx.matches, 2).to_owned();
    settle(async move {
        let page = world.scenario().login_page()?;
        page.enter_email(&email).await?;
        page.enter_password(&password).await?;
        Ok::<_, StepError>(())
    })
}

fn click_login_button<W: ScenarioWorld>(
    world: &mut W,
    _: Context,
) -> LocalBoxFuture<'_, ()> {
    settle(async move {
        world.scenario().login_page()?.click_login_button().await?;
        Ok::<_, StepError>(())
    })
}

fn log_in_with<W: ScenarioWorld>(
    world: &mut W,
    ctx: Context,
) -> LocalBoxFuture<'_, ()> {
    let email = capture(&ctx.matches, 1).to_owned();
    let password = capture(&ctx.matches, 2).to_owned();
    settle(async move {
        world.scenario().login_page()?.login(&email, &password).await?;
        Ok::<_, StepError>(())
    })
}

fn click_forgotten_password<W: ScenarioWorld>(
    world: &mut W,
    _: Context,
) -> LocalBoxFuture<'_, ()> {
    settle(async move {
        world
            .scenario()
            .login_page()?
            .click_forgotten_password_link()
            .await?;
        Ok::<_, StepError>(())
    })
}

fn logged_in_successfully<W: ScenarioWorld>(
    world: &mut W,
    _: Context,
) -> LocalBoxFuture<'_, ()> {
    settle(async move {
        let shown =
            world.scenario().login_page()?.is_logout_link_displayed().await?;
        assert!(shown, "\"Logout\" link is on the page, but hidden");
        Ok::<_, StepError>(())
    })
}

fn error_message_shown<W: ScenarioWorld>(
    world: &mut W,
    ctx: Context,
) -> LocalBoxFuture<'_, ()> {
    let expected = capture(&ctx.matches, 1).to_owned();
    settle(async move {
        let page = world.scenario().login_page()?;
        assert!(
            page.is_error_banner_displayed().await?,
            "error banner is on the page, but hidden",
        );
        let text = page.error_banner_text().await?;
        debug!(%text, %expected, "error banner shown");
        assert!(
            text.contains(&expected),
            "error banner says `{text}`, expected it to mention `{expected}`",
        );
        Ok::<_, StepError>(())
    })
}

fn redirected_to_reset<W: ScenarioWorld>(
    world: &mut W,
    _: Context,
) -> LocalBoxFuture<'_, ()> {
    settle(async move {
        let url = world.scenario().login_page()?.current_url().await?;
        assert!(
            url.as_str().contains(Route::ForgottenPassword.as_str()),
            "expected password reset page, but browser is at {url}",
        );
        Ok::<_, StepError>(())
    })
}

fn forgotten_password_shown<W: ScenarioWorld>(
    world: &mut W,
    _: Context,
) -> LocalBoxFuture<'_, ()> {
    settle(async move {
        let shown = world
            .scenario()
            .login_page()?
            .is_forgotten_password_link_displayed()
            .await?;
        assert!(
            shown,
            "\"Forgotten Password\" link is on the page, but hidden",
        );
        Ok::<_, StepError>(())
    })
}
