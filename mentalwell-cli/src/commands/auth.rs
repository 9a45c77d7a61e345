//! Account commands: login, signup, logout.
//!
//! Anything not supplied as a flag is prompted for interactively.

use anyhow::{Result, bail};
use clap::Args;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use mentalwell_core::{SessionStore, SignupForm};
use tracing::debug;

use super::build_client;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: Option<String>,

    /// Backend base URL, overriding config and environment
    #[arg(long)]
    pub api_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Account email
    #[arg(long)]
    pub email: Option<String>,

    /// Username shown in the app
    #[arg(long)]
    pub username: Option<String>,

    /// Full name
    #[arg(long)]
    pub full_name: Option<String>,

    /// Backend base URL, overriding config and environment
    #[arg(long)]
    pub api_url: Option<String>,
}

fn prompt_text(label: &str, preset: Option<String>) -> Result<String> {
    if let Some(value) = preset {
        return Ok(value);
    }
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact_text()?;
    Ok(value)
}

pub async fn login(args: LoginArgs) -> Result<()> {
    let api = build_client(args.api_url.as_deref())?;

    let email = prompt_text("Email", args.email)?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()?;

    debug!(%email, "logging in");
    api.login(&email, &password).await?;
    println!("Logged in as {email}.");
    Ok(())
}

pub async fn signup(args: SignupArgs) -> Result<()> {
    let api = build_client(args.api_url.as_deref())?;

    let full_name = prompt_text("Full name", args.full_name)?;
    let username = prompt_text("Username", args.username)?;
    let email = prompt_text("Email", args.email)?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()?;
    let confirm_password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Confirm password")
        .interact()?;

    let form = SignupForm {
        username,
        email,
        password,
        confirm_password,
        full_name,
    };
    let request = form.into_request()?;

    debug!(email = %request.email, "registering");
    let email = request.email.clone();
    api.register(&request).await?;
    println!("Account created; logged in as {email}.");
    Ok(())
}

pub fn logout() -> Result<()> {
    let store = SessionStore::open_default()?;
    if !store.is_logged_in() {
        bail!("not logged in");
    }
    store.logout()?;
    println!("Logged out.");
    Ok(())
}
