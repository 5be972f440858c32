use anyhow::{anyhow, Context};
use keyring::Entry;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output;

const SERVICE_NAME: &str = "protter";

/// Where the password was found
#[derive(Debug, Clone, PartialEq)]
pub enum PasswordSource {
    Argument,
    Keychain,
}

impl std::fmt::Display for PasswordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordSource::Argument => write!(f, "--prott-password / PROTT_PASSWORD"),
            PasswordSource::Keychain => write!(f, "system keychain"),
        }
    }
}

/// Prott sign-in credentials
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub source: PasswordSource,
}

/// Resolve the account email: flag or environment first, then config file
pub fn resolve_email(flag: Option<String>, config: &Config) -> Result<String> {
    flag.filter(|e| !e.is_empty())
        .or_else(|| config.email.clone().filter(|e| !e.is_empty()))
        .ok_or_else(|| {
            Error::Argument(
                "no Prott email given. Use --prott-email or set PROTT_EMAIL".to_string(),
            )
        })
}

/// Resolve credentials: password from flag or environment, then keychain
pub fn resolve_credentials(
    email_flag: Option<String>,
    password_flag: Option<String>,
    config: &Config,
) -> Result<Credentials> {
    let email = resolve_email(email_flag, config)?;

    if let Some(password) = password_flag.filter(|p| !p.is_empty()) {
        return Ok(Credentials {
            email,
            password,
            source: PasswordSource::Argument,
        });
    }

    match get_password_from_keychain(&email) {
        Ok(password) => Ok(Credentials {
            email,
            password,
            source: PasswordSource::Keychain,
        }),
        Err(e) => {
            output::print_verbose(&format!("Note: Keychain lookup failed ({}).", e));
            Err(Error::Argument(
                "no Prott password given. Use --prott-password or set PROTT_PASSWORD".to_string(),
            ))
        }
    }
}

/// Get the stored password of `email` from the keychain
pub fn get_password_from_keychain(email: &str) -> anyhow::Result<String> {
    let entry = Entry::new(SERVICE_NAME, email)
        .context("Failed to create keychain entry - keychain may not be available")?;

    entry.get_password().map_err(|e| match e {
        keyring::Error::NoEntry => anyhow!("No password stored in keychain for {}", email),
        keyring::Error::PlatformFailure(ref msg) => anyhow!("Keychain platform error: {}", msg),
        keyring::Error::NoStorageAccess(ref msg) => anyhow!("Keychain access denied: {}", msg),
        _ => anyhow!("Keychain error: {}", e),
    })
}

/// Store the password of `email` in the keychain
pub fn store_password_in_keychain(email: &str, password: &str) -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE_NAME, email).context("Failed to create keychain entry")?;

    entry.set_password(password).map_err(|e| match e {
        keyring::Error::NoStorageAccess(ref msg) => {
            anyhow!("Keychain access denied: {}. Check your system keychain settings.", msg)
        }
        _ => anyhow!("Failed to store password in keychain: {}", e),
    })
}
