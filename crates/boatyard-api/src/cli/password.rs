//! `boatyard hash-password`: produce a `password_hash` value for config.toml.

use anyhow::Result;
use dialoguer::Password;

use boatyard_core::service::auth::CredentialHasher;
use boatyard_infra::crypto::password::Argon2CredentialHasher;

/// Hash `password` (or a prompted one) and print the PHC string.
pub fn hash_password(password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    println!("{}", hash_password_value(&password)?);
    Ok(())
}

/// Argon2id PHC string for `password`, ready to paste into `[[principals]]`.
pub fn hash_password_value(password: &str) -> Result<String> {
    if password.is_empty() {
        anyhow::bail!("password cannot be empty");
    }
    Ok(Argon2CredentialHasher::new().hash_password(password)?)
}
