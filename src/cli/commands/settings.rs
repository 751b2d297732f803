//! Settings commands.

use crate::config;

/// Store the Genius access token in the config file
pub fn cmd_set_token(token: &str) -> anyhow::Result<()> {
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("Access token must not be empty");
    }

    let mut cfg = config::load();
    cfg.credentials.genius_access_token = Some(token.to_string());
    let path = config::save(&cfg)?;
    println!("✓ Access token saved to {}", path.display());
    Ok(())
}
