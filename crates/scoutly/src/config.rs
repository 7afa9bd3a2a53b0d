//! CLI configuration: a thin layer over `scoutly_config`.
//!
//! Applies `GlobalOpts` flag overrides (--api-url, --token, --timeout,
//! --page-size) on top of the active profile.

use std::time::Duration;

use secrecy::SecretString;

use scoutly_core::ScoutConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use scoutly_config::{
    Config, Profile, config_path, load_config, load_config_or_default, parse_api_url,
    profile_to_scout_config, resolve_token, save_config, store_token,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.active_profile_name(global.profile.as_deref())
}

pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort_unstable();
    names.join(", ")
}

/// Build the session `ScoutConfig` from the config file, the active
/// profile, and CLI overrides.
///
/// Without a matching profile the CLI can still run from `--api-url` and
/// `--token` alone.
pub fn build_scout_config(global: &GlobalOpts) -> Result<(String, ScoutConfig), CliError> {
    let cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);
    let flag_token = global.token.clone().map(SecretString::from);

    let mut scout_config = if let Some(profile) = cfg.profiles.get(&profile_name) {
        let mut profile = profile.clone();
        if let Some(url) = &global.api_url {
            profile.api_url.clone_from(url);
        }
        let token = match flag_token {
            Some(token) => token,
            None => resolve_token(&profile, &profile_name)?,
        };
        profile_to_scout_config(&profile, &cfg.defaults, token)?
    } else if let Some(url) = &global.api_url {
        let token = flag_token.ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.clone(),
        })?;
        profile_to_scout_config(&Profile::new(url.clone()), &cfg.defaults, token)?
    } else if global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available_profiles(&cfg),
        });
    } else {
        return Err(CliError::NoConfig {
            path: config_path().display().to_string(),
        });
    };

    if let Some(secs) = global.timeout {
        scout_config.timeout = Duration::from_secs(secs);
    }
    if let Some(page_size) = global.page_size {
        scout_config.page_size = page_size;
    }

    Ok((profile_name, scout_config))
}
