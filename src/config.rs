const APP_PREFIX: &str = "folio";
const CONFIG: &str = "config.toml";

use crate::{
    error::{Error, Result},
    theme::Theme,
    types::Profile,
};
use log::{debug, warn};
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) profile: Profile,
    pub(crate) initial_theme: Theme,
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    name: Option<String>,
    bio: Option<String>,
    picture: Option<String>,
    skills: Option<Vec<String>>,
    email: Option<String>,
    website: Option<String>,
    dark_mode: Option<bool>,
    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::Config(value.to_string())
    }
}

pub(crate) fn find_config_file() -> Result<Option<PathBuf>> {
    let dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(dirs.find_config_file(CONFIG))
}

impl Config {
    /// Reads the user's config file if there is one, defaults otherwise.
    pub(crate) fn load() -> Result<Config> {
        match find_config_file()? {
            Some(path) => {
                debug!("Reading config from {path:?}");
                let text = fs::read_to_string(&path)?;
                Config::parse(&text)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub(crate) fn parse(text: &str) -> Result<Config> {
        let file: ConfigFile = toml::from_str(text)?;
        for key in file.unknown.keys() {
            warn!("Ignoring unknown config key {key:?}");
        }

        let mut profile = Profile::default();
        if let Some(name) = file.name {
            profile.name = name;
        }
        if let Some(bio) = file.bio {
            profile.bio = bio;
        }
        if let Some(picture) = file.picture {
            profile.picture = picture;
        }
        if let Some(email) = file.email {
            profile.email = email;
        }
        if let Some(website) = file.website {
            profile.website = website;
        }
        if let Some(skills) = file.skills {
            profile.skills = skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        Ok(Config {
            profile,
            initial_theme: file.dark_mode.map(Theme::from).unwrap_or_default(),
        })
    }
}
