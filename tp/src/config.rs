use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::highlight;

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
   #[serde(default)]
   pub highlight: highlight::Options,
}

impl Config {
   /// Load from an explicitly-requested file, which must exist, or else from the
   /// default location, which may not.
   pub fn load(explicit: Option<&Path>) -> Result<Config, Error> {
      match explicit {
         Some(path) => Config::from_file(path),
         None => match default_path() {
            Some(path) if path.exists() => Config::from_file(&path),
            _ => {
               debug!("no config file; using defaults");
               Ok(Config::default())
            }
         },
      }
   }

   pub fn from_file(path: &Path) -> Result<Config, Error> {
      debug!("config path: {}", path.display());

      let data = std::fs::read_to_string(path).map_err(|source| Error::Read {
         path: path.to_owned(),
         source,
      })?;

      Config::parse(&data).map_err(|source| Error::Parse {
         path: path.to_owned(),
         source,
      })
   }

   pub fn parse(src: &str) -> Result<Config, serde_yaml::Error> {
      // An empty document is not an empty mapping as far as YAML is concerned.
      if src.trim().is_empty() {
         return Ok(Config::default());
      }

      serde_yaml::from_str(src)
   }
}

/// `~/.config/tp/config.yaml`
pub fn default_path() -> Option<PathBuf> {
   dirs::home_dir().map(|mut path| {
      path.extend([".config", "tp", "config.yaml"]);
      path
   })
}

#[derive(Error, Debug)]
pub enum Error {
   #[error("could not read '{path}'")]
   Read {
      path: PathBuf,
      source: std::io::Error,
   },

   #[error("could not parse '{path}'")]
   Parse {
      path: PathBuf,
      source: serde_yaml::Error,
   },
}
