//! Configuration for the codec.
//!
//! Holds the protocol constants that differ between device generations: the
//! command bytes of each packet kind and whether inbound checksums are
//! enforced. Everything defaults to the standard Soundcore protocol.

use std::{
   env, fs,
   path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
   error::{Error, Result},
   packets::protocol::CommandTable,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CodecConfig {
   #[serde(default = "default_verify_checksum")]
   pub verify_checksum: bool,

   #[serde(default)]
   pub commands: CommandTable,
}

const fn default_verify_checksum() -> bool {
   true
}

impl Default for CodecConfig {
   fn default() -> Self {
      Self::STANDARD
   }
}

impl CodecConfig {
   pub const STANDARD: Self = Self {
      verify_checksum: default_verify_checksum(),
      commands: CommandTable::STANDARD,
   };

   /// Loads configuration from the user's config directory, or the standard
   /// protocol constants if there is no config file.
   pub fn load() -> Result<Self> {
      let config_path = Self::config_path()?;

      if config_path.exists() {
         Self::load_from(&config_path)
      } else {
         debug!(
            "No codec config at {}, using standard protocol",
            config_path.display()
         );
         Ok(Self::default())
      }
   }

   pub fn load_from(path: &Path) -> Result<Self> {
      let contents = fs::read_to_string(path)?;
      Self::from_toml_str(&contents)
   }

   pub fn from_toml_str(contents: &str) -> Result<Self> {
      Ok(toml::from_str(contents)?)
   }

   pub fn save_to(&self, path: &Path) -> Result<()> {
      if let Some(parent) = path.parent() {
         fs::create_dir_all(parent)?;
      }

      let contents = toml::to_string_pretty(self)?;
      fs::write(path, contents)?;

      Ok(())
   }

   fn config_path() -> Result<PathBuf> {
      if let Ok(codec_home) = env::var("SOUNDCORE_CODEC_HOME") {
         return Ok(PathBuf::from(codec_home).join("codec.toml"));
      }

      let config_dir = if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
         PathBuf::from(config_home)
      } else if let Some(config_dir) = dirs::config_dir() {
         config_dir
      } else {
         return Err(Error::ConfigDirNotFound);
      };

      Ok(config_dir.join("soundcore-codec").join("codec.toml"))
   }
}
