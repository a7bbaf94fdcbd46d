//! Configuration for the API clients, basically credentials for the sources
//! that accept them.
//!
//! The file is HCL, versioned for safety, looked up in the platform config
//! directory unless an explicit path is given.  No file at all is fine: every
//! source then runs anonymous.
//!

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::fs;

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::makepath;

/// Config filename
const CONFIG: &str = "config.hcl";
/// Main name for the directory base
const TAG: &str = "skywatch";
/// Current version
pub const CVERSION: usize = 1;

/// Describe the possible ways to authenticate oneself
///
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Auth {
    /// Nothing special, no auth
    #[default]
    Anon,
    /// Using plain login/password
    Login { username: String, password: String },
}

impl Display for Auth {
    /// Obfuscate the password
    ///
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let auth = match self.clone() {
            Auth::Login { username, .. } => Auth::Login {
                username,
                password: "HIDDEN".to_string(),
            },
            _ => Auth::Anon,
        };
        write!(f, "{:?}", auth)
    }
}

/// Configuration for the CLI tool, supposed to include parameters and most importantly
/// credentials for the various sources.
///
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Version number for safety
    pub version: usize,
    /// Each site credentials
    pub site: BTreeMap<String, Auth>,
}

impl Config {
    /// Returns the path of the default config file
    ///
    pub fn default_file() -> Option<PathBuf> {
        let base = BaseDirs::new()?;

        #[cfg(unix)]
        let path: PathBuf = makepath!(base.home_dir(), ".config", TAG, CONFIG);

        #[cfg(windows)]
        let path: PathBuf = makepath!(base.data_local_dir(), TAG, CONFIG);

        Some(path)
    }

    /// Load the config file, or an empty anonymous config when none exists.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (based on $HOME or $LOCALAPPDATA)
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<PathBuf>) -> Result<Config> {
        trace!("config::load");

        let fname = match fname {
            Some(fname) => fname,
            None => match Self::default_file() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, running anonymous");
                    return Ok(Config {
                        version: CVERSION,
                        ..Config::default()
                    });
                }
            },
        };

        let data = fs::read_to_string(&fname)?;
        let cfg = Self::from_str(&data)?;

        trace!("loaded config from {fname:?}");
        Ok(cfg)
    }

    /// Parse and check the version.
    ///
    fn from_str(data: &str) -> Result<Config> {
        let cfg: Config = hcl::from_str(data)?;
        if cfg.version != CVERSION {
            return Err(eyre!("Bad config file version, aborting…"));
        }
        Ok(cfg)
    }

    /// Credentials for a given site, anonymous when not configured.
    ///
    pub fn auth_for(&self, site: &str) -> Auth {
        self.site.get(site).cloned().unwrap_or_default()
    }
}
