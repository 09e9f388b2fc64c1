//! View counter configuration.
//!
//! The backend is fixed for the lifetime of the process; it is picked once at
//! startup from `LINKBIO_VIEWS_BACKEND` and never switched afterwards.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{self, env};
use crate::env_config::parse_with_default;
use crate::error::CoreError;

/// Which durable store backs the view counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// `{ "views": n }` record on the local filesystem.
    File,
    /// Namespaced counter on a remote counting service.
    Remote,
}

impl BackendKind {
    /// Fallback policy used when none is configured explicitly.
    #[must_use]
    pub const fn default_fallback(self) -> FallbackPolicy {
        match self {
            Self::File => FallbackPolicy::LastKnown,
            Self::Remote => FallbackPolicy::Constant,
        }
    }
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            Self::File => write!(f, "file"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "remote" => Ok(Self::Remote),
            _ => Err(CoreError::InvalidConfig { key: env::VIEWS_BACKEND, value: s.to_owned() }),
        }
    }
}

/// What the counter reports when the durable backend fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Report the in-memory estimate; a failed write moves the estimate forward.
    LastKnown,
    /// Report 0 on a failed read and 1 on a failed increment.
    Constant,
}

impl Display for FallbackPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            Self::LastKnown => write!(f, "last-known"),
            Self::Constant => write!(f, "constant"),
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last-known" | "last_known" => Ok(Self::LastKnown),
            "constant" => Ok(Self::Constant),
            _ => Err(CoreError::InvalidConfig { key: env::VIEWS_FALLBACK, value: s.to_owned() }),
        }
    }
}

/// Everything needed to build the view counter backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewsConfig {
    pub backend: BackendKind,
    /// Location of the durable record. Relative paths resolve against the working directory.
    pub file_path: PathBuf,
    pub counter_url: String,
    /// Stable application identifier used to namespace the remote counter.
    pub app_id: String,
    pub fallback: FallbackPolicy,
}

impl ViewsConfig {
    /// File-backed config with the default fallback policy.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: BackendKind::File,
            file_path: path.into(),
            counter_url: constants::DEFAULT_COUNTER_URL.to_owned(),
            app_id: String::new(),
            fallback: BackendKind::File.default_fallback(),
        }
    }

    /// Remote-backed config with the default fallback policy.
    #[must_use]
    pub fn remote(counter_url: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            backend: BackendKind::Remote,
            file_path: PathBuf::from(constants::DEFAULT_VIEWS_FILE),
            counter_url: counter_url.into(),
            app_id: app_id.into(),
            fallback: BackendKind::Remote.default_fallback(),
        }
    }

    #[must_use]
    pub const fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Reads the config from the process environment.
    #[must_use]
    pub fn from_env(default_app_id: &str) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), default_app_id)
    }

    /// Reads the config through `lookup`, which maps variable names to values.
    ///
    /// Invalid values are logged and replaced with their defaults.
    pub fn from_lookup<F>(lookup: F, default_app_id: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend =
            parse_with_default(env::VIEWS_BACKEND, lookup(env::VIEWS_BACKEND), BackendKind::File);
        let fallback = parse_with_default(
            env::VIEWS_FALLBACK,
            lookup(env::VIEWS_FALLBACK),
            backend.default_fallback(),
        );
        let file_path = non_empty(env::VIEWS_PATH)
            .map_or_else(|| PathBuf::from(constants::DEFAULT_VIEWS_FILE), PathBuf::from);
        let counter_url = non_empty(env::COUNTER_URL)
            .unwrap_or_else(|| constants::DEFAULT_COUNTER_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let app_id = non_empty(env::APP_ID).unwrap_or_else(|| default_app_id.to_owned());

        Self { backend, file_path, counter_url, app_id, fallback }
    }

    /// Namespace of the remote counter: fixed prefix plus application id.
    #[must_use]
    pub fn namespace(&self) -> String {
        format!("{}-{}", constants::COUNTER_NAMESPACE_PREFIX, self.app_id)
    }
}
