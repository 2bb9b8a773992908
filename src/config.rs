//! Compiled-in configuration.
//!
//! Nothing here is read from the environment or a config file. The settings
//! structs exist so tests can point the fetcher and server at a temporary
//! root; the binary always uses their `Default` values.

use std::path::PathBuf;
use std::time::Duration;

macro_rules! three_version {
    () => {
        "0.162.0"
    };
}

/// Pinned three.js release.
pub const THREE_VERSION: &str = three_version!();

/// CDN base for the pinned three.js release.
pub const THREE_BASE_URL: &str = concat!("https://unpkg.com/three@", three_version!());

/// three.js files to vendor, relative to [`THREE_BASE_URL`].
pub const THREE_FILES: &[&str] = &[
    "/build/three.module.js",
    "/examples/jsm/controls/OrbitControls.js",
    "/examples/jsm/loaders/GLTFLoader.js",
    "/examples/jsm/utils/BufferGeometryUtils.js",
];

/// Local directory the three.js files are mirrored into.
pub const THREE_LOCAL_DIR: &str = "js/three";

/// Extra files as (source URL, local path) pairs.
pub const ADDITIONAL_FILES: &[(&str, &str)] = &[(
    "https://unpkg.com/papaparse@5.4.1/papaparse.min.js",
    "js/papaparse.mjs",
)];

/// File name of the module that may be replaced by a stub when the CDN
/// does not have it.
pub const OPTIONAL_MODULE: &str = "BufferGeometryUtils.js";

/// Host the development server binds to.
pub const SERVER_HOST: &str = "localhost";

/// Port the development server binds to.
pub const SERVER_PORT: u16 = 8000;

/// Per-request timeout for CDN downloads.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for the asset fetcher.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Directory destination paths are resolved against.
    pub root: PathBuf,
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Settings for the static server.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory served as `/`.
    pub root: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: SERVER_HOST.to_string(),
            port: SERVER_PORT,
            root: PathBuf::from("."),
        }
    }
}

impl ServerSettings {
    /// Base URL shown in the startup banner.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
