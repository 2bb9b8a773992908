//! The download manifest.

use std::path::{Path, PathBuf};

use url::Url;

use crate::config::{ADDITIONAL_FILES, OPTIONAL_MODULE, THREE_BASE_URL, THREE_FILES, THREE_LOCAL_DIR};

/// Placeholder written when the optional module is missing upstream, so
/// imports of it still resolve.
pub const STUB_MODULE: &str = "// Empty module - functionality not required\nexport {};";

/// A remote file and where it lands locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub url: Url,
    /// Destination, relative to the fetch root.
    pub dest: PathBuf,
    /// A 404 for this asset is answered with [`STUB_MODULE`].
    pub optional: bool,
}

impl AssetDescriptor {
    pub fn new(url: &str, dest: impl Into<PathBuf>) -> Result<Self, url::ParseError> {
        let dest = dest.into();
        let optional = is_optional_module(&dest);
        Ok(Self {
            url: Url::parse(url)?,
            dest,
            optional,
        })
    }
}

fn is_optional_module(dest: &Path) -> bool {
    dest.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n == OPTIONAL_MODULE)
}

/// Build the ordered manifest: three.js files first, then the extras.
pub fn default_manifest() -> Result<Vec<AssetDescriptor>, url::ParseError> {
    let three = THREE_FILES.iter().map(|file| {
        let url = format!("{}{}", THREE_BASE_URL, file);
        let dest = Path::new(THREE_LOCAL_DIR).join(file.trim_start_matches('/'));
        AssetDescriptor::new(&url, dest)
    });

    let extra = ADDITIONAL_FILES
        .iter()
        .map(|(url, dest)| AssetDescriptor::new(url, *dest));

    three.chain(extra).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest_order_and_paths() {
        let manifest = default_manifest().unwrap();
        let dests: Vec<_> = manifest.iter().map(|a| a.dest.clone()).collect();

        assert_eq!(
            dests,
            vec![
                PathBuf::from("js/three/build/three.module.js"),
                PathBuf::from("js/three/examples/jsm/controls/OrbitControls.js"),
                PathBuf::from("js/three/examples/jsm/loaders/GLTFLoader.js"),
                PathBuf::from("js/three/examples/jsm/utils/BufferGeometryUtils.js"),
                PathBuf::from("js/papaparse.mjs"),
            ]
        );
    }

    #[test]
    fn test_default_manifest_urls() {
        let manifest = default_manifest().unwrap();
        assert_eq!(
            manifest[0].url.as_str(),
            "https://unpkg.com/three@0.162.0/build/three.module.js"
        );
        assert_eq!(
            manifest[4].url.as_str(),
            "https://unpkg.com/papaparse@5.4.1/papaparse.min.js"
        );
    }

    #[test]
    fn test_only_buffer_geometry_utils_is_optional() {
        let manifest = default_manifest().unwrap();
        let optional: Vec<_> = manifest.iter().filter(|a| a.optional).collect();
        assert_eq!(optional.len(), 1);
        assert!(optional[0].dest.ends_with("BufferGeometryUtils.js"));
    }

    #[test]
    fn test_descriptor_rejects_bad_url() {
        assert!(AssetDescriptor::new("not a url", "js/x.js").is_err());
    }

    #[test]
    fn test_stub_is_an_empty_es_module() {
        assert!(STUB_MODULE.trim_end().ends_with("export {};"));
    }
}
