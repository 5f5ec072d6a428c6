//! Product lookups backed by a directory of cached API responses.
#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8;
use labelwise_core::{ProductFacts, ProductSource, SourceError, source::validate_barcode};

use crate::{DataError, OffProductResponse, fs::open_utf8_dir};

/// Serves products from `<root>/<barcode>.json` product envelopes.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use labelwise_core::ProductSource;
/// use labelwise_data::JsonDirectorySource;
///
/// let source = JsonDirectorySource::open(Utf8Path::new("cache/products"))
///     .expect("open product cache");
/// let facts = source.product("3017620422003").expect("lookup succeeds");
/// ```
#[derive(Debug)]
pub struct JsonDirectorySource {
    root: Utf8PathBuf,
    dir: fs_utf8::Dir,
}

impl JsonDirectorySource {
    /// Open the directory holding cached product responses.
    ///
    /// # Errors
    /// Returns [`DataError::Open`] when the directory cannot be opened.
    pub fn open(root: &Utf8Path) -> Result<Self, DataError> {
        let dir = open_utf8_dir(root).map_err(|source| DataError::Open {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(Self {
            root: root.to_path_buf(),
            dir,
        })
    }

    /// Directory the source reads from.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn file_name(barcode: &str) -> String {
        format!("{barcode}.json")
    }
}

impl ProductSource for JsonDirectorySource {
    fn product(&self, barcode: &str) -> Result<Option<ProductFacts>, SourceError> {
        validate_barcode(barcode)?;
        let name = Self::file_name(barcode);
        let contents = match self.dir.read_to_string(&name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no cached response for {barcode} in {}", self.root);
                return Ok(None);
            }
            Err(err) => {
                return Err(SourceError::Unavailable {
                    barcode: barcode.to_owned(),
                    message: format!("failed to read {}: {err}", self.root.join(&name)),
                });
            }
        };
        let response: OffProductResponse =
            serde_json::from_str(&contents).map_err(|source| SourceError::Malformed {
                barcode: barcode.to_owned(),
                source: Box::new(source),
            })?;
        Ok(response.into_facts().map(|facts| {
            if facts.barcode.is_some() {
                facts
            } else {
                facts.with_barcode(barcode)
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct Cache {
        _dir: TempDir,
        source: JsonDirectorySource,
    }

    #[fixture]
    fn cache() -> Cache {
        let dir = TempDir::new().expect("create tempdir");
        let write = |name: &str, body: &str| {
            std::fs::write(dir.path().join(name), body).expect("write cached response");
        };
        write(
            "5000159484695.json",
            r#"{"status": 1, "product": {"product_name": "Crisps", "lang": "en"}}"#,
        );
        write("4000000000000.json", r#"{"status": 0}"#);
        write("1111111111111.json", "<html>rate limited</html>");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 tempdir");
        let source = JsonDirectorySource::open(&root).expect("open cache");
        Cache { _dir: dir, source }
    }

    #[rstest]
    fn cached_product_is_returned_with_barcode(cache: Cache) {
        let facts = cache
            .source
            .product("5000159484695")
            .expect("lookup succeeds")
            .expect("product cached");
        assert_eq!(facts.display_name(), Some("Crisps"));
        assert_eq!(facts.barcode.as_deref(), Some("5000159484695"));
    }

    #[rstest]
    #[case("4000000000000")]
    #[case("9999999999999")]
    fn unknown_products_are_none(cache: Cache, #[case] barcode: &str) {
        assert!(cache.source.product(barcode).expect("lookup succeeds").is_none());
    }

    #[rstest]
    fn malformed_cache_entry_is_an_error(cache: Cache) {
        let err = cache
            .source
            .product("1111111111111")
            .expect_err("malformed entry fails");
        assert!(matches!(err, SourceError::Malformed { .. }));
    }

    #[rstest]
    #[case("")]
    #[case("../etc/passwd")]
    fn invalid_barcodes_are_rejected(cache: Cache, #[case] barcode: &str) {
        let err = cache.source.product(barcode).expect_err("invalid barcode");
        assert!(matches!(err, SourceError::InvalidBarcode { .. }));
    }

    #[rstest]
    fn missing_directory_fails_to_open() {
        let dir = TempDir::new().expect("create tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().join("absent")).expect("utf8 path");
        assert!(matches!(
            JsonDirectorySource::open(&root),
            Err(DataError::Open { .. })
        ));
    }
}
