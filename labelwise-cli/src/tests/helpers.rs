//! Fixture files shared by the CLI unit and behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use labelwise_core::IngredientAnalyst;
use labelwise_core::test_support::CannedAnalyst;
use tempfile::TempDir;

use crate::CliError;
use crate::score::{AnalystBuilder, ScoreConfig};

pub(super) const SPREAD_RESPONSE: &str = r#"{
    "status": 1,
    "product": {
        "code": "3017620422003",
        "product_name": "Hazelnut Spread",
        "lang": "en",
        "ingredients_text": "Water",
        "nutriments": {"salt": 0.1, "sugars": 0},
        "labels_tags": ["en:vegan"],
        "categories_tags": ["en:plant-based-foods", "en:spreads", "en:hazelnut-spreads"]
    }
}"#;

pub(super) const NOT_FOUND_RESPONSE: &str = r#"{"status": 0}"#;

pub(super) const SEARCH_RESPONSE: &str = r#"{
    "products": [
        {
            "code": "1",
            "product_name": "Organic Hazelnut Spread",
            "lang": "en",
            "image_front_url": "https://images.example/1.jpg",
            "nova_group": 1,
            "labels_tags": ["en:organic", "en:vegan"],
            "categories_tags": ["en:spreads", "en:hazelnut-spreads"]
        },
        {
            "code": "2",
            "product_name": "Chocolate Hazelnut Spread",
            "lang": "en",
            "image_front_url": "https://images.example/2.jpg",
            "nutriments": {"nova-group": 4},
            "categories_tags": ["en:spreads", "en:hazelnut-spreads"]
        },
        {
            "code": "3",
            "product_name": "Pate a tartiner",
            "lang": "fr",
            "image_front_url": "https://images.example/3.jpg",
            "nova_group": 1,
            "labels_tags": ["en:vegan"],
            "categories_tags": ["en:hazelnut-spreads"]
        },
        {
            "code": "4",
            "product_name": "Almond Butter",
            "lang": "en",
            "nova_group": 1,
            "labels_tags": ["en:vegan"],
            "categories_tags": ["en:spreads", "en:nut-butters"]
        }
    ]
}"#;

pub(super) const CURATED_ALTERNATIVES: &str = r#"{
    "Hazelnut-Spreads": [
        {"name": "Roasted Hazelnut Butter", "image": "https://images.example/butter.jpg"}
    ],
    "chips": [
        {"name": "Baked Lentil Chips", "image": "https://images.example/lentil.jpg"}
    ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory holding the JSON fixtures for one test.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

/// Hands every `score` run the same canned analyst.
pub(super) struct CannedAnalystBuilder(pub(super) CannedAnalyst);

impl AnalystBuilder for CannedAnalystBuilder {
    fn build(
        &self,
        _config: &ScoreConfig,
    ) -> Result<Option<Box<dyn IngredientAnalyst>>, CliError> {
        Ok(Some(Box::new(self.0.clone())))
    }
}
