use std::fs;

use tempfile::TempDir;

use hcd_cli::session::{OptionOverrides, Session};
use hcd_model::KeywordCase;

fn data_dir(manifest: &str) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("home.csv"),
        "名稱,地址\n甲診所,台北市大安區復興南路一段1號\n乙診所,台北市復興南路一段2號\n",
    )
    .expect("write csv");
    fs::write(dir.path().join("directory.toml"), manifest).expect("write manifest");
    dir
}

const MANIFEST: &str = r#"
[[sources]]
path = "home.csv"
category = "home-care"

[search]
page_size = 10
keyword_case = "insensitive"
road_fallback = false
"#;

#[test]
fn manifest_options_apply_without_flags() {
    let dir = data_dir(MANIFEST);
    let session = Session::open(dir.path(), &OptionOverrides::default()).expect("open");

    assert_eq!(session.options.page_size, 10);
    assert_eq!(session.options.keyword_case, KeywordCase::Insensitive);
    assert_eq!(session.dataset.len(), 2);
    // Road fallback disabled in the manifest.
    assert!(session.dataset.records()[1].sub_region.is_other());
    assert!(session.manifest.is_some());
}

#[test]
fn flags_take_precedence_over_manifest() {
    let dir = data_dir(MANIFEST);
    let overrides = OptionOverrides {
        page_size: Some(3),
        force_district_match: Some(true),
        ..OptionOverrides::default()
    };
    let session = Session::open(dir.path(), &overrides).expect("open");
    assert_eq!(session.options.page_size, 3);
    assert_eq!(session.options.keyword_case, KeywordCase::Insensitive);
    assert!(session.options.force_district_match);
}

#[test]
fn zero_page_size_is_rejected() {
    let dir = data_dir(MANIFEST);
    let overrides = OptionOverrides {
        page_size: Some(0),
        ..OptionOverrides::default()
    };
    let error = Session::open(dir.path(), &overrides).expect_err("invalid page size");
    assert!(format!("{error:#}").contains("invalid search options"));
}
