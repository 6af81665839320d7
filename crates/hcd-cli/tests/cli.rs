//! End-to-end runs of the `hcd` binary against a temporary data directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const HOME_CARE_CSV: &str = "醫事機構代碼,醫事機構名稱,醫事機構地址,醫事機構電話,整合團隊名稱
0101,臺北市立聯合醫院,臺北市大安區復興南路一段1號,02-27093600,大安整合團隊
0102,健康診所,台北市信義區松仁路2號,02-27200000,
0103,復興診所,台北市復興南路一段9號,02-27010000,
0501,苓雅診所,高雄市苓雅區四維三路3號,07-3300000,
";

const HOSPICE_CSV: &str = "名稱,地址,電話,團隊,代碼
仁愛護理之家,新北市板橋區文化路一段5號,02-29600000,,3101
";

const SERVICES_CSV: &str = "縣市,醫事機構代碼,醫事機構名稱,電話,居家醫療,居家護理,安寧療護
台北市,0101,臺北市立聯合醫院,02-27093600,1,0,1
";

fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let write = |name: &str, contents: &str| {
        fs::write(dir.path().join(name), contents).expect("write fixture");
    };
    write("A21030000I-D2000H-001.csv", HOME_CARE_CSV);
    write("A21030000I-D2000I-001.csv", HOSPICE_CSV);
    write("services.csv", SERVICES_CSV);
    dir
}

fn hcd(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hcd"))
        .arg("--data-dir")
        .arg(dir)
        .arg("--color")
        .arg("never")
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("HCD_DATA_DIR")
        .output()
        .expect("run hcd")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn search_json_reports_totals_and_rows() {
    let dir = data_dir();
    let output = hcd(
        dir.path(),
        &["search", "--region", "台北市", "--format", "json"],
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(json["total"], 3);
    assert_eq!(json["page_index"], 1);
    assert_eq!(json["page_count"], 1);
    assert_eq!(json["rows"][0]["name"], "臺北市立聯合醫院");
    assert_eq!(json["rows"][0]["address"], "台北市大安區復興南路一段1號");
    assert_eq!(json["rows"][0]["region"], "台北市");
    assert_eq!(json["rows"][0]["sub_region"], "大安區");
    // District filled in from the shared road.
    assert_eq!(json["rows"][2]["sub_region"], "大安區");
}

#[test]
fn search_pages_and_categories() {
    let dir = data_dir();
    let output = hcd(
        dir.path(),
        &[
            "search",
            "--category",
            "clinic",
            "--page-size",
            "2",
            "--page",
            "2",
            "--format",
            "json",
        ],
    );
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(json["total"], 3);
    assert_eq!(json["page_count"], 2);
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["rows"][0]["name"], "苓雅診所");
}

#[test]
fn search_table_prints_status_line() {
    let dir = data_dir();
    let output = hcd(dir.path(), &["search", "--keyword", "板橋"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("共找到 1 筆資料"));
    assert!(text.contains("仁愛護理之家"));
    assert!(text.contains("第 1 / 1 頁"));
    assert!(text.contains("來源"));
    assert!(text.contains("安寧照護／護理之家"));
}

#[test]
fn search_without_matches_says_so() {
    let dir = data_dir();
    let output = hcd(dir.path(), &["search", "--keyword", "不存在的機構"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("共找到 0 筆資料"));
    assert!(text.contains("查無資料"));
    assert!(!text.contains("第 "));
}

#[test]
fn suggest_lists_unique_names() {
    let dir = data_dir();
    let output = hcd(dir.path(), &["suggest", "診所", "--limit", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "健康診所\n復興診所\n");
}

#[test]
fn show_includes_service_flags() {
    let dir = data_dir();
    let output = hcd(dir.path(), &["show", "聯合醫院"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("臺北市立聯合醫院"));
    assert!(text.contains("安寧療護"));
    assert!(text.contains("https://www.google.com/maps/search/?api=1&query=%E5%8F%B0"));
}

#[test]
fn show_unknown_name_fails() {
    let dir = data_dir();
    let output = hcd(dir.path(), &["show", "不存在的機構"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}

#[test]
fn missing_data_dir_fails() {
    let dir = TempDir::new().expect("temp dir");
    let output = hcd(&dir.path().join("absent"), &["regions"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn sources_lists_each_file() {
    let dir = data_dir();
    let output = hcd(dir.path(), &["sources"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("A21030000I-D2000H-001.csv"));
    assert!(text.contains("services.csv"));
}
