use chrono::{DateTime, Local, TimeZone};
use std::fs;
use tallyapp::date_idx::FixedClock;
use tallyapp::store::fs_backend::FsBackend;
use tallyapp::store::record_store::RecordStore;
use tallyapp::store::FileStore;
use tempfile::TempDir;

fn local(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn store_in(dir: &TempDir, now: DateTime<Local>) -> RecordStore<FsBackend, FixedClock> {
    RecordStore::with_clock(FsBackend::new(dir.path().to_path_buf()), FixedClock::new(now))
}

#[test]
fn month_written_to_disk_reads_back() {
    let dir = TempDir::new().unwrap();
    let now = local(2022, 7, 14, 9);
    let mut store = store_in(&dir, now);

    assert!(store.insert_or_create(3.5, "coffee"));

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("20227.json")).unwrap()).unwrap();
    assert_eq!(on_disk["14"][0]["t"], now.timestamp_millis());
    assert_eq!(on_disk["14"][0]["n"], "coffee");

    // A fresh store over the same directory sees the same month.
    let reopened = FileStore::new_fs(dir.path().to_path_buf());
    assert_eq!(
        reopened.get_month_record(Some("20227")),
        store.get_month_record(Some("20227"))
    );
}

#[test]
fn existing_month_file_is_extended() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("20221.json"),
        r#"{ "3": [ { "t": 1641200000000, "v": 1, "n": "" } ] }"#,
    )
    .unwrap();

    let mut store = store_in(&dir, local(2022, 1, 3, 18));
    assert!(store.insert_or_create(2.0, "evening"));

    let month = store.get_month_record(Some("20221")).unwrap();
    assert_eq!(month[&3].len(), 2);
    assert_eq!(month[&3][0].timestamp, 1_641_200_000_000);
    assert_eq!(month[&3][1].note, "evening");
}

#[test]
fn year_and_all_records_over_files() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir, local(2022, 2, 1, 9));
    assert!(store.insert_or_create(1.0, ""));
    store.clock().set(local(2022, 10, 5, 9));
    assert!(store.insert_or_create(2.0, ""));

    let year = store.get_year_record(Some("2022"));
    assert!(year[1].is_some());
    assert!(year[9].is_some());
    assert_eq!(year.iter().filter(|m| m.is_some()).count(), 2);

    let all = store.get_all_records();
    assert_eq!(all.len(), 2);
    assert_eq!((all[0].month.as_str(), all[0].date), ("2", 1));
    assert_eq!((all[1].month.as_str(), all[1].date), ("10", 5));
}

#[test]
fn clears_remove_files() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir, local(2022, 7, 14, 9));
    assert!(store.insert_or_create(1.0, ""));
    store.clock().set(local(2023, 7, 14, 9));
    assert!(store.insert_or_create(1.0, ""));

    assert!(store.clear_year_records(&["2022"]));
    assert!(!dir.path().join("20227.json").exists());
    assert!(dir.path().join("20237.json").exists());

    assert!(store.clear_all_records());
    assert!(store.get_all_records().is_empty());
}

#[test]
fn unreadable_directory_yields_no_records() {
    let dir = TempDir::new().unwrap();
    let not_a_dir = dir.path().join("file");
    fs::write(&not_a_dir, "").unwrap();

    let mut store = RecordStore::with_clock(
        FsBackend::new(not_a_dir),
        FixedClock::new(local(2022, 7, 14, 9)),
    );
    assert!(store.get_all_records().is_empty());
    assert_eq!(store.get_month_record(None), None);
    assert!(!store.insert_or_create(1.0, ""));
}
