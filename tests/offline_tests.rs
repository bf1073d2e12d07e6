use chrono::NaiveDate;
use yatra::{
    offline::{self, OfflineStore, VALIDITY_DAYS},
    prelude::*,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn table() -> &'static RouteTable {
    RouteTable::builtin()
}

#[test]
fn download_uses_preferred_alternative() {
    let mut store = OfflineStore::new();
    let today = date(2024, 1, 15);
    let route = store
        .download(table(), "hyderabad", "karimnagar", today)
        .unwrap();
    assert_eq!(route.from, "Hyderabad");
    assert_eq!(route.to, "Karimnagar");
    assert_eq!(route.duration.as_minutes(), 175);
    assert_eq!(route.estimated_fare, 105);
    assert_eq!(route.downloaded_at, today);
    assert_eq!(route.expires_at, date(2024, 2, 14));
    assert_eq!(route.days_until_expiry(today), VALIDITY_DAYS as i64);
}

#[test]
fn download_reverse_pair() {
    let mut store = OfflineStore::new();
    let route = store
        .download(table(), "Chintapalli", "Visakhapatnam", date(2024, 3, 1))
        .unwrap();
    assert_eq!(route.from, "Chintapalli");
    assert_eq!(route.duration.as_minutes(), 270);
}

#[test]
fn download_rejects_blank_and_unknown() {
    let mut store = OfflineStore::new();
    let today = date(2024, 1, 15);
    assert!(matches!(
        store.download(table(), "  ", "Karimnagar", today),
        Err(offline::Error::BlankPlace)
    ));
    assert!(matches!(
        store.download(table(), "Nowhere", "Nothing", today),
        Err(offline::Error::RouteNotFound { .. })
    ));
    assert!(store.is_empty());
}

#[test]
fn newest_download_comes_first() {
    let mut store = OfflineStore::new();
    let today = date(2024, 1, 15);
    store.download(table(), "Hyderabad", "Karimnagar", today).unwrap();
    store
        .download(table(), "Rajahmundry", "Maredumilli", today)
        .unwrap();
    assert_eq!(store.routes()[0].from, "Rajahmundry");
    assert_eq!(store.routes()[1].from, "Hyderabad");
}

#[test]
fn download_same_pair_renews() {
    let mut store = OfflineStore::new();
    let first = store
        .download(table(), "Hyderabad", "Karimnagar", date(2024, 1, 1))
        .unwrap()
        .id;
    store
        .download(table(), "Rajahmundry", "Maredumilli", date(2024, 1, 2))
        .unwrap();
    let again = store
        .download(table(), " HYDERABAD ", "Karimnagar", date(2024, 1, 20))
        .unwrap();
    assert_eq!(again.id, first);
    assert_eq!(again.downloaded_at, date(2024, 1, 20));
    assert_eq!(store.len(), 2);
    assert_eq!(store.routes()[0].id, first);
}

#[test]
fn expiry_and_refresh() {
    let mut store = OfflineStore::new();
    let id = store
        .download(table(), "Vijayawada", "Buttayagudem", date(2024, 1, 5))
        .unwrap()
        .id;
    let later = date(2024, 2, 10);
    let route = store.get(id).unwrap();
    assert!(route.is_expired(later));
    assert!(route.days_until_expiry(later) < 0);
    assert_eq!(store.expired(later).len(), 1);
    assert!(!route.is_expired(date(2024, 2, 4)));

    assert!(store.refresh(id, later));
    let route = store.get(id).unwrap();
    assert!(!route.is_expired(later));
    assert_eq!(route.downloaded_at, later);
    assert!(!store.refresh(999, later));
}

#[test]
fn remove_route() {
    let mut store = OfflineStore::new();
    let id = store
        .download(table(), "Hyderabad", "Karimnagar", date(2024, 1, 15))
        .unwrap()
        .id;
    assert!(store.remove(id));
    assert!(!store.remove(id));
    assert!(store.is_empty());
}

#[test]
fn filter_by_place() {
    let mut store = OfflineStore::new();
    let today = date(2024, 1, 15);
    store.download(table(), "Hyderabad", "Karimnagar", today).unwrap();
    store
        .download(table(), "Rajahmundry", "Rampachodavaram", today)
        .unwrap();
    store
        .download(table(), "Maredumilli", "Rajahmundry", today)
        .unwrap();

    assert_eq!(store.filter("RAJAH").len(), 2);
    assert_eq!(store.filter("nagar").len(), 1);
    assert_eq!(store.filter("").len(), 3);
    assert!(store.filter("warangal").is_empty());
}

#[test]
fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("offline.csv");

    let mut store = OfflineStore::new();
    let today = date(2024, 1, 15);
    store.download(table(), "Hyderabad", "Karimnagar", today).unwrap();
    store
        .download(table(), "Visakhapatnam", "Chintapalli", today)
        .unwrap();
    store.save(&path).unwrap();

    let mut loaded = OfflineStore::load(&path).unwrap();
    assert_eq!(loaded.routes(), store.routes());

    // Ids keep counting from the highest stored one
    let id = loaded
        .download(table(), "Rajahmundry", "Maredumilli", today)
        .unwrap()
        .id;
    assert_eq!(id, 3);
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = OfflineStore::load(&dir.path().join("missing.csv"));
    assert!(matches!(result, Err(offline::Error::Io(_))));
}
