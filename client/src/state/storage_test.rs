use super::*;

#[test]
fn memory_storage_round_trips_and_removes() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("token"), None);
    storage.set("token", "abc");
    assert_eq!(storage.get("token").as_deref(), Some("abc"));
    storage.remove("token");
    assert_eq!(storage.get("token"), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("user", "{}");
    assert_eq!(b.get("user").as_deref(), Some("{}"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_off_browser() {
    let storage = BrowserStorage;
    storage.set("token", "abc");
    assert_eq!(storage.get("token"), None);
    storage.remove("token");
}
