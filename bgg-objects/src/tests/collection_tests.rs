use super::*;
use serde_json::json;

#[test]
fn test_defaults() {
    let item = CollectionBoardGame::from_value(&json!({ "id": 822, "name": "Carcassonne", "stats": {} }))
        .unwrap();
    assert_eq!(item.id(), 822);
    assert_eq!(item.num_plays(), 0);
    assert_eq!(item.last_modified(), None);
    assert_eq!(item.rating(), None);
    assert!(!item.owned());
    assert!(!item.preordered());
    assert!(!item.prev_owned());
    assert!(!item.want());
    assert!(!item.want_to_buy());
    assert!(!item.want_to_play());
    assert!(!item.for_trade());
    assert!(!item.wishlist());
    assert_eq!(item.wishlist_priority(), None);
    assert!(item.version().is_none());
}

#[test]
fn test_user_fields() {
    let item = CollectionBoardGame::from_value(&json!({
        "id": "822",
        "stats": { "usersrated": 100, "ranks": [{ "type": "boardgame", "value": 200 }] },
        "numplays": "12",
        "lastmodified": "2019-03-20 11:03:17",
        "rating": "7.5",
        "own": "1",
        "preordered": 0,
        "prevowned": "0",
        "want": true,
        "wanttobuy": "1",
        "wanttoplay": 1,
        "fortrade": "0",
        "wishlist": "1",
        "wishlistpriority": "3",
    }))
    .unwrap();
    assert_eq!(item.num_plays(), 12);
    assert_eq!(item.last_modified(), Some("2019-03-20 11:03:17"));
    assert_eq!(item.rating(), Some(7.5));
    assert!(item.owned());
    assert!(!item.preordered());
    assert!(!item.prev_owned());
    assert!(item.want());
    assert!(item.want_to_buy());
    assert!(item.want_to_play());
    assert!(!item.for_trade());
    assert!(item.wishlist());
    assert_eq!(item.wishlist_priority(), Some(3));
    assert_eq!(item.users_rated(), Some(100));
    assert_eq!(item.bgg_rank(), Some(200));
}

#[test]
fn test_unrated_is_none() {
    let item =
        CollectionBoardGame::from_value(&json!({ "id": 1, "stats": {}, "rating": "N/A" })).unwrap();
    assert_eq!(item.rating(), None);
}

#[test]
fn test_version_is_first() {
    let item = CollectionBoardGame::from_value(&json!({
        "id": 1,
        "stats": {},
        "versions": [{ "id": 5, "name": "first" }, { "id": 6, "name": "second" }],
    }))
    .unwrap();
    assert_eq!(item.version().map(|v| v.id()), Some(5));
}

#[test]
fn test_requires_stats() {
    let err = CollectionBoardGame::from_value(&json!({ "id": 1 })).unwrap_err();
    assert_eq!(err, InvalidRecordError::missing("stats"));
}

#[test]
fn test_display_and_dump() {
    let item = CollectionBoardGame::from_value(&json!({
        "id": 1,
        "name": "Azul",
        "stats": {},
        "numplays": 4,
    }))
    .unwrap();
    assert_eq!(item.to_string(), "CollectionBoardGame (id: 1)");
    let text = item.dump();
    assert!(text.contains("Azul"));
    assert!(text.lines().any(|l| l.starts_with("number of plays") && l.ends_with(": 4")));
}
