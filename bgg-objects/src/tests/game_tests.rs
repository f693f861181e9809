use super::*;
use chrono::NaiveDate;
use serde_json::json;

fn minimal() -> Value {
    json!({ "id": 13, "name": "Catan", "stats": {} })
}

fn with(mut base: Value, key: &str, value: Value) -> Value {
    base[key] = value;
    base
}

#[test]
fn test_minimal_game() {
    let game = BoardGame::from_value(&minimal()).unwrap();
    assert_eq!(game.id(), 13);
    assert_eq!(game.name(), Some("Catan"));
    assert_eq!(game.year(), None);
    assert_eq!(game.bgg_rank(), None);
    assert!(!game.is_expansion());
    assert_eq!(game.description(), "");
    assert!(game.expansions().is_empty());
    assert!(game.videos().is_empty());
    assert!(game.versions().is_empty());
    assert!(game.comments().is_empty());
    assert!(game.player_count_votes().is_empty());
    assert!(game.player_age_votes().is_empty());
    assert!(game.language_dependence_votes().is_empty());
}

#[test]
fn test_missing_stats_fails() {
    let err = BoardGame::from_value(&json!({ "id": 1, "name": "x" })).unwrap_err();
    assert_eq!(err, InvalidRecordError::MissingField { field: "stats" });
}

#[test]
fn test_stats_must_be_mapping() {
    let err = BoardGame::from_value(&json!({ "id": 1, "stats": [1] })).unwrap_err();
    assert_eq!(err, InvalidRecordError::NotAMapping { what: "stats" });
}

#[test]
fn test_missing_id_fails() {
    let err = BoardGame::from_value(&json!({ "name": "x", "stats": {} })).unwrap_err();
    assert_eq!(err, InvalidRecordError::MissingField { field: "id" });
}

#[test]
fn test_expansions_dedup_keeps_first() {
    let game = BoardGame::from_value(&with(
        minimal(),
        "expansions",
        json!([
            { "id": 1, "name": "Seafarers" },
            { "id": 2, "name": "Cities & Knights" },
            { "id": 1, "name": "Seafarers (dup)" },
        ]),
    ))
    .unwrap();
    let ids: Vec<_> = game.expansions().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(game.expansions()[0].name(), Some("Seafarers"));
}

#[test]
fn test_expansion_without_id_fails() {
    let err = BoardGame::from_value(&with(minimal(), "expansions", json!([{ "name": "?" }])))
        .unwrap_err();
    assert!(matches!(
        err,
        InvalidRecordError::InvalidEntry {
            kind: EntryKind::Expansion,
            ..
        }
    ));
    assert!(err.to_string().starts_with("invalid expansion data"));
}

#[test]
fn test_expands_without_id_fails() {
    let err = BoardGame::from_value(&with(minimal(), "expands", json!([{ "name": "?" }])))
        .unwrap_err();
    assert!(err.to_string().starts_with("invalid expanded game data"));
}

#[test]
fn test_add_expansion_existing_id_is_noop() {
    let mut game = BoardGame::from_value(&with(
        minimal(),
        "expansions",
        json!([{ "id": 1, "name": "a" }, { "id": 2, "name": "b" }]),
    ))
    .unwrap();

    let added = game.add_expansion(&json!({ "id": 2, "name": "b again" })).unwrap();
    assert!(!added);
    assert_eq!(game.expansions().len(), 2);
    assert_eq!(game.expansions()[1].name(), Some("b"));
}

#[test]
fn test_add_expansion_new_id_appends() {
    let mut game = BoardGame::from_value(&minimal()).unwrap();
    assert!(game.add_expansion(&json!({ "id": 3, "name": "c" })).unwrap());
    assert_eq!(game.expansions().len(), 1);
    assert_eq!(game.expansions()[0].id(), 3);
}

#[test]
fn test_add_expansion_without_id_fails() {
    let mut game = BoardGame::from_value(&minimal()).unwrap();
    let err = game.add_expansion(&json!({ "name": "c" })).unwrap_err();
    assert!(err.to_string().starts_with("invalid expansion data"));
    assert!(game.expansions().is_empty());
}

#[test]
fn test_add_expanded_game() {
    let mut game = BoardGame::from_value(&with(
        minimal(),
        "expands",
        json!([{ "id": 10, "name": "Base" }]),
    ))
    .unwrap();
    assert!(!game.add_expanded_game(&json!({ "id": 10 })).unwrap());
    assert!(game.add_expanded_game(&json!({ "id": 11, "name": "Other" })).unwrap());
    let ids: Vec<_> = game.expands().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec![10, 11]);
    assert!(game.add_expanded_game(&json!({})).is_err());
}

#[test]
fn test_videos_dedup_and_parse() {
    let game = BoardGame::from_value(&with(
        minimal(),
        "videos",
        json!([
            {
                "id": 100,
                "name": "How to play",
                "category": "instructional",
                "link": "https://www.youtube.com/watch?v=abc",
                "language": "English",
                "uploader": "someone",
                "uploader_id": "42",
                "post_date": "2021-05-01T10:00:00-07:00",
            },
            { "id": 101, "uploader_id": 7, "post_date": "garbage" },
            { "id": 100, "uploader_id": 9 },
        ]),
    ))
    .unwrap();

    assert_eq!(game.videos().len(), 2);
    let first = &game.videos()[0];
    assert_eq!(first.uploader_id(), 42);
    assert_eq!(
        first.post_date(),
        NaiveDate::from_ymd_opt(2021, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
    );
    assert_eq!(first.to_string(), "BoardGameVideo (link: https://www.youtube.com/watch?v=abc)");

    let second = &game.videos()[1];
    assert_eq!(second.post_date(), None);
    assert!(second.post_date_parse().is_malformed());
}

#[test]
fn test_video_without_uploader_id_fails() {
    let err = BoardGame::from_value(&with(minimal(), "videos", json!([{ "id": 5 }]))).unwrap_err();
    assert_eq!(
        err,
        InvalidRecordError::entry(EntryKind::Video, InvalidRecordError::missing("uploader_id"))
    );
}

#[test]
fn test_duplicate_video_is_not_validated() {
    // Second occurrence is dropped by id before its fields are read.
    let game = BoardGame::from_value(&with(
        minimal(),
        "videos",
        json!([{ "id": 5, "uploader_id": 1 }, { "id": 5 }]),
    ))
    .unwrap();
    assert_eq!(game.videos().len(), 1);
}

#[test]
fn test_versions_dedup_and_normalize() {
    let game = BoardGame::from_value(&with(
        minimal(),
        "versions",
        json!([
            {
                "id": 7,
                "name": "English edition",
                "thumbnail": "//cf.geekdo-images.com/v.jpg",
                "width": "11.5",
                "length": 11.5,
                "depth": "2.75",
                "weight": "2.1",
                "yearpublished": "2015",
                "product_code": "KOS3061",
            },
            { "id": 7, "name": "dup" },
        ]),
    ))
    .unwrap();
    assert_eq!(game.versions().len(), 1);
    let v = &game.versions()[0];
    assert_eq!(v.name(), Some("English edition"));
    assert_eq!(v.thumbnail(), Some("https://cf.geekdo-images.com/v.jpg"));
    assert_eq!(v.image(), None);
    assert_eq!(v.width(), Some(11.5));
    assert_eq!(v.depth(), Some(2.75));
    assert_eq!(v.year(), Some(2015));
    assert_eq!(v.product_code(), Some("KOS3061"));
}

#[test]
fn test_version_without_id_fails() {
    let err = BoardGame::from_value(&with(minimal(), "versions", json!([{ "name": "?" }])))
        .unwrap_err();
    assert!(err.to_string().starts_with("invalid version data"));
}

#[test]
fn test_comments_are_not_deduplicated() {
    let mut game = BoardGame::from_value(&with(
        minimal(),
        "comments",
        json!([{ "username": "a", "comment": "hi", "rating": "n/a" }]),
    ))
    .unwrap();
    assert_eq!(game.comments().len(), 1);
    assert!(!game.comments()[0].is_rated());

    game.add_comment(&json!({ "username": "a", "comment": "hi", "rating": "n/a" }))
        .unwrap();
    assert_eq!(game.comments().len(), 2);
    assert_eq!(game.comments()[0], game.comments()[1]);
}

#[test]
fn test_comment_requires_fields() {
    let err = BoardGame::from_value(&with(
        minimal(),
        "comments",
        json!([{ "username": "a", "comment": "hi" }]),
    ))
    .unwrap_err();
    assert_eq!(
        err,
        InvalidRecordError::entry(EntryKind::Comment, InvalidRecordError::missing("rating"))
    );

    let mut game = BoardGame::from_value(&minimal()).unwrap();
    assert_eq!(
        game.add_comment(&json!({ "comment": "hi", "rating": 8 })),
        Err(InvalidRecordError::missing("username"))
    );
}

#[test]
fn test_numeric_comment_rating() {
    let mut game = BoardGame::from_value(&minimal()).unwrap();
    game.add_comment(&json!({ "username": "b", "comment": "great", "rating": 8.5 }))
        .unwrap();
    assert_eq!(game.comments()[0].rating, "8.5");
    assert_eq!(game.comments()[0].rating_value(), Some(8.5));
}

#[test]
fn test_year_published_unsigned_negative() {
    let game =
        BoardGame::from_value(&with(minimal(), "yearpublished", json!(4_294_966_296_i64))).unwrap();
    assert_eq!(game.year(), Some(-1000));

    let game = BoardGame::from_value(&with(minimal(), "yearpublished", json!("1995"))).unwrap();
    assert_eq!(game.year(), Some(1995));

    let game = BoardGame::from_value(&with(minimal(), "yearpublished", json!("unknown"))).unwrap();
    assert_eq!(game.year(), None);
}

#[test]
fn test_scalar_fields_and_taxonomy() {
    let game = BoardGame::from_value(&json!({
        "id": "13",
        "name": "Catan",
        "stats": { "ranks": [{ "type": "boardgame", "value": "429" }], "owned": 100 },
        "minplayers": "3",
        "maxplayers": 4,
        "minplaytime": 60,
        "maxplaytime": "120",
        "playingtime": 120,
        "minage": "10",
        "thumbnail": "cf.geekdo-images.com/t.jpg",
        "image": "https://cf.geekdo-images.com/i.jpg",
        "expansion": "0",
        "description": "Trade and build.",
        "alternative_names": ["Die Siedler von Catan", "Los Colonos de Catán"],
        "categories": ["Negotiation"],
        "families": ["Catan"],
        "mechanics": ["Dice Rolling", "Trading"],
        "implementations": [],
        "designers": ["Klaus Teuber"],
        "artists": ["Michael Menzel"],
        "publishers": ["KOSMOS"],
    }))
    .unwrap();

    assert_eq!(game.id(), 13);
    assert_eq!(game.bgg_rank(), Some(429));
    assert_eq!(game.users_owned(), Some(100));
    assert_eq!(game.min_players(), Some(3));
    assert_eq!(game.max_players(), Some(4));
    assert_eq!(game.min_playing_time(), Some(60));
    assert_eq!(game.max_playing_time(), Some(120));
    assert_eq!(game.playing_time(), Some(120));
    assert_eq!(game.min_age(), Some(10));
    assert_eq!(game.thumbnail(), Some("https://cf.geekdo-images.com/t.jpg"));
    assert_eq!(game.image(), Some("https://cf.geekdo-images.com/i.jpg"));
    assert!(!game.is_expansion());
    assert_eq!(game.description(), "Trade and build.");
    assert_eq!(game.alternative_names().len(), 2);
    assert_eq!(game.mechanics(), ["Dice Rolling", "Trading"]);
    assert!(game.implementations().is_empty());
    assert_eq!(game.designers(), ["Klaus Teuber"]);
    assert_eq!(game.artists(), ["Michael Menzel"]);
    assert_eq!(game.publishers(), ["KOSMOS"]);
    assert_eq!(game.categories(), ["Negotiation"]);
    assert_eq!(game.families(), ["Catan"]);
}

#[test]
fn test_polls_built_at_construction() {
    let game = BoardGame::from_value(&json!({
        "id": 1,
        "stats": {},
        "suggested_numplayers": { "results": { "3": { "best": 1, "recommended": 2, "not_recommended": 0 } } },
        "suggested_playerage": { "results": { "10": 4 } },
        "language_dependence": { "results": { "2": { "description": "Some text", "num_votes": 3 } } },
    }))
    .unwrap();
    assert_eq!(game.player_count_votes().len(), 1);
    assert_eq!(game.player_count_votes()[0].votes_recommended, 2);
    assert_eq!(game.player_age_votes()[0].votes, 4);
    assert_eq!(game.language_dependence_votes()[0].description, "Some text");
}

#[test]
fn test_dump_lists_sections() {
    let game = BoardGame::from_value(&json!({
        "id": 1,
        "name": "Game",
        "stats": {},
        "expansions": [{ "id": 2, "name": "More Game" }],
        "mechanics": ["Drafting"],
    }))
    .unwrap();
    let text = game.dump();
    assert!(text.contains("boardgame id"));
    assert!(text.contains("expansions\n- More Game\n"));
    assert!(text.contains("mechanics\n- Drafting\n"));
    assert_eq!(game.to_string(), "BoardGame (id: 1)");
}

#[test]
fn test_serialize_skips_bookkeeping() {
    let game = BoardGame::from_value(&json!({
        "id": 1,
        "name": "Game",
        "stats": {},
        "expands": [{ "id": 9 }],
    }))
    .unwrap();
    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["id"], json!(1));
    assert_eq!(value["expands"], json!([{ "id": 9, "name": null }]));
    assert!(value["stats"].get("primary_rank").is_none());
}
