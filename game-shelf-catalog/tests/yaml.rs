use game_shelf_catalog::{RecordOrigin, YamlError, load_collection, load_collections, parse_collection};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn load_full_collection_from_yaml() {
    let tmp = TempDir::new().unwrap();

    write_yaml(
        tmp.path(),
        "sam.yaml",
        r#"
name: "Sam's Shelf"
owner: sam
games:
  - title: Metroid Dread
    external_id: 1234
    platform: Switch
    format: physical
    completed: true
    origin: search
  - title: Metroid Prime
    platform: GameCube
"#,
    );

    let collection = load_collection(&tmp.path().join("sam.yaml")).unwrap();
    assert_eq!(collection.name.as_deref(), Some("Sam's Shelf"));
    assert_eq!(collection.owner.as_deref(), Some("sam"));
    assert_eq!(collection.len(), 2);

    let dread = &collection.games[0];
    assert_eq!(dread.external_id, Some(1234));
    assert_eq!(dread.platform.as_deref(), Some("Switch"));
    assert_eq!(dread.format.as_deref(), Some("physical"));
    assert!(dread.completed);
    assert_eq!(dread.origin, RecordOrigin::Search);

    let prime = &collection.games[1];
    assert_eq!(prime.external_id, None);
    assert!(!prime.completed);
    assert_eq!(prime.origin, RecordOrigin::Manual);
}

#[test]
fn bare_sequence_is_a_collection() {
    let collection = parse_collection(
        r#"
- title: Hades
- title: Celeste
  external_id: 77
"#,
        "inline",
    )
    .unwrap();
    assert!(collection.name.is_none());
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.games[1].external_id, Some(77));
    assert_eq!(collection.label("Left"), "Left");
}

#[test]
fn unknown_fields_carried_in_extra() {
    let collection = parse_collection(
        r#"
games:
  - title: Tetris Effect
    cover_url: "https://example.invalid/cover.png"
    rating: 9
"#,
        "inline",
    )
    .unwrap();
    let game = &collection.games[0];
    assert_eq!(game.extra.len(), 2);
    assert_eq!(
        game.extra.get("cover_url").and_then(|v| v.as_str()),
        Some("https://example.invalid/cover.png")
    );
    assert_eq!(game.extra.get("rating").and_then(|v| v.as_i64()), Some(9));
}

#[test]
fn empty_title_rejected() {
    let err = parse_collection(
        r#"
games:
  - title: Okami
  - title: "   "
"#,
        "bad.yaml",
    )
    .unwrap_err();
    match err {
        YamlError::EmptyTitle { path, index } => {
            assert_eq!(path, "bad.yaml");
            assert_eq!(index, 1);
        }
        other => panic!("expected EmptyTitle, got {other:?}"),
    }
}

#[test]
fn missing_title_is_a_parse_error() {
    let err = parse_collection("games:\n  - platform: Switch\n", "bad.yaml").unwrap_err();
    assert!(matches!(err, YamlError::Parse { .. }));
}

#[test]
fn punctuation_only_title_is_accepted() {
    // Blank after normalization is a comparison concern, not a load error.
    let collection = parse_collection("- title: \"?!\"\n", "inline").unwrap();
    assert_eq!(collection.games[0].title, "?!");
}

#[test]
fn load_directory_sorted_by_name() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "b.yaml", "name: Second\ngames: []\n");
    write_yaml(tmp.path(), "a.yml", "name: First\ngames: []\n");
    write_yaml(tmp.path(), "notes.txt", "not a collection");

    let collections = load_collections(tmp.path()).unwrap();
    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0].name.as_deref(), Some("First"));
    assert_eq!(collections[1].name.as_deref(), Some("Second"));
}

#[test]
fn missing_dir_returns_empty() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nonexistent");
    assert!(load_collections(&missing).unwrap().is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_collection(&tmp.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, YamlError::Io { .. }));
}

#[test]
fn misspelled_games_key_is_a_parse_error() {
    let err = parse_collection(
        "name: Shelf\ngame:\n  - title: Metroid Dread\n  - title: Hades\n",
        "typo.yaml",
    )
    .unwrap_err();
    match err {
        YamlError::Parse { path, source } => {
            assert_eq!(path, "typo.yaml");
            assert!(source.to_string().contains("game"), "{source}");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn single_game_mapping_is_not_a_collection() {
    let err = parse_collection("title: Hades\nplatform: PC\n", "one.yaml").unwrap_err();
    assert!(matches!(err, YamlError::Parse { .. }));
}

#[test]
fn bad_field_value_reports_the_field() {
    let err = parse_collection(
        "games:\n  - title: Hades\n    external_id: abc\n",
        "bad.yaml",
    )
    .unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, YamlError::Parse { .. }));
    assert!(message.contains("bad.yaml"), "{message}");
    assert!(!message.contains("untagged"), "{message}");
    assert!(message.contains("abc") || message.contains("i64"), "{message}");
}

#[test]
fn bad_value_in_bare_sequence_reports_the_field() {
    let err = parse_collection("- title: Hades\n  completed: maybe\n", "bare.yaml").unwrap_err();
    assert!(!err.to_string().contains("untagged"), "{err}");
}

#[test]
fn empty_file_is_rejected() {
    let err = parse_collection("", "empty.yaml").unwrap_err();
    assert!(matches!(err, YamlError::Empty(ref path) if path == "empty.yaml"));

    let err = parse_collection("# nothing here yet\n\n", "comments.yaml").unwrap_err();
    assert!(matches!(err, YamlError::Empty(ref path) if path == "comments.yaml"));
}
