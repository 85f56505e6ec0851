use std::path::PathBuf;

use dv_core::{Point, render};
use dv_load::{LoadError, load_from_file, load_from_str};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_fixture() {
    let desc = load_from_file(fixture("goblin_warren.json")).expect("fixture should load");

    assert_eq!(desc.name, "Goblin Warren");
    assert_eq!(desc.rooms.len(), 3);
    assert_eq!(desc.corridors.len(), 2);
    assert_eq!(desc.corridors[0].waypoints, vec![Point::new(9, 3), Point::new(9, 4)]);
    assert_eq!(desc.rooms[1].doors[1].connects_to, "c2");
    assert!(desc.entities[0].is_boss);
    assert!(!desc.entities[1].is_boss);
}

#[test]
fn test_render_fixture() {
    let desc = load_from_file(fixture("goblin_warren.json")).unwrap();
    let text = render(&desc).unwrap();
    let map: Vec<&str> = text.lines().skip(2).take(10).collect();

    assert_eq!(
        map,
        vec![
            "|                        |",
            "| #####                  |",
            "| #.R.#        #######   |",
            "| #.E.D::::    #.....#   |",
            "| #...#   ::S::D..B..#   |",
            "| #####        #..M..#   |",
            "|              #.....#   |",
            "|  ###         ###D###   |",
            "|  #TD:::::::::::::      |",
            "|  ###                   |",
        ]
    );
}

#[test]
fn test_missing_file() {
    let path = fixture("does_not_exist.json");
    match load_from_file(&path) {
        Err(LoadError::NotFound(p)) => assert_eq!(p, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_directory_is_not_a_file() {
    assert!(matches!(
        load_from_file(env!("CARGO_MANIFEST_DIR")),
        Err(LoadError::NotFound(_))
    ));
}

#[test]
fn test_bad_json() {
    assert!(matches!(load_from_str("{ not json"), Err(LoadError::Malformed(_))));
    assert!(matches!(
        load_from_str(r#"{"grid_size": [3], "rooms": [], "corridors": []}"#),
        Err(LoadError::Malformed(_))
    ));
    assert!(matches!(
        load_from_str(
            r#"{"grid_size": [3, 3], "rooms": [{"id": "a", "position": [0, 0]}], "corridors": []}"#
        ),
        Err(LoadError::Malformed(_))
    ));
}
