use analysis::{dates, maps};
use common::MapName;
use pretty_assertions::assert_eq;

#[test]
fn detect_from_labels() {
    assert_eq!(Some(MapName::Bind), maps::detect("Bind PICK 41:02"));
    assert_eq!(Some(MapName::Icebox), maps::detect("\n 2 \t ICEBOX \n"));
    assert_eq!(Some(MapName::Abyss), maps::detect("Map 3: abyss (decider)"));
    assert_eq!(None, maps::detect("All Maps"));
    assert_eq!(None, maps::detect("Binding"));
    assert_eq!(None, maps::detect(""));
}

#[test]
fn dates() {
    let day = chrono::NaiveDate::from_ymd_opt(2025, 3, 1);

    assert_eq!(day, dates::normalize("2025-03-01 18:00:00"));
    assert_eq!(day, dates::normalize("2025-03-01T18:00:00+00:00"));
    assert_eq!(day, dates::normalize("Saturday, March 1st 2025-03-01"));
    assert_eq!(day, dates::normalize("1740852000"));
    assert_eq!(None, dates::normalize("TBD"));
    assert_eq!(None, dates::normalize("  "));
}
