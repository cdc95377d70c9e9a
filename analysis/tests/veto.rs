use analysis::{veto, Tables};
use common::series::{VetoEvent, VetoKind};
use common::MapName;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn event(order: u32, kind: VetoKind, team: Option<&str>, map: MapName) -> VetoEvent {
    VetoEvent {
        order,
        kind,
        team: team.map(str::to_owned),
        map,
    }
}

#[test]
fn full_best_of_three() {
    let tables = Tables::default();

    let result = veto::parse(
        &tables,
        "Cloud9 ban Bind; Sentinels ban Split; Cloud9 pick Haven; Sentinels pick Ascent; Bind remains",
        "Cloud9",
        "Sentinels",
    );

    let expected = veto::ParsedVeto {
        events: vec![
            event(1, VetoKind::Ban, Some("Cloud9"), MapName::Bind),
            event(2, VetoKind::Ban, Some("Sentinels"), MapName::Split),
            event(3, VetoKind::Pick, Some("Cloud9"), MapName::Haven),
            event(4, VetoKind::Pick, Some("Sentinels"), MapName::Ascent),
            event(5, VetoKind::Decider, None, MapName::Bind),
        ],
        decider: Some(MapName::Bind),
    };
    assert_eq!(expected, result);
}

#[test]
fn tags_plurals_and_spacing() {
    let tables = Tables::default();

    let result = veto::parse(
        &tables,
        "  c9 BANS bind;\n  sen   picks HAVEN ;; ",
        "Cloud9",
        "Sentinels",
    );

    assert_eq!(
        vec![
            event(1, VetoKind::Ban, Some("Cloud9"), MapName::Bind),
            event(2, VetoKind::Pick, Some("Sentinels"), MapName::Haven),
        ],
        result.events
    );
    assert_eq!(None, result.decider);
}

#[test]
#[traced_test]
fn unknown_map_does_not_use_an_order() {
    let tables = Tables::default();

    let result = veto::parse(&tables, "C9 ban Dust; SEN ban Split", "Cloud9", "Sentinels");

    assert_eq!(
        vec![event(1, VetoKind::Ban, Some("Sentinels"), MapName::Split)],
        result.events
    );
    assert!(logs_contain("Dropping unknown map"));
}

#[test]
fn commentary_is_skipped() {
    let tables = Tables::default();

    let result = veto::parse(
        &tables,
        "Veto decided by coin toss; C9 ban Bind; Good luck to both teams; Sunset remains",
        "Cloud9",
        "Sentinels",
    );

    assert_eq!(
        vec![
            event(1, VetoKind::Ban, Some("Cloud9"), MapName::Bind),
            event(2, VetoKind::Decider, None, MapName::Sunset),
        ],
        result.events
    );
    assert_eq!(Some(MapName::Sunset), result.decider);
}

#[test]
fn unusable_decider_clause() {
    let tables = Tables::default();

    let result = veto::parse(&tables, "C9 ban Bind; Nothing remains", "Cloud9", "Sentinels");
    assert_eq!(None, result.decider);
    assert_eq!(1, result.events.len());

    let result = veto::parse(
        &tables,
        "Lotus remains; Pearl remains",
        "Cloud9",
        "Sentinels",
    );
    assert_eq!(Some(MapName::Lotus), result.decider);
    assert_eq!(
        vec![event(1, VetoKind::Decider, None, MapName::Lotus)],
        result.events
    );
}

#[test]
fn empty_text() {
    let tables = Tables::default();

    assert_eq!(
        veto::ParsedVeto::default(),
        veto::parse(&tables, "", "Cloud9", "Sentinels")
    );
    assert_eq!(
        veto::ParsedVeto::default(),
        veto::parse(&tables, " ;  ; ", "Cloud9", "Sentinels")
    );
}

#[test]
fn override_replaces_scraped_text() {
    let tables = Tables::default();

    let result = veto::parse_for_match(
        &tables,
        Some("598923"),
        "garbled text",
        "Trace Esports",
        "Wolves Esports",
    );

    assert_eq!(7, result.events.len());
    assert_eq!(Some(MapName::Bind), result.decider);
    assert_eq!(
        event(4, VetoKind::Pick, Some("Wolves Esports"), MapName::Haven),
        result.events[3]
    );
    assert_eq!(Some("Trace Esports"), result.picked_by(MapName::Abyss));
    assert_eq!(None, result.picked_by(MapName::Bind));

    let scraped = veto::parse_for_match(
        &tables,
        Some("1"),
        "TE ban Breeze",
        "Trace Esports",
        "Wolves Esports",
    );
    assert_eq!(
        vec![event(1, VetoKind::Ban, Some("Trace Esports"), MapName::Breeze)],
        scraped.events
    );
}

#[test]
fn injected_override_table() {
    let tables = Tables::empty().with_veto_override("42", "A ban Pearl; B pick Lotus");

    let result = veto::parse_for_match(&tables, Some("42"), "", "Alpha", "Bravo");

    assert_eq!(
        vec![
            event(1, VetoKind::Ban, Some("Alpha"), MapName::Pearl),
            event(2, VetoKind::Pick, Some("Bravo"), MapName::Lotus),
        ],
        result.events
    );
}

#[test]
fn parsing_is_repeatable() {
    let tables = Tables::default();
    let text = "FNC ban Abyss; TH ban Icebox; FNC pick Lotus; TH pick Fracture; Sunset remains";

    let first = veto::parse(&tables, text, "Team Heretics", "Fnatic");
    let second = veto::parse(&tables, text, "Team Heretics", "Fnatic");

    assert_eq!(first, second);
    assert_eq!(Some("Fnatic"), first.picked_by(MapName::Lotus));
    assert_eq!(Some("Team Heretics"), first.picked_by(MapName::Fracture));
}
