use analysis::rounds::{self, RoundSummary};
use common::raw::RoundSignal;
use common::series::{Pistols, SideSplit};
use common::{Side, Stance};
use pretty_assertions::assert_eq;

fn regulation_13_11() -> Vec<RoundSignal> {
    // Left attacks first and takes 8 of 12, then holds 5 defensive rounds.
    let mut rounds = Vec::new();
    rounds.extend([RoundSignal::won(Side::Left, Stance::Attack); 8]);
    rounds.extend([RoundSignal::won(Side::Right, Stance::Defense); 4]);
    rounds.push(RoundSignal::won(Side::Right, Stance::Attack));
    rounds.extend([RoundSignal::won(Side::Left, Stance::Defense); 5]);
    rounds.extend([RoundSignal::won(Side::Right, Stance::Attack); 6]);
    rounds
}

#[test]
fn empty_map() {
    assert_eq!(RoundSummary::default(), rounds::classify(&[]));
}

#[test]
fn full_regulation() {
    let result = rounds::classify(&regulation_13_11());

    let expected = RoundSummary {
        left_score: 13,
        right_score: 11,
        pistols: Pistols { left: 1, right: 1 },
        sides: SideSplit {
            left_atk: 8,
            left_def: 5,
            right_atk: 7,
            right_def: 4,
        },
    };
    assert_eq!(expected, result);
    assert_eq!(result.left_score, result.sides.left_total());
    assert_eq!(result.right_score, result.sides.right_total());
}

#[test]
fn split_pistols() {
    for len in [13, 20, 24, 30] {
        let mut input = vec![RoundSignal::won(Side::Right, Stance::Attack); len];
        input[0] = RoundSignal::won(Side::Left, Stance::Attack);
        input[12] = RoundSignal::won(Side::Right, Stance::Defense);

        let result = rounds::classify(&input);

        assert_eq!(Pistols { left: 1, right: 1 }, result.pistols, "{len} rounds");
        assert!(result.sides.left_atk >= 1);
        assert!(result.sides.right_def >= 1);
    }
}

#[test]
fn short_map_counts_only_first_pistol() {
    let input = vec![RoundSignal::won(Side::Right, Stance::Defense); 12];

    let result = rounds::classify(&input);

    assert_eq!(Pistols { left: 0, right: 1 }, result.pistols);
    assert_eq!(12, result.right_score);
}

#[test]
fn overtime_is_not_special() {
    let mut input = regulation_13_11();
    input.push(RoundSignal::won(Side::Left, Stance::Attack));
    input.push(RoundSignal::won(Side::Left, Stance::Defense));

    let result = rounds::classify(&input);

    assert_eq!(15, result.left_score);
    assert_eq!(Pistols { left: 1, right: 1 }, result.pistols);
    assert_eq!(9, result.sides.left_atk);
    assert_eq!(6, result.sides.left_def);
}

#[test]
fn missing_stance_only_counts_for_score() {
    let input = vec![
        RoundSignal::won_unknown_stance(Side::Left),
        RoundSignal::won(Side::Left, Stance::Defense),
        RoundSignal::won_unknown_stance(Side::Right),
        RoundSignal::default(),
    ];

    let result = rounds::classify(&input);

    assert_eq!(2, result.left_score);
    assert_eq!(1, result.right_score);
    assert_eq!(Pistols { left: 1, right: 0 }, result.pistols);
    assert_eq!(
        SideSplit {
            left_atk: 0,
            left_def: 1,
            right_atk: 0,
            right_def: 0,
        },
        result.sides
    );
}

#[test]
fn undecided_round_keeps_its_index() {
    let mut input = vec![RoundSignal::won(Side::Left, Stance::Attack); 13];
    input[3] = RoundSignal::default();
    input[12] = RoundSignal::won(Side::Right, Stance::Attack);

    let result = rounds::classify(&input);

    assert_eq!(Pistols { left: 1, right: 1 }, result.pistols);
    assert_eq!(11, result.left_score);
}

#[test]
fn classification_is_repeatable() {
    let input = regulation_13_11();
    assert_eq!(rounds::classify(&input), rounds::classify(&input));
}

#[test]
fn square_classes() {
    assert_eq!(
        RoundSignal::won(Side::Left, Stance::Defense),
        rounds::from_square_classes("rnd-sq mod-win mod-ct", "rnd-sq", true)
    );
    assert_eq!(
        RoundSignal::won(Side::Right, Stance::Attack),
        rounds::from_square_classes("rnd-sq mod-win mod-t", "rnd-sq", false)
    );
    assert_eq!(
        RoundSignal::won(Side::Right, Stance::Attack),
        rounds::from_square_classes("rnd-sq", "rnd-sq  mod-t mod-win", true)
    );
    assert_eq!(
        RoundSignal::won_unknown_stance(Side::Left),
        rounds::from_square_classes("rnd-sq", "rnd-sq mod-win", false)
    );
    assert_eq!(
        RoundSignal::default(),
        rounds::from_square_classes("rnd-sq mod-win", "rnd-sq mod-win", true)
    );
    assert_eq!(
        RoundSignal::default(),
        rounds::from_square_classes("rnd-sq", "rnd-sq", true)
    );
}
