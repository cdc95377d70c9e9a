use common::raw::RoundSignal;
use common::series::{Pistols, SideSplit};
use common::{Side, Stance};

/// Round indices that open a half in regulation. Overtime rounds are not pistols.
pub const PISTOL_ROUNDS: [usize; 2] = [0, 12];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundSummary {
    pub left_score: u32,
    pub right_score: u32,
    pub pistols: Pistols,
    pub sides: SideSplit,
}

/// Tallies score, pistol wins and attack/defense wins over one map's rounds.
///
/// A round whose winner's stance is unknown still counts towards the score,
/// so the stance totals can fall short of the score when side data is partial.
pub fn classify(rounds: &[RoundSignal]) -> RoundSummary {
    let mut summary = RoundSummary::default();

    for (idx, round) in rounds.iter().enumerate() {
        let winner = match round.winner {
            Some(w) => w,
            None => continue,
        };

        match winner {
            Side::Left => summary.left_score += 1,
            Side::Right => summary.right_score += 1,
        };

        if PISTOL_ROUNDS.contains(&idx) {
            match winner {
                Side::Left => summary.pistols.left += 1,
                Side::Right => summary.pistols.right += 1,
            };
        }

        let counter = match (winner, round.stance) {
            (Side::Left, Some(Stance::Attack)) => &mut summary.sides.left_atk,
            (Side::Left, Some(Stance::Defense)) => &mut summary.sides.left_def,
            (Side::Right, Some(Stance::Attack)) => &mut summary.sides.right_atk,
            (Side::Right, Some(Stance::Defense)) => &mut summary.sides.right_def,
            (_, None) => continue,
        };
        *counter += 1;
    }

    summary
}

/// Builds a round signal from the class lists of the top and bottom squares
/// of one timeline column, e.g. `"rnd-sq mod-win mod-ct"` and `"rnd-sq"`.
///
/// The winner is the square that alone carries `mod-win`; its `mod-t` or
/// `mod-ct` class gives the stance it won on.
pub fn from_square_classes(top: &str, bottom: &str, top_is_left: bool) -> RoundSignal {
    let has = |classes: &str, needle: &str| classes.split_whitespace().any(|c| c == needle);

    let top_win = has(top, "mod-win") && !has(bottom, "mod-win");
    let bottom_win = has(bottom, "mod-win") && !has(top, "mod-win");

    let (winning_square, winner_is_top) = if top_win {
        (top, true)
    } else if bottom_win {
        (bottom, false)
    } else {
        return RoundSignal::default();
    };

    let stance = if has(winning_square, "mod-ct") {
        Some(Stance::Defense)
    } else if has(winning_square, "mod-t") {
        Some(Stance::Attack)
    } else {
        None
    };

    let winner = if winner_is_top == top_is_left {
        Side::Left
    } else {
        Side::Right
    };

    RoundSignal {
        winner: Some(winner),
        stance,
    }
}
