//! Primitive values as handed over by the page retrieval layer.
//!
//! Nothing in here has been normalized yet; team names are whatever the page
//! header showed and map labels still carry timers or pick markers.

use crate::{Side, Stance};

/// One column of the round timeline, already mapped from top/bottom to left/right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundSignal {
    #[serde(default)]
    pub winner: Option<Side>,
    #[serde(default)]
    pub stance: Option<Stance>,
}

impl RoundSignal {
    pub fn won(winner: Side, stance: Stance) -> Self {
        Self {
            winner: Some(winner),
            stance: Some(stance),
        }
    }

    pub fn won_unknown_stance(winner: Side) -> Self {
        Self {
            winner: Some(winner),
            stance: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawMap {
    #[serde(default)]
    pub game_id: Option<u64>,
    pub label: String,
    #[serde(default)]
    pub left_score: Option<u32>,
    #[serde(default)]
    pub right_score: Option<u32>,
    #[serde(default)]
    pub rounds: Vec<RoundSignal>,
    #[serde(default)]
    pub left_agents: Vec<String>,
    #[serde(default)]
    pub right_agents: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawSeries {
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub left: String,
    pub right: String,
    #[serde(default)]
    pub veto_text: String,
    #[serde(default)]
    pub maps: Vec<RawMap>,
}
