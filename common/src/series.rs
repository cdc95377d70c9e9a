use crate::{Agent, MapName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VetoKind {
    Ban,
    Pick,
    Decider,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VetoEvent {
    pub order: u32,
    pub kind: VetoKind,
    /// Display name of the acting team, `None` only for the decider.
    pub team: Option<String>,
    pub map: MapName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pistols {
    pub left: u32,
    pub right: u32,
}

/// Rounds won per side and stance. All zero when no stance data was extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SideSplit {
    pub left_atk: u32,
    pub left_def: u32,
    pub right_atk: u32,
    pub right_def: u32,
}

impl SideSplit {
    pub fn left_total(&self) -> u32 {
        self.left_atk + self.left_def
    }

    pub fn right_total(&self) -> u32 {
        self.right_atk + self.right_def
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MapResult {
    pub game_id: Option<u64>,
    pub map: MapName,
    pub left_score: u32,
    pub right_score: u32,
    pub picked_by: Option<String>,
    pub left_agents: Vec<Agent>,
    pub right_agents: Vec<Agent>,
    pub pistols: Pistols,
    pub sides: SideSplit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeriesResult {
    pub left_wins: u32,
    pub right_wins: u32,
    pub winner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeriesRecord {
    pub match_id: Option<String>,
    pub date: Option<chrono::NaiveDate>,
    pub left: String,
    pub right: String,
    pub veto: Vec<VetoEvent>,
    pub decider_map: Option<MapName>,
    pub maps: Vec<MapResult>,
    pub result: SeriesResult,
}
