/// The closed map pool. A name outside this set is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum MapName {
    Abyss,
    Ascent,
    Bind,
    Breeze,
    Corrode,
    Fracture,
    Haven,
    Icebox,
    Lotus,
    Pearl,
    Split,
    Sunset,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not in the map pool")]
pub struct UnknownMap(pub String);

impl MapName {
    pub const ALL: [MapName; 12] = [
        Self::Abyss,
        Self::Ascent,
        Self::Bind,
        Self::Breeze,
        Self::Corrode,
        Self::Fracture,
        Self::Haven,
        Self::Icebox,
        Self::Lotus,
        Self::Pearl,
        Self::Split,
        Self::Sunset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abyss => "Abyss",
            Self::Ascent => "Ascent",
            Self::Bind => "Bind",
            Self::Breeze => "Breeze",
            Self::Corrode => "Corrode",
            Self::Fracture => "Fracture",
            Self::Haven => "Haven",
            Self::Icebox => "Icebox",
            Self::Lotus => "Lotus",
            Self::Pearl => "Pearl",
            Self::Split => "Split",
            Self::Sunset => "Sunset",
        }
    }
}

impl std::fmt::Display for MapName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MapName {
    type Err = UnknownMap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownMap(trimmed.to_owned()))
    }
}
