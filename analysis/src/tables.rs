//! Lookup tables behind the heuristics.
//!
//! The defaults are compiled in as `phf` maps. Everything in the engine reads
//! them through a [`Tables`] value, so a run can extend them from a
//! [`TableOverrides`] file and tests can build small tables of their own.

use std::collections::{HashMap, HashSet};

/// Short tags as they show up in veto notes, mapped to the full team name.
pub static TEAM_TAGS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    // EMEA
    "NAVI" => "NATUS VINCERE",
    "NV" => "NATUS VINCERE",
    "TL" => "TEAM LIQUID",
    "VIT" => "TEAM VITALITY",
    "TH" => "TEAM HERETICS",
    "FNC" => "FNATIC",
    "GX" => "GIANTX",
    "M8" => "GENTLE MATES",
    "KC" => "KARMINE CORP",
    "BBL" => "BBL ESPORTS",
    "FUT" => "FUT ESPORTS",
    "ULF" => "ULF ESPORTS",
    "PCF" => "PCIFIC ESPORTS",
    // Americas
    "C9" => "CLOUD9",
    "SEN" => "SENTINELS",
    "100T" => "100 THIEVES",
    "EG" => "EVIL GENIUSES",
    "LEV" => "LEVIATAN",
    "KRU" => "KRU ESPORTS",
    "G2" => "G2 ESPORTS",
    "NRG" => "NRG",
    "MIBR" => "MIBR",
    "LOUD" => "LOUD",
    "FUR" => "FURIA",
    "ENV" => "ENVY",
    // Pacific
    "PRX" => "PAPER REX",
    "DFM" => "DETONATION FOCUSME",
    "TS" => "TEAM SECRET",
    "GE" => "GLOBAL ESPORTS",
    "RRQ" => "REX REGUM QEON",
    "ZETA" => "ZETA DIVISION",
    "T1" => "T1",
    "DRX" => "DRX",
    "GEN" => "GEN.G",
    "NS" => "NONGSHIM REDFORCE",
    "NSRF" => "NONGSHIM REDFORCE",
    "FS" => "FULL SENSE",
    "TLN" => "TALON ESPORTS",
    "VL" => "VARREL",
    // China
    "EDG" => "EDWARD GAMING",
    "FPX" => "FUNPLUS PHOENIX",
    "BLG" => "BILIBILI GAMING",
    "WOL" => "WOLVES ESPORTS",
    "TEC" => "TITAN ESPORTS CLUB",
    "DRG" => "DRAGON RANGER GAMING",
    "XLG" => "XI LAI GAMING",
    "AG" => "ALL GAMERS",
    "TE" => "TRACE ESPORTS",
    "TYL" => "TYLOO",
    "JDG" => "JDG ESPORTS",
    "NOVA" => "NOVA ESPORTS",
};

/// Header names that carry a sponsor in front of the team, mapped to the name the team plays under.
pub static DISPLAY_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "Guangzhou Huadu Bilibili Gaming (Bilibili Gaming)" => "Bilibili Gaming",
    "JD Mall JDG Esports (JDG Esports)" => "JDG Esports",
    "Wuxi Titan Esports Club (Titan Esports Club)" => "Titan Esports Club",
};

/// Leading sponsor words that precede the real team name, upper-cased.
pub static SPONSOR_PREFIXES: &[&str] = &["GUANGZHOU HUADU", "JD MALL", "WUXI"];

/// Organisational filler that says nothing about which team is meant.
pub static GENERIC_WORDS: phf::Set<&'static str> = phf::phf_set! {
    "TEAM",
    "ESPORTS",
    "GAMING",
};

pub static AGENT_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "astra" => "Astra",
    "breach" => "Breach",
    "brimstone" => "Brimstone",
    "brim" => "Brimstone",
    "chamber" => "Chamber",
    "clove" => "Clove",
    "cypher" => "Cypher",
    "deadlock" => "Deadlock",
    "fade" => "Fade",
    "gekko" => "Gekko",
    "harbor" => "Harbor",
    "iso" => "Iso",
    "jett" => "Jett",
    "kayo" => "KAY/O",
    "kay/o" => "KAY/O",
    "kay o" => "KAY/O",
    "kay-o" => "KAY/O",
    "killjoy" => "Killjoy",
    "kj" => "Killjoy",
    "neon" => "Neon",
    "omen" => "Omen",
    "phoenix" => "Phoenix",
    "raze" => "Raze",
    "reyna" => "Reyna",
    "sage" => "Sage",
    "skye" => "Skye",
    "sova" => "Sova",
    "tejo" => "Tejo",
    "veto" => "Veto",
    "viper" => "Viper",
    "vyse" => "Vyse",
    "waylay" => "Waylay",
    "yoru" => "Yoru",
};

/// Labels that end up next to agent icons but are not agents.
pub static AGENT_FILLER: phf::Set<&'static str> = phf::phf_set! {
    "",
    "overview",
    "performance",
    "economy",
    "pick",
    "ban",
    "all",
};

/// Hand-corrected veto notes for matches whose page text is known to be wrong.
pub static VETO_OVERRIDES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "598923" => "Trace Esports ban Breeze; Wolves Esports ban Corrode; Trace Esports pick Abyss; Wolves Esports pick Haven; Trace Esports ban Pearl; Wolves Esports ban Split; Bind remains",
    "598925" => "All Gamers ban Breeze; Bilibili Gaming ban Corrode; All Gamers pick Split; Bilibili Gaming pick Abyss; All Gamers ban Haven; Bilibili Gaming ban Pearl; Bind remains",
    "598926" => "Dragon Ranger Gaming ban Haven; JDG Esports ban Pearl; Dragon Ranger Gaming pick Abyss; JDG Esports pick Breeze; Dragon Ranger Gaming ban Split; JDG Esports ban Bind; Corrode remains",
};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("empty key in table '{table}'")]
    EmptyKey { table: &'static str },
    #[error("empty value for '{key}' in table '{table}'")]
    EmptyValue { table: &'static str, key: String },
}

/// Additions and replacements for the compiled-in tables, usually read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOverrides {
    pub team_tags: HashMap<String, String>,
    pub display_names: HashMap<String, String>,
    pub sponsor_prefixes: Vec<String>,
    pub generic_words: Vec<String>,
    pub agent_aliases: HashMap<String, String>,
    pub agent_filler: Vec<String>,
    pub veto_overrides: HashMap<String, String>,
}

/// Read-only configuration shared by every component for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    team_tags: HashMap<String, String>,
    display_names: HashMap<String, String>,
    sponsor_prefixes: Vec<String>,
    generic_words: HashSet<String>,
    agent_aliases: HashMap<String, String>,
    agent_filler: HashSet<String>,
    veto_overrides: HashMap<String, String>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            team_tags: owned_map(&TEAM_TAGS),
            display_names: owned_map(&DISPLAY_NAMES),
            sponsor_prefixes: SPONSOR_PREFIXES.iter().map(|p| (*p).to_owned()).collect(),
            generic_words: GENERIC_WORDS.iter().map(|w| (*w).to_owned()).collect(),
            agent_aliases: owned_map(&AGENT_ALIASES),
            agent_filler: AGENT_FILLER.iter().map(|w| (*w).to_owned()).collect(),
            veto_overrides: owned_map(&VETO_OVERRIDES),
        }
    }
}

fn owned_map(map: &phf::Map<&'static str, &'static str>) -> HashMap<String, String> {
    map.entries()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn tag_key(tag: &str) -> String {
    tag.trim().to_uppercase()
}

fn agent_key(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl Tables {
    /// Tables with no entries at all; only the built-in map pool remains.
    pub fn empty() -> Self {
        Self {
            team_tags: HashMap::new(),
            display_names: HashMap::new(),
            sponsor_prefixes: Vec::new(),
            generic_words: HashSet::new(),
            agent_aliases: HashMap::new(),
            agent_filler: [String::new()].into_iter().collect(),
            veto_overrides: HashMap::new(),
        }
    }

    /// The defaults with `overrides` applied on top.
    pub fn from_overrides(overrides: TableOverrides) -> Result<Self, TableError> {
        let mut tables = Self::default();
        tables.apply(overrides)?;
        Ok(tables)
    }

    pub fn apply(&mut self, overrides: TableOverrides) -> Result<(), TableError> {
        for (tag, full) in overrides.team_tags {
            check_entry("team_tags", &tag, &full)?;
            self.team_tags.insert(tag_key(&tag), full.trim().to_uppercase());
        }
        for (raw, display) in overrides.display_names {
            check_entry("display_names", &raw, &display)?;
            self.display_names
                .insert(raw.trim().to_owned(), display.trim().to_owned());
        }
        for prefix in overrides.sponsor_prefixes {
            check_key("sponsor_prefixes", &prefix)?;
            self.sponsor_prefixes.push(tag_key(&prefix));
        }
        for word in overrides.generic_words {
            check_key("generic_words", &word)?;
            self.generic_words.insert(tag_key(&word));
        }
        for (label, canonical) in overrides.agent_aliases {
            check_entry("agent_aliases", &label, &canonical)?;
            self.agent_aliases
                .insert(agent_key(&label), canonical.trim().to_owned());
        }
        for word in overrides.agent_filler {
            self.agent_filler.insert(agent_key(&word));
        }
        for (match_id, text) in overrides.veto_overrides {
            check_entry("veto_overrides", &match_id, &text)?;
            self.veto_overrides
                .insert(match_id.trim().to_owned(), text);
        }

        tracing::debug!(
            team_tags = self.team_tags.len(),
            agent_aliases = self.agent_aliases.len(),
            veto_overrides = self.veto_overrides.len(),
            "Applied table overrides"
        );

        Ok(())
    }

    pub fn with_team_tag(mut self, tag: &str, full: &str) -> Self {
        self.team_tags.insert(tag_key(tag), full.trim().to_uppercase());
        self
    }

    pub fn with_display_name(mut self, raw: &str, display: &str) -> Self {
        self.display_names
            .insert(raw.trim().to_owned(), display.trim().to_owned());
        self
    }

    pub fn with_sponsor_prefix(mut self, prefix: &str) -> Self {
        self.sponsor_prefixes.push(tag_key(prefix));
        self
    }

    pub fn with_generic_word(mut self, word: &str) -> Self {
        self.generic_words.insert(tag_key(word));
        self
    }

    pub fn with_agent_alias(mut self, label: &str, canonical: &str) -> Self {
        self.agent_aliases
            .insert(agent_key(label), canonical.trim().to_owned());
        self
    }

    pub fn with_agent_filler(mut self, word: &str) -> Self {
        self.agent_filler.insert(agent_key(word));
        self
    }

    pub fn with_veto_override(mut self, match_id: &str, text: &str) -> Self {
        self.veto_overrides
            .insert(match_id.trim().to_owned(), text.to_owned());
        self
    }

    /// Full (upper-cased) team name for a tag.
    pub fn team_tag(&self, tag: &str) -> Option<&str> {
        self.team_tags.get(&tag_key(tag)).map(String::as_str)
    }

    pub fn display_name(&self, raw: &str) -> Option<&str> {
        self.display_names.get(raw.trim()).map(String::as_str)
    }

    pub fn sponsor_prefixes(&self) -> impl Iterator<Item = &str> {
        self.sponsor_prefixes.iter().map(String::as_str)
    }

    /// `word` must already be upper-cased.
    pub fn is_generic_word(&self, word: &str) -> bool {
        self.generic_words.contains(word)
    }

    /// Canonical agent spelling for an already trimmed, lower-cased label.
    pub fn agent_alias(&self, key: &str) -> Option<&str> {
        self.agent_aliases.get(key).map(String::as_str)
    }

    pub fn is_agent_filler(&self, key: &str) -> bool {
        self.agent_filler.contains(key)
    }

    pub fn veto_override(&self, match_id: &str) -> Option<&str> {
        self.veto_overrides.get(match_id.trim()).map(String::as_str)
    }
}

fn check_key(table: &'static str, key: &str) -> Result<(), TableError> {
    if key.trim().is_empty() {
        return Err(TableError::EmptyKey { table });
    }
    Ok(())
}

fn check_entry(table: &'static str, key: &str, value: &str) -> Result<(), TableError> {
    check_key(table, key)?;
    if value.trim().is_empty() {
        return Err(TableError::EmptyValue {
            table,
            key: key.to_owned(),
        });
    }
    Ok(())
}
