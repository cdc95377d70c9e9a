//! Veto notes look like
//! `"Cloud9 ban Bind; Sentinels ban Split; Cloud9 pick Haven; ...; Bind remains"`.
//! Every clause that fits `<team> ban|pick[s] <map>` becomes an event, a
//! clause mentioning "remains" names the decider, anything else is commentary
//! and skipped.

use common::series::{VetoEvent, VetoKind};
use common::MapName;

use crate::tables::Tables;

static CLAUSE: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
    regex::Regex::new(r"(?i)^(?P<who>.+?)\s+(?P<verb>ban|pick)s?\s+(?P<map>[a-z]+)$")
        .expect("static pattern")
});

static FIRST_WORD: std::sync::LazyLock<regex::Regex> =
    std::sync::LazyLock::new(|| regex::Regex::new(r"[A-Za-z]+").expect("static pattern"));

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParsedVeto {
    pub events: Vec<VetoEvent>,
    pub decider: Option<MapName>,
}

impl ParsedVeto {
    /// The team that picked `map`, if the veto has a pick for it.
    pub fn picked_by(&self, map: MapName) -> Option<&str> {
        self.events
            .iter()
            .find(|e| e.kind == VetoKind::Pick && e.map == map)
            .and_then(|e| e.team.as_deref())
    }
}

/// Parses a veto note into ordered events.
///
/// Orders start at 1 and increase by one per stored event. Clauses naming a
/// map outside the pool are dropped without using up an order. Only the first
/// "remains" clause is taken as the decider.
#[tracing::instrument(skip(tables))]
pub fn parse(tables: &Tables, text: &str, left_full: &str, right_full: &str) -> ParsedVeto {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut result = ParsedVeto::default();
    let mut order = 1;

    for clause in text.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        if let Some(caps) = CLAUSE.captures(clause) {
            let kind = if caps["verb"].eq_ignore_ascii_case("ban") {
                VetoKind::Ban
            } else {
                VetoKind::Pick
            };
            let map = match crate::maps::parse_word(&caps["map"]) {
                Some(m) => m,
                None => continue,
            };
            let team = crate::teams::resolve(tables, &caps["who"], left_full, right_full);

            result.events.push(VetoEvent {
                order,
                kind,
                team: Some(team.to_owned()),
                map,
            });
            order += 1;
        } else if clause.to_lowercase().contains("remains") {
            if result.decider.is_some() {
                tracing::debug!(clause, "Ignoring additional decider clause");
                continue;
            }
            let map = match FIRST_WORD
                .find(clause)
                .and_then(|word| crate::maps::parse_word(word.as_str()))
            {
                Some(m) => m,
                None => continue,
            };

            result.decider = Some(map);
            result.events.push(VetoEvent {
                order,
                kind: VetoKind::Decider,
                team: None,
                map,
            });
            order += 1;
        } else {
            tracing::debug!(clause, "Skipping veto clause");
        }
    }

    result
}

/// Like [`parse`], but a hand-corrected note for `match_id` replaces the scraped text.
pub fn parse_for_match(
    tables: &Tables,
    match_id: Option<&str>,
    scraped: &str,
    left_full: &str,
    right_full: &str,
) -> ParsedVeto {
    let text = match match_id.and_then(|id| tables.veto_override(id)) {
        Some(corrected) => {
            tracing::info!(match_id, "Using veto override");
            corrected
        }
        None => scraped,
    };

    parse(tables, text, left_full, right_full)
}
