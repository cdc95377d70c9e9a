use common::Agent;

use crate::tables::Tables;

/// Maps a scraped agent label to its canonical spelling.
///
/// Labels that only bleed in from surrounding markup (column headers, "all")
/// yield `None`. A label that is not in the alias table is assumed to be an
/// agent released after the table was written and is passed through with each
/// word capitalized.
pub fn canonicalize(tables: &Tables, raw: &str) -> Option<Agent> {
    let key = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if key.is_empty() || tables.is_agent_filler(&key) {
        return None;
    }

    match tables.agent_alias(&key) {
        Some(canonical) => Some(Agent::new(canonical)),
        None => {
            tracing::debug!(label = raw, "Unknown agent label, passing through");
            Some(Agent::new(capitalize_words(&key)))
        }
    }
}

/// Canonicalizes every label and keeps the first occurrence of each agent.
pub fn dedupe<I, S>(tables: &Tables, raws: I) -> Vec<Agent>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    raws.into_iter()
        .filter_map(|raw| canonicalize(tables, raw.as_ref()))
        .filter(|agent| seen.insert(agent.clone()))
        .collect()
}

fn capitalize_words(key: &str) -> String {
    key.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
