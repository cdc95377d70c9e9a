//! Working out which of the two teams a short token refers to.
//!
//! Veto notes and headers abbreviate team names inconsistently ("C9",
//! "100T", "Trace", "Team Liquid"). Resolution runs an ordered cascade of
//! [`Strategy`] checks, each tried against the left name and then the right
//! name. The first hit decides. If nothing hits, the result still lands on one
//! of the two teams so downstream processing never stalls on a noisy token;
//! [`resolve_with_strategy`] reports which tier decided for callers that want
//! to flag low-confidence resolutions.

use common::Side;

use crate::tables::Tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The token is a known tag whose full name overlaps the team name.
    Alias,
    /// The token is a delimited word (or word run) of the team name.
    WholeWord,
    Prefix,
    Substring,
    /// The token starts with digits that appear in the team name ("100T").
    NumericPrefix,
    /// The token is the team name's initialism ("EG").
    Initialism,
    /// The first word of the team name starts with the token's first three characters.
    FirstWord,
    /// Nothing matched.
    Fallback,
}

impl Strategy {
    /// The cascade in priority order. [`Strategy::Fallback`] is what remains when all of these miss.
    pub const CASCADE: [Strategy; 7] = [
        Self::Alias,
        Self::WholeWord,
        Self::Prefix,
        Self::Substring,
        Self::NumericPrefix,
        Self::Initialism,
        Self::FirstWord,
    ];

    fn matches(self, tables: &Tables, token: &Token, name: &str) -> bool {
        if name.is_empty() || token.normalized.is_empty() {
            return false;
        }

        match self {
            Self::Alias => token.alias.as_deref().is_some_and(|alias| {
                let alias = normalize_name(tables, alias);
                !alias.is_empty() && (alias.contains(name) || name.contains(alias.as_str()))
            }),
            Self::WholeWord => format!(" {name} ").contains(&format!(" {} ", token.normalized)),
            Self::Prefix => name.starts_with(token.normalized.as_str()),
            Self::Substring => name.contains(token.normalized.as_str()),
            Self::NumericPrefix => {
                let digits: String = token
                    .normalized
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                !digits.is_empty() && name.contains(digits.as_str())
            }
            Self::Initialism => {
                let initials: String = name
                    .split_whitespace()
                    .filter_map(|word| word.chars().next())
                    .collect();
                initials == token.normalized
            }
            Self::FirstWord => {
                let head: String = token.normalized.chars().take(3).collect();
                name.split_whitespace()
                    .next()
                    .is_some_and(|first| first.starts_with(head.as_str()))
            }
            Self::Fallback => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    pub side: Side,
    pub strategy: Strategy,
}

impl Resolution {
    pub fn team<'a>(&self, left_full: &'a str, right_full: &'a str) -> &'a str {
        match self.side {
            Side::Left => left_full,
            Side::Right => right_full,
        }
    }
}

struct Token {
    /// Trimmed and upper-cased, otherwise untouched.
    raw: String,
    normalized: String,
    alias: Option<String>,
}

impl Token {
    fn new(tables: &Tables, token: &str) -> Self {
        let raw = token.trim().to_uppercase();
        let normalized = normalize_name(tables, token);
        let alias = tables
            .team_tag(&raw)
            .or_else(|| tables.team_tag(&normalized))
            .map(str::to_owned);

        Self {
            raw,
            normalized,
            alias,
        }
    }
}

/// Reduces a team name to the form every strategy compares against.
///
/// Applies the display-name table, keeps only the alias of a `Sponsor Team
/// (Team)` style header, drops known sponsor prefixes, upper-cases, removes
/// punctuation and strips generic words like "TEAM" or "ESPORTS" (unless the
/// name consists of nothing else).
pub fn normalize_name(tables: &Tables, full: &str) -> String {
    let full = full.trim();
    let mut name = tables.display_name(full).unwrap_or(full).to_owned();

    if let Some(inner) = trailing_parenthetical(&name) {
        name = inner.to_owned();
    }

    let mut name: String = name
        .to_uppercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    name = name.split_whitespace().collect::<Vec<_>>().join(" ");

    for prefix in tables.sponsor_prefixes() {
        if let Some(rest) = name.strip_prefix(prefix) {
            if rest.starts_with(' ') && !rest.trim().is_empty() {
                name = rest.trim().to_owned();
                break;
            }
        }
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    let kept: Vec<&str> = words
        .iter()
        .copied()
        .filter(|word| !tables.is_generic_word(word))
        .collect();

    if kept.is_empty() {
        words.join(" ")
    } else {
        kept.join(" ")
    }
}

fn trailing_parenthetical(name: &str) -> Option<&str> {
    let inner = name.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let alias = inner[open + 1..].trim();
    if alias.is_empty() || inner[..open].trim().is_empty() {
        return None;
    }
    Some(alias)
}

/// Cleans a header name for display: known sponsor forms are replaced and
/// whitespace is collapsed. Casing is left alone.
pub fn clean_display_name(tables: &Tables, raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    tables
        .display_name(&collapsed)
        .map(str::to_owned)
        .unwrap_or(collapsed)
}

/// Decides which team `token` refers to and which strategy decided it.
///
/// # Panics
/// If both full names are blank. A series always has two named teams, so this
/// is a caller bug rather than noisy input.
pub fn resolve_with_strategy(
    tables: &Tables,
    token: &str,
    left_full: &str,
    right_full: &str,
) -> Resolution {
    assert!(
        !(left_full.trim().is_empty() && right_full.trim().is_empty()),
        "team resolution needs at least one team name"
    );

    let token = Token::new(tables, token);
    let left = normalize_name(tables, left_full);
    let right = normalize_name(tables, right_full);

    for strategy in Strategy::CASCADE {
        for (side, name) in [(Side::Left, &left), (Side::Right, &right)] {
            if strategy.matches(tables, &token, name) {
                tracing::trace!(token = %token.raw, ?side, ?strategy, "Resolved team token");
                return Resolution { side, strategy };
            }
        }
    }

    let raw = token.raw.as_str();
    let side = if !raw.is_empty() && !left.starts_with(raw) && right.starts_with(raw) {
        Side::Right
    } else {
        Side::Left
    };

    tracing::debug!(
        token = %token.raw,
        left = %left,
        right = %right,
        ?side,
        "No strategy matched team token, falling back"
    );

    Resolution {
        side,
        strategy: Strategy::Fallback,
    }
}

pub fn resolve_side(tables: &Tables, token: &str, left_full: &str, right_full: &str) -> Side {
    resolve_with_strategy(tables, token, left_full, right_full).side
}

/// Returns whichever of the two full names `token` refers to.
pub fn resolve<'a>(tables: &Tables, token: &str, left_full: &'a str, right_full: &'a str) -> &'a str {
    resolve_with_strategy(tables, token, left_full, right_full).team(left_full, right_full)
}

/// Loose equality of two display names, used to line up the page's top and
/// bottom rows with the series' left and right teams.
pub fn same_team(tables: &Tables, a: &str, b: &str) -> bool {
    let a = normalize_name(tables, a);
    let b = normalize_name(tables, b);

    if a.is_empty() || b.is_empty() {
        return a == b;
    }
    if a == b || a.contains(b.as_str()) || b.contains(a.as_str()) {
        return true;
    }

    let a_words: std::collections::HashSet<&str> = a.split_whitespace().collect();
    let b_words: std::collections::HashSet<&str> = b.split_whitespace().collect();
    let shared = a_words.intersection(&b_words).count();
    let smaller = a_words.len().min(b_words.len());

    shared > 0 && shared * 2 >= smaller
}
