use common::MapName;

static WORD: std::sync::LazyLock<regex::Regex> =
    std::sync::LazyLock::new(|| regex::Regex::new(r"[A-Za-z]+").expect("static pattern"));

/// Finds the map named in a free-text header label such as `"Bind PICK 41:02"`.
///
/// The first word that is a pool map wins. Labels without one yield `None`.
pub fn detect(label: &str) -> Option<MapName> {
    WORD.find_iter(label)
        .find_map(|word| word.as_str().parse::<MapName>().ok())
}

/// Parses a map token the way it appears in veto text: a single word, any case.
pub fn parse_word(word: &str) -> Option<MapName> {
    match word.parse::<MapName>() {
        Ok(map) => Some(map),
        Err(e) => {
            tracing::warn!(error = %e, "Dropping unknown map");
            None
        }
    }
}
