use common::raw::{RawMap, RawSeries};
use common::series::{MapResult, SeriesRecord, SeriesResult};

use crate::tables::Tables;
use crate::veto::ParsedVeto;

#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    #[error("series has no team names")]
    MissingTeams,
}

/// Turns one page's raw values into a [`SeriesRecord`].
///
/// Maps whose label names no pool map are dropped, as are repeats of an
/// already seen `(map, left score, right score)`; callers can compare the
/// number of maps in and out to notice.
#[tracing::instrument(skip_all, fields(match_id = raw.match_id.as_deref()))]
pub fn build(tables: &Tables, raw: &RawSeries) -> Result<SeriesRecord, SeriesError> {
    let left = crate::teams::clean_display_name(tables, &raw.left);
    let right = crate::teams::clean_display_name(tables, &raw.right);
    if left.is_empty() && right.is_empty() {
        return Err(SeriesError::MissingTeams);
    }

    let veto = crate::veto::parse_for_match(
        tables,
        raw.match_id.as_deref(),
        &raw.veto_text,
        &left,
        &right,
    );

    let mut seen = std::collections::HashSet::new();
    let mut maps = Vec::with_capacity(raw.maps.len());
    for raw_map in raw.maps.iter() {
        let result = match map_result(tables, raw_map, &veto) {
            Some(r) => r,
            None => continue,
        };

        if !seen.insert((result.map, result.left_score, result.right_score)) {
            tracing::debug!(map = %result.map, "Skipping duplicate map");
            continue;
        }
        maps.push(result);
    }

    let result = tally(&maps, &left, &right);
    let date = raw.date.as_deref().and_then(crate::dates::normalize);

    tracing::debug!(
        events = veto.events.len(),
        maps_in = raw.maps.len(),
        maps_out = maps.len(),
        "Built series"
    );

    Ok(SeriesRecord {
        match_id: raw.match_id.clone(),
        date,
        left,
        right,
        veto: veto.events.clone(),
        decider_map: veto.decider,
        maps,
        result,
    })
}

fn map_result(tables: &Tables, raw: &RawMap, veto: &ParsedVeto) -> Option<MapResult> {
    let map = match crate::maps::detect(&raw.label) {
        Some(m) => m,
        None => {
            tracing::warn!(label = %raw.label, "Dropping map with unknown name");
            return None;
        }
    };

    let summary = crate::rounds::classify(&raw.rounds);

    let left_score = raw.left_score.unwrap_or(summary.left_score);
    let right_score = raw.right_score.unwrap_or(summary.right_score);
    if !raw.rounds.is_empty()
        && (left_score, right_score) != (summary.left_score, summary.right_score)
    {
        tracing::warn!(
            %map,
            left_score,
            right_score,
            round_left = summary.left_score,
            round_right = summary.right_score,
            "Final score disagrees with round timeline"
        );
    }

    Some(MapResult {
        game_id: raw.game_id,
        map,
        left_score,
        right_score,
        picked_by: veto.picked_by(map).map(str::to_owned),
        left_agents: crate::agents::dedupe(tables, &raw.left_agents),
        right_agents: crate::agents::dedupe(tables, &raw.right_agents),
        pistols: summary.pistols,
        sides: summary.sides,
    })
}

/// Counts map wins per side. A drawn map counts for nobody.
pub fn tally(maps: &[MapResult], left: &str, right: &str) -> SeriesResult {
    let left_wins = maps.iter().filter(|m| m.left_score > m.right_score).count() as u32;
    let right_wins = maps.iter().filter(|m| m.right_score > m.left_score).count() as u32;

    let winner = match left_wins.cmp(&right_wins) {
        std::cmp::Ordering::Greater => Some(left.to_owned()),
        std::cmp::Ordering::Less => Some(right.to_owned()),
        std::cmp::Ordering::Equal => None,
    };

    SeriesResult {
        left_wins,
        right_wins,
        winner,
    }
}
