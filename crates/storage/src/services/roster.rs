//! Divisional rosters merged from the `fighter_rankings` table and the
//! legacy `fighters.rank` column.
//!
//! Ranking-table entries always win. The legacy column only contributes
//! fighters that have no ranking-table entry at all, so nobody is listed
//! twice and nobody disappears while the table is being back-filled.

use std::collections::HashSet;

use uuid::Uuid;

use crate::dto::ranking::{DivisionRoster, RosterEntry, RosterResponse};
use crate::error::Result;
use crate::models::{Fighter, FighterStatus, RankingWithFighter, WeightClass};
use crate::services::rank_ordering::{is_competitive_rank, sort_by_rank};

/// Division selected when no division has any ranked fighter.
pub const DEFAULT_DIVISION: WeightClass = WeightClass::Heavyweight;

pub fn assemble_roster(rankings: &[RankingWithFighter], legacy: &[Fighter]) -> RosterResponse {
    let mut by_division: Vec<Vec<RosterEntry>> = vec![Vec::new(); WeightClass::ALL.len()];

    for ranking in rankings {
        let entry = &ranking.entry;
        let Some(rank) = entry.rank.as_deref().filter(|r| is_competitive_rank(r)) else {
            continue;
        };
        let Some(weight_class) = entry.weight_class.as_deref().and_then(WeightClass::parse)
        else {
            continue;
        };
        let Some(name) = ranking.fighter_name.clone() else {
            continue;
        };

        by_division[weight_class.position()].push(RosterEntry {
            fighter_id: entry.fighter_id,
            name,
            nickname: ranking.fighter_nickname.clone(),
            wins: ranking.fighter_wins.unwrap_or(0),
            losses: ranking.fighter_losses.unwrap_or(0),
            draws: ranking.fighter_draws.unwrap_or(0),
            status: FighterStatus::from_label(ranking.fighter_status.as_deref()),
            rank: rank.to_string(),
            weight_class,
        });
    }

    let in_ranking_table: HashSet<Uuid> = rankings.iter().map(|r| r.entry.fighter_id).collect();

    for fighter in legacy {
        if in_ranking_table.contains(&fighter.id) {
            continue;
        }
        let Some(rank) = fighter.rank.as_deref().filter(|r| has_legacy_rank(r)) else {
            continue;
        };
        let Some(weight_class) = fighter.weight_class.as_deref().and_then(WeightClass::parse)
        else {
            continue;
        };

        by_division[weight_class.position()].push(RosterEntry {
            fighter_id: fighter.id,
            name: fighter.name.clone(),
            nickname: fighter.nickname.clone(),
            wins: fighter.wins,
            losses: fighter.losses,
            draws: fighter.draws,
            status: fighter.status(),
            rank: rank.to_string(),
            weight_class,
        });
    }

    let divisions: Vec<DivisionRoster> = WeightClass::ALL
        .into_iter()
        .zip(by_division)
        .map(|(weight_class, mut fighters)| {
            sort_by_rank(&mut fighters, |f| f.rank.as_str());
            DivisionRoster {
                weight_class,
                fighters,
            }
        })
        .collect();

    let active_divisions: Vec<WeightClass> = divisions
        .iter()
        .filter(|d| !d.fighters.is_empty())
        .map(|d| d.weight_class)
        .collect();

    let selected = active_divisions.first().copied().unwrap_or(DEFAULT_DIVISION);

    RosterResponse {
        divisions,
        active_divisions,
        selected,
    }
}

/// A rank source that failed to load contributes nothing; the roster is
/// still built from whatever else is available.
pub fn or_empty<T>(source: &str, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to load {} for roster: {}", source, e);
            Vec::new()
        }
    }
}

fn has_legacy_rank(rank: &str) -> bool {
    let rank = rank.trim();
    !rank.is_empty() && rank != "NR" && rank != "Unranked"
}
