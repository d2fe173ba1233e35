//! Display-ready fight lists: a fighter's record and an event card.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::fight::{BoutOutcome, CardCorner, CardFight, FightOutcome, FightRecordEntry};
use crate::models::{Fight, FightWithEvent};
use crate::services::rank_ordering::display_rank;
use crate::services::result_time::normalize_result_time;

/// Fights shown on a profile before "load more".
pub const INITIAL_FIGHTS_SHOWN: usize = 3;

const DRAW: &str = "Draw";
const NO_CONTEST: &str = "No Contest";

/// What the stored result of a fight amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Winner(Uuid),
    Draw,
    NoContest,
    Canceled,
}

/// Classifies a fight. `completed` says whether the fight should have a
/// result by now; a completed fight with neither a winner nor a draw/no
/// contest method was canceled. Incomplete fights without a result are
/// pending and yield `None`.
pub fn resolve(fight: &Fight, completed: bool) -> Option<Resolution> {
    let method = fight.result_method.as_deref().map(str::trim);
    let winner = consistent_winner(fight);

    if winner.is_none() && completed && method != Some(DRAW) && method != Some(NO_CONTEST) {
        return Some(Resolution::Canceled);
    }

    if let Some(winner) = winner {
        return Some(Resolution::Winner(winner));
    }

    match method {
        Some(DRAW) => Some(Resolution::Draw),
        Some(NO_CONTEST) => Some(Resolution::NoContest),
        _ => None,
    }
}

/// Builds a fighter's record, most recent event first. Fights whose event
/// date is missing sort last. A fight counts as completed once its event
/// date is before `now`.
pub fn fighter_record(
    fighter_id: Uuid,
    mut fights: Vec<FightWithEvent>,
    now: DateTime<Utc>,
) -> Vec<FightRecordEntry> {
    fights.sort_by_key(|f| std::cmp::Reverse(f.event_date.unwrap_or(DateTime::<Utc>::MIN_UTC)));

    fights
        .into_iter()
        .map(|row| record_entry(fighter_id, row, now))
        .collect()
}

/// Leading slice of a record for the initial profile view.
pub fn initial_page(record: &[FightRecordEntry]) -> Vec<FightRecordEntry> {
    record.iter().take(INITIAL_FIGHTS_SHOWN).cloned().collect()
}

/// Builds an event card in `fight_order`. Fights without an order go last.
pub fn event_card(mut fights: Vec<Fight>, event_completed: bool) -> Vec<CardFight> {
    fights.sort_by_key(|f| (f.fight_order.is_none(), f.fight_order));

    fights
        .into_iter()
        .map(|fight| {
            let outcome = resolve(&fight, event_completed).map(|r| match r {
                Resolution::Winner(_) => BoutOutcome::Decided,
                Resolution::Draw => BoutOutcome::Draw,
                Resolution::NoContest => BoutOutcome::NoContest,
                Resolution::Canceled => BoutOutcome::Canceled,
            });
            let winner_id = consistent_winner(&fight);

            CardFight {
                fight_id: fight.id,
                fight_order: fight.fight_order,
                fighter1: CardCorner {
                    fighter_id: fight.fighter1_id,
                    name: fight.fighter1_name,
                    rank: display_rank(fight.fighter1_rank.as_deref()),
                    was_champion: fight.fighter1_was_champion,
                },
                fighter2: CardCorner {
                    fighter_id: fight.fighter2_id,
                    name: fight.fighter2_name,
                    rank: display_rank(fight.fighter2_rank.as_deref()),
                    was_champion: fight.fighter2_was_champion,
                },
                weight_class: fight.weight_class,
                is_main_event: fight.is_main_event,
                was_title_fight: fight.was_title_fight,
                winner_id,
                outcome,
                method: fight.result_method,
                method_details: fight.result_method_details,
                round: fight.result_round,
                time: fight
                    .result_time
                    .as_deref()
                    .map(|t| normalize_result_time(t).to_string()),
            }
        })
        .collect()
}

fn record_entry(fighter_id: Uuid, row: FightWithEvent, now: DateTime<Utc>) -> FightRecordEntry {
    let completed = row.event_date.is_some_and(|date| date < now);
    let fight = row.fight;

    let result = resolve(&fight, completed).map(|r| match r {
        Resolution::Winner(winner) if winner == fighter_id => FightOutcome::Win,
        Resolution::Winner(_) => FightOutcome::Loss,
        Resolution::Draw => FightOutcome::Draw,
        Resolution::NoContest => FightOutcome::NoContest,
        Resolution::Canceled => FightOutcome::Canceled,
    });

    let is_fighter1 = fight.fighter1_id == Some(fighter_id);
    let (own_rank, opponent_id, opponent_name, opponent_rank) = if is_fighter1 {
        (
            fight.fighter1_rank,
            fight.fighter2_id,
            fight.fighter2_name,
            fight.fighter2_rank,
        )
    } else {
        (
            fight.fighter2_rank,
            fight.fighter1_id,
            fight.fighter1_name,
            fight.fighter1_rank,
        )
    };

    FightRecordEntry {
        fight_id: fight.id,
        event_id: fight.event_id,
        event_name: row.event_name,
        event_date: row.event_date,
        opponent_id,
        opponent_name,
        fighter_rank: display_rank(own_rank.as_deref()),
        opponent_rank: display_rank(opponent_rank.as_deref()),
        weight_class: fight.weight_class,
        is_main_event: fight.is_main_event,
        was_title_fight: fight.was_title_fight,
        result,
        method: fight.result_method,
        method_details: fight.result_method_details,
        round: fight.result_round,
        time: fight
            .result_time
            .as_deref()
            .map(|t| normalize_result_time(t).to_string()),
    }
}

/// The stored winner, provided it is one of the two fighters.
fn consistent_winner(fight: &Fight) -> Option<Uuid> {
    let winner = fight.winner_id?;
    if fight.fighter1_id == Some(winner) || fight.fighter2_id == Some(winner) {
        Some(winner)
    } else {
        tracing::warn!(
            "Fight {} names winner {} who is not on the bout",
            fight.id,
            winner
        );
        None
    }
}
