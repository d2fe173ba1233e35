use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storage::{
    dto::{
        fight::FightRecordEntry,
        fighter::{FighterFilter, FighterListResponse, FighterProfileResponse, FilterOptionsResponse},
        ranking::FighterRankingInfo,
    },
    error::Result,
    models::FightWithEvent,
    repository::{
        fight::{Corner, FightRepository},
        fighter::FighterRepository,
        ranking::RankingRepository,
    },
    services::fight_record,
};
use uuid::Uuid;

/// Get the fighter directory with filtering and pagination
pub async fn list_fighters(pool: &PgPool, filter: &FighterFilter) -> Result<FighterListResponse> {
    let repo = FighterRepository::new(pool);
    let (fighters, count) = repo.list(filter).await?;

    Ok(FighterListResponse { fighters, count })
}

/// Distinct nationalities and weight classes for the directory filters
pub async fn filter_options(pool: &PgPool) -> Result<FilterOptionsResponse> {
    let repo = FighterRepository::new(pool);
    let (nationalities, weight_classes) = tokio::try_join!(
        repo.distinct_nationalities(),
        repo.distinct_weight_classes()
    )?;

    Ok(FilterOptionsResponse {
        nationalities,
        weight_classes,
    })
}

/// Fighter profile with ranking entries and the most recent fights
pub async fn fighter_profile(
    pool: &PgPool,
    fighter_id: Uuid,
    now: DateTime<Utc>,
) -> Result<FighterProfileResponse> {
    let fighter_repo = FighterRepository::new(pool);
    let ranking_repo = RankingRepository::new(pool);

    let (fighter, rankings, fights) = tokio::try_join!(
        fighter_repo.find_by_id(fighter_id),
        ranking_repo.list_for_fighter(fighter_id),
        load_fights(pool, fighter_id)
    )?;

    let record = fight_record::fighter_record(fighter_id, fights, now);

    Ok(FighterProfileResponse {
        fighter: fighter.into(),
        rankings: rankings
            .into_iter()
            .filter_map(FighterRankingInfo::from_entry)
            .collect(),
        recent_fights: fight_record::initial_page(&record),
        total_fights: record.len(),
    })
}

/// Complete fight record of an existing fighter, most recent first
pub async fn fighter_fights(
    pool: &PgPool,
    fighter_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Vec<FightRecordEntry>> {
    let fighter_repo = FighterRepository::new(pool);

    let (_, fights) = tokio::try_join!(
        fighter_repo.find_by_id(fighter_id),
        load_fights(pool, fighter_id)
    )?;

    Ok(fight_record::fighter_record(fighter_id, fights, now))
}

/// Fights from both corners, read concurrently.
async fn load_fights(pool: &PgPool, fighter_id: Uuid) -> Result<Vec<FightWithEvent>> {
    let repo = FightRepository::new(pool);
    let (mut as_fighter1, as_fighter2) = tokio::try_join!(
        repo.list_for_fighter(fighter_id, Corner::Fighter1),
        repo.list_for_fighter(fighter_id, Corner::Fighter2)
    )?;

    as_fighter1.extend(as_fighter2);
    Ok(as_fighter1)
}
