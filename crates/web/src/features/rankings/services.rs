use sqlx::PgPool;
use storage::{
    dto::ranking::RosterResponse,
    repository::{fighter::FighterRepository, ranking::RankingRepository},
    services::roster::{assemble_roster, or_empty},
};

/// Divisional rosters from both rank sources, read concurrently. A source
/// that fails is logged and skipped.
pub async fn get_roster(pool: &PgPool) -> RosterResponse {
    let ranking_repo = RankingRepository::new(pool);
    let fighter_repo = FighterRepository::new(pool);

    let (rankings, legacy) = tokio::join!(
        ranking_repo.list_with_fighters(),
        fighter_repo.list_legacy_ranked()
    );

    let rankings = or_empty("ranking table", rankings);
    let legacy = or_empty("legacy fighter ranks", legacy);

    assemble_roster(&rankings, &legacy)
}
