use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Fight, FightWithEvent};

const FIGHT_COLUMNS: &str = r#"
    f.id, f.event_id, f.fighter1_id, f.fighter2_id,
    f.fighter1_name, f.fighter2_name, f.fighter1_rank, f.fighter2_rank,
    COALESCE(f.fighter1_was_champion, false) AS fighter1_was_champion,
    COALESCE(f.fighter2_was_champion, false) AS fighter2_was_champion,
    f.weight_class,
    COALESCE(f.is_main_event, false) AS is_main_event,
    COALESCE(f.was_title_fight, false) AS was_title_fight,
    f.fight_order, f.winner_id, f.result_method, f.result_method_details,
    f.result_round, f.result_time
"#;

/// Which corner of a bout a fighter is listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Fighter1,
    Fighter2,
}

impl Corner {
    fn column(&self) -> &'static str {
        match self {
            Self::Fighter1 => "f.fighter1_id",
            Self::Fighter2 => "f.fighter2_id",
        }
    }
}

pub struct FightRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FightRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fights where the fighter is listed in the given corner, with the
    /// parent event's name and date.
    pub async fn list_for_fighter(
        &self,
        fighter_id: Uuid,
        corner: Corner,
    ) -> Result<Vec<FightWithEvent>> {
        let mut query = fighter_fights_query(corner);
        query.push_bind(fighter_id);

        let fights = query.build_query_as().fetch_all(self.pool).await?;

        Ok(fights)
    }

    /// The card of one event in running order.
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Fight>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(FIGHT_COLUMNS);
        query.push(" FROM fights f WHERE f.event_id = ");
        query.push_bind(event_id);
        query.push(" ORDER BY f.fight_order ASC NULLS LAST");

        let fights = query.build_query_as().fetch_all(self.pool).await?;

        Ok(fights)
    }
}

fn fighter_fights_query(corner: Corner) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("SELECT ");
    query.push(FIGHT_COLUMNS);
    query.push(
        r#",
            COALESCE(e.name, '') AS event_name,
            e.event_date AS event_date
        FROM fights f
        LEFT JOIN events e ON e.id = f.event_id
        WHERE "#,
    );
    query.push(corner.column());
    query.push(" = ");
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_selects_column() {
        let mut query = fighter_fights_query(Corner::Fighter2);
        query.push_bind(Uuid::nil());
        let sql = query.sql();
        assert!(sql.contains("LEFT JOIN events e"));
        assert!(sql.trim_end().ends_with("WHERE f.fighter2_id = $1"));
    }
}
