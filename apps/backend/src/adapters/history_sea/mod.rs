//! SeaORM adapter for the history repository.
//!
//! The history tables are written by the gameplay server and only read
//! here, so queries are plain Postgres statements mapped through
//! `FromQueryResult` records rather than entity models. Timestamps are
//! selected as UTC epoch seconds.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement,
    Value,
};

use crate::domain::{
    BlackCardRow, DeckInfoRow, PlayedCardRow, RoundInfoRow, RoundSummaryRow, SessionBasics,
    SessionInfoRow, WhiteCardRow,
};
use crate::repos::HistoryRepo;

pub mod dto;

use dto::{
    BlackCardRecord, DeckInfoRecord, PlayedCardRecord, RoundInfoRecord, RoundSummaryRecord,
    SessionBasicsRecord, SessionInfoRecord, WhiteCardRecord,
};

const DECK_INFO_SQL: &str = r#"
    SELECT "name", white_count::int4 AS white_count, black_count::int4 AS black_count
    FROM deck
    WHERE id = $1
    ORDER BY uid DESC
    LIMIT 1
"#;

const DECK_WHITE_CARDS_SQL: &str = "SELECT text FROM white_card WHERE watermark = $1";

const DECK_BLACK_CARDS_SQL: &str = r#"
    SELECT text, draw::int2 AS draw, pick::int2 AS pick
    FROM black_card
    WHERE watermark = $1
"#;

const ROUND_INFO_SQL: &str = r#"
    SELECT bc.text, bc.watermark, bc.pick::int2 AS pick, bc.draw::int2 AS draw,
           EXTRACT(EPOCH FROM ((rc.meta).timestamp AT TIME ZONE 'UTC'))::int8 AS timestamp,
           rc.game_id::text AS game_id
    FROM round_complete rc
    JOIN black_card bc ON bc.uid = rc.black_card_uid
    WHERE rc.round_id = $1
"#;

const ROUND_PLAYS_SQL: &str = r#"
    SELECT jt.white_card_index::int4 AS white_card_index, wc.text, wc.watermark,
           COALESCE(rc.winner_session_id = jt.session_id, false) AS winner
    FROM round_complete rc
    JOIN round_complete__user_session__white_card jt ON jt.round_complete_uid = rc.uid
    JOIN white_card wc ON wc.uid = jt.white_card_uid
    WHERE rc.round_id = $1
    ORDER BY jt.session_id, jt.white_card_index ASC
"#;

const GAME_ROUNDS_SQL: &str = r#"
    SELECT bc.text, bc.watermark, bc.pick::int2 AS pick, bc.draw::int2 AS draw,
           rc.round_id::text AS round_id,
           EXTRACT(EPOCH FROM ((rc.meta).timestamp AT TIME ZONE 'UTC'))::int8 AS timestamp
    FROM round_complete rc
    JOIN black_card bc ON bc.uid = rc.black_card_uid
    WHERE rc.game_id = $1
    ORDER BY (rc.meta).timestamp DESC
"#;

const SESSION_INFO_SQL: &str = r#"
    SELECT EXTRACT(EPOCH FROM ((meta).timestamp AT TIME ZONE 'UTC'))::int8 AS timestamp,
           persistent_id
    FROM user_session
    WHERE session_id = $1
    ORDER BY (meta).timestamp DESC
    LIMIT 1
"#;

const SESSION_PLAYED_ROUNDS_SQL: &str = r#"
    SELECT bc.text, bc.watermark, bc.pick::int2 AS pick, bc.draw::int2 AS draw,
           rc.round_id::text AS round_id,
           EXTRACT(EPOCH FROM ((rc.meta).timestamp AT TIME ZONE 'UTC'))::int8 AS timestamp
    FROM round_complete__user_session__white_card jt
    JOIN round_complete rc ON rc.uid = jt.round_complete_uid
    JOIN black_card bc ON bc.uid = rc.black_card_uid
    WHERE jt.session_id = $1 AND jt.white_card_index = 0
    ORDER BY (rc.meta).timestamp DESC
"#;

const SESSION_JUDGED_ROUNDS_SQL: &str = r#"
    SELECT bc.text, bc.watermark, bc.pick::int2 AS pick, bc.draw::int2 AS draw,
           rc.round_id::text AS round_id,
           EXTRACT(EPOCH FROM ((rc.meta).timestamp AT TIME ZONE 'UTC'))::int8 AS timestamp
    FROM round_complete rc
    JOIN black_card bc ON bc.uid = rc.black_card_uid
    WHERE rc.judge_session_id = $1
    ORDER BY (rc.meta).timestamp DESC
"#;

const USER_SESSIONS_SQL: &str = r#"
    SELECT us.session_id,
           EXTRACT(EPOCH FROM ((us.meta).timestamp AT TIME ZONE 'UTC'))::int8 AS timestamp
    FROM user_session us
    WHERE us.persistent_id = $1
    ORDER BY (us.meta).timestamp DESC
"#;

/// Postgres-backed [`HistoryRepo`].
#[derive(Debug, Clone)]
pub struct SeaHistoryRepo {
    conn: DatabaseConnection,
}

impl SeaHistoryRepo {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn statement(sql: &str, id: Value) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [id])
    }

    async fn fetch_all<R, T>(&self, sql: &str, id: Value) -> Result<Vec<T>, DbErr>
    where
        R: FromQueryResult + Into<T>,
    {
        let records = R::find_by_statement(Self::statement(sql, id))
            .all(&self.conn)
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn fetch_one<R, T>(&self, sql: &str, id: Value) -> Result<Option<T>, DbErr>
    where
        R: FromQueryResult + Into<T>,
    {
        let record = R::find_by_statement(Self::statement(sql, id))
            .one(&self.conn)
            .await?;
        Ok(record.map(Into::into))
    }
}

#[async_trait]
impl HistoryRepo for SeaHistoryRepo {
    async fn deck_info(&self, deck_key: i64) -> Result<Option<DeckInfoRow>, DbErr> {
        self.fetch_one::<DeckInfoRecord, _>(DECK_INFO_SQL, deck_key.into())
            .await
    }

    async fn deck_white_cards(&self, watermark: &str) -> Result<Vec<WhiteCardRow>, DbErr> {
        self.fetch_all::<WhiteCardRecord, _>(DECK_WHITE_CARDS_SQL, watermark.into())
            .await
    }

    async fn deck_black_cards(&self, watermark: &str) -> Result<Vec<BlackCardRow>, DbErr> {
        self.fetch_all::<BlackCardRecord, _>(DECK_BLACK_CARDS_SQL, watermark.into())
            .await
    }

    async fn round_info(&self, round_id: &str) -> Result<Option<RoundInfoRow>, DbErr> {
        self.fetch_one::<RoundInfoRecord, _>(ROUND_INFO_SQL, round_id.into())
            .await
    }

    async fn round_plays(&self, round_id: &str) -> Result<Vec<PlayedCardRow>, DbErr> {
        self.fetch_all::<PlayedCardRecord, _>(ROUND_PLAYS_SQL, round_id.into())
            .await
    }

    async fn game_rounds(&self, game_id: &str) -> Result<Vec<RoundSummaryRow>, DbErr> {
        self.fetch_all::<RoundSummaryRecord, _>(GAME_ROUNDS_SQL, game_id.into())
            .await
    }

    async fn session_info(&self, session_id: &str) -> Result<Option<SessionInfoRow>, DbErr> {
        self.fetch_one::<SessionInfoRecord, _>(SESSION_INFO_SQL, session_id.into())
            .await
    }

    async fn session_played_rounds(
        &self,
        session_id: &str,
    ) -> Result<Vec<RoundSummaryRow>, DbErr> {
        self.fetch_all::<RoundSummaryRecord, _>(SESSION_PLAYED_ROUNDS_SQL, session_id.into())
            .await
    }

    async fn session_judged_rounds(
        &self,
        session_id: &str,
    ) -> Result<Vec<RoundSummaryRow>, DbErr> {
        self.fetch_all::<RoundSummaryRecord, _>(SESSION_JUDGED_ROUNDS_SQL, session_id.into())
            .await
    }

    async fn user_sessions(&self, persistent_id: &str) -> Result<Vec<SessionBasics>, DbErr> {
        self.fetch_all::<SessionBasicsRecord, _>(USER_SESSIONS_SQL, persistent_id.into())
            .await
    }

    async fn ping(&self) -> Result<(), DbErr> {
        self.conn
            .query_one(Statement::from_string(
                DatabaseBackend::Postgres,
                "SELECT 1 AS health_check",
            ))
            .await?;
        Ok(())
    }
}
