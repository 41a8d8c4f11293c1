use anyhow::Context as _;

use crate::database::Database;
use crate::model::profile::{LeaderboardEntry, MessageOutcome, MessageUpdate, UserProfile};
use ember_utils::text::truncate_chars;

/// XP granted per message once a profile exists.
pub const XP_PER_MESSAGE: i64 = 10;
/// A level-up triggers once `xp >= level * LEVEL_XP_STEP`.
pub const LEVEL_XP_STEP: i64 = 100;
/// Stored bios are capped at this many characters.
pub const BIO_MAX_CHARS: usize = 200;
/// Number of rows returned by the leaderboard query.
pub const LEADERBOARD_LIMIT: i64 = 5;

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    xp: i64,
    level: i64,
    messages: i64,
    bio: String,
}

/// Apply one message event to the ledger.
///
/// A user's very first message only creates their default profile; XP and the
/// message counter start accruing from the second message onward.
pub async fn record_message(db: &Database, user_id: u64) -> anyhow::Result<MessageOutcome> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let row: Option<(i64, i64, i64)> =
        sqlx::query_as("SELECT xp, level, messages FROM users WHERE user_id = ?")
            .bind(user_id_i64)
            .fetch_optional(db.pool())
            .await?;

    let Some((xp, level, messages)) = row else {
        sqlx::query("INSERT INTO users (user_id) VALUES (?)")
            .bind(user_id_i64)
            .execute(db.pool())
            .await?;
        return Ok(MessageOutcome::Created);
    };

    let xp = xp + XP_PER_MESSAGE;
    let messages = messages + 1;

    // Post-increment xp against the pre-increment level, and at most one level
    // per message even when xp overshoots the threshold.
    let leveled_up = xp >= level * LEVEL_XP_STEP;
    let level = if leveled_up { level + 1 } else { level };

    sqlx::query("UPDATE users SET xp = ?, level = ?, messages = ? WHERE user_id = ?")
        .bind(xp)
        .bind(level)
        .bind(messages)
        .bind(user_id_i64)
        .execute(db.pool())
        .await?;

    Ok(MessageOutcome::Updated(MessageUpdate {
        xp,
        level,
        messages,
        leveled_up,
    }))
}

/// Store a user's bio, truncated to [`BIO_MAX_CHARS`] characters.
///
/// Returns whether a profile existed; never creates one implicitly.
pub async fn set_bio(db: &Database, user_id: u64, bio: &str) -> anyhow::Result<bool> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;
    let stored = truncate_chars(bio, BIO_MAX_CHARS);

    let updated = sqlx::query("UPDATE users SET bio = ? WHERE user_id = ?")
        .bind(stored)
        .bind(user_id_i64)
        .execute(db.pool())
        .await?
        .rows_affected();

    Ok(updated > 0)
}

pub async fn get_profile(db: &Database, user_id: u64) -> anyhow::Result<Option<UserProfile>> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let row: Option<UserRow> =
        sqlx::query_as("SELECT user_id, xp, level, messages, bio FROM users WHERE user_id = ?")
            .bind(user_id_i64)
            .fetch_optional(db.pool())
            .await?;

    row.map(to_user_profile).transpose()
}

/// Top profiles by descending XP. Ties resolve to the lower user id so the
/// ordering stays deterministic.
pub async fn top_profiles(db: &Database, limit: i64) -> anyhow::Result<Vec<LeaderboardEntry>> {
    let rows: Vec<(i64, i64)> =
        sqlx::query_as("SELECT user_id, xp FROM users ORDER BY xp DESC, user_id ASC LIMIT ?")
            .bind(limit)
            .fetch_all(db.pool())
            .await?;

    rows.into_iter()
        .map(|(user_id, xp)| {
            Ok(LeaderboardEntry {
                user_id: u64::try_from(user_id).context("user_id row out of u64 range")?,
                xp,
            })
        })
        .collect()
}

fn to_user_profile(row: UserRow) -> anyhow::Result<UserProfile> {
    Ok(UserProfile {
        user_id: u64::try_from(row.user_id).context("user_id row out of u64 range")?,
        xp: row.xp,
        level: row.level,
        messages: row.messages,
        bio: row.bio,
    })
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::MIGRATOR;

    async fn test_db() -> Database {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        MIGRATOR.run(&pool).await.expect("migrations");
        Database::new(pool)
    }

    async fn seed(db: &Database, user_id: i64, xp: i64, level: i64, messages: i64) {
        sqlx::query("INSERT INTO users (user_id, xp, level, messages) VALUES (?, ?, ?, ?)")
            .bind(user_id)
            .bind(xp)
            .bind(level)
            .bind(messages)
            .execute(db.pool())
            .await
            .expect("seed row");
    }

    #[tokio::test]
    async fn first_message_creates_default_profile_without_xp() {
        let db = test_db().await;

        let outcome = record_message(&db, 42).await.unwrap();
        assert_eq!(outcome, MessageOutcome::Created);

        let profile = get_profile(&db, 42).await.unwrap().expect("profile exists");
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.level, 1);
        assert_eq!(profile.messages, 0);
        assert_eq!(profile.bio, "");
    }

    #[tokio::test]
    async fn subsequent_messages_increment_counters() {
        let db = test_db().await;
        record_message(&db, 7).await.unwrap();

        let outcome = record_message(&db, 7).await.unwrap();
        assert_eq!(
            outcome,
            MessageOutcome::Updated(MessageUpdate {
                xp: 10,
                level: 1,
                messages: 1,
                leveled_up: false,
            })
        );

        let outcome = record_message(&db, 7).await.unwrap();
        assert_eq!(
            outcome,
            MessageOutcome::Updated(MessageUpdate {
                xp: 20,
                level: 1,
                messages: 2,
                leveled_up: false,
            })
        );
    }

    #[tokio::test]
    async fn level_up_triggers_at_threshold() {
        let db = test_db().await;
        seed(&db, 1, 90, 1, 9).await;

        let outcome = record_message(&db, 1).await.unwrap();
        assert_eq!(
            outcome,
            MessageOutcome::Updated(MessageUpdate {
                xp: 100,
                level: 2,
                messages: 10,
                leveled_up: true,
            })
        );
    }

    #[tokio::test]
    async fn level_up_grants_one_level_even_with_surplus_xp() {
        let db = test_db().await;
        seed(&db, 1, 990, 1, 99).await;

        let outcome = record_message(&db, 1).await.unwrap();
        assert_eq!(
            outcome,
            MessageOutcome::Updated(MessageUpdate {
                xp: 1000,
                level: 2,
                messages: 100,
                leveled_up: true,
            })
        );

        // Next message: xp 1010 >= 2 * 100, another single step.
        let outcome = record_message(&db, 1).await.unwrap();
        assert_eq!(
            outcome,
            MessageOutcome::Updated(MessageUpdate {
                xp: 1010,
                level: 3,
                messages: 101,
                leveled_up: true,
            })
        );
    }

    #[tokio::test]
    async fn set_bio_truncates_long_input() {
        let db = test_db().await;
        record_message(&db, 5).await.unwrap();

        let long = "x".repeat(250);
        assert!(set_bio(&db, 5, &long).await.unwrap());

        let profile = get_profile(&db, 5).await.unwrap().unwrap();
        assert_eq!(profile.bio.chars().count(), 200);
    }

    #[tokio::test]
    async fn set_bio_keeps_short_input_unchanged() {
        let db = test_db().await;
        record_message(&db, 5).await.unwrap();

        assert!(set_bio(&db, 5, "hello there").await.unwrap());

        let profile = get_profile(&db, 5).await.unwrap().unwrap();
        assert_eq!(profile.bio, "hello there");
    }

    #[tokio::test]
    async fn set_bio_is_a_noop_without_a_profile() {
        let db = test_db().await;

        assert!(!set_bio(&db, 999, "ghost").await.unwrap());
        assert!(get_profile(&db, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_profile_is_idempotent() {
        let db = test_db().await;
        seed(&db, 3, 40, 1, 4).await;

        let first = get_profile(&db, 3).await.unwrap();
        let second = get_profile(&db, 3).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn leaderboard_orders_by_xp_descending() {
        let db = test_db().await;
        seed(&db, 1, 50, 1, 5).await;
        seed(&db, 2, 200, 2, 20).await;
        seed(&db, 3, 10, 1, 1).await;

        let top = top_profiles(&db, LEADERBOARD_LIMIT).await.unwrap();
        let pairs: Vec<(u64, i64)> = top.iter().map(|e| (e.user_id, e.xp)).collect();
        assert_eq!(pairs, vec![(2, 200), (1, 50), (3, 10)]);
    }

    #[tokio::test]
    async fn leaderboard_respects_limit_and_breaks_ties_by_user_id() {
        let db = test_db().await;
        for id in 1..=6 {
            seed(&db, id, 100, 1, 10).await;
        }

        let top = top_profiles(&db, LEADERBOARD_LIMIT).await.unwrap();
        let ids: Vec<u64> = top.iter().map(|e| e.user_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
