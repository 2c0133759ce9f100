use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};
use uuid::Uuid;

use crate::db::models::{reputation_quest::ReputationQuest, user::User};
use crate::db::schema::*;

#[derive(Queryable, Identifiable, Associations, Debug)]
#[belongs_to(User, foreign_key = "user_address")]
#[belongs_to(ReputationQuest, foreign_key = "quest_id")]
pub struct UserReputationQuest {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user_address: String,
    pub quest_id: Uuid,
    pub progress: i64,
    pub is_completed: bool,
    pub completed_at: Option<NaiveDateTime>,
}

impl UserReputationQuest {
    pub fn get_all_for_user(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_address: &str,
    ) -> Result<Vec<(UserReputationQuest, ReputationQuest)>, diesel::result::Error> {
        user_reputation_quests::table
            .filter(user_reputation_quests::dsl::user_address.eq(user_address))
            .inner_join(reputation_quests::table)
            .order_by(user_reputation_quests::dsl::updated_at.desc())
            .load(conn)
    }

    /// Upsert keyed on the (user, quest) unique pair. Progress is
    /// monotonic: a report lower than the stored value keeps the stored
    /// value. Completion is recorded once the quest target is reached and
    /// is never reverted.
    pub fn upsert_progress(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_address: &str,
        quest: &ReputationQuest,
        progress: i64,
    ) -> Result<UserReputationQuest, diesel::result::Error> {
        conn.transaction::<UserReputationQuest, diesel::result::Error, _>(|| {
            let existing: Option<UserReputationQuest> = user_reputation_quests::table
                .filter(user_reputation_quests::dsl::user_address.eq(user_address))
                .filter(user_reputation_quests::dsl::quest_id.eq(&quest.id))
                .for_update()
                .first(conn)
                .optional()?;

            let now = chrono::Utc::now().naive_utc();

            match existing {
                Some(stored) => {
                    let (progress, is_completed, completed_at) =
                        merge_progress(&stored, progress, quest.target_value, now);
                    diesel::update(user_reputation_quests::table.find(&stored.id))
                        .set((
                            user_reputation_quests::dsl::progress.eq(progress),
                            user_reputation_quests::dsl::is_completed.eq(is_completed),
                            user_reputation_quests::dsl::completed_at.eq(completed_at),
                        ))
                        .get_result(conn)
                }
                None => {
                    let is_completed = progress >= quest.target_value;
                    let new_progress = NewUserReputationQuest {
                        user_address: user_address.to_owned(),
                        quest_id: quest.id,
                        progress,
                        is_completed,
                        completed_at: if is_completed { Some(now) } else { None },
                    };

                    diesel::insert_into(user_reputation_quests::table)
                        .values(&new_progress)
                        .get_result(conn)
                }
            }
        })
    }

    pub fn count_completed_for_user(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_address: &str,
    ) -> Result<i64, diesel::result::Error> {
        user_reputation_quests::table
            .filter(user_reputation_quests::dsl::user_address.eq(user_address))
            .filter(user_reputation_quests::dsl::is_completed.eq(true))
            .count()
            .get_result(conn)
    }
}

// Merge of a stored progress row with a new report: progress is monotonic
// and a recorded completion (flag and timestamp) is never reverted.
fn merge_progress(
    stored: &UserReputationQuest,
    progress: i64,
    target_value: i64,
    now: NaiveDateTime,
) -> (i64, bool, Option<NaiveDateTime>) {
    let progress = std::cmp::max(stored.progress, progress);
    let is_completed = stored.is_completed || progress >= target_value;
    let completed_at = stored
        .completed_at
        .or(if is_completed { Some(now) } else { None });

    (progress, is_completed, completed_at)
}

#[derive(Insertable, Debug)]
#[table_name = "user_reputation_quests"]
pub struct NewUserReputationQuest {
    pub user_address: String,
    pub quest_id: Uuid,
    pub progress: i64,
    pub is_completed: bool,
    pub completed_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod test {
    use super::*;

    fn stored_progress(progress: i64, is_completed: bool) -> UserReputationQuest {
        let timestamp = NaiveDateTime::from_timestamp(1_700_000_000, 0);
        UserReputationQuest {
            id: Uuid::new_v4(),
            created_at: timestamp,
            updated_at: timestamp,
            user_address: "0xc0ffee".to_owned(),
            quest_id: Uuid::new_v4(),
            progress,
            is_completed,
            completed_at: if is_completed { Some(timestamp) } else { None },
        }
    }

    #[test]
    fn test_lower_report_keeps_stored_progress() -> () {
        let stored = stored_progress(40, false);
        let now = NaiveDateTime::from_timestamp(1_700_000_100, 0);

        let (progress, is_completed, completed_at) = merge_progress(&stored, 25, 100, now);
        assert_eq!(progress, 40);
        assert!(!is_completed);
        assert_eq!(completed_at, None);
    }

    #[test]
    fn test_completion_is_recorded_once() -> () {
        let stored = stored_progress(40, false);
        let now = NaiveDateTime::from_timestamp(1_700_000_100, 0);

        let (progress, is_completed, completed_at) = merge_progress(&stored, 100, 100, now);
        assert_eq!(progress, 100);
        assert!(is_completed);
        assert_eq!(completed_at, Some(now));
    }

    #[test]
    fn test_completion_is_never_reverted() -> () {
        let stored = stored_progress(120, true);
        let original_completed_at = stored.completed_at;
        let now = NaiveDateTime::from_timestamp(1_700_000_100, 0);

        let (progress, is_completed, completed_at) = merge_progress(&stored, 10, 100, now);
        assert_eq!(progress, 120);
        assert!(is_completed);
        assert_eq!(completed_at, original_completed_at);
    }
}
