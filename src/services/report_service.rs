use crate::models::{ServiceError, SessionDetail, UserReportData};
use crate::repositories::SessionRepository;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;

pub struct ReportService {
    session_repository: Arc<dyn SessionRepository>,
}

/// Aggregated session activity for one calendar day.
pub struct DailyReport {
    pub date: NaiveDate,
    pub count: i64,
    pub users: Vec<UserReportData>,
}

impl ReportService {
    pub fn new(session_repository: Arc<dyn SessionRepository>) -> Self {
        Self { session_repository }
    }

    /// Groups all sessions created within the UTC calendar day by the user
    /// who recorded them. Sessions arrive oldest first, so user buckets keep
    /// first-occurrence order and per-bucket details stay chronological.
    pub async fn daily_report(&self, date: NaiveDate) -> Result<DailyReport, ServiceError> {
        let start = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ServiceError::InternalError("Invalid day start".to_string()))?
            .and_utc();
        let end = start + Duration::days(1);

        let sessions = self.session_repository.find_in_range(start, end).await?;
        let count = sessions.len() as i64;

        let mut users: Vec<UserReportData> = Vec::new();
        let mut bucket_index: HashMap<i64, usize> = HashMap::new();

        for session in sessions {
            let idx = match bucket_index.get(&session.user_id) {
                Some(idx) => *idx,
                None => {
                    users.push(UserReportData {
                        id: session.user_id,
                        name: session.user_name.clone(),
                        session_count: 0,
                        total_stars_earned: 0,
                        sessions: Vec::new(),
                    });
                    let idx = users.len() - 1;
                    bucket_index.insert(session.user_id, idx);
                    idx
                }
            };

            let bucket = &mut users[idx];
            bucket.session_count += 1;
            bucket.total_stars_earned += session.stars_earned;
            bucket.sessions.push(SessionDetail {
                stars_start: session.stars_start,
                stars_end: session.stars_end,
                stars_earned: session.stars_earned,
                created_at: session.created_at,
                purchased_pass: session.purchased_pass,
            });
        }

        Ok(DailyReport { date, count, users })
    }
}
