use chrono::{DateTime, NaiveDate, Utc};

use crate::types::User;

/// Date window for per-account statistics. Backend date parameters are ISO
/// calendar dates (`YYYY-MM-DD`), never timestamps.
#[derive(Debug, Clone)]
pub struct StatsWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StatsWindow {
    pub fn sdate(&self) -> String {
        self.start.to_string()
    }

    pub fn edate(&self) -> String {
        self.end.to_string()
    }
}

/// Default window for a user: from their last withdrawal if they have one,
/// else from account creation, both truncated to the calendar date; up to
/// the current date.
pub fn stats_window_for(user: &User, now: DateTime<Utc>) -> StatsWindow {
    let start = user
        .last_withdrawal_date
        .unwrap_or(user.created_at)
        .date_naive();

    StatsWindow {
        start,
        end: now.date_naive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user_created_at(created_at: DateTime<Utc>) -> User {
        User {
            email: "client@example.com".to_owned(),
            full_name: None,
            referral_code: None,
            is_approved_ib: false,
            commission: None,
            created_at,
            last_withdrawal_date: None,
            account_type: None,
            accounts: Vec::new(),
        }
    }

    #[test]
    fn test_window_defaults_to_creation_date() {
        let created = Utc.with_ymd_and_hms(2024, 3, 5, 23, 45, 12).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap();

        let window = stats_window_for(&user_created_at(created), now);

        assert_eq!(window.sdate(), "2024-03-05");
        assert_eq!(window.edate(), "2025-01-10");
    }

    #[test]
    fn test_window_prefers_last_withdrawal_date() {
        let created = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let withdrawn = Utc.with_ymd_and_hms(2024, 9, 17, 6, 30, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap();

        let mut user = user_created_at(created);
        user.last_withdrawal_date = Some(withdrawn);

        let window = stats_window_for(&user, now);

        assert_eq!(window.sdate(), "2024-09-17");
    }

    #[test]
    fn test_dates_carry_no_time_component() {
        let created = Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 59).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 1).unwrap();

        let window = stats_window_for(&user_created_at(created), now);

        assert_eq!(window.sdate().len(), 10);
        assert_eq!(window.edate().len(), 10);
    }
}
