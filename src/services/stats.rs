//! Admin statistics service

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::Row;

use crate::{
    api::stats::{GuestMovements, MonthlyEntry, StatsFilter, StatsResponse},
    error::AppResult,
    models::{profile::Profile, reservation::Reservation},
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Build the WHERE clause for the optional check-in window and status
    /// filter. Parameters are numbered in the fixed order from, to, status.
    fn filter_clause(filter: &StatsFilter) -> String {
        let mut conditions = vec!["TRUE".to_string()];
        let mut idx = 0;

        if filter.from.is_some() {
            idx += 1;
            conditions.push(format!("check_in >= ${}", idx));
        }
        if filter.to.is_some() {
            idx += 1;
            conditions.push(format!("check_in <= ${}", idx));
        }
        if filter.status.is_some() {
            idx += 1;
            conditions.push(format!("status = ${}", idx));
        }

        conditions.join(" AND ")
    }

    /// Aggregate revenue, guest and reservation counts plus the monthly
    /// series. Cancelled reservations never contribute to revenue or
    /// guest totals.
    pub async fn get_stats(&self, filter: &StatsFilter) -> AppResult<StatsResponse> {
        let pool = &self.repository.pool;
        let clause = Self::filter_clause(filter);

        let totals_row = {
            let q = format!(
                r#"SELECT COALESCE(SUM(total_price), 0) AS revenue,
                          COALESCE(SUM(guests), 0)::bigint AS guests
                   FROM reservations
                   WHERE status <> 'cancelled' AND {}"#,
                clause
            );
            let mut query = sqlx::query(&q);
            if let Some(from) = filter.from {
                query = query.bind(from);
            }
            if let Some(to) = filter.to {
                query = query.bind(to);
            }
            if let Some(status) = filter.status {
                query = query.bind(status);
            }
            query.fetch_one(pool).await?
        };
        let revenue: Decimal = totals_row.get("revenue");
        let guests: i64 = totals_row.get("guests");

        let active_reservations: i64 = {
            let q = format!(
                "SELECT COUNT(*) FROM reservations WHERE status = 'confirmed' AND {}",
                clause
            );
            let mut query = sqlx::query_scalar::<_, i64>(&q);
            if let Some(from) = filter.from {
                query = query.bind(from);
            }
            if let Some(to) = filter.to {
                query = query.bind(to);
            }
            if let Some(status) = filter.status {
                query = query.bind(status);
            }
            query.fetch_one(pool).await?
        };

        let total_reservations: i64 = {
            let q = format!("SELECT COUNT(*) FROM reservations WHERE {}", clause);
            let mut query = sqlx::query_scalar::<_, i64>(&q);
            if let Some(from) = filter.from {
                query = query.bind(from);
            }
            if let Some(to) = filter.to {
                query = query.bind(to);
            }
            if let Some(status) = filter.status {
                query = query.bind(status);
            }
            query.fetch_one(pool).await?
        };

        let total_users = self.repository.profiles.count().await?;

        let monthly = {
            let q = format!(
                r#"SELECT to_char(date_trunc('month', check_in), 'YYYY-MM') AS month,
                          COALESCE(SUM(total_price), 0) AS revenue,
                          COALESCE(SUM(guests), 0)::bigint AS guests
                   FROM reservations
                   WHERE status <> 'cancelled' AND {}
                   GROUP BY 1
                   ORDER BY 1"#,
                clause
            );
            let mut query = sqlx::query(&q);
            if let Some(from) = filter.from {
                query = query.bind(from);
            }
            if let Some(to) = filter.to {
                query = query.bind(to);
            }
            if let Some(status) = filter.status {
                query = query.bind(status);
            }
            query
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(|row| MonthlyEntry {
                    month: row.get("month"),
                    revenue: row.get("revenue"),
                    guests: row.get("guests"),
                })
                .collect()
        };

        Ok(StatsResponse {
            revenue,
            guests,
            active_reservations,
            total_reservations,
            total_users,
            monthly,
        })
    }

    /// Upcoming confirmed arrivals and recent past stays for the admin
    /// guests tab.
    pub async fn guest_movements(&self) -> AppResult<GuestMovements> {
        let pool = &self.repository.pool;
        let today = Utc::now().date_naive();

        let upcoming = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE status = 'confirmed' AND check_in >= $1
            ORDER BY check_in
            "#,
        )
        .bind(today)
        .fetch_all(pool)
        .await?;

        let recent = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE status <> 'cancelled' AND check_out < $1
            ORDER BY check_out DESC
            LIMIT 20
            "#,
        )
        .bind(today)
        .fetch_all(pool)
        .await?;

        Ok(GuestMovements { upcoming, recent })
    }

    /// Registered user profiles (read-only)
    pub async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        self.repository.profiles.list().await
    }
}
