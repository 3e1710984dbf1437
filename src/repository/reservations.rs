//! Reservations repository for database operations

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    booking::Stay,
    error::{AppError, AppResult},
    models::reservation::{NewReservation, Reservation, ReservationQuery, ReservationStatus},
};

/// Exclusion constraint on non-cancelled daterange(check_in, check_out),
/// the database-level guard against double bookings.
const OVERLAP_CONSTRAINT: &str = "reservations_no_overlap";

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get reservation by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
    }

    /// True iff no non-cancelled reservation overlaps the half-open
    /// candidate interval. `exclude` skips one reservation for the
    /// edit-in-place case.
    pub async fn check_availability(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude: Option<Uuid>,
    ) -> AppResult<bool> {
        let available: bool = sqlx::query_scalar(
            r#"
            SELECT NOT EXISTS(
                SELECT 1 FROM reservations
                WHERE status <> 'cancelled'
                  AND check_in < $2
                  AND check_out > $1
                  AND ($3::uuid IS NULL OR id <> $3)
            )
            "#,
        )
        .bind(check_in)
        .bind(check_out)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(available)
    }

    /// Insert a reservation. A lost race against a concurrent booking
    /// trips the overlap exclusion constraint and surfaces as a conflict,
    /// identical to a failed pre-check.
    pub async fn create(&self, new: &NewReservation) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations
                (user_id, user_name, check_in, check_out, guests, pets,
                 total_price, status, payment_method)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(new.user_id)
        .bind(&new.user_name)
        .bind(new.check_in)
        .bind(new.check_out)
        .bind(new.guests)
        .bind(new.pets)
        .bind(new.total_price)
        .bind(new.status)
        .bind(&new.payment_method)
        .fetch_one(&self.pool)
        .await
        .map_err(map_overlap_violation)
    }

    /// Persist the merged state of an edited reservation.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: i32,
        pets: i32,
        total_price: Decimal,
        status: ReservationStatus,
        payment_method: Option<&str>,
    ) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET check_in = $2, check_out = $3, guests = $4, pets = $5,
                total_price = $6, status = $7, payment_method = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(check_in)
        .bind(check_out)
        .bind(guests)
        .bind(pets)
        .bind(total_price)
        .bind(status)
        .bind(payment_method)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_overlap_violation)?
        .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Set the status only
    pub async fn set_status(&self, id: Uuid, status: ReservationStatus) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_overlap_violation)?
        .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Hard delete
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Reservation {} not found", id)));
        }
        Ok(())
    }

    /// Reservations for one guest, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    /// Admin listing with optional status / guest-name / check-in window
    /// filters
    pub async fn list(&self, filter: &ReservationQuery) -> AppResult<Vec<Reservation>> {
        let mut conditions = vec!["TRUE".to_string()];
        let mut idx = 0;

        if filter.status.is_some() {
            idx += 1;
            conditions.push(format!("status = ${}", idx));
        }
        if filter.name.is_some() {
            idx += 1;
            conditions.push(format!("user_name ILIKE ${}", idx));
        }
        if filter.from.is_some() {
            idx += 1;
            conditions.push(format!("check_in >= ${}", idx));
        }
        if filter.to.is_some() {
            idx += 1;
            conditions.push(format!("check_in <= ${}", idx));
        }

        let query = format!(
            "SELECT * FROM reservations WHERE {} ORDER BY check_in DESC",
            conditions.join(" AND ")
        );

        let mut q = sqlx::query_as::<_, Reservation>(&query);
        if let Some(status) = filter.status {
            q = q.bind(status);
        }
        if let Some(ref name) = filter.name {
            q = q.bind(format!("%{}%", name));
        }
        if let Some(from) = filter.from {
            q = q.bind(from);
        }
        if let Some(to) = filter.to {
            q = q.bind(to);
        }

        Ok(q.fetch_all(&self.pool).await?)
    }

    /// Non-cancelled stays overlapping `[first, next)`, for the month grid
    pub async fn stays_overlapping(
        &self,
        first: NaiveDate,
        next: NaiveDate,
    ) -> AppResult<Vec<Stay>> {
        let rows = sqlx::query(
            r#"
            SELECT check_in, check_out FROM reservations
            WHERE status <> 'cancelled' AND check_in < $2 AND check_out > $1
            "#,
        )
        .bind(first)
        .bind(next)
        .fetch_all(&self.pool)
        .await?;

        let stays = rows
            .into_iter()
            .filter_map(|row| {
                let check_in: NaiveDate = row.get("check_in");
                let check_out: NaiveDate = row.get("check_out");
                Stay::new(check_in, check_out)
            })
            .collect();

        Ok(stays)
    }
}

/// Map a trip of the overlap exclusion constraint to the same conflict as
/// a failed availability pre-check.
fn map_overlap_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = err {
        if db.constraint() == Some(OVERLAP_CONSTRAINT) {
            return AppError::dates_unavailable();
        }
    }
    AppError::Database(err)
}
