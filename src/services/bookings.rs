//! Booking service: server-side quoting, availability and the reservation
//! lifecycle rules.

use chrono::{NaiveDate, Utc};
use validator::Validate;

use crate::{
    booking::{self, calendar::DayCell, BookingError, PricingRules, Quote, Stay},
    error::{AppError, AppResult},
    models::{
        profile::Identity,
        reservation::{
            CreateReservation, NewReservation, Reservation, ReservationQuery, ReservationStatus,
            UpdateReservation,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    rules: PricingRules,
}

impl BookingsService {
    pub fn new(repository: Repository, rules: PricingRules) -> Self {
        Self { repository, rules }
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Price a candidate stay. Pure; touches no storage.
    pub fn quote(&self, check_in: NaiveDate, check_out: NaiveDate, guests: i32) -> AppResult<Quote> {
        booking::pricing::validate_guests(guests, &self.rules)?;
        let stay = Stay::new(check_in, check_out).ok_or(BookingError::InvalidInterval)?;
        Ok(booking::pricing::quote(&stay, guests, &self.rules)?)
    }

    /// Availability pre-check for a half-open candidate interval.
    pub async fn check_availability(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude: Option<uuid::Uuid>,
    ) -> AppResult<bool> {
        if check_in > check_out {
            return Err(AppError::BadRequest(
                "check_out must not be before check_in".to_string(),
            ));
        }
        self.repository
            .reservations
            .check_availability(check_in, check_out, exclude)
            .await
    }

    /// Book a stay for the authenticated guest. The quote is always
    /// recomputed here; the client never supplies a price.
    pub async fn create(
        &self,
        identity: &Identity,
        request: CreateReservation,
    ) -> AppResult<Reservation> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if identity.is_admin() {
            return Err(AppError::BusinessRule(
                "Administrators cannot book stays for themselves".to_string(),
            ));
        }

        booking::pricing::validate_guests(request.guests, &self.rules)?;
        booking::pricing::validate_pets(request.pets)?;

        let stay = Stay::new(request.check_in, request.check_out)
            .ok_or(BookingError::InvalidInterval)?;
        let quote = booking::pricing::quote(&stay, request.guests, &self.rules)?;

        let available = self
            .repository
            .reservations
            .check_availability(request.check_in, request.check_out, None)
            .await?;
        if !available {
            tracing::warn!(
                user_id = %identity.user_id,
                check_in = %request.check_in,
                check_out = %request.check_out,
                "Booking attempt for occupied dates"
            );
            return Err(AppError::dates_unavailable());
        }

        let reservation = self
            .repository
            .reservations
            .create(&NewReservation {
                user_id: identity.user_id,
                user_name: identity.name.clone(),
                check_in: request.check_in,
                check_out: request.check_out,
                guests: request.guests,
                pets: request.pets,
                total_price: quote.total,
                status: request.status.unwrap_or(ReservationStatus::Pending),
                payment_method: request.payment_method,
            })
            .await?;

        tracing::info!(
            reservation_id = %reservation.id,
            user_id = %identity.user_id,
            total = %reservation.total_price,
            "Reservation created"
        );

        Ok(reservation)
    }

    /// Fetch one reservation; owner or admin only.
    pub async fn get(&self, identity: &Identity, id: uuid::Uuid) -> AppResult<Reservation> {
        let reservation = self.repository.reservations.get_by_id(id).await?;
        self.require_owner_or_admin(identity, &reservation)?;
        Ok(reservation)
    }

    /// Reservations of one guest; self or admin only.
    pub async fn list_for_user(
        &self,
        identity: &Identity,
        user_id: uuid::Uuid,
    ) -> AppResult<Vec<Reservation>> {
        if !identity.is_admin() && identity.user_id != user_id {
            tracing::warn!(
                requester = %identity.user_id,
                target = %user_id,
                "Blocked attempt to read another guest's reservations"
            );
            return Err(AppError::Authorization(
                "You may only view your own reservations".to_string(),
            ));
        }
        self.repository.reservations.list_for_user(user_id).await
    }

    /// Admin listing with filters.
    pub async fn list(&self, filter: &ReservationQuery) -> AppResult<Vec<Reservation>> {
        self.repository.reservations.list(filter).await
    }

    /// Partial update. When dates change, availability is re-checked
    /// excluding this reservation; when dates or guests change, the price
    /// is recomputed from the merged values. A non-admin status change is
    /// honored only towards `cancelled`, otherwise logged and skipped.
    pub async fn update(
        &self,
        identity: &Identity,
        id: uuid::Uuid,
        request: UpdateReservation,
    ) -> AppResult<Reservation> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let existing = self.repository.reservations.get_by_id(id).await?;
        self.require_owner_or_admin(identity, &existing)?;

        let check_in = request.check_in.unwrap_or(existing.check_in);
        let check_out = request.check_out.unwrap_or(existing.check_out);
        let guests = request.guests.unwrap_or(existing.guests);
        let pets = request.pets.unwrap_or(existing.pets);

        if request.guests.is_some() {
            booking::pricing::validate_guests(guests, &self.rules)?;
        }
        if request.pets.is_some() {
            booking::pricing::validate_pets(pets)?;
        }

        let dates_changed = check_in != existing.check_in || check_out != existing.check_out;
        if dates_changed {
            let available = self
                .repository
                .reservations
                .check_availability(check_in, check_out, Some(id))
                .await?;
            if !available {
                return Err(AppError::dates_unavailable());
            }
        }

        let total_price = if dates_changed || request.guests.is_some() {
            let stay = Stay::new(check_in, check_out).ok_or(BookingError::InvalidInterval)?;
            booking::pricing::quote(&stay, guests, &self.rules)?.total
        } else {
            existing.total_price
        };

        let status = match request.status {
            Some(requested) if identity.is_admin() => requested,
            Some(ReservationStatus::Cancelled) => ReservationStatus::Cancelled,
            Some(requested) => {
                tracing::warn!(
                    user_id = %identity.user_id,
                    reservation_id = %id,
                    requested = %requested,
                    "Illegal status change by non-admin ignored"
                );
                existing.status
            }
            None => existing.status,
        };

        let payment_method = request.payment_method.or(existing.payment_method);

        let updated = self
            .repository
            .reservations
            .update(
                id,
                check_in,
                check_out,
                guests,
                pets,
                total_price,
                status,
                payment_method.as_deref(),
            )
            .await?;

        tracing::info!(reservation_id = %id, updated_by = %identity.user_id, "Reservation updated");
        Ok(updated)
    }

    /// Cancel a reservation; owner or admin.
    pub async fn cancel(&self, identity: &Identity, id: uuid::Uuid) -> AppResult<Reservation> {
        let reservation = self.repository.reservations.get_by_id(id).await?;
        self.require_owner_or_admin(identity, &reservation)?;

        let cancelled = self
            .repository
            .reservations
            .set_status(id, ReservationStatus::Cancelled)
            .await?;

        tracing::info!(reservation_id = %id, cancelled_by = %identity.user_id, "Reservation cancelled");
        Ok(cancelled)
    }

    /// Admin-only status override.
    pub async fn set_status(
        &self,
        identity: &Identity,
        id: uuid::Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        let updated = self.repository.reservations.set_status(id, status).await?;
        tracing::info!(
            reservation_id = %id,
            status = %status,
            updated_by = %identity.user_id,
            "Reservation status set"
        );
        Ok(updated)
    }

    /// Admin-only hard delete. Completed historical stays are kept for
    /// financial history; cancel them instead.
    pub async fn delete(&self, identity: &Identity, id: uuid::Uuid) -> AppResult<()> {
        let reservation = self.repository.reservations.get_by_id(id).await?;

        let today = Utc::now().date_naive();
        if reservation.check_out < today && reservation.status != ReservationStatus::Cancelled {
            tracing::warn!(
                reservation_id = %id,
                user_id = %identity.user_id,
                "Blocked hard delete of historical reservation"
            );
            return Err(AppError::BusinessRule(
                "Historical reservations cannot be deleted permanently; set the status to cancelled instead".to_string(),
            ));
        }

        self.repository.reservations.delete(id).await?;
        tracing::info!(reservation_id = %id, deleted_by = %identity.user_id, "Reservation deleted");
        Ok(())
    }

    /// Month grid for the booking calendar: past and booked flags per day.
    pub async fn month_grid(&self, year: i32, month: u32) -> AppResult<Vec<DayCell>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid month {}-{}", year, month)))?;
        let next = first
            .checked_add_months(chrono::Months::new(1))
            .ok_or_else(|| AppError::BadRequest("Month out of range".to_string()))?;

        let reserved = self
            .repository
            .reservations
            .stays_overlapping(first, next)
            .await?;

        let today = Utc::now().date_naive();
        booking::calendar::month_grid(year, month, today, &reserved)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid month {}-{}", year, month)))
    }

    fn require_owner_or_admin(
        &self,
        identity: &Identity,
        reservation: &Reservation,
    ) -> AppResult<()> {
        if identity.is_admin() || identity.user_id == reservation.user_id {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "You may only access your own reservations".to_string(),
            ))
        }
    }
}
