use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::trip_dto::TripFilters;
use crate::models::trip::TripRecord;
use crate::utils::errors::AppResult;

const SELECT_TRIP: &str = "SELECT id, route_id, route_name, date, shift, \
    scheduled_departure, scheduled_arrival, actual_departure, actual_arrival, \
    departure_delay_minutes, arrival_delay_minutes, notes, created_at, updated_at \
    FROM trips";

pub struct TripRepository {
    pool: SqlitePool,
}

impl TripRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<TripRecord>> {
        let query = format!("{} ORDER BY created_at DESC", SELECT_TRIP);
        let trips = sqlx::query_as::<_, TripRecord>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(trips)
    }

    pub async fn find_filtered(&self, filters: &TripFilters) -> AppResult<Vec<TripRecord>> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_TRIP);
        query.push(" WHERE 1=1");

        if let Some(route_id) = &filters.route_id {
            query.push(" AND route_id = ").push_bind(route_id.clone());
        }
        if let Some(date_start) = filters.date_start {
            query.push(" AND date >= ").push_bind(date_start);
        }
        if let Some(date_end) = filters.date_end {
            query.push(" AND date <= ").push_bind(date_end);
        }
        if let Some(shift) = filters.shift {
            query.push(" AND shift = ").push_bind(shift);
        }

        query.push(" ORDER BY created_at DESC");

        let trips = query
            .build_query_as::<TripRecord>()
            .fetch_all(&self.pool)
            .await?;

        Ok(trips)
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<TripRecord>> {
        let query = format!("{} WHERE id = ?", SELECT_TRIP);
        let trip = sqlx::query_as::<_, TripRecord>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    pub async fn create(&self, trip: &TripRecord) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO trips (
                id, route_id, route_name, date, shift,
                scheduled_departure, scheduled_arrival,
                actual_departure, actual_arrival,
                departure_delay_minutes, arrival_delay_minutes, notes,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&trip.id)
        .bind(&trip.route_id)
        .bind(&trip.route_name)
        .bind(trip.date)
        .bind(trip.shift)
        .bind(&trip.scheduled_departure)
        .bind(&trip.scheduled_arrival)
        .bind(&trip.actual_departure)
        .bind(&trip.actual_arrival)
        .bind(trip.departure_delay_minutes)
        .bind(trip.arrival_delay_minutes)
        .bind(&trip.notes)
        .bind(trip.created_at)
        .bind(trip.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update(&self, trip: &TripRecord) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE trips
            SET route_id = ?, route_name = ?, date = ?, shift = ?,
                scheduled_departure = ?, scheduled_arrival = ?,
                actual_departure = ?, actual_arrival = ?,
                departure_delay_minutes = ?, arrival_delay_minutes = ?,
                notes = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&trip.route_id)
        .bind(&trip.route_name)
        .bind(trip.date)
        .bind(trip.shift)
        .bind(&trip.scheduled_departure)
        .bind(&trip.scheduled_arrival)
        .bind(&trip.actual_departure)
        .bind(&trip.actual_arrival)
        .bind(trip.departure_delay_minutes)
        .bind(trip.arrival_delay_minutes)
        .bind(&trip.notes)
        .bind(trip.updated_at)
        .bind(&trip.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<Option<TripRecord>> {
        let Some(trip) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM trips WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Some(trip))
    }

    /// Elimina los registros de demostración del período indicado
    pub async fn delete_demo_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        marker: &str,
    ) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM trips WHERE date BETWEEN ? AND ? AND notes LIKE ?")
            .bind(start)
            .bind(end)
            .bind(format!("%{}%", marker))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
