//! PostgreSQL implementation of [`BaseFoodStore`].
//!
//! Request transitions lock the listing row (`FOR UPDATE`) before touching
//! `food_requests`, so concurrent submits and withdrawals against the same
//! listing are serialized and the recomputed status always sees the final
//! request count.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::common::{FoodId, FoodRequestId};
use crate::domains::donations::Donation;
use crate::domains::food_requests::{FoodRequest, RequestFilter};
use crate::domains::foods::{Food, FoodOrder, FoodQuery, FoodStatus, FoodUpdate};
use crate::kernel::{BaseFoodStore, RequestInsert, Withdrawal};

#[derive(Clone)]
pub struct PostgresFoodStore {
    pool: PgPool,
}

impl PostgresFoodStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseFoodStore for PostgresFoodStore {
    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_food(&self, food: &Food) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO foods (
                id, name, quantity, expiration_date, pickup_location,
                donor_email, donor_name, donor_image, image_url, notes,
                status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(food.id)
        .bind(&food.name)
        .bind(food.quantity)
        .bind(food.expiration_date)
        .bind(&food.pickup_location)
        .bind(&food.donor_email)
        .bind(&food.donor_name)
        .bind(&food.donor_image)
        .bind(&food.image_url)
        .bind(&food.notes)
        .bind(food.status)
        .bind(food.created_at)
        .bind(food.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_food(&self, id: FoodId) -> Result<Option<Food>> {
        sqlx::query_as::<_, Food>("SELECT * FROM foods WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn query_foods(&self, query: &FoodQuery) -> Result<Vec<Food>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM foods WHERE TRUE");

        if let Some(status) = query.status {
            builder.push(" AND status = ").push_bind(status);
        }
        if let Some(email) = &query.donor_email {
            builder
                .push(" AND lower(donor_email) = lower(")
                .push_bind(email.clone())
                .push(")");
        }
        if let Some(name) = &query.name_contains {
            builder
                .push(" AND name ILIKE ")
                .push_bind(format!("%{}%", escape_like(name)));
        }

        builder.push(order_clause(query.order));

        if let Some(limit) = query.limit {
            builder.push(" LIMIT ").push_bind(limit);
        }

        builder
            .build_query_as::<Food>()
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn update_food(&self, id: FoodId, update: &FoodUpdate) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE foods
            SET name = COALESCE($2, name),
                quantity = COALESCE($3, quantity),
                expiration_date = COALESCE($4, expiration_date),
                pickup_location = COALESCE($5, pickup_location),
                image_url = COALESCE($6, image_url),
                notes = COALESCE($7, notes),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(update.quantity)
        .bind(update.expiration_date)
        .bind(&update.pickup_location)
        .bind(&update.image_url)
        .bind(&update.notes)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_food(&self, id: FoodId) -> Result<u64> {
        // food_requests rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM foods WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_request_for(
        &self,
        requester_email: &str,
        food_id: FoodId,
    ) -> Result<Option<FoodRequest>> {
        sqlx::query_as::<_, FoodRequest>(
            "SELECT * FROM food_requests
             WHERE lower(requester_email) = lower($1) AND food_id = $2",
        )
        .bind(requester_email)
        .bind(food_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn create_request(&self, request: &FoodRequest) -> Result<RequestInsert> {
        let mut tx = self.pool.begin().await?;

        let locked = sqlx::query_scalar::<_, FoodId>("SELECT id FROM foods WHERE id = $1 FOR UPDATE")
            .bind(request.food_id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Ok(RequestInsert::MissingFood);
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO food_requests (
                id, food_id, requester_email, requester_name, donor_email,
                notes, metadata, requested_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(request.id)
        .bind(request.food_id)
        .bind(&request.requester_email)
        .bind(&request.requester_name)
        .bind(&request.donor_email)
        .bind(&request.notes)
        .bind(&request.metadata)
        .bind(request.requested_at)
        .execute(&mut *tx)
        .await?;

        if inserted.rows_affected() == 0 {
            return Ok(RequestInsert::Duplicate);
        }

        sqlx::query("UPDATE foods SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(request.food_id)
            .bind(FoodStatus::Requested)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(RequestInsert::Created)
    }

    async fn withdraw_request(&self, id: FoodRequestId) -> Result<Option<Withdrawal>> {
        let mut tx = self.pool.begin().await?;

        let food_id =
            sqlx::query_scalar::<_, FoodId>("SELECT food_id FROM food_requests WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(food_id) = food_id else {
            return Ok(None);
        };

        sqlx::query("SELECT id FROM foods WHERE id = $1 FOR UPDATE")
            .bind(food_id)
            .execute(&mut *tx)
            .await?;

        // Re-read under the lock: a concurrent withdrawal may have won
        let request =
            sqlx::query_as::<_, FoodRequest>("DELETE FROM food_requests WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(request) = request else {
            return Ok(None);
        };

        let food_status = sqlx::query_scalar::<_, FoodStatus>(
            r#"
            UPDATE foods
            SET status = CASE
                    WHEN EXISTS (SELECT 1 FROM food_requests WHERE food_id = $1)
                    THEN 'requested'
                    ELSE 'available'
                END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING status
            "#,
        )
        .bind(request.food_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(Withdrawal {
            request,
            food_status,
        }))
    }

    async fn query_requests(&self, filter: &RequestFilter) -> Result<Vec<FoodRequest>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM food_requests WHERE TRUE");

        if let Some(email) = &filter.donor_email {
            builder
                .push(" AND lower(donor_email) = lower(")
                .push_bind(email.clone())
                .push(")");
        }
        if let Some(email) = &filter.requester_email {
            builder
                .push(" AND lower(requester_email) = lower(")
                .push_bind(email.clone())
                .push(")");
        }
        if let Some(food_id) = filter.food_id {
            builder.push(" AND food_id = ").push_bind(food_id);
        }

        builder.push(" ORDER BY requested_at DESC, id DESC");

        builder
            .build_query_as::<FoodRequest>()
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn insert_donation(&self, donation: &Donation) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO donations (id, donor_name, donor_email, amount, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(donation.id)
        .bind(&donation.donor_name)
        .bind(&donation.donor_email)
        .bind(donation.amount)
        .bind(&donation.message)
        .bind(donation.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_donations(&self) -> Result<Vec<Donation>> {
        sqlx::query_as::<_, Donation>("SELECT * FROM donations ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }
}

/// ORDER BY clause for a listing query. Ties fall back to newest first.
fn order_clause(order: FoodOrder) -> String {
    match order {
        FoodOrder::Newest => " ORDER BY created_at DESC, id DESC".to_string(),
        FoodOrder::ExpirationDate(direction) => format!(
            " ORDER BY expiration_date {}, created_at DESC, id DESC",
            direction.as_sql()
        ),
        FoodOrder::Quantity(direction) => format!(
            " ORDER BY quantity {}, created_at DESC, id DESC",
            direction.as_sql()
        ),
    }
}

/// Escape LIKE metacharacters so user search text matches literally
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::foods::SortDirection;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("rice"), "rice");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn test_order_clause() {
        assert_eq!(order_clause(FoodOrder::Newest), " ORDER BY created_at DESC, id DESC");
        assert_eq!(
            order_clause(FoodOrder::Quantity(SortDirection::Asc)),
            " ORDER BY quantity ASC, created_at DESC, id DESC"
        );
        assert_eq!(
            order_clause(FoodOrder::ExpirationDate(SortDirection::Desc)),
            " ORDER BY expiration_date DESC, created_at DESC, id DESC"
        );
    }
}
