//! Repository for the `users` table.

use skillswap_core::profile::LinkedInSettingsRequest;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUserProfile, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, avatar, location, bio, skills_offered, skills_wanted, \
                       credits, rating, sessions_completed, community_meets, is_verified, \
                       is_trusted, linked_in_verified, member_since, linkedin_url, \
                       linkedin_visibility, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, email, name, avatar, location, bio, skills_offered,
                                skills_wanted, credits, rating, sessions_completed,
                                community_meets, is_verified, is_trusted, linked_in_verified,
                                member_since, linkedin_url, linkedin_visibility)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.id)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.avatar)
            .bind(&input.location)
            .bind(&input.bio)
            .bind(&input.skills_offered)
            .bind(&input.skills_wanted)
            .bind(input.credits)
            .bind(input.rating)
            .bind(input.sessions_completed)
            .bind(input.community_meets)
            .bind(input.is_verified)
            .bind(input.is_trusted)
            .bind(input.linked_in_verified)
            .bind(&input.member_since)
            .bind(&input.linkedin_url)
            .bind(&input.linkedin_visibility)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial profile update.
    ///
    /// Plain optional columns use `COALESCE`; nullable columns are bound as a
    /// `(touch, value)` pair so they can be cleared. Returns `None` if no row
    /// with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: &str,
        input: &UpdateUserProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                avatar = CASE WHEN $3 THEN $4 ELSE avatar END,
                location = CASE WHEN $5 THEN $6 ELSE location END,
                bio = CASE WHEN $7 THEN $8 ELSE bio END,
                skills_offered = COALESCE($9, skills_offered),
                skills_wanted = COALESCE($10, skills_wanted),
                linkedin_url = CASE WHEN $11 THEN $12 ELSE linkedin_url END,
                linkedin_visibility = COALESCE($13, linkedin_visibility),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.avatar.touch)
            .bind(&input.avatar.value)
            .bind(input.location.touch)
            .bind(&input.location.value)
            .bind(input.bio.touch)
            .bind(&input.bio.value)
            .bind(&input.skills_offered)
            .bind(&input.skills_wanted)
            .bind(input.linkedin_url.touch)
            .bind(&input.linkedin_url.value)
            .bind(&input.linkedin_visibility)
            .fetch_optional(pool)
            .await
    }

    /// Apply a validated LinkedIn settings change.
    ///
    /// An absent URL leaves the column untouched; an explicit null or empty
    /// string clears it. Returns `None` if the user does not exist.
    pub async fn update_linkedin_settings(
        pool: &PgPool,
        request: &LinkedInSettingsRequest,
    ) -> Result<Option<User>, sqlx::Error> {
        let touch_url = request.linkedin_url.is_some();
        let url = request
            .linkedin_url
            .clone()
            .flatten()
            .filter(|u| !u.is_empty());
        let visibility = request.linkedin_visibility.map(|v| v.as_str());

        let query = format!(
            "UPDATE users SET
                linkedin_url = CASE WHEN $2 THEN $3 ELSE linkedin_url END,
                linkedin_visibility = COALESCE($4, linkedin_visibility),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&request.user_id)
            .bind(touch_url)
            .bind(url)
            .bind(visibility)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a user.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
