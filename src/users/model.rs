use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // assigned by the store on insert
    pub email: String,              // login key
    pub name: String,
    pub birthdate: Date,
    #[serde(skip_serializing)]
    pub password_hash: String,      // argon2 digest, not exposed in JSON
    pub created_at: OffsetDateTime,
}
