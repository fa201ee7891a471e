use std::sync::Arc;

use axum::extract::FromRef;
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;
use crate::users::dto::{RegisterRequest, UpdateUserRequest};
use crate::users::error::UserError;
use crate::users::jwt::JwtKeys;
use crate::users::model::User;
use crate::users::password::{hash_password, verify_password};
use crate::users::store::UserStore;

/// Account management and credential authentication over a [`UserStore`].
/// Stateless across calls; holds only the store handle and signing keys.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    keys: JwtKeys,
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.store.clone(), JwtKeys::from_ref(state))
    }
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, keys: JwtKeys) -> Self {
        Self { store, keys }
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<User, UserError> {
        self.store.get_by_id(id).await?.ok_or(UserError::NotFound)
    }

    /// Hashes the password, inserts the record and issues a token over the
    /// new user's id and email. Email uniqueness is left to the store schema.
    pub async fn register_user(&self, data: RegisterRequest) -> Result<(String, User), UserError> {
        let hash = hash_password(&data.password).map_err(UserError::Hash)?;
        let id = self
            .store
            .insert(&data.email, &data.name, data.birthdate, &hash)
            .await?;
        let user = self.store.get_by_id(id).await?.ok_or(UserError::NotFound)?;
        let token = self.keys.sign(user.id, &user.email)?;
        debug!(user_id = %user.id, "user registered");
        Ok((token, user))
    }

    /// Persists the merged record and returns it re-fetched. The stored
    /// digest is only replaced when a new plaintext password is supplied.
    pub async fn update_user(
        &self,
        id: Uuid,
        data: UpdateUserRequest,
    ) -> Result<User, UserError> {
        let hash = match &data.password {
            Some(plain) => Some(hash_password(plain).map_err(UserError::Hash)?),
            None => None,
        };
        self.store
            .update(id, &data.email, &data.name, data.birthdate, hash.as_deref())
            .await?;
        self.store.get_by_id(id).await?.ok_or(UserError::NotFound)
    }

    /// Removes the record. Succeeds whether or not it existed.
    pub async fn delete_user(&self, id: Uuid) -> Result<(), UserError> {
        self.store.delete(id).await?;
        Ok(())
    }

    /// Verifies the password against the stored digest and issues a token.
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, UserError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;
        let ok = verify_password(password, &user.password_hash).map_err(UserError::Hash)?;
        if !ok {
            return Err(UserError::InvalidCredentials);
        }
        let token = self.keys.sign(user.id, &user.email)?;
        debug!(user_id = %user.id, "user logged in");
        Ok(token)
    }
}
