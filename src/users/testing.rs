use std::collections::HashMap;

use async_trait::async_trait;
use time::{Date, OffsetDateTime};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::users::model::User;
use crate::users::store::UserStore;

/// In-memory store double for service tests.
#[derive(Default)]
pub(crate) struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert(
        &self,
        email: &str,
        name: &str,
        birthdate: Date,
        password_hash: &str,
    ) -> anyhow::Result<Uuid> {
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_owned(),
            name: name.to_owned(),
            birthdate,
            password_hash: password_hash.to_owned(),
            created_at: OffsetDateTime::now_utc(),
        };
        let id = user.id;
        self.users.write().await.insert(id, user);
        Ok(id)
    }

    async fn update(
        &self,
        id: Uuid,
        email: &str,
        name: &str,
        birthdate: Date,
        password_hash: Option<&str>,
    ) -> anyhow::Result<()> {
        // Like the SQL UPDATE, a missing id affects nothing.
        if let Some(user) = self.users.write().await.get_mut(&id) {
            user.email = email.to_owned();
            user.name = name.to_owned();
            user.birthdate = birthdate;
            if let Some(hash) = password_hash {
                user.password_hash = hash.to_owned();
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<()> {
        self.users.write().await.remove(&id);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}
