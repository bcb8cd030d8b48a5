use chrono::Utc;
use eyre::Result;
use slotbook_core::models::user::User;
use uuid::Uuid;

use crate::Store;

pub async fn create_user(
    store: &Store,
    email: &str,
    name: &str,
    age: Option<u32>,
) -> Result<User> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating user: id={}, email={}", id, email);

    let user = User {
        id,
        email: email.to_string(),
        name: name.to_string(),
        age,
        created_at: now,
        updated_at: now,
    };

    store.users.write().await.insert(id, user.clone());

    Ok(user)
}

pub async fn get_user_by_id(store: &Store, id: Uuid) -> Result<Option<User>> {
    let users = store.users.read().await;

    Ok(users.get(&id).cloned())
}

pub async fn get_all_users(store: &Store) -> Result<Vec<User>> {
    let users = store.users.read().await;

    // Map iteration order is arbitrary; sort by creation time so listings
    // are deterministic.
    let mut all: Vec<User> = users.values().cloned().collect();
    all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

    Ok(all)
}

pub async fn update_user(
    store: &Store,
    id: Uuid,
    email: Option<&str>,
    name: Option<&str>,
    age: Option<u32>,
) -> Result<Option<User>> {
    let mut users = store.users.write().await;

    let Some(user) = users.get_mut(&id) else {
        return Ok(None);
    };

    if let Some(email) = email {
        user.email = email.to_string();
    }
    if let Some(name) = name {
        user.name = name.to_string();
    }
    if let Some(age) = age {
        user.age = Some(age);
    }
    user.updated_at = Utc::now();

    Ok(Some(user.clone()))
}

pub async fn delete_user(store: &Store, id: Uuid) -> Result<bool> {
    let mut users = store.users.write().await;

    Ok(users.remove(&id).is_some())
}
