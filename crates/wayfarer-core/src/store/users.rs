//! User accessors: registration, lookup, role and profile updates.

use jiff::Timestamp;
use log::info;

use super::util::normalize_email;
use super::Store;
use crate::models::{Role, User};
use crate::params::{CreateUser, UpdateProfile};

impl Store {
    /// Returns an independent copy of the user list.
    pub fn list_users(&self) -> Vec<User> {
        self.state().users.clone()
    }

    /// Creates a user with the next id from the store counter.
    ///
    /// The email is normalized before storing. Email uniqueness is the
    /// caller's check, via [`Store::find_user_by_email`], before creating.
    pub fn create_user(&self, params: &CreateUser) -> User {
        let user = {
            let mut state = self.state();
            let id = state.meta.next_user_id;
            state.meta.next_user_id += 1;

            let user = User {
                id: id.to_string(),
                name: params.name.clone(),
                email: normalize_email(&params.email),
                password_hash: params.password_hash.clone(),
                role: params.role,
                avatar: params.avatar.clone(),
                created_at: Timestamp::now(),
                updated_at: None,
            };
            state.users.push(user.clone());
            user
        };
        self.schedule_save();
        user
    }

    /// Finds a user by normalized email.
    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        let normalized = normalize_email(email);
        self.state()
            .users
            .iter()
            .find(|user| user.email == normalized)
            .cloned()
    }

    /// Finds a user by id.
    pub fn find_user_by_id(&self, id: &str) -> Option<User> {
        self.state().users.iter().find(|user| user.id == id).cloned()
    }

    /// Changes a user's role. Returns the updated user, or `None` when the
    /// id is unknown.
    pub fn update_user_role(&self, id: &str, role: Role) -> Option<User> {
        let updated = {
            let mut state = self.state();
            let user = state.users.iter_mut().find(|user| user.id == id)?;
            user.role = role;
            user.clone()
        };
        self.schedule_save();
        Some(updated)
    }

    /// Applies a partial profile update and bumps `updatedAt`.
    ///
    /// Empty-after-trim values are ignored rather than rejected;
    /// `clear_avatar` removes the avatar regardless of the `avatar` field.
    pub fn update_user_profile(&self, id: &str, updates: &UpdateProfile) -> Option<User> {
        let updated = {
            let mut state = self.state();
            let user = state.users.iter_mut().find(|user| user.id == id)?;

            if let Some(name) = updates.name.as_deref() {
                let name = name.trim();
                if !name.is_empty() {
                    user.name = name.to_string();
                }
            }

            if updates.clear_avatar {
                user.avatar = None;
            } else if let Some(avatar) = updates.avatar.as_deref() {
                let avatar = avatar.trim();
                if !avatar.is_empty() {
                    user.avatar = Some(avatar.to_string());
                }
            }

            user.updated_at = Some(Timestamp::now());
            user.clone()
        };
        self.schedule_save();
        Some(updated)
    }

    /// Idempotent admin seeding.
    ///
    /// Skips silently when the email or digest is empty, or when an account
    /// with that email already exists. Returns the created admin, if any.
    pub fn ensure_admin(&self, name: &str, email: &str, password_hash: &str) -> Option<User> {
        let email = normalize_email(email);
        let name = name.trim();
        if email.is_empty() || password_hash.trim().is_empty() {
            info!("admin seed skipped: credentials not configured");
            return None;
        }
        if self.find_user_by_email(&email).is_some() {
            info!("admin seed skipped: {email} already exists");
            return None;
        }

        let admin = self.create_user(&CreateUser {
            name: if name.is_empty() { "Admin" } else { name }.to_string(),
            email: email.clone(),
            password_hash: password_hash.to_string(),
            role: Role::Admin,
            avatar: None,
        });
        info!("admin account created for {email}");
        Some(admin)
    }
}
