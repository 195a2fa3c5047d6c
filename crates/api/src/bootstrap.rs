//! Startup provisioning of the configured admin account.

use lostfound_core::status::UserRole;
use lostfound_db::models::user::CreateUser;
use lostfound_db::repositories::UserRepo;
use lostfound_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Ensure an admin account with the configured email exists.
///
/// An existing account with that email is left untouched, whatever its role
/// or password.
pub async fn ensure_bootstrap_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<()> {
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let input = CreateUser {
        name: admin.name.clone(),
        email: admin.email.clone(),
        password_hash,
        role: UserRole::Admin,
    };

    match UserRepo::create_if_absent(pool, &input).await? {
        Some(user) => {
            tracing::info!(user_id = user.id, email = %user.email, "Bootstrap admin created");
        }
        None => {
            if let Some(existing) = UserRepo::find_by_email(pool, &admin.email).await? {
                if existing.role != UserRole::Admin {
                    tracing::warn!(
                        user_id = existing.id,
                        email = %existing.email,
                        role = %existing.role,
                        "Bootstrap admin email belongs to a non-admin account; leaving it unchanged"
                    );
                } else {
                    tracing::debug!(user_id = existing.id, "Bootstrap admin already present");
                }
            }
        }
    }

    Ok(())
}
