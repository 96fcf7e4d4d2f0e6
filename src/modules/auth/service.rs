use anyhow::anyhow;
use tracing::{info, instrument, warn};

use rollcall_auth::{IdentityError, IdentityProvider};
use rollcall_core::AppError;
use rollcall_db::{DocPath, DocumentStore, Write, encode};
use rollcall_models::User;

use crate::metrics;
use crate::middleware::auth::AuthUser;

use super::model::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest};

pub struct AuthService;

impl AuthService {
    /// Creates the account, then its profile document keyed by the UID.
    #[instrument(skip(store, identity, dto), fields(user.email = %dto.email))]
    pub async fn register(
        store: &dyn DocumentStore,
        identity: &dyn IdentityProvider,
        dto: RegisterRequest,
    ) -> Result<AuthResponse, AppError> {
        let account = identity.create_account(&dto.email, &dto.password).await?;

        let profile = User::new(&account.uid, &account.email, &dto.name);
        store
            .apply(Write::set(DocPath::of::<User>(&account.uid)?, encode(&profile)?))
            .await?;

        metrics::track_account_registered();
        info!(user.id = %account.uid, "User successfully created");

        Ok(AuthResponse {
            name: dto.name,
            email: account.email,
            token: account.uid,
        })
    }

    #[instrument(skip(store, identity, dto), fields(user.email = %dto.email))]
    pub async fn login(
        store: &dyn DocumentStore,
        identity: &dyn IdentityProvider,
        dto: LoginRequest,
    ) -> Result<AuthResponse, AppError> {
        let account = match identity.sign_in(&dto.email, &dto.password).await {
            Ok(account) => account,
            Err(err) => {
                if matches!(err, IdentityError::InvalidCredential) {
                    metrics::track_login(false);
                }
                return Err(err.into());
            }
        };

        let profile = store
            .fetch::<User>(&account.uid)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User document not found.")))?;

        metrics::track_login(true);

        Ok(AuthResponse {
            name: profile.name,
            email: account.email,
            token: account.uid,
        })
    }

    #[instrument(skip(identity))]
    pub async fn send_password_reset(
        identity: &dyn IdentityProvider,
        email: &str,
    ) -> Result<(), AppError> {
        identity.send_password_reset(email).await?;
        info!("Password reset email sent");
        Ok(())
    }

    #[instrument(skip(identity, auth_user), fields(user.id = %auth_user.uid()))]
    pub async fn logout(
        identity: &dyn IdentityProvider,
        auth_user: &AuthUser,
    ) -> Result<(), AppError> {
        identity.revoke_sessions(auth_user.uid()).await?;
        Ok(())
    }

    /// Account details merged with the profile name, when a profile exists.
    #[instrument(skip(store, auth_user), fields(user.id = %auth_user.uid()))]
    pub async fn current_user(
        store: &dyn DocumentStore,
        auth_user: &AuthUser,
    ) -> Result<CurrentUserResponse, AppError> {
        let profile = store.fetch::<User>(auth_user.uid()).await?;

        let name = profile
            .map(|user| user.name)
            .or_else(|| auth_user.0.display_name.clone())
            .unwrap_or_default();

        Ok(CurrentUserResponse {
            uid: auth_user.uid().to_string(),
            email: auth_user.email().to_string(),
            name,
            is_admin: auth_user.is_admin(),
        })
    }

    /// Deletes the account first, then the profile document. The profile
    /// is left behind if the second step fails.
    #[instrument(skip(store, identity, auth_user), fields(user.id = %auth_user.uid()))]
    pub async fn delete_current_user(
        store: &dyn DocumentStore,
        identity: &dyn IdentityProvider,
        auth_user: &AuthUser,
    ) -> Result<(), AppError> {
        let uid = auth_user.uid();
        let failed = |reason: String| {
            AppError::internal(anyhow!("Unable to delete user: {}. Reason: {}", uid, reason))
        };

        identity
            .delete_account(uid)
            .await
            .map_err(|err| failed(err.to_string()))?;
        info!("User deleted from authentication");

        let path = DocPath::of::<User>(uid)?;
        store.apply(Write::delete(path)).await.map_err(|err| {
            warn!(error = %err, "Account deleted but profile document remains");
            failed(err.to_string())
        })?;
        info!("User deleted from Users collection");

        Ok(())
    }
}
