use anyhow::anyhow;
use tracing::{info, instrument};

use rollcall_core::AppError;
use rollcall_db::{DocPath, DocumentStore, Write, encode};
use rollcall_models::{User, UserSummary};

use super::model::CreateUserRequest;

pub struct UserService;

impl UserService {
    /// Writes a profile document, replacing any existing one.
    #[instrument(skip(store), fields(user.id = %dto.user_id))]
    pub async fn create_user(
        store: &dyn DocumentStore,
        dto: &CreateUserRequest,
    ) -> Result<User, AppError> {
        let user = User::new(&dto.user_id, &dto.email, &dto.name);
        let path = DocPath::of::<User>(&user.id)?;
        store.apply(Write::set(path, encode(&user)?)).await?;

        info!("User document successfully written");
        Ok(user)
    }

    /// Reads a profile. Provider failures are reported without details.
    #[instrument(skip(store))]
    pub async fn get_user(store: &dyn DocumentStore, user_id: &str) -> Result<User, AppError> {
        store
            .fetch::<User>(user_id)
            .await
            .map_err(|err| AppError::from(err).masked())?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found.")))
    }

    /// Every profile, as listed to teachers.
    #[instrument(skip(store))]
    pub async fn list_users(store: &dyn DocumentStore) -> Result<Vec<UserSummary>, AppError> {
        let users = store.fetch_all::<User>().await?;
        Ok(users.into_iter().map(UserSummary::from).collect())
    }
}
