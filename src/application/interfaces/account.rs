use crate::error::AppError;
use crate::presentation::user::UserInfo;
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Exchanges the credentials for a session token right away
    ///
    /// Calling it is optional: every other operation authenticates on demand.
    async fn authenticate(&self) -> Result<(), AppError>;

    /// Gets the profile of the authenticated account
    ///
    /// # Returns
    /// * Every user record of the account, never empty
    async fn get_own_user_info(&self) -> Result<Vec<UserInfo>, AppError>;
}
