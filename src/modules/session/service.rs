use anyhow::Context;
use usergate_auth::TokenCodec;
use usergate_core::AppError;
use usergate_db::UserStore;
use usergate_models::LoginDto;

const LOGIN_FAILED: &str = "Invalid email or password";

pub struct SessionService;

impl SessionService {
    /// Checks the credentials and issues an access token for the user.
    ///
    /// Unknown emails, wrong passwords and deleted accounts all fail with
    /// the same message.
    pub async fn login(
        users: &dyn UserStore,
        tokens: &TokenCodec,
        dto: LoginDto,
    ) -> Result<String, AppError> {
        let user = users
            .find_by_email(&dto.email)
            .await
            .context("Failed to fetch user by email")?
            .ok_or_else(|| AppError::login_failed(LOGIN_FAILED))?;

        if !user.authenticate(&dto.password)? {
            tracing::warn!(user_id = user.id, "login rejected");
            return Err(AppError::login_failed(LOGIN_FAILED));
        }

        tokens.issue(user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usergate_config::JwtConfig;
    use usergate_core::ErrorKind;
    use usergate_db::InMemoryStore;
    use usergate_models::User;

    async fn store_with_user(deleted: bool) -> InMemoryStore {
        let store = InMemoryStore::new();
        store
            .insert(User {
                id: 1,
                name: "jinny".to_string(),
                email: "test@mail.com".to_string(),
                password_hash: bcrypt::hash("test", 4).unwrap(),
                deleted,
            })
            .await;
        store
    }

    fn login(email: &str, password: &str) -> LoginDto {
        LoginDto {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn codec() -> TokenCodec {
        TokenCodec::new(&JwtConfig::new("session-test-secret-at-least-32-chars"))
    }

    #[tokio::test]
    async fn test_login_issues_token_for_user() {
        let store = store_with_user(false).await;
        let codec = codec();
        let token = SessionService::login(&store, &codec, login("test@mail.com", "test"))
            .await
            .unwrap();
        assert_eq!(codec.decode(&token).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_login_failures() {
        let store = store_with_user(false).await;
        for dto in [login("test@mail.com", "wrong"), login("nobody@mail.com", "test")] {
            let err = SessionService::login(&store, &codec(), dto).await.unwrap_err();
            assert!(err.is(ErrorKind::LoginFailed));
        }
    }

    #[tokio::test]
    async fn test_deleted_user_cannot_log_in() {
        let store = store_with_user(true).await;
        let err = SessionService::login(&store, &codec(), login("test@mail.com", "test"))
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::LoginFailed));
    }
}
