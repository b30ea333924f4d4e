use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Theme, User},
    repositories::KeyValueStore,
};

pub const THEME_KEY: &str = "theme";
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, Default, PartialEq)]
struct SessionState {
    theme: Theme,
    user: Option<User>,
}

/// Theme and signed-in user, read once from storage and written back on change.
pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
    state: RwLock<SessionState>,
}

impl SessionService {
    pub async fn load(store: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let theme = Theme::parse_stored(store.get(THEME_KEY).await?.as_deref());

        let user = match store.get(USER_KEY).await? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("Ignoring unreadable stored user profile: {}", e);
                    None
                }
            },
            None => None,
        };

        if let Some(user) = &user {
            log::info!("Restored session for {}", user.email);
        }

        Ok(Self {
            store,
            state: RwLock::new(SessionState { theme, user }),
        })
    }

    pub async fn theme(&self) -> Theme {
        self.state.read().await.theme
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn set_theme(&self, theme: Theme) -> AppResult<Theme> {
        let mut state = self.state.write().await;
        self.store.set(THEME_KEY, theme.as_str()).await?;
        state.theme = theme;
        Ok(theme)
    }

    pub async fn toggle_theme(&self) -> AppResult<Theme> {
        let mut state = self.state.write().await;
        let theme = state.theme.toggled();
        self.store.set(THEME_KEY, theme.as_str()).await?;
        state.theme = theme;
        Ok(theme)
    }

    /// Mocked sign-in: any non-empty email/password pair is accepted.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<User> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::ValidationError(
                "Email and password are required.".to_string(),
            ));
        }

        let user = User::from_email(email);
        let mut state = self.state.write().await;
        self.store
            .set(USER_KEY, &serde_json::to_string(&user)?)
            .await?;
        state.user = Some(user.clone());

        log::info!("Signed in {} as {}", user.email, user.id);
        Ok(user)
    }

    /// Forgets the user; the theme stays.
    pub async fn sign_out(&self) -> AppResult<()> {
        let mut state = self.state.write().await;
        self.store.remove(USER_KEY).await?;
        if let Some(user) = state.user.take() {
            log::info!("Signed out {}", user.email);
        }
        Ok(())
    }
}
