use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(id: &str, name: &str, email: &str) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: None,
            signed_in_at: None,
        }
    }

    /// Profile for the mocked sign-in: the display name is the local part of the email.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();

        User {
            id: format!("user-{}", suffix),
            avatar: Some(format!(
                "https://ui-avatars.com/api/?name={}&background=2563eb&color=fff",
                name
            )),
            name,
            email: email.to_string(),
            signed_in_at: Some(Utc::now()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything but an exact "dark" or "light" reads as the default.
    pub fn parse_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            _ => Theme::default(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
