//! Identity of the person using the client.
//!
//! A [`Session`] is built once from configuration and handed to every screen
//! and action that cares who is signed in.

use crate::config::{Config, UserProfile};
use crate::error::{MarqueeError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserProfile>,
}

impl Session {
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A profile counts as signed in once it carries an email address.
    pub fn from_config(config: &Config) -> Self {
        match &config.user {
            Some(user) if !user.email.trim().is_empty() => Self::signed_in(user.clone()),
            _ => Self::anonymous(),
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Name to greet the user with: display name, else email.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| {
            if u.name.trim().is_empty() {
                u.email.as_str()
            } else {
                u.name.as_str()
            }
        })
    }

    /// Gate for mutating actions.
    pub fn require_signed_in(&self) -> Result<&UserProfile> {
        self.user.as_ref().ok_or_else(|| {
            MarqueeError::Auth(
                "sign in first: run 'marquee config set user.email <email>'".to_string(),
            )
        })
    }
}
