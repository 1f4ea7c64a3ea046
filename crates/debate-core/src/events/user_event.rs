//! User projection events and reply notifications
//!
//! The identity service publishes one topic per change kind; each message
//! carries the full user record. Reply notifications go the other way.

use serde::{Deserialize, Serialize};

use crate::entities::User;

/// Topics the user projection listens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserTopic {
    Create,
    Update,
    UpdateLanguage,
    Delete,
}

impl UserTopic {
    pub const ALL: [Self; 4] = [Self::Create, Self::Update, Self::UpdateLanguage, Self::Delete];

    /// Kafka topic name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "createUser",
            Self::Update => "updateUser",
            Self::UpdateLanguage => "updateLanguage",
            Self::Delete => "deleteUser",
        }
    }

    pub fn from_topic(topic: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == topic)
    }
}

/// User record as published by the identity service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    pub user_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nation: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub address: String,
}

impl UserEvent {
    /// Parse a raw message payload
    pub fn from_slice(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }

    pub fn into_user(self) -> User {
        User {
            id: self.user_id,
            name: self.name,
            nation: self.nation,
            language: self.language,
            role: self.role,
            address: self.address,
        }
    }
}

/// Sent when someone replies to another user's comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyNotification {
    pub receiver_id: i64,
    pub sender_id: i64,
}
