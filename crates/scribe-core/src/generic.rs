//! Message and response types shared by every layer of the pipeline.
//!
//! They stay provider-agnostic on purpose: adapters such as
//! `scribe-openai` convert them into their own wire structs via `From`.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message handed to a
/// [`CompletionClient`](crate::provider::CompletionClient).
///
/// Messages are built per call and never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(content: impl Into<String>, role: Role) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Shorthand for a [`Role::User`] message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, Role::User)
    }
}

/// Chat roles understood by the pipeline.
///
/// Only `User` messages are produced today. The `Display` implementation
/// renders the lowercase wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
        }
    }
}

/// Raw answer of the provider, passed through without transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResponseText {
    pub message: String,
}

impl ResponseText {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
