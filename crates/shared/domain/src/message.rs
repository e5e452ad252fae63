//! Notification payloads handed to a mail provider.

use serde::{Deserialize, Serialize};

use crate::constants::{WELCOME_BODY, WELCOME_SENDER_ADDRESS, WELCOME_SENDER_NAME, WELCOME_SUBJECT};

/// A named mail address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
    pub name: String,
    pub address: String,
}

impl Mailbox {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

impl std::fmt::Display for Mailbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.address)
    }
}

/// Message delivered through a mail provider.
///
/// `body` may contain HTML markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub to: Mailbox,
    pub from: Mailbox,
    pub subject: String,
    pub body: String,
}

impl Message {
    /// Welcome message for a freshly registered user.
    ///
    /// Sender, subject and body are fixed; only the recipient varies.
    pub fn welcome(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            to: Mailbox::new(name, email),
            from: Mailbox::new(WELCOME_SENDER_NAME, WELCOME_SENDER_ADDRESS),
            subject: WELCOME_SUBJECT.to_string(),
            body: WELCOME_BODY.to_string(),
        }
    }
}
