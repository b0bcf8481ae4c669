//! Error handling types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hubauth
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// The auto-login username file could not be read
    #[error("Failed to read username file {}: {source}", path.display())]
    UsernameFile {
        /// Path that was read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No OS account exists for the user and creation is disabled
    #[error("User {username} does not exist.")]
    UserNotFound {
        /// The username that has no OS account
        username: String,
    },

    /// The external account creation command failed
    #[error("Failed to create system user {username}: {output}")]
    AccountCreation {
        /// The username being created
        username: String,
        /// Combined stdout/stderr of the command
        output: String,
    },

    /// The username is refused by the allow-list
    #[error("User {username} is not allowed to log in")]
    NotAllowed {
        /// The refused username
        username: String,
    },

    /// Login cookie issuance or validation error
    #[error("Authentication error: {message}")]
    Authentication {
        /// Description of the authentication error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// OS identity database lookup error
    #[error("Account database error: {message}")]
    AccountDatabase {
        /// Description of the lookup failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a username file error
    pub fn username_file<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::UsernameFile {
            path: path.into(),
            source,
        }
    }

    /// Create a user-not-found error
    pub fn user_not_found<S: Into<String>>(username: S) -> Self {
        Self::UserNotFound {
            username: username.into(),
        }
    }

    /// Create an account creation error
    pub fn account_creation<S: Into<String>, O: Into<String>>(username: S, output: O) -> Self {
        Self::AccountCreation {
            username: username.into(),
            output: output.into(),
        }
    }

    /// Create a not-allowed error
    pub fn not_allowed<S: Into<String>>(username: S) -> Self {
        Self::NotAllowed {
            username: username.into(),
        }
    }

    /// Create an account database error
    pub fn account_database<S: Into<String>>(message: S) -> Self {
        Self::AccountDatabase {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Authentication error creation methods
impl Error {
    /// Create an authentication error with source
    pub fn authentication_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Authentication {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether the error means the login was refused rather than broken
    pub fn is_login_rejection(&self) -> bool {
        matches!(self, Self::UserNotFound { .. } | Self::NotAllowed { .. })
    }
}
