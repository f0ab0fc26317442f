//! Session token persistence for the CLI.
//!
//! The panel keeps the API token in a server-side session; the CLI keeps
//! it in a file between invocations. `logout` deletes the file, so the
//! session is gone from disk as well as from memory.
//!
//! # Environment Variables
//!
//! - `MARIGOLD_TOKEN_FILE` - Token file path (default: `.marigold-token`)

use std::path::PathBuf;

use thiserror::Error;

use marigold_client::{AdminApi, ApiError, ApiSession};

/// Errors that can occur managing the persisted session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No token file; the user has not logged in.
    #[error("Not logged in - run `mg-cli login` first")]
    NotLoggedIn,

    /// Reading or writing the token file failed.
    #[error("Token file error: {0}")]
    Io(#[from] std::io::Error),

    /// The API rejected the credentials or the session.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Path of the token file.
#[must_use]
pub fn token_file() -> PathBuf {
    std::env::var("MARIGOLD_TOKEN_FILE")
        .map_or_else(|_| PathBuf::from(".marigold-token"), PathBuf::from)
}

/// Log in and persist the session token.
///
/// # Errors
///
/// Returns [`SessionError::Api`] when the credentials are rejected, or
/// an I/O error if the token file cannot be written.
pub async fn login(api: &AdminApi, email: &str, password: &str) -> Result<(), SessionError> {
    let session = api.login(email, password).await?;
    save(&session)?;
    tracing::info!("Logged in as {email}");
    tracing::info!("Token saved to {}", token_file().display());
    Ok(())
}

/// Remove the persisted session token.
///
/// # Errors
///
/// Returns an I/O error if the token file exists but cannot be removed.
pub fn logout() -> Result<(), SessionError> {
    let path = token_file();
    match std::fs::remove_file(&path) {
        Ok(()) => {
            tracing::info!("Logged out, removed {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("Already logged out");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Load the persisted session.
///
/// # Errors
///
/// Returns [`SessionError::NotLoggedIn`] when no token file exists.
pub fn load() -> Result<ApiSession, SessionError> {
    let path = token_file();
    match std::fs::read_to_string(&path) {
        Ok(token) => {
            let token = token.trim();
            if token.is_empty() {
                Err(SessionError::NotLoggedIn)
            } else {
                Ok(ApiSession::new(token))
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(SessionError::NotLoggedIn),
        Err(err) => Err(err.into()),
    }
}

/// Persist the session token, owner-readable only on Unix.
fn save(session: &ApiSession) -> Result<(), std::io::Error> {
    let path = token_file();
    std::fs::write(&path, session.expose())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}
