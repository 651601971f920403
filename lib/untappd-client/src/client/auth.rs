use std::fmt;

/// Credentials for operations that act on behalf of a logged-in user.
///
/// The Untappd v3 API signs requests with HTTP Basic auth where the password
/// slot carries the lowercase hex MD5 digest of the user's password, never
/// the password itself. The digest is derived once at construction; the
/// plain password is not retained.
///
/// # Display safety
///
/// The hash grants account access just like a password, so `Debug` and
/// `Display` redact it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password_hash: String,
}

impl Credentials {
    /// Derives credentials from a username and plain password.
    ///
    /// The MD5 scheme is dictated by the remote API; it must stay
    /// bit-for-bit compatible with the service's signing expectations.
    pub(crate) fn derive(username: &str, password: &str) -> Self {
        let digest = md5::compute(password.as_bytes());
        Self {
            username: username.to_string(),
            password_hash: format!("{digest:x}"),
        }
    }

    /// The username half of the Basic auth pair.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The derived password hash sent in the Basic auth password slot.
    pub(crate) fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Basic (username: {})", self.username)
    }
}
