//! Chef identity model.
//!
//! A chef is keyed by a validated email address and carries only a one-way
//! password hash. The raw password exists transiently during registration and
//! login and is wiped from memory when dropped.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum raw password length before hashing.
pub const PASSWORD_MIN: usize = 8;

/// Maximum length of the email local part (before the `@`).
const EMAIL_LOCAL_MAX: usize = 64;

/// Validation errors returned by the chef value-object constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChefValidationError {
    EmptyEmail,
    InvalidEmail,
    PasswordTooShort { min: usize },
}

impl fmt::Display for ChefValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for ChefValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Dotted local part, dotted domain, alphabetic TLD of length >= 2.
        // The local-part length cap and the leading-hyphen domain rule are
        // enforced separately in `ChefEmail::from_owned`.
        let pattern =
            r"^[A-Za-z0-9+_-]+(\.[A-Za-z0-9+_-]+)*@[A-Za-z0-9+-]+(\.[A-Za-z0-9+-]+)*\.[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validated email address identifying a chef.
///
/// Equality is exact string equality; the ownership check on recipes compares
/// two of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChefEmail(String);

impl ChefEmail {
    /// Validate and construct a [`ChefEmail`] from borrowed input.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ChefValidationError> {
        Self::from_owned(email.as_ref().to_owned())
    }

    fn from_owned(email: String) -> Result<Self, ChefValidationError> {
        if email.trim().is_empty() {
            return Err(ChefValidationError::EmptyEmail);
        }
        let Some((local, domain)) = email.split_once('@') else {
            return Err(ChefValidationError::InvalidEmail);
        };
        if local.is_empty() || local.len() > EMAIL_LOCAL_MAX {
            return Err(ChefValidationError::InvalidEmail);
        }
        if domain.starts_with('-') {
            return Err(ChefValidationError::InvalidEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(ChefValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for ChefEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ChefEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ChefEmail> for String {
    fn from(value: ChefEmail) -> Self {
        value.0
    }
}

impl TryFrom<String> for ChefEmail {
    type Error = ChefValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Raw password submitted by a client.
///
/// Never stored, logged, or serialized; the backing buffer is zeroized when
/// the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RawPassword(String);

impl RawPassword {
    /// Validate and construct a [`RawPassword`].
    pub fn new(raw: impl Into<String>) -> Result<Self, ChefValidationError> {
        let raw = raw.into();
        if raw.chars().count() < PASSWORD_MIN {
            return Err(ChefValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        Ok(Self(raw))
    }

    /// Expose the raw secret to a hashing primitive.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword(<redacted>)")
    }
}

/// One-way password hash as produced by the hashing adapter.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash string.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The encoded hash, as persisted in the credential store.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// A registered chef: email identity plus hashed credential.
///
/// Deliberately not serializable; responses never carry chef records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chef {
    email: ChefEmail,
    password: PasswordHash,
}

impl Chef {
    /// Assemble a chef from its validated parts.
    pub fn new(email: ChefEmail, password: PasswordHash) -> Self {
        Self { email, password }
    }

    /// Email identity.
    pub fn email(&self) -> &ChefEmail {
        &self.email
    }

    /// Stored password hash.
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }
}
