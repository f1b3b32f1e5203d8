//! User data model.

use std::fmt;

use super::UserId;

/// Validation errors returned when building user records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    InvalidEmail { email: String },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "user name must not be blank"),
            Self::InvalidEmail { email } => write!(f, "'{email}' is not a valid email address"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique contact address.
    pub email: String,
}

impl User {
    /// Short projection used inside bookings and comments.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Identifier plus display name of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

/// Validated payload for registering a user.
///
/// # Examples
/// ```
/// use shareit_server::domain::NewUser;
///
/// let user = NewUser::new("Ada", "ada@example.com").expect("valid user");
/// assert_eq!(user.email(), "ada@example.com");
/// assert!(NewUser::new(" ", "ada@example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate a registration payload.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = validate_name(name.into())?;
        let email = validate_email(email.into())?;
        Ok(Self { name, email })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Unique e-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Partial update for a user; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    name: Option<String>,
    email: Option<String>,
}

impl UserPatch {
    /// Validate the fields that are present.
    pub fn new(name: Option<String>, email: Option<String>) -> Result<Self, UserValidationError> {
        Ok(Self {
            name: name.map(validate_name).transpose()?,
            email: email.map(validate_email).transpose()?,
        })
    }

    /// New e-mail address, when the patch changes it.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Apply the patch on top of `user`.
    #[must_use]
    pub fn apply(&self, user: User) -> User {
        User {
            id: user.id,
            name: self.name.clone().unwrap_or(user.name),
            email: self.email.clone().unwrap_or(user.email),
        }
    }
}

fn validate_name(name: String) -> Result<String, UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    Ok(name)
}

fn validate_email(email: String) -> Result<String, UserValidationError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(email)
    } else {
        Err(UserValidationError::InvalidEmail { email })
    }
}
