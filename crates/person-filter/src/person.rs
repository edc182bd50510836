//! Tagged person records.
//!
//! A [`Person`] is exactly one of two shapes, [`User`] or [`Admin`]. The enum
//! variant is the discriminant, so a record can never mix fields from both
//! shapes or lose its tag. The serde representation keeps the flat
//! `{"type": "user", ...}` layout used by the sample data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Discriminant selecting one of the two record shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    /// Regular user records.
    User,
    /// Administrator records.
    Admin,
}

impl PersonKind {
    /// Both kinds, in declaration order.
    pub const ALL: [Self; 2] = [Self::User, Self::Admin];

    /// Returns the tag value carried by records of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Returns the non-tag field names that criteria may constrain for this
    /// kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use person_filter::PersonKind;
    ///
    /// assert_eq!(PersonKind::Admin.field_names(), &["name", "age", "role"]);
    /// ```
    #[must_use]
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::User => &["name", "age", "occupation"],
            Self::Admin => &["name", "age", "role"],
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonKind {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(FilterError::UnknownKind {
                value: value.to_owned(),
            }),
        }
    }
}

/// A regular user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Age in whole years.
    pub age: u32,
    /// Free-text occupation.
    pub occupation: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32, occupation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            occupation: occupation.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (user, age {}, occupation: {})",
            self.name, self.age, self.occupation
        )
    }
}

/// An administrator record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Admin {
    /// Display name.
    pub name: String,
    /// Age in whole years.
    pub age: u32,
    /// Administrative role.
    pub role: String,
}

impl Admin {
    /// Creates an admin record.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            role: role.into(),
        }
    }
}

impl fmt::Display for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (admin, age {}, role: {})", self.name, self.age, self.role)
    }
}

/// A record that is either a [`User`] or an [`Admin`].
///
/// # Example
///
/// ```
/// use person_filter::{Person, PersonKind};
///
/// let json = r#"{"type": "admin", "name": "Bob", "age": 40, "role": "Administrator"}"#;
/// let person: Person = serde_json::from_str(json).expect("valid record");
///
/// assert_eq!(person.kind(), PersonKind::Admin);
/// assert_eq!(person.name(), "Bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Person {
    /// A user record, tagged `"user"`.
    User(User),
    /// An admin record, tagged `"admin"`.
    Admin(Admin),
}

impl Person {
    /// Shorthand for `Person::User(User::new(..))`.
    #[must_use]
    pub fn user(name: impl Into<String>, age: u32, occupation: impl Into<String>) -> Self {
        Self::User(User::new(name, age, occupation))
    }

    /// Shorthand for `Person::Admin(Admin::new(..))`.
    #[must_use]
    pub fn admin(name: impl Into<String>, age: u32, role: impl Into<String>) -> Self {
        Self::Admin(Admin::new(name, age, role))
    }

    /// Returns the record's tag.
    #[must_use]
    pub const fn kind(&self) -> PersonKind {
        match self {
            Self::User(_) => PersonKind::User,
            Self::Admin(_) => PersonKind::Admin,
        }
    }

    /// Returns the name shared by both shapes.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::User(user) => &user.name,
            Self::Admin(admin) => &admin.name,
        }
    }

    /// Returns the age shared by both shapes.
    #[must_use]
    pub const fn age(&self) -> u32 {
        match self {
            Self::User(user) => user.age,
            Self::Admin(admin) => admin.age,
        }
    }

    /// Returns the inner user record, if this is a user.
    #[must_use]
    pub const fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::Admin(_) => None,
        }
    }

    /// Returns the inner admin record, if this is an admin.
    #[must_use]
    pub const fn as_admin(&self) -> Option<&Admin> {
        match self {
            Self::Admin(admin) => Some(admin),
            Self::User(_) => None,
        }
    }
}

impl From<User> for Person {
    fn from(user: User) -> Self {
        Self::User(user)
    }
}

impl From<Admin> for Person {
    fn from(admin: Admin) -> Self {
        Self::Admin(admin)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(user) => fmt::Display::fmt(user, f),
            Self::Admin(admin) => fmt::Display::fmt(admin, f),
        }
    }
}
