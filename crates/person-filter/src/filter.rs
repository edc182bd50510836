//! Discriminated filtering over [`Person`] slices.
//!
//! [`filter_persons`] is the single scanning routine: it keeps records whose
//! tag selects the requested shape and whose constrained fields all match.
//! The result borrows from the input and preserves its order. The element
//! type is the narrowed shape, so callers never re-check the tag.

use tracing::{debug, trace};

use crate::criteria::{AdminCriteria, FieldCriteria, UserCriteria};
use crate::error::FilterError;
use crate::person::{Admin, Person, PersonKind, User};

/// A record shape that can be narrowed out of a [`Person`].
pub trait PersonShape: Sized {
    /// Tag carried by records of this shape.
    const KIND: PersonKind;

    /// Partial criteria over this shape's fields.
    type Criteria;

    /// Returns the inner record when `person` has this shape.
    fn narrow(person: &Person) -> Option<&Self>;

    /// Returns `true` when every constrained field matches.
    fn matches(&self, criteria: &Self::Criteria) -> bool;
}

impl PersonShape for User {
    const KIND: PersonKind = PersonKind::User;
    type Criteria = UserCriteria;

    fn narrow(person: &Person) -> Option<&Self> {
        person.as_user()
    }

    fn matches(&self, criteria: &UserCriteria) -> bool {
        criteria.matches(self)
    }
}

impl PersonShape for Admin {
    const KIND: PersonKind = PersonKind::Admin;
    type Criteria = AdminCriteria;

    fn narrow(person: &Person) -> Option<&Self> {
        person.as_admin()
    }

    fn matches(&self, criteria: &AdminCriteria) -> bool {
        criteria.matches(self)
    }
}

/// Returns the records of shape `S` that satisfy `criteria`, in input order.
///
/// # Example
///
/// ```
/// use person_filter::{Admin, AdminCriteria, Person, filter_persons};
///
/// let persons = vec![
///     Person::user("Alice", 40, "Developer"),
///     Person::admin("Bob", 40, "Administrator"),
/// ];
///
/// let admins = filter_persons::<Admin>(&persons, &AdminCriteria::new().with_age(40));
///
/// assert_eq!(admins, vec![&Admin::new("Bob", 40, "Administrator")]);
/// ```
#[must_use]
pub fn filter_persons<'a, S: PersonShape>(
    persons: &'a [Person],
    criteria: &S::Criteria,
) -> Vec<&'a S> {
    persons
        .iter()
        .filter_map(S::narrow)
        .filter(|record| record.matches(criteria))
        .collect()
}

/// Returns the users that satisfy `criteria`, in input order.
#[must_use]
pub fn filter_users<'a>(persons: &'a [Person], criteria: &UserCriteria) -> Vec<&'a User> {
    filter_persons::<User>(persons, criteria)
}

/// Returns the admins that satisfy `criteria`, in input order.
#[must_use]
pub fn filter_admins<'a>(persons: &'a [Person], criteria: &AdminCriteria) -> Vec<&'a Admin> {
    filter_persons::<Admin>(persons, criteria)
}

/// Records selected by [`filter_by_kind`], narrowed to the requested kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Matching user records.
    Users(Vec<&'a User>),
    /// Matching admin records.
    Admins(Vec<&'a Admin>),
}

impl<'a> Selection<'a> {
    /// Returns the kind every selected record has.
    #[must_use]
    pub const fn kind(&self) -> PersonKind {
        match self {
            Self::Users(_) => PersonKind::User,
            Self::Admins(_) => PersonKind::Admin,
        }
    }

    /// Returns the number of selected records.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Users(users) => users.len(),
            Self::Admins(admins) => admins.len(),
        }
    }

    /// Returns `true` when nothing matched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the users, or `None` if admins were selected.
    #[must_use]
    pub fn into_users(self) -> Option<Vec<&'a User>> {
        match self {
            Self::Users(users) => Some(users),
            Self::Admins(_) => None,
        }
    }

    /// Returns the admins, or `None` if users were selected.
    #[must_use]
    pub fn into_admins(self) -> Option<Vec<&'a Admin>> {
        match self {
            Self::Admins(admins) => Some(admins),
            Self::Users(_) => None,
        }
    }

    /// Copies the selected records back into tagged [`Person`] values.
    #[must_use]
    pub fn to_persons(&self) -> Vec<Person> {
        match self {
            Self::Users(users) => users.iter().map(|&user| Person::from(user.clone())).collect(),
            Self::Admins(admins) => admins
                .iter()
                .map(|&admin| Person::from(admin.clone()))
                .collect(),
        }
    }
}

/// Filters by a runtime tag with criteria keyed by field name.
///
/// The criteria are validated against `kind` before any record is scanned,
/// so an invalid mapping fails even when `persons` is empty.
///
/// # Errors
///
/// Returns [`FilterError::TagFieldInCriteria`], [`FilterError::UnknownField`]
/// or [`FilterError::TypeMismatch`] when `criteria` does not fit `kind`.
///
/// # Example
///
/// ```
/// use person_filter::{FieldCriteria, PersonKind, filter_by_kind, sample_persons};
///
/// let persons = sample_persons();
/// let criteria = FieldCriteria::new().with("age", 25);
/// let selection = filter_by_kind(&persons, PersonKind::User, &criteria).expect("valid criteria");
///
/// assert_eq!(selection.kind(), PersonKind::User);
/// assert_eq!(selection.len(), 2);
///
/// let invalid = FieldCriteria::new().with("role", "CEO");
/// assert!(filter_by_kind(&persons, PersonKind::User, &invalid).is_err());
/// ```
pub fn filter_by_kind<'a>(
    persons: &'a [Person],
    kind: PersonKind,
    criteria: &FieldCriteria,
) -> Result<Selection<'a>, FilterError> {
    let selection = match kind {
        PersonKind::User => {
            let typed =
                UserCriteria::try_from(criteria).inspect_err(|e| log_rejection(kind, e))?;
            Selection::Users(filter_users(persons, &typed))
        }
        PersonKind::Admin => {
            let typed =
                AdminCriteria::try_from(criteria).inspect_err(|e| log_rejection(kind, e))?;
            Selection::Admins(filter_admins(persons, &typed))
        }
    };
    trace!(
        kind = %kind,
        scanned = persons.len(),
        matched = selection.len(),
        "filtered persons"
    );
    Ok(selection)
}

fn log_rejection(kind: PersonKind, error: &FilterError) {
    debug!(kind = %kind, error = %error, "criteria rejected");
}
