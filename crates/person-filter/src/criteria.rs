//! Partial match criteria for user and admin records.
//!
//! Typed criteria ([`UserCriteria`], [`AdminCriteria`]) hold one optional
//! constraint per non-tag field. [`FieldCriteria`] is the dynamic form keyed by
//! field name; converting it into a typed criteria value is where unknown
//! fields and mistyped values are rejected.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FilterError;
use crate::person::{Admin, PersonKind, User};

/// Name of the discriminant field, which criteria may never constrain.
const TAG_FIELD: &str = "type";

const EXPECTED_TEXT: &str = "a string";
const EXPECTED_AGE: &str = "an unsigned 32-bit integer";

/// Constraints over [`User`] fields. Absent fields impose no constraint.
///
/// # Example
///
/// ```
/// use person_filter::{User, UserCriteria};
///
/// let criteria = UserCriteria::new().with_age(25).with_occupation("Developer");
///
/// assert!(criteria.matches(&User::new("Alice", 25, "Developer")));
/// assert!(!criteria.matches(&User::new("Bob", 25, "Designer")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCriteria {
    name: Option<String>,
    age: Option<u32>,
    occupation: Option<String>,
}

impl UserCriteria {
    /// Creates criteria that match every user.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires an exact name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Requires an exact age.
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Requires an exact occupation.
    #[must_use]
    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    /// Returns `true` when no field is constrained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.occupation.is_none()
    }

    /// Returns `true` when every constrained field equals the user's value.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        self.name.as_ref().is_none_or(|name| *name == user.name)
            && self.age.is_none_or(|age| age == user.age)
            && self
                .occupation
                .as_ref()
                .is_none_or(|occupation| *occupation == user.occupation)
    }
}

impl TryFrom<&FieldCriteria> for UserCriteria {
    type Error = FilterError;

    fn try_from(fields: &FieldCriteria) -> Result<Self, Self::Error> {
        fields.reject_tag_field()?;
        let mut criteria = Self::new();
        for (field, value) in fields {
            match field {
                "name" => criteria.name = Some(expect_text(field, value)?),
                "age" => criteria.age = Some(expect_age(field, value)?),
                "occupation" => criteria.occupation = Some(expect_text(field, value)?),
                _ => return Err(unknown_field(PersonKind::User, field)),
            }
        }
        Ok(criteria)
    }
}

/// Constraints over [`Admin`] fields. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminCriteria {
    name: Option<String>,
    age: Option<u32>,
    role: Option<String>,
}

impl AdminCriteria {
    /// Creates criteria that match every admin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires an exact name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Requires an exact age.
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Requires an exact role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Returns `true` when no field is constrained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.role.is_none()
    }

    /// Returns `true` when every constrained field equals the admin's value.
    #[must_use]
    pub fn matches(&self, admin: &Admin) -> bool {
        self.name.as_ref().is_none_or(|name| *name == admin.name)
            && self.age.is_none_or(|age| age == admin.age)
            && self.role.as_ref().is_none_or(|role| *role == admin.role)
    }
}

impl TryFrom<&FieldCriteria> for AdminCriteria {
    type Error = FilterError;

    fn try_from(fields: &FieldCriteria) -> Result<Self, Self::Error> {
        fields.reject_tag_field()?;
        let mut criteria = Self::new();
        for (field, value) in fields {
            match field {
                "name" => criteria.name = Some(expect_text(field, value)?),
                "age" => criteria.age = Some(expect_age(field, value)?),
                "role" => criteria.role = Some(expect_text(field, value)?),
                _ => return Err(unknown_field(PersonKind::Admin, field)),
            }
        }
        Ok(criteria)
    }
}

/// Criteria keyed by field name, validated against a kind only when converted.
///
/// Keys are kept sorted, so validation reports the same offending field for
/// the same mapping regardless of insertion order.
///
/// # Example
///
/// ```
/// use person_filter::{AdminCriteria, FieldCriteria};
///
/// let fields = FieldCriteria::from_json(r#"{"age": 40, "role": "CEO"}"#).expect("valid JSON");
/// let criteria = AdminCriteria::try_from(&fields).expect("valid admin fields");
///
/// assert_eq!(criteria, AdminCriteria::new().with_age(40).with_role("CEO"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCriteria(BTreeMap<String, Value>);

impl FieldCriteria {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the constraint on `field`.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Parses a JSON object of field/value pairs.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::CriteriaParse`] if the input is not valid JSON
    /// or is not an object.
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        serde_json::from_str(json).map_err(|e| FilterError::CriteriaParse {
            message: e.to_string(),
        })
    }

    /// Iterates over the field/value pairs in key order.
    pub fn iter(&self) -> FieldCriteriaIter<'_> {
        FieldCriteriaIter(self.0.iter())
    }

    /// Returns the number of constrained fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no field is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn reject_tag_field(&self) -> Result<(), FilterError> {
        if self.0.contains_key(TAG_FIELD) {
            return Err(FilterError::TagFieldInCriteria);
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldCriteria {
    type Item = (&'a str, &'a Value);
    type IntoIter = FieldCriteriaIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the field/value pairs of a [`FieldCriteria`], in key order.
#[derive(Debug, Clone)]
pub struct FieldCriteriaIter<'a>(btree_map::Iter<'a, String, Value>);

impl<'a> Iterator for FieldCriteriaIter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(field, value)| (field.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for FieldCriteriaIter<'_> {}

fn unknown_field(kind: PersonKind, field: &str) -> FilterError {
    FilterError::UnknownField {
        kind,
        field: field.to_owned(),
    }
}

fn expect_text(field: &str, value: &Value) -> Result<String, FilterError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Err(type_mismatch(field, EXPECTED_TEXT, other)),
    }
}

fn expect_age(field: &str, value: &Value) -> Result<u32, FilterError> {
    if let Some(age) = value.as_u64().and_then(|age| u32::try_from(age).ok()) {
        return Ok(age);
    }
    let found = if value.is_i64() || value.is_u64() {
        "an out-of-range integer"
    } else {
        describe(value)
    };
    Err(FilterError::TypeMismatch {
        field: field.to_owned(),
        expected: EXPECTED_AGE,
        found,
    })
}

fn type_mismatch(field: &str, expected: &'static str, value: &Value) -> FilterError {
    FilterError::TypeMismatch {
        field: field.to_owned(),
        expected,
        found: describe(value),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(number) if number.is_f64() => "a floating-point number",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    //! Covers typed matching and dynamic criteria validation.

    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;

    #[fixture]
    fn alice() -> User {
        User::new("Alice", 25, "Developer")
    }

    #[rstest]
    fn empty_user_criteria_match_everything(alice: User) {
        let criteria = UserCriteria::new();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&alice));
    }

    #[rstest]
    #[case(UserCriteria::new().with_name("Alice"), true)]
    #[case(UserCriteria::new().with_age(25), true)]
    #[case(UserCriteria::new().with_age(25).with_occupation("Developer"), true)]
    #[case(UserCriteria::new().with_age(26), false)]
    #[case(UserCriteria::new().with_name("alice"), false)]
    #[case(UserCriteria::new().with_name("Alice "), false)]
    #[case(UserCriteria::new().with_age(25).with_occupation("Designer"), false)]
    fn user_criteria_use_exact_equality(
        alice: User,
        #[case] criteria: UserCriteria,
        #[case] expected: bool,
    ) {
        assert_eq!(criteria.matches(&alice), expected);
    }

    #[rstest]
    #[case(AdminCriteria::new(), true)]
    #[case(AdminCriteria::new().with_role("CEO"), true)]
    #[case(AdminCriteria::new().with_name("Dave").with_age(40), true)]
    #[case(AdminCriteria::new().with_role("ceo"), false)]
    #[case(AdminCriteria::new().with_age(41).with_role("CEO"), false)]
    fn admin_criteria_use_exact_equality(#[case] criteria: AdminCriteria, #[case] expected: bool) {
        assert_eq!(criteria.matches(&Admin::new("Dave", 40, "CEO")), expected);
    }

    #[test]
    fn converts_valid_user_fields() {
        let fields = FieldCriteria::new()
            .with("name", "Alice")
            .with("age", 25)
            .with("occupation", "Developer");
        let criteria = UserCriteria::try_from(&fields).expect("valid fields");
        assert_eq!(
            criteria,
            UserCriteria::new()
                .with_name("Alice")
                .with_age(25)
                .with_occupation("Developer")
        );
    }

    #[test]
    fn empty_fields_convert_to_empty_criteria() {
        let fields = FieldCriteria::new();
        assert_eq!(UserCriteria::try_from(&fields), Ok(UserCriteria::new()));
        assert_eq!(AdminCriteria::try_from(&fields), Ok(AdminCriteria::new()));
    }

    #[test]
    fn later_insert_replaces_earlier_value() {
        let fields = FieldCriteria::new().with("age", 25).with("age", 40);
        assert_eq!(fields.len(), 1);
        assert_eq!(
            AdminCriteria::try_from(&fields),
            Ok(AdminCriteria::new().with_age(40))
        );
    }

    #[rstest]
    #[case::role_on_user("role", PersonKind::User)]
    #[case::occupation_on_admin("occupation", PersonKind::Admin)]
    #[case::unknown_on_user("email", PersonKind::User)]
    #[case::case_sensitive_on_admin("Name", PersonKind::Admin)]
    fn rejects_fields_outside_the_kind(#[case] field: &str, #[case] kind: PersonKind) {
        let fields = FieldCriteria::new().with(field, "x");
        let expected = FilterError::UnknownField {
            kind,
            field: field.to_owned(),
        };
        match kind {
            PersonKind::User => assert_eq!(UserCriteria::try_from(&fields), Err(expected)),
            PersonKind::Admin => assert_eq!(AdminCriteria::try_from(&fields), Err(expected)),
        }
    }

    #[test]
    fn rejects_tag_field_before_other_fields() {
        let fields = FieldCriteria::new().with("type", "user").with("email", "x");
        assert_eq!(
            UserCriteria::try_from(&fields),
            Err(FilterError::TagFieldInCriteria)
        );
        assert_eq!(
            AdminCriteria::try_from(&fields),
            Err(FilterError::TagFieldInCriteria)
        );
    }

    #[rstest]
    #[case::age_as_string("age", json!("25"), EXPECTED_AGE, "a string")]
    #[case::age_as_float("age", json!(25.0), EXPECTED_AGE, "a floating-point number")]
    #[case::negative_age("age", json!(-1), EXPECTED_AGE, "an out-of-range integer")]
    #[case::huge_age("age", json!(4_294_967_296_u64), EXPECTED_AGE, "an out-of-range integer")]
    #[case::name_as_number("name", json!(7), EXPECTED_TEXT, "an integer")]
    #[case::name_as_null("name", json!(null), EXPECTED_TEXT, "null")]
    #[case::name_as_array("name", json!(["Alice"]), EXPECTED_TEXT, "an array")]
    fn rejects_mistyped_values(
        #[case] field: &str,
        #[case] value: Value,
        #[case] expected: &'static str,
        #[case] found: &'static str,
    ) {
        let fields = FieldCriteria::new().with(field, value);
        assert_eq!(
            UserCriteria::try_from(&fields),
            Err(FilterError::TypeMismatch {
                field: field.to_owned(),
                expected,
                found,
            })
        );
    }

    #[test]
    fn parses_criteria_from_json_object() {
        let fields = FieldCriteria::from_json(r#"{"age": 25}"#).expect("valid JSON");
        assert_eq!(fields, FieldCriteria::new().with("age", 25));
        assert!(!fields.is_empty());
    }

    #[test]
    fn borrowed_criteria_iterate_in_key_order() {
        let fields = FieldCriteria::new()
            .with("role", "CEO")
            .with("age", 40)
            .with("name", "Dave");
        let mut seen = Vec::new();
        for (field, value) in &fields {
            seen.push((field, value.clone()));
        }
        assert_eq!(
            seen,
            vec![("age", json!(40)), ("name", json!("Dave")), ("role", json!("CEO"))]
        );
        assert_eq!(fields.iter().len(), 3);
    }

    #[test]
    fn criteria_values_support_full_equality() {
        fn assert_eq_impl<T: Eq>(_: &T) {}

        let fields = FieldCriteria::from_json(r#"{"name": "Dave"}"#).expect("valid JSON");
        assert_eq_impl(&fields);
        assert_eq!(fields, FieldCriteria::new().with("name", "Dave"));
        assert_ne!(fields, FieldCriteria::new().with("name", "dave"));
    }

    #[rstest]
    #[case::malformed("{age: 25}")]
    #[case::array("[1, 2]")]
    #[case::scalar("25")]
    fn rejects_non_object_json(#[case] json: &str) {
        assert!(matches!(
            FieldCriteria::from_json(json),
            Err(FilterError::CriteriaParse { .. })
        ));
    }
}
