//! Discriminated filtering over tagged user and admin records.
//!
//! A [`Person`] is either a [`User`] or an [`Admin`]. Filtering selects the
//! records of one kind, in their original order, whose constrained fields all
//! equal the requested values. The result is narrowed to the selected shape:
//! filtering for users yields `Vec<&User>`, never a mixed list.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Typed filtering with [`filter_users`], [`filter_admins`], or the generic
//!   [`filter_persons`]
//! - Runtime-tag filtering with [`filter_by_kind`], taking criteria keyed by
//!   field name and rejecting unknown fields or mistyped values up front
//! - The four-record sample list, deterministic record generation, and the
//!   demo report printed by the `person-filter-demo` binary
//!
//! # Example
//!
//! ```
//! use person_filter::{UserCriteria, filter_users, sample_persons};
//!
//! let persons = sample_persons();
//! let users = filter_users(&persons, &UserCriteria::new().with_age(25));
//! let names: Vec<_> = users.iter().map(|user| user.name.as_str()).collect();
//!
//! assert_eq!(names, ["Alice", "Charlie"]);
//! ```

mod criteria;
mod demo;
mod error;
mod filter;
mod person;
mod sample;

pub use criteria::{AdminCriteria, FieldCriteria, FieldCriteriaIter, UserCriteria};
pub use demo::{DemoSummary, run_demo};
pub use error::{FilterError, ReportError};
pub use filter::{
    PersonShape, Selection, filter_admins, filter_by_kind, filter_persons, filter_users,
};
pub use person::{Admin, Person, PersonKind, User};
pub use sample::{generate_persons, sample_persons};
