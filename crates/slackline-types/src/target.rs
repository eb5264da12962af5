//! Logical target references.
//!
//! Every operation addresses a channel or a user through a [`Target`]:
//! exactly one of an opaque identifier or a human-readable name. The
//! exactly-one rule is enforced once, in [`Target::from_parts`], instead
//! of being repeated in every operation.

use crate::error::{DirectoryError, Result, TargetKind};

/// A reference to a channel or user, by id or by name.
///
/// An id-form target is used as-is, without validation against the
/// directory. A name-form target must be resolved before the outbound
/// call is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Opaque identifier assigned by the remote service (e.g. `C0123`).
    Id(String),
    /// Human-readable name (channel display name, username, or real name).
    Name(String),
}

impl Target {
    /// Build an id-form target.
    pub fn id(id: impl Into<String>) -> Self {
        Target::Id(id.into())
    }

    /// Build a name-form target.
    pub fn name(name: impl Into<String>) -> Self {
        Target::Name(name.into())
    }

    /// Validate that exactly one of `id` / `name` was supplied.
    ///
    /// Empty strings count as absent. Supplying both fails with
    /// [`AmbiguousInput`](DirectoryError::AmbiguousInput); supplying
    /// neither fails with [`MissingInput`](DirectoryError::MissingInput).
    pub fn from_parts(kind: TargetKind, id: Option<&str>, name: Option<&str>) -> Result<Self> {
        let id = id.filter(|s| !s.is_empty());
        let name = name.filter(|s| !s.is_empty());

        match (id, name) {
            (Some(_), Some(_)) => Err(DirectoryError::AmbiguousInput { kind }),
            (None, None) => Err(DirectoryError::MissingInput { kind }),
            (Some(id), None) => Ok(Target::Id(id.to_owned())),
            (None, Some(name)) => Ok(Target::Name(name.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_only_is_id_form() {
        let t = Target::from_parts(TargetKind::Channel, Some("C1"), None).unwrap();
        assert_eq!(t, Target::Id("C1".into()));
    }

    #[test]
    fn name_only_is_name_form() {
        let t = Target::from_parts(TargetKind::Channel, None, Some("general")).unwrap();
        assert_eq!(t, Target::Name("general".into()));
    }

    #[test]
    fn both_is_ambiguous() {
        let err = Target::from_parts(TargetKind::User, Some("U1"), Some("alice")).unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::AmbiguousInput {
                kind: TargetKind::User
            }
        ));
    }

    #[test]
    fn neither_is_missing() {
        let err = Target::from_parts(TargetKind::Channel, None, None).unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::MissingInput {
                kind: TargetKind::Channel
            }
        ));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let err = Target::from_parts(TargetKind::Channel, Some(""), Some("")).unwrap_err();
        assert!(matches!(err, DirectoryError::MissingInput { .. }));

        let t = Target::from_parts(TargetKind::Channel, Some(""), Some("general")).unwrap();
        assert_eq!(t, Target::Name("general".into()));
    }

    #[test]
    fn constructors() {
        assert_eq!(Target::id("C9"), Target::Id("C9".into()));
        assert_eq!(Target::name("dev"), Target::Name("dev".into()));
    }
}
