use super::Error;

/// Error when a view references something its field registry cannot resolve.
///
/// This occurs when:
/// - A view selects a field name the registry does not define
/// - A view nests a sub-selection under a name that is not a relation
/// - A view nests fields under a relation that has no target registry
/// - An annotation path walks through a segment that is not a relation
///
/// Views are written by developers, so this is always a programming mistake
/// and is never silently skipped.
#[derive(Debug)]
pub(super) struct InvalidView {
    model: Box<str>,
    field: Box<str>,
    reason: Reason,
}

#[derive(Debug)]
enum Reason {
    UnknownField,
    NotARelation,
    NoTarget,
}

impl std::error::Error for InvalidView {}

impl core::fmt::Display for InvalidView {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.reason {
            Reason::UnknownField => write!(
                f,
                "invalid view: `{}` has no field named `{}`",
                self.model, self.field
            ),
            Reason::NotARelation => write!(
                f,
                "invalid view: `{}::{}` is not a relation",
                self.model, self.field
            ),
            Reason::NoTarget => write!(
                f,
                "invalid view: relation `{}::{}` has no field registry to select from",
                self.model, self.field
            ),
        }
    }
}

impl Error {
    /// Creates an invalid view error for a name missing from the registry.
    pub fn invalid_view(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::invalid_view_with(model.into(), field.into(), Reason::UnknownField)
    }

    /// Creates an invalid view error for a sub-selection under a non-relation field.
    pub fn not_a_relation(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::invalid_view_with(model.into(), field.into(), Reason::NotARelation)
    }

    /// Creates an invalid view error for fields selected under a relation
    /// declared without a target registry.
    pub fn relation_without_target(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::invalid_view_with(model.into(), field.into(), Reason::NoTarget)
    }

    fn invalid_view_with(model: String, field: String, reason: Reason) -> Error {
        Error::from(super::ErrorKind::InvalidView(InvalidView {
            model: model.into(),
            field: field.into(),
            reason,
        }))
    }

    /// Returns `true` if this error is an invalid view error.
    pub fn is_invalid_view(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidView(_))
    }
}
