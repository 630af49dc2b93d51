use super::Error;

/// Error when an annotated field could not be computed.
///
/// Used as context on top of the error the annotator returned, so the chain
/// reads "annotation of `field` at `path` failed: <cause>".
#[derive(Debug)]
pub(super) struct AnnotationFailed {
    field: Box<str>,
    path: Box<str>,
}

impl std::error::Error for AnnotationFailed {}

impl core::fmt::Display for AnnotationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.path.is_empty() {
            write!(f, "annotation of `{}` failed", self.field)
        } else {
            write!(f, "annotation of `{}` at `{}` failed", self.field, self.path)
        }
    }
}

impl Error {
    /// Creates an annotation failure for `field` owned by entities at `path`.
    pub fn annotation_failed(field: impl Into<String>, path: impl ToString) -> Error {
        Error::from(super::ErrorKind::AnnotationFailed(AnnotationFailed {
            field: field.into().into(),
            path: path.to_string().into(),
        }))
    }

    /// Returns `true` if any error in the context chain is an annotation failure.
    pub fn is_annotation_failed(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::AnnotationFailed(_)))
    }
}
