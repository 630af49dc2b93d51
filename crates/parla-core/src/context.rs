use crate::stmt::Value;

use indexmap::IndexMap;

/// Per-request data handed to relation filters and annotators.
///
/// A context is built by the service layer for every request and passed
/// unchanged through plan compilation and annotation. It typically carries
/// the authenticated user, or nothing for anonymous callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    user: Option<Value>,
    params: IndexMap<String, Value>,
}

impl Context {
    /// A context without an authenticated user.
    pub fn anonymous() -> Context {
        Context::default()
    }

    /// A context for the given authenticated user.
    pub fn for_user(user: impl Into<Value>) -> Context {
        Context {
            user: Some(user.into()),
            params: IndexMap::new(),
        }
    }

    /// Attaches a named parameter, such as the learner's language.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Context {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn user(&self) -> Option<&Value> {
        self.user.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.user.is_none()
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}
