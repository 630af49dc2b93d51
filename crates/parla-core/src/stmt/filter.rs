use super::{Entity, Path, Value};

use std::fmt;

/// A runtime filter expression scoping which entities a query returns.
///
/// Field references are paths relative to the filtered entity. When a path
/// reaches several values (a to-many hop or a list field) the comparison
/// holds if any of them matches, so `learners = 7` selects meanings learnt
/// by user 7.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(Path, Value),
    Ne(Path, Value),
    In(Path, Vec<Value>),
    IsNull(Path),
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
}

impl Filter {
    pub fn eq(path: impl Into<Path>, value: impl Into<Value>) -> Filter {
        Filter::Eq(path.into(), value.into())
    }

    pub fn ne(path: impl Into<Path>, value: impl Into<Value>) -> Filter {
        Filter::Ne(path.into(), value.into())
    }

    pub fn in_list<T: Into<Value>>(
        path: impl Into<Path>,
        values: impl IntoIterator<Item = T>,
    ) -> Filter {
        Filter::In(path.into(), values.into_iter().map(Into::into).collect())
    }

    pub fn is_null(path: impl Into<Path>) -> Filter {
        Filter::IsNull(path.into())
    }

    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Filter {
        Filter::And(filters.into_iter().collect())
    }

    pub fn or(filters: impl IntoIterator<Item = Filter>) -> Filter {
        Filter::Or(filters.into_iter().collect())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(filter: Filter) -> Filter {
        Filter::Not(Box::new(filter))
    }

    /// Evaluates the filter against an in-memory entity.
    pub fn eval(&self, entity: &Entity) -> bool {
        match self {
            Filter::Eq(path, value) => entity.values_at(path).into_iter().any(|v| v == value),
            Filter::Ne(path, value) => !entity.values_at(path).into_iter().any(|v| v == value),
            Filter::In(path, values) => entity
                .values_at(path)
                .into_iter()
                .any(|v| values.contains(v)),
            Filter::IsNull(path) => entity.values_at(path).is_empty(),
            Filter::And(filters) => filters.iter().all(|filter| filter.eval(entity)),
            Filter::Or(filters) => filters.iter().any(|filter| filter.eval(entity)),
            Filter::Not(filter) => !filter.eval(entity),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Eq(path, value) => write!(f, "{path} = {value}"),
            Filter::Ne(path, value) => write!(f, "{path} != {value}"),
            Filter::In(path, values) => write!(f, "{path} IN {}", Value::List(values.clone())),
            Filter::IsNull(path) => write!(f, "{path} IS NULL"),
            Filter::And(filters) => fmt_joined(f, filters, " AND "),
            Filter::Or(filters) => fmt_joined(f, filters, " OR "),
            Filter::Not(filter) => write!(f, "NOT {filter}"),
        }
    }
}

fn fmt_joined(f: &mut fmt::Formatter<'_>, filters: &[Filter], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{filter}")?;
    }
    f.write_str(")")
}
