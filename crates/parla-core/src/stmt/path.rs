use serde::{Serialize, Serializer};

use std::fmt;

/// A dotted traversal through relation (and finally field) names, such as
/// `texts.meanings.id`.
///
/// The empty path denotes the root entity.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// The path of the root entity.
    pub const fn root() -> Path {
        Path {
            segments: Vec::new(),
        }
    }

    /// Parses a dotted path. The empty string is the root.
    pub fn parse(dotted: &str) -> Path {
        dotted.split('.').filter(|s| !s.is_empty()).collect()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment, `None` for the root.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns a new path with `segment` appended.
    pub fn join(&self, segment: impl Into<String>) -> Path {
        let mut ret = self.clone();
        ret.push(segment);
        ret
    }

    /// Returns a new path with every segment of `other` appended.
    pub fn chain(&self, other: &Path) -> Path {
        let mut ret = self.clone();
        ret.segments.extend(other.segments.iter().cloned());
        ret
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        let segment = segment.into();
        debug_assert!(
            !segment.is_empty() && !segment.contains('.'),
            "invalid path segment `{segment}`"
        );
        self.segments.push(segment);
    }

    /// Every proper prefix of the path, shortest first, excluding the root.
    ///
    /// `a.b.c` yields `a` and `a.b`.
    pub fn ancestors(&self) -> impl Iterator<Item = Path> + '_ {
        (1..self.segments.len()).map(|len| Path {
            segments: self.segments[..len].to_vec(),
        })
    }

    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Path {
        let mut path = Path::root();
        for segment in iter {
            path.push(segment);
        }
        path
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Path {
        Path::parse(value)
    }
}

impl From<String> for Path {
    fn from(value: String) -> Path {
        Path::parse(&value)
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        let mut rest = other;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                let Some(next) = rest.strip_prefix('.') else {
                    return false;
                };
                rest = next;
            }
            let Some(next) = rest.strip_prefix(segment.as_str()) else {
                return false;
            };
            rest = next;
        }
        rest.is_empty()
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
