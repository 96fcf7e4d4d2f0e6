//! Writes and write batches.
//!
//! A [`WriteBatch`] is committed atomically: either every write is applied
//! or none is.

use serde_json::Value;
use std::fmt;

use crate::{DocPath, DocumentStore, Fields, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Replaces the whole document, creating it if needed.
    Set(Fields),
    /// Overwrites the listed top-level fields and leaves the others alone.
    Update { fields: Fields, must_exist: bool },
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransformKind {
    /// Appends the values that are not already present.
    ArrayUnion(Vec<Value>),
    /// Removes every occurrence of the values.
    ArrayRemove(Vec<Value>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldTransform {
    pub field: String,
    pub kind: TransformKind,
}

/// One document write. Transforms run after the field writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Write {
    pub path: DocPath,
    pub op: WriteOp,
    pub transforms: Vec<FieldTransform>,
}

impl Write {
    pub fn set(path: DocPath, fields: Fields) -> Self {
        Self {
            path,
            op: WriteOp::Set(fields),
            transforms: Vec::new(),
        }
    }

    /// Partial update of a document that must already exist.
    pub fn update(path: DocPath, fields: Fields) -> Self {
        Self {
            path,
            op: WriteOp::Update {
                fields,
                must_exist: true,
            },
            transforms: Vec::new(),
        }
    }

    /// Partial update that creates the document when it is missing.
    pub fn merge(path: DocPath, fields: Fields) -> Self {
        Self {
            path,
            op: WriteOp::Update {
                fields,
                must_exist: false,
            },
            transforms: Vec::new(),
        }
    }

    pub fn delete(path: DocPath) -> Self {
        Self {
            path,
            op: WriteOp::Delete,
            transforms: Vec::new(),
        }
    }

    pub fn array_union(mut self, field: impl Into<String>, values: Vec<Value>) -> Self {
        self.transforms.push(FieldTransform {
            field: field.into(),
            kind: TransformKind::ArrayUnion(values),
        });
        self
    }

    pub fn array_remove(mut self, field: impl Into<String>, values: Vec<Value>) -> Self {
        self.transforms.push(FieldTransform {
            field: field.into(),
            kind: TransformKind::ArrayRemove(values),
        });
        self
    }
}

impl fmt::Display for Write {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match &self.op {
            WriteOp::Set(_) => "set",
            WriteOp::Update {
                must_exist: true, ..
            } => "update",
            WriteOp::Update { .. } => "merge",
            WriteOp::Delete => "delete",
        };
        write!(f, "{} {}", op, self.path)
    }
}

/// Builds a list of writes to commit together.
#[derive(Debug, Default, Clone)]
pub struct WriteBatch {
    writes: Vec<Write>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, write: Write) -> &mut Self {
        self.writes.push(write);
        self
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn writes(&self) -> &[Write] {
        &self.writes
    }

    pub async fn commit(self, store: &dyn DocumentStore) -> Result<(), StoreError> {
        if self.writes.is_empty() {
            return Ok(());
        }
        store.commit(self.writes).await
    }
}

impl From<Vec<Write>> for WriteBatch {
    fn from(writes: Vec<Write>) -> Self {
        Self { writes }
    }
}

/// Wraps string IDs as array elements for union/remove transforms.
pub fn string_values<I, S>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(|value| Value::String(value.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_transforms() {
        let path = DocPath::new("Semester", "fall").unwrap();
        let write = Write::update(path, Fields::new())
            .array_union("teachers", string_values(["rec1"]))
            .array_remove("students", string_values(["uid-1", "uid-2"]));

        assert_eq!(write.transforms.len(), 2);
        assert_eq!(write.to_string(), "update Semester/fall");
        assert_eq!(
            write.transforms[1].kind,
            TransformKind::ArrayRemove(string_values(["uid-1", "uid-2"]))
        );
    }
}
