use std::fmt;

use rollcall_models::Entity;

use crate::StoreError;

const MAX_ID_BYTES: usize = 1500;

/// Address of one document: a top-level collection and a document ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocPath {
    collection: &'static str,
    id: String,
}

impl DocPath {
    /// Validates `id` against the Firestore document ID rules.
    pub fn new(collection: &'static str, id: impl Into<String>) -> Result<Self, StoreError> {
        let id = id.into();

        let valid = !id.is_empty()
            && !id.contains('/')
            && id != "."
            && id != ".."
            && !(id.starts_with("__") && id.ends_with("__"))
            && id.len() <= MAX_ID_BYTES;

        if !valid {
            return Err(StoreError::InvalidPath(id));
        }

        Ok(Self { collection, id })
    }

    pub fn of<E: Entity>(id: impl Into<String>) -> Result<Self, StoreError> {
        Self::new(E::COLLECTION, id)
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_models::Semester;

    #[test]
    fn test_valid_ids() {
        let path = DocPath::of::<Semester>("fall-2024").unwrap();
        assert_eq!(path.collection(), "Semester");
        assert_eq!(path.to_string(), "Semester/fall-2024");

        assert!(DocPath::new("Users", "a b c").is_ok());
        assert!(DocPath::new("Classroom", "2147483648").is_ok());
    }

    #[test]
    fn test_invalid_ids_are_rejected() {
        for id in ["", "a/b", ".", "..", "__reserved__"] {
            assert!(
                matches!(DocPath::new("Users", id), Err(StoreError::InvalidPath(_))),
                "{id:?} should be rejected"
            );
        }

        assert!(DocPath::new("Users", "x".repeat(MAX_ID_BYTES + 1)).is_err());
    }
}
