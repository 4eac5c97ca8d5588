//! Content checks run before publishing.
//!
//! A repeated id is a data-entry error. A repeated title is only worth a
//! warning for the content owner.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{DuplicateTitle, LegalReferenceItem};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate id {id} at positions {first} and {second}")]
    DuplicateId { id: u32, first: usize, second: usize },
}

/// Fails on the first id that appears twice.
pub fn validate_unique_ids(items: &[LegalReferenceItem]) -> Result<(), ContentError> {
    let mut seen: HashMap<u32, usize> = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        if let Some(&first) = seen.get(&item.id) {
            return Err(ContentError::DuplicateId {
                id: item.id,
                first,
                second: pos,
            });
        }
        seen.insert(item.id, pos);
    }
    Ok(())
}

/// Titles used by more than one item, ordered by first appearance.
pub fn duplicate_titles(items: &[LegalReferenceItem]) -> Vec<DuplicateTitle> {
    let mut groups: Vec<DuplicateTitle> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.title == item.title) {
            Some(group) => group.ids.push(item.id),
            None => groups.push(DuplicateTitle {
                title: item.title.clone(),
                ids: vec![item.id],
            }),
        }
    }
    groups.retain(|g| g.ids.len() > 1);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::legal_references;
    use pretty_assertions::assert_eq;

    fn item(id: u32, title: &str) -> LegalReferenceItem {
        LegalReferenceItem {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn builtin_ids_are_unique() {
        assert_eq!(validate_unique_ids(legal_references()), Ok(()));
    }

    #[test]
    fn detects_duplicate_id() {
        let items = vec![item(1, "a"), item(2, "b"), item(1, "c")];
        let err = validate_unique_ids(&items).unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateId {
                id: 1,
                first: 0,
                second: 2
            }
        );
        assert_eq!(err.to_string(), "duplicate id 1 at positions 0 and 2");
    }

    #[test]
    fn empty_list_is_valid() {
        assert!(validate_unique_ids(&[]).is_ok());
        assert!(duplicate_titles(&[]).is_empty());
    }

    #[test]
    fn builtin_duplicate_titles() {
        let dups = duplicate_titles(legal_references());
        assert_eq!(
            dups,
            vec![
                DuplicateTitle {
                    title: "Código Penal de Costa Rica".into(),
                    ids: vec![1, 2],
                },
                DuplicateTitle {
                    title: "Ley de Delitos Informáticos (Ley N°9048)".into(),
                    ids: vec![4, 5],
                },
            ]
        );
    }
}
