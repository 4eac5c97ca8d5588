//! Legal reference list -> card descriptors.

use crate::types::{CardDescriptor, LegalReferenceItem};

impl From<&LegalReferenceItem> for CardDescriptor {
    fn from(item: &LegalReferenceItem) -> Self {
        Self {
            key: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            icon: item.icon.clone(),
            color: item.color.clone(),
            delay: item.delay,
        }
    }
}

/// Map items to cards one-to-one, in input order.
///
/// Values are copied verbatim. Duplicate ids are not rejected here; use
/// [`crate::validate::validate_unique_ids`] before publishing a list.
pub fn render_cards(items: &[LegalReferenceItem]) -> Vec<CardDescriptor> {
    items.iter().map(CardDescriptor::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::legal_references;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_list_gives_no_cards() {
        assert!(render_cards(&[]).is_empty());
    }

    #[test]
    fn builtin_list_renders_five_cards_in_order() {
        let cards = render_cards(legal_references());

        let keys: Vec<u32> = cards.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);

        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Código Penal de Costa Rica",
                "Código Penal de Costa Rica",
                "Ley de Protección de Datos (Ley N°8968)",
                "Ley de Delitos Informáticos (Ley N°9048)",
                "Ley de Delitos Informáticos (Ley N°9048)",
            ]
        );

        let colors: Vec<&str> = cards.iter().map(|c| c.color.as_str()).collect();
        assert_eq!(colors, vec!["#0dcaf0", "#fd7e14", "#20c997", "#6610f2", "#f3268c"]);

        let delays: Vec<u32> = cards.iter().map(|c| c.delay).collect();
        assert_eq!(delays, vec![100, 200, 300, 500, 600]);
    }

    #[test]
    fn descriptions_are_not_trimmed() {
        let cards = render_cards(legal_references());
        assert!(cards[3].description.ends_with("(3 a 6 años). "));
        assert!(cards[2].description.contains("Desde los  desde los"));
    }

    #[test]
    fn empty_fields_pass_through() {
        let item = LegalReferenceItem {
            id: 9,
            ..Default::default()
        };
        let cards = render_cards(std::slice::from_ref(&item));
        assert_eq!(
            cards,
            vec![CardDescriptor {
                key: 9,
                ..Default::default()
            }]
        );
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let a = LegalReferenceItem {
            id: 1,
            title: "a".into(),
            ..Default::default()
        };
        let b = LegalReferenceItem {
            id: 1,
            title: "b".into(),
            ..Default::default()
        };
        let cards = render_cards(&[a, b]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].title, "b");
    }
}
