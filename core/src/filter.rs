//! Name filtering for the rendered contact list.

use crate::types::Contact;

/// Contacts whose name contains `filter`, ignoring case. An empty filter
/// shows everything. Order is preserved.
pub fn contacts_to_show<'a>(contacts: &'a [Contact], filter: &str) -> Vec<&'a Contact> {
    if filter.is_empty() {
        return contacts.iter().collect();
    }
    let needle = filter.to_lowercase();
    contacts
        .iter()
        .filter(|contact| contact.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContactId;

    fn contact(id: &str, name: &str) -> Contact {
        Contact {
            id: ContactId::from(id),
            name: name.to_string(),
            number: "0".to_string(),
        }
    }

    fn names(shown: Vec<&Contact>) -> Vec<&str> {
        shown.into_iter().map(|c| c.name.as_str()).collect()
    }

    fn sample() -> Vec<Contact> {
        vec![
            contact("1", "Arto Hellas"),
            contact("2", "Ada Lovelace"),
            contact("3", "Dan Abramov"),
            contact("4", "Mary Poppendieck"),
        ]
    }

    #[test]
    fn empty_filter_shows_all() {
        let contacts = sample();
        assert_eq!(contacts_to_show(&contacts, "").len(), 4);
    }

    #[test]
    fn match_ignores_case() {
        let contacts = sample();
        assert_eq!(
            names(contacts_to_show(&contacts, "ARTO")),
            vec!["Arto Hellas"]
        );
    }

    #[test]
    fn substring_anywhere_in_name() {
        let contacts = sample();
        assert_eq!(
            names(contacts_to_show(&contacts, "ov")),
            vec!["Ada Lovelace", "Dan Abramov"]
        );
    }

    #[test]
    fn number_is_not_searched() {
        let contacts = sample();
        assert!(contacts_to_show(&contacts, "0").is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        let contacts = sample();
        assert!(contacts_to_show(&contacts, "zzz").is_empty());
    }
}
