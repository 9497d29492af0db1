//! Integrity checks layered above the entity stores.
//!
//! These are pure reads against a store at the moment of the call. The
//! caller holds whatever lock makes the check-then-mutate sequence atomic.

use tally_types::{DomainError, DomainResult, Record, RecordId};

use crate::traits::EntityStore;

/// Fail with `ReferenceNotFound` unless `id` names a record in `store`.
pub fn require_reference<S>(store: &S, id: &RecordId) -> DomainResult<()>
where
    S: EntityStore + ?Sized,
{
    if store.contains(id) {
        Ok(())
    } else {
        Err(DomainError::missing_reference(<S::Item as Record>::KIND, id))
    }
}

/// Returns `true` if no record other than `exclude` satisfies `matches`.
///
/// Pass `None` on create and the record's own id on update, so an update
/// that keeps a value unchanged does not conflict with itself.
pub fn is_unique<S>(
    store: &S,
    exclude: Option<&RecordId>,
    matches: &dyn Fn(&S::Item) -> bool,
) -> bool
where
    S: EntityStore + ?Sized,
{
    !store.any(&|r: &S::Item| matches(r) && Some(r.id()) != exclude)
}

/// Fail with `ValidationFailed("<field> already exists")` unless
/// [`is_unique`] holds.
pub fn ensure_unique<S>(
    store: &S,
    exclude: Option<&RecordId>,
    field: &str,
    matches: &dyn Fn(&S::Item) -> bool,
) -> DomainResult<()>
where
    S: EntityStore + ?Sized,
{
    if is_unique(store, exclude, matches) {
        Ok(())
    } else {
        Err(DomainError::validation(field, format!("{field} already exists")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTable;
    use tally_types::{EntityKind, User};

    fn user(id: &str, username: &str, email: &str) -> User {
        User {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            bio: String::new(),
        }
    }

    fn users() -> MemoryTable<User> {
        MemoryTable::from_records(vec![
            user("1", "john_doe", "john@example.com"),
            user("2", "jane_smith", "jane@example.com"),
        ])
    }

    #[test]
    fn reference_to_existing_record_passes() {
        assert!(require_reference(&users(), &"2".into()).is_ok());
    }

    #[test]
    fn reference_to_missing_record_fails() {
        let err = require_reference(&users(), &"9".into()).unwrap_err();
        assert_eq!(
            err,
            DomainError::ReferenceNotFound {
                kind: EntityKind::User,
                id: "9".into(),
            }
        );
    }

    #[test]
    fn empty_reference_fails() {
        assert!(require_reference(&users(), &RecordId::default()).is_err());
    }

    #[test]
    fn duplicate_value_is_not_unique_on_create() {
        let table = users();
        assert!(!is_unique(&table, None, &|u: &User| u.username == "john_doe"));
        assert!(is_unique(&table, None, &|u: &User| u.username == "someone_else"));
    }

    #[test]
    fn own_record_is_excluded_on_update() {
        let table = users();
        let own = RecordId::from("1");
        assert!(is_unique(&table, Some(&own), &|u: &User| u.username == "john_doe"));
        assert!(!is_unique(&table, Some(&own), &|u: &User| u.username == "jane_smith"));
    }

    #[test]
    fn match_is_case_sensitive() {
        let table = users();
        assert!(is_unique(&table, None, &|u: &User| u.username == "John_Doe"));
    }

    #[test]
    fn ensure_unique_names_the_field() {
        let err = ensure_unique(&users(), None, "email", &|u: &User| {
            u.email == "jane@example.com"
        })
        .unwrap_err();
        assert_eq!(err, DomainError::validation("email", "email already exists"));
    }
}
