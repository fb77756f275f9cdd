//! Property-based tests for the user store
//!
//! Uses proptest to drive random operation sequences against the store and
//! checks the identifier and collection invariants after every step.

use proptest::prelude::*;
use std::collections::HashSet;
use userbase_core::{CreateUser, UpdateUser, UserError, UserId, UserStore};

// ===== Helpers =====

#[derive(Debug, Clone)]
enum Op {
    Create { name: String, email: String },
    CreateMissingEmail { name: String },
    Update { pick: usize, name: Option<String>, email: Option<String> },
    Delete { pick: usize },
    GetMissing { offset: u64 },
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => ("[A-Za-z ]{1,20}", "[a-z]{1,10}@example\\.com")
            .prop_map(|(name, email)| Op::Create { name, email }),
        1 => "[A-Za-z ]{1,20}".prop_map(|name| Op::CreateMissingEmail { name }),
        2 => (
            0usize..16,
            proptest::option::of("[A-Za-z ]{0,20}"),
            proptest::option::of("[a-z]{0,10}@example\\.com"),
        )
            .prop_map(|(pick, name, email)| Op::Update { pick, name, email }),
        2 => (0usize..16).prop_map(|pick| Op::Delete { pick }),
        1 => (1u64..1000).prop_map(|offset| Op::GetMissing { offset }),
    ]
}

fn pick_id(store: &UserStore, pick: usize) -> Option<UserId> {
    let users = store.list().unwrap();
    if users.is_empty() {
        None
    } else {
        Some(users[pick % users.len()].id)
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: created ids strictly increase and are never reused, even after deletes
    #[test]
    fn ids_strictly_increase_and_never_recycle(ops in prop::collection::vec(arbitrary_op(), 1..60)) {
        let store = UserStore::seeded();
        let mut issued: HashSet<u64> = (1..=3).collect();
        let mut last_issued = 3u64;

        for op in ops {
            let counter_before = store.next_id().unwrap().unwrap();
            let len_before = store.len().unwrap();

            match op {
                Op::Create { name, email } => {
                    let user = store.create(CreateUser::new(name.clone(), email.clone())).unwrap();
                    prop_assert!(user.id.get() > last_issued);
                    prop_assert!(issued.insert(user.id.get()), "id {} reused", user.id);
                    last_issued = user.id.get();

                    let fetched = store.get(user.id).unwrap();
                    prop_assert_eq!(&fetched, &user);
                    prop_assert_eq!(fetched.name, name);
                    prop_assert_eq!(fetched.email, email);
                }
                Op::CreateMissingEmail { name } => {
                    let result = store.create(CreateUser { name: Some(name), email: None });
                    prop_assert_eq!(result, Err(UserError::MissingFields));
                    prop_assert_eq!(store.next_id().unwrap().unwrap(), counter_before);
                    prop_assert_eq!(store.len().unwrap(), len_before);
                }
                Op::Update { pick, name, email } => {
                    if let Some(id) = pick_id(&store, pick) {
                        let before = store.get(id).unwrap();
                        let patch = UpdateUser { name: name.clone(), email: email.clone() };
                        let after = store.update(id, patch).unwrap();

                        prop_assert_eq!(after.id, before.id);
                        prop_assert_eq!(&after.created_at, &before.created_at);
                        prop_assert_eq!(after.name, name.unwrap_or(before.name));
                        prop_assert_eq!(after.email, email.unwrap_or(before.email));
                    }
                }
                Op::Delete { pick } => {
                    if let Some(id) = pick_id(&store, pick) {
                        let removed = store.delete(id).unwrap();
                        prop_assert_eq!(removed.id, id);
                        prop_assert_eq!(store.get(id), Err(UserError::NotFound(id)));
                    }
                }
                Op::GetMissing { offset } => {
                    let missing = UserId::new(counter_before.get() + offset).unwrap();
                    prop_assert_eq!(store.get(missing), Err(UserError::NotFound(missing)));
                    prop_assert_eq!(store.len().unwrap(), len_before);
                }
            }

            // Every stored id sits below the counter, listing is in id order
            let counter = store.next_id().unwrap().unwrap();
            prop_assert!(counter >= counter_before);
            let ids: Vec<u64> = store.list().unwrap().iter().map(|u| u.id.get()).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(ids.iter().all(|&id| id < counter.get()));
        }
    }
}
