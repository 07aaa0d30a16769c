//! Host-side concurrency: the contract holds no locks, the host's commit
//! validation decides.

use filterledger::types::ConflictType;
use filterledger::{CommitError, ErrorKind};

use crate::test_utils::{in_tx, setup};

#[test]
fn test_conflicting_transfers_first_committer_wins() {
    let (store, contract) = setup();
    in_tx(&store, |tx| contract.create(tx, "a.example", "", 1, "", 1)).unwrap();

    let mut t1 = store.begin();
    let mut t2 = store.begin();
    assert_eq!(contract.transfer(&mut t1, "a.example", "alice").unwrap(), "");
    assert_eq!(contract.transfer(&mut t2, "a.example", "bob").unwrap(), "");

    t1.commit().unwrap();
    assert!(matches!(t2.commit(), Err(CommitError::Conflict { .. })));

    let record = in_tx(&store, |tx| contract.read(tx, "a.example")).unwrap();
    assert_eq!(record.attribute1, "alice");
}

#[test]
fn test_concurrent_creates_of_same_key() {
    let (store, contract) = setup();

    let mut t1 = store.begin();
    let mut t2 = store.begin();
    contract.create(&mut t1, "a.example", "", 1, "", 1).unwrap();
    contract.create(&mut t2, "a.example", "", 2, "", 2).unwrap();

    // Both saw the key absent; the second commit must not overwrite.
    t1.commit().unwrap();
    assert!(t2.commit().is_err());

    let record = in_tx(&store, |tx| contract.read(tx, "a.example")).unwrap();
    assert_eq!(record.attribute2, 1);
}

#[test]
fn test_delete_races_update() {
    let (store, contract) = setup();
    in_tx(&store, |tx| contract.create(tx, "a.example", "", 1, "", 1)).unwrap();

    let mut deleter = store.begin();
    let mut updater = store.begin();
    contract.delete(&mut deleter, "a.example").unwrap();
    contract.update(&mut updater, "a.example", "", 5, "", 5).unwrap();

    deleter.commit().unwrap();
    assert!(updater.commit().is_err());

    assert_eq!(
        in_tx(&store, |tx| contract.read(tx, "a.example"))
            .unwrap_err()
            .kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_independent_keys_do_not_conflict() {
    let (store, contract) = setup();

    let mut t1 = store.begin();
    let mut t2 = store.begin();
    contract.create(&mut t1, "a.example", "", 1, "", 1).unwrap();
    contract.create(&mut t2, "b.example", "", 2, "", 2).unwrap();

    t1.commit().unwrap();
    t2.commit().unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_create_during_listing_is_a_phantom() {
    let (store, contract) = setup();
    in_tx(&store, |tx| contract.create(tx, "a.example", "", 1, "", 1)).unwrap();

    let mut t1 = store.begin();
    let listed = contract.get_all(&t1).unwrap();
    assert_eq!(listed.len(), 1);
    contract
        .update(&mut t1, "a.example", "", listed.len() as i64, "", 1)
        .unwrap();

    in_tx(&store, |tx| contract.create(tx, "b.example", "", 2, "", 2)).unwrap();

    match t1.commit() {
        Err(CommitError::Conflict { result, .. }) => {
            assert!(result
                .conflicts
                .iter()
                .any(|c| matches!(c, ConflictType::PhantomRead { .. })));
        }
        other => panic!("expected phantom conflict, got {:?}", other),
    }
    assert_eq!(
        in_tx(&store, |tx| contract.read(tx, "a.example"))
            .unwrap()
            .attribute2,
        1
    );
}
