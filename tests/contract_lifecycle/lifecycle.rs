//! Per-key lifecycle: absent -> present -> absent.

use filterledger::{ErrorKind, Record};

use crate::test_utils::{in_tx, setup};

#[test]
fn test_worked_example() {
    let (store, contract) = setup();

    in_tx(&store, |tx| contract.create(tx, "www.test.com", "", 5, "", 300)).unwrap();

    let record = in_tx(&store, |tx| contract.read(tx, "www.test.com")).unwrap();
    assert_eq!(record, Record::new("www.test.com", "", 5, "", 300));

    let previous = in_tx(&store, |tx| contract.transfer(tx, "www.test.com", "flag")).unwrap();
    assert_eq!(previous, "");

    let record = in_tx(&store, |tx| contract.read(tx, "www.test.com")).unwrap();
    assert_eq!(record.attribute1, "flag");
    assert_eq!(record, Record::new("www.test.com", "", 5, "flag", 300));
}

#[test]
fn test_unknown_key_everywhere() {
    let (store, contract) = setup();

    assert!(!in_tx(&store, |tx| contract.exists(tx, "ghost")).unwrap());
    for result in [
        in_tx(&store, |tx| contract.read(tx, "ghost").map(|_| ())),
        in_tx(&store, |tx| contract.update(tx, "ghost", "", 1, "", 1)),
        in_tx(&store, |tx| contract.delete(tx, "ghost")),
        in_tx(&store, |tx| contract.transfer(tx, "ghost", "x").map(|_| ())),
    ] {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    }
    assert!(store.is_empty());
}

#[test]
fn test_create_twice_fails() {
    let (store, contract) = setup();
    in_tx(&store, |tx| contract.create(tx, "a.example", "", 1, "", 1)).unwrap();

    let err = in_tx(&store, |tx| contract.create(tx, "a.example", "x", 2, "y", 3)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);

    // Original untouched
    let record = in_tx(&store, |tx| contract.read(tx, "a.example")).unwrap();
    assert_eq!(record, Record::new("a.example", "", 1, "", 1));
}

#[test]
fn test_update_is_total_overwrite() {
    let (store, contract) = setup();
    in_tx(&store, |tx| contract.create(tx, "a.example", "blocked", 1, "owner", 1)).unwrap();
    in_tx(&store, |tx| contract.update(tx, "a.example", "", 9, "", 99)).unwrap();

    let record = in_tx(&store, |tx| contract.read(tx, "a.example")).unwrap();
    assert_eq!(record, Record::new("a.example", "", 9, "", 99));
}

#[test]
fn test_failed_update_leaves_nothing_behind() {
    let (store, contract) = setup();
    let version = store.version();

    let err = in_tx(&store, |tx| contract.update(tx, "ghost", "", 1, "", 1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(store.version(), version);
    assert!(store.get("ghost").is_none());
}

#[test]
fn test_delete_then_read_and_delete_again() {
    let (store, contract) = setup();
    in_tx(&store, |tx| contract.create(tx, "a.example", "", 1, "", 1)).unwrap();
    in_tx(&store, |tx| contract.delete(tx, "a.example")).unwrap();

    assert!(!in_tx(&store, |tx| contract.exists(tx, "a.example")).unwrap());
    assert_eq!(
        in_tx(&store, |tx| contract.read(tx, "a.example"))
            .unwrap_err()
            .kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        in_tx(&store, |tx| contract.delete(tx, "a.example"))
            .unwrap_err()
            .kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_recreate_after_delete() {
    let (store, contract) = setup();
    in_tx(&store, |tx| contract.create(tx, "a.example", "", 1, "", 1)).unwrap();
    in_tx(&store, |tx| contract.delete(tx, "a.example")).unwrap();
    in_tx(&store, |tx| contract.create(tx, "a.example", "", 2, "", 2)).unwrap();

    let record = in_tx(&store, |tx| contract.read(tx, "a.example")).unwrap();
    assert_eq!(record.attribute2, 2);
}

#[test]
fn test_transfer_touches_only_attribute1() {
    let (store, contract) = setup();
    in_tx(&store, |tx| contract.create(tx, "a.example", "b", 7, "old", 70)).unwrap();

    let previous = in_tx(&store, |tx| contract.transfer(tx, "a.example", "new")).unwrap();
    assert_eq!(previous, "old");

    let record = in_tx(&store, |tx| contract.read(tx, "a.example")).unwrap();
    assert_eq!(record, Record::new("a.example", "b", 7, "new", 70));
}

#[test]
fn test_malformed_stored_value() {
    let (store, contract) = setup();
    in_tx(&store, |tx| {
        use filterledger::WorldState;
        tx.put_state("bad.example", b"{\"allowlist\":1}".to_vec())
            .expect("put");
        Ok(())
    })
    .unwrap();

    assert!(in_tx(&store, |tx| contract.exists(tx, "bad.example")).unwrap());
    assert_eq!(
        in_tx(&store, |tx| contract.read(tx, "bad.example"))
            .unwrap_err()
            .kind(),
        ErrorKind::Decoding
    );
    assert_eq!(
        in_tx(&store, |tx| contract.get_all(tx)).unwrap_err().kind(),
        ErrorKind::Decoding
    );
}

#[test]
fn test_transfer_lands_on_invoked_key() {
    let (store, contract) = setup();
    in_tx(&store, |tx| {
        use filterledger::WorldState;
        let stored = Record::new("b.example", "", 7, "old", 70);
        tx.put_state("a.example", stored.encode()?).expect("put");
        Ok(())
    })
    .unwrap();

    let previous = in_tx(&store, |tx| contract.transfer(tx, "a.example", "new")).unwrap();
    assert_eq!(previous, "old");

    let record = in_tx(&store, |tx| contract.read(tx, "a.example")).unwrap();
    assert_eq!(record.attribute1, "new");
    assert_eq!(record.allowlist, "b.example");
    assert!(!in_tx(&store, |tx| contract.exists(tx, "b.example")).unwrap());
    assert_eq!(store.len(), 1);
}
