//! Property tests over the contract surface.

use filterledger::{ErrorKind, Record};
use proptest::prelude::*;

use crate::test_utils::{in_tx, setup};

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        "[a-z0-9./:-]{1,32}",
        ".{0,24}",
        any::<i64>(),
        ".{0,24}",
        any::<i64>(),
    )
        .prop_map(|(allowlist, blocklist, attribute2, attribute1, webfilterlist)| {
            Record::new(allowlist, blocklist, attribute2, attribute1, webfilterlist)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_create_then_read_returns_record(record in record_strategy()) {
        let (store, contract) = setup();
        in_tx(&store, |tx| contract.create(
            tx,
            &record.allowlist,
            &record.blocklist,
            record.attribute2,
            &record.attribute1,
            record.webfilterlist,
        )).unwrap();

        let read = in_tx(&store, |tx| contract.read(tx, record.key())).unwrap();
        prop_assert_eq!(read, record.clone());

        let stored = store.get(record.key()).unwrap().value;
        prop_assert_eq!(stored, record.encode().unwrap());
    }

    #[test]
    fn prop_transfer_returns_prior_value(record in record_strategy(), next in ".{0,24}") {
        let (store, contract) = setup();
        in_tx(&store, |tx| contract.create(
            tx,
            &record.allowlist,
            &record.blocklist,
            record.attribute2,
            &record.attribute1,
            record.webfilterlist,
        )).unwrap();

        let prior = in_tx(&store, |tx| contract.transfer(tx, record.key(), &next)).unwrap();
        prop_assert_eq!(prior, record.attribute1.clone());

        let read = in_tx(&store, |tx| contract.read(tx, record.key())).unwrap();
        let mut expected = record.clone();
        expected.attribute1 = next;
        prop_assert_eq!(read, expected);
    }

    #[test]
    fn prop_deleted_keys_are_gone(records in proptest::collection::vec(record_strategy(), 1..8)) {
        let (store, contract) = setup();
        let mut created = Vec::new();
        for record in &records {
            let result = in_tx(&store, |tx| contract.create(
                tx,
                &record.allowlist,
                &record.blocklist,
                record.attribute2,
                &record.attribute1,
                record.webfilterlist,
            ));
            match result {
                Ok(()) => created.push(record.allowlist.clone()),
                Err(e) => prop_assert_eq!(e.kind(), ErrorKind::DuplicateKey),
            }
        }

        prop_assert_eq!(in_tx(&store, |tx| contract.get_all(tx)).unwrap().len(), created.len());

        for key in &created {
            in_tx(&store, |tx| contract.delete(tx, key)).unwrap();
            prop_assert!(!in_tx(&store, |tx| contract.exists(tx, key)).unwrap());
        }
        prop_assert!(in_tx(&store, |tx| contract.get_all(tx)).unwrap().is_empty());
    }
}
