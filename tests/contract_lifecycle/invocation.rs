//! Name-based invocation through the executor.

use filterledger::types::ExecutorError;
use filterledger::{Executor, Record};

use crate::test_utils::setup;

const NO_ARGS: [&str; 0] = [];

#[test]
fn test_invocation_walkthrough() {
    let (store, contract) = setup();
    let executor = Executor::new(contract);

    let mut tx = store.begin();
    executor.invoke(&mut tx, "InitLedger", &NO_ARGS).unwrap();
    executor
        .invoke(&mut tx, "CreateAsset", &["www.test.com", "", "5", "", "300"])
        .unwrap();
    tx.commit().unwrap();

    let mut tx = store.begin();
    let previous = executor
        .invoke(&mut tx, "TransferAsset", &["www.test.com", "flag"])
        .unwrap();
    assert!(previous.is_empty());
    tx.commit().unwrap();

    let mut tx = store.begin();
    let payload = executor
        .invoke(&mut tx, "ReadAsset", &["www.test.com"])
        .unwrap();
    assert_eq!(
        std::str::from_utf8(&payload).unwrap(),
        r#"{"allowlist":"www.test.com","blocklist":"","attribute2":5,"attribute1":"flag","webfilterlist":300}"#
    );

    let all = executor.invoke(&mut tx, "GetAllAssets", &NO_ARGS).unwrap();
    let records: Vec<Record> = serde_json::from_slice(&all).unwrap();
    assert_eq!(records.len(), 7);
}

#[test]
fn test_invocation_errors_are_typed() {
    let (store, contract) = setup();
    let executor = Executor::new(contract);
    let mut tx = store.begin();

    assert_eq!(
        executor
            .invoke(&mut tx, "ReadAsset", &["missing.example"])
            .unwrap_err(),
        ExecutorError::KeyNotFound {
            key: "missing.example".to_string()
        }
    );
    assert!(matches!(
        executor.invoke(&mut tx, "Nope", &NO_ARGS).unwrap_err(),
        ExecutorError::UnknownFunction { .. }
    ));
    assert!(matches!(
        executor
            .invoke(&mut tx, "UpdateAsset", &["k", "", "1", ""])
            .unwrap_err(),
        ExecutorError::InvalidArgument { .. }
    ));
}

#[test]
fn test_executor_error_serializes() {
    let err = ExecutorError::KeyExists {
        key: "a.example".to_string(),
    };
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"KeyExists":{"key":"a.example"}}"#);
}
