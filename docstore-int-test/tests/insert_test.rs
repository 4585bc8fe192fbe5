use docstore::common::Value;
use docstore::doc;
use docstore::errors::ErrorKind;
use docstore_int_test::test_util::{cleanup, create_test_context, create_test_docs, field_values, run_test};

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_insert_one() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert_one(ctx.collection(), &doc! { _id: "u1", name: "Alice" })?;
            store.insert_one(ctx.collection(), &doc! { _id: "u2", name: "Bob" })?;

            assert_eq!(store.count(ctx.collection(), &doc! {})?, 2);
            assert!(store.has_collection(ctx.collection()));

            let docs: Vec<_> = store.find_all(ctx.collection(), &doc! {})?.collect();
            assert_eq!(field_values(&docs, "name"), vec![Value::from("Alice"), Value::from("Bob")]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_duplicate_id() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert_one(ctx.collection(), &doc! { _id: "u1", name: "Alice" })?;

            let result = store.insert_one(ctx.collection(), &doc! { _id: "u1", name: "Other" });
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::DuplicateKey);
            assert_eq!(err.duplicate_id(), Some(&Value::from("u1")));
            assert!(err.to_string().contains("u1"));

            assert_eq!(store.count(ctx.collection(), &doc! {})?, 1);
            let stored = store.find_one(ctx.collection(), &doc! { _id: "u1" })?.unwrap();
            assert_eq!(stored.get("name"), Some(&Value::from("Alice")));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_duplicate_id_compares_numerically() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert_one(ctx.collection(), &doc! { _id: 1 })?;
            assert!(store.insert_one(ctx.collection(), &doc! { _id: 1i64 }).is_err());
            assert!(store.insert_one(ctx.collection(), &doc! { _id: "1" }).is_ok());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_without_id() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert_one(ctx.collection(), &doc! { name: "anon" })?;
            store.insert_one(ctx.collection(), &doc! { name: "anon" })?;
            store.insert_one(ctx.collection(), &doc! { _id: (Value::Null), name: "null id" })?;
            store.insert_one(ctx.collection(), &doc! { _id: (Value::Null), name: "null id" })?;
            assert_eq!(store.count(ctx.collection(), &doc! {})?, 4);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_many() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert(ctx.collection(), &create_test_docs())?;
            assert_eq!(store.count(ctx.collection(), &doc! {})?, 3);

            let docs: Vec<_> = store.find_all(ctx.collection(), &doc! {})?.collect();
            assert_eq!(
                field_values(&docs, "_id"),
                vec![Value::from("u1"), Value::from("u2"), Value::from("u3")]
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_many_empty() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert(ctx.collection(), &[])?;
            assert_eq!(store.count(ctx.collection(), &doc! {})?, 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_many_is_all_or_nothing() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert_one(ctx.collection(), &doc! { _id: "u2" })?;

            let result = store.insert(ctx.collection(), &create_test_docs());
            let err = result.unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::DuplicateKey);
            assert_eq!(err.duplicate_id(), Some(&Value::from("u2")));

            assert_eq!(store.count(ctx.collection(), &doc! {})?, 1);
            assert!(store.find_one(ctx.collection(), &doc! { _id: "u1" })?.is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_many_repeats_within_batch() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert(ctx.collection(), &[doc! { _id: "x", n: 1 }, doc! { _id: "x", n: 2 }])?;
            assert_eq!(store.count(ctx.collection(), &doc! { _id: "x" })?, 2);

            // both now collide with later inserts
            assert!(store.insert_one(ctx.collection(), &doc! { _id: "x" }).is_err());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_empty_collection_name() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let err = store.insert_one("", &doc! { _id: 1 }).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::InvalidArgument);
            assert!(store.collection_names().is_empty());
            Ok(())
        },
        cleanup,
    )
}
