use docstore::collection::projected;
use docstore::common::Value;
use docstore::doc;
use docstore::errors::ErrorKind;
use docstore_int_test::test_util::{cleanup, create_test_context, run_test};

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_users_walkthrough() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert_one("users", &doc! { _id: "u1", name: "Alice", address: { city: "NYC" } })?;

            let alice = store.find_one("users", &doc! { address: { city: "NYC" } })?;
            assert_eq!(
                alice,
                Some(doc! { _id: "u1", name: "Alice", address: { city: "NYC" } })
            );

            let err = store.insert_one("users", &doc! { _id: "u1", name: "Bob" }).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::DuplicateKey);
            assert_eq!(store.count("users", &doc! {})?, 1);

            let names: Vec<_> = store.find("users", &doc! {}, projected(doc! { name: 1 }))?.collect();
            assert_eq!(names, vec![doc! { name: "Alice" }]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_rename_walkthrough() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert_one("users", &doc! { _id: "u1", name: "Alice", address: { city: "NYC" } })?;

            assert_eq!(store.update_many("users", &doc! { name: "Alice" }, &doc! { name: "Alicia" })?, 1);
            assert_eq!(store.count("users", &doc! { name: "Alice" })?, 0);
            assert_eq!(store.count("users", &doc! { name: "Alicia" })?, 1);

            let alicia = store.find_one("users", &doc! { _id: "u1" })?.unwrap();
            assert_eq!(alicia.get("name"), Some(&Value::from("Alicia")));
            assert_eq!(alicia.get("address"), Some(&Value::from(doc! { city: "NYC" })));
            assert_eq!(alicia, doc! { _id: "u1", name: "Alicia", address: { city: "NYC" } });
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_collections_are_separate() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.insert_one("a", &doc! { _id: 1 })?;
            store.insert_one("b", &doc! { _id: 1 })?;
            assert_eq!(store.collection_names(), vec!["a".to_string(), "b".to_string()]);
            assert_eq!(store.delete("a", &doc! {})?, 1);
            assert_eq!(store.count("b", &doc! {})?, 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_empty_collection_name_rejected_everywhere() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let kinds = vec![
                store.count("", &doc! {}).err(),
                store.find_all("", &doc! {}).err(),
                store.find_one("", &doc! {}).err(),
                store.insert_one("", &doc! {}).err(),
                store.insert("", &[]).err(),
                store.upsert_one("", &doc! {}, &doc! {}).err(),
                store.update_many("", &doc! {}, &doc! {}).err(),
                store.delete("", &doc! {}).err(),
            ];
            for err in kinds {
                assert_eq!(err.map(|e| e.kind().clone()), Some(ErrorKind::InvalidArgument));
            }
            Ok(())
        },
        cleanup,
    )
}
