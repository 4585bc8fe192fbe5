use docstore::common::Value;
use docstore::doc;
use docstore_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};

#[test]
fn test_update_many_merges_patch() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_documents(&ctx)?;
            let store = ctx.store();

            let updated = store.update_many(ctx.collection(), &doc! { last_name: "ln2" }, &doc! { age: 40, vip: true })?;
            assert_eq!(updated, 2);

            assert_eq!(store.count(ctx.collection(), &doc! { vip: true })?, 2);
            assert_eq!(store.count(ctx.collection(), &doc! { age: 40 })?, 2);

            let u2 = store.find_one(ctx.collection(), &doc! { _id: "u2" })?.unwrap();
            assert_eq!(u2.get("first_name"), Some(&Value::from("fn2")));
            let fields: Vec<_> = u2.fields().into_iter().collect();
            assert_eq!(fields.last().map(String::as_str), Some("vip"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_many_with_nested_query() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_documents(&ctx)?;
            let store = ctx.store();
            let updated = store.update_many(ctx.collection(), &doc! { address: { city: "NYC" } }, &doc! { region: "east" })?;
            assert_eq!(updated, 2);
            assert_eq!(store.count(ctx.collection(), &doc! { region: "east" })?, 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_replaces_nested_document_wholesale() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_documents(&ctx)?;
            let store = ctx.store();
            store.update_many(ctx.collection(), &doc! { _id: "u1" }, &doc! { address: { city: "Boston" } })?;

            let u1 = store.find_one(ctx.collection(), &doc! { _id: "u1" })?.unwrap();
            assert_eq!(u1.get("address"), Some(&Value::from(doc! { city: "Boston" })));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_many_no_match() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_documents(&ctx)?;
            let store = ctx.store();
            assert_eq!(store.update_many(ctx.collection(), &doc! { last_name: "nobody" }, &doc! { x: 1 })?, 0);
            assert_eq!(store.update_many("missing", &doc! {}, &doc! { x: 1 })?, 0);
            assert_eq!(store.count(ctx.collection(), &doc! { x: 1 })?, 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_with_empty_patch() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_documents(&ctx)?;
            let store = ctx.store();
            let before: Vec<_> = store.find_all(ctx.collection(), &doc! {})?.collect();
            assert_eq!(store.update_many(ctx.collection(), &doc! {}, &doc! {})?, 3);
            let after: Vec<_> = store.find_all(ctx.collection(), &doc! {})?.collect();
            assert_eq!(before, after);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_can_create_duplicate_ids() {
    run_test(
        create_test_context,
        |ctx| {
            insert_test_documents(&ctx)?;
            let store = ctx.store();
            store.update_many(ctx.collection(), &doc! { last_name: "ln2" }, &doc! { _id: "u1" })?;
            assert_eq!(store.count(ctx.collection(), &doc! { _id: "u1" })?, 3);
            Ok(())
        },
        cleanup,
    )
}
