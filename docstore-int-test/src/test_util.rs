use docstore::collection::Document;
use docstore::common::Value;
use docstore::doc;
use docstore::errors::StoreResult;
use docstore::store::DocumentStore;
use std::backtrace::Backtrace;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

/// Runs a test between a `before` and an `after` step.
///
/// `after` runs even when the test returns an error or panics. A failing test
/// is reported with its error and elapsed time, then re-raised.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> StoreResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    B: Fn() -> StoreResult<TestContext> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    A: Fn(TestContext) -> StoreResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
{
    let start_time = Instant::now();
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };

    let test_ctx = ctx.clone();
    // the store holds locks, which are not unwind safe
    let result = std::panic::catch_unwind(AssertUnwindSafe(move || test(test_ctx)));
    let after_result = after(ctx);
    let elapsed = start_time.elapsed();

    match result {
        Ok(Ok(_)) => {
            if let Err(e) = after_result {
                panic!("After run failed: {:?}", e);
            }
        }
        Ok(Err(e)) => {
            eprintln!("\n==================== TEST FAILED ====================");
            eprintln!("Took {:?}", elapsed);
            eprintln!("Backtrace:\n{}", Backtrace::capture());
            panic!("Test failed: {:?}", e);
        }
        Err(panic_err) => {
            eprintln!("\n==================== TEST PANICKED ====================");
            eprintln!("Took {:?}", elapsed);
            std::panic::resume_unwind(panic_err);
        }
    }
}

#[derive(Clone)]
pub struct TestContext {
    collection: String,
    store: DocumentStore,
}

impl TestContext {
    pub fn new(collection: String, store: DocumentStore) -> Self {
        Self { collection, store }
    }

    /// A collection name unique to this test run.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn store(&self) -> DocumentStore {
        self.store.clone()
    }
}

pub fn random_name() -> String {
    format!("test_{}", uuid::Uuid::new_v4().simple())
}

pub fn create_test_context() -> StoreResult<TestContext> {
    let store = DocumentStore::builder().open()?;
    Ok(TestContext::new(random_name(), store))
}

pub fn cleanup(ctx: TestContext) -> StoreResult<()> {
    ctx.store().stop();
    Ok(())
}

pub fn create_test_docs() -> Vec<Document> {
    let doc1 = doc! {
        _id: "u1",
        first_name: "fn1",
        last_name: "ln1",
        age: 30,
        address: {
            city: "NYC",
            zip: "10001",
        },
        tags: ["admin", "user"],
    };

    let doc2 = doc! {
        _id: "u2",
        first_name: "fn2",
        last_name: "ln2",
        age: 25,
        address: {
            city: "LA",
            zip: "90001",
        },
        tags: ["user"],
    };

    let doc3 = doc! {
        _id: "u3",
        first_name: "fn3",
        last_name: "ln2",
        age: 35,
        address: {
            city: "NYC",
            zip: "10002",
        },
        tags: [],
    };

    vec![doc1, doc2, doc3]
}

pub fn insert_test_documents(ctx: &TestContext) -> StoreResult<()> {
    ctx.store().insert(ctx.collection(), &create_test_docs())
}

/// Extracts `field` from each document, `Null` where absent.
pub fn field_values(docs: &[Document], field: &str) -> Vec<Value> {
    docs.iter()
        .map(|doc| doc.get(field).cloned().unwrap_or_default())
        .collect()
}
