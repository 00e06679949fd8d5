//! Database test fixtures
//!
//! Store tests run once against the in-memory adapter and once against a real
//! MongoDB server. The MongoDB runs are `#[ignore]`d; run them with
//! `MONGO_TEST_URI` set and `--ignored`. Each fixture works in its own
//! throwaway database, dropped by [`TestDatabase::cleanup`].

use devhub::backend::persistence::MongoStore;

/// Environment variable holding the test server's connection string
pub const MONGO_TEST_URI: &str = "MONGO_TEST_URI";

/// A freshly created database with the production indexes in place
pub struct TestDatabase {
    client: mongodb::Client,
    name: String,
    store: MongoStore,
}

impl TestDatabase {
    /// Connect to the server at `MONGO_TEST_URI`, or `None` when it is unset
    pub async fn connect() -> Option<Self> {
        let Ok(uri) = std::env::var(MONGO_TEST_URI) else {
            eprintln!("{MONGO_TEST_URI} not set, skipping MongoDB test");
            return None;
        };
        let name = format!("devhub_test_{}", uuid::Uuid::new_v4().simple());

        let store = MongoStore::connect(&uri, Some(name.as_str()))
            .await
            .expect("Failed to connect to test database");
        store
            .ensure_indexes()
            .await
            .expect("Failed to create test indexes");
        let client = mongodb::Client::with_uri_str(&uri)
            .await
            .expect("Failed to create cleanup client");

        Some(Self {
            client,
            name,
            store,
        })
    }

    pub fn store(&self) -> &MongoStore {
        &self.store
    }

    /// Drop the database and everything in it
    pub async fn cleanup(self) {
        self.client
            .database(&self.name)
            .drop()
            .await
            .expect("Failed to drop test database");
    }
}
