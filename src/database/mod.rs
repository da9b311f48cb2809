use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection, Database};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[cfg(test)]
pub mod memory;

#[derive(Debug)]
pub enum StoreError {
    /// The handle was never bound to a reachable database.
    Unavailable,
    Driver(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "document store is unavailable"),
            StoreError::Driver(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Driver(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateCounts {
    pub matched: u64,
    pub modified: u64,
}

/// Single-document primitives every collection is built on.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError>;

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, StoreError>;

    async fn find_many(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError>;

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateCounts, StoreError>;

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, StoreError>;
}

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Builds the pooled client. No round trip to the server happens here
    /// except SRV resolution for `mongodb+srv://` URIs.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(Duration::from_secs(300));
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        Ok(Self { db })
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoDB {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError> {
        let result = self.collection(collection).insert_one(document).await?;
        Ok(result.inserted_id)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, StoreError> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn find_many(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection(collection).find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateCounts, StoreError> {
        let result = self.collection(collection).update_one(filter, update).await?;
        Ok(UpdateCounts {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, StoreError> {
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(result.deleted_count)
    }
}

/// Stand-in used when the connection string cannot even be parsed.
struct UnavailableStore;

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn insert_one(&self, _: &str, _: Document) -> Result<Bson, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn find_one(&self, _: &str, _: Document) -> Result<Option<Document>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn find_many(&self, _: &str, _: Document) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn update_one(&self, _: &str, _: Document, _: Document) -> Result<UpdateCounts, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn delete_one(&self, _: &str, _: Document) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
    Disconnected,
    Connected,
}

impl ConnectionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionPhase::Disconnected => "disconnected",
            ConnectionPhase::Connected => "connected",
        }
    }
}

/// Shared handle to the document store plus the start-up connection flag.
#[derive(Clone)]
pub struct StoreHandle {
    store: Arc<dyn DocumentStore>,
    connected: Arc<AtomicBool>,
}

impl StoreHandle {
    pub fn new(store: Arc<dyn DocumentStore>, phase: ConnectionPhase) -> Self {
        Self {
            store,
            connected: Arc::new(AtomicBool::new(phase == ConnectionPhase::Connected)),
        }
    }

    /// Fire-and-forget connect: never fails and never retries. A failed ping
    /// leaves the handle `Disconnected` and requests fail once they reach
    /// the store.
    pub async fn connect(uri: &str, db_name: &str) -> Self {
        let mongodb = match MongoDB::new(uri, db_name).await {
            Ok(mongodb) => mongodb,
            Err(e) => {
                log::error!("❌ Mongo Not Connected: {}", e);
                return Self::new(Arc::new(UnavailableStore), ConnectionPhase::Disconnected);
            }
        };

        let handle = Self::new(Arc::new(mongodb.clone()), ConnectionPhase::Disconnected);
        let connected = handle.connected.clone();

        tokio::spawn(async move {
            match mongodb.ping().await {
                Ok(()) => {
                    connected.store(true, Ordering::Release);
                    log::info!("✅ Mongo Connected");
                }
                Err(e) => log::error!("❌ Mongo Not Connected: {}", e),
            }
        });

        handle
    }

    pub fn phase(&self) -> ConnectionPhase {
        if self.connected.load(Ordering::Acquire) {
            ConnectionPhase::Connected
        } else {
            ConnectionPhase::Disconnected
        }
    }

    pub fn is_connected(&self) -> bool {
        self.phase() == ConnectionPhase::Connected
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
