//! MongoDB-backed implementation of [`DatabaseBackend`]
//!
//! Uses the driver's blocking API. The client is created once and held for
//! the life of the handle; it is never recreated per call.

use mongodb::bson::{doc, Bson, Document};
use mongodb::sync::{Client, Database};

use super::backend::DatabaseBackend;
use super::error::DatabaseResult;

/// Live MongoDB backend bound to one named database
pub struct MongoBackend {
    db: Database,
    db_name: String,
}

impl MongoBackend {
    /// Connect to a MongoDB deployment and bind to `db_name`
    pub fn connect(uri: &str, db_name: &str) -> DatabaseResult<Self> {
        let client = Client::with_uri_str(uri)?;
        Ok(Self::with_client(client, db_name))
    }

    /// Build a backend from an existing client
    pub fn with_client(client: Client, db_name: &str) -> Self {
        Self {
            db: client.database(db_name),
            db_name: db_name.to_string(),
        }
    }
}

impl DatabaseBackend for MongoBackend {
    fn database_name(&self) -> &str {
        &self.db_name
    }

    fn list_collection_names(&self) -> DatabaseResult<Vec<String>> {
        Ok(self.db.list_collection_names().run()?)
    }

    fn count_documents(&self, collection: &str) -> DatabaseResult<u64> {
        let count = self
            .db
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .run()?;
        Ok(count)
    }

    fn sample_documents(
        &self,
        collection: &str,
        limit: usize,
    ) -> DatabaseResult<Vec<Document>> {
        // Deliberately unsorted; see the trait contract.
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(doc! {})
            .limit(limit as i64)
            .run()?;

        let mut documents = Vec::new();
        for result in cursor {
            documents.push(result?);
        }
        Ok(documents)
    }

    fn run_command(&self, command: Document) -> DatabaseResult<Vec<Document>> {
        let reply = self.db.run_command(command).run()?;

        // find/aggregate-style commands return their documents inside
        // cursor.firstBatch; unwrap those so callers see result documents
        // rather than the cursor envelope.
        if let Ok(cursor) = reply.get_document("cursor") {
            if let Ok(batch) = cursor.get_array("firstBatch") {
                let documents = batch
                    .iter()
                    .filter_map(|entry| match entry {
                        Bson::Document(d) => Some(d.clone()),
                        _ => None,
                    })
                    .collect();
                return Ok(documents);
            }
        }

        Ok(vec![reply])
    }
}
