//! MongoDB Store
//!
//! One collection per document type, named by `Document::COLLECTION`.
//! Query and update documents are built by the small functions at the top of
//! this module so they can be checked without a running server.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, Bson, Document as BsonDocument},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::ReturnDocument,
    Client, Collection, Database, IndexModel,
};

use super::{
    BlogRepository, ChatroomRepository, Membership, Repository, StoreError, StoreResult,
};
use crate::shared::content::{
    Blog, ChatMessage, Chatroom, ChatroomDetails, CodeSnippet, Document, Participant,
};

/// Server error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Database used when neither the config nor the URI names one
pub const DEFAULT_DATABASE: &str = "devhub";

/// Field holding the uploader id on snippets and blogs
const OWNER_FIELD: &str = "uploaded_by.user_id";

/// Conditional pushes tried before a join gives up on a room whose membership
/// keeps changing under it
const JOIN_ATTEMPTS: usize = 3;

pub(crate) fn id_filter(id: &str) -> BsonDocument {
    doc! { "_id": id }
}

pub(crate) fn owner_filter(user_id: &str) -> BsonDocument {
    doc! { OWNER_FIELD: user_id }
}

pub(crate) fn text_search_filter(term: &str) -> BsonDocument {
    doc! { "$text": { "$search": term } }
}

/// Matches the room only while `user_id` is not yet a participant
pub(crate) fn join_filter(id: &str, user_id: &str) -> BsonDocument {
    doc! { "_id": id, "participants.user_id": { "$ne": user_id } }
}

pub(crate) fn details_update(details: &ChatroomDetails) -> BsonDocument {
    let mut set = doc! {
        "name": &details.name,
        "description": &details.description,
    };
    if let Some(image) = &details.image {
        set.insert("image", image);
    }
    doc! { "$set": set }
}

pub(crate) fn push_update(field: &str, value: Bson) -> BsonDocument {
    doc! { "$push": { field: value } }
}

pub(crate) fn pull_participant_update(user_id: &str) -> BsonDocument {
    doc! { "$pull": { "participants": { "user_id": user_id } } }
}

/// What a join does after its conditional push matched nothing
#[derive(Debug, PartialEq)]
pub(crate) enum MissedJoin {
    /// The room is gone or the user really is a member
    Settled(Option<Membership>),
    /// The user left between the push and the read
    Retry,
}

/// Decide a missed join from a fresh read of the room
pub(crate) fn settle_missed_join(room: Option<Chatroom>, user_id: &str) -> MissedJoin {
    match room {
        None => MissedJoin::Settled(None),
        Some(room) if room.has_participant(user_id) => {
            MissedJoin::Settled(Some(Membership::AlreadyMember(room)))
        }
        Some(_) => MissedJoin::Retry,
    }
}

fn store_error(collection: &'static str, err: MongoError) -> StoreError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            StoreError::Duplicate {
                collection,
                message: write_error.message.clone(),
            }
        }
        ErrorKind::BsonSerialization(_) | ErrorKind::BsonDeserialization(_) => {
            StoreError::Serialization {
                message: err.to_string(),
            }
        }
        _ => StoreError::backend(err.to_string()),
    }
}

fn to_bson<V: serde::Serialize>(value: &V) -> StoreResult<Bson> {
    bson::to_bson(value).map_err(|e| StoreError::Serialization {
        message: e.to_string(),
    })
}

/// Connected database handle
#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect and ping the server so a bad URI fails at startup, not on the
    /// first request
    pub async fn connect(uri: &str, database: Option<&str>) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;

        let database = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;

        tracing::info!(database = %database.name(), "Connected to MongoDB");
        Ok(Self { database })
    }

    pub fn repository<T: Document>(&self) -> MongoRepository<T> {
        MongoRepository {
            collection: self.database.collection(T::COLLECTION),
        }
    }

    /// Create the indexes the queries rely on. Existing indexes with the same
    /// keys are left as they are.
    pub async fn ensure_indexes(&self) -> StoreResult<()> {
        let indexes: [(&'static str, BsonDocument); 4] = [
            (CodeSnippet::COLLECTION, doc! { OWNER_FIELD: 1 }),
            (Blog::COLLECTION, doc! { OWNER_FIELD: 1 }),
            (
                Blog::COLLECTION,
                doc! { "title": "text", "excerpt": "text", "tags": "text" },
            ),
            (Chatroom::COLLECTION, doc! { "name": 1 }),
        ];

        for (collection, keys) in indexes {
            self.database
                .collection::<BsonDocument>(collection)
                .create_index(IndexModel::builder().keys(keys).build())
                .await
                .map_err(|e| store_error(collection, e))?;
        }

        tracing::debug!("MongoDB indexes ensured");
        Ok(())
    }
}

/// One MongoDB collection
#[derive(Clone, Debug)]
pub struct MongoRepository<T: Send + Sync> {
    collection: Collection<T>,
}

impl<T: Document> MongoRepository<T> {
    async fn find_many(&self, filter: BsonDocument) -> StoreResult<Vec<T>> {
        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| store_error(T::COLLECTION, e))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| store_error(T::COLLECTION, e))
    }

    async fn update_one(&self, filter: BsonDocument, update: BsonDocument) -> StoreResult<Option<T>> {
        self.collection
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| store_error(T::COLLECTION, e))
    }
}

#[async_trait]
impl<T: Document> Repository<T> for MongoRepository<T> {
    async fn create(&self, doc: T) -> StoreResult<T> {
        self.collection
            .insert_one(&doc)
            .await
            .map_err(|e| store_error(T::COLLECTION, e))?;
        Ok(doc)
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        self.collection
            .find_one(id_filter(id))
            .await
            .map_err(|e| store_error(T::COLLECTION, e))
    }

    async fn list_all(&self) -> StoreResult<Vec<T>> {
        self.find_many(doc! {}).await
    }

    async fn list_by_owner(&self, user_id: &str) -> StoreResult<Vec<T>> {
        self.find_many(owner_filter(user_id)).await
    }

    async fn replace_by_id(&self, id: &str, doc: T) -> StoreResult<Option<T>> {
        self.collection
            .find_one_and_replace(id_filter(id), &doc)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| store_error(T::COLLECTION, e))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        self.collection
            .find_one_and_delete(id_filter(id))
            .await
            .map_err(|e| store_error(T::COLLECTION, e))
    }
}

#[async_trait]
impl BlogRepository for MongoRepository<Blog> {
    async fn search(&self, term: &str) -> StoreResult<Vec<Blog>> {
        self.find_many(text_search_filter(term)).await
    }
}

#[async_trait]
impl ChatroomRepository for MongoRepository<Chatroom> {
    async fn update_details(
        &self,
        id: &str,
        details: ChatroomDetails,
    ) -> StoreResult<Option<Chatroom>> {
        self.update_one(id_filter(id), details_update(&details)).await
    }

    async fn add_participant(
        &self,
        id: &str,
        participant: Participant,
    ) -> StoreResult<Option<Membership>> {
        let update = push_update("participants", to_bson(&participant)?);
        for attempt in 1..=JOIN_ATTEMPTS {
            if let Some(room) = self
                .update_one(join_filter(id, &participant.user_id), update.clone())
                .await?
            {
                return Ok(Some(Membership::Joined(room)));
            }

            let room = self.get_by_id(id).await?;
            match settle_missed_join(room, &participant.user_id) {
                MissedJoin::Settled(outcome) => return Ok(outcome),
                MissedJoin::Retry => tracing::debug!(
                    chatroom_id = %id,
                    user_id = %participant.user_id,
                    attempt,
                    "Participant left during join, retrying"
                ),
            }
        }

        Err(StoreError::backend(format!(
            "join of chatroom {id} raced with concurrent leaves {JOIN_ATTEMPTS} times"
        )))
    }

    async fn remove_participant(&self, id: &str, user_id: &str) -> StoreResult<Option<Chatroom>> {
        self.update_one(id_filter(id), pull_participant_update(user_id))
            .await
    }

    async fn push_message(&self, id: &str, message: ChatMessage) -> StoreResult<Option<Chatroom>> {
        let update = push_update("messages", to_bson(&message)?);
        self.update_one(id_filter(id), update).await
    }
}
