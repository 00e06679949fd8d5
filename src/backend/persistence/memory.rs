//! In-Memory Store
//!
//! Keeps each collection in a `Vec` behind a tokio `RwLock`, in insertion
//! order. Every mutation holds the write lock for its whole duration, which
//! gives the same atomicity the MongoDB adapter gets from single-document
//! updates.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    BlogRepository, ChatroomRepository, Membership, Repository, StoreError, StoreResult,
};
use crate::shared::content::{
    Blog, ChatMessage, Chatroom, ChatroomDetails, Document, Participant,
};

/// One collection held in process memory
#[derive(Debug)]
pub struct MemoryRepository<T> {
    docs: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            docs: Arc::clone(&self.docs),
        }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            docs: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Document> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }

    /// Run `f` on the document with `id` under the write lock
    async fn modify<R>(&self, id: &str, f: impl FnOnce(&mut T) -> R) -> Option<(R, T)> {
        let mut docs = self.docs.write().await;
        let doc = docs.iter_mut().find(|doc| doc.id() == id)?;
        let outcome = f(doc);
        Some((outcome, doc.clone()))
    }
}

#[async_trait]
impl<T: Document> Repository<T> for MemoryRepository<T> {
    async fn create(&self, doc: T) -> StoreResult<T> {
        let mut docs = self.docs.write().await;
        if docs.iter().any(|existing| existing.id() == doc.id()) {
            return Err(StoreError::Duplicate {
                collection: T::COLLECTION,
                message: format!("_id {} already exists", doc.id()),
            });
        }
        docs.push(doc.clone());
        Ok(doc)
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|doc| doc.id() == id).cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<T>> {
        Ok(self.docs.read().await.clone())
    }

    async fn list_by_owner(&self, user_id: &str) -> StoreResult<Vec<T>> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|doc| doc.owner_id() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn replace_by_id(&self, id: &str, doc: T) -> StoreResult<Option<T>> {
        Ok(self
            .modify(id, |stored| *stored = doc)
            .await
            .map(|((), updated)| updated))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        let mut docs = self.docs.write().await;
        let position = docs.iter().position(|doc| doc.id() == id);
        Ok(position.map(|index| docs.remove(index)))
    }
}

#[async_trait]
impl BlogRepository for MemoryRepository<Blog> {
    async fn search(&self, term: &str) -> StoreResult<Vec<Blog>> {
        let docs = self.docs.read().await;
        Ok(docs.iter().filter(|blog| blog.matches(term)).cloned().collect())
    }
}

#[async_trait]
impl ChatroomRepository for MemoryRepository<Chatroom> {
    async fn update_details(
        &self,
        id: &str,
        details: ChatroomDetails,
    ) -> StoreResult<Option<Chatroom>> {
        Ok(self
            .modify(id, |room| room.apply(details))
            .await
            .map(|((), room)| room))
    }

    async fn add_participant(
        &self,
        id: &str,
        participant: Participant,
    ) -> StoreResult<Option<Membership>> {
        Ok(self
            .modify(id, |room| room.join(participant))
            .await
            .map(|(joined, room)| {
                if joined {
                    Membership::Joined(room)
                } else {
                    Membership::AlreadyMember(room)
                }
            }))
    }

    async fn remove_participant(&self, id: &str, user_id: &str) -> StoreResult<Option<Chatroom>> {
        Ok(self
            .modify(id, |room| room.leave(user_id))
            .await
            .map(|((), room)| room))
    }

    async fn push_message(&self, id: &str, message: ChatMessage) -> StoreResult<Option<Chatroom>> {
        Ok(self
            .modify(id, |room| room.post(message))
            .await
            .map(|((), room)| room))
    }
}
