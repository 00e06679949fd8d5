//! Repository contract, checked against the memory and MongoDB adapters

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use devhub::backend::error::BackendError;
use devhub::backend::persistence::{
    BlogRepository, ChatroomRepository, MemoryRepository, Membership, Repository, StoreError,
};
use devhub::shared::content::{BlogDraft, ChatroomDetails, ChatroomDraft, SnippetDraft};
use devhub::shared::{
    Blog, ChatMessage, Chatroom, CodeSnippet, Participant, Role, UserRef,
};

use crate::common::TestDatabase;

fn user(id: &str) -> UserRef {
    UserRef {
        user_id: id.to_string(),
        user_email: format!("{id}@example.com"),
        user_image: None,
    }
}

fn snippet(owner: &str, code: &str) -> CodeSnippet {
    CodeSnippet::create(
        SnippetDraft {
            code: code.to_string(),
            description: Some("sample".into()),
            language: None,
            uploaded_by: user(owner),
        },
        "rust".into(),
    )
}

fn blog(owner: &str, title: &str, excerpt: &str, tags: &str) -> Blog {
    Blog::create(
        BlogDraft {
            title: title.to_string(),
            content: "Long read".into(),
            excerpt: excerpt.to_string(),
            reading_time: 5,
            patreon: None,
            sources: None,
            tags: tags.to_string(),
            uploaded_by: user(owner),
        },
        "https://img/preview.png".into(),
    )
}

fn room() -> Chatroom {
    Chatroom::create(
        ChatroomDraft {
            name: "general".into(),
            description: "chit chat".into(),
            creator: user("owner"),
        },
        "https://img/room.png".into(),
    )
}

fn member_ids(room: &Chatroom) -> Vec<&str> {
    room.participants.iter().map(|p| p.user_id.as_str()).collect()
}

async fn snippet_crud(repo: &dyn Repository<CodeSnippet>) {
    let first = repo.create(snippet("u1", "a")).await.unwrap();
    repo.create(snippet("u2", "b")).await.unwrap();
    repo.create(snippet("u1", "c")).await.unwrap();

    assert_eq!(repo.get_by_id(&first.id).await.unwrap(), Some(first.clone()));
    assert_eq!(repo.get_by_id("missing").await.unwrap(), None);
    assert_eq!(repo.list_all().await.unwrap().len(), 3);

    let mine = repo.list_by_owner("u1").await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|s| s.uploaded_by.user_id == "u1"));

    let mut changed = first.clone();
    changed.code = "updated".into();
    assert_eq!(
        repo.replace_by_id(&first.id, changed.clone()).await.unwrap(),
        Some(changed.clone())
    );
    assert_eq!(repo.get_by_id(&first.id).await.unwrap(), Some(changed.clone()));
    assert_eq!(repo.replace_by_id("missing", changed.clone()).await.unwrap(), None);

    assert_eq!(repo.delete_by_id(&first.id).await.unwrap(), Some(changed));
    assert_eq!(repo.delete_by_id(&first.id).await.unwrap(), None);
    assert_eq!(repo.list_all().await.unwrap().len(), 2);
}

async fn duplicate_id_is_a_conflict(repo: &dyn Repository<CodeSnippet>) {
    let stored = repo.create(snippet("u1", "a")).await.unwrap();

    let err = repo.create(stored).await.unwrap_err();
    assert_matches!(err, StoreError::Duplicate { collection: "snippets", .. });
    assert_eq!(BackendError::from(err).status_code(), StatusCode::CONFLICT);
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

async fn blog_search_by_word(repo: &dyn BlogRepository) {
    repo.create(blog("u1", "Ownership in Rust", "Borrowing explained", "rust"))
        .await
        .unwrap();
    repo.create(blog("u2", "Async Python", "Event loops", "python"))
        .await
        .unwrap();

    let titles: Vec<_> = repo
        .search("ownership")
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, ["Ownership in Rust"]);

    let by_tag = repo.search("python").await.unwrap();
    assert_eq!(by_tag.len(), 1);
    assert!(repo.search("haskell").await.unwrap().is_empty());
}

async fn chatroom_sequences(repo: &dyn ChatroomRepository) {
    let room = repo.create(room()).await.unwrap();
    let joiner = Participant::new(user("a"), Role::Participant);

    let joined = repo.add_participant(&room.id, joiner.clone()).await.unwrap();
    assert_matches!(joined, Some(Membership::Joined(_)));

    let again = repo.add_participant(&room.id, joiner.clone()).await.unwrap();
    let Some(Membership::AlreadyMember(current)) = again else {
        panic!("expected AlreadyMember");
    };
    assert_eq!(member_ids(&current), ["owner", "a"]);

    for content in ["first", "second"] {
        repo.push_message(&room.id, ChatMessage::new(user("a"), content.into()))
            .await
            .unwrap()
            .unwrap();
    }

    let details = ChatroomDetails {
        name: "renamed".into(),
        description: "new topic".into(),
        image: None,
    };
    let updated = repo
        .update_details(&room.id, details.clone())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.image, "https://img/room.png");
    assert_eq!(member_ids(&updated), ["owner", "a"]);
    let contents: Vec<_> = updated.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["first", "second"]);

    let left = repo.remove_participant(&room.id, "a").await.unwrap().unwrap();
    assert_eq!(member_ids(&left), ["owner"]);
    assert_eq!(left.messages.len(), 2);

    let rejoined = repo.add_participant(&room.id, joiner.clone()).await.unwrap();
    assert_matches!(rejoined, Some(Membership::Joined(ref room)) if member_ids(room) == ["owner", "a"]);

    assert_eq!(repo.update_details("missing", details).await.unwrap(), None);
    assert_eq!(repo.add_participant("missing", joiner).await.unwrap(), None);
    assert_eq!(repo.remove_participant("missing", "a").await.unwrap(), None);
    assert_eq!(
        repo.push_message("missing", ChatMessage::new(user("a"), "lost".into()))
            .await
            .unwrap(),
        None
    );
}

async fn concurrent_joins_are_all_kept(repo: Arc<dyn ChatroomRepository>) {
    let room = repo.create(room()).await.unwrap();

    let mut handles = Vec::new();
    let joiners = (0..10).map(|i| format!("u{i}")).chain(["dup".to_string(), "dup".to_string()]);
    for user_id in joiners {
        let repo = Arc::clone(&repo);
        let id = room.id.clone();
        handles.push(tokio::spawn(async move {
            repo.add_participant(&id, Participant::new(user(&user_id), Role::Participant))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_some());
    }

    let stored = repo.get_by_id(&room.id).await.unwrap().unwrap();
    assert_eq!(stored.participants.len(), 12);
    assert_eq!(
        stored.participants.iter().filter(|p| p.user_id == "dup").count(),
        1
    );
}

#[tokio::test]
async fn test_memory_snippet_crud() {
    snippet_crud(&MemoryRepository::<CodeSnippet>::new()).await;
}

#[tokio::test]
async fn test_memory_duplicate_id() {
    duplicate_id_is_a_conflict(&MemoryRepository::<CodeSnippet>::new()).await;
}

#[tokio::test]
async fn test_memory_blog_search() {
    blog_search_by_word(&MemoryRepository::<Blog>::new()).await;
}

#[tokio::test]
async fn test_memory_chatroom_sequences() {
    chatroom_sequences(&MemoryRepository::<Chatroom>::new()).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_memory_concurrent_joins() {
    concurrent_joins_are_all_kept(Arc::new(MemoryRepository::<Chatroom>::new())).await;
}

#[tokio::test]
#[ignore] // Requires MongoDB at MONGO_TEST_URI
async fn test_mongo_snippet_crud() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    snippet_crud(&db.store().repository::<CodeSnippet>()).await;
    db.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires MongoDB at MONGO_TEST_URI
async fn test_mongo_duplicate_id() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    duplicate_id_is_a_conflict(&db.store().repository::<CodeSnippet>()).await;
    db.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires MongoDB at MONGO_TEST_URI
async fn test_mongo_blog_search() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    blog_search_by_word(&db.store().repository::<Blog>()).await;
    db.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires MongoDB at MONGO_TEST_URI
async fn test_mongo_chatroom_sequences() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    chatroom_sequences(&db.store().repository::<Chatroom>()).await;
    db.cleanup().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore] // Requires MongoDB at MONGO_TEST_URI
async fn test_mongo_concurrent_joins() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    concurrent_joins_are_all_kept(Arc::new(db.store().repository::<Chatroom>())).await;
    db.cleanup().await;
}
