//! Property-based tests for owner filtering

use proptest::prelude::*;
use tokio_test::block_on;

use devhub::backend::persistence::{MemoryRepository, Repository};
use devhub::shared::content::SnippetDraft;
use devhub::shared::{CodeSnippet, UserRef};

fn snippet(owner: &str) -> CodeSnippet {
    CodeSnippet::create(
        SnippetDraft {
            code: "let x = 1;".into(),
            description: None,
            language: None,
            uploaded_by: UserRef {
                user_id: owner.to_string(),
                user_email: format!("{owner}@example.com"),
                user_image: None,
            },
        },
        "rust".into(),
    )
}

proptest! {
    #[test]
    fn test_list_by_owner_is_exact(
        owners in prop::collection::vec(prop::sample::select(vec!["ann", "ben", "cy", "an"]), 0..25),
        target in prop::sample::select(vec!["ann", "ben", "cy", "an", "nobody"]),
    ) {
        let repo = MemoryRepository::new();
        for owner in &owners {
            block_on(repo.create(snippet(owner))).unwrap();
        }

        let mine = block_on(repo.list_by_owner(target)).unwrap();
        let expected = owners.iter().filter(|owner| **owner == target).count();

        prop_assert_eq!(mine.len(), expected);
        prop_assert!(mine.iter().all(|s| s.uploaded_by.user_id == target));
    }
}
