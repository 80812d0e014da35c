//! Post integration tests

use userdb::app::{post_create, post_list_by_author, user_create, PostCreateReq, UserCreateReq};
use userdb::infra::db::init_test_db;
use userdb::infra::DbPool;

// ──────────────────────── Helper ────────────────────────

fn seed_author(pool: &DbPool) -> String {
    user_create(
        pool,
        UserCreateReq {
            name: "Author".to_string(),
            email: "author@test.com".to_string(),
            role: None,
        },
    )
    .unwrap()
    .id
}

// ══════════════════════════════════════════════════════════
//  post_create
// ══════════════════════════════════════════════════════════

#[test]
fn create_post_returns_dto_with_correct_fields() {
    let pool = init_test_db();
    let author_id = seed_author(&pool);
    let dto = post_create(
        &pool,
        PostCreateReq {
            title: "Hello".to_string(),
            content: Some("world".to_string()),
            published: Some(true),
            author_id: author_id.clone(),
        },
    )
    .unwrap();
    assert_eq!(dto.title, "Hello");
    assert_eq!(dto.content, "world");
    assert!(dto.published);
    assert_eq!(dto.author_id, author_id);
    assert!(!dto.id.is_empty());
}

#[test]
fn create_post_defaults_optional_fields() {
    let pool = init_test_db();
    let author_id = seed_author(&pool);
    let dto = post_create(
        &pool,
        PostCreateReq {
            title: "Draft".to_string(),
            content: None,
            published: None,
            author_id,
        },
    )
    .unwrap();
    assert_eq!(dto.content, "");
    assert!(!dto.published);
}

#[test]
fn create_post_empty_title_fails() {
    let pool = init_test_db();
    let author_id = seed_author(&pool);
    let err = post_create(
        &pool,
        PostCreateReq {
            title: "  ".to_string(),
            content: None,
            published: None,
            author_id,
        },
    );
    assert!(err.is_err());
    assert_eq!(err.unwrap_err().code(), "VALIDATION_ERROR");
}

#[test]
fn create_post_unknown_author_fails() {
    let pool = init_test_db();
    let err = post_create(
        &pool,
        PostCreateReq {
            title: "Orphan".to_string(),
            content: None,
            published: None,
            author_id: "nonexistent-id".to_string(),
        },
    );
    assert!(err.is_err());
    assert_eq!(err.unwrap_err().code(), "NOT_FOUND");
}

// ══════════════════════════════════════════════════════════
//  post_list_by_author
// ══════════════════════════════════════════════════════════

#[test]
fn list_posts_by_author_ordered_oldest_first() {
    let pool = init_test_db();
    let author_id = seed_author(&pool);
    for title in ["one", "two", "three"] {
        post_create(
            &pool,
            PostCreateReq {
                title: title.to_string(),
                content: None,
                published: None,
                author_id: author_id.clone(),
            },
        )
        .unwrap();
    }
    let posts = post_list_by_author(&pool, &author_id).unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].title, "one");
    assert_eq!(posts[2].title, "three");
}

#[test]
fn list_posts_empty_for_author_without_posts() {
    let pool = init_test_db();
    let author_id = seed_author(&pool);
    let posts = post_list_by_author(&pool, &author_id).unwrap();
    assert!(posts.is_empty());
}
