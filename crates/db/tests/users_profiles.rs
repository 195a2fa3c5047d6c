//! Integration tests for user accounts, profiles and categories.

use assert_matches::assert_matches;
use lostfound_core::status::{UserRole, UserStatus};
use lostfound_db::models::category::CategoryKind;
use lostfound_db::models::profile::{UpdateIdentity, UpsertProfile};
use lostfound_db::models::user::CreateUser;
use lostfound_db::repositories::{CategoryRepo, ProfileRepo, UserRepo};
use sqlx::PgPool;

fn new_user(name: &str, email: &str) -> CreateUser {
    CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: UserRole::User,
    }
}

fn assert_unique_violation(err: sqlx::Error, constraint: &str) {
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some(constraint));
}

// ---------------------------------------------------------------------------
// Test: Duplicate email is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("Ann", "ann@example.com"))
        .await
        .unwrap();
    let err = UserRepo::create(&pool, &new_user("Other Ann", "ann@example.com"))
        .await
        .unwrap_err();
    assert_unique_violation(err, "uq_users_email");
}

// ---------------------------------------------------------------------------
// Test: Registration writes user and profile atomically
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_profile_is_atomic(pool: PgPool) {
    let profile = UpsertProfile {
        bio: Some("hi".into()),
        age: Some(30),
        profile_picture: None,
    };
    let (user, created) =
        UserRepo::create_with_profile(&pool, &new_user("Ben", "ben@example.com"), &profile)
            .await
            .unwrap();
    assert_eq!(created.user_id, user.id);
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.role, UserRole::User);

    // Second registration with the same email leaves no stray profile behind.
    let result =
        UserRepo::create_with_profile(&pool, &new_user("Ben 2", "ben@example.com"), &profile)
            .await;
    assert!(result.is_err());
    assert_eq!(ProfileRepo::list(&pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Login lookup prefers an email match
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_name_or_email(pool: PgPool) {
    let by_name = UserRepo::create(&pool, &new_user("carol@example.com", "x@example.com"))
        .await
        .unwrap();
    let by_email = UserRepo::create(&pool, &new_user("Carol", "carol@example.com"))
        .await
        .unwrap();

    let found = UserRepo::find_by_name_or_email(&pool, "carol@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, by_email.id);

    let found = UserRepo::find_by_name_or_email(&pool, "Carol")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, by_email.id);
    assert_ne!(found.id, by_name.id);

    assert!(UserRepo::find_by_name_or_email(&pool, "nobody")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Profile upsert creates lazily then merges
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_upsert(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Dana", "dana@example.com"))
        .await
        .unwrap();
    assert!(ProfileRepo::find_by_user_id(&pool, user.id)
        .await
        .unwrap()
        .is_none());

    let (_, first) = ProfileRepo::update_with_identity(
        &pool,
        user.id,
        &UpdateIdentity::default(),
        &UpsertProfile {
            bio: Some("first".into()),
            age: Some(41),
            profile_picture: None,
        },
    )
    .await
    .unwrap()
    .expect("user exists");

    let (renamed, second) = ProfileRepo::update_with_identity(
        &pool,
        user.id,
        &UpdateIdentity {
            name: Some("Dana S.".into()),
            email: None,
        },
        &UpsertProfile {
            bio: Some("second".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("user exists");

    assert_eq!(first.id, second.id, "same profile row is updated");
    assert_eq!(second.bio.as_deref(), Some("second"));
    assert_eq!(second.age, Some(41), "absent fields keep their value");
    assert_eq!(renamed.name, "Dana S.");
    assert_eq!(renamed.email, "dana@example.com");

    let missing = ProfileRepo::update_with_identity(
        &pool,
        999_999,
        &UpdateIdentity::default(),
        &UpsertProfile::default(),
    )
    .await
    .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: Status, password and delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_password_delete(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Eve", "eve@example.com"))
        .await
        .unwrap();

    let blocked = UserRepo::update_status(&pool, user.id, UserStatus::Blocked)
        .await
        .unwrap()
        .unwrap();
    assert!(blocked.is_blocked());

    assert!(UserRepo::update_password(&pool, user.id, "new-hash")
        .await
        .unwrap());
    let reloaded = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.password_hash, "new-hash");

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());
    assert!(!UserRepo::delete(&pool, user.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: Unknown column text fails to decode
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_status_text_is_a_decode_error(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Mallory", "mallory@example.com"))
        .await
        .unwrap();

    sqlx::query("ALTER TABLE users DROP CONSTRAINT ck_users_status")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("UPDATE users SET status = 'suspended' WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let result = UserRepo::find_by_id(&pool, user.id).await;
    assert_matches!(result, Err(sqlx::Error::ColumnDecode { .. }));
}

// ---------------------------------------------------------------------------
// Test: Bootstrap insert never overwrites
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_if_absent(pool: PgPool) {
    let mut admin = new_user("root", "root@example.com");
    admin.role = UserRole::Admin;

    let created = UserRepo::create_if_absent(&pool, &admin).await.unwrap();
    assert_matches!(created, Some(ref u) if u.role == UserRole::Admin);

    admin.password_hash = "changed".to_string();
    let again = UserRepo::create_if_absent(&pool, &admin).await.unwrap();
    assert!(again.is_none());

    let stored = UserRepo::find_by_email(&pool, "root@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.password_hash, "hash");
}

// ---------------------------------------------------------------------------
// Test: Category names are unique per kind
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_categories(pool: PgPool) {
    CategoryRepo::create(&pool, CategoryKind::Found, "Keys")
        .await
        .unwrap();
    CategoryRepo::create(&pool, CategoryKind::Found, "Bags")
        .await
        .unwrap();
    // Same name is fine in the other table.
    CategoryRepo::create(&pool, CategoryKind::Lost, "Keys")
        .await
        .unwrap();

    let err = CategoryRepo::create(&pool, CategoryKind::Found, "Keys")
        .await
        .unwrap_err();
    assert_unique_violation(err, "uq_found_item_categories_name");

    let names: Vec<String> = CategoryRepo::list(&pool, CategoryKind::Found)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Bags", "Keys"]);
}
