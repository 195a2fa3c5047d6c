//! Integration tests for found/lost item search, paging and
//! ownership-scoped mutations.

use chrono::{Duration, TimeZone, Utc};
use lostfound_core::search::{ItemSortField, Pagination, SortOrder};
use lostfound_core::status::UserRole;
use lostfound_db::models::category::CategoryKind;
use lostfound_db::models::found_item::{CreateFoundItem, UpdateFoundItem};
use lostfound_db::models::item::{ContactInfo, ItemSearch};
use lostfound_db::models::lost_item::{CreateLostItem, UpdateLostItem};
use lostfound_db::models::user::CreateUser;
use lostfound_db::repositories::{CategoryRepo, FoundItemRepo, LostItemRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, name: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            password_hash: "not-a-real-hash".to_string(),
            role: UserRole::User,
        },
    )
    .await
    .unwrap()
    .id
}

fn new_found_item(category_id: i64, name: &str, location: &str, day: i64) -> CreateFoundItem {
    CreateFoundItem {
        category_id,
        name: name.to_string(),
        description: format!("{name} found near {location}"),
        location: location.to_string(),
        date_found: Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap() + Duration::days(day),
        contact_info: ContactInfo {
            phone: Some("555-0100".to_string()),
            email: None,
        },
        images: vec![],
    }
}

fn new_lost_item(category_id: i64, name: &str) -> CreateLostItem {
    CreateLostItem {
        category_id,
        name: name.to_string(),
        description: "last seen at the park".to_string(),
        location: Some("Riverside Park".to_string()),
        date_lost: None,
        is_found: false,
        contact_info: ContactInfo::default(),
        images: vec![],
    }
}

/// Twelve wallets plus three unrelated items, all in one category.
async fn seed_wallets(pool: &PgPool) -> (i64, i64) {
    let user = seed_user(pool, "finder").await;
    let category = CategoryRepo::create(pool, CategoryKind::Found, "Accessories")
        .await
        .unwrap();

    for i in 0..12 {
        let name = format!("Wallet {i:02}");
        FoundItemRepo::create(pool, user, &new_found_item(category.id, &name, "Library", i))
            .await
            .unwrap();
    }
    for (i, name) in ["Umbrella", "Scarf", "Gloves"].iter().enumerate() {
        FoundItemRepo::create(pool, user, &new_found_item(category.id, name, "Gym", i as i64))
            .await
            .unwrap();
    }
    (user, category.id)
}

// ---------------------------------------------------------------------------
// Test: searchTerm filters and total reflects the filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_term_matches_case_insensitively(pool: PgPool) {
    seed_wallets(&pool).await;

    let search = ItemSearch {
        search_term: Some("WALLET".into()),
        pagination: Pagination::new(Some(1), Some(100)),
        ..Default::default()
    };
    let (items, total) = FoundItemRepo::search(&pool, &search).await.unwrap();

    assert_eq!(total, 12);
    assert_eq!(items.len(), 12);
    assert!(items
        .iter()
        .all(|d| d.item.name.to_lowercase().contains("wallet")));
}

// ---------------------------------------------------------------------------
// Test: page 2 of 5 continues page 1 under the same ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_page_continues_first(pool: PgPool) {
    seed_wallets(&pool).await;

    let base = ItemSearch {
        search_term: Some("wallet".into()),
        sort_field: ItemSortField::Name,
        sort_order: SortOrder::Asc,
        ..Default::default()
    };
    let everything = ItemSearch {
        pagination: Pagination::new(Some(1), Some(100)),
        ..base.clone()
    };
    let page_two = ItemSearch {
        pagination: Pagination::new(Some(2), Some(5)),
        ..base
    };

    let (all, _) = FoundItemRepo::search(&pool, &everything).await.unwrap();
    let (page, total) = FoundItemRepo::search(&pool, &page_two).await.unwrap();

    assert_eq!(total, 12, "total is the filtered count, not the page size");
    let expected: Vec<i64> = all[5..10].iter().map(|d| d.item.id).collect();
    let actual: Vec<i64> = page.iter().map(|d| d.item.id).collect();
    assert_eq!(actual, expected);
    assert_eq!(page[0].item.name, "Wallet 05");
}

// ---------------------------------------------------------------------------
// Test: Filters are ANDed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filters_are_conjunctive(pool: PgPool) {
    let (_, category_id) = seed_wallets(&pool).await;

    let search = ItemSearch {
        category_id: Some(category_id),
        location: Some("gym".into()),
        ..Default::default()
    };
    let (items, total) = FoundItemRepo::search(&pool, &search).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(items.len(), 3);

    let search = ItemSearch {
        search_term: Some("wallet".into()),
        location: Some("gym".into()),
        ..Default::default()
    };
    let (items, total) = FoundItemRepo::search(&pool, &search).await.unwrap();
    assert_eq!(total, 0);
    assert!(items.is_empty());
}

// ---------------------------------------------------------------------------
// Test: LIKE wildcards in user input match literally
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wildcards_are_escaped(pool: PgPool) {
    seed_wallets(&pool).await;

    let search = ItemSearch {
        search_term: Some("%".into()),
        ..Default::default()
    };
    let (_, total) = FoundItemRepo::search(&pool, &search).await.unwrap();
    assert_eq!(total, 0);
}

// ---------------------------------------------------------------------------
// Test: Non-owner update looks exactly like a missing item
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_owner_update_affects_nothing(pool: PgPool) {
    let (owner, category_id) = seed_wallets(&pool).await;
    let stranger = seed_user(&pool, "stranger").await;
    let item = FoundItemRepo::create(
        &pool,
        owner,
        &new_found_item(category_id, "Camera", "Museum", 0),
    )
    .await
    .unwrap();

    let update = UpdateFoundItem {
        name: Some("Stolen camera".into()),
        ..Default::default()
    };
    let by_stranger = FoundItemRepo::update_owned(&pool, item.id, stranger, &update)
        .await
        .unwrap();
    let missing = FoundItemRepo::update_owned(&pool, 999_999, owner, &update)
        .await
        .unwrap();
    assert!(by_stranger.is_none());
    assert!(missing.is_none());

    let unchanged = FoundItemRepo::find_by_id(&pool, item.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.name, "Camera");

    let updated = FoundItemRepo::update_owned(&pool, item.id, owner, &update)
        .await
        .unwrap()
        .expect("owner may update");
    assert_eq!(updated.name, "Stolen camera");
    assert_eq!(updated.location, "Museum", "absent fields are kept");
    assert_eq!(updated.contact_info.phone.as_deref(), Some("555-0100"));

    assert!(FoundItemRepo::delete_owned(&pool, item.id, stranger)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Lost item lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lost_item_update_and_is_found(pool: PgPool) {
    let owner = seed_user(&pool, "owner").await;
    let category = CategoryRepo::create(&pool, CategoryKind::Lost, "Electronics")
        .await
        .unwrap();
    let item = LostItemRepo::create(&pool, owner, &new_lost_item(category.id, "Headphones"))
        .await
        .unwrap();
    assert!(!item.is_found);

    let update = UpdateLostItem {
        description: Some("white over-ear".into()),
        ..Default::default()
    };
    let updated = LostItemRepo::update_owned(&pool, item.id, owner, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.description, "white over-ear");
    assert_eq!(updated.location.as_deref(), Some("Riverside Park"));

    let flagged = LostItemRepo::set_is_found_owned(&pool, item.id, owner, true)
        .await
        .unwrap()
        .unwrap();
    assert!(flagged.is_found);

    let detail = LostItemRepo::find_detail_by_id(&pool, item.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.reporter_name, "owner");
    assert_eq!(detail.category_name, "Electronics");

    let mine = LostItemRepo::list_for_user(&pool, owner).await.unwrap();
    assert_eq!(mine.len(), 1);

    let (found, total) = LostItemRepo::search(
        &pool,
        &ItemSearch {
            name: Some("phones".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(total, 1);
    assert_eq!(found[0].item.id, item.id);
}

// ---------------------------------------------------------------------------
// Test: Recent listing is newest first and bounded
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_recent(pool: PgPool) {
    seed_wallets(&pool).await;

    let recent = FoundItemRepo::list_recent(&pool, 4).await.unwrap();
    assert_eq!(recent.len(), 4);
    assert_eq!(recent[0].item.name, "Gloves");
    assert!(recent.windows(2).all(|w| w[0].item.id > w[1].item.id));
}
