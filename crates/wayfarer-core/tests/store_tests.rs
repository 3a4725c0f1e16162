mod common;

use std::fs;
use std::time::Duration;

use common::{create_test_store, open_store, test_config};
use serde_json::{json, Value};
use wayfarer_core::params::{
    CreateCity, CreateCountry, CreateOffer, CreatePlace, CreateUser, UpdateOffer, UpdatePlace,
    UpdateProfile,
};
use wayfarer_core::{hash_token, BudgetTier, PlaceType, PriceTier, Role};

#[tokio::test]
async fn fresh_store_seeds_catalog_and_writes_document() {
    let (temp_dir, store) = create_test_store().await;

    assert_eq!(store.list_places().len(), 20);
    assert_eq!(store.list_offers().len(), 8);
    assert!(store.find_place_by_id("place-1").is_some());
    assert!(temp_dir.path().join("store.json").exists());
}

#[tokio::test]
async fn mutations_survive_reload_after_flush() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = test_config(temp_dir.path());

    let created_id = {
        let store = open_store(config.clone()).await;
        let place = store.create_place(&CreatePlace {
            slug: None,
            name: "Afrasiab Museum".to_string(),
            country: "Uzbekistan".to_string(),
            city: "Samarkand".to_string(),
            place_type: PlaceType::Landmark,
            description: String::new(),
            price_tier: PriceTier::Simple,
            avg_cost: 4.0,
            rating: Some(4.2),
            coords: None,
            tags: vec!["history".to_string()],
        });
        store.create_user(&CreateUser {
            name: "Aziza".to_string(),
            email: "Aziza@Example.uz".to_string(),
            password_hash: "digest".to_string(),
            role: Role::User,
            avatar: None,
        });
        store.flush().expect("flush should succeed");
        place.id
    };

    let store = open_store(config).await;
    let reloaded = store
        .find_place_by_id(&created_id)
        .expect("created place should survive reload");
    assert_eq!(reloaded.name, "Afrasiab Museum");
    assert_eq!(reloaded.slug.as_deref(), Some("afrasiab-museum"));

    let user = store
        .find_user_by_email("aziza@example.uz")
        .expect("created user should survive reload");
    assert_eq!(user.id, "1");

    // The id counter continues where the reloaded document left off.
    let next = store.create_user(&CreateUser {
        name: "Bobur".to_string(),
        email: "bobur@example.uz".to_string(),
        password_hash: "digest".to_string(),
        role: Role::User,
        avatar: None,
    });
    assert_eq!(next.id, "2");
}

#[tokio::test]
async fn reopening_does_not_duplicate_seeds() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = test_config(temp_dir.path());

    {
        let store = open_store(config.clone()).await;
        store.flush().expect("flush should succeed");
    }

    let store = open_store(config).await;
    assert_eq!(store.list_places().len(), 20);
    assert_eq!(store.list_offers().len(), 8);
}

#[tokio::test]
async fn deleted_seed_is_backfilled_on_reload() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = test_config(temp_dir.path());

    {
        let store = open_store(config.clone()).await;
        store.delete_place("place-1").expect("seed place exists");
        store.flush().expect("flush should succeed");
    }

    // Seed merging restores the missing record without touching the rest.
    let store = open_store(config).await;
    assert!(store.find_place_by_id("place-1").is_some());
    assert_eq!(store.list_places().len(), 20);
}

#[tokio::test]
async fn corrupt_document_is_quarantined_and_reseeded() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = test_config(temp_dir.path());
    let garbage = b"{this is not json";
    fs::write(&config.data_path, garbage).expect("write garbage");

    let store = open_store(config.clone()).await;
    assert_eq!(store.list_places().len(), 20);

    let backup = fs::read_dir(temp_dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .find(|entry| entry.file_name().to_string_lossy().contains(".corrupt."))
        .expect("corrupt backup should exist");
    let backup_bytes = fs::read(backup.path()).expect("read backup");
    assert_eq!(backup_bytes, garbage);

    // The replacement document is valid JSON again.
    let doc: Value =
        serde_json::from_slice(&fs::read(&config.data_path).expect("read store")).expect("parse");
    assert_eq!(doc["version"], json!(2));
}

#[tokio::test]
async fn raw_tokens_never_reach_disk() {
    let (temp_dir, store) = create_test_store().await;
    let raw = "raw-refresh-secret-1234";
    let digest = hash_token(raw);

    store.add_refresh_token(&digest, Some("7"));
    store.flush().expect("flush should succeed");

    let document =
        fs::read_to_string(temp_dir.path().join("store.json")).expect("read store file");
    assert!(!document.contains(raw));
    assert!(document.contains(&digest));

    assert!(store.is_refresh_token_active(&digest, "7"));
    assert!(!store.is_refresh_token_active(&digest, "8"));

    store.revoke_refresh_token(&digest);
    assert!(!store.is_refresh_token_active(&digest, "7"));
}

#[tokio::test]
async fn rotated_tokens_are_pruned_to_the_per_user_cap() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let mut config = test_config(temp_dir.path());
    config.max_tokens_per_user = 3;

    {
        let store = open_store(config.clone()).await;
        for i in 0..6 {
            store.add_refresh_token(&hash_token(&format!("session-{i}")), Some("1"));
        }
        store.flush().expect("flush should succeed");
    }

    // The load-time pruning pass settles the vault at the cap.
    let store = open_store(config.clone()).await;
    store.flush().expect("flush should succeed");
    let doc: Value =
        serde_json::from_slice(&fs::read(&config.data_path).expect("read store")).expect("parse");
    let tokens = doc["refreshTokens"].as_array().expect("token array");
    assert_eq!(tokens.len(), 3);

    // Every surviving record still belongs to the rotated sessions.
    let surviving = (0..6)
        .filter(|i| store.is_refresh_token_active(&hash_token(&format!("session-{i}")), "1"))
        .count();
    assert_eq!(surviving, 3);
}

#[tokio::test]
async fn legacy_document_shapes_normalize_on_load() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = test_config(temp_dir.path());

    let old_ts = 1_000i64; // far outside every retention window
    let document = json!({
        "version": 1,
        "users": [
            {"id": "9", "name": "Legacy", "email": "legacy@example.uz",
             "passwordHash": "digest", "createdAt": "2020-01-01T00:00:00Z"}
        ],
        "refreshTokens": [
            "bare-raw-token",
            {"token": "raw-in-object", "userId": 9},
            {"tokenHash": "stale-digest", "userId": "9", "createdAt": old_ts},
            null
        ],
        "events": [
            {"type": "plan_generated", "ts": old_ts}
        ]
    });
    fs::write(
        &config.data_path,
        serde_json::to_vec(&document).expect("serialize fixture"),
    )
    .expect("write fixture");

    let store = open_store(config).await;

    // The raw-token object was digested and stamped with a fresh timestamp.
    assert!(store.is_refresh_token_active(&hash_token("raw-in-object"), "9"));
    // The stale digest fell out of the retention window at load.
    assert!(!store.is_refresh_token_active("stale-digest", "9"));
    // Events older than the window were discarded.
    assert!(store.list_events().is_empty());
    // Missing catalogs fell back to seeds; users were kept as-is.
    assert_eq!(store.list_places().len(), 20);
    assert!(store.find_user_by_id("9").is_some());

    // The counter was recomputed past the highest numeric id.
    let user = store.create_user(&CreateUser {
        name: "New".to_string(),
        email: "new@example.uz".to_string(),
        password_hash: "digest".to_string(),
        role: Role::User,
        avatar: None,
    });
    assert_eq!(user.id, "10");
}

#[tokio::test]
async fn find_place_by_key_prefers_id_then_slug_then_name() {
    let (_temp_dir, store) = create_test_store().await;

    // Exact id wins.
    let by_id = store.find_place_by_key("place-1").expect("id lookup");
    assert_eq!(by_id.name, "Registan Square");

    // Slug lookup is normalization-insensitive.
    let by_slug = store.find_place_by_key("  Registan Square  ").expect("name lookup");
    assert_eq!(by_slug.id, "place-1");
    let by_norm = store.find_place_by_key("registan-square").expect("slug lookup");
    assert_eq!(by_norm.id, "place-1");

    assert!(store.find_place_by_key("no-such-place").is_none());
    assert!(store.find_place_by_key("   ").is_none());
}

#[tokio::test]
async fn deleting_a_country_cascades_to_its_cities() {
    let (_temp_dir, store) = create_test_store().await;

    let uz = store.create_country(&CreateCountry { name: " Uzbekistan ".to_string() });
    assert_eq!(uz.name, "Uzbekistan");
    let kz = store.create_country(&CreateCountry { name: "Kazakhstan".to_string() });

    store.create_city(&CreateCity { name: "Samarkand".to_string(), country_id: uz.id.clone() });
    store.create_city(&CreateCity { name: "Bukhara".to_string(), country_id: uz.id.clone() });
    let almaty = store.create_city(&CreateCity { name: "Almaty".to_string(), country_id: kz.id.clone() });

    assert!(store.find_country_by_name("uzbekistan").is_some());
    assert!(store.find_city_by_name("samarkand", Some(&uz.id)).is_some());
    assert_eq!(store.find_city_by_id(&almaty.id), Some(almaty.clone()));

    store.delete_country(&uz.id).expect("country exists");
    assert!(store.find_country_by_id(&uz.id).is_none());
    assert!(store.find_city_by_name("Samarkand", None).is_none());
    assert!(store.find_city_by_name("Bukhara", None).is_none());
    assert_eq!(store.list_cities(), vec![almaty.clone()]);

    // Individual city deletion leaves the country in place.
    store.delete_city(&almaty.id).expect("city exists");
    assert!(store.list_cities().is_empty());
    assert!(store.find_country_by_id(&kz.id).is_some());
}

#[tokio::test]
async fn ensure_admin_seeds_once() {
    let (_temp_dir, store) = create_test_store().await;

    let admin = store
        .ensure_admin("Ops", "admin@example.uz", "digest")
        .expect("first call creates the admin");
    assert_eq!(admin.role, Role::Admin);

    // Repeat calls and empty credentials are silent no-ops.
    assert!(store.ensure_admin("Ops", "admin@example.uz", "digest").is_none());
    assert!(store.ensure_admin("Ops", "", "digest").is_none());
    assert!(store.ensure_admin("Ops", "other@example.uz", "  ").is_none());
    assert_eq!(store.list_users().len(), 1);
}

#[tokio::test]
async fn profile_and_role_updates_apply_partially() {
    let (_temp_dir, store) = create_test_store().await;
    let user = store.create_user(&CreateUser {
        name: "Dilnoza".to_string(),
        email: "dilnoza@example.uz".to_string(),
        password_hash: "digest".to_string(),
        role: Role::User,
        avatar: Some("old.png".to_string()),
    });
    assert!(user.updated_at.is_none());

    // Blank name is ignored, the avatar is replaced, updatedAt is stamped.
    let updated = store
        .update_user_profile(
            &user.id,
            &UpdateProfile {
                name: Some("   ".to_string()),
                avatar: Some("new.png".to_string()),
                clear_avatar: false,
            },
        )
        .expect("user exists");
    assert_eq!(updated.name, "Dilnoza");
    assert_eq!(updated.avatar.as_deref(), Some("new.png"));
    assert!(updated.updated_at.is_some());

    // clear_avatar wins over a supplied avatar value.
    let cleared = store
        .update_user_profile(
            &user.id,
            &UpdateProfile {
                name: None,
                avatar: Some("ignored.png".to_string()),
                clear_avatar: true,
            },
        )
        .expect("user exists");
    assert_eq!(cleared.avatar, None);

    let promoted = store.update_user_role(&user.id, Role::Admin).expect("user exists");
    assert_eq!(promoted.role, Role::Admin);
    assert!(store.update_user_role("999", Role::Admin).is_none());
}

#[tokio::test]
async fn offer_crud_round_trip() {
    let (_temp_dir, store) = create_test_store().await;

    let offer = store.create_offer(&CreateOffer {
        title: "Fergana Valley Loop".to_string(),
        city: "Fergana".to_string(),
        budget: BudgetTier::Simple,
        description: String::new(),
    });
    // New offers are prepended ahead of the seeds.
    assert_eq!(store.list_offers().first().map(|o| o.id.clone()), Some(offer.id.clone()));

    let updated = store
        .update_offer(
            &offer.id,
            &UpdateOffer {
                title: None,
                city: None,
                budget: Some(BudgetTier::Comfort),
                description: Some("Guided three-city valley tour.".to_string()),
            },
        )
        .expect("offer exists");
    assert_eq!(updated.title, "Fergana Valley Loop");
    assert_eq!(updated.budget, BudgetTier::Comfort);

    let removed = store.delete_offer(&offer.id).expect("offer exists");
    assert_eq!(removed.id, offer.id);
    assert!(store.find_offer_by_id(&offer.id).is_none());
    assert!(store.delete_offer(&offer.id).is_none());
}

#[tokio::test]
async fn place_update_keeps_slug_unless_supplied() {
    let (_temp_dir, store) = create_test_store().await;
    let place = store.find_place_by_id("place-1").expect("seed place");
    assert_eq!(place.slug.as_deref(), Some("registan-square"));

    // Renaming does not silently rewrite the slug.
    let renamed = store
        .update_place(
            "place-1",
            &UpdatePlace {
                name: Some("Registan Ensemble".to_string()),
                ..Default::default()
            },
        )
        .expect("place exists");
    assert_eq!(renamed.name, "Registan Ensemble");
    assert_eq!(renamed.slug.as_deref(), Some("registan-square"));

    // An explicit slug and a negative cost are both honored, cost clamped.
    let updated = store
        .update_place(
            "place-1",
            &UpdatePlace {
                slug: Some("registan-ensemble".to_string()),
                avg_cost: Some(-5.0),
                ..Default::default()
            },
        )
        .expect("place exists");
    assert_eq!(updated.slug.as_deref(), Some("registan-ensemble"));
    assert_eq!(updated.avg_cost, 0.0);
}

#[tokio::test]
async fn tracked_events_round_trip_with_metadata() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = test_config(temp_dir.path());

    {
        let store = open_store(config.clone()).await;
        store.track_event("plan_generated", Some(json!({"city": "Khiva"})));
        store.track_event("user_login", None);
        store.flush().expect("flush should succeed");
    }

    let store = open_store(config).await;
    let events = store.list_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, "plan_generated");
    assert_eq!(events[0].meta, Some(json!({"city": "Khiva"})));
    assert!(events[0].ts > 0);
}

#[tokio::test]
async fn coalesced_writes_land_and_rearm_without_a_flush() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = test_config(temp_dir.path());
    let store = open_store(config.clone()).await;

    store.track_event("plan_generated", None);
    tokio::time::sleep(Duration::from_millis(500)).await;
    let doc: Value =
        serde_json::from_slice(&fs::read(&config.data_path).expect("read store")).expect("parse");
    assert_eq!(doc["events"].as_array().expect("event array").len(), 1);

    // The fired timer released its slot, so a later mutation arms a fresh
    // write instead of sitting unpersisted.
    store.track_event("plan_generated", None);
    tokio::time::sleep(Duration::from_millis(500)).await;
    let doc: Value =
        serde_json::from_slice(&fs::read(&config.data_path).expect("read store")).expect("parse");
    assert_eq!(doc["events"].as_array().expect("event array").len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn flush_is_safe_while_a_coalesced_write_fires() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = test_config(temp_dir.path());
    let store = open_store(config.clone()).await;

    // Each round lets the debounce window elapse so the timer task can be
    // mid-write on the other worker exactly when flush runs. Flush must
    // neither fail nor leave a torn document behind.
    for i in 0..20 {
        store.track_event("burst", Some(json!({"seq": i})));
        tokio::time::sleep(Duration::from_millis(200)).await;
        store.flush().expect("flush should succeed alongside the timer");
    }
    tokio::time::sleep(Duration::from_millis(500)).await;

    let doc: Value =
        serde_json::from_slice(&fs::read(&config.data_path).expect("read store")).expect("parse");
    assert_eq!(doc["events"].as_array().expect("event array").len(), 20);
}

#[tokio::test]
async fn damaged_record_does_not_reseed_the_document() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config = test_config(temp_dir.path());

    let document = json!({
        "version": 2,
        "users": [
            {"id": "5", "name": "Kept", "email": "kept@example.uz",
             "passwordHash": "digest", "createdAt": "2024-05-01T00:00:00Z"},
            {"id": "6", "name": "Broken"}
        ],
        "places": ["not a place"]
    });
    fs::write(
        &config.data_path,
        serde_json::to_vec(&document).expect("serialize fixture"),
    )
    .expect("write fixture");

    // Only the unparseable records drop; the document itself survives.
    let store = open_store(config).await;
    assert!(store.find_user_by_id("5").is_some());
    assert!(store.find_user_by_id("6").is_none());
    assert_eq!(store.list_users().len(), 1);
    assert_eq!(store.list_places().len(), 20);

    let quarantined = fs::read_dir(temp_dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_name().to_string_lossy().contains(".corrupt."));
    assert!(!quarantined, "partial damage must not trigger quarantine");
}
