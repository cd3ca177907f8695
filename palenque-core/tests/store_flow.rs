// palenque-core/tests/store_flow.rs
// End-to-end store scenarios against a fresh instance per test.

use std::time::Duration;

use palenque_core::{
    AppStore, DataSource, DuplicateJoins, FavoriteToggle, FetchOutcome, StoreConfig, StoreError,
};
use shared::models::{
    BookingSpec, BookingStatus, LinkType, NotificationsPatch, PaymentMethodSpec, PaymentMode,
    PaymentStatus, PlanTier, PoolLeader, PoolSpec, PoolStatus, PreferenceLevel,
    RecommendationSpec, DEADLINE_CLOSED,
};
use tempfile::TempDir;

/// Route store logs through the test harness; `RUST_LOG` narrows them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

fn demo_store() -> AppStore {
    init_tracing();
    AppStore::open(StoreConfig::demo()).unwrap()
}

fn pool_spec(target_members: u32, price_per_member: f64) -> PoolSpec {
    PoolSpec {
        leader: PoolLeader {
            name: "Juan D.".to_string(),
            avatar: "JD".to_string(),
        },
        service_id: 1,
        service_name: "Hotel Vista al Volcán".to_string(),
        location: "Santa Ana".to_string(),
        image: "/volcano-view-hotel.jpg".to_string(),
        target_members,
        total_price: price_per_member * target_members as f64,
        price_per_member: Some(price_per_member),
        deadline: "24h 00m".to_string(),
    }
}

fn booking_spec(store: &AppStore) -> BookingSpec {
    let service = store.state().service(1).unwrap().clone();
    BookingSpec {
        total_price: service.price * 2.0,
        service,
        date: "2025-08-15".to_string(),
        time: "10:00".to_string(),
        guests: 2,
        extras: vec!["Desayuno incluido".to_string()],
        status: BookingStatus::Confirmado,
        pool_id: None,
    }
}

// ========== Pools ==========

#[test]
fn test_create_pool_seeds_paid_leader() {
    let mut store = demo_store();
    let pool = store.create_pool(pool_spec(4, 85.0)).unwrap();

    assert_eq!(pool.status, PoolStatus::Abierto);
    assert_eq!(pool.current_members, 1);
    assert_eq!(pool.members.len(), 1);
    assert_eq!(pool.members[0].name, "Juan D.");
    assert!(pool.members[0].paid);
    assert!((pool.total_price - 340.0).abs() < 1e-9);
    assert!(store.state().pool(pool.id).is_some());
}

#[test]
fn test_join_pool_keeps_member_count_invariant() {
    let mut store = demo_store();
    let pool = store.create_pool(pool_spec(4, 85.0)).unwrap();

    for _ in 0..3 {
        let joined = store.join_pool(pool.id).unwrap();
        assert_eq!(joined.current_members as usize, joined.members.len());
        assert!(joined.current_members <= joined.target_members);
    }
}

#[test]
fn test_join_fills_pool_and_closes_deadline() {
    let mut store = demo_store();
    // Seeded pool 1 is one member short of its target of 4.
    let joined = store.join_pool(1).unwrap();

    assert_eq!(joined.status, PoolStatus::Lleno);
    assert_eq!(joined.current_members, 4);
    assert_eq!(joined.deadline, DEADLINE_CLOSED);
    assert!(joined.members.iter().any(|m| m.name == "Juan D." && !m.paid));
}

#[test]
fn test_join_full_pool_is_rejected_and_leaves_pool_unchanged() {
    let mut store = demo_store();
    store.join_pool(1).unwrap();
    let before = store.state().pool(1).unwrap().clone();

    let err = store.join_pool(1).unwrap_err();
    assert!(matches!(err, StoreError::PoolFull(1)));

    let after = store.state().pool(1).unwrap();
    assert_eq!(after.members, before.members);
    assert_eq!(after.status, before.status);
    assert_eq!(after.current_members, before.current_members);
}

#[test]
fn test_join_unknown_pool() {
    let mut store = demo_store();
    let err = store.join_pool(999).unwrap_err();
    assert!(matches!(err, StoreError::PoolNotFound(999)));
}

#[test]
fn test_duplicate_join_allowed_by_default() {
    let mut store = demo_store();
    let pool = store.create_pool(pool_spec(4, 85.0)).unwrap();

    store.join_pool(pool.id).unwrap();
    let joined = store.join_pool(pool.id).unwrap();

    let juans = joined
        .members
        .iter()
        .filter(|m| m.name == "Juan D.")
        .count();
    // the leader plus two joined spots
    assert_eq!(juans, 3);
}

#[test]
fn test_duplicate_join_rejected_under_reject_policy() {
    init_tracing();
    let config = StoreConfig::demo().with_duplicate_joins(DuplicateJoins::Reject);
    let mut store = AppStore::open(config).unwrap();
    let pool = store.create_pool(pool_spec(4, 85.0)).unwrap();

    // The leader is already Juan D., so even the first join is a dup.
    let err = store.join_pool(pool.id).unwrap_err();
    assert!(matches!(err, StoreError::AlreadyMember(_)));
    assert_eq!(store.state().pool(pool.id).unwrap().current_members, 1);
}

#[test]
fn test_pay_pool_full_settles_every_member_with_qr() {
    let mut store = demo_store();
    let paid = store.pay_pool(1, PaymentMode::Full).unwrap();

    assert_eq!(paid.status, PoolStatus::Pagado);
    assert!(paid.all_members_paid());

    let codes = paid.qr_codes.as_ref().unwrap();
    assert_eq!(codes.len(), paid.members.len());
    for member in &paid.members {
        assert!(!codes[&member.name].is_empty());
    }
}

#[test]
fn test_pay_pool_personal_touches_only_current_user() {
    let mut store = demo_store();
    store.join_pool(1).unwrap();
    let before = store.state().pool(1).unwrap().clone();

    let paid = store.pay_pool(1, PaymentMode::Personal).unwrap();

    for (was, is) in before.members.iter().zip(&paid.members) {
        if is.name == "Juan D." {
            assert!(is.paid);
        } else {
            assert_eq!(was.paid, is.paid);
        }
    }
    // Ana L. joined unpaid in the seed, so the pool is not settled yet
    assert_eq!(paid.status, PoolStatus::Lleno);

    let codes = paid.qr_codes.as_ref().unwrap();
    assert_eq!(codes.len(), 1);
    assert!(codes.contains_key("Juan D."));
}

#[test]
fn test_pay_pool_personal_settles_pool_when_last_member_pays() {
    let mut store = demo_store();
    let pool = store.create_pool(pool_spec(2, 45.0)).unwrap();
    store.join_pool(pool.id).unwrap();

    // Both member entries are Juan D., so the personal payment covers
    // every slot and the pool settles.
    let paid = store.pay_pool(pool.id, PaymentMode::Personal).unwrap();
    assert!(paid.all_members_paid());
    assert_eq!(paid.status, PoolStatus::Pagado);
}

#[test]
fn test_group_purchase_scenario() {
    let mut store = demo_store();
    let pool = store.create_pool(pool_spec(4, 85.0)).unwrap();
    assert!((pool.total_price - 340.0).abs() < 1e-9);

    for _ in 0..3 {
        store.join_pool(pool.id).unwrap();
    }
    assert_eq!(store.state().pool(pool.id).unwrap().status, PoolStatus::Lleno);

    let paid = store.pay_pool(pool.id, PaymentMode::Full).unwrap();
    assert_eq!(paid.status, PoolStatus::Pagado);
    assert_eq!(paid.qr_codes.unwrap().len(), 4);
}

#[test]
fn test_pending_payment_is_recorded_and_cleared() {
    let mut store = demo_store();
    store
        .mark_pool_payment_pending(1, PaymentMode::Personal)
        .unwrap();
    assert_eq!(store.state().pool_payment_pending.len(), 1);
    assert_eq!(store.state().pool_payment_pending[0].pool_id, 1);

    // re-marking replaces rather than stacking
    store
        .mark_pool_payment_pending(1, PaymentMode::Full)
        .unwrap();
    assert_eq!(store.state().pool_payment_pending.len(), 1);
    assert_eq!(
        store.state().pool_payment_pending[0].mode,
        PaymentMode::Full
    );

    store.pay_pool(1, PaymentMode::Full).unwrap();
    assert!(store.state().pool_payment_pending.is_empty());
}

#[tokio::test]
async fn test_simulated_payment_lands_after_delay() {
    let mut store = demo_store();
    let paid = store
        .pay_pool_simulated(1, PaymentMode::Full, Duration::from_millis(10))
        .await
        .unwrap();
    assert_eq!(paid.status, PoolStatus::Pagado);
    assert!(store.state().pool_payment_pending.is_empty());
}

#[test]
fn test_set_pool_status_reaches_finalizado() {
    let mut store = demo_store();
    store.pay_pool(1, PaymentMode::Full).unwrap();
    let pool = store.set_pool_status(1, PoolStatus::Finalizado).unwrap();
    assert_eq!(pool.status, PoolStatus::Finalizado);
}

// ========== Bookings ==========

#[test]
fn test_create_booking_mints_qr_token() {
    let mut store = demo_store();
    let spec = booking_spec(&store);
    let booking = store.create_booking(spec).unwrap();

    assert!(booking.qr_code.starts_with("PGO-"));
    assert_eq!(booking.status, BookingStatus::Confirmado);
    assert_eq!(store.state().bookings.len(), 1);
}

#[test]
fn test_booking_qr_tokens_are_unique_within_a_session() {
    let mut store = demo_store();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..50 {
        let booking = store.create_booking(booking_spec(&store)).unwrap();
        assert!(seen.insert(booking.qr_code));
    }
}

#[test]
fn test_booking_embeds_a_service_snapshot() {
    let mut store = demo_store();
    let booking = store.create_booking(booking_spec(&store)).unwrap();

    // a later rating does not rewrite booking history
    store.rate_service(1, 1).unwrap();
    let held = store.state().booking(booking.id).unwrap();
    assert!((held.service.rating - 4.9).abs() < 1e-9);
}

// ========== Session ==========

#[test]
fn test_login_accepts_only_demo_credentials() {
    let mut store = demo_store();

    let err = store.login("demo", "wrong").unwrap_err();
    assert!(matches!(err, StoreError::InvalidCredentials));
    assert!(!store.state().is_authenticated);

    store.login("demo", "1234").unwrap();
    assert!(store.state().is_authenticated);
}

#[test]
fn test_logout_keeps_collections() {
    let mut store = demo_store();
    store.login("demo", "1234").unwrap();
    store.complete_onboarding().unwrap();
    store.create_booking(booking_spec(&store)).unwrap();

    store.logout().unwrap();
    assert!(!store.state().is_authenticated);
    assert!(!store.state().has_completed_onboarding);
    assert_eq!(store.state().bookings.len(), 1);
}

#[test]
fn test_upgrade_plan() {
    let mut store = demo_store();
    store.upgrade_plan(PlanTier::Platino).unwrap();
    assert_eq!(store.state().user_plan, PlanTier::Platino);
}

#[test]
fn test_new_payment_method_becomes_the_only_default() {
    let mut store = demo_store();
    let added = store
        .add_payment_method(PaymentMethodSpec {
            kind: "Amex".to_string(),
            last4: "0005".to_string(),
        })
        .unwrap();

    assert!(added.is_default);
    let defaults = store
        .state()
        .payment_methods
        .iter()
        .filter(|m| m.is_default)
        .count();
    assert_eq!(defaults, 1);
}

#[test]
fn test_update_notifications_merges_partially() {
    let mut store = demo_store();
    store
        .update_notifications(NotificationsPatch {
            push: Some(false),
            ..NotificationsPatch::default()
        })
        .unwrap();
    assert!(store.state().notifications.email);
    assert!(!store.state().notifications.push);
}

// ========== Ratings and favorites ==========

#[test]
fn test_rating_aggregate_tracks_mean_and_count() {
    let mut store = demo_store();

    let summary = store.rate_service(1, 5).unwrap();
    assert!((summary.rating - 5.0).abs() < 1e-9);
    assert_eq!(summary.reviews, 1);

    store.rate_service(1, 4).unwrap();
    let summary = store.rate_service(1, 4).unwrap();
    // mean of 5, 4, 4 rounded to one decimal
    assert!((summary.rating - 4.3).abs() < 1e-9);
    assert_eq!(summary.reviews, 3);

    let service = store.state().service(1).unwrap();
    assert_eq!(service.reviews as usize, service.ratings.len());
}

#[test]
fn test_rate_service_rejects_out_of_range_stars() {
    let mut store = demo_store();
    assert!(matches!(
        store.rate_service(1, 0).unwrap_err(),
        StoreError::InvalidStars(0)
    ));
    assert!(matches!(
        store.rate_service(1, 6).unwrap_err(),
        StoreError::InvalidStars(6)
    ));
    assert!(store.state().service(1).unwrap().ratings.is_empty());
}

#[test]
fn test_rate_unknown_service() {
    let mut store = demo_store();
    assert!(matches!(
        store.rate_service(999, 5).unwrap_err(),
        StoreError::ServiceNotFound(999)
    ));
}

#[test]
fn test_toggle_favorite_preference_roundtrip() {
    let mut store = demo_store();

    let toggle = store.toggle_favorite_preference(3).unwrap();
    assert_eq!(toggle, FavoriteToggle::Added);
    assert_eq!(
        store.state().user_favorites[0].preference,
        PreferenceLevel::MeGusta
    );

    let toggle = store.toggle_favorite_preference(3).unwrap();
    assert_eq!(toggle, FavoriteToggle::Removed);
    assert!(store.state().user_favorites.is_empty());
}

#[test]
fn test_set_favorite_preference_requires_existing_record() {
    let mut store = demo_store();
    assert!(matches!(
        store
            .set_favorite_preference(3, PreferenceLevel::MeGustaMas)
            .unwrap_err(),
        StoreError::FavoriteNotFound(3)
    ));

    store.toggle_favorite_preference(3).unwrap();
    store
        .set_favorite_preference(3, PreferenceLevel::MeGustaMas)
        .unwrap();
    assert_eq!(
        store.state().user_favorites[0].preference,
        PreferenceLevel::MeGustaMas
    );
}

#[test]
fn test_at_most_one_trip_favorite() {
    let mut store = demo_store();
    for id in [1, 2, 3] {
        store.toggle_favorite_preference(id).unwrap();
    }

    store.select_trip_favorite(1).unwrap();
    store.select_trip_favorite(3).unwrap();
    store.select_trip_favorite(2).unwrap();

    let selected: Vec<_> = store
        .state()
        .user_favorites
        .iter()
        .filter(|f| f.selected_for_trip)
        .collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].service_id, 2);
}

#[test]
fn test_select_trip_favorite_requires_existing_record() {
    let mut store = demo_store();
    assert!(matches!(
        store.select_trip_favorite(5).unwrap_err(),
        StoreError::FavoriteNotFound(5)
    ));
}

#[test]
fn test_plain_favorite_toggle() {
    let mut store = demo_store();
    assert_eq!(store.toggle_favorite(2).unwrap(), FavoriteToggle::Added);
    assert!(store.state().is_favorite(2));
    assert_eq!(store.toggle_favorite(2).unwrap(), FavoriteToggle::Removed);
    assert!(!store.state().is_favorite(2));
}

// ========== Recommendations ==========

#[test]
fn test_add_recommendation_defaults_name_and_link() {
    let mut store = demo_store();
    let rec = store
        .add_recommendation(RecommendationSpec {
            name: None,
            link_type: LinkType::Oferta,
            service_id: 1,
        })
        .unwrap();

    assert_eq!(rec.name, "Hotel Vista al Volcán - Oferta");
    assert!(rec.id.starts_with("rec-"));
    assert!(rec.link.starts_with("https://palenquego.app/r/link-1-"));
    assert_eq!(rec.stats.clicks, 0);
    assert_eq!(rec.stats.payment_status, PaymentStatus::Pendiente);
}

#[test]
fn test_referral_stats_accrue() {
    let mut store = demo_store();
    let rec = store
        .add_recommendation(RecommendationSpec {
            name: Some("Promo verano".to_string()),
            link_type: LinkType::Descuento,
            service_id: 2,
        })
        .unwrap();

    store.record_referral_click(&rec.id).unwrap();
    store.record_referral_click(&rec.id).unwrap();
    store.record_referral_purchase(&rec.id, 15.0).unwrap();

    let stats = &store.state().recommendation(&rec.id).unwrap().stats;
    assert_eq!(stats.clicks, 3);
    assert_eq!(stats.purchases, 1);
    assert!((stats.total_earned - 15.0).abs() < 1e-9);
}

#[test]
fn test_mark_recommendation_paid_is_idempotent() {
    let mut store = demo_store();
    let rec = store
        .add_recommendation(RecommendationSpec {
            name: None,
            link_type: LinkType::Feriado,
            service_id: 4,
        })
        .unwrap();

    store.mark_recommendation_paid(&rec.id).unwrap();
    let first = store
        .state()
        .recommendation(&rec.id)
        .unwrap()
        .stats
        .last_payment_date;
    assert!(first.is_some());

    store.mark_recommendation_paid(&rec.id).unwrap();
    let second = store
        .state()
        .recommendation(&rec.id)
        .unwrap()
        .stats
        .last_payment_date;
    assert_eq!(first, second);
}

#[test]
fn test_recommendation_operations_on_unknown_id() {
    let mut store = demo_store();
    assert!(matches!(
        store.record_referral_click("rec-missing").unwrap_err(),
        StoreError::RecommendationNotFound(_)
    ));
    assert!(matches!(
        store.mark_recommendation_paid("rec-missing").unwrap_err(),
        StoreError::RecommendationNotFound(_)
    ));
}

// ========== Persistence ==========

#[test]
fn test_state_survives_reopen() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app-storage.json");
    let config = StoreConfig::demo().with_storage_path(&path);

    let mut store = AppStore::open(config.clone()).unwrap();
    store.login("demo", "1234").unwrap();
    let booking = store.create_booking(booking_spec(&store)).unwrap();
    store.join_pool(1).unwrap();
    store.close().unwrap();

    let reopened = AppStore::open(config).unwrap();
    assert!(reopened.state().is_authenticated);
    assert_eq!(reopened.state().bookings.len(), 1);
    assert_eq!(
        reopened.state().booking(booking.id).unwrap().qr_code,
        booking.qr_code
    );
    assert_eq!(reopened.state().pool(1).unwrap().status, PoolStatus::Lleno);
}

#[test]
fn test_unknown_schema_version_resets_to_seed() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app-storage.json");
    std::fs::write(&path, r#"{"schema_version": 99, "state": {}}"#).unwrap();

    let store = AppStore::open(StoreConfig::demo().with_storage_path(&path)).unwrap();
    assert_eq!(store.state().services.len(), 6);
    assert!(!store.state().is_authenticated);
}

#[test]
fn test_snapshot_write_failure_keeps_in_memory_change() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    // the state file's parent is a regular file, so writes cannot land
    let path = blocker.join("app-storage.json");
    let mut store = AppStore::open(StoreConfig::demo().with_storage_path(&path)).unwrap();

    let err = store.create_pool(pool_spec(4, 85.0)).unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));
    // the pool landed in memory even though the snapshot did not
    assert_eq!(store.state().pools.len(), 3);
}

#[test]
fn test_failed_operation_is_not_persisted() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app-storage.json");
    let config = StoreConfig::demo().with_storage_path(&path);

    let mut store = AppStore::open(config.clone()).unwrap();
    store.join_pool(1).unwrap();
    store.join_pool(1).unwrap_err();
    store.close().unwrap();

    let reopened = AppStore::open(config).unwrap();
    assert_eq!(reopened.state().pool(1).unwrap().current_members, 4);
}

// ========== Catalog (demo mode) ==========

#[tokio::test]
async fn test_demo_mode_fetches_skip_the_network() {
    let mut store = demo_store();
    let before = store.state().services.clone();

    let outcome = store.fetch_catalog(Some("surf")).await.unwrap();
    assert_eq!(outcome, FetchOutcome::SkippedDemo);
    assert_eq!(store.state().services, before);

    let outcome = store.fetch_businesses().await.unwrap();
    assert_eq!(outcome, FetchOutcome::SkippedDemo);
    assert!(!store.state().is_loading);
}

#[tokio::test]
async fn test_live_fetch_failure_keeps_held_data() {
    // A port nothing listens on: the request fails fast and the seeded
    // collections must survive.
    init_tracing();
    let config = StoreConfig::new()
        .with_api_base("http://127.0.0.1:9/api/v1")
        .with_timeout(1);
    let mut store = AppStore::open(config).unwrap();
    let before = store.state().services.clone();

    let err = store.fetch_catalog(None).await.unwrap_err();
    assert!(matches!(err, StoreError::Fetch(_)));
    assert_eq!(store.state().services, before);
    assert!(!store.state().is_loading);
}

// ========== Share links ==========

#[test]
fn test_pool_invite_for_held_pool() {
    let store = demo_store();
    let invite = store.pool_invite(1).unwrap();
    assert_eq!(invite.link, "https://palenquego.app/pool/1");
    assert!(invite.whatsapp().starts_with("https://wa.me/?text="));
}
