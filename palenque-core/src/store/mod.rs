//! AppStore - Application state store
//!
//! Single owner of the client-side application state. Every mutation
//! goes through a method here, and every successful mutation is
//! snapshotted to the state vault before it returns:
//!
//! ```text
//! operation(args)
//!     ├─ 1. Validate against current state (Err leaves state as-is)
//!     ├─ 2. Apply the change in memory
//!     ├─ 3. Persist the snapshot
//!     └─ 4. Return the typed outcome
//! ```
//!
//! Only domain errors (step 1) guarantee an untouched state. A failed
//! snapshot write (step 3) surfaces as `Err` with the in-memory change
//! already applied; it just won't survive the process.
//!
//! Catalog fetches are the only async paths; everything else is
//! synchronous in-memory work plus one file write.

mod state;
pub use state::AppState;

use std::collections::HashMap;
use std::time::Duration;

use shared::models::{
    Booking, BookingSpec, NotificationsPatch, PaymentMethod, PaymentMethodSpec, PaymentMode,
    PaymentStatus, PendingPoolPayment, PlanTier, Pool, PoolMember, PoolSpec, PoolStatus,
    PreferenceLevel, Rating, Recommendation, RecommendationSpec, RecommendationStats, StatsPatch,
    UserFavorite, DEADLINE_CLOSED,
};
use shared::util;

use crate::catalog::CatalogClient;
use crate::config::{DataSource, DuplicateJoins, StoreConfig};
use crate::error::{StoreError, StoreResult};
use crate::persistence::StateVault;
use crate::share::PoolInvite;

/// Demo account credentials accepted by [`AppStore::login`].
pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "1234";

/// Commission credited per referral purchase, in USD.
pub const DEFAULT_REFERRAL_COMMISSION: f64 = 15.0;

/// Delay the simulated payment gateway takes to "process" a pool
/// payment.
pub const SIMULATED_PAYMENT_DELAY: Duration = Duration::from_millis(2500);

/// What a catalog fetch ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Fresh data replaced the held collection.
    Applied { count: usize },
    /// Demo mode, no request was made.
    SkippedDemo,
}

/// Which way a favorite toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// Aggregate rating after a new star rating was recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub service_id: i64,
    /// Mean stars, rounded to one decimal.
    pub rating: f64,
    pub reviews: u32,
}

/// Application state store.
///
/// The `epoch` is a unique id generated per store instance; it tags
/// log lines so interleaved runs against the same state file can be
/// told apart.
pub struct AppStore {
    config: StoreConfig,
    vault: StateVault,
    catalog: CatalogClient,
    state: AppState,
    /// Store instance epoch
    epoch: String,
    /// Highest id handed out by this instance, for monotonicity
    last_id: i64,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("epoch", &self.epoch)
            .field("services", &self.state.services.len())
            .field("pools", &self.state.pools.len())
            .field("bookings", &self.state.bookings.len())
            .finish()
    }
}

impl AppStore {
    /// Open the store: load the last snapshot if the vault has one and
    /// its schema is current, otherwise start from seed data.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let vault = match &config.storage_path {
            Some(path) => StateVault::at(path),
            None => StateVault::ephemeral(),
        };

        let mut state = match vault.load()? {
            Some(state) => state,
            None => AppState::seeded(),
        };
        // a snapshot taken mid-fetch would replay as a stuck spinner
        state.is_loading = false;

        let catalog = CatalogClient::new(&config);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            epoch = %epoch,
            data_source = ?config.data_source,
            ephemeral = vault.is_ephemeral(),
            "AppStore opened"
        );

        Ok(Self {
            config,
            vault,
            catalog,
            state,
            epoch,
            last_id: 0,
        })
    }

    /// Current state, read-only. Mutations go through the operations.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Store instance epoch (unique per open).
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Persist the current state and drop the store.
    pub fn close(self) -> StoreResult<()> {
        self.vault.save(&self.state)?;
        tracing::info!(epoch = %self.epoch, "AppStore closed");
        Ok(())
    }

    // ========== Catalog ==========

    /// Refresh services from the backend. In demo mode this is a
    /// no-op; on failure the previously held services are kept and the
    /// error is returned.
    pub async fn fetch_catalog(&mut self, query: Option<&str>) -> StoreResult<FetchOutcome> {
        if self.config.data_source == DataSource::Demo {
            tracing::debug!("Demo mode, catalog fetch skipped");
            return Ok(FetchOutcome::SkippedDemo);
        }

        self.state.is_loading = true;
        let fetched = self.catalog.fetch_services(query).await;
        self.state.is_loading = false;

        match fetched {
            Ok(services) => {
                let count = services.len();
                self.state.services = services;
                self.persist()?;
                tracing::info!(count, "Catalog refreshed");
                Ok(FetchOutcome::Applied { count })
            }
            Err(err) => {
                tracing::warn!(error = %err, "Catalog fetch failed, keeping held services");
                Err(err.into())
            }
        }
    }

    /// Refresh business profiles from the backend. Same demo-mode and
    /// failure behavior as [`fetch_catalog`](Self::fetch_catalog),
    /// except `is_loading` stays untouched: only catalog fetches drive
    /// the frontend spinner.
    pub async fn fetch_businesses(&mut self) -> StoreResult<FetchOutcome> {
        if self.config.data_source == DataSource::Demo {
            tracing::debug!("Demo mode, businesses fetch skipped");
            return Ok(FetchOutcome::SkippedDemo);
        }

        match self.catalog.fetch_businesses().await {
            Ok(businesses) => {
                let count = businesses.len();
                self.state.businesses = businesses;
                self.persist()?;
                tracing::info!(count, "Businesses refreshed");
                Ok(FetchOutcome::Applied { count })
            }
            Err(err) => {
                tracing::warn!(error = %err, "Businesses fetch failed, keeping held profiles");
                Err(err.into())
            }
        }
    }

    // ========== Pools ==========

    /// Open a new pool led by `spec.leader`, who starts as the only
    /// member and counts as already paid.
    ///
    /// Caller contract: `spec.target_members` is at least 2 (the
    /// leader plus one). The picker screens enforce this; the store
    /// does not re-check it.
    pub fn create_pool(&mut self, spec: PoolSpec) -> StoreResult<Pool> {
        let id = self.next_id();
        let pool = Pool {
            id,
            service_name: spec.service_name,
            service_id: spec.service_id,
            location: spec.location,
            image: spec.image,
            current_members: 1,
            target_members: spec.target_members,
            total_price: spec.total_price,
            price_per_member: spec.price_per_member,
            deadline: spec.deadline,
            status: PoolStatus::Abierto,
            members: vec![PoolMember {
                name: spec.leader.name.clone(),
                avatar: spec.leader.avatar.clone(),
                paid: true,
            }],
            leader: spec.leader,
            payments: Vec::new(),
            qr_codes: None,
            created_at: util::now_millis(),
        };

        self.state.pools.push(pool.clone());
        self.persist()?;
        tracing::debug!(pool_id = id, target = pool.target_members, "Pool created");
        Ok(pool)
    }

    /// Join the current user into a pool. Filling the last spot flips
    /// the pool to LLENO and closes its deadline.
    pub fn join_pool(&mut self, pool_id: i64) -> StoreResult<Pool> {
        let user = self.state.current_user.clone();
        let reject_duplicates = self.config.duplicate_joins == DuplicateJoins::Reject;

        let pool = self
            .state
            .pool_mut(pool_id)
            .ok_or(StoreError::PoolNotFound(pool_id))?;

        if pool.is_full() {
            return Err(StoreError::PoolFull(pool_id));
        }
        if reject_duplicates && pool.members.iter().any(|m| m.name == user.name) {
            return Err(StoreError::AlreadyMember(pool_id));
        }

        pool.members.push(PoolMember {
            name: user.name,
            avatar: user.avatar,
            paid: false,
        });
        pool.current_members += 1;
        if pool.is_full() {
            pool.status = PoolStatus::Lleno;
            pool.deadline = DEADLINE_CLOSED.to_string();
        }

        let snapshot = pool.clone();
        self.persist()?;
        tracing::debug!(
            pool_id,
            members = snapshot.current_members,
            status = snapshot.status.as_str(),
            "Joined pool"
        );
        Ok(snapshot)
    }

    /// Record that the user entered the payment flow for a pool but
    /// has not completed it. Completing the payment clears the entry.
    pub fn mark_pool_payment_pending(
        &mut self,
        pool_id: i64,
        mode: PaymentMode,
    ) -> StoreResult<()> {
        if self.state.pool(pool_id).is_none() {
            return Err(StoreError::PoolNotFound(pool_id));
        }

        self.state
            .pool_payment_pending
            .retain(|p| p.pool_id != pool_id);
        self.state
            .pool_payment_pending
            .push(PendingPoolPayment { pool_id, mode });
        self.persist()?;
        Ok(())
    }

    /// Pay a pool.
    ///
    /// FULL settles every member and issues one QR token per member.
    /// PERSONAL settles only the current user, adds their token, and
    /// flips the pool to PAGADO exactly when every member has paid.
    /// Either way the pool's pending-payment entry is cleared.
    pub fn pay_pool(&mut self, pool_id: i64, mode: PaymentMode) -> StoreResult<Pool> {
        let user_name = self.state.current_user.name.clone();
        let now = util::now_millis();

        let pool = self
            .state
            .pool_mut(pool_id)
            .ok_or(StoreError::PoolNotFound(pool_id))?;

        match mode {
            PaymentMode::Full => {
                for member in &mut pool.members {
                    member.paid = true;
                }
                let codes: HashMap<String, String> = pool
                    .members
                    .iter()
                    .enumerate()
                    .map(|(idx, m)| (m.name.clone(), format!("QR-{pool_id}-{idx}-{now}")))
                    .collect();
                pool.qr_codes = Some(codes);
                pool.status = PoolStatus::Pagado;
            }
            PaymentMode::Personal => {
                // every entry under the user's name: duplicate joins
                // put the same person in more than once
                for member in pool.members.iter_mut().filter(|m| m.name == user_name) {
                    member.paid = true;
                }
                pool.qr_codes
                    .get_or_insert_with(HashMap::new)
                    .insert(user_name.clone(), format!("QR-{pool_id}-user-{now}"));
                if pool.all_members_paid() {
                    pool.status = PoolStatus::Pagado;
                }
            }
        }

        let snapshot = pool.clone();
        self.state
            .pool_payment_pending
            .retain(|p| p.pool_id != pool_id);
        self.persist()?;
        tracing::info!(
            pool_id,
            mode = ?mode,
            status = snapshot.status.as_str(),
            "Pool payment recorded"
        );
        Ok(snapshot)
    }

    /// [`pay_pool`](Self::pay_pool) behind the simulated payment
    /// gateway: the payment is marked pending, the gateway "processes"
    /// for `delay`, then the payment lands.
    pub async fn pay_pool_simulated(
        &mut self,
        pool_id: i64,
        mode: PaymentMode,
        delay: Duration,
    ) -> StoreResult<Pool> {
        self.mark_pool_payment_pending(pool_id, mode)?;
        tokio::time::sleep(delay).await;
        self.pay_pool(pool_id, mode)
    }

    /// Administrative status override; the only path to FINALIZADO.
    pub fn set_pool_status(&mut self, pool_id: i64, status: PoolStatus) -> StoreResult<Pool> {
        let pool = self
            .state
            .pool_mut(pool_id)
            .ok_or(StoreError::PoolNotFound(pool_id))?;
        pool.status = status;

        let snapshot = pool.clone();
        self.persist()?;
        Ok(snapshot)
    }

    /// Shareable invite for a pool, composed from the configured share
    /// base.
    pub fn pool_invite(&self, pool_id: i64) -> StoreResult<PoolInvite> {
        let pool = self
            .state
            .pool(pool_id)
            .ok_or(StoreError::PoolNotFound(pool_id))?;
        Ok(PoolInvite::new(&self.config.share_base, pool))
    }

    // ========== Bookings ==========

    /// Record a booking and mint its check-in QR token from the new
    /// booking id.
    pub fn create_booking(&mut self, spec: BookingSpec) -> StoreResult<Booking> {
        let id = self.next_id();
        let booking = Booking {
            id,
            qr_code: format!("PGO-{}", util::to_base36(id)),
            service: spec.service,
            date: spec.date,
            time: spec.time,
            guests: spec.guests,
            extras: spec.extras,
            total_price: spec.total_price,
            status: spec.status,
            pool_id: spec.pool_id,
        };

        self.state.bookings.push(booking.clone());
        self.persist()?;
        tracing::debug!(
            booking_id = id,
            qr = %booking.qr_code,
            "Booking created"
        );
        Ok(booking)
    }

    // ========== Session ==========

    /// Demo login. Only the fixed demo credentials are accepted.
    pub fn login(&mut self, username: &str, password: &str) -> StoreResult<()> {
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            tracing::debug!(username, "Login rejected");
            return Err(StoreError::InvalidCredentials);
        }

        self.state.is_authenticated = true;
        self.persist()?;
        tracing::info!(username, "Login accepted");
        Ok(())
    }

    pub fn complete_onboarding(&mut self) -> StoreResult<()> {
        self.state.has_completed_onboarding = true;
        self.persist()?;
        Ok(())
    }

    /// Sign out. Onboarding replays on the next login.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.state.is_authenticated = false;
        self.state.has_completed_onboarding = false;
        self.persist()?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub fn upgrade_plan(&mut self, tier: PlanTier) -> StoreResult<()> {
        self.state.user_plan = tier;
        self.persist()?;
        tracing::info!(plan = tier.label(), "Plan changed");
        Ok(())
    }

    /// Store a new card and make it the default, demoting every other
    /// method.
    pub fn add_payment_method(&mut self, spec: PaymentMethodSpec) -> StoreResult<PaymentMethod> {
        for method in &mut self.state.payment_methods {
            method.is_default = false;
        }
        let method = PaymentMethod {
            id: self.next_id().to_string(),
            kind: spec.kind,
            last4: spec.last4,
            is_default: true,
        };
        self.state.payment_methods.push(method.clone());
        self.persist()?;
        Ok(method)
    }

    /// Merge notification switches; unset channels stay as they are.
    pub fn update_notifications(&mut self, patch: NotificationsPatch) -> StoreResult<()> {
        self.state.notifications.apply(patch);
        self.persist()?;
        Ok(())
    }

    // ========== Ratings and favorites ==========

    /// Append a star rating by the current user and refresh the
    /// service's aggregate (mean rounded to one decimal) and review
    /// count.
    pub fn rate_service(&mut self, service_id: i64, stars: u8) -> StoreResult<RatingSummary> {
        if !(1..=5).contains(&stars) {
            return Err(StoreError::InvalidStars(stars));
        }

        let user_name = self.state.current_user.name.clone();
        let now = util::now_millis();

        let service = self
            .state
            .service_mut(service_id)
            .ok_or(StoreError::ServiceNotFound(service_id))?;

        service.ratings.push(Rating {
            user_id: format!("user-{now}"),
            user_name,
            stars,
            date: now,
        });
        let total: u32 = service.ratings.iter().map(|r| r.stars as u32).sum();
        service.rating = util::round1(total as f64 / service.ratings.len() as f64);
        service.reviews = service.ratings.len() as u32;

        let summary = RatingSummary {
            service_id,
            rating: service.rating,
            reviews: service.reviews,
        };
        self.persist()?;
        tracing::debug!(
            service_id,
            stars,
            rating = summary.rating,
            reviews = summary.reviews,
            "Service rated"
        );
        Ok(summary)
    }

    /// Flip a service in or out of the plain favorites list.
    pub fn toggle_favorite(&mut self, service_id: i64) -> StoreResult<FavoriteToggle> {
        let toggle = match self.state.favorites.iter().position(|&f| f == service_id) {
            Some(pos) => {
                self.state.favorites.remove(pos);
                FavoriteToggle::Removed
            }
            None => {
                self.state.favorites.push(service_id);
                FavoriteToggle::Added
            }
        };
        self.persist()?;
        Ok(toggle)
    }

    /// Flip a preference-favorite: absent creates one at ME_GUSTA, not
    /// selected for the trip; present removes it entirely.
    pub fn toggle_favorite_preference(&mut self, service_id: i64) -> StoreResult<FavoriteToggle> {
        let toggle = match self
            .state
            .user_favorites
            .iter()
            .position(|f| f.service_id == service_id)
        {
            Some(pos) => {
                self.state.user_favorites.remove(pos);
                FavoriteToggle::Removed
            }
            None => {
                self.state.user_favorites.push(UserFavorite {
                    service_id,
                    preference: PreferenceLevel::MeGusta,
                    selected_for_trip: false,
                    added_at: util::now_millis(),
                });
                FavoriteToggle::Added
            }
        };
        self.persist()?;
        Ok(toggle)
    }

    /// Set the preference level on an existing favorite.
    pub fn set_favorite_preference(
        &mut self,
        service_id: i64,
        preference: PreferenceLevel,
    ) -> StoreResult<()> {
        let favorite = self
            .state
            .user_favorites
            .iter_mut()
            .find(|f| f.service_id == service_id)
            .ok_or(StoreError::FavoriteNotFound(service_id))?;
        favorite.preference = preference;
        self.persist()?;
        Ok(())
    }

    /// Make this favorite the trip selection, clearing the flag on
    /// every other favorite.
    pub fn select_trip_favorite(&mut self, service_id: i64) -> StoreResult<()> {
        if !self
            .state
            .user_favorites
            .iter()
            .any(|f| f.service_id == service_id)
        {
            return Err(StoreError::FavoriteNotFound(service_id));
        }

        for favorite in &mut self.state.user_favorites {
            favorite.selected_for_trip = favorite.service_id == service_id;
        }
        self.persist()?;
        Ok(())
    }

    // ========== Recommendations ==========

    /// Create a referral link for a service. The link lands under the
    /// configured share base; a missing name defaults to
    /// "{service} - {type label}".
    pub fn add_recommendation(&mut self, spec: RecommendationSpec) -> StoreResult<Recommendation> {
        let service = self
            .state
            .service(spec.service_id)
            .ok_or(StoreError::ServiceNotFound(spec.service_id))?;
        let default_name = format!("{} - {}", service.name, spec.link_type.label());

        let seq = self.next_id();
        let link_id = format!("link-{}-{}", spec.service_id, seq);
        let recommendation = Recommendation {
            id: format!("rec-{seq}"),
            name: spec.name.unwrap_or(default_name),
            link: format!(
                "{}/r/{}",
                self.config.share_base.trim_end_matches('/'),
                link_id
            ),
            link_type: spec.link_type,
            service_id: spec.service_id,
            created_at: util::now_millis(),
            stats: RecommendationStats::default(),
        };

        self.state.recommendations.push(recommendation.clone());
        self.persist()?;
        tracing::debug!(id = %recommendation.id, service_id = spec.service_id, "Recommendation created");
        Ok(recommendation)
    }

    /// Merge a partial stats update into a recommendation.
    pub fn update_recommendation_stats(&mut self, id: &str, patch: StatsPatch) -> StoreResult<()> {
        let recommendation = self
            .state
            .recommendation_mut(id)
            .ok_or_else(|| StoreError::RecommendationNotFound(id.to_string()))?;
        recommendation.stats.apply(patch);
        self.persist()?;
        Ok(())
    }

    /// Count a click on a referral link.
    pub fn record_referral_click(&mut self, id: &str) -> StoreResult<()> {
        let recommendation = self
            .state
            .recommendation_mut(id)
            .ok_or_else(|| StoreError::RecommendationNotFound(id.to_string()))?;
        recommendation.stats.clicks += 1;
        self.persist()?;
        Ok(())
    }

    /// Count a purchase through a referral link: one purchase, one
    /// click, and the commission credited to earnings.
    pub fn record_referral_purchase(&mut self, id: &str, commission: f64) -> StoreResult<()> {
        let recommendation = self
            .state
            .recommendation_mut(id)
            .ok_or_else(|| StoreError::RecommendationNotFound(id.to_string()))?;
        recommendation.stats.purchases += 1;
        recommendation.stats.clicks += 1;
        recommendation.stats.total_earned += commission;
        self.persist()?;
        tracing::debug!(id, commission, "Referral purchase recorded");
        Ok(())
    }

    /// Mark a recommendation's earnings as paid out. Idempotent: a
    /// second call leaves the payout date from the first.
    pub fn mark_recommendation_paid(&mut self, id: &str) -> StoreResult<()> {
        let recommendation = self
            .state
            .recommendation_mut(id)
            .ok_or_else(|| StoreError::RecommendationNotFound(id.to_string()))?;

        if recommendation.stats.payment_status == PaymentStatus::Pagado {
            return Ok(());
        }
        recommendation.stats.payment_status = PaymentStatus::Pagado;
        recommendation.stats.last_payment_date = Some(util::now_millis());
        self.persist()?;
        Ok(())
    }

    // ========== Internals ==========

    /// Mint a session-unique, time-ordered id. Snowflake ids can tie
    /// or regress within a millisecond; the bump keeps ids minted by
    /// this instance strictly increasing.
    fn next_id(&mut self) -> i64 {
        let mut id = util::snowflake_id();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        id
    }

    fn persist(&self) -> StoreResult<()> {
        self.vault.save(&self.state)?;
        Ok(())
    }
}
