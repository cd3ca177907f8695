//! Application state
//!
//! Everything the frontend renders, in one serializable struct. Wire
//! names match the mobile store's camelCase fields so a blob written
//! here reads back anywhere else the shape is known.

use serde::{Deserialize, Serialize};

use shared::models::{
    Booking, Business, CurrentUser, NotificationSettings, PaymentMethod, PendingPoolPayment,
    PlanTier, Pool, Recommendation, Route, Service, UserFavorite,
};

use crate::seed;

/// Full client-side application state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub services: Vec<Service>,
    pub businesses: Vec<Business>,
    pub pools: Vec<Pool>,
    pub bookings: Vec<Booking>,
    /// Plain favorite service ids (the quick heart toggle).
    pub favorites: Vec<i64>,
    /// Favorites carrying preference level and trip selection.
    pub user_favorites: Vec<UserFavorite>,
    pub recommendations: Vec<Recommendation>,
    pub routes: Vec<Route>,
    pub current_user: CurrentUser,
    pub is_authenticated: bool,
    pub has_completed_onboarding: bool,
    pub user_plan: PlanTier,
    pub payment_methods: Vec<PaymentMethod>,
    pub notifications: NotificationSettings,
    /// Pool payments started but never completed.
    pub pool_payment_pending: Vec<PendingPoolPayment>,
    /// True while a catalog fetch is in flight. Reset on load, never
    /// meaningful across runs.
    #[serde(default)]
    pub is_loading: bool,
}

impl AppState {
    /// The state a fresh install starts from.
    pub fn seeded() -> Self {
        Self {
            services: seed::services(),
            businesses: seed::businesses(),
            pools: seed::pools(),
            bookings: Vec::new(),
            favorites: Vec::new(),
            user_favorites: Vec::new(),
            recommendations: Vec::new(),
            routes: seed::routes(),
            current_user: seed::current_user(),
            is_authenticated: false,
            has_completed_onboarding: false,
            user_plan: PlanTier::Free,
            payment_methods: seed::payment_methods(),
            notifications: NotificationSettings::default(),
            pool_payment_pending: Vec::new(),
            is_loading: false,
        }
    }

    pub fn service(&self, id: i64) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn pool(&self, id: i64) -> Option<&Pool> {
        self.pools.iter().find(|p| p.id == id)
    }

    pub fn booking(&self, id: i64) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn recommendation(&self, id: &str) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.id == id)
    }

    pub fn is_favorite(&self, service_id: i64) -> bool {
        self.favorites.contains(&service_id)
    }

    /// The favorite currently selected for the trip, if any.
    pub fn trip_favorite(&self) -> Option<&UserFavorite> {
        self.user_favorites.iter().find(|f| f.selected_for_trip)
    }

    pub(crate) fn service_mut(&mut self, id: i64) -> Option<&mut Service> {
        self.services.iter_mut().find(|s| s.id == id)
    }

    pub(crate) fn pool_mut(&mut self, id: i64) -> Option<&mut Pool> {
        self.pools.iter_mut().find(|p| p.id == id)
    }

    pub(crate) fn recommendation_mut(&mut self, id: &str) -> Option<&mut Recommendation> {
        self.recommendations.iter_mut().find(|r| r.id == id)
    }
}
