use std::sync::Arc;

use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::event::EventRepositoryImpl;
use adapter::repository::group::GroupRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::store::DocumentStore;
use kernel::relation::RelationMaintainer;
use kernel::repository::auth::AuthRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::event::EventRepository;
use kernel::repository::group::GroupRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    user_repository: Arc<dyn UserRepository>,
    event_repository: Arc<dyn EventRepository>,
    group_repository: Arc<dyn GroupRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    relation_maintainer: Arc<RelationMaintainer>,
}

impl AppRegistry {
    pub fn new(store: DocumentStore, app_config: AppConfig) -> Self {
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(store.clone()));
        let event_repository: Arc<dyn EventRepository> =
            Arc::new(EventRepositoryImpl::new(store.clone()));
        let group_repository: Arc<dyn GroupRepository> =
            Arc::new(GroupRepositoryImpl::new(store.clone()));
        let booking_repository: Arc<dyn BookingRepository> =
            Arc::new(BookingRepositoryImpl::new(store.clone()));
        let auth_repository: Arc<dyn AuthRepository> = Arc::new(AuthRepositoryImpl::new(
            store.clone(),
            app_config.auth.ttl,
        ));
        let relation_maintainer = Arc::new(RelationMaintainer::new(
            user_repository.clone(),
            event_repository.clone(),
            group_repository.clone(),
            booking_repository.clone(),
        ));
        Self {
            user_repository,
            event_repository,
            group_repository,
            booking_repository,
            auth_repository,
            relation_maintainer,
        }
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn group_repository(&self) -> Arc<dyn GroupRepository> {
        self.group_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn relation_maintainer(&self) -> Arc<RelationMaintainer> {
        self.relation_maintainer.clone()
    }
}
