use adapter::store::DocumentStore;
use chrono::Utc;
use kernel::model::{
    event::{event::CreateEvent, Event},
    group::{event::CreateGroup, Group},
    user::{event::CreateUser, User},
};
use kernel::repository::{
    booking::BookingRepository, event::EventRepository, group::GroupRepository,
    user::UserRepository,
};
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::error::AppError;

fn registry() -> AppRegistry {
    let config = AppConfig::new().unwrap();
    AppRegistry::new(DocumentStore::new(), config)
}

async fn seed_user(registry: &AppRegistry, username: &str) -> User {
    registry
        .user_repository()
        .create(CreateUser {
            username: username.into(),
            name: username.into(),
            email: format!("{username}@example.com"),
            password: "sekret".into(),
            description: String::new(),
            profile_image: None,
        })
        .await
        .unwrap()
}

async fn seed_event(registry: &AppRegistry, organizer: &User) -> Event {
    registry
        .event_repository()
        .create(
            CreateEvent {
                title: "Rust Meetup".into(),
                date: Utc::now(),
                price: 0.0,
                capacity: 30,
                description: "monthly meetup".into(),
                place: "Tokyo".into(),
                groups: vec![],
            },
            organizer.user_id,
        )
        .await
        .unwrap()
}

async fn seed_group(registry: &AppRegistry, name: &str, creator: &User) -> Group {
    registry
        .group_repository()
        .create(
            CreateGroup {
                name: name.into(),
                description: "a group".into(),
            },
            creator.user_id,
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn join_and_leave_mirror_membership_on_both_documents() {
    let registry = registry();
    let maintainer = registry.relation_maintainer();
    let user = seed_user(&registry, "marika").await;
    let group = seed_group(&registry, "Coding", &user).await;

    let joined = maintainer
        .join_group(user.user_id, group.group_id)
        .await
        .unwrap();
    assert_eq!(joined.groups, vec![group.group_id]);

    let stored_group = registry
        .group_repository()
        .find_by_id(group.group_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored_group.members, vec![user.user_id]);

    let second = maintainer.join_group(user.user_id, group.group_id).await;
    assert!(matches!(second, Err(AppError::AlreadyMember)));

    maintainer
        .leave_group(user.user_id, group.group_id)
        .await
        .unwrap();
    let stored_user = registry
        .user_repository()
        .find_by_id(user.user_id)
        .await
        .unwrap()
        .unwrap();
    let stored_group = registry
        .group_repository()
        .find_by_id(group.group_id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored_user.groups.is_empty());
    assert!(stored_group.members.is_empty());

    let again = maintainer.leave_group(user.user_id, group.group_id).await;
    assert!(matches!(again, Err(AppError::NotMember)));
}

#[tokio::test]
async fn booking_the_same_event_twice_is_rejected() {
    let registry = registry();
    let maintainer = registry.relation_maintainer();
    let organizer = seed_user(&registry, "marika").await;
    let attendee = seed_user(&registry, "marek").await;
    let event = seed_event(&registry, &organizer).await;

    let booked = maintainer
        .book_event(attendee.user_id, event.event_id)
        .await
        .unwrap();
    assert_eq!(booked.attendees, vec![attendee.user_id]);

    let second = maintainer.book_event(attendee.user_id, event.event_id).await;
    assert!(matches!(second, Err(AppError::AlreadyBooked)));

    let bookings = registry.booking_repository().find_all().await.unwrap();
    assert_eq!(bookings.len(), 1);
    let stored_user = registry
        .user_repository()
        .find_by_id(attendee.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored_user.booked_events, vec![bookings[0].booking_id]);
}

#[tokio::test]
async fn attaching_an_event_to_a_group_twice_stores_one_reference() {
    let registry = registry();
    let maintainer = registry.relation_maintainer();
    let user = seed_user(&registry, "marika").await;
    let group = seed_group(&registry, "Coding", &user).await;
    let event = seed_event(&registry, &user).await;

    maintainer
        .attach_event_to_groups(event.event_id, &[group.group_id])
        .await
        .unwrap();
    maintainer
        .attach_event_to_groups(event.event_id, &[group.group_id])
        .await
        .unwrap();

    let stored = registry
        .group_repository()
        .find_by_id(group.group_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.events, vec![event.event_id]);
}

#[tokio::test]
async fn reconcile_applies_the_symmetric_difference() {
    let registry = registry();
    let maintainer = registry.relation_maintainer();
    let user = seed_user(&registry, "marika").await;
    let g1 = seed_group(&registry, "Coding", &user).await;
    let g2 = seed_group(&registry, "Hiking", &user).await;
    let g3 = seed_group(&registry, "Cooking", &user).await;
    let mut event = seed_event(&registry, &user).await;

    maintainer
        .attach_event_to_groups(event.event_id, &[g1.group_id, g2.group_id])
        .await
        .unwrap();
    event.groups = vec![g1.group_id, g2.group_id];

    maintainer
        .reconcile_event_groups(&mut event, vec![g2.group_id, g3.group_id])
        .await
        .unwrap();
    registry.event_repository().save(&event).await.unwrap();

    assert_eq!(event.groups, vec![g2.group_id, g3.group_id]);
    let groups = registry.group_repository();
    let g1 = groups.find_by_id(g1.group_id).await.unwrap().unwrap();
    let g2 = groups.find_by_id(g2.group_id).await.unwrap().unwrap();
    let g3 = groups.find_by_id(g3.group_id).await.unwrap().unwrap();
    assert!(g1.events.is_empty());
    assert_eq!(g2.events, vec![event.event_id]);
    assert_eq!(g3.events, vec![event.event_id]);
}

#[tokio::test]
async fn reconcile_collapses_repeated_group_ids() {
    let registry = registry();
    let maintainer = registry.relation_maintainer();
    let user = seed_user(&registry, "marika").await;
    let group = seed_group(&registry, "Coding", &user).await;
    let mut event = seed_event(&registry, &user).await;

    maintainer
        .reconcile_event_groups(&mut event, vec![group.group_id, group.group_id])
        .await
        .unwrap();

    assert_eq!(event.groups, vec![group.group_id]);
    let stored = registry
        .group_repository()
        .find_by_id(group.group_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.events, vec![event.event_id]);
}

#[tokio::test]
async fn reconcile_skips_a_removed_group_that_no_longer_exists() {
    let registry = registry();
    let maintainer = registry.relation_maintainer();
    let user = seed_user(&registry, "marika").await;
    let gone = seed_group(&registry, "Coding", &user).await;
    let mut event = seed_event(&registry, &user).await;
    event.groups = vec![gone.group_id];

    registry
        .group_repository()
        .delete(gone.group_id)
        .await
        .unwrap();

    maintainer
        .reconcile_event_groups(&mut event, vec![])
        .await
        .unwrap();
    assert!(event.groups.is_empty());
}

#[tokio::test]
async fn detach_event_dissolves_bookings_and_group_references() {
    let registry = registry();
    let maintainer = registry.relation_maintainer();
    let organizer = seed_user(&registry, "marika").await;
    let attendee = seed_user(&registry, "marek").await;
    let group = seed_group(&registry, "Coding", &organizer).await;
    let mut event = seed_event(&registry, &organizer).await;

    maintainer
        .attach_event_to_organizer(event.event_id, organizer.user_id)
        .await
        .unwrap();
    maintainer
        .attach_event_to_groups(event.event_id, &[group.group_id])
        .await
        .unwrap();
    event.groups = vec![group.group_id];
    registry.event_repository().save(&event).await.unwrap();
    let event = maintainer
        .book_event(attendee.user_id, event.event_id)
        .await
        .unwrap();

    maintainer.detach_event(&event).await.unwrap();

    let bookings = registry.booking_repository().find_all().await.unwrap();
    assert!(bookings.is_empty());
    let stored_attendee = registry
        .user_repository()
        .find_by_id(attendee.user_id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored_attendee.booked_events.is_empty());
    let stored_group = registry
        .group_repository()
        .find_by_id(group.group_id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored_group.events.is_empty());
    let stored_organizer = registry
        .user_repository()
        .find_by_id(organizer.user_id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored_organizer.events.is_empty());
}

#[tokio::test]
async fn detach_user_dissolves_memberships_and_bookings() {
    let registry = registry();
    let maintainer = registry.relation_maintainer();
    let organizer = seed_user(&registry, "marika").await;
    let leaver = seed_user(&registry, "marek").await;
    let group = seed_group(&registry, "Coding", &organizer).await;
    let event = seed_event(&registry, &organizer).await;

    maintainer
        .join_group(leaver.user_id, group.group_id)
        .await
        .unwrap();
    maintainer
        .book_event(leaver.user_id, event.event_id)
        .await
        .unwrap();

    let leaver = registry
        .user_repository()
        .find_by_id(leaver.user_id)
        .await
        .unwrap()
        .unwrap();
    maintainer.detach_user(&leaver).await.unwrap();

    let stored_group = registry
        .group_repository()
        .find_by_id(group.group_id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored_group.members.is_empty());
    let stored_event = registry
        .event_repository()
        .find_by_id(event.event_id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored_event.attendees.is_empty());
    assert!(registry
        .booking_repository()
        .find_all()
        .await
        .unwrap()
        .is_empty());
}
