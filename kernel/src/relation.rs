use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::{
    event::Event,
    group::Group,
    id::{EventId, GroupId, UserId},
    user::User,
};
use crate::model::booking::Booking;
use crate::repository::{
    booking::BookingRepository, event::EventRepository, group::GroupRepository,
    user::UserRepository,
};

/// Keeps the denormalized, mirrored relation arrays of users, events, groups
/// and bookings consistent. Every operation is a sequence of single-document
/// loads and saves; there is no cross-document transaction, so a concurrent
/// writer to the same document wins last.
#[derive(new)]
pub struct RelationMaintainer {
    users: Arc<dyn UserRepository>,
    events: Arc<dyn EventRepository>,
    groups: Arc<dyn GroupRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl RelationMaintainer {
    /// Appends the event to each group's `events` array. Called once at event
    /// creation; idempotent per (event, group) pair.
    pub async fn attach_event_to_groups(
        &self,
        event_id: EventId,
        group_ids: &[GroupId],
    ) -> AppResult<()> {
        for &group_id in group_ids {
            let mut group = self.load_group(group_id).await?;
            push_unique(&mut group.events, event_id);
            self.groups.save(&group).await?;
        }
        Ok(())
    }

    /// Records the event on its organizer's `events` list.
    pub async fn attach_event_to_organizer(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> AppResult<()> {
        let mut user = self.load_user(user_id).await?;
        push_unique(&mut user.events, event_id);
        self.users.save(&user).await
    }

    /// Records the group on its creator's `created_groups` list.
    pub async fn attach_group_to_creator(
        &self,
        group_id: GroupId,
        user_id: UserId,
    ) -> AppResult<()> {
        let mut user = self.load_user(user_id).await?;
        push_unique(&mut user.created_groups, group_id);
        self.users.save(&user).await
    }

    /// Symmetric membership attach used at user creation: the user joins each
    /// of the given groups. Returns the user with its `groups` filled in.
    pub async fn attach_user_to_groups(
        &self,
        mut user: User,
        group_ids: &[GroupId],
    ) -> AppResult<User> {
        for &group_id in group_ids {
            let mut group = self.load_group(group_id).await?;
            push_unique(&mut group.members, user.user_id);
            push_unique(&mut user.groups, group_id);
            self.groups.save(&group).await?;
        }
        self.users.save(&user).await?;
        Ok(user)
    }

    /// Applies the symmetric difference between the event's current groups and
    /// `new_group_ids`: removed groups lose the event id, added groups gain it.
    /// The event's own `groups` field is replaced; the caller saves the event.
    pub async fn reconcile_event_groups(
        &self,
        event: &mut Event,
        new_group_ids: Vec<GroupId>,
    ) -> AppResult<()> {
        // A client-supplied list may repeat an id; collapse it first, keeping
        // first-occurrence order.
        let mut unique_ids = Vec::with_capacity(new_group_ids.len());
        for group_id in new_group_ids {
            push_unique(&mut unique_ids, group_id);
        }
        let new_group_ids = unique_ids;

        let removed: Vec<GroupId> = event
            .groups
            .iter()
            .filter(|id| !new_group_ids.contains(id))
            .copied()
            .collect();
        let added: Vec<GroupId> = new_group_ids
            .iter()
            .filter(|id| !event.groups.contains(id))
            .copied()
            .collect();

        for group_id in removed {
            // A dangling reference on the removal side is skipped rather than
            // reported: the relation it mirrored is already gone.
            if let Some(mut group) = self.groups.find_by_id(group_id).await? {
                remove_item(&mut group.events, &event.event_id);
                self.groups.save(&group).await?;
            }
        }
        for group_id in added {
            let mut group = self.load_group(group_id).await?;
            push_unique(&mut group.events, event.event_id);
            self.groups.save(&group).await?;
        }

        event.groups = new_group_ids;
        Ok(())
    }

    /// Books an event for a user. Persistence order is booking, user, event:
    /// a partial failure leaves an orphan booking rather than a dangling
    /// attendee reference.
    pub async fn book_event(&self, user_id: UserId, event_id: EventId) -> AppResult<Event> {
        let mut user = self.load_user(user_id).await?;
        let mut event = self.load_event(event_id).await?;

        if event.attendees.contains(&user_id) {
            return Err(AppError::AlreadyBooked);
        }

        let booking = self.bookings.create(user_id, event_id).await?;
        push_unique(&mut user.booked_events, booking.booking_id);
        self.users.save(&user).await?;
        push_unique(&mut event.attendees, user_id);
        self.events.save(&event).await?;

        Ok(event)
    }

    /// Adds the user to the group, symmetric on both sides. Returns the
    /// updated user.
    pub async fn join_group(&self, user_id: UserId, group_id: GroupId) -> AppResult<User> {
        let mut user = self.load_user(user_id).await?;
        let mut group = self.load_group(group_id).await?;

        if group.members.contains(&user_id) {
            return Err(AppError::AlreadyMember);
        }

        push_unique(&mut user.groups, group_id);
        push_unique(&mut group.members, user_id);
        self.users.save(&user).await?;
        self.groups.save(&group).await?;

        Ok(user)
    }

    /// Removes the user from the group, symmetric on both sides.
    pub async fn leave_group(&self, user_id: UserId, group_id: GroupId) -> AppResult<()> {
        let mut user = self.load_user(user_id).await?;
        let mut group = self.load_group(group_id).await?;

        if !group.members.contains(&user_id) {
            return Err(AppError::NotMember);
        }

        remove_item(&mut user.groups, &group_id);
        remove_item(&mut group.members, &user_id);
        self.users.save(&user).await?;
        self.groups.save(&group).await?;

        Ok(())
    }

    /// Cascade cleanup before an event is deleted: detach it from its groups,
    /// drop its bookings together with the attendee back-references, and
    /// remove it from the organizer's list.
    pub async fn detach_event(&self, event: &Event) -> AppResult<()> {
        for &group_id in &event.groups {
            if let Some(mut group) = self.groups.find_by_id(group_id).await? {
                remove_item(&mut group.events, &event.event_id);
                self.groups.save(&group).await?;
            }
        }
        for booking in self.bookings.find_by_event_id(event.event_id).await? {
            if let Some(mut user) = self.users.find_by_id(booking.user).await? {
                remove_item(&mut user.booked_events, &booking.booking_id);
                self.users.save(&user).await?;
            }
            self.bookings.delete(booking.booking_id).await?;
        }
        if let Some(mut organizer) = self.users.find_by_id(event.organizer).await? {
            remove_item(&mut organizer.events, &event.event_id);
            self.users.save(&organizer).await?;
        }
        Ok(())
    }

    /// Cascade cleanup before a group is deleted.
    pub async fn detach_group(&self, group: &Group) -> AppResult<()> {
        for &member_id in &group.members {
            if let Some(mut member) = self.users.find_by_id(member_id).await? {
                remove_item(&mut member.groups, &group.group_id);
                self.users.save(&member).await?;
            }
        }
        for &event_id in &group.events {
            if let Some(mut event) = self.events.find_by_id(event_id).await? {
                remove_item(&mut event.groups, &group.group_id);
                self.events.save(&event).await?;
            }
        }
        if let Some(mut creator) = self.users.find_by_id(group.creator).await? {
            remove_item(&mut creator.created_groups, &group.group_id);
            self.users.save(&creator).await?;
        }
        Ok(())
    }

    /// Cascade cleanup before a booking is deleted: the attendee entry and the
    /// user's booking reference go with it.
    pub async fn detach_booking(&self, booking: &Booking) -> AppResult<()> {
        if let Some(mut event) = self.events.find_by_id(booking.event).await? {
            remove_item(&mut event.attendees, &booking.user);
            self.events.save(&event).await?;
        }
        if let Some(mut user) = self.users.find_by_id(booking.user).await? {
            remove_item(&mut user.booked_events, &booking.booking_id);
            self.users.save(&user).await?;
        }
        Ok(())
    }

    /// Cascade cleanup before a user is deleted: memberships and bookings are
    /// dissolved. Events the user organized and groups they created are left
    /// in place.
    pub async fn detach_user(&self, user: &User) -> AppResult<()> {
        for &group_id in &user.groups {
            if let Some(mut group) = self.groups.find_by_id(group_id).await? {
                remove_item(&mut group.members, &user.user_id);
                self.groups.save(&group).await?;
            }
        }
        for booking in self.bookings.find_by_user_id(user.user_id).await? {
            if let Some(mut event) = self.events.find_by_id(booking.event).await? {
                remove_item(&mut event.attendees, &user.user_id);
                self.events.save(&event).await?;
            }
            self.bookings.delete(booking.booking_id).await?;
        }
        Ok(())
    }

    async fn load_user(&self, user_id: UserId) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("this user doesn't exist".into()))
    }

    async fn load_event(&self, event_id: EventId) -> AppResult<Event> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("this event doesn't exist".into()))
    }

    async fn load_group(&self, group_id: GroupId) -> AppResult<Group> {
        self.groups
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("this group doesn't exist".into()))
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

fn remove_item<T: PartialEq>(items: &mut Vec<T>, item: &T) {
    items.retain(|existing| existing != item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_unique_is_idempotent() {
        let id = GroupId::new();
        let mut items = vec![];
        push_unique(&mut items, id);
        push_unique(&mut items, id);
        assert_eq!(items, vec![id]);
    }

    #[test]
    fn remove_item_drops_every_occurrence() {
        let keep = UserId::new();
        let drop = UserId::new();
        let mut items = vec![keep, drop, drop];
        remove_item(&mut items, &drop);
        assert_eq!(items, vec![keep]);
    }
}
