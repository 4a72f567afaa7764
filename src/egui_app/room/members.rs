//! Member Tracking
//!
//! Holds the latest server-pushed member list for the current room.
//! Lists are replaced wholesale; role checks always run against the
//! newest list so a demoted host loses privileges on the next frame.

use crate::shared::member::Member;

/// The member list as last pushed by the server
#[derive(Debug, Default)]
pub struct MemberTracker {
    members: Vec<Member>,
}

impl MemberTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with an authoritative push
    pub fn replace(&mut self, members: Vec<Member>) {
        self.members = members;
    }

    /// Every entry, including deleted rows kept for attribution
    pub fn all(&self) -> &[Member] {
        &self.members
    }

    /// Members currently in the room
    pub fn active(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn find(&self, user_id: i64) -> Option<&Member> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    /// Whether this user currently holds host privileges
    pub fn is_host(&self, user_id: i64) -> bool {
        self.find(user_id)
            .map(|m| m.is_active() && m.is_host())
            .unwrap_or(false)
    }

    /// Whether any active member is host. False starts the host-loss
    /// closure deadline.
    pub fn has_live_host(&self) -> bool {
        self.active().any(|m| m.is_host())
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::member::MemberRole;

    fn member(user_id: i64, role: MemberRole, is_deleted: bool) -> Member {
        Member {
            user_id,
            nickname: format!("user{}", user_id),
            job: String::new(),
            profile: None,
            role,
            is_deleted,
        }
    }

    #[test]
    fn test_empty_tracker() {
        let tracker = MemberTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.active_count(), 0);
        assert!(!tracker.has_live_host());
        assert!(!tracker.is_host(1));
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut tracker = MemberTracker::new();
        tracker.replace(vec![
            member(1, MemberRole::Host, false),
            member(2, MemberRole::Guest, false),
        ]);
        assert_eq!(tracker.active_count(), 2);

        tracker.replace(vec![member(2, MemberRole::Host, false)]);
        assert_eq!(tracker.active_count(), 1);
        assert!(!tracker.is_host(1));
        assert!(tracker.is_host(2));
    }

    #[test]
    fn test_deleted_members_not_active() {
        let mut tracker = MemberTracker::new();
        tracker.replace(vec![
            member(1, MemberRole::Host, true),
            member(2, MemberRole::Guest, false),
        ]);
        assert_eq!(tracker.active_count(), 1);
        // A deleted host no longer counts as live
        assert!(!tracker.has_live_host());
        assert!(!tracker.is_host(1));
    }

    #[test]
    fn test_host_promotion_restores_live_host() {
        let mut tracker = MemberTracker::new();
        tracker.replace(vec![
            member(1, MemberRole::Host, true),
            member(2, MemberRole::Guest, false),
        ]);
        assert!(!tracker.has_live_host());

        tracker.replace(vec![
            member(1, MemberRole::Guest, true),
            member(2, MemberRole::Host, false),
        ]);
        assert!(tracker.has_live_host());
        assert!(tracker.is_host(2));
    }

    #[test]
    fn test_find_keeps_deleted_rows() {
        let mut tracker = MemberTracker::new();
        tracker.replace(vec![member(5, MemberRole::Guest, true)]);
        // Still findable for message attribution
        assert!(tracker.find(5).is_some());
        assert_eq!(tracker.all().len(), 1);
    }
}
