use parking_lot::RwLock;
use tracing::{debug, info};

use crate::models::{Group, GroupSummary, Student};

#[derive(Debug, Default)]
struct StoreInner {
    /// Insertion-ordered. Group ids are stable keys, not positions.
    groups: Vec<Group>,
    next_student_id: i64,
    next_group_id: i64,
}

/// Thread-safe in-memory registry of groups and their students.
///
/// A single lock guards the group sequence and both id counters, so every
/// operation runs atomically even though axum serves requests concurrently.
/// Constructed once at startup and handed to handlers as an `Arc`; tests
/// build a fresh store each.
pub struct GroupStore {
    inner: RwLock<StoreInner>,
}

impl GroupStore {
    pub fn new() -> Self {
        info!("Initializing in-memory group store");
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// All groups as summaries, in insertion order, members projected to
    /// ids in member order.
    pub fn list_groups(&self) -> Vec<GroupSummary> {
        let inner = self.inner.read();
        inner.groups.iter().map(Group::summary).collect()
    }

    /// Every student across all groups, group order then member order.
    /// Ids are globally unique by construction, so no deduplication is
    /// needed.
    pub fn list_students(&self) -> Vec<Student> {
        let inner = self.inner.read();
        inner
            .groups
            .iter()
            .flat_map(|group| group.members.iter().cloned())
            .collect()
    }

    /// Create a group, creating one student per member name in order.
    pub fn create_group(&self, group_name: String, member_names: Vec<String>) -> GroupSummary {
        let mut inner = self.inner.write();

        let members: Vec<Student> = member_names
            .into_iter()
            .map(|name| {
                let id = inner.next_student_id;
                inner.next_student_id += 1;
                Student { id, name }
            })
            .collect();

        let group = Group {
            id: inner.next_group_id,
            group_name,
            members,
        };
        inner.next_group_id += 1;

        let summary = group.summary();
        debug!(
            group_id = group.id,
            members = group.members.len(),
            "Created group '{}'",
            group.group_name
        );
        inner.groups.push(group);

        summary
    }

    /// Keyed lookup by stable group id. Negative or unknown ids are `None`.
    pub fn get_group(&self, id: i64) -> Option<Group> {
        let inner = self.inner.read();
        inner.groups.iter().find(|group| group.id == id).cloned()
    }

    /// Remove the group whose id matches. Returns `false` when no group
    /// has that id. Student ids are never reclaimed.
    pub fn delete_group(&self, id: i64) -> bool {
        let mut inner = self.inner.write();
        match inner.groups.iter().position(|group| group.id == id) {
            Some(pos) => {
                inner.groups.remove(pos);
                debug!(group_id = id, "Deleted group");
                true
            }
            None => false,
        }
    }

    /// Number of groups currently in the store.
    pub fn group_count(&self) -> usize {
        self.inner.read().groups.len()
    }

    /// Total students across all groups (live ones, not the counter).
    pub fn student_count(&self) -> usize {
        let inner = self.inner.read();
        inner.groups.iter().map(|group| group.members.len()).sum()
    }
}

impl Default for GroupStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn student_ids_strictly_increase_across_groups() {
        let store = GroupStore::new();
        store.create_group("A".into(), names(&["Alice", "Bob"]));
        store.create_group("B".into(), names(&["Carol"]));
        store.create_group("C".into(), names(&["Dave", "Erin"]));

        let ids: Vec<i64> = store.list_students().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn list_students_concatenates_in_group_then_member_order() {
        let store = GroupStore::new();
        store.create_group("A".into(), names(&["Alice", "Bob"]));
        store.create_group("B".into(), names(&["Carol"]));

        let students = store.list_students();
        let expected: Vec<(i64, &str)> = vec![(0, "Alice"), (1, "Bob"), (2, "Carol")];
        let actual: Vec<(i64, &str)> = students
            .iter()
            .map(|s| (s.id, s.name.as_str()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn summary_members_match_full_group_member_ids() {
        let store = GroupStore::new();
        store.create_group("A".into(), names(&["Alice", "Bob"]));
        store.create_group("B".into(), names(&["Carol"]));

        for summary in store.list_groups() {
            let group = store.get_group(summary.id).unwrap();
            let member_ids: Vec<i64> = group.members.iter().map(|s| s.id).collect();
            assert_eq!(summary.members, member_ids);
            assert_eq!(summary.group_name, group.group_name);
        }
    }

    #[test]
    fn group_ids_stay_stable_after_deletion() {
        let store = GroupStore::new();
        store.create_group("A".into(), names(&["X"]));
        store.create_group("B".into(), names(&["Y"]));

        assert!(store.delete_group(0));

        let remaining = store.list_groups();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 1);
        assert_eq!(remaining[0].group_name, "B");

        // The survivor is still reachable under its original id.
        assert!(store.get_group(1).is_some());
        assert!(store.get_group(0).is_none());
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let store = GroupStore::new();
        store.create_group("A".into(), names(&["X"]));
        assert!(store.delete_group(0));

        let summary = store.create_group("B".into(), names(&["Y"]));
        assert_eq!(summary.id, 1);
        assert_eq!(summary.members, vec![1]);
    }

    #[test]
    fn delete_missing_group_reports_failure() {
        let store = GroupStore::new();
        store.create_group("A".into(), names(&["X"]));

        assert!(!store.delete_group(7));
        assert!(!store.delete_group(-1));
        assert_eq!(store.group_count(), 1);
    }

    #[test]
    fn get_group_with_out_of_range_id_is_none() {
        let store = GroupStore::new();
        store.create_group("A".into(), names(&["X"]));

        assert!(store.get_group(-1).is_none());
        assert!(store.get_group(1).is_none());
    }

    #[test]
    fn empty_member_list_creates_empty_group() {
        let store = GroupStore::new();
        let summary = store.create_group("Solo".into(), vec![]);

        assert_eq!(summary.members, Vec::<i64>::new());
        assert_eq!(store.student_count(), 0);
        assert_eq!(store.group_count(), 1);
    }
}
