use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::models::{Todo, TodoInput, TodoPatch};

/// In-memory per-user collection of todos.
///
/// Each user's todos live in their own partition, keyed by the owner id the
/// caller supplies from its authenticated identity, never from the request
/// body. An unknown owner behaves as an empty partition, not an error.
///
/// Ids are dense within a partition (`len + 1`), so they restart at 1 for
/// each user and a create following a delete can hand a previously-used id
/// to new content.
#[derive(Default)]
pub struct TodoStore {
    partitions: Mutex<HashMap<i32, Vec<Todo>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i32, Vec<Todo>>> {
        self.partitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a todo in the owner's partition. `completed` starts false and
    /// both timestamps are set to creation time.
    pub fn create(&self, owner_id: i32, input: TodoInput) -> Todo {
        let mut partitions = self.lock();
        let partition = partitions.entry(owner_id).or_default();

        let now = Utc::now();
        let todo = Todo {
            id: partition.len() as i32 + 1,
            user_id: owner_id,
            title: input.title,
            description: input.description.unwrap_or_default(),
            completed: false,
            created_at: now,
            updated_at: now,
        };
        partition.push(todo.clone());

        todo
    }

    /// All todos owned by `owner_id`, in insertion order.
    pub fn list_by_owner(&self, owner_id: i32) -> Vec<Todo> {
        self.lock().get(&owner_id).cloned().unwrap_or_default()
    }

    pub fn get_by_id(&self, owner_id: i32, todo_id: i32) -> Option<Todo> {
        self.lock()
            .get(&owner_id)
            .and_then(|partition| partition.iter().find(|t| t.id == todo_id))
            .cloned()
    }

    /// Apply a partial update. Only fields present in the patch are
    /// overwritten; `updated_at` is refreshed on every successful update
    /// regardless of which fields changed.
    pub fn update(&self, owner_id: i32, todo_id: i32, patch: TodoPatch) -> Option<Todo> {
        let mut partitions = self.lock();
        let todo = partitions
            .get_mut(&owner_id)?
            .iter_mut()
            .find(|t| t.id == todo_id)?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(description) = patch.description {
            todo.description = description;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        todo.updated_at = Utc::now();

        Some(todo.clone())
    }

    /// Remove a todo from the owner's partition. Returns true iff a row was
    /// removed.
    pub fn delete(&self, owner_id: i32, todo_id: i32) -> bool {
        let mut partitions = self.lock();
        match partitions.get_mut(&owner_id) {
            Some(partition) => {
                let before = partition.len();
                partition.retain(|t| t.id != todo_id);
                partition.len() < before
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::thread;

    fn input(title: &str) -> TodoInput {
        TodoInput {
            title: title.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_create_defaults() {
        let store = TodoStore::new();
        let todo = store.create(1, input("Buy milk"));

        assert_eq!(todo.id, 1);
        assert_eq!(todo.user_id, 1);
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_ids_are_scoped_per_user() {
        let store = TodoStore::new();

        let a1 = store.create(1, input("A first"));
        let a2 = store.create(1, input("A second"));
        let b1 = store.create(2, input("B first"));

        assert_eq!(a1.id, 1);
        assert_eq!(a2.id, 2);
        // Each partition restarts at 1; ids are not globally unique.
        assert_eq!(b1.id, 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = TodoStore::new();
        store.create(1, input("first"));
        store.create(1, input("second"));
        store.create(1, input("third"));

        let titles: Vec<String> = store
            .list_by_owner(1)
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unknown_owner_behaves_as_empty_partition() {
        let store = TodoStore::new();

        assert!(store.list_by_owner(42).is_empty());
        assert!(store.get_by_id(42, 1).is_none());
        assert!(store.update(42, 1, TodoPatch::default()).is_none());
        assert!(!store.delete(42, 1));
    }

    #[test]
    fn test_cross_partition_isolation() {
        let store = TodoStore::new();
        let owned = store.create(1, input("private"));

        // User 2 cannot reach user 1's todo even with its id.
        assert!(store.get_by_id(2, owned.id).is_none());
        assert!(store
            .update(2, owned.id, TodoPatch::default())
            .is_none());
        assert!(!store.delete(2, owned.id));
        assert!(store.list_by_owner(2).is_empty());

        // Still present for its owner.
        assert_eq!(store.get_by_id(1, owned.id).unwrap().title, "private");
    }

    #[test]
    fn test_partial_update_overwrites_only_present_fields() {
        let store = TodoStore::new();
        store.create(
            1,
            TodoInput {
                title: "Buy milk".to_string(),
                description: Some("two liters".to_string()),
            },
        );

        let updated = store
            .update(
                1,
                1,
                TodoPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.description, "two liters");
    }

    #[test]
    fn test_empty_patch_refreshes_only_updated_at() {
        let store = TodoStore::new();
        let created = store.create(1, input("unchanged"));

        let updated = store.update(1, 1, TodoPatch::default()).unwrap();

        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.completed, created.completed);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_delete_then_create_reuses_id_with_fresh_content() {
        let store = TodoStore::new();
        store.create(1, input("old content"));

        assert!(store.delete(1, 1));
        assert!(store.get_by_id(1, 1).is_none());

        let replacement = store.create(1, input("new content"));
        // Dense ids: the freed id is reassigned, but the content is new.
        assert_eq!(replacement.id, 1);
        assert_eq!(store.get_by_id(1, 1).unwrap().title, "new content");
    }

    #[test]
    fn test_delete_returns_whether_a_row_was_removed() {
        let store = TodoStore::new();
        store.create(1, input("only"));

        assert!(store.delete(1, 1));
        assert!(!store.delete(1, 1));
    }

    #[test]
    fn test_concurrent_creates_on_one_partition() {
        // Handlers run on a multi-threaded runtime, so creates against the
        // same partition must serialize through the store's lock.
        let store = Arc::new(TodoStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.create(1, TodoInput {
                        title: format!("todo {}", i),
                        description: None,
                    })
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let todos = store.list_by_owner(1);
        assert_eq!(todos.len(), 8);

        let mut ids: Vec<i32> = todos.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<i32>>());
    }
}
