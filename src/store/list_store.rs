use std::collections::HashMap;

use super::entities::{Activity, ToDoList};
use super::error::{StoreError, StoreResult};

const LIST_ENTITY: &str = "to-do list";
const ACTIVITY_ENTITY: &str = "activity";

/// In-memory owner of every to-do list and its activities. Lists are kept in
/// creation order; ids only ever move forward and are never reused, even
/// after a delete.
#[derive(Debug, Default)]
pub struct ListStore {
    lists: Vec<ToDoList>,
    list_id_counter: u64,
    // One entry per live list: the last activity id issued for it. Created
    // with the list and removed with it. Deleting activities does not wind
    // it back.
    activity_id_counters: HashMap<u64, u64>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new empty list and returns its id (1 for the first list,
    /// strictly increasing after that).
    pub fn create_list(&mut self, name: &str) -> u64 {
        let to_do_list_id = self.next_list_id();
        self.activity_id_counters.insert(to_do_list_id, 0);
        self.lists.push(ToDoList {
            id: to_do_list_id,
            name: name.to_string(),
            activities: Vec::new(),
        });
        to_do_list_id
    }

    pub fn list_lists(&self) -> &[ToDoList] {
        &self.lists
    }

    pub fn get_list(&self, to_do_list_id: u64) -> StoreResult<&ToDoList> {
        self.lists
            .iter()
            .find(|list| list.id == to_do_list_id)
            .ok_or_else(|| StoreError::not_found(LIST_ENTITY, to_do_list_id))
    }

    /// Appends an activity to an existing list and returns its id (1 for the
    /// first activity of that list, strictly increasing within the list).
    /// The list is confirmed before the counter moves: a failed add must not
    /// allocate an id.
    pub fn add_activity(&mut self, to_do_list_id: u64, detail: &str) -> StoreResult<u64> {
        self.get_list(to_do_list_id)?;

        let counter = self.activity_id_counters.entry(to_do_list_id).or_insert(0);
        *counter += 1;
        let activity_id = *counter;

        let list = self.get_list_mut(to_do_list_id)?;
        list.activities.push(Activity {
            id: activity_id,
            is_active: false,
            detail: detail.to_string(),
        });
        Ok(activity_id)
    }

    pub fn list_activities(&self, to_do_list_id: u64) -> StoreResult<&[Activity]> {
        Ok(self.get_list(to_do_list_id)?.activities.as_slice())
    }

    pub fn get_activity(&self, to_do_list_id: u64, activity_id: u64) -> StoreResult<&Activity> {
        self.get_list(to_do_list_id)?
            .activities
            .iter()
            .find(|activity| activity.id == activity_id)
            .ok_or_else(|| StoreError::not_found(ACTIVITY_ENTITY, activity_id))
    }

    pub fn update_list(&mut self, to_do_list_id: u64, name: &str) -> StoreResult<()> {
        self.get_list_mut(to_do_list_id)?.name = name.to_string();
        Ok(())
    }

    pub fn update_activity(
        &mut self,
        to_do_list_id: u64,
        activity_id: u64,
        is_active: bool,
        detail: &str,
    ) -> StoreResult<()> {
        let list = self.get_list_mut(to_do_list_id)?;
        let activity = list
            .activities
            .iter_mut()
            .find(|activity| activity.id == activity_id)
            .ok_or_else(|| StoreError::not_found(ACTIVITY_ENTITY, activity_id))?;
        activity.is_active = is_active;
        activity.detail = detail.to_string();
        Ok(())
    }

    /// Removes the list together with its activities and its id counter.
    pub fn delete_list(&mut self, to_do_list_id: u64) -> StoreResult<()> {
        let index = self
            .lists
            .iter()
            .position(|list| list.id == to_do_list_id)
            .ok_or_else(|| StoreError::not_found(LIST_ENTITY, to_do_list_id))?;
        self.lists.remove(index);
        self.activity_id_counters.remove(&to_do_list_id);
        Ok(())
    }

    /// Removes one activity; the others keep their ids and relative order,
    /// and the list's counter keeps its value.
    pub fn delete_activity(&mut self, to_do_list_id: u64, activity_id: u64) -> StoreResult<()> {
        let list = self.get_list_mut(to_do_list_id)?;
        let index = list
            .activities
            .iter()
            .position(|activity| activity.id == activity_id)
            .ok_or_else(|| StoreError::not_found(ACTIVITY_ENTITY, activity_id))?;
        list.activities.remove(index);
        Ok(())
    }

    fn next_list_id(&mut self) -> u64 {
        self.list_id_counter += 1;
        self.list_id_counter
    }

    fn get_list_mut(&mut self, to_do_list_id: u64) -> StoreResult<&mut ToDoList> {
        self.lists
            .iter_mut()
            .find(|list| list.id == to_do_list_id)
            .ok_or_else(|| StoreError::not_found(LIST_ENTITY, to_do_list_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_ids_start_at_one_and_increase() {
        let mut store = ListStore::new();
        assert_eq!(store.create_list("groceries"), 1);
        assert_eq!(store.create_list("chores"), 2);
        assert_eq!(store.create_list("errands"), 3);
    }

    #[test]
    fn list_ids_are_not_reused_after_delete() {
        let mut store = ListStore::new();
        store.create_list("first");
        store.create_list("second");
        store.delete_list(2).expect("delete second list");
        store.delete_list(1).expect("delete first list");
        assert_eq!(store.create_list("third"), 3);
    }

    #[test]
    fn create_then_get_round_trips_the_name() {
        let mut store = ListStore::new();
        let id = store.create_list("X");
        assert_eq!(store.get_list(id).expect("list exists").name, "X");

        store.update_list(id, "Y").expect("update name");
        assert_eq!(store.get_list(id).expect("list exists").name, "Y");
    }

    #[test]
    fn listing_returns_creation_order_with_empty_activities() {
        let mut store = ListStore::new();
        store.create_list("only");

        let lists = store.list_lists();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, 1);
        assert_eq!(lists[0].name, "only");
        assert!(lists[0].activities.is_empty());
    }

    #[test]
    fn listing_is_empty_when_nothing_was_created() {
        let store = ListStore::new();
        assert!(store.list_lists().is_empty());
    }

    #[test]
    fn activity_listing_is_empty_for_a_new_list() {
        let mut store = ListStore::new();
        store.create_list("one");
        assert!(store.list_activities(1).expect("list exists").is_empty());
    }

    #[test]
    fn get_list_reports_not_found() {
        let store = ListStore::new();
        let err = store.get_list(1).expect_err("no list yet");
        assert_eq!(err, StoreError::not_found("to-do list", 1));
    }

    #[test]
    fn activity_ids_count_per_list() {
        let mut store = ListStore::new();
        store.create_list("one");
        store.create_list("two");

        assert_eq!(store.add_activity(1, "a").expect("add to list 1"), 1);
        assert_eq!(store.add_activity(1, "b").expect("add to list 1"), 2);
        assert_eq!(store.add_activity(2, "c").expect("add to list 2"), 1);
    }

    #[test]
    fn activity_ids_are_not_reused_after_delete() {
        let mut store = ListStore::new();
        store.create_list("one");
        assert_eq!(store.add_activity(1, "a").expect("first add"), 1);
        store.delete_activity(1, 1).expect("delete only activity");
        assert_eq!(store.add_activity(1, "b").expect("second add"), 2);
    }

    #[test]
    fn failed_add_does_not_burn_an_id() {
        let mut store = ListStore::new();
        store.create_list("one");
        store
            .add_activity(99, "never lands")
            .expect_err("list 99 does not exist");
        assert_eq!(store.add_activity(1, "a").expect("add to list 1"), 1);
    }

    #[test]
    fn new_activities_default_to_inactive() {
        let mut store = ListStore::new();
        store.create_list("one");
        let id = store.add_activity(1, "buy milk").expect("add");

        let activity = store.get_activity(1, id).expect("activity exists");
        assert!(!activity.is_active);
        assert_eq!(activity.detail, "buy milk");
    }

    #[test]
    fn update_activity_replaces_flag_and_detail_in_place() {
        let mut store = ListStore::new();
        store.create_list("one");
        store.add_activity(1, "old").expect("add");

        store
            .update_activity(1, 1, true, "new")
            .expect("update activity");

        let activity = store.get_activity(1, 1).expect("activity exists");
        assert_eq!(activity.id, 1);
        assert!(activity.is_active);
        assert_eq!(activity.detail, "new");
    }

    #[test]
    fn update_activity_on_missing_list_fails() {
        let mut store = ListStore::new();
        let err = store
            .update_activity(99, 1, true, "x")
            .expect_err("list 99 does not exist");
        assert_eq!(err, StoreError::not_found("to-do list", 99));
    }

    #[test]
    fn update_activity_on_missing_activity_fails() {
        let mut store = ListStore::new();
        store.create_list("one");
        let err = store
            .update_activity(1, 7, true, "x")
            .expect_err("activity 7 does not exist");
        assert_eq!(err, StoreError::not_found("activity", 7));
    }

    #[test]
    fn deleting_a_list_removes_its_activities() {
        let mut store = ListStore::new();
        store.create_list("one");
        store.add_activity(1, "a").expect("add");

        store.delete_list(1).expect("delete list");

        store.get_activity(1, 1).expect_err("activity went with the list");
        store.list_activities(1).expect_err("list is gone");
    }

    #[test]
    fn deleting_a_list_twice_fails_the_second_time() {
        let mut store = ListStore::new();
        store.create_list("one");
        store.delete_list(1).expect("first delete succeeds");
        let err = store.delete_list(1).expect_err("second delete fails");
        assert_eq!(err, StoreError::not_found("to-do list", 1));
    }

    #[test]
    fn deleting_an_activity_keeps_the_others_in_order() {
        let mut store = ListStore::new();
        store.create_list("one");
        store.add_activity(1, "a").expect("add");
        store.add_activity(1, "b").expect("add");
        store.add_activity(1, "c").expect("add");

        store.delete_activity(1, 2).expect("delete the middle one");

        let remaining: Vec<u64> = store
            .list_activities(1)
            .expect("list exists")
            .iter()
            .map(|activity| activity.id)
            .collect();
        assert_eq!(remaining, vec![1, 3]);
    }

    #[test]
    fn lists_do_not_interfere() {
        let mut store = ListStore::new();
        store.create_list("one");
        store.create_list("two");
        store.add_activity(1, "a").expect("add to list 1");
        store.add_activity(2, "b").expect("add to list 2");

        store.delete_list(1).expect("delete list 1");

        let survivor = store.get_list(2).expect("list 2 untouched");
        assert_eq!(survivor.name, "two");
        assert_eq!(survivor.activities.len(), 1);
        assert_eq!(store.add_activity(2, "c").expect("counter untouched"), 2);
    }

    #[test]
    fn a_recreated_list_starts_a_fresh_activity_counter() {
        let mut store = ListStore::new();
        store.create_list("one");
        store.add_activity(1, "a").expect("add");
        store.add_activity(1, "b").expect("add");
        store.delete_list(1).expect("delete list");

        let new_id = store.create_list("one again");
        assert_eq!(store.add_activity(new_id, "a").expect("add"), 1);
    }
}
