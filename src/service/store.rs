use crate::models::Record;

/// 远程集合的本地镜像, 始终按 id 降序 (最新在前)
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    /// 整体替换后重新排序
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.resort();
    }

    /// 插入到最前, 再重新排序
    pub fn insert(&mut self, item: T) {
        self.items.insert(0, item);
        self.resort();
    }

    /// 替换 id 匹配的记录; 不存在时不做任何修改, 返回 false
    pub fn update_by_id(&mut self, id: i64, item: T) -> bool {
        let Some(slot) = self.items.iter_mut().find(|existing| existing.id() == Some(id)) else {
            return false;
        };
        *slot = item;
        self.resort();
        true
    }

    /// 已存在则替换, 否则插入
    pub fn upsert(&mut self, item: T) {
        match item.id() {
            Some(id) if self.get(id).is_some() => {
                self.update_by_id(id, item);
            }
            _ => self.insert(item),
        }
    }

    pub fn remove_by_id(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != Some(id));
        self.items.len() != before
    }

    /// 稳定排序: 同 sort_key 保持原有相对顺序
    fn resort(&mut self) {
        self.items.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: Option<i64>,
        name: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> Option<i64> {
            self.id
        }

        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![Some(self.name)]
        }
    }

    fn item(id: Option<i64>, name: &'static str) -> Item {
        Item { id, name }
    }

    fn ids(store: &EntityStore<Item>) -> Vec<Option<i64>> {
        store.items().iter().map(|i| i.id).collect()
    }

    #[test]
    fn replace_all_sorts_descending_with_missing_ids_last() {
        let mut store = EntityStore::new();
        store.replace_all(vec![item(Some(2), "b"), item(None, "x"), item(Some(10), "j"), item(Some(7), "g")]);
        assert_eq!(ids(&store), vec![Some(10), Some(7), Some(2), None]);
    }

    #[test]
    fn insert_places_newest_first() {
        let mut store = EntityStore::new();
        store.replace_all(vec![item(Some(1), "a"), item(Some(2), "b")]);
        store.insert(item(Some(3), "c"));
        assert_eq!(ids(&store), vec![Some(3), Some(2), Some(1)]);
    }

    #[test]
    fn update_missing_id_is_noop() {
        let mut store = EntityStore::new();
        store.replace_all(vec![item(Some(1), "a")]);
        assert!(!store.update_by_id(5, item(Some(5), "e")));
        assert_eq!(store.len(), 1);
        assert!(store.update_by_id(1, item(Some(1), "A")));
        assert_eq!(store.get(1).map(|i| i.name), Some("A"));
    }

    #[test]
    fn remove_by_id() {
        let mut store = EntityStore::new();
        store.replace_all(vec![item(Some(1), "a"), item(Some(2), "b")]);
        assert!(store.remove_by_id(2));
        assert!(!store.remove_by_id(2));
        assert_eq!(ids(&store), vec![Some(1)]);
    }

    #[test]
    fn upsert_updates_or_inserts() {
        let mut store = EntityStore::new();
        store.upsert(item(Some(4), "d"));
        store.upsert(item(Some(4), "D"));
        store.upsert(item(Some(9), "i"));
        assert_eq!(ids(&store), vec![Some(9), Some(4)]);
        assert_eq!(store.get(4).map(|i| i.name), Some("D"));
    }
}
