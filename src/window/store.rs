use std::collections::BTreeMap;
use std::fmt::Debug;

use super::WindowState;
use crate::layout::{Point, Size};

/// Authoritative window state keyed by session id.
///
/// Every operation touches only the ids it names; `focus` additionally
/// advances the shared z-index counter. Ids without an entry are ignored so
/// late UI events for a session that already went away are harmless.
#[derive(Debug, Clone)]
pub struct WindowStore<Id: Ord> {
    windows: BTreeMap<Id, WindowState>,
    top_z_index: u64,
    default_size: Size,
    min_size: Size,
}

impl<Id: Clone + Ord + Debug> WindowStore<Id> {
    pub fn new(base_z_index: u64, default_size: Size, min_size: Size) -> Self {
        Self {
            windows: BTreeMap::new(),
            top_z_index: base_z_index,
            default_size,
            min_size,
        }
    }

    pub fn get(&self, id: &Id) -> Option<&WindowState> {
        self.windows.get(id)
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.windows.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Id, &WindowState)> {
        self.windows.iter()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Highest z-index handed out so far.
    pub fn top_z_index(&self) -> u64 {
        self.top_z_index
    }

    /// Advance the counter and return the new top.
    pub fn next_z_index(&mut self) -> u64 {
        self.top_z_index = self.top_z_index.saturating_add(1);
        self.top_z_index
    }

    /// Insert `initial` unless `id` already has an entry. Returns whether an
    /// insert happened.
    pub fn upsert_if_absent(&mut self, id: Id, initial: WindowState) -> bool {
        if self.windows.contains_key(&id) {
            return false;
        }
        let initial = WindowState {
            size: initial.size.clamp_min(self.min_size),
            ..initial
        };
        self.windows.insert(id, initial);
        true
    }

    /// Raise, reveal and un-minimize. Returns the assigned z-index.
    pub fn focus(&mut self, id: &Id) -> Option<u64> {
        if !self.windows.contains_key(id) {
            return None;
        }
        let z_index = self.next_z_index();
        let window = self.windows.get_mut(id)?;
        window.minimized = false;
        window.visible = true;
        window.z_index = z_index;
        Some(z_index)
    }

    pub fn minimize(&mut self, id: &Id) -> bool {
        self.update(id, |window| window.minimized = true)
    }

    pub fn hide(&mut self, id: &Id) -> bool {
        self.update(id, |window| window.visible = false)
    }

    /// Hide every tracked window. Returns how many were visible before.
    pub fn hide_all(&mut self) -> usize {
        let mut hidden = 0;
        for window in self.windows.values_mut() {
            if window.visible {
                hidden += 1;
            }
            window.visible = false;
        }
        hidden
    }

    pub fn set_position(&mut self, id: &Id, position: Point) -> bool {
        self.update(id, |window| window.position = position)
    }

    /// Overwrite the size, clamped to the minimum window size.
    pub fn set_size(&mut self, id: &Id, size: Size) -> bool {
        let size = size.clamp_min(self.min_size);
        self.update(id, |window| window.size = size)
    }

    /// Bulk position overwrite from a computed layout. Every id in the layout
    /// ends up visible and not minimized; ids without an entry are created at
    /// the default size on the current top layer.
    pub fn arrange<I>(&mut self, layout: I)
    where
        I: IntoIterator<Item = (Id, Point)>,
    {
        let top = self.top_z_index;
        let default_size = self.default_size;
        for (id, position) in layout {
            let window = self
                .windows
                .entry(id)
                .or_insert_with(|| WindowState::new(position, default_size, top));
            window.position = position;
            window.minimized = false;
            window.visible = true;
        }
    }

    /// Drop every entry `keep` rejects. Returns the removed ids.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<Id>
    where
        F: FnMut(&Id) -> bool,
    {
        let removed: Vec<Id> = self
            .windows
            .keys()
            .filter(|id| !keep(*id))
            .cloned()
            .collect();
        for id in &removed {
            self.windows.remove(id);
        }
        removed
    }

    fn update<F>(&mut self, id: &Id, apply: F) -> bool
    where
        F: FnOnce(&mut WindowState),
    {
        match self.windows.get_mut(id) {
            Some(window) => {
                apply(window);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WindowStore<&'static str> {
        WindowStore::new(100, Size::new(384, 500), Size::new(300, 200))
    }

    fn window(x: i32, y: i32) -> WindowState {
        WindowState::new(Point::new(x, y), Size::new(384, 500), 101)
    }

    #[test]
    fn upsert_is_idempotent() {
        let mut s = store();
        assert!(s.upsert_if_absent("a", window(10, 10)));
        assert!(!s.upsert_if_absent("a", window(99, 99)));
        assert_eq!(s.get(&"a"), Some(&window(10, 10)));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn focus_assigns_strictly_increasing_z() {
        let mut s = store();
        s.upsert_if_absent("a", window(0, 0));
        s.upsert_if_absent("b", window(0, 0));
        let mut last = s.top_z_index();
        for id in ["a", "b", "a", "a", "b"] {
            let z = s.focus(&id).expect("known id");
            assert!(z > last);
            last = z;
        }
        assert_eq!(s.get(&"b").map(|w| w.z_index), Some(last));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut s = store();
        s.upsert_if_absent("a", window(5, 5));
        let before = s.clone();
        assert_eq!(s.focus(&"ghost"), None);
        assert!(!s.minimize(&"ghost"));
        assert!(!s.hide(&"ghost"));
        assert!(!s.set_position(&"ghost", Point::new(1, 1)));
        assert!(!s.set_size(&"ghost", Size::new(500, 500)));
        assert_eq!(s.top_z_index(), before.top_z_index());
        assert_eq!(s.get(&"a"), before.get(&"a"));
        assert!(!s.contains(&"ghost"));
    }

    #[test]
    fn hide_then_focus_restores_geometry() {
        let mut s = store();
        s.upsert_if_absent("a", window(40, 60));
        s.set_size(&"a", Size::new(420, 333));
        s.minimize(&"a");
        s.hide(&"a");
        let hidden = *s.get(&"a").expect("present");
        assert!(!hidden.visible);
        assert!(hidden.minimized);

        s.focus(&"a");
        let restored = s.get(&"a").expect("present");
        assert!(restored.visible);
        assert!(!restored.minimized);
        assert_eq!(restored.position, Point::new(40, 60));
        assert_eq!(restored.size, Size::new(420, 333));
    }

    #[test]
    fn set_size_clamps_to_minimum() {
        let mut s = store();
        s.upsert_if_absent("a", window(0, 0));
        s.set_size(&"a", Size::new(100, 50));
        assert_eq!(s.get(&"a").map(|w| w.size), Some(Size::new(300, 200)));
    }

    #[test]
    fn hide_all_keeps_geometry() {
        let mut s = store();
        s.upsert_if_absent("a", window(1, 2));
        s.upsert_if_absent("b", window(3, 4));
        s.hide(&"b");
        assert_eq!(s.hide_all(), 1);
        assert!(s.iter().all(|(_, w)| !w.visible));
        assert_eq!(s.get(&"a").map(|w| w.position), Some(Point::new(1, 2)));
    }

    #[test]
    fn arrange_reveals_and_creates() {
        let mut s = store();
        s.upsert_if_absent("a", window(0, 0));
        s.minimize(&"a");
        s.arrange(vec![("a", Point::new(20, 80)), ("new", Point::new(424, 80))]);
        let a = s.get(&"a").expect("present");
        assert!(a.is_floating());
        assert_eq!(a.position, Point::new(20, 80));
        let created = s.get(&"new").expect("created");
        assert_eq!(created.z_index, 100);
        assert_eq!(created.size, Size::new(384, 500));
        assert_eq!(s.top_z_index(), 100);
    }

    #[test]
    fn retain_reports_removed_ids() {
        let mut s = store();
        s.upsert_if_absent("a", window(0, 0));
        s.upsert_if_absent("b", window(0, 0));
        let removed = s.retain(|id| *id == "a");
        assert_eq!(removed, vec!["b"]);
        assert!(s.contains(&"a"));
        assert!(!s.contains(&"b"));
    }
}
