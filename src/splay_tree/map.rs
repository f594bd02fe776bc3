use crate::entry::Entry;
use crate::splay_tree::tree::SplayTree;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

/// An ordered map implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed items are quick to access again. Every operation, lookups included, "splays" the
/// touched item to the root of the tree, which gives amortized `O(log n)` operations without any
/// maintained balance metadata. Because lookups restructure the tree, they take `&mut self`.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplayMap;
///
/// let mut map = SplayMap::new();
/// map.insert("user", "Brad");
///
/// assert_eq!(map.get(&"user"), Some(&"Brad"));
/// assert_eq!(map.get(&"missing"), None);
/// assert_eq!(map.len(), 1);
///
/// map.insert("user", "Bellinder");
/// assert_eq!(map.get(&"user"), Some(&"Bellinder"));
///
/// assert_eq!(map.remove(&"user"), Some(("user", "Bellinder")));
/// assert_eq!(map.remove(&"user"), None);
/// ```
pub struct SplayMap<T, U> {
    tree: SplayTree<Entry<T, U>>,
}

impl<T, U> SplayMap<T, U> {
    /// Constructs a new, empty `SplayMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32> = SplayMap::new();
    /// ```
    pub fn new() -> Self {
        SplayMap {
            tree: SplayTree::new(),
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will
    /// return and replace the old key-value pair. The inserted key ends up at the root of the
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        self.tree
            .insert(Entry { key, value })
            .map(|entry| (entry.key, entry.value))
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and the map is unchanged apart
    /// from the splay of the last key visited by the failed lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .remove_by(|entry| key.cmp(entry.key.borrow()))
            .map(|entry| (entry.key, entry.value))
    }

    /// Checks if a key exists in the map. The probed key is splayed to the root, so checking for
    /// a key makes an immediately following `get` of the same key cheap.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key, or `None`
    /// if the key does not exist in the map. A present key is splayed to the root; an absent key
    /// splays the last key visited by the search.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&mut self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .get_by(|entry| key.cmp(entry.key.borrow()))
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .get_by_mut(|entry| key.cmp(entry.key.borrow()))
            .map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32> = SplayMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    // In-order traversal over the arena. Kept crate-internal: ordered iteration is not part of
    // the public contract, but serialization, comparison, and the white-box tests need it.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&T, &U)> {
        self.tree.iter().map(|entry| (&entry.key, &entry.value))
    }

    #[cfg(test)]
    fn root_key(&self) -> Option<&T> {
        self.tree.root().map(|entry| &entry.key)
    }
}

impl<T, U> Default for SplayMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> fmt::Debug for SplayMap<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq for SplayMap<T, U>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(lhs, rhs)| lhs == rhs)
    }
}

impl<T, U> Eq for SplayMap<T, U>
where
    T: Eq,
    U: Eq,
{
}

impl<T, U> Serialize for SplayMap<T, U>
where
    T: Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

struct SplayMapVisitor<T, U> {
    marker: PhantomData<SplayMap<T, U>>,
}

impl<'de, T, U> Visitor<'de> for SplayMapVisitor<T, U>
where
    T: Ord + Deserialize<'de>,
    U: Deserialize<'de>,
{
    type Value = SplayMap<T, U>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = SplayMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, T, U> Deserialize<'de> for SplayMap<T, U>
where
    T: Ord + Deserialize<'de>,
    U: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SplayMapVisitor {
            marker: PhantomData,
        })
    }
}
