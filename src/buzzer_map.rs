//! a secondary map from buzzers to other values
//!
//! Buzzers are recycled, so a value stored under a buzzer outlives the party that held it unless
//! someone cleans it up. Call [`BuzzerMap::remove`] when you seat or kick out a party, or call
//! [`BuzzerMap::vacuum`] every so often to drop everything that isn't in line anymore.

use crate::{buzzer::Buzzer, ServiceQueue};

/// a `hashbrown::HashMap` from buzzers to other values
///
/// # Example
///
/// ```
/// use buzzline::{buzzer_map::BuzzerMap, ServiceQueue};
///
/// let mut line = ServiceQueue::new();
/// let mut parties = BuzzerMap::new();
///
/// let smiths = line.give_buzzer();
/// parties.insert(smiths, "Smith, party of 4");
/// let jones = line.give_buzzer();
/// parties.insert(jones, "Jones, party of 2");
///
/// assert_eq!(line.seat(), Ok(smiths));
/// parties.vacuum(&line);
/// assert_eq!(parties.get(smiths), None);
/// assert_eq!(parties[jones], "Jones, party of 2");
/// ```
#[derive(Clone, Debug)]
pub struct BuzzerMap<B: Buzzer, V> {
    map: hashbrown::HashMap<B, V>,
}

impl<B: Buzzer, V> BuzzerMap<B, V> {
    pub fn new() -> Self {
        Self {
            map: hashbrown::HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, buzzer: B) -> Option<&V> {
        self.map.get(&buzzer)
    }

    pub fn get_mut(&mut self, buzzer: B) -> Option<&mut V> {
        self.map.get_mut(&buzzer)
    }

    /// Insert a value, returning the value previously stored under the same buzzer (possibly by
    /// an earlier holder of that buzzer).
    pub fn insert(&mut self, buzzer: B, value: V) -> Option<V> {
        self.map.insert(buzzer, value)
    }

    pub fn remove(&mut self, buzzer: B) -> Option<V> {
        self.map.remove(&buzzer)
    }

    /// Drop every entry whose buzzer isn't currently in line.
    pub fn vacuum(&mut self, queue: &ServiceQueue<B>) {
        self.map.retain(|&buzzer, _value| queue.contains(buzzer));
    }
}

impl<B: Buzzer, V> Default for BuzzerMap<B, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Buzzer, V> std::ops::Index<B> for BuzzerMap<B, V> {
    type Output = V;

    fn index(&self, buzzer: B) -> &V {
        self.get(buzzer).unwrap()
    }
}

impl<B: Buzzer, V> std::ops::IndexMut<B> for BuzzerMap<B, V> {
    fn index_mut(&mut self, buzzer: B) -> &mut V {
        self.get_mut(buzzer).unwrap()
    }
}
