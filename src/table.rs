//! Unique (hash-consing) table.
//!
//! Values live in a slot arena; slot indices never change while a value is stored, so they
//! can be handed out as node identities. Lookup goes through chained buckets whose heads and
//! links are slot indices. Slot 0 is a reserved sentinel: it is never part of a chain, and
//! `0` doubles as the end-of-chain marker.

use std::ops::{Index, IndexMut};

use log::debug;

use crate::utils::MyHash;

/// A value that carries its own lookup key.
pub trait Keyed {
    type Key: MyHash + Eq;

    fn key(&self) -> Self::Key;
}

#[derive(Clone)]
struct Entry<T> {
    value: T,
    next: u32,
    occupied: bool,
}

impl<T> Entry<T> {
    /// Create a new cell with the given value.
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: 0,
            occupied: false,
        }
    }
}

pub struct Table<T> {
    data: Vec<Entry<T>>,
    buckets: Vec<u32>,
    /// Vacated slots, reused before the arena grows.
    free: Vec<u32>,
    /// Number of values linked into buckets.
    len: usize,
}

impl<T> Table<T> {
    /// Create an empty table with `sentinel` stored in slot 0.
    pub fn new(sentinel: T) -> Self {
        let mut entry = Entry::new(sentinel);
        entry.occupied = true;
        Self {
            data: vec![entry],
            buckets: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Reserve arena room for `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Number of buckets (always zero or a power of two).
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
    /// Number of stored values, the sentinel excluded.
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Number of slots in the arena, the sentinel and vacated slots included.
    pub fn slots(&self) -> usize {
        self.data.len()
    }

    /// Whether the next insertion must be preceded by [`Table::enlarge`].
    pub fn is_full(&self) -> bool {
        self.len >= self.buckets.len()
    }

    /// Check if the slot at the given index holds a value.
    pub fn is_occupied(&self, index: u32) -> bool {
        self.data.get(index as usize).is_some_and(|e| e.occupied)
    }

    /// Get the reference to the value at the given index.
    pub fn value(&self, index: u32) -> &T {
        let entry = &self.data[index as usize];
        assert!(entry.occupied, "Slot {} is not occupied", index);
        &entry.value
    }
    /// Get the mutable reference to the value at the given index.
    pub fn value_mut(&mut self, index: u32) -> &mut T {
        let entry = &mut self.data[index as usize];
        assert!(entry.occupied, "Slot {} is not occupied", index);
        &mut entry.value
    }

    /// Iterate over the indices of all stored values, the sentinel excluded.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.data
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, e)| e.occupied)
            .map(|(i, _)| i as u32)
    }

    /// Drop every value and every bucket, keeping the sentinel in place.
    pub fn clear(&mut self) {
        self.data.truncate(1);
        self.buckets = Vec::new();
        self.free.clear();
        self.len = 0;
    }

    fn alloc(&mut self, value: T) -> u32 {
        if let Some(index) = self.free.pop() {
            let entry = &mut self.data[index as usize];
            debug_assert!(!entry.occupied);
            *entry = Entry::new(value);
            entry.occupied = true;
            index
        } else {
            let index = self.data.len() as u32;
            let mut entry = Entry::new(value);
            entry.occupied = true;
            self.data.push(entry);
            index
        }
    }
}

impl<T> Table<T>
where
    T: Keyed,
{
    fn bucket_index(&self, key: &T::Key) -> usize {
        debug_assert!(self.buckets.len().is_power_of_two());
        (key.hash() & (self.buckets.len() as u64 - 1)) as usize
    }

    /// Double the number of buckets and redistribute every stored value.
    ///
    /// Slot indices are preserved; only chain membership changes.
    pub fn enlarge(&mut self) {
        let new_capacity = if self.buckets.is_empty() { 1 } else { 2 * self.buckets.len() };
        debug!("enlarge: {} -> {} buckets ({} values)", self.buckets.len(), new_capacity, self.len);

        let old_buckets = std::mem::replace(&mut self.buckets, vec![0; new_capacity]);
        for head in old_buckets {
            let mut index = head;
            while index != 0 {
                let next = self.data[index as usize].next;
                let b = self.bucket_index(&self.data[index as usize].value.key());
                self.data[index as usize].next = self.buckets[b];
                self.buckets[b] = index;
                index = next;
            }
        }
    }

    /// Find the slot holding a value with the given key.
    pub fn find(&self, key: &T::Key) -> Option<u32> {
        if self.buckets.is_empty() {
            return None;
        }
        let mut index = self.buckets[self.bucket_index(key)];
        while index != 0 {
            let entry = &self.data[index as usize];
            if &entry.value.key() == key {
                return Some(index);
            }
            index = entry.next;
        }
        None
    }

    /// Store a value whose key is not yet present and return its slot index.
    ///
    /// The caller is responsible for enlarging a full table first.
    pub fn insert(&mut self, value: T) -> u32 {
        assert!(!self.buckets.is_empty(), "Table has no buckets");
        debug_assert!(self.find(&value.key()).is_none(), "Key is already present");

        let b = self.bucket_index(&value.key());
        let index = self.alloc(value);
        self.data[index as usize].next = self.buckets[b];
        self.buckets[b] = index;
        self.len += 1;
        index
    }

    /// Unlink the value at the given slot from its chain and vacate the slot.
    pub fn remove(&mut self, index: u32) -> T
    where
        T: Copy,
    {
        assert_ne!(index, 0, "Sentinel slot cannot be removed");
        let value = *self.value(index);
        let b = self.bucket_index(&value.key());

        let next = self.data[index as usize].next;
        if self.buckets[b] == index {
            self.buckets[b] = next;
        } else {
            let mut prev = self.buckets[b];
            loop {
                assert_ne!(prev, 0, "Slot {} is not linked into its bucket", index);
                let after = self.data[prev as usize].next;
                if after == index {
                    self.data[prev as usize].next = next;
                    break;
                }
                prev = after;
            }
        }

        let entry = &mut self.data[index as usize];
        entry.occupied = false;
        entry.next = 0;
        self.free.push(index);
        self.len -= 1;
        value
    }
}

impl<T> Index<u32> for Table<T> {
    type Output = T;

    fn index(&self, index: u32) -> &Self::Output {
        self.value(index)
    }
}

impl<T> IndexMut<u32> for Table<T> {
    fn index_mut(&mut self, index: u32) -> &mut Self::Output {
        self.value_mut(index)
    }
}
