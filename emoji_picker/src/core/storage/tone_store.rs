// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::GlyphKey;
use std::{collections::HashMap,
          sync::{Arc, Mutex, MutexGuard}};

/// Key/value collaborator that remembers one integer (an encoded [`crate::SkinTone`])
/// per glyph. Implementations must not fail loudly: a store that can't read returns
/// [None], and a store that can't write drops the value.
///
/// - [`InMemoryToneStore`]: tests, and hosts that don't persist tones.
/// - [`crate::KvToneStore`]: persisted to disk.
/// - [`SharedToneStore`]: wrap any store to use it from many threads.
pub trait ToneStore {
    fn get(&self, key: &GlyphKey) -> Option<i64>;
    fn set(&mut self, key: &GlyphKey, value: i64);
}

impl<S: ToneStore + ?Sized> ToneStore for &mut S {
    fn get(&self, key: &GlyphKey) -> Option<i64> { (**self).get(key) }

    fn set(&mut self, key: &GlyphKey, value: i64) { (**self).set(key, value); }
}

impl<S: ToneStore + ?Sized> ToneStore for Box<S> {
    fn get(&self, key: &GlyphKey) -> Option<i64> { (**self).get(key) }

    fn set(&mut self, key: &GlyphKey, value: i64) { (**self).set(key, value); }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InMemoryToneStore {
    pub inner: HashMap<GlyphKey, i64>,
}

impl ToneStore for InMemoryToneStore {
    fn get(&self, key: &GlyphKey) -> Option<i64> { self.inner.get(key).copied() }

    fn set(&mut self, key: &GlyphKey, value: i64) { self.inner.insert(key.clone(), value); }
}

/// One global lock around every read and write of the wrapped store. Clones share the
/// same store. A panic while the lock was held does not poison the tones, the lock is
/// simply taken over.
#[derive(Debug, Default)]
pub struct SharedToneStore<S: ToneStore> {
    inner: Arc<Mutex<S>>,
}

impl<S: ToneStore> Clone for SharedToneStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ToneStore> SharedToneStore<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<S: ToneStore> ToneStore for SharedToneStore<S> {
    fn get(&self, key: &GlyphKey) -> Option<i64> { self.lock().get(key) }

    fn set(&mut self, key: &GlyphKey, value: i64) { self.lock().set(key, value); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::thread;

    fn key(code_points: &[u32]) -> GlyphKey { GlyphKey::from(code_points) }

    #[test]
    fn test_in_memory_store() {
        let mut store = InMemoryToneStore::default();
        assert_eq!(store.get(&key(&[0x1F44D])), None);

        store.set(&key(&[0x1F44D]), 4);
        assert_eq!(store.get(&key(&[0x1F44D])), Some(4));

        store.set(&key(&[0x1F44D]), 1);
        assert_eq!(store.get(&key(&[0x1F44D])), Some(1));
        assert_eq!(store.get(&key(&[0x1F44E])), None);
    }

    #[test]
    fn test_boxed_and_borrowed_stores_forward() {
        fn write_through<S: ToneStore>(mut store: S) { store.set(&key(&[0x1F44B]), 2); }

        let mut store = InMemoryToneStore::default();
        write_through(&mut store);
        assert_eq!(store.get(&key(&[0x1F44B])), Some(2));

        let mut boxed: Box<dyn ToneStore> = Box::new(store);
        boxed.set(&key(&[0x1F44C]), 3);
        assert_eq!(boxed.get(&key(&[0x1F44C])), Some(3));
        assert_eq!(boxed.get(&key(&[0x1F44B])), Some(2));
    }

    #[test]
    fn test_shared_store_across_threads() {
        let shared = SharedToneStore::new(InMemoryToneStore::default());

        let handles: Vec<_> = (0..8_u32)
            .map(|offset| {
                let mut it = shared.clone();
                thread::spawn(move || it.set(&key(&[0x1F44B + offset]), 2))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for offset in 0..8_u32 {
            assert_eq!(shared.get(&key(&[0x1F44B + offset])), Some(2));
        }
    }
}
