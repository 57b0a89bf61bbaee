//! Common test utilities for integration tests
//!
//! Provides a scripted `BreedFetcher` whose answers can change between calls,
//! which the fixed in-memory catalog cannot express.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use breed_catalog::{BreedError, BreedFetcher, BreedResult, SubBreeds};

/// Build a sub-breed list from string literals.
pub fn subs(names: &[&str]) -> SubBreeds {
    names.iter().copied().collect()
}

/// A delegate that replays queued answers per breed.
///
/// Each breed has a queue of results; every call consumes the front entry
/// until one is left, which is then repeated. Breeds without a script fail
/// with `BreedNotFound`.
#[derive(Default)]
pub struct ScriptedFetcher {
    scripts: Mutex<HashMap<String, VecDeque<BreedResult<SubBreeds>>>>,
    requested: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for `breed`, matched exactly as the delegate receives it.
    pub fn script(self, breed: &str, answers: Vec<BreedResult<SubBreeds>>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(breed.to_string(), answers.into());
        self
    }

    /// Always answer `breed` with `names`.
    pub fn always(self, breed: &str, names: &[&str]) -> Self {
        self.script(breed, vec![Ok(subs(names))])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl BreedFetcher for ScriptedFetcher {
    async fn sub_breeds(&self, breed: &str) -> BreedResult<SubBreeds> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(breed.to_string());

        let mut scripts = self.scripts.lock().unwrap();
        match scripts.get_mut(breed) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(BreedError::not_found(breed))),
            None => Err(BreedError::not_found(breed)),
        }
    }
}
