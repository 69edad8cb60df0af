use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::config::Config;
use crate::hash::Hash;
use crate::hasher::Hasher;

/// A thread-safe pool of [`Hasher`] workspaces.
///
/// Each [`PooledHasher`] guard owns its workspace exclusively until it is dropped, at which point
/// the workspace goes back to the pool unless the pool already holds `pool_size` idle ones.
#[derive(Debug, Default)]
pub struct HasherPool {
    config: Config,
    idle: Mutex<Vec<Hasher>>,
}

/// A [`Hasher`] borrowed from a [`HasherPool`].
pub struct PooledHasher<'p> {
    pool: &'p HasherPool,
    hasher: Option<Hasher>,
}

impl HasherPool {
    pub fn new(config: Config) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(config.pool_size)),
            config,
        }
    }

    /// Take a workspace out of the pool, or create a new one if none is idle.
    pub fn get(&self) -> PooledHasher<'_> {
        let hasher = self.idle.lock().pop().unwrap_or_else(|| {
            debug!("allocating a new hasher workspace");
            Hasher::with_config(self.config.clone())
        });
        PooledHasher {
            pool: self,
            hasher: Some(hasher),
        }
    }

    /// Hash the input with a pooled workspace.
    pub fn hash(&self, input: &[u8]) -> Hash {
        self.get().hash(input)
    }

    /// Returns the number of idle workspaces currently in the pool.
    pub fn idle_len(&self) -> usize {
        self.idle.lock().len()
    }

    fn put(&self, hasher: Hasher) {
        let mut idle = self.idle.lock();
        if idle.len() < self.config.pool_size {
            idle.push(hasher);
        } else {
            trace!("pool is full, dropping hasher workspace");
        }
    }
}

impl Deref for PooledHasher<'_> {
    type Target = Hasher;

    fn deref(&self) -> &Self::Target {
        self.hasher.as_ref().expect("hasher is only taken on drop")
    }
}

impl DerefMut for PooledHasher<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.hasher.as_mut().expect("hasher is only taken on drop")
    }
}

impl Drop for PooledHasher<'_> {
    fn drop(&mut self) {
        if let Some(hasher) = self.hasher.take() {
            self.pool.put(hasher);
        }
    }
}
