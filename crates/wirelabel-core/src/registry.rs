//! Registry handing out one shared mapper per enum type.
//!
//! # Design
//! - The registry is an ordinary value owned by the serialization setup and
//!   passed by reference; there is no process-wide cache.
//! - Mappers are stored type-erased and keyed by `TypeId`, so each enum gets
//!   its own independent tables.
//! - The lock guards only mapper discovery. Conversions go through the
//!   returned `Arc<LabelMapper<E>>` and never touch it.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::config::MapperConfig;
use crate::mapper::LabelMapper;
use crate::member::LabeledEnum;

type ErasedMapper = Arc<dyn Any + Send + Sync>;

fn typed<E: LabeledEnum>(erased: ErasedMapper) -> Option<Arc<LabelMapper<E>>> {
    erased.downcast::<LabelMapper<E>>().ok()
}

/// Owner of every [`LabelMapper`] created under one configuration.
#[derive(Debug, Default)]
pub struct LabelRegistry {
    config: MapperConfig,
    mappers: RwLock<HashMap<TypeId, ErasedMapper>>,
}

impl LabelRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        Self {
            config,
            mappers: RwLock::new(HashMap::new()),
        }
    }

    /// Configuration applied to mappers created by this registry.
    #[must_use]
    pub const fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Shared mapper for `E`, created on the first request.
    ///
    /// Every call for the same `E` returns the same instance, so its tables are
    /// built once no matter how many callers race here.
    #[must_use]
    pub fn mapper<E: LabeledEnum>(&self) -> Arc<LabelMapper<E>> {
        let key = TypeId::of::<E>();
        let existing = self
            .mappers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .and_then(typed::<E>);
        if let Some(mapper) = existing {
            return mapper;
        }

        let mut mappers = self
            .mappers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another caller may have registered `E` between the two locks.
        if let Some(mapper) = mappers.get(&key).cloned().and_then(typed::<E>) {
            return mapper;
        }
        let mapper = Arc::new(LabelMapper::<E>::new(self.config.decode_policy));
        mappers.insert(key, Arc::clone(&mapper) as ErasedMapper);
        debug!(
            enum_name = E::NAME,
            policy = self.config.decode_policy.as_str(),
            "registered label mapper"
        );
        mapper
    }

    /// Whether a mapper for `E` has been requested yet.
    #[must_use]
    pub fn contains<E: LabeledEnum>(&self) -> bool {
        self.mappers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<E>())
    }

    /// Number of enum types with a registered mapper.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no mapper has been requested yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
