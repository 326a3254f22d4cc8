//! Harness for racing many threads on a mapper's first use.

use std::ptr;
use std::sync::{Arc, Barrier};
use std::thread;

use anyhow::{Result, anyhow};
use wirelabel_core::{LabelMap, LabelMapper, LabelRegistry, LabeledEnum};

/// What one racing thread saw when it first touched the mapper.
#[derive(Debug, Clone)]
pub struct Observation<E: LabeledEnum> {
    /// Address of the table instance returned to this thread.
    pub address: usize,
    /// Copy of the tables as observed by this thread.
    pub map: LabelMap<E>,
}

/// Release `threads` threads at once against `mapper` and collect what each
/// one observed from `maps()`.
///
/// # Errors
///
/// Returns an error if any racing thread panicked.
pub fn race_first_use<E: LabeledEnum>(
    mapper: &LabelMapper<E>,
    threads: usize,
) -> Result<Vec<Observation<E>>> {
    let barrier = &Barrier::new(threads);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(move || {
                    barrier.wait();
                    let maps = mapper.maps();
                    Observation {
                        address: ptr::from_ref(maps).addr(),
                        map: maps.clone(),
                    }
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| anyhow!("racing thread panicked"))
            })
            .collect()
    })
}

/// Release `threads` threads at once asking `registry` for the mapper of `E`,
/// each encoding every member through it.
///
/// # Errors
///
/// Returns an error if any racing thread panicked.
pub fn race_registry<E: LabeledEnum>(
    registry: &LabelRegistry,
    threads: usize,
) -> Result<Vec<Arc<LabelMapper<E>>>> {
    let barrier = &Barrier::new(threads);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(move || {
                    barrier.wait();
                    let mapper = registry.mapper::<E>();
                    for member in E::members() {
                        let _ = mapper.encode(member.value);
                    }
                    mapper
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| anyhow!("racing thread panicked"))
            })
            .collect()
    })
}

/// Whether every observation refers to one table instance with equal contents.
#[must_use]
pub fn all_identical<E: LabeledEnum>(observations: &[Observation<E>]) -> bool {
    observations.windows(2).all(|pair| {
        pair[0].address == pair[1].address && pair[0].map == pair[1].map
    })
}
