// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequential or data-parallel execution of one algorithm body.
//!
//! Removal, matching and ranking are each written once against the
//! primitives below. The caller picks an [`ExecutionPolicy`] per call and the
//! primitives either walk the slice in order or hand it to rayon. The set of
//! results is the same either way; `filter` and `map` also keep input order.
//!
//! Without the `parallel` feature, [`ExecutionPolicy::Parallel`] runs
//! sequentially.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How a call distributes its independent sub-steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionPolicy {
    /// Everything on the calling thread, in order.
    #[default]
    Sequential,
    /// Independent sub-steps on the rayon pool.
    Parallel,
}

impl ExecutionPolicy {
    /// Apply `f` to every element. Each element is visited by exactly one task.
    pub fn for_each_mut<T, F>(self, items: &mut [T], f: F)
    where
        T: Send,
        F: Fn(&mut T) + Sync + Send,
    {
        match self {
            #[cfg(feature = "parallel")]
            ExecutionPolicy::Parallel => items.par_iter_mut().for_each(f),
            _ => items.iter_mut().for_each(f),
        }
    }

    /// True if `pred` holds for any element.
    pub fn any<T, F>(self, items: &[T], pred: F) -> bool
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync + Send,
    {
        match self {
            #[cfg(feature = "parallel")]
            ExecutionPolicy::Parallel => items.par_iter().any(pred),
            _ => items.iter().any(pred),
        }
    }

    /// Elements satisfying `pred`, in input order.
    pub fn filter<T, F>(self, items: &[T], pred: F) -> Vec<T>
    where
        T: Copy + Send + Sync,
        F: Fn(&T) -> bool + Sync + Send,
    {
        match self {
            #[cfg(feature = "parallel")]
            ExecutionPolicy::Parallel => {
                items.par_iter().filter(|item| pred(item)).copied().collect()
            }
            _ => items.iter().filter(|item| pred(item)).copied().collect(),
        }
    }

    /// `f` applied to every element, in input order.
    pub fn map<T, U, F>(self, items: &[T], f: F) -> Vec<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        match self {
            #[cfg(feature = "parallel")]
            ExecutionPolicy::Parallel => items.par_iter().map(f).collect(),
            _ => items.iter().map(f).collect(),
        }
    }
}
