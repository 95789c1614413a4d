// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node and arc identifiers, and the allocator that issues them.
//!
//! Identifiers are plain integers wrapped in newtypes. A graph hands them out
//! in strictly increasing order and never reuses one, so a handle kept after
//! its entity was deleted fails every lookup instead of aliasing a newer
//! entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Common behaviour of [`NodeId`] and [`ArcId`].
pub trait Identifier: Copy + Eq + Ord + fmt::Debug + fmt::Display {
    /// The "no identifier" sentinel. Never issued by an allocator.
    const NONE: Self;

    /// Wrap a raw integer.
    fn from_raw(raw: u64) -> Self;

    /// The raw integer value.
    fn raw(self) -> u64;

    /// Whether this is the [`Identifier::NONE`] sentinel.
    fn is_none(self) -> bool {
        self == Self::NONE
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// The "no identifier" sentinel.
            pub const NONE: Self = Self(u64::MAX);

            /// Wrap a raw integer.
            ///
            /// Forging an identifier is allowed; looking it up in a graph
            /// that never issued it simply fails.
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// The raw integer value.
            pub const fn raw(self) -> u64 {
                self.0
            }

            /// Whether this is the sentinel
            pub const fn is_none(self) -> bool {
                self.0 == u64::MAX
            }
        }

        impl Identifier for $name {
            const NONE: Self = $name::NONE;

            fn from_raw(raw: u64) -> Self {
                $name::from_raw(raw)
            }

            fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a node within one graph
    NodeId
);

define_id!(
    /// Unique identifier for an arc within one graph
    ArcId
);

/// Issues fresh identifiers of one category.
///
/// Every call to [`IdAllocator::next`] returns a value strictly greater than
/// all previous ones. Nodes and arcs use separate allocators.
#[derive(Debug, Clone)]
pub struct IdAllocator<I> {
    next: u64,
    _marker: PhantomData<I>,
}

impl<I: Identifier> IdAllocator<I> {
    /// Create an allocator whose first identifier is `0`
    pub const fn new() -> Self {
        Self {
            next: 0,
            _marker: PhantomData,
        }
    }

    /// The identifier the next call to [`IdAllocator::next`] will return
    pub fn peek(&self) -> I {
        I::from_raw(self.next)
    }

    /// Allocate a fresh identifier.
    ///
    /// # Panics
    ///
    /// Panics if the counter reaches the sentinel value.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> I {
        let id = I::from_raw(self.next);
        if id.is_none() {
            crate::graph::invariant_violation(format_args!(
                "identifier space exhausted at {id}"
            ));
        }
        self.next += 1;
        id
    }
}

impl<I: Identifier> Default for IdAllocator<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_is_strictly_increasing() {
        let mut alloc = IdAllocator::<NodeId>::new();
        let first = alloc.next();
        let second = alloc.next();
        let third = alloc.next();

        assert_eq!(first, NodeId::from_raw(0));
        assert!(first < second && second < third);
        assert_eq!(alloc.peek(), NodeId::from_raw(3));
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut nodes = IdAllocator::<NodeId>::new();
        let mut arcs = IdAllocator::<ArcId>::new();
        nodes.next();
        nodes.next();

        assert_eq!(arcs.next(), ArcId::from_raw(0));
        assert_eq!(nodes.next(), NodeId::from_raw(2));
    }

    #[test]
    fn test_sentinel() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::from_raw(0).is_none());
        assert_eq!(ArcId::NONE.raw(), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "identifier space exhausted")]
    fn test_exhaustion_panics() {
        let mut alloc = IdAllocator::<ArcId> {
            next: u64::MAX,
            _marker: PhantomData,
        };
        alloc.next();
    }

    #[test]
    fn test_display_and_serde_are_bare_integers() {
        let id = NodeId::from_raw(17);
        assert_eq!(id.to_string(), "17");
        assert_eq!(serde_json::to_string(&id).unwrap(), "17");
        let back: NodeId = serde_json::from_str("17").unwrap();
        assert_eq!(back, id);
    }
}
