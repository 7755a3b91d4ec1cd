//! Injected allocators.
//!
//! Every piece of storage the manager acquires (a node slot, a bucket array) is first
//! requested from its [`Allocator`], and every release is reported back with exactly the
//! byte count that was requested. The memory itself lives in the manager's vectors; the
//! allocator decides whether a request may proceed and keeps whatever accounting it likes.

use std::fmt;

/// The allocator refused a request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("allocator refused a request of {bytes} bytes")]
pub struct AllocError {
    pub bytes: usize,
}

pub trait Allocator {
    /// Account for `bytes` more bytes, or refuse the request.
    fn allocate(&mut self, bytes: usize) -> Result<(), AllocError>;

    /// Release `bytes` bytes previously obtained with a request of exactly that size.
    fn deallocate(&mut self, bytes: usize);
}

impl<A: Allocator + ?Sized> Allocator for &mut A {
    fn allocate(&mut self, bytes: usize) -> Result<(), AllocError> {
        (**self).allocate(bytes)
    }

    fn deallocate(&mut self, bytes: usize) {
        (**self).deallocate(bytes)
    }
}

/// Never refuses a request and keeps no accounting.
///
/// The storage itself lives in the manager's vectors.
#[derive(Debug, Default, Copy, Clone)]
pub struct HeapAllocator;

impl Allocator for HeapAllocator {
    fn allocate(&mut self, _bytes: usize) -> Result<(), AllocError> {
        Ok(())
    }

    fn deallocate(&mut self, _bytes: usize) {}
}

/// Tracks live and peak usage, with an optional upper bound.
#[derive(Default, Clone)]
pub struct CountingAllocator {
    live: usize,
    peak: usize,
    allocations: usize,
    deallocations: usize,
    limit: Option<usize>,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator that refuses to go above `limit` live bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Number of bytes currently handed out.
    pub fn live_bytes(&self) -> usize {
        self.live
    }

    /// Largest number of bytes handed out at once.
    pub fn peak_bytes(&self) -> usize {
        self.peak
    }

    /// Number of successful requests.
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    pub fn deallocations(&self) -> usize {
        self.deallocations
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl Allocator for CountingAllocator {
    fn allocate(&mut self, bytes: usize) -> Result<(), AllocError> {
        let live = self.live.checked_add(bytes).ok_or(AllocError { bytes })?;
        if self.limit.is_some_and(|limit| live > limit) {
            return Err(AllocError { bytes });
        }
        self.live = live;
        self.peak = self.peak.max(live);
        self.allocations += 1;
        Ok(())
    }

    fn deallocate(&mut self, bytes: usize) {
        assert!(
            bytes <= self.live,
            "Releasing {} bytes but only {} are live",
            bytes,
            self.live
        );
        self.live -= bytes;
        self.deallocations += 1;
    }
}

impl fmt::Debug for CountingAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingAllocator")
            .field("live", &self.live)
            .field("peak", &self.peak)
            .field("allocations", &self.allocations)
            .field("deallocations", &self.deallocations)
            .field("limit", &self.limit)
            .finish()
    }
}
