//! Aligned block allocation
//!
//! All pixel and kernel storage in rasterkit lives in [`AlignedBlock`]s:
//! single 16-byte-aligned heap allocations that are rounded up to a
//! 16-byte boundary and then extended by one additional full vector unit.
//! The trailing slack lets fixed-width vector loads and stores overrun the
//! logical data by up to 15 bytes without touching adjacent heap memory.
//!
//! Blocks are zero-filled on allocation, so reads into the slack region are
//! always defined. Memory is released when the block is dropped.

use crate::error::{Error, Result};
use std::alloc::{Layout, alloc_zeroed, dealloc};
use std::ptr::NonNull;

/// Width in bytes of the widest vector operation the library performs.
pub const VEC_BYTES: usize = 16;

/// Round `size` up to the next multiple of [`VEC_BYTES`].
#[inline]
pub const fn align_up(size: usize) -> usize {
    (size + VEC_BYTES - 1) & !(VEC_BYTES - 1)
}

/// An owned, zero-filled, 16-byte-aligned heap block with trailing padding.
///
/// The allocated length is `align_up(size) + VEC_BYTES`, which always leaves
/// at least one full vector unit of slack past the requested size.
#[derive(Debug)]
pub struct AlignedBlock {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl AlignedBlock {
    /// Allocate a block large enough for `size` logical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the size overflows or the
    /// underlying allocator cannot satisfy the request.
    pub fn new(size: usize) -> Result<Self> {
        let padded = size
            .checked_add(VEC_BYTES - 1)
            .map(|s| s & !(VEC_BYTES - 1))
            .and_then(|s| s.checked_add(VEC_BYTES))
            .ok_or(Error::AllocationFailed)?;
        let layout =
            Layout::from_size_align(padded, VEC_BYTES).map_err(|_| Error::AllocationFailed)?;
        // SAFETY: layout has non-zero size (padded >= VEC_BYTES).
        let raw = unsafe { alloc_zeroed(layout) };
        match NonNull::new(raw) {
            Some(ptr) => Ok(AlignedBlock { ptr, layout }),
            None => Err(Error::AllocationFailed),
        }
    }

    /// Total allocated length in bytes, padding included.
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.size()
    }

    /// Whether the block is empty (never true; the minimum block is one
    /// vector unit).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.size() == 0
    }

    /// View the whole block, padding included.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr covers layout.size() initialized bytes.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.layout.size()) }
    }

    /// Mutable view of the whole block, padding included.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: ptr covers layout.size() initialized bytes, uniquely owned.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.layout.size()) }
    }
}

impl Drop for AlignedBlock {
    fn drop(&mut self) {
        // SAFETY: ptr was allocated with exactly this layout.
        unsafe { dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

// The block is a plain owned byte region.
unsafe impl Send for AlignedBlock {}
unsafe impl Sync for AlignedBlock {}
