//! Block pagination.
//!
//! Page numbers are grouped into fixed-size blocks (1-10, 11-20, ...). Only
//! the block holding the current page is shown, together with first/last,
//! previous/next and previous-block/next-block controls.

use serde::Serialize;
use std::ops::RangeInclusive;

/// Number of page buttons shown at once.
pub const DEFAULT_BLOCK_SIZE: u32 = 10;

/// A navigation control: where it leads and whether it can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavButton {
    pub target: u32,
    pub enabled: bool,
}

impl NavButton {
    fn new(target: u32, enabled: bool) -> Self {
        Self { target, enabled }
    }

    /// Target page if the control is enabled.
    pub fn page(&self) -> Option<u32> {
        self.enabled.then_some(self.target)
    }
}

/// The page block around the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageBlock {
    current: u32,
    total_pages: u32,
    block_size: u32,
    block_index: u32,
    start: u32,
    end: u32,
}

impl PageBlock {
    /// Compute the block for `current` out of `total_pages`.
    ///
    /// `total_pages` of 0 counts as 1 and `current` is clamped into range.
    pub fn new(current: u32, total_pages: u32, block_size: u32) -> Self {
        let total_pages = total_pages.max(1);
        let block_size = block_size.max(1);
        let current = current.clamp(1, total_pages);

        let block_index = (current - 1) / block_size;
        let start = block_index * block_size + 1;
        let end = start.saturating_add(block_size - 1).min(total_pages);

        Self {
            current,
            total_pages,
            block_size,
            block_index,
            start,
            end,
        }
    }

    /// Block with the default size of ten.
    pub fn with_default_size(current: u32, total_pages: u32) -> Self {
        Self::new(current, total_pages, DEFAULT_BLOCK_SIZE)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Zero-based index of this block.
    pub fn block_index(&self) -> u32 {
        self.block_index
    }

    /// First page of the block.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last page of the block.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Page buttons of this block.
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn has_previous_block(&self) -> bool {
        self.block_index > 0
    }

    pub fn has_next_block(&self) -> bool {
        self.end < self.total_pages
    }

    /// Jump to page 1.
    pub fn first(&self) -> NavButton {
        NavButton::new(1, self.current != 1)
    }

    /// Jump to the first page of the previous block (page 1 when there is none).
    pub fn previous_block(&self) -> NavButton {
        let target = if self.has_previous_block() {
            (self.block_index - 1) * self.block_size + 1
        } else {
            1
        };
        NavButton::new(target, self.current != 1)
    }

    pub fn previous(&self) -> NavButton {
        NavButton::new(self.current.saturating_sub(1).max(1), self.current > 1)
    }

    pub fn next(&self) -> NavButton {
        NavButton::new(
            self.current.saturating_add(1).min(self.total_pages),
            self.current < self.total_pages,
        )
    }

    /// Jump to the first page of the next block (last page when there is none).
    pub fn next_block(&self) -> NavButton {
        let target = if self.has_next_block() {
            self.end.saturating_add(1)
        } else {
            self.total_pages
        };
        NavButton::new(target, self.has_next_block())
    }

    /// Jump to the last page.
    pub fn last(&self) -> NavButton {
        NavButton::new(self.total_pages, self.has_next_block())
    }
}
