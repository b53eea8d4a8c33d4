//! Scroll-driven pagination over the directory

use pokedex_common::DirectoryEntry;

/// Scroll geometry of the listing surface, in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub scroll_top: u32,
    pub client_height: u32,
    pub scroll_height: u32,
}

impl ScrollMetrics {
    /// True only when the viewport sits exactly on the bottom edge.
    /// There is no tolerance: one pixel short is not the bottom.
    pub fn at_bottom(&self) -> bool {
        u64::from(self.scroll_top) + u64::from(self.client_height)
            == u64::from(self.scroll_height)
    }
}

/// Running offset of the last page revealed by scrolling.
///
/// Offset 0 is the initial page. Each extension moves forward by one page and
/// the offset never goes back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollCursor {
    offset: usize,
}

impl ScrollCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Advance by `page_size` and return the page starting at the new offset.
    ///
    /// Past the end of the directory the page is empty, but the cursor still
    /// advances.
    pub fn extend<'a>(
        &mut self,
        directory: &'a [DirectoryEntry],
        page_size: usize,
    ) -> &'a [DirectoryEntry] {
        self.offset = self.offset.saturating_add(page_size);

        let start = self.offset.min(directory.len());
        let end = self.offset.saturating_add(page_size).min(directory.len());
        &directory[start..end]
    }
}
