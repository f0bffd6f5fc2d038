//! Pagination state management for the posts feed

/// Offset/limit paging cursor with an in-flight flag and a fetch generation
///
/// The generation identifies the current paginated sequence. It changes on
/// every reset so responses issued before the reset can be recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    offset: usize,
    page_size: usize,
    loading: bool,
    generation: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(20)
    }
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size,
            loading: false,
            generation: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if a page request is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Move past the page that was just received
    pub fn advance(&mut self) {
        self.offset += self.page_size;
    }

    /// Start a new paginated sequence from offset 0
    pub fn reset(&mut self) {
        self.offset = 0;
        self.generation += 1;
    }

    /// Whether a response tagged with `generation` belongs to the current sequence
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}
