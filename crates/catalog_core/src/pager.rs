use crate::{Game, GameFilter};

/// Grid page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Filter and pagination state over the full result set.
///
/// The page size is fixed at construction. Pages are 1-based and always
/// within `1..=total_pages()`, and `total_pages()` is at least 1 even for an
/// empty subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
    games: Vec<Game>,
    filter: GameFilter,
    /// Indices into `games` that pass `filter`, in result-set order.
    subset: Vec<usize>,
    page: usize,
    page_size: usize,
}

/// One window of the filtered subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub games: Vec<&'a Game>,
    pub number: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            games: Vec::new(),
            filter: GameFilter::All,
            subset: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the full result set, re-applies the active filter and returns
    /// to page 1.
    pub fn set_games(&mut self, games: Vec<Game>) {
        self.games = games;
        self.refilter();
    }

    /// Replaces the active filter and returns to page 1.
    pub fn set_filter(&mut self, filter: GameFilter) {
        self.filter = filter;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.subset = self
            .games
            .iter()
            .enumerate()
            .filter(|(_, game)| self.filter.matches(game))
            .map(|(index, _)| index)
            .collect();
        self.page = 1;
    }

    /// Advances one page. Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page >= self.total_pages() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Goes back one page. Returns `false` when already on page 1.
    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn current_page(&self) -> Page<'_> {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.subset.len());
        let games = self
            .subset
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|&index| &self.games[index])
            .collect();
        Page {
            games,
            number: self.page,
            total_pages: self.total_pages(),
            total_count: self.total_count(),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.subset.len().div_ceil(self.page_size).max(1)
    }

    pub fn total_count(&self) -> usize {
        self.subset.len()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter(&self) -> &GameFilter {
        &self.filter
    }

    /// The full, unfiltered result set.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn find(&self, slug: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.slug == slug)
    }

    /// `"Page X / Y (Z total)"`.
    pub fn summary(&self) -> String {
        format!(
            "Page {} / {} ({} total)",
            self.page,
            self.total_pages(),
            self.total_count()
        )
    }
}
