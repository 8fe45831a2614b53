//! Filtered rotating selection over a static item collection

use super::cursor::{Navigation, OutOfRangeError};
use super::filter::{matches, Category, MatchMode, SelectorItem};

/// Construction-time behavior of a [`Selector`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Categories offered as filters, in display order
    pub categories: Vec<Category>,
    pub match_mode: MatchMode,
    pub navigation: Navigation,
}

impl SelectorConfig {
    /// A selector with no filter choices besides `All`
    pub fn unfiltered(navigation: Navigation) -> Self {
        Self {
            categories: vec![Category::All],
            match_mode: MatchMode::Exact,
            navigation,
        }
    }
}

/// Immutable view of a selector, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorSnapshot {
    pub category: Category,
    pub cursor: usize,
    pub visible_len: usize,
}

/// Holds the items, the active category and a cursor into the visible subset.
///
/// The visible subset is recomputed from the items on every read. The cursor
/// is reset whenever the category or the collection changes, so it always
/// indexes the current subset.
#[derive(Debug, Clone)]
pub struct Selector<T> {
    items: Vec<T>,
    config: SelectorConfig,
    active_category: Category,
    cursor: usize,
}

impl<T: SelectorItem> Selector<T> {
    pub fn new(items: Vec<T>, config: SelectorConfig) -> Self {
        Self {
            items,
            config,
            active_category: Category::All,
            cursor: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.config.categories
    }

    #[cfg(test)]
    pub fn match_mode(&self) -> MatchMode {
        self.config.match_mode
    }

    #[cfg(test)]
    pub fn navigation(&self) -> Navigation {
        self.config.navigation
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    /// Cursor into the visible items; 0 when nothing is visible
    pub fn cursor(&self) -> usize {
        if self.visible_len() == 0 {
            0
        } else {
            self.cursor
        }
    }

    fn visible(&self) -> impl Iterator<Item = &T> + '_ {
        let category = self.active_category;
        let mode = self.config.match_mode;
        self.items
            .iter()
            .filter(move |item| matches(*item, category, mode))
    }

    /// Items matching the active category, in collection order
    pub fn visible_items(&self) -> Vec<&T> {
        self.visible().collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible().count()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.visible().next().is_none()
    }

    /// Switch category and reset the cursor
    pub fn set_filter(&mut self, category: Category) -> (Vec<&T>, usize) {
        self.active_category = category;
        self.cursor = 0;
        tracing::debug!(category = category.label(), "selector filter changed");
        (self.visible_items(), 0)
    }

    /// Move to the next configured category, wrapping
    pub fn next_filter(&mut self) -> Category {
        let index = Navigation::Circular.next(self.category_index(), self.categories().len());
        self.step_filter(index)
    }

    /// Move to the previous configured category, wrapping
    pub fn prev_filter(&mut self) -> Category {
        let index = Navigation::Circular.prev(self.category_index(), self.categories().len());
        self.step_filter(index)
    }

    fn category_index(&self) -> usize {
        self.categories()
            .iter()
            .position(|c| *c == self.active_category)
            .unwrap_or(0)
    }

    fn step_filter(&mut self, index: usize) -> Category {
        let category = self
            .categories()
            .get(index)
            .copied()
            .unwrap_or(Category::All);
        self.set_filter(category);
        category
    }

    /// Item under the cursor, or `None` when nothing is visible
    pub fn current(&self) -> Option<&T> {
        self.visible().nth(self.cursor)
    }

    pub fn next(&mut self) -> usize {
        self.cursor = self
            .config
            .navigation
            .next(self.cursor(), self.visible_len());
        self.cursor
    }

    pub fn prev(&mut self) -> usize {
        self.cursor = self
            .config
            .navigation
            .prev(self.cursor(), self.visible_len());
        self.cursor
    }

    pub fn jump_to(&mut self, index: isize) -> Result<usize, OutOfRangeError> {
        self.cursor = self
            .config
            .navigation
            .jump_to(self.cursor(), index, self.visible_len())?;
        Ok(self.cursor)
    }

    /// Swap the collection and return to the initial state
    #[allow(dead_code)]
    pub fn replace_items(&mut self, items: Vec<T>) {
        tracing::debug!(count = items.len(), "selector items replaced");
        self.items = items;
        self.active_category = Category::All;
        self.cursor = 0;
    }

    pub fn snapshot(&self) -> SelectorSnapshot {
        SelectorSnapshot {
            category: self.active_category,
            cursor: self.cursor(),
            visible_len: self.visible_len(),
        }
    }
}
