//! Selection and scroll offset for the movie list

/// Selected row and first visible row of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCursor {
    pub selected: usize,
    pub offset: usize,
}

impl ListCursor {
    pub fn down(&mut self, count: usize, height: usize) {
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(count - 1);
        self.follow(height);
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    pub fn top(&mut self) {
        *self = Self::default();
    }

    pub fn bottom(&mut self, count: usize, height: usize) {
        if count > 0 {
            self.selected = count - 1;
            self.follow(height);
        }
    }

    /// Pull the cursor back inside a list that shrank.
    pub fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.top();
            return;
        }
        if self.selected >= count {
            self.selected = count - 1;
        }
        if self.offset > self.selected {
            self.offset = self.selected;
        }
    }

    fn follow(&mut self, height: usize) {
        let height = height.max(1);
        if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
    }
}
