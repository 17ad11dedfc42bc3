use log::info;

/// Position within an ordered list of sections. Moves clamp at both ends.
#[derive(Clone, Debug, Default)]
pub struct SectionNavigator {
    index: usize,
    count: usize,
}

impl SectionNavigator {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.index = self.index.min(count.saturating_sub(1));
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.count
    }

    pub fn next(&mut self) -> bool {
        self.jump_to(self.index.saturating_add(1))
    }

    pub fn prev(&mut self) -> bool {
        self.jump_to(self.index.saturating_sub(1))
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        let target = index.min(self.count.saturating_sub(1));
        if target == self.index {
            return false;
        }

        info!("Section {} -> {}", self.index, target);
        self.index = target;
        true
    }

    /// Fraction of the lesson reached, counting the current section.
    pub fn progress(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }

        (self.index + 1) as f32 / self.count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn moves_clamp_at_both_ends() {
        let mut navigator = SectionNavigator::new(5);

        assert!(!navigator.prev());
        assert_eq!(navigator.index(), 0);

        navigator.jump_to(4);
        assert!(!navigator.next());
        assert_eq!(navigator.index(), 4);
        assert!(navigator.is_last());
    }

    #[test]
    fn jump_clamps_to_last_section() {
        let mut navigator = SectionNavigator::new(5);

        assert!(navigator.jump_to(17));
        assert_eq!(navigator.index(), 4);
        assert!(!navigator.jump_to(4));
    }

    #[test]
    fn progress_counts_current_section() {
        let mut navigator = SectionNavigator::new(5);
        assert_relative_eq!(navigator.progress(), 0.2);

        navigator.next();
        navigator.next();
        assert_relative_eq!(navigator.progress(), 0.6);
    }

    #[test]
    fn empty_navigator_stays_put() {
        let mut navigator = SectionNavigator::new(0);

        assert!(!navigator.next());
        assert!(!navigator.prev());
        assert_eq!(navigator.progress(), 0.0);
    }

    #[test]
    fn shrinking_count_pulls_index_back() {
        let mut navigator = SectionNavigator::new(5);
        navigator.jump_to(4);
        navigator.set_count(2);

        assert_eq!(navigator.index(), 1);
    }
}
