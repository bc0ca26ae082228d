use crate::dictionary::Dictionary;
use rand::Rng;

/// Source of random indices. The quiz only ever needs "a uniform index below
/// `len`", so tests can swap in a deterministic source to script which term
/// comes up next.
pub trait IndexSource {
    /// Returns a uniformly distributed index in `0..len`. `len` is never zero
    /// because a `Dictionary` is non-empty by construction.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Default source backed by the thread-local RNG.
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Draws a random term from the dictionary. Draws are independent, so the
/// same term can come up twice in a row.
pub struct PairSelector {
    source: Box<dyn IndexSource>,
}

impl PairSelector {
    pub fn new() -> Self {
        Self::with_source(Box::new(ThreadRngSource))
    }

    pub fn with_source(source: Box<dyn IndexSource>) -> Self {
        Self { source }
    }

    pub fn pick<'a>(&mut self, dictionary: &'a Dictionary) -> &'a str {
        let terms = dictionary.terms();
        &terms[self.source.next_index(terms.len())]
    }
}

impl std::fmt::Debug for PairSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairSelector").finish_non_exhaustive()
    }
}

impl Default for PairSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub mod test_support {
    use super::IndexSource;

    /// Cycles through a scripted list of indices.
    pub struct FixedIndexSource {
        indices: Vec<usize>,
        position: usize,
    }

    impl FixedIndexSource {
        pub fn new(indices: Vec<usize>) -> Self {
            Self {
                indices,
                position: 0,
            }
        }
    }

    impl IndexSource for FixedIndexSource {
        fn next_index(&mut self, len: usize) -> usize {
            let index = self.indices[self.position % self.indices.len()];
            self.position += 1;
            index % len
        }
    }
}
