/// Lazy r-length combinations of a sequence, in lexicographic index order.
///
/// Elements are distinct by position, not by value. `{a, b}` and `{b, a}`
/// are the same combination and only the first is produced. Every yielded
/// group is a fresh `Vec`, so callers may keep or mutate it freely.
/// Asking for more elements than there are yields nothing.
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<T: Clone> Combinations<T> {
    pub fn new(items: Vec<T>, r: usize) -> Self {
        Self {
            exhausted: r > items.len(),
            indices: (0..r).collect(),
            started: false,
            items,
        }
    }

    fn current(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.items[i].clone()).collect()
    }

    /// bump the rightmost index that still has room, reset the tail after it
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let r = self.indices.len();
        match (0..r).rev().find(|&i| self.indices[i] != i + n - r) {
            None => false,
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..r {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                true
            }
        }
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started && !self.advance() {
            self.exhausted = true;
            return None;
        }
        self.started = true;
        Some(self.current())
    }
}

/// combinations of `items` taken `r` at a time
pub fn combinations<T: Clone>(items: &[T], r: usize) -> Combinations<T> {
    Combinations::new(items.to_vec(), r)
}
