/// Lazy r-length permutations of a sequence, in lexicographic index order.
///
/// Order matters, so `(a, b)` and `(b, a)` are both produced. Uses the
/// index/cycle bookkeeping of the classic itertools algorithm, so nothing
/// beyond the index vectors is held between yields.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>, r: usize) -> Self {
        let n = items.len();
        Self {
            exhausted: r > n,
            indices: (0..n).collect(),
            cycles: (0..r.min(n)).map(|i| n - i).collect(),
            started: false,
            items,
        }
    }

    fn current(&self) -> Vec<T> {
        self.indices
            .iter()
            .take(self.cycles.len())
            .map(|&i| self.items[i].clone())
            .collect()
    }

    fn advance(&mut self) -> bool {
        let n = self.items.len();
        for i in (0..self.cycles.len()).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = self.cycles[i];
                self.indices.swap(i, n - j);
                return true;
            }
        }
        false
    }
}

impl<T: Clone> Iterator for Permutations<T> {
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

/// permutations of `items` taken `r` at a time
pub fn permutations<T: Clone>(items: &[T], r: usize) -> Permutations<T> {
    Permutations::new(items.to_vec(), r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_pick_two() {
        let perms = permutations(&['A', 'B', 'C'], 2).collect::<Vec<_>>();
        assert!(
            perms
                == vec![
                    vec!['A', 'B'],
                    vec!['A', 'C'],
                    vec!['B', 'A'],
                    vec!['B', 'C'],
                    vec!['C', 'A'],
                    vec!['C', 'B'],
                ]
        );
    }

    #[test]
    fn full_orderings() {
        let perms = permutations(&[1, 2, 3], 3).collect::<Vec<_>>();
        assert_eq!(perms.len(), 6);
        assert!(perms[0] == vec![1, 2, 3]);
        assert!(perms[5] == vec![3, 2, 1]);
    }

    #[test]
    fn thirtyseven_pick_three() {
        assert_eq!(permutations(&(0..37).collect::<Vec<_>>(), 3).count(), 46620);
    }

    #[test]
    fn too_many_is_empty() {
        assert_eq!(permutations(&[1, 2], 3).count(), 0);
    }

    #[test]
    fn early_exit() {
        let mut perms = permutations(&[1, 2, 3, 4], 4);
        assert!(perms.find(|p| p[0] == 2).unwrap() == vec![2, 1, 3, 4]);
    }
}
