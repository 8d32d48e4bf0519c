//! Index sequence producers for the tile search
//!
//! Both producers hand out a borrowed slice of indices on each `advance()` and
//! reuse one buffer for the whole sequence. `reset()` starts the sequence over.

/// All `r`-element subsets of `0..n` in lexicographic order, each subset in
/// increasing index order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, r: usize) -> Self {
        Self {
            n,
            indices: (0..r).collect(),
            started: false,
            done: r > n,
        }
    }

    pub fn reset(&mut self) {
        let r = self.indices.len();
        for (i, index) in self.indices.iter_mut().enumerate() {
            *index = i;
        }
        self.started = false;
        self.done = r > self.n;
    }

    /// Moves to the next subset
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let r = self.indices.len();
        // rightmost position that can still move right
        let pivot = (0..r).rev().find(|&i| self.indices[i] < self.n - r + i);

        match pivot {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..r {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                Some(&self.indices)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// All orderings of `0..k` in lexicographic order
#[derive(Debug, Clone)]
pub struct Permutations {
    order: Vec<usize>,
    started: bool,
    done: bool,
}

impl Permutations {
    pub fn new(k: usize) -> Self {
        Self {
            order: (0..k).collect(),
            started: false,
            done: false,
        }
    }

    pub fn reset(&mut self) {
        for (i, slot) in self.order.iter_mut().enumerate() {
            *slot = i;
        }
        self.started = false;
        self.done = false;
    }

    /// Moves to the next ordering
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.order);
        }

        let order = &mut self.order;
        let pivot = match (1..order.len()).rev().find(|&i| order[i - 1] < order[i]) {
            Some(i) => i - 1,
            None => {
                self.done = true;
                return None;
            }
        };

        // a successor always exists: order[pivot + 1] > order[pivot]
        let successor = (pivot + 1..order.len())
            .rev()
            .find(|&j| order[j] > order[pivot])
            .unwrap_or(pivot + 1);
        order.swap(pivot, successor);
        order[pivot + 1..].reverse();

        Some(&self.order)
    }
}

/// Number of ordered selections of 1 to `max_len` items out of `n`
pub fn candidate_count(n: usize, max_len: usize) -> usize {
    let mut total = 0;
    let mut arrangements = 1;
    for r in 0..max_len.min(n) {
        arrangements *= n - r;
        total += arrangements;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_combinations(n: usize, r: usize) -> Vec<Vec<usize>> {
        let mut combos = Combinations::new(n, r);
        let mut out = Vec::new();
        while let Some(c) = combos.advance() {
            out.push(c.to_vec());
        }
        out
    }

    fn collect_permutations(k: usize) -> Vec<Vec<usize>> {
        let mut perms = Permutations::new(k);
        let mut out = Vec::new();
        while let Some(p) = perms.advance() {
            out.push(p.to_vec());
        }
        out
    }

    #[test]
    fn test_combinations_order() {
        assert_eq!(
            collect_combinations(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_combinations_sizes() {
        let binomial = |n: usize, r: usize| -> usize {
            if r > n {
                return 0;
            }
            (0..r).fold(1, |acc, i| acc * (n - i) / (i + 1))
        };
        for n in 0..=8 {
            for r in 1..=4 {
                assert_eq!(
                    collect_combinations(n, r).len(),
                    binomial(n, r),
                    "C({}, {})",
                    n,
                    r
                );
            }
        }
        assert_eq!(collect_combinations(20, 4).len(), 4845);
    }

    #[test]
    fn test_combinations_edge_cases() {
        assert!(collect_combinations(2, 3).is_empty());
        assert_eq!(collect_combinations(3, 3), vec![vec![0, 1, 2]]);
        assert_eq!(collect_combinations(3, 0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_combinations_reset() {
        let mut combos = Combinations::new(3, 2);
        while combos.advance().is_some() {}
        assert!(combos.advance().is_none());

        combos.reset();
        assert_eq!(combos.advance(), Some(&[0, 1][..]));
        assert_eq!(combos.advance(), Some(&[0, 2][..]));
    }

    #[test]
    fn test_permutations_order() {
        assert_eq!(
            collect_permutations(3),
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_permutations_sizes() {
        assert_eq!(collect_permutations(0).len(), 1);
        assert_eq!(collect_permutations(1), vec![vec![0]]);
        assert_eq!(collect_permutations(2).len(), 2);
        assert_eq!(collect_permutations(4).len(), 24);

        let mut all = collect_permutations(4);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 24);
    }

    #[test]
    fn test_permutations_reset() {
        let mut perms = Permutations::new(2);
        assert_eq!(perms.advance(), Some(&[0, 1][..]));
        assert_eq!(perms.advance(), Some(&[1, 0][..]));
        assert_eq!(perms.advance(), None);

        perms.reset();
        assert_eq!(perms.advance(), Some(&[0, 1][..]));
    }

    #[test]
    fn test_candidate_count() {
        assert_eq!(candidate_count(3, 4), 15);
        assert_eq!(candidate_count(1, 4), 1);
        assert_eq!(candidate_count(0, 4), 0);
        assert_eq!(candidate_count(20, 4), 20 + 380 + 6840 + 116_280);
    }
}
