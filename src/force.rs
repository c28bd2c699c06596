//! Permutation enumeration and candidate rendering for brute-force key
//! recovery.
//!
//! Recovery walks every ordering of the ciphertext's column blocks, shows
//! each candidate to a confirmation callback as a row-major grid, and lets
//! the engine derive a key from the ordering the operator accepts. Growth
//! is factorial in the column count, so this is only practical for short
//! keys.

/// Iterator over all permutations of the indices `0..len`, generated
/// in-place with Heap's algorithm.
pub struct IndexPermutations {
    indices: Vec<usize>,
    // Per-level loop counters from the iterative form of the algorithm
    counters: Vec<usize>,
    depth: usize,
    started: bool,
}

impl IndexPermutations {
    pub fn new(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
            counters: vec![0; len],
            depth: 0,
            started: false,
        }
    }
}

impl Iterator for IndexPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        while self.depth < self.indices.len() {
            if self.counters[self.depth] < self.depth {
                if self.depth % 2 == 0 {
                    self.indices.swap(0, self.depth);
                } else {
                    self.indices.swap(self.counters[self.depth], self.depth);
                }
                self.counters[self.depth] += 1;
                self.depth = 0;
                return Some(self.indices.clone());
            }
            self.counters[self.depth] = 0;
            self.depth += 1;
        }
        None
    }
}

/// Render a candidate ordering of column blocks as the row-major grid an
/// operator inspects: one space-separated line per row, shorter columns
/// simply absent from the later rows.
pub fn render_grid(blocks: &[Vec<char>], order: &[usize]) -> String {
    let rows = order
        .iter()
        .map(|&i| blocks[i].len())
        .max()
        .unwrap_or(0);

    let mut grid = String::new();
    for r in 0..rows {
        let mut first = true;
        for &i in order {
            if let Some(&c) = blocks[i].get(r) {
                if !first {
                    grid.push(' ');
                }
                grid.push(c);
                first = false;
            }
        }
        grid.push('\n');
    }
    grid
}
