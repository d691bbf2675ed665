/// A disjoint-set forest over the elements `0..len`, with path compression and union by size.
///
/// Used by Kruskal's algorithm and by the union-find connected components algorithm.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    set_count: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            set_count: len,
        }
    }

    /// Returns the representative of the set containing `element`.
    /// Every element on the path to the representative is attached to the representative directly.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`, attaching the smaller tree below the root of the larger one.
    /// Returns false if both were in the same set already.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let (large, small) = if self.size[root_a] < self.size[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.set_count -= 1;
        true
    }

    /// Returns the amount of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;

    #[test]
    fn test_union_and_find() {
        let mut sets = DisjointSet::new(6);
        assert_eq!(sets.set_count(), 6);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));
        assert_eq!(sets.find(0), sets.find(3));
        assert_ne!(sets.find(0), sets.find(4));
        assert_ne!(sets.find(4), sets.find(5));
        assert_eq!(sets.set_count(), 3);
    }

    #[test]
    fn test_smaller_tree_is_attached_below_larger() {
        let mut sets = DisjointSet::new(4);
        sets.union(1, 2);
        sets.union(1, 3);
        let root = sets.find(1);
        sets.union(0, 1);
        assert_eq!(sets.find(0), root);
    }

    #[test]
    fn test_path_compression() {
        let mut sets = DisjointSet::new(5);
        for element in 0..4 {
            sets.union(element + 1, element);
        }
        let root = sets.find(4);
        for element in 0..5 {
            assert_eq!(sets.find(element), root);
        }
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn test_empty() {
        let sets = DisjointSet::new(0);
        assert_eq!(sets.set_count(), 0);
    }
}
