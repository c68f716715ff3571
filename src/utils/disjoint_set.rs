use crate::node::{Node, NumNodes};

/// A disjoint-set forest (union-find) over nodes `0..n`.
///
/// Starts with every node in its own singleton set. `find` follows parent
/// links iteratively and compresses the traversed path; `try_union` merges by
/// rank, attaching the lower-rank root under the higher-rank one. On equal
/// rank the second root attaches under the first, whose rank increments.
pub struct DisjointSetForest {
    parent: Vec<Node>,
    rank: Vec<NumNodes>,
    num_sets: NumNodes,
}

impl DisjointSetForest {
    /// Creates a forest of `n` singleton sets with `parent[u] = u` and `rank[u] = 0`
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_sets: n,
        }
    }

    /// Returns the number of nodes in the forest
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if the forest has no nodes
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets currently in the forest
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }

    /// Returns the representative of the set containing `u`.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // second pass: point everything on the path directly at the root
        let mut cur = u;
        while cur != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }

        root
    }

    /// Returns *true* if `u` and `v` belong to the same set.
    /// ** Panics if `u >= n || v >= n` **
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Merges the sets containing `u` and `v` by rank.
    /// Returns *true* exactly if two distinct sets were merged.
    /// ** Panics if `u >= n || v >= n` **
    pub fn try_union(&mut self, u: Node, v: Node) -> bool {
        let x = self.find(u);
        let y = self.find(v);

        if x == y {
            return false;
        }

        if self.rank[x as usize] < self.rank[y as usize] {
            self.parent[x as usize] = y;
        } else if self.rank[x as usize] > self.rank[y as usize] {
            self.parent[y as usize] = x;
        } else {
            self.parent[y as usize] = x;
            self.rank[x as usize] += 1;
        }

        self.num_sets -= 1;
        true
    }
}
