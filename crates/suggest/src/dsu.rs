//! Disjoint-set union over local contact positions.

/// Flat parent/size arena with path compression and union-by-size.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Compress the walked path onto the root.
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets holding `a` and `b`. Returns false if already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        true
    }

    /// Join every element of `members` into one set.
    pub fn union_all(&mut self, members: &[usize]) {
        if let Some((&first, rest)) = members.split_first() {
            for &other in rest {
                self.union(first, other);
            }
        }
    }

    /// All sets, each sorted ascending, ordered by their smallest element.
    pub fn components(&mut self) -> Vec<Vec<usize>> {
        let mut slot_of_root: Vec<Option<usize>> = vec![None; self.len()];
        let mut components: Vec<Vec<usize>> = Vec::new();
        for x in 0..self.len() {
            let root = self.find(x);
            match slot_of_root[root] {
                Some(slot) => components[slot].push(x),
                None => {
                    slot_of_root[root] = Some(components.len());
                    components.push(vec![x]);
                }
            }
        }
        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_until_joined() {
        let mut dsu = DisjointSet::new(4);
        assert_eq!(dsu.components().len(), 4);
        assert!(dsu.union(0, 2));
        assert!(!dsu.union(2, 0));
        assert_eq!(dsu.find(0), dsu.find(2));
        assert_ne!(dsu.find(0), dsu.find(1));
        assert_eq!(dsu.components(), vec![vec![0, 2], vec![1], vec![3]]);
    }

    #[test]
    fn components_ordered_by_first_member() {
        let mut dsu = DisjointSet::new(6);
        dsu.union(4, 5);
        dsu.union(1, 3);
        dsu.union(3, 5);
        assert_eq!(dsu.components(), vec![vec![0], vec![1, 3, 4, 5], vec![2]]);
    }

    #[test]
    fn union_all_chains_members() {
        let mut dsu = DisjointSet::new(5);
        dsu.union_all(&[4, 0, 2]);
        dsu.union_all(&[]);
        assert_eq!(dsu.components(), vec![vec![0, 2, 4], vec![1], vec![3]]);
    }

    #[test]
    fn long_chain_compresses() {
        let mut dsu = DisjointSet::new(100);
        for i in 1..100 {
            dsu.union(i - 1, i);
        }
        let root = dsu.find(99);
        for i in 0..100 {
            assert_eq!(dsu.find(i), root);
        }
        assert_eq!(dsu.components().len(), 1);
    }
}
