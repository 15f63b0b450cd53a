//! Depth-first search as a pull-based iterator.

use super::policy::VisitPolicy;
use super::record::VisitRecord;
use crate::graph::Graph;

/// One level of the explicit DFS stack: the edges still to try and the record
/// they leave from.
struct Frame<E, T> {
    edges: E,
    parent: VisitRecord<T>,
}

/// An iterator for pre-order Depth-First Search (DFS).
///
/// Mirrors recursive DFS with an explicit stack of edge iterators instead of
/// call-stack recursion, so arbitrarily deep (or infinite) paths can be
/// explored. Each step advances the topmost edge iterator; an accepted target
/// is yielded immediately and gets its own frame on top of the stack.
pub struct Dfs<'g, T, G, P>
where
    G: Graph<T> + ?Sized + 'g,
{
    graph: &'g G,
    root: Option<T>,
    stack: Vec<Frame<G::Edges<'g>, T>>,
    policy: P,
}

impl<'g, T, G, P> Dfs<'g, T, G, P>
where
    G: Graph<T> + ?Sized + 'g,
    P: VisitPolicy<T>,
{
    /// Creates a DFS iterator starting from `start`.
    ///
    /// Nothing is evaluated until the first call to `next`, which consults
    /// the policy about the start node.
    pub fn new(graph: &'g G, start: T, policy: P) -> Self {
        Self {
            graph,
            root: Some(start),
            stack: Vec::new(),
            policy,
        }
    }

    /// Current depth of the explicit stack.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the visit policy, e.g. to inspect its state.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    fn enter(&mut self, record: &VisitRecord<T>) {
        self.stack.push(Frame {
            edges: G::edges(self.graph, record.node()),
            parent: record.clone(),
        });
    }
}

impl<'g, T, G, P> Iterator for Dfs<'g, T, G, P>
where
    G: Graph<T> + ?Sized + 'g,
    P: VisitPolicy<T>,
{
    type Item = VisitRecord<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.root.take() {
            if !self.policy.visit(&start, None, 0) {
                return None;
            }
            let record = VisitRecord::root(start);
            self.enter(&record);
            return Some(record);
        }

        while let Some(frame) = self.stack.last_mut() {
            let Some(edge) = frame.edges.next() else {
                self.stack.pop();
                continue;
            };
            let parent = frame.parent.clone();
            let cost = parent.cost().saturating_add(edge.cost);
            if self.policy.visit(&edge.to, Some(&parent), cost) {
                let record = VisitRecord::new(edge.to, Some(parent), cost);
                self.enter(&record);
                return Some(record);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::from_fn;
    use crate::search::Distinct;

    #[test]
    fn pre_order_on_tree() {
        let tree = from_fn(|&n: &u32| if n < 4 { vec![2 * n, 2 * n + 1] } else { vec![] });
        let order: Vec<u32> = Dfs::new(&tree, 1, Distinct::new())
            .map(|r| *r.node())
            .collect();
        assert_eq!(order, vec![1, 2, 4, 5, 3, 6, 7]);
    }

    #[test]
    fn lazy_until_first_pull() {
        let g = from_fn(|&n: &u32| [n + 1]);
        let mut dfs = Dfs::new(&g, 0, Distinct::new());
        assert!(dfs.policy().is_empty());
        assert_eq!(dfs.stack_depth(), 0);

        assert_eq!(dfs.next().map(|r| *r.node()), Some(0));
        assert_eq!(dfs.stack_depth(), 1);
    }

    #[test]
    fn deep_paths_do_not_recurse() {
        let g = from_fn(|&n: &u32| if n < 200_000 { vec![n + 1] } else { vec![] });
        let last = Dfs::new(&g, 0, Distinct::new()).last().unwrap();
        assert_eq!(*last.node(), 200_000);
        assert_eq!(last.depth(), 200_000);
    }
}
