use rn_graph::GraphStore;

/// Read-only query engine over a [`GraphStore`].
///
/// Holds only a borrow of the store and no state of its own, so repeated
/// queries with the same arguments always agree, and one store can back any
/// number of engines (including on other threads).
#[derive(Debug, Clone, Copy)]
pub struct RouteEngine<'g> {
    pub(crate) store: &'g GraphStore,
}

impl<'g> RouteEngine<'g> {
    pub fn new(store: &'g GraphStore) -> Self {
        Self { store }
    }

    /// The store this engine reads from.
    pub fn store(&self) -> &'g GraphStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::reference_network;
    use crate::{BoundType, PathLength};

    #[test]
    fn engines_share_one_store() {
        let store = reference_network();
        let first = RouteEngine::new(&store);
        let second = RouteEngine::new(&store);

        assert!(std::ptr::eq(first.store(), second.store()));
        assert_eq!(
            first.shortest_path_length("A", "C"),
            second.shortest_path_length("A", "C")
        );
    }

    #[test]
    fn queries_from_threads() {
        let store = reference_network();
        let engine = RouteEngine::new(&store);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(move || {
                        (
                            engine.count_routes("C", "C", 30, BoundType::TotalDistance, false),
                            engine.shortest_path_length("B", "B"),
                        )
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), (7, PathLength::Reachable(9)));
            }
        });
    }
}
