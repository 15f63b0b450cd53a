use graphwalk::graph::{self, from_fn};
use graphwalk::{Cost, Edge, Graph, VisitRecord};

/// Ring of ten nodes linked both ways; every edge costs 1 except `0 -> 9`.
fn ring() -> impl Graph<i32> {
    from_fn(|&n: &i32| [(n + 9) % 10, (n + 1) % 10])
        .weighted(|&from: &i32, &to: &i32| if from == 0 && to == 9 { 10 } else { 1 })
}

#[test]
fn bfs_order_on_ring() {
    let order: Vec<i32> = ring().bfs(0).nodes().copied().collect();
    assert_eq!(order, vec![0, 9, 1, 8, 2, 7, 3, 6, 4, 5]);
}

#[test]
fn dfs_order_on_ring() {
    let order: Vec<i32> = ring().dfs(0).nodes().copied().collect();
    assert_eq!(order, vec![0, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn dijkstra_order_on_ring() {
    let g = ring();
    let result = g.dijkstra(0);
    let order: Vec<i32> = result.nodes().copied().collect();
    assert_eq!(order, (0..10).collect::<Vec<_>>());
    assert_eq!(result.cost_to(&9), Some(9));
    assert_eq!(result.path_to(&3), Some(vec![0, 1, 2, 3]));
}

#[test]
fn bfs_costs_are_weighted_sums() {
    let g = ring();
    let result = g.bfs(0);
    // reached over the expensive edge first
    assert_eq!(result.cost_to(&9), Some(10));
    assert_eq!(result.get(&8).and_then(VisitRecord::edge_cost), Some(1));
}

#[test]
fn infinite_bfs_find_terminates() {
    let g = from_fn(|&n: &u64| [n + 1]);
    let result = g.bfs(0);
    let hit = result.iter().find(|r| *r.node() > 100).unwrap();
    assert_eq!(*hit.node(), 101);
    assert_eq!(result.forced_len(), 102);
}

#[test]
fn infinite_dfs_find_terminates() {
    let g = from_fn(|&n: &u64| [n + 1]);
    let hit = g.dfs(0).iter().find(|r| *r.node() > 100).cloned().unwrap();
    assert_eq!(*hit.node(), 101);
    assert_eq!(hit.depth(), 101);
}

#[test]
fn infinite_dijkstra_find_terminates() {
    let g = from_fn(|&n: &u64| [n + 1]).weighted(|_: &u64, _: &u64| 1);
    let hit = g.dijkstra(0).iter().find(|r| *r.node() > 100).cloned().unwrap();
    assert_eq!(*hit.node(), 101);
    assert_eq!(hit.cost(), 101);
}

#[test]
fn get_is_idempotent_and_shares_prefix() {
    let g = from_fn(|&n: &u64| [n + 1, n + 2]);
    let result = g.bfs(0);

    let first = result.get(&40).unwrap();
    let forced = result.forced_len();
    let again = result.get(&40).unwrap();
    assert!(VisitRecord::ptr_eq(first, again));
    assert_eq!(result.forced_len(), forced);

    // a node discovered earlier is answered from the index
    assert_eq!(result.cost_to(&10), Some(5));
    assert_eq!(result.forced_len(), forced);
}

#[test]
fn custom_policy_allows_revisits() {
    let triangle = from_fn(|&n: &u8| [(n + 1) % 3]);
    let within_budget = |_: &u8, _: Option<&VisitRecord<u8>>, cost: Cost| cost <= 5;
    let result = triangle.bfs_with(0, within_budget);

    let order: Vec<u8> = result.nodes().copied().collect();
    assert_eq!(order, vec![0, 1, 2, 0, 1, 2]);
    assert_eq!(result.cost_to(&0), Some(0));
    assert_eq!(result.to_map()[&0].cost(), 3);
}

#[test]
fn filters_compose_lazily() {
    let grid = graph::from_fn(|&(x, y): &(i32, i32)| [(x + 1, y), (x, y + 1)]);
    let walled = grid
        .by_ref()
        .filter_nodes(|&(x, y): &(i32, i32)| x <= 3 && y <= 3)
        .filter_edges(|_: &(i32, i32), to: &(i32, i32)| *to != (2, 2));

    let result = walled.bfs((0, 0));
    assert_eq!(result.reachable().len(), 15);
    assert!(!result.contains(&(2, 2)));
    assert_eq!(result.cost_to(&(3, 3)), Some(6));

    // the unfiltered graph is untouched
    assert_eq!(grid.bfs((0, 0)).cost_to(&(2, 2)), Some(4));
}

#[test]
fn rejected_root_gives_empty_result() {
    let g = from_fn(|&n: &u8| [n]);
    let result = g.dfs_with(0, |_: &u8, _: Option<&VisitRecord<u8>>, _: Cost| false);
    assert!(!result.has_at_least(1));
    assert!(result.get(&0).is_none());
    assert!(result.record(0).is_err());
}

/// `0 -> 1 -> 2 -> 3 -> 4`, every edge costing a bit more than half of `Cost::MAX`.
fn costly_chain() -> impl Graph<u8> {
    from_fn(|&n: &u8| if n < 4 { vec![n + 1] } else { vec![] })
        .weighted(|_: &u8, _: &u8| Cost::MAX / 2 + 1)
}

#[test]
fn accumulated_costs_saturate() {
    let g = costly_chain();

    let bfs: Vec<Cost> = g.bfs(0).iter().map(VisitRecord::cost).collect();
    assert_eq!(bfs, vec![0, Cost::MAX / 2 + 1, Cost::MAX, Cost::MAX, Cost::MAX]);

    let dfs = g.dfs(0);
    assert_eq!(dfs.iter().count(), 5);
    assert_eq!(dfs.cost_to(&4), Some(Cost::MAX));

    let dijkstra: Vec<u8> = g.dijkstra(0).nodes().copied().collect();
    assert_eq!(dijkstra, vec![0, 1, 2, 3, 4]);
}

/// `0 -> 1 (10)`, `0 -> 2 (1)`, `2 -> 1 (2)`.
fn detour() -> impl Graph<u8> {
    graph::from_weighted_fn(|&n: &u8| match n {
        0 => vec![Edge::new(1, 10), Edge::new(2, 1)],
        2 => vec![Edge::new(1, 2)],
        _ => vec![],
    })
}

#[test]
fn dijkstra_policy_rejection_leaves_node_out() {
    let g = detour();
    let result = g.dijkstra_with(0, |n: &u8, _: Option<&VisitRecord<u8>>, _: Cost| *n != 2);
    let visited: Vec<(u8, Cost)> = result.iter().map(|r| (*r.node(), r.cost())).collect();
    assert_eq!(visited, vec![(0, 0), (1, 10)]);
}

#[test]
fn dijkstra_policy_sees_only_improvements() {
    // 0 -> 1 (5), 0 -> 2 (1), 2 -> 1 (7): the detour never improves on 5
    let g = graph::from_weighted_fn(|&n: &u8| match n {
        0 => vec![Edge::new(1, 5), Edge::new(2, 1)],
        2 => vec![Edge::new(1, 7)],
        _ => vec![],
    });

    let mut asked = Vec::new();
    {
        let recorder = |n: &u8, _: Option<&VisitRecord<u8>>, cost: Cost| {
            asked.push((*n, cost));
            true
        };
        let result = g.dijkstra_with(0, recorder);
        assert_eq!(result.cost_to(&1), Some(5));
        assert_eq!(result.iter().count(), 3);
    }
    assert_eq!(asked, vec![(0, 0), (1, 5), (2, 1)]);

    let mut asked = Vec::new();
    {
        let recorder = |n: &u8, _: Option<&VisitRecord<u8>>, cost: Cost| {
            asked.push((*n, cost));
            true
        };
        assert_eq!(detour().dijkstra_with(0, recorder).iter().count(), 3);
    }
    // the detour to 1 improves on 10, so it is offered again
    assert_eq!(asked, vec![(0, 0), (1, 10), (2, 1), (1, 3)]);
}

#[test]
fn dfs_policy_allows_revisits() {
    let triangle = from_fn(|&n: &u8| [(n + 1) % 3]);
    let within_budget = |_: &u8, _: Option<&VisitRecord<u8>>, cost: Cost| cost <= 4;
    let result = triangle.dfs_with(0, within_budget);

    let visited: Vec<(u8, Cost)> = result.iter().map(|r| (*r.node(), r.cost())).collect();
    assert_eq!(visited, vec![(0, 0), (1, 1), (2, 2), (0, 3), (1, 4)]);
    assert_eq!(result.get(&0).map(VisitRecord::depth), Some(0));
    assert_eq!(result.to_map()[&0].depth(), 3);
}
