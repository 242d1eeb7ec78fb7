//! Graphs loaded from their JSON form answer queries like built ones.
#![cfg(feature = "serde")]

use rstest::{fixture, rstest};
use stopover_core::test_support::{assert_close, reference_network};
use stopover_core::{Graph, GraphError, RouteError, optimal_route, shortest_path};

const TRIANGLE: &str = r#"{
    "points": {
        "A": { "id": "A", "name": "Town hall", "lat": 48.8584, "lng": 2.2945 },
        "B": { "id": "B", "lat": 48.8606, "lng": 2.3376 },
        "C": { "id": "C", "name": "Market", "lat": 48.8530, "lng": 2.3499 }
    },
    "connections": [
        { "from": "A", "to": "B", "distance": 0.5, "time": 3.0 },
        { "from": "B", "to": "C", "distance": 0.8, "time": 6.0 },
        { "from": "A", "to": "C", "distance": 2.0, "time": 9.0 }
    ]
}"#;

#[fixture]
fn triangle() -> Graph {
    serde_json::from_str(TRIANGLE).expect("triangle JSON should parse")
}

#[rstest]
fn parsed_graph_routes(triangle: Graph) {
    let route = shortest_path(&triangle, "C", "A").expect("C reaches A");
    assert_eq!(route.path(), ["C", "B", "A"]);
    assert_close(route.total_distance(), 1.3);
    assert_close(route.total_time(), 9.0);
}

#[rstest]
fn missing_name_defaults_to_id(triangle: Graph) {
    let point = triangle.point("B").expect("B is present");
    assert_eq!(point.name(), "B");
    assert_eq!(triangle.point("C").map(|p| p.name()), Some("Market"));
}

#[rstest]
fn reference_network_round_trips() {
    let graph = reference_network();
    let json = serde_json::to_string(&graph).expect("graph serialises");
    let parsed: Graph = serde_json::from_str(&json).expect("graph deserialises");
    assert_eq!(parsed, graph);

    let route = optimal_route(&parsed, "A", &["D", "Y"]).expect("tour succeeds");
    assert_eq!(route.path(), ["A", "E", "Y", "C", "D"]);
}

#[rstest]
fn missing_sections_default_to_empty() {
    let graph: Graph = serde_json::from_str("{}").expect("empty object parses");
    assert!(graph.is_empty());
    assert!(graph.connections().is_empty());
}

#[rstest]
fn dangling_connection_is_reported_at_query_time() {
    let json = r#"{
        "points": { "A": { "id": "A", "lat": 0.0, "lng": 0.0 } },
        "connections": [ { "from": "A", "to": "Q", "distance": 1.0, "time": 1.0 } ]
    }"#;
    let graph: Graph = serde_json::from_str(json).expect("shape is valid");
    let err = shortest_path(&graph, "A", "A").expect_err("graph is malformed");
    assert!(matches!(
        err,
        RouteError::MalformedGraph(GraphError::UnknownEndpoint { .. })
    ));
}
