//! Linked list construction and traversal

use specimen_types::{Node, NodeFields, NodeList, append_node, reset_node};

fn three_node_list() -> NodeList {
    let mut list = NodeList::new();
    list.append(Node::new(1, "alpha"));
    list.append(Node::from_fields(NodeFields {
        id: 2,
        name: "beta".to_string(),
    }));
    list.append(Node::new(3, "gamma"));
    list
}

#[test]
fn traversal_order_is_append_order() {
    let list = three_node_list();
    let ids: Vec<i64> = list.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn traversal_can_scale_values_by_id() {
    let mut list = three_node_list();
    for mut node in list.iter_mut() {
        node.set_value(Some(node.id() * 10));
    }

    for node in &list {
        assert_eq!(node.value(), node.id * 10);
    }
    let rendered: Vec<String> = list.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "Node{id=1, name=alpha, value=10}",
            "Node{id=2, name=beta, value=20}",
            "Node{id=3, name=gamma, value=30}",
        ]
    );
}

#[test]
fn constructors_agree() {
    let fields: NodeFields = serde_json::from_str(r#"{"id": 2, "name": "beta"}"#).unwrap();
    let via_fields = Node::from_fields(fields);
    let via_new = Node::new(2, "beta");

    assert_eq!(via_fields.id, via_new.id);
    assert_eq!(via_fields.name, via_new.name);
    assert_eq!(via_fields.value(), via_new.value());
    assert!(!via_fields.has_next() && !via_new.has_next());
}

#[test]
fn free_append_returns_original_head() {
    let head = append_node(None, Node::new(1, "alpha"));
    let head = append_node(Some(head), Node::new(2, "beta"));
    assert_eq!(head.id, 1);
    assert_eq!(head.next().map(|n| n.id), Some(2));
}

#[test]
fn reset_after_traversal() {
    let mut list = three_node_list();
    for mut node in &mut list {
        node.set_value(Some(node.id() * 10));
        node.reset();
    }
    assert!(list.iter().all(|n| n.value() == 0));
}

#[test]
fn reset_node_zeroes_a_detached_node() {
    let mut node = Node::new(4, "delta");
    node.set_value(Some(40));
    reset_node(&mut node);
    assert_eq!(node.value(), 0);
}

#[test]
fn lists_with_same_nodes_are_equal() {
    let mut scaled = three_node_list();
    for mut node in &mut scaled {
        node.set_value(Some(node.id() * 10));
    }
    assert_ne!(scaled, three_node_list());

    for mut node in &mut scaled {
        node.set_value(None);
    }
    assert_eq!(scaled, three_node_list());
}
