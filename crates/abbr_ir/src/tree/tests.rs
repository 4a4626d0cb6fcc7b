#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn ul_li3() -> AbbrTree {
    // ul>li*3
    AbbrTree::from_specs([NodeSpec::element("ul").children(NodeSpec::element("li").repeat(3))])
}

#[test]
fn new_tree_has_only_root() {
    let tree = AbbrTree::new();
    assert_eq!(tree.len(), 1);
    assert!(tree.is_empty());
    assert!(tree.root().is_root());
    assert_eq!(tree.root().parent(), None);
}

#[test]
fn from_specs_preserves_order_and_parents() {
    let tree = ul_li3();
    let ul = tree.root().first_child().unwrap();
    assert_eq!(ul.name(), Some("ul"));
    assert_eq!(ul.child_count(), 3);
    for li in ul.children() {
        assert_eq!(li.name(), Some("li"));
        assert_eq!(li.parent(), Some(ul));
    }
}

#[test]
fn sibling_navigation_is_derived_from_children() {
    let tree = ul_li3();
    let ul = tree.root().first_child().unwrap();
    let items: Vec<_> = ul.children().collect();

    assert_eq!(items[0].child_index(), Some(0));
    assert_eq!(items[2].child_index(), Some(2));
    assert_eq!(items[0].previous_sibling(), None);
    assert_eq!(items[0].next_sibling(), Some(items[1]));
    assert_eq!(items[1].previous_sibling(), Some(items[0]));
    assert_eq!(items[2].next_sibling(), None);

    assert!(items[0].is_first_child());
    assert!(!items[0].is_last_child());
    assert!(items[2].is_last_child());
    assert_eq!(ul.first_child(), Some(items[0]));
    assert_eq!(ul.last_child(), Some(items[2]));
}

#[test]
fn root_has_no_child_index() {
    let tree = ul_li3();
    assert_eq!(tree.root().child_index(), None);
    assert_eq!(tree.root().next_sibling(), None);
}

#[test]
fn append_to_unknown_parent_fails() {
    let mut tree = AbbrTree::new();
    let err = tree
        .append(NodeId::new(42), NodeData::element("div"))
        .unwrap_err();
    assert_eq!(err, TreeError::UnknownNode(NodeId::new(42)));
}

#[test]
fn append_builds_nested_structure() {
    let mut tree = AbbrTree::new();
    let div = tree.append(NodeId::ROOT, NodeData::element("div")).unwrap();
    let text = tree.append(div, NodeData::text("hello")).unwrap();

    let node = tree.get(text).unwrap();
    assert!(node.is_text_only());
    assert_eq!(node.value(), Some("hello"));
    assert_eq!(node.parent().map(Node::id), Some(div));
    assert!(tree.validate().is_ok());
}

#[test]
fn walk_is_preorder_with_levels() {
    // div>(p>span)+a
    let tree = AbbrTree::from_specs([NodeSpec::element("div")
        .child(NodeSpec::element("p").child(NodeSpec::element("span")))
        .child(NodeSpec::element("a"))]);

    let mut seen = Vec::new();
    tree.walk(|node, level| seen.push((node.name().unwrap().to_string(), level)));

    assert_eq!(
        seen,
        vec![
            ("div".to_string(), 0),
            ("p".to_string(), 1),
            ("span".to_string(), 2),
            ("a".to_string(), 1),
        ]
    );
}

#[test]
fn ancestors_walk_up_to_root() {
    let tree = AbbrTree::from_specs([NodeSpec::element("a").child(NodeSpec::element("b"))]);
    let b = tree.root().first_child().unwrap().first_child().unwrap();
    let names: Vec<_> = b.ancestors().map(Node::name).collect();
    assert_eq!(names, vec![Some("a"), None]);
}

#[test]
fn from_raw_accepts_consistent_links() {
    let nodes = vec![
        RawNode {
            children: vec![NodeId::new(1)],
            ..Default::default()
        },
        RawNode {
            data: NodeData::element("div"),
            parent: Some(NodeId::ROOT),
            children: vec![],
        },
    ];
    let tree = AbbrTree::from_raw(nodes).unwrap();
    assert_eq!(tree.root().first_child().unwrap().name(), Some("div"));
}

#[test]
fn from_raw_rejects_parent_mismatch() {
    let nodes = vec![
        RawNode {
            children: vec![NodeId::new(1), NodeId::new(2)],
            ..Default::default()
        },
        RawNode {
            data: NodeData::element("a"),
            parent: Some(NodeId::ROOT),
            children: vec![],
        },
        RawNode {
            data: NodeData::element("b"),
            parent: Some(NodeId::new(1)),
            children: vec![],
        },
    ];
    assert_eq!(
        AbbrTree::from_raw(nodes).unwrap_err(),
        TreeError::ParentMismatch {
            child: NodeId::new(2),
            listed: NodeId::ROOT,
            actual: Some(NodeId::new(1)),
        }
    );
}

#[test]
fn from_raw_rejects_detached_cycle() {
    // slots 1 and 2 list each other and never hang off the root
    let nodes = vec![
        RawNode::default(),
        RawNode {
            data: NodeData::element("a"),
            parent: Some(NodeId::new(2)),
            children: vec![NodeId::new(2)],
        },
        RawNode {
            data: NodeData::element("b"),
            parent: Some(NodeId::new(1)),
            children: vec![NodeId::new(1)],
        },
    ];
    assert_eq!(
        AbbrTree::from_raw(nodes).unwrap_err(),
        TreeError::Detached(NodeId::new(1))
    );
}

#[test]
fn from_raw_rejects_detached_nodes() {
    let nodes = vec![
        RawNode::default(),
        RawNode {
            data: NodeData::element("orphan"),
            parent: Some(NodeId::ROOT),
            children: vec![],
        },
    ];
    assert_eq!(
        AbbrTree::from_raw(nodes).unwrap_err(),
        TreeError::Detached(NodeId::new(1))
    );
}

#[test]
fn from_raw_rejects_root_with_parent() {
    let nodes = vec![RawNode {
        parent: Some(NodeId::new(3)),
        ..Default::default()
    }];
    assert_eq!(
        AbbrTree::from_raw(nodes).unwrap_err(),
        TreeError::RootHasParent(NodeId::new(3))
    );
}

#[test]
fn from_raw_rejects_duplicate_children() {
    let nodes = vec![
        RawNode {
            children: vec![NodeId::new(1), NodeId::new(1)],
            ..Default::default()
        },
        RawNode {
            data: NodeData::element("a"),
            parent: Some(NodeId::ROOT),
            children: vec![],
        },
    ];
    assert_eq!(
        AbbrTree::from_raw(nodes).unwrap_err(),
        TreeError::DuplicateChild(NodeId::new(1))
    );
}

#[test]
fn from_raw_rejects_empty_arena() {
    assert_eq!(AbbrTree::from_raw(Vec::new()).unwrap_err(), TreeError::MissingRoot);
}

#[test]
fn tree_error_messages() {
    assert_eq!(
        TreeError::UnknownNode(NodeId::new(7)).to_string(),
        "node #7 does not exist in this tree"
    );
    assert_eq!(
        TreeError::Detached(NodeId::new(2)).to_string(),
        "node #2 is not reachable from the root"
    );
}

#[test]
fn spec_attributes_and_flags() {
    let tree = AbbrTree::from_specs([NodeSpec::element("input")
        .attr("type", "text")
        .boolean_attr("disabled")
        .implied_attr("name", None)
        .self_closing()]);
    let input = tree.root().first_child().unwrap();

    assert!(input.is_self_closing());
    let attrs = input.attributes();
    assert_eq!(attrs.len(), 3);
    assert_eq!(attrs[0].value.as_deref(), Some("text"));
    assert!(attrs[1].is_boolean());
    assert!(attrs[2].is_implied());
    assert_eq!(attrs[2].value, None);
}
