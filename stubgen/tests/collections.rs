mod common;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use stubgen::{create_stub, Stub};

#[derive(Debug, PartialEq, Stub)]
struct OnlyCommonCollections {
    int_list: Vec<i32>,
    int_deque: VecDeque<i32>,
    int_linked_list: LinkedList<i32>,
    string_set: HashSet<String>,
    ordered_string_set: BTreeSet<String>,
    double_map: HashMap<u64, f64>,
    ordered_double_map: BTreeMap<u64, f64>,
}

#[test]
fn test_common_collections_are_empty() {
    common::init_logging();
    let stub = create_stub::<OnlyCommonCollections>().unwrap();
    assert_eq!(
        stub,
        OnlyCommonCollections {
            int_list: Vec::new(),
            int_deque: VecDeque::new(),
            int_linked_list: LinkedList::new(),
            string_set: HashSet::new(),
            ordered_string_set: BTreeSet::new(),
            double_map: HashMap::new(),
            ordered_double_map: BTreeMap::new(),
        }
    );
}

#[derive(Debug, PartialEq, Stub)]
struct Tree {
    label: String,
    children: Vec<Tree>,
    by_name: HashMap<String, Tree>,
}

#[test]
fn test_collections_of_self_are_not_circular() {
    common::init_logging();
    let tree = create_stub::<Tree>().unwrap();
    assert_eq!(tree.label, "String");
    assert!(tree.children.is_empty());
    assert!(tree.by_name.is_empty());
}

#[derive(Debug, PartialEq, Stub)]
struct WithNullable {
    nullable: Option<i32>,
    nullable_list: Option<Vec<String>>,
    nullable_custom: Option<Tree>,
}

#[test]
fn test_nullable_is_none() {
    common::init_logging();
    let stub = create_stub::<WithNullable>().unwrap();
    assert_eq!(
        stub,
        WithNullable {
            nullable: None,
            nullable_list: None,
            nullable_custom: None,
        }
    );
}
