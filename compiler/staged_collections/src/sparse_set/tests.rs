use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_insert_get_remove_round_trip() {
    let mut set = SparseSet::new();
    set.insert(5, "x");
    assert_eq!(set.get(5), Some(&"x"));
    assert_eq!(set.remove(5), Some("x"));
    assert_eq!(set.get(5), None);
    assert!(set.check_invariant());
}

#[test]
fn test_get_out_of_range_and_empty() {
    let mut set = SparseSet::new();
    assert_eq!(set.get(0), None);
    set.insert(3, 1);
    assert_eq!(set.get(2), None);
    assert_eq!(set.get(100), None);
    assert!(set.contains(3));
    assert!(!set.contains(0));
}

#[test]
fn test_remove_absent_is_noop() {
    let mut set: SparseSet<i32> = SparseSet::new();
    assert_eq!(set.remove(0), None);
    assert_eq!(set.remove(42), None);

    set.insert(1, 10);
    let before = set.clone();
    assert_eq!(set.remove(0), None);
    assert_eq!(set.remove(9), None);
    assert_eq!(set, before);
}

#[test]
fn test_insert_occupied_overwrites_in_place() {
    let mut set = SparseSet::new();
    set.insert(2, 'a');
    set.insert(4, 'b');
    set.insert(2, 'c');
    assert_eq!(set.len(), 2);
    assert_eq!(set.dense(), &['c', 'b']);
    assert_eq!(set.dense_to_sparse(), &[2, 4]);
}

#[test]
fn test_sparse_layout_uses_one_based_slots() {
    let mut set = SparseSet::new();
    set.insert(7, 'a');
    set.insert(2, 'b');
    set.insert(5, 'c');
    assert_eq!(set.sparse(), &[0, 0, 2, 0, 0, 3, 0, 1]);
    assert_eq!(set.dense_to_sparse(), &[7, 2, 5]);
}

#[test]
fn test_remove_moves_last_into_hole() {
    let mut set = SparseSet::new();
    set.insert(0, "zero");
    set.insert(1, "one");
    set.insert(2, "two");

    assert_eq!(set.remove(0), Some("zero"));
    assert_eq!(set.dense(), &["two", "one"]);
    assert_eq!(set.dense_to_sparse(), &[2, 1]);
    assert_eq!(set.sparse(), &[0, 2, 1]);
    assert_eq!(set.get(2), Some(&"two"));
    assert!(set.check_invariant());
}

#[test]
fn test_remove_last_dense_value() {
    let mut set = SparseSet::new();
    set.insert(0, 1);
    set.insert(1, 2);
    assert_eq!(set.remove(1), Some(2));
    assert_eq!(set.dense(), &[1]);
    assert_eq!(set.sparse(), &[1, 0]);
    assert!(set.check_invariant());
}

#[test]
fn test_get_mut() {
    let mut set = SparseSet::new();
    set.insert(3, 1);
    if let Some(value) = set.get_mut(3) {
        *value += 10;
    }
    assert_eq!(set.get(3), Some(&11));
    assert_eq!(set.get_mut(4), None);
}

#[test]
fn test_iter_pairs_in_dense_order() {
    let mut set = SparseSet::new();
    set.insert(9, 'x');
    set.insert(1, 'y');
    let pairs: Vec<_> = set.iter().collect();
    assert_eq!(pairs, vec![(9, &'x'), (1, &'y')]);
}

#[test]
fn test_free_empties() {
    let mut set = SparseSet::new();
    set.insert(4, 4);
    set.free();
    assert!(set.is_empty());
    assert!(set.sparse().is_empty());
    assert_eq!(set.get(4), None);
    set.insert(4, 5);
    assert_eq!(set.get(4), Some(&5));
}

#[test]
#[should_panic(expected = "sparse set index out of range")]
fn test_insert_at_max_index_panics() {
    let mut set = SparseSet::new();
    set.insert(usize::MAX, 'x');
}
