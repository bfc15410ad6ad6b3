use std::cmp::Ordering;
use std::convert::Infallible;

use crate::order::TryOrd;
use crate::{InvalidArg, MaximaMap};

#[test]
fn empty_map() {
    let map: MaximaMap<i32, i32> = MaximaMap::new();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.iter().count(), 0);
    assert_eq!(map.maxima().count(), 0);
    assert_eq!(map.peak(), None);
}

#[test]
fn set_one() {
    let mut map = MaximaMap::new();
    map.set_value(7, 42).unwrap();
    assert_eq!(map.len(), 1);
    assert!(!map.is_empty());
}

#[test]
fn round_trip() {
    let mut map = MaximaMap::new();
    map.set_value("arg", 100).unwrap();
    assert_eq!(map.value_at(&"arg"), Ok(&100));
    assert_eq!(map.get(&"arg"), Some(&100));
    assert!(map.contains_arg(&"arg"));
}

#[test]
fn value_at_missing() {
    let mut map = MaximaMap::new();
    map.set_value(1, 1).unwrap();
    assert_eq!(map.value_at(&2), Err(InvalidArg));
    assert_eq!(map.get(&2), None);
    assert!(!map.contains_arg(&2));
}

#[test]
fn overwrite_value() {
    let mut map = MaximaMap::new();
    map.set_value("k", 1).unwrap();
    map.set_value("k", 2).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.value_at(&"k"), Ok(&2));
}

#[test]
fn erase_existing() {
    let mut map = MaximaMap::new();
    map.set_value(1, 10).unwrap();
    map.set_value(2, 20).unwrap();
    map.erase(&1).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.value_at(&1), Err(InvalidArg));
    assert_eq!(map.value_at(&2), Ok(&20));
}

#[test]
fn erase_missing_is_noop() {
    let mut map = MaximaMap::new();
    map.set_value(1, 10).unwrap();
    map.erase(&9).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.value_at(&1), Ok(&10));
}

#[test]
fn erase_all() {
    let mut map = MaximaMap::new();
    for i in 0..5 {
        map.set_value(i, i).unwrap();
    }
    for i in 0..5 {
        map.erase(&i).unwrap();
    }
    assert!(map.is_empty());
    assert_eq!(map.maxima().count(), 0);
}

/// Value ordered by `rank` alone; `tag` rides along to make equivalent but
/// distinguishable values.
#[derive(Clone, Debug)]
struct Score {
    rank: i32,
    tag: u8,
}

impl TryOrd for Score {
    type Error = Infallible;

    fn try_cmp(&self, other: &Self) -> Result<Ordering, Infallible> {
        Ok(self.rank.cmp(&other.rank))
    }
}

#[test]
fn equivalent_overwrite_is_noop() {
    let mut map = MaximaMap::new();
    map.set_value(1, Score { rank: 5, tag: 1 }).unwrap();

    // Same rank, different tag: equivalent under the order, so nothing moves.
    map.set_value(1, Score { rank: 5, tag: 2 }).unwrap();
    assert_eq!(map.value_at(&1).unwrap().tag, 1);

    // A non-equivalent rank does replace the stored value.
    map.set_value(1, Score { rank: 6, tag: 3 }).unwrap();
    assert_eq!(map.value_at(&1).unwrap().tag, 3);
}
