use avl_collections::avl_tree::{AvlSet, Config};
use rand::{Rng, SeedableRng, XorShiftRng};
use simplelog::{LevelFilter, TestLogger};
use std::collections::BTreeSet;

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, simplelog::Config::default());
}

fn checked_set() -> AvlSet<u32> {
    AvlSet::with_config(Config::new().check_consistency(true))
}

// Upper bound on the height of an avl tree with `len` nodes.
fn max_height(len: usize) -> usize {
    (1.44 * ((len + 2) as f64).log2()).floor() as usize
}

#[test]
fn int_test_ascending_insert_height() {
    init_logging();
    let mut set = checked_set();
    for i in 0..10 {
        assert!(set.insert(i));
    }

    assert_eq!(set.len(), 10);
    assert!(set.height() <= 4);
    assert_eq!(set.to_string(), "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]");
}

#[test]
fn int_test_sequential_insert_remove() {
    init_logging();
    let mut set = checked_set();
    for i in 0..1000 {
        set.insert(i);
    }
    assert!(set.height() <= max_height(set.len()));

    for i in (0..1000).filter(|i| i % 3 == 0) {
        assert!(set.remove(&i));
    }
    assert!(set.height() <= max_height(set.len()));

    let expected: Vec<u32> = (0..1000).filter(|i| i % 3 != 0).collect();
    assert_eq!(set.traverse().into_iter().cloned().collect::<Vec<u32>>(), expected);
}

#[test]
fn int_test_random_operations() {
    init_logging();
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = checked_set();
    let mut expected = BTreeSet::new();

    for _ in 0..10000 {
        let value = rng.gen_range(0, 500);
        if rng.gen::<bool>() {
            assert_eq!(set.insert(value), expected.insert(value));
        } else {
            assert_eq!(set.remove(&value), expected.remove(&value));
        }
        assert_eq!(set.len(), expected.len());
    }

    assert!(set.height() <= max_height(set.len()));
    for value in 0..500 {
        assert_eq!(set.contains(&value), expected.contains(&value));
    }

    let mut actual = Vec::new();
    set.for_each(|value| actual.push(*value));
    assert_eq!(actual, expected.into_iter().collect::<Vec<u32>>());
}

#[test]
fn int_test_random_insert_then_drain() {
    init_logging();
    let mut rng: XorShiftRng = SeedableRng::from_seed([2, 3, 5, 7]);
    let mut set = AvlSet::new();
    let mut values = Vec::new();

    for _ in 0..100000 {
        let value = rng.gen::<u32>();
        if set.insert(value) {
            values.push(value);
        }
    }
    assert_eq!(set.len(), values.len());
    assert_eq!(set.check_consistency(), Ok(()));
    assert!(set.height() <= max_height(set.len()));

    rng.shuffle(&mut values);
    for (index, value) in values.iter().enumerate() {
        assert!(set.contains(value));
        assert_eq!(set.take(value), Some(*value));
        assert!(!set.contains(value));
        if index % 1000 == 0 {
            assert_eq!(set.check_consistency(), Ok(()));
        }
    }

    assert!(set.is_empty());
    assert_eq!(set.to_string(), "[]");
}

#[test]
fn int_test_strictly_ascending_traversal() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([4, 4, 4, 4]);
    let set: AvlSet<i64> = (0..5000).map(|_| rng.gen_range(-1000, 1000)).collect();

    let traversal = set.traverse();
    assert_eq!(traversal.len(), set.len());
    for pair in traversal.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}
