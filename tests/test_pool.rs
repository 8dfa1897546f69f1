use beam_shooter::pool::SlotPool;

type Pool = SlotPool<u32, 4>;

fn full_pool() -> Pool {
    let mut pool = Pool::new();
    for v in 0..4 {
        pool.try_allocate(v);
    }
    pool
}

// ── try_allocate ──────────────────────────────────────────────────────────────

#[test]
fn allocate_fills_lowest_index_first() {
    let mut pool = Pool::new();
    assert_eq!(pool.try_allocate(10), Some(0));
    assert_eq!(pool.try_allocate(11), Some(1));
    assert_eq!(pool.try_allocate(12), Some(2));
}

#[test]
fn allocate_reuses_released_hole_before_tail() {
    let mut pool = full_pool();
    pool.deactivate(1);
    assert_eq!(pool.try_allocate(99), Some(1));
    assert_eq!(pool.get(1), Some(&99));
}

#[test]
fn allocate_into_full_pool_is_refused_and_leaves_pool_unchanged() {
    let mut pool = full_pool();
    let before: Vec<_> = pool.iter().map(|(i, v)| (i, *v)).collect();

    assert_eq!(pool.try_allocate(42), None);

    let after: Vec<_> = pool.iter().map(|(i, v)| (i, *v)).collect();
    assert_eq!(before, after);
    assert!(pool.is_full());
}

// ── deactivate ────────────────────────────────────────────────────────────────

#[test]
fn deactivate_is_idempotent() {
    let mut pool = full_pool();
    pool.deactivate(2);
    pool.deactivate(2);
    assert!(!pool.is_active(2));
    assert_eq!(pool.active_count(), 3);
}

#[test]
fn deactivate_out_of_range_is_ignored() {
    let mut pool = full_pool();
    pool.deactivate(100);
    assert_eq!(pool.active_count(), 4);
}

#[test]
fn clear_releases_everything() {
    let mut pool = full_pool();
    pool.clear();
    assert!(pool.is_empty());
    assert_eq!(pool.capacity(), 4);
}

// ── iteration ─────────────────────────────────────────────────────────────────

#[test]
fn active_indices_skip_vacant_slots_in_ascending_order() {
    let mut pool = full_pool();
    pool.deactivate(0);
    pool.deactivate(2);
    let indices: Vec<_> = pool.active_indices().collect();
    assert_eq!(indices, vec![1, 3]);
}

#[test]
fn active_indices_is_restartable() {
    let pool = full_pool();
    let first: Vec<_> = pool.active_indices().collect();
    let second: Vec<_> = pool.active_indices().collect();
    assert_eq!(first, second);
}

#[test]
fn iter_mut_updates_in_place() {
    let mut pool = full_pool();
    for (_, v) in pool.iter_mut() {
        *v += 100;
    }
    assert_eq!(pool.get(3), Some(&103));
}

// ── retain ────────────────────────────────────────────────────────────────────

#[test]
fn retain_visits_each_active_slot_once_and_releases_after_visit() {
    let mut pool = full_pool();
    pool.deactivate(1);

    let mut visited = Vec::new();
    let released = pool.retain(|index, v| {
        visited.push(index);
        *v % 2 == 0
    });

    assert_eq!(visited, vec![0, 2, 3]);
    assert_eq!(released, 1); // value 3 at slot 3
    assert_eq!(pool.active_indices().collect::<Vec<_>>(), vec![0, 2]);
}

#[test]
fn retain_on_empty_pool_releases_nothing() {
    let mut pool = Pool::new();
    assert_eq!(pool.retain(|_, _| false), 0);
}
