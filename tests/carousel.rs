use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use showcase::{CarouselConfig, CarouselEngine, Catalog, CategoryFilter, Direction, Item, Scheduler};

const PERIOD: Duration = Duration::from_millis(5_000);

fn items(n: u32) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(i, &format!("Project {i}"), "", "", "Residential"))
        .collect()
}

fn started(n: u32) -> CarouselEngine {
    let mut engine = CarouselEngine::new(items(n), CarouselConfig::default()).unwrap();
    engine.start();
    engine
}

#[test]
fn four_item_walkthrough() {
    let mut engine = started(4);
    assert_eq!(engine.cursor(), 0);

    engine.next();
    assert_eq!((engine.cursor(), engine.direction()), (1, Direction::Forward));
    engine.next();
    assert_eq!(engine.cursor(), 2);
    engine.previous();
    assert_eq!((engine.cursor(), engine.direction()), (1, Direction::Backward));

    engine.update(PERIOD);
    assert_eq!((engine.cursor(), engine.direction()), (2, Direction::Forward));

    let mut visited = Vec::new();
    for _ in 0..3 {
        engine.previous();
        visited.push(engine.cursor());
    }
    assert_eq!(visited, vec![1, 0, 3]);
}

#[test]
fn exactly_one_timer_after_every_change() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut engine = started(5);
    for _ in 0..300 {
        match rng.random_range(0..3) {
            0 => engine.next(),
            1 => engine.previous(),
            _ => engine.update(PERIOD),
        }
        assert_eq!(engine.scheduler().pending(), 1);
        assert!(engine.timer_active());
        assert!(engine.cursor() < 5);
    }
}

#[test]
fn partial_waits_never_accumulate_across_resets() {
    let mut engine = started(3);
    for _ in 0..10 {
        engine.update(PERIOD - Duration::from_millis(10));
        engine.next();
    }
    // Ten manual moves and no automatic ones.
    assert_eq!(engine.state().key(), 10);
    assert_eq!(engine.cursor(), 1);
}

#[test]
fn stopped_engine_leaves_nothing_scheduled() {
    let mut engine = started(2);
    engine.next();
    engine.stop();
    assert_eq!(engine.scheduler().pending(), 0);
    let cursor = engine.cursor();
    engine.update(PERIOD * 10);
    assert_eq!(engine.cursor(), cursor);
}

#[test]
fn filtered_catalog_feeds_the_carousel() {
    let catalog = Catalog::builtin();
    let mut filter = CategoryFilter::new();
    filter.select("commercial");
    let items: Vec<Item> = filter.apply(&catalog.items).into_iter().cloned().collect();
    let titles: Vec<_> = items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["Santa Monica Creative Studio", "Luxe Corporate Plaza"]);

    let mut engine = CarouselEngine::new(items, catalog.config).unwrap();
    engine.start();
    engine.update(PERIOD);
    assert_eq!(engine.state().current().title, "Luxe Corporate Plaza");
    engine.update(PERIOD);
    assert_eq!(engine.state().current().title, "Santa Monica Creative Studio");
}
