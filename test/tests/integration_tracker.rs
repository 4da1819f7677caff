/// Integration tests for the scene resource tracker driven by a real world
use livelink_shared::{ResourceId, ResourceSetTracker};
use livelink_test::TestWorld;

fn resource(id: u128) -> ResourceId {
    ResourceId::from_u128(id)
}

#[test]
fn unchanged_resources_produce_no_messages() {
    let mut world = TestWorld::default();
    let mut tracker = ResourceSetTracker::new();
    world.load_resource(resource(1));
    world.load_resource(resource(2));

    let first = tracker.tick(&world).expect("first tick reports the loaded set");
    assert_eq!(first.loaded(), &[resource(1), resource(2)]);
    assert!(first.removed().is_empty());

    for _ in 0..10 {
        assert!(tracker.tick(&world).is_none());
    }
}

#[test]
fn loading_and_unloading_are_reported() {
    let mut world = TestWorld::default();
    let mut tracker = ResourceSetTracker::new();
    world.load_resource(resource(1));
    tracker.tick(&world);

    world.load_resource(resource(3));
    let loaded = tracker.tick(&world).unwrap();
    assert_eq!(loaded.loaded(), &[resource(1), resource(3)]);

    world.unload_resource(resource(1));
    let unloaded = tracker.tick(&world).unwrap();
    world.finish_tick();
    assert_eq!(unloaded.loaded(), &[resource(3)]);
    assert_eq!(unloaded.removed(), &[resource(1)]);

    assert!(tracker.tick(&world).is_none());
}

#[test]
fn reset_reports_the_full_set_again() {
    let mut world = TestWorld::default();
    let mut tracker = ResourceSetTracker::new();
    world.load_resource(resource(5));
    tracker.tick(&world);
    assert!(tracker.tick(&world).is_none());

    tracker.reset();
    let message = tracker.tick(&world).expect("reset forces a message");
    assert_eq!(message.loaded(), &[resource(5)]);
    assert!(tracker.tick(&world).is_none());
}

#[test]
fn reset_with_nothing_loaded_still_reports() {
    let world = TestWorld::default();
    let mut tracker = ResourceSetTracker::new();
    assert!(tracker.tick(&world).is_none());

    tracker.reset();
    let message = tracker.tick(&world).expect("reset forces a message");
    assert!(message.loaded().is_empty());
}
