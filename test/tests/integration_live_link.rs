/// End-to-end tests: an authoring world synchronized into a remote mirror
/// through encoded frames
use livelink_serde::{ObjectRef, WriterConfig};
use livelink_shared::{
    AssetBundle, ChangeSet, ComponentData, ComponentKind, EntityContent, EntityContentDelta,
    LiveLinkConfig, LiveLinkError, LiveLinkSession, LiveMessage, Opcode, RemoteSession,
    ResourceId, StableId, WorldSnapshot,
};
use livelink_test::{
    assert_mirrored, assert_opcodes, deliver_to_authoring, deliver_to_remote, shared_value,
    tick_and_exchange, TestEntityBuilder, TestWorld,
};

fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

fn connected_pair() -> (LiveLinkSession, RemoteSession) {
    init_logger();
    let mut session = LiveLinkSession::new(LiveLinkConfig::default()).unwrap();
    let remote = RemoteSession::new(LiveLinkConfig::default(), 0x5EED).unwrap();
    session.handle_frame(&remote.connect_frame()).unwrap();
    (session, remote)
}

#[test]
fn handshake_records_remote_session() {
    let (session, _) = connected_pair();
    assert_eq!(session.remote_session(), Some(0x5EED));
}

#[test]
fn initial_world_is_mirrored() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    TestEntityBuilder::new().inline(1, &[1]).spawn(&mut world);
    TestEntityBuilder::new().inline(1, &[2]).inline(2, &[9, 9]).spawn(&mut world);
    world.load_resource(ResourceId::from_u128(40));

    let frames = tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    assert_opcodes!(frames, [Opcode::SetLoadedResources, Opcode::ApplyChangeSet]);
    assert_mirrored!(world, remote);
    assert_eq!(remote.loaded_resources(), &[ResourceId::from_u128(40)]);
}

#[test]
fn quiet_world_sends_nothing() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    TestEntityBuilder::new().inline(1, &[1]).spawn(&mut world);
    tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    for _ in 0..5 {
        let frames = tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();
        assert!(frames.is_empty());
    }
}

#[test]
fn spawn_despawn_and_edit_are_mirrored() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    let a = TestEntityBuilder::new().inline(1, &[1]).spawn(&mut world);
    let b = TestEntityBuilder::new().inline(1, &[2]).spawn(&mut world);
    tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    world.despawn(&a);
    let c = TestEntityBuilder::new().inline(3, &[3]).spawn(&mut world);
    world.set_component(&b, ComponentData::inline(ComponentKind::new(1), vec![20]));

    let frames = tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();
    assert_opcodes!(frames, [Opcode::ApplyChangeSet]);

    let change_set = LiveMessage::change_set_from_frame(&frames[0]).unwrap();
    assert_eq!(change_set.added, vec![c]);
    assert_eq!(change_set.removed, vec![a]);
    assert_eq!(change_set.changed, vec![b]);
    assert_mirrored!(world, remote);
}

#[test]
fn shared_values_arrive_through_object_table() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    let mesh = shared_value(77, b"vertices");
    let first = TestEntityBuilder::new().shared(5, &mesh).spawn(&mut world);
    let second = TestEntityBuilder::new().shared(5, &mesh).spawn(&mut world);

    let frames = tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    assert_opcodes!(frames, [Opcode::SetLoadedResources, Opcode::ApplyChangeSet]);
    assert_eq!(frames[1].objects().len(), 1);
    assert_mirrored!(world, remote);
    assert_eq!(remote.mirror().content(&first), remote.mirror().content(&second));
}

#[test]
fn duplicate_ids_stop_the_tick() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    let id = TestEntityBuilder::new().inline(1, &[1]).spawn(&mut world);
    world.insert_with_id(id, Vec::new());

    let result = tick_and_exchange(&mut session, &mut world, &mut remote);

    assert!(matches!(result, Err(LiveLinkError::Integrity(_))));
    assert!(remote.mirror().is_empty());
}

#[test]
fn drifted_remote_requests_reset_and_recovers() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    TestEntityBuilder::new().inline(1, &[1]).spawn(&mut world);
    tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    // A change-set that removes an entity the mirror never had
    let bogus = LiveMessage::ApplyChangeSet(ChangeSet {
        removed: vec![StableId::from_u128(u128::MAX)],
        ..ChangeSet::default()
    })
    .to_frame();
    let replies = deliver_to_remote(&mut session, &mut remote, &[bogus]).unwrap();
    assert_opcodes!(replies, [Opcode::Reset]);
    assert!(remote.mirror().is_empty());

    deliver_to_authoring(&mut session, &replies).unwrap();
    let frames = tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    assert_opcodes!(
        frames,
        [Opcode::Reset, Opcode::SetLoadedResources, Opcode::ApplyChangeSet]
    );
    assert_mirrored!(world, remote);
}

#[test]
fn overlapping_reset_requests_each_rebuild_cleanly() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    let a = TestEntityBuilder::new().inline(1, &[1]).spawn(&mut world);
    TestEntityBuilder::new().inline(1, &[2]).spawn(&mut world);
    tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    let bogus = LiveMessage::ApplyChangeSet(ChangeSet {
        removed: vec![StableId::from_u128(u128::MAX)],
        ..ChangeSet::default()
    })
    .to_frame();
    let first_request = deliver_to_remote(&mut session, &mut remote, &[bogus]).unwrap();
    assert_opcodes!(first_request, [Opcode::Reset]);

    // Sent before the first request reached the authoring side, so it hits the
    // wiped mirror and triggers a second request
    world.set_component(&a, ComponentData::inline(ComponentKind::new(1), vec![10]));
    let stale = session.tick(&world).unwrap();
    world.finish_tick();
    let second_request = deliver_to_remote(&mut session, &mut remote, &stale).unwrap();
    assert_opcodes!(second_request, [Opcode::Reset]);

    deliver_to_authoring(&mut session, &first_request).unwrap();
    let frames = tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();
    assert_opcodes!(
        frames,
        [Opcode::Reset, Opcode::SetLoadedResources, Opcode::ApplyChangeSet]
    );
    assert_mirrored!(world, remote);

    deliver_to_authoring(&mut session, &second_request).unwrap();
    let frames = session.tick(&world).unwrap();
    let replies = deliver_to_remote(&mut session, &mut remote, &frames).unwrap();

    assert!(replies.is_empty(), "second rebuild was rejected: {:?}", replies);
    assert_mirrored!(world, remote);
    assert!(tick_and_exchange(&mut session, &mut world, &mut remote)
        .unwrap()
        .is_empty());
}

#[test]
fn reconnect_rebuilds_the_mirror() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    TestEntityBuilder::new().inline(1, &[1]).spawn(&mut world);
    tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    session.handle_frame(&remote.connect_frame()).unwrap();
    let frames = tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    assert_opcodes!(
        frames,
        [Opcode::Reset, Opcode::SetLoadedResources, Opcode::ApplyChangeSet]
    );
    assert_mirrored!(world, remote);
}

#[test]
fn invalid_writer_config_is_refused() {
    init_logger();
    let config = LiveLinkConfig::new().writer(WriterConfig {
        initial_capacity: 64,
        alignment: 3,
    });

    assert!(matches!(
        LiveLinkSession::new(config.clone()),
        Err(LiveLinkError::InvalidConfig(_))
    ));
    assert!(matches!(
        RemoteSession::new(config, 1),
        Err(LiveLinkError::InvalidConfig(_))
    ));
}

#[test]
fn corrupt_bytes_request_reset() {
    let (_, mut remote) = connected_pair();
    let mut bytes = LiveMessage::Reset.to_frame().to_bytes();
    bytes.truncate(10);

    let replies = remote.receive_bytes(&bytes, Default::default());
    assert_opcodes!(replies, [Opcode::Reset]);
}

#[test]
fn authoring_reset_rebuilds_the_mirror() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    TestEntityBuilder::new().inline(1, &[1]).spawn(&mut world);
    tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    session.reset();
    let frames = tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    assert_opcodes!(
        frames,
        [Opcode::Reset, Opcode::SetLoadedResources, Opcode::ApplyChangeSet]
    );
    assert_mirrored!(world, remote);
}

#[test]
fn mismatched_protocol_version_is_refused() {
    init_logger();
    let mut session = LiveLinkSession::new(LiveLinkConfig::default()).unwrap();
    let remote = RemoteSession::new(LiveLinkConfig::new().protocol_version(2), 9).unwrap();

    assert_eq!(
        session.handle_frame(&remote.connect_frame()),
        Err(LiveLinkError::ProtocolVersionMismatch {
            expected: 1,
            actual: 2,
        })
    );
}

#[test]
fn asset_bundles_are_requested_and_delivered() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    let texture = ResourceId::from_u128(12);
    world.add_bundle(AssetBundle {
        id: texture,
        target_hash: 0xC0FFEE,
        data: ObjectRef::new(vec![1, 2, 3, 4]),
    });

    let request = remote.request_asset_bundles(vec![texture, ResourceId::from_u128(13)]);
    session.handle_frame(&request).unwrap();

    let response = session.respond_asset_bundles(&world).expect("a request is pending");
    assert_eq!(response.objects().len(), 1);
    let replies = deliver_to_remote(&mut session, &mut remote, &[response]).unwrap();
    assert!(replies.is_empty());

    let bundle = remote.asset_bundle(&texture).expect("bundle was delivered");
    assert_eq!(bundle.target_hash, 0xC0FFEE);
    assert_eq!(*bundle.data, vec![1, 2, 3, 4]);
    assert!(remote.asset_bundle(&ResourceId::from_u128(13)).is_none());
}

#[test]
fn unloaded_resource_drops_its_bundle() {
    let (mut session, mut remote) = connected_pair();
    let mut world = TestWorld::new(1);
    let texture = ResourceId::from_u128(12);
    world.load_resource(texture);
    world.add_bundle(AssetBundle {
        id: texture,
        target_hash: 1,
        data: ObjectRef::new(vec![7]),
    });
    tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    session
        .handle_frame(&remote.request_asset_bundles(vec![texture]))
        .unwrap();
    let response = session.respond_asset_bundles(&world).unwrap();
    deliver_to_remote(&mut session, &mut remote, &[response]).unwrap();
    assert!(remote.asset_bundle(&texture).is_some());

    world.unload_resource(texture);
    tick_and_exchange(&mut session, &mut world, &mut remote).unwrap();

    assert!(remote.loaded_resources().is_empty());
    assert!(remote.asset_bundle(&texture).is_none());
}

#[test]
fn hand_built_change_set_applies_on_remote() {
    let (_, mut remote) = connected_pair();
    let id = StableId::new(4, 0);
    let change_set = ChangeSet {
        added: vec![id],
        contents: vec![EntityContentDelta {
            id,
            content: EntityContent::default(),
        }],
        ..ChangeSet::default()
    };

    assert!(remote
        .receive(&LiveMessage::ApplyChangeSet(change_set).to_frame())
        .is_empty());
    assert!(remote.mirror().contains(&id));
}
