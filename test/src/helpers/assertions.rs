/// Assert that the remote's mirror holds exactly the authoring world's entities,
/// with identical content
#[macro_export]
macro_rules! assert_mirrored {
    ($world:expr, $remote:expr) => {{
        use livelink_shared::WorldSnapshot;
        let world_ids = $world.stable_ids();
        let mirror_ids = $remote.mirror().stable_ids();
        assert_eq!(world_ids, mirror_ids, "Mirror holds a different set of entities");
        for id in &world_ids {
            assert_eq!(
                $world.content(id),
                $remote.mirror().content(id),
                "Mirror content differs for entity {:?}",
                id
            );
        }
    }};
}

/// Assert that a frame list carries exactly the given opcodes, in order
#[macro_export]
macro_rules! assert_opcodes {
    ($frames:expr, [$($opcode:expr),* $(,)?]) => {{
        let actual: Vec<livelink_shared::Opcode> =
            $frames.iter().map(|frame| frame.opcode()).collect();
        let expected: Vec<livelink_shared::Opcode> = vec![$($opcode),*];
        assert_eq!(actual, expected, "Unexpected frame sequence");
    }};
}
