use livelink_shared::{LiveLinkError, LiveLinkSession, MessageFrame, RemoteSession};

use crate::TestWorld;

/// Sends frames from the authoring side through wire bytes and returns whatever
/// the remote answered
pub fn deliver_to_remote(
    session: &mut LiveLinkSession,
    remote: &mut RemoteSession,
    frames: &[MessageFrame],
) -> Result<Vec<MessageFrame>, LiveLinkError> {
    let mut replies = Vec::new();
    for frame in frames {
        let bytes = session.encode_frame(frame)?;
        replies.extend(remote.receive_bytes(&bytes, frame.objects().clone()));
    }
    Ok(replies)
}

pub fn deliver_to_authoring(
    session: &mut LiveLinkSession,
    frames: &[MessageFrame],
) -> Result<(), LiveLinkError> {
    for frame in frames {
        session.handle_frame(frame)?;
    }
    Ok(())
}

/// Runs one authoring tick, delivers its frames and feeds the replies back.
/// Returns the frames that were sent to the remote.
pub fn tick_and_exchange(
    session: &mut LiveLinkSession,
    world: &mut TestWorld,
    remote: &mut RemoteSession,
) -> Result<Vec<MessageFrame>, LiveLinkError> {
    let frames = session.tick(&*world)?;
    world.finish_tick();
    let replies = deliver_to_remote(session, remote, &frames)?;
    deliver_to_authoring(session, &replies)?;
    Ok(frames)
}
