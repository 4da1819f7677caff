use log::{debug, info, warn};

use crate::{
    config::LiveLinkConfig,
    connection::encoder::Encoder,
    diff::{baseline::Baseline, builder::ChangeSetBuilder, comparator::FingerprintComparator},
    protocol::{
        asset_bundle::{AssetBundleProvider, AssetBundleResponse},
        frame::MessageFrame,
        live_message::LiveMessage,
    },
    resources::{query::ResourceQuery, resource_id::ResourceId, tracker::ResourceSetTracker},
    world::{
        entity::{duplicate_validator::validate_unique_ids, located_id::sort_by_stable_id},
        snapshot::WorldSnapshot,
    },
};

use super::error::LiveLinkError;

/// The authoring side of a live link.
///
/// Every tick diffs the world against what the remote was last sent and produces
/// the frames that bring the remote up to date. Frames from the remote are fed
/// back through [`LiveLinkSession::handle_frame`].
pub struct LiveLinkSession {
    config: LiveLinkConfig,
    tracker: ResourceSetTracker,
    builder: ChangeSetBuilder,
    baseline: Baseline,
    encoder: Encoder,
    pending_reset: bool,
    pending_bundle_requests: Vec<ResourceId>,
    remote_session: Option<u64>,
}

impl LiveLinkSession {
    pub fn new(config: LiveLinkConfig) -> Result<Self, LiveLinkError> {
        config.writer.validate()?;
        let encoder = Encoder::try_new(config.compression.as_ref())?;
        Ok(Self {
            config,
            tracker: ResourceSetTracker::new(),
            builder: ChangeSetBuilder::new().with_comparator(FingerprintComparator),
            baseline: Baseline::new(),
            encoder,
            pending_reset: false,
            pending_bundle_requests: Vec::new(),
            remote_session: None,
        })
    }

    pub fn config(&self) -> &LiveLinkConfig {
        &self.config
    }

    /// Session id of the connected remote, if a `Connect` has been received
    pub fn remote_session(&self) -> Option<u64> {
        self.remote_session
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Produces the frames for one tick, in the order they must be sent.
    ///
    /// A world that fails id validation is not diffed and nothing is sent; the
    /// baseline stays where it was, so the next valid tick catches up.
    pub fn tick<W: WorldSnapshot + ResourceQuery>(
        &mut self,
        world: &W,
    ) -> Result<Vec<MessageFrame>, LiveLinkError> {
        if self.config.validate_ids {
            let mut located = world.located_ids();
            sort_by_stable_id(&mut located);
            validate_unique_ids(&located)?;
        }

        let mut frames = Vec::new();

        if self.pending_reset {
            frames.push(self.frame(&LiveMessage::Reset));
            self.pending_reset = false;
        }

        if let Some(message) = self.tracker.tick(world) {
            frames.push(self.frame(&LiveMessage::SetLoadedResources(message)));
        }

        let change_set = self.builder.diff_snapshots(&self.baseline, world);
        if !change_set.is_empty() {
            debug!(
                "LiveLinkSession: sending change-set (+{} -{} ~{})",
                change_set.added.len(),
                change_set.removed.len(),
                change_set.changed.len()
            );
            frames.push(self.frame(&LiveMessage::ApplyChangeSet(change_set)));
        }

        self.baseline = Baseline::capture(world);

        Ok(frames)
    }

    /// Reacts to a frame sent by the remote
    pub fn handle_frame(&mut self, frame: &MessageFrame) -> Result<(), LiveLinkError> {
        match LiveMessage::from_frame(frame)? {
            LiveMessage::Connect(connect) => {
                if connect.protocol_version != self.config.protocol_version {
                    warn!(
                        "LiveLinkSession: rejecting remote {:x} with protocol version {}",
                        connect.session, connect.protocol_version
                    );
                    return Err(LiveLinkError::ProtocolVersionMismatch {
                        expected: self.config.protocol_version,
                        actual: connect.protocol_version,
                    });
                }
                info!("LiveLinkSession: remote {:x} connected", connect.session);
                // A re-handshake may race frames already sent to the old mirror
                let reconnect = self.remote_session.replace(connect.session).is_some();
                self.clear_state();
                self.pending_reset |= reconnect;
            }
            LiveMessage::Reset => {
                info!("LiveLinkSession: remote requested a reset");
                // More requests may be in flight; every resend must start from an
                // empty mirror
                self.reset_with_frame();
            }
            LiveMessage::RequestAssetBundles(request) => {
                debug!(
                    "LiveLinkSession: remote requested {} asset bundles",
                    request.ids.len()
                );
                for id in request.ids {
                    if !self.pending_bundle_requests.contains(&id) {
                        self.pending_bundle_requests.push(id);
                    }
                }
            }
            other => {
                return Err(LiveLinkError::UnexpectedMessage {
                    opcode: other.opcode(),
                })
            }
        }
        Ok(())
    }

    /// Forgets everything the remote was sent. The next tick starts with a `Reset`
    /// frame followed by the full world.
    pub fn reset(&mut self) {
        info!("LiveLinkSession: reset");
        self.reset_with_frame();
    }

    pub fn has_pending_bundle_requests(&self) -> bool {
        !self.pending_bundle_requests.is_empty()
    }

    /// Answers every outstanding bundle request. Bundles the provider does not
    /// have are left out of the response. Returns `None` if nothing was requested.
    pub fn respond_asset_bundles(
        &mut self,
        provider: &dyn AssetBundleProvider,
    ) -> Option<MessageFrame> {
        if self.pending_bundle_requests.is_empty() {
            return None;
        }

        let mut bundles = Vec::with_capacity(self.pending_bundle_requests.len());
        for id in self.pending_bundle_requests.drain(..) {
            match provider.asset_bundle(&id) {
                Some(bundle) => bundles.push(bundle),
                None => warn!("LiveLinkSession: no asset bundle for {:?}", id),
            }
        }

        let response = LiveMessage::ResponseAssetBundles(AssetBundleResponse { bundles });
        Some(self.frame(&response))
    }

    /// Turns a frame into the bytes put on the wire, compressed if configured.
    /// The frame's object table must be handed to the receiver alongside.
    pub fn encode_frame(&mut self, frame: &MessageFrame) -> Result<Vec<u8>, LiveLinkError> {
        let bytes = frame.try_to_bytes()?;
        Ok(self.encoder.try_encode(&bytes)?.to_vec())
    }

    fn reset_with_frame(&mut self) {
        self.clear_state();
        self.pending_reset = true;
    }

    fn clear_state(&mut self) {
        self.tracker.reset();
        self.baseline.clear();
    }

    fn frame(&self, message: &LiveMessage) -> MessageFrame {
        message.to_frame_with(&self.config.writer)
    }
}
