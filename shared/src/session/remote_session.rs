use std::collections::HashMap;

use livelink_serde::ObjectTable;
use log::{debug, info, warn};

use crate::{
    config::LiveLinkConfig,
    connection::decoder::Decoder,
    protocol::{
        asset_bundle::{AssetBundle, AssetBundleRequest},
        connect::ConnectMessage,
        frame::MessageFrame,
        live_message::LiveMessage,
        ProtocolError,
    },
    resources::resource_id::ResourceId,
    world::mirror_world::MirrorWorld,
};

use super::error::LiveLinkError;

/// The receiving side of a live link. Keeps a [`MirrorWorld`] in step with the
/// authoring world by applying the frames it is sent.
pub struct RemoteSession {
    config: LiveLinkConfig,
    session: u64,
    mirror: MirrorWorld,
    loaded_resources: Vec<ResourceId>,
    asset_bundles: HashMap<ResourceId, AssetBundle>,
    decoder: Decoder,
}

impl RemoteSession {
    pub fn new(config: LiveLinkConfig, session: u64) -> Result<Self, LiveLinkError> {
        config.writer.validate()?;
        let decoder = Decoder::try_new(config.compression.as_ref()).map_err(ProtocolError::from)?;
        Ok(Self {
            config,
            session,
            mirror: MirrorWorld::new(),
            loaded_resources: Vec::new(),
            asset_bundles: HashMap::new(),
            decoder,
        })
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn mirror(&self) -> &MirrorWorld {
        &self.mirror
    }

    /// Resources the authoring side last reported as loaded, ascending
    pub fn loaded_resources(&self) -> &[ResourceId] {
        &self.loaded_resources
    }

    pub fn asset_bundle(&self, id: &ResourceId) -> Option<&AssetBundle> {
        self.asset_bundles.get(id)
    }

    /// The handshake to send when (re)connecting
    pub fn connect_frame(&self) -> MessageFrame {
        LiveMessage::Connect(ConnectMessage {
            protocol_version: self.config.protocol_version,
            session: self.session,
        })
        .to_frame_with(&self.config.writer)
    }

    pub fn request_asset_bundles(&self, ids: Vec<ResourceId>) -> MessageFrame {
        LiveMessage::RequestAssetBundles(AssetBundleRequest { ids })
            .to_frame_with(&self.config.writer)
    }

    /// Applies one frame from the authoring side and returns the frames to send
    /// back. A frame that cannot be applied is discarded, the mirror is cleared
    /// and a `Reset` is returned so the authoring side resends everything.
    pub fn receive(&mut self, frame: &MessageFrame) -> Vec<MessageFrame> {
        match self.try_receive(frame) {
            Ok(()) => Vec::new(),
            Err(error) => self.request_reset(error),
        }
    }

    /// Like [`RemoteSession::receive`], starting from the bytes on the wire and the
    /// object table that travelled with them
    pub fn receive_bytes(&mut self, bytes: &[u8], objects: ObjectTable) -> Vec<MessageFrame> {
        match self.read_frame(bytes, objects) {
            Ok(frame) => self.receive(&frame),
            Err(error) => self.request_reset(error),
        }
    }

    pub fn try_receive(&mut self, frame: &MessageFrame) -> Result<(), LiveLinkError> {
        match LiveMessage::from_frame(frame)? {
            LiveMessage::ApplyChangeSet(change_set) => {
                self.mirror.apply(&change_set)?;
            }
            LiveMessage::SetLoadedResources(message) => {
                let (loaded, removed) = message.into_parts();
                for id in &removed {
                    self.asset_bundles.remove(id);
                }
                debug!(
                    "RemoteSession: {} resources loaded, {} removed",
                    loaded.len(),
                    removed.len()
                );
                self.loaded_resources = loaded;
            }
            LiveMessage::Reset => {
                info!("RemoteSession: authoring side reset the link");
                self.clear();
            }
            LiveMessage::ResponseAssetBundles(response) => {
                debug!("RemoteSession: received {} asset bundles", response.bundles.len());
                for bundle in response.bundles {
                    self.asset_bundles.insert(bundle.id, bundle);
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

    fn read_frame(&mut self, bytes: &[u8], objects: ObjectTable) -> Result<MessageFrame, LiveLinkError> {
        let decoded = self.decoder.try_decode(bytes).map_err(ProtocolError::from)?;
        Ok(MessageFrame::read_exact(decoded, objects)?)
    }

    fn request_reset(&mut self, error: LiveLinkError) -> Vec<MessageFrame> {
        warn!("RemoteSession: discarding frame and requesting a reset: {}", error);
        self.clear();
        vec![LiveMessage::Reset.to_frame_with(&self.config.writer)]
    }

    fn clear(&mut self) {
        self.mirror.clear();
        self.loaded_resources.clear();
    }
}
