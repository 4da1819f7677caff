use livelink_serde::{deserialize, serialize_with, Serde, WriterConfig};

use crate::{diff::change_set::ChangeSet, resources::resource_set_message::ResourceSetMessage};

use super::{
    asset_bundle::{AssetBundleRequest, AssetBundleResponse},
    connect::ConnectMessage,
    error::ProtocolError,
    frame::MessageFrame,
    opcode::Opcode,
};

/// A decoded protocol message. Each variant maps to exactly one [`Opcode`].
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum LiveMessage {
    Connect(ConnectMessage),
    SetLoadedResources(ResourceSetMessage),
    ApplyChangeSet(ChangeSet),
    Reset,
    RequestAssetBundles(AssetBundleRequest),
    ResponseAssetBundles(AssetBundleResponse),
}

impl LiveMessage {
    pub fn opcode(&self) -> Opcode {
        match self {
            LiveMessage::Connect(_) => Opcode::Connect,
            LiveMessage::SetLoadedResources(_) => Opcode::SetLoadedResources,
            LiveMessage::ApplyChangeSet(_) => Opcode::ApplyChangeSet,
            LiveMessage::Reset => Opcode::Reset,
            LiveMessage::RequestAssetBundles(_) => Opcode::RequestAssetBundles,
            LiveMessage::ResponseAssetBundles(_) => Opcode::ResponseAssetBundles,
        }
    }

    pub fn to_frame(&self) -> MessageFrame {
        self.to_frame_with(&WriterConfig::default())
    }

    pub fn to_frame_with(&self, config: &WriterConfig) -> MessageFrame {
        match self {
            LiveMessage::Connect(message) => frame(self.opcode(), message, config),
            LiveMessage::SetLoadedResources(message) => frame(self.opcode(), message, config),
            LiveMessage::ApplyChangeSet(change_set) => frame(self.opcode(), change_set, config),
            LiveMessage::Reset => frame(self.opcode(), &(), config),
            LiveMessage::RequestAssetBundles(request) => frame(self.opcode(), request, config),
            LiveMessage::ResponseAssetBundles(response) => frame(self.opcode(), response, config),
        }
    }

    /// Decodes the frame's payload according to its opcode, using the object table
    /// the frame carries. The payload must be consumed exactly.
    pub fn from_frame(frame: &MessageFrame) -> Result<Self, ProtocolError> {
        let opcode = frame.opcode();
        let payload = frame.payload();
        let objects = frame.objects();
        let invalid = |error| ProtocolError::InvalidPayload { opcode, error };

        let message = match opcode {
            Opcode::Connect => LiveMessage::Connect(deserialize(payload, objects).map_err(invalid)?),
            Opcode::SetLoadedResources => {
                LiveMessage::SetLoadedResources(deserialize(payload, objects).map_err(invalid)?)
            }
            Opcode::ApplyChangeSet => {
                LiveMessage::ApplyChangeSet(deserialize(payload, objects).map_err(invalid)?)
            }
            Opcode::Reset => {
                deserialize::<()>(payload, objects).map_err(invalid)?;
                LiveMessage::Reset
            }
            Opcode::RequestAssetBundles => {
                LiveMessage::RequestAssetBundles(deserialize(payload, objects).map_err(invalid)?)
            }
            Opcode::ResponseAssetBundles => {
                LiveMessage::ResponseAssetBundles(deserialize(payload, objects).map_err(invalid)?)
            }
        };
        Ok(message)
    }

    /// Decodes a frame that must carry a change-set
    pub fn change_set_from_frame(frame: &MessageFrame) -> Result<ChangeSet, ProtocolError> {
        match Self::from_frame(frame)? {
            LiveMessage::ApplyChangeSet(change_set) => Ok(change_set),
            other => Err(ProtocolError::UnexpectedOpcode {
                expected: Opcode::ApplyChangeSet,
                actual: other.opcode(),
            }),
        }
    }
}

fn frame<T: Serde>(opcode: Opcode, value: &T, config: &WriterConfig) -> MessageFrame {
    let config = WriterConfig {
        initial_capacity: config.initial_capacity.max(value.byte_length() as usize),
        ..*config
    };
    let (payload, objects) = serialize_with(value, &config);
    MessageFrame::new(opcode, payload, objects)
}
