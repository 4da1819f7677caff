use super::error::ProtocolError;

// Upper half spells "livelink", then a 16-bit tag schema version
const TAG_BASE: u128 = 0x6c69_7665_6c69_6e6b_0001_0000_0000_0000;

/// The closed set of message kinds, each identified on the wire by a fixed
/// 128-bit tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Handshake sent by a remote process when it (re)connects
    Connect,
    /// Full set of loaded resources plus those just unloaded
    SetLoadedResources,
    /// A change-set to apply to the remote world
    ApplyChangeSet,
    /// Discard synchronization state and start over from a full baseline
    Reset,
    /// Ask for content-addressed asset bundles by id
    RequestAssetBundles,
    /// Asset bundles answering an earlier request
    ResponseAssetBundles,
}

impl Opcode {
    pub const ALL: [Opcode; 6] = [
        Opcode::Connect,
        Opcode::SetLoadedResources,
        Opcode::ApplyChangeSet,
        Opcode::Reset,
        Opcode::RequestAssetBundles,
        Opcode::ResponseAssetBundles,
    ];

    pub const fn to_tag(&self) -> u128 {
        let index: u128 = match self {
            Opcode::Connect => 1,
            Opcode::SetLoadedResources => 2,
            Opcode::ApplyChangeSet => 3,
            Opcode::Reset => 4,
            Opcode::RequestAssetBundles => 5,
            Opcode::ResponseAssetBundles => 6,
        };
        TAG_BASE | index
    }

    /// Unknown tags are rejected rather than guessed at.
    pub fn from_tag(tag: u128) -> Result<Self, ProtocolError> {
        Self::ALL
            .iter()
            .find(|opcode| opcode.to_tag() == tag)
            .copied()
            .ok_or(ProtocolError::UnknownOpcode { tag })
    }
}
