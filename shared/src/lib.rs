//! # LiveLink Shared
//! Stable entity identity, world diffing and the live synchronization protocol
//! used between an authoring process and the remote processes mirroring it.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

pub use livelink_serde::{
    deserialize, serialize, serialize_with, BufferReader, BufferWriter, ConstByteLength,
    ObjectRef, ObjectTable, Serde, SerdeErr, WriterConfig, WriterConfigError, DEFAULT_ALIGNMENT,
    DEFAULT_CAPACITY,
};

mod config;
mod connection;
mod diff;
mod protocol;
mod resources;
mod session;
mod world;

pub use config::LiveLinkConfig;
pub use connection::{
    compression_config::{CompressionConfig, CompressionMode},
    decoder::Decoder,
    encoder::Encoder,
    error::{DecoderError, EncoderError},
};
pub use diff::{
    baseline::Baseline,
    builder::{merge_diff, ChangeSetBuilder},
    change_set::ChangeSet,
    comparator::{ContentComparator, ContentEqualityComparator, FingerprintComparator},
    sharded::{diff_ids_sharded, diff_ids_sharded_with, shard_ranges},
};
pub use protocol::{
    asset_bundle::{AssetBundle, AssetBundleProvider, AssetBundleRequest, AssetBundleResponse},
    connect::ConnectMessage,
    frame::{MessageFrame, FRAME_HEADER_LENGTH},
    live_message::LiveMessage,
    opcode::Opcode,
    ProtocolError, PROTOCOL_VERSION,
};
pub use resources::{
    query::ResourceQuery, resource_id::ResourceId, resource_set_message::ResourceSetMessage,
    tracker::ResourceSetTracker,
};
pub use session::{
    error::LiveLinkError, live_link_session::LiveLinkSession, remote_session::RemoteSession,
};
pub use world::{
    content::{
        ComponentData, ComponentKind, ComponentValue, ContentFingerprint, EntityContent,
        EntityContentDelta, SharedValue,
    },
    entity::{
        duplicate_validator::{find_duplicate_ids, validate_unique_ids},
        error::{IdentityError, IntegrityError},
        located_id::{sort_by_stable_id, EntityLocation, LocatedId},
        stable_id::StableId,
        stable_id_allocator::StableIdAllocator,
    },
    error::MirrorWorldError,
    mirror_world::MirrorWorld,
    snapshot::WorldSnapshot,
};
