use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use livelink_serde::{BufferReader, BufferWriter, ConstByteLength, ObjectRef, Serde, SerdeErr};

use crate::{resources::resource_id::ResourceId, world::entity::stable_id::StableId};

/// Identifies a component type across processes. The owning world decides how the
/// value is derived (typically a stable hash of the type name).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ComponentKind(u64);

impl ComponentKind {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

/// A value that cannot be flattened into component bytes, such as a handle to an
/// external asset. It always travels through the object table.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct SharedValue {
    pub resource: ResourceId,
    pub data: Vec<u8>,
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum ComponentValue {
    /// Plain data, written into the payload byte for byte
    Inline(Vec<u8>),
    /// Reference-like data, written as an object table index
    Shared(ObjectRef<SharedValue>),
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct ComponentData {
    pub kind: ComponentKind,
    pub value: ComponentValue,
}

impl ComponentData {
    pub fn inline(kind: ComponentKind, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            value: ComponentValue::Inline(bytes),
        }
    }

    pub fn shared(kind: ComponentKind, value: ObjectRef<SharedValue>) -> Self {
        Self {
            kind,
            value: ComponentValue::Shared(value),
        }
    }
}

/// Structural hash of an entity's content, used to decide whether an entity present
/// in two snapshots changed between them.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ContentFingerprint(pub u64);

/// Every component of one entity, ordered by kind.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Default)]
pub struct EntityContent {
    components: Vec<ComponentData>,
}

impl EntityContent {
    pub fn new(mut components: Vec<ComponentData>) -> Self {
        components.sort_by_key(|component| component.kind);
        Self { components }
    }

    pub fn components(&self) -> &[ComponentData] {
        &self.components
    }

    pub fn component(&self, kind: &ComponentKind) -> Option<&ComponentData> {
        self.components
            .binary_search_by_key(kind, |component| component.kind)
            .ok()
            .map(|index| &self.components[index])
    }

    /// Covers component kinds, their order and their values. Shared values hash by
    /// content, so two handles to equal data fingerprint the same.
    pub fn fingerprint(&self) -> ContentFingerprint {
        let mut hasher = DefaultHasher::new();
        self.components.hash(&mut hasher);
        ContentFingerprint(hasher.finish())
    }
}

/// Full content of one added or changed entity, carried inside a change-set.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct EntityContentDelta {
    pub id: StableId,
    pub content: EntityContent,
}

// Serialization

impl Serde for ComponentKind {
    fn ser(&self, writer: &mut BufferWriter) {
        self.0.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(Self(u64::de(reader)?))
    }

    fn byte_length(&self) -> u32 {
        u64::const_byte_length()
    }
}

const INLINE_TAG: u8 = 0;
const SHARED_TAG: u8 = 1;

impl Serde for ComponentData {
    fn ser(&self, writer: &mut BufferWriter) {
        self.kind.ser(writer);
        match &self.value {
            ComponentValue::Inline(bytes) => {
                INLINE_TAG.ser(writer);
                bytes.ser(writer);
            }
            ComponentValue::Shared(shared) => {
                SHARED_TAG.ser(writer);
                shared.ser(writer);
            }
        }
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        let kind = ComponentKind::de(reader)?;
        let value = match u8::de(reader)? {
            INLINE_TAG => ComponentValue::Inline(Vec::<u8>::de(reader)?),
            SHARED_TAG => ComponentValue::Shared(ObjectRef::<SharedValue>::de(reader)?),
            tag => {
                return Err(SerdeErr::InvalidValue {
                    type_name: "ComponentValue",
                    value: u64::from(tag),
                })
            }
        };
        Ok(Self { kind, value })
    }

    fn byte_length(&self) -> u32 {
        let value_length = match &self.value {
            ComponentValue::Inline(bytes) => bytes.byte_length(),
            ComponentValue::Shared(shared) => shared.byte_length(),
        };
        self.kind.byte_length() + 1 + value_length
    }
}

impl Serde for EntityContent {
    fn ser(&self, writer: &mut BufferWriter) {
        self.components.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(Self::new(Vec::<ComponentData>::de(reader)?))
    }

    fn byte_length(&self) -> u32 {
        self.components.byte_length()
    }
}

impl Serde for EntityContentDelta {
    fn ser(&self, writer: &mut BufferWriter) {
        self.id.ser(writer);
        self.content.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            id: StableId::de(reader)?,
            content: EntityContent::de(reader)?,
        })
    }

    fn byte_length(&self) -> u32 {
        self.id.byte_length() + self.content.byte_length()
    }
}
