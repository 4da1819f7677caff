use livelink_serde::ObjectRef;
use livelink_shared::{ComponentData, ComponentKind, ResourceId, SharedValue, StableId};

use crate::TestWorld;

/// Fluent builder for spawning test entities
pub struct TestEntityBuilder {
    components: Vec<ComponentData>,
}

impl TestEntityBuilder {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    pub fn inline(mut self, kind: u64, bytes: &[u8]) -> Self {
        self.components
            .push(ComponentData::inline(ComponentKind::new(kind), bytes.to_vec()));
        self
    }

    /// Adds a component whose value lives in a shared object
    pub fn shared(mut self, kind: u64, value: &ObjectRef<SharedValue>) -> Self {
        self.components
            .push(ComponentData::shared(ComponentKind::new(kind), value.clone()));
        self
    }

    pub fn components(self) -> Vec<ComponentData> {
        self.components
    }

    pub fn spawn(self, world: &mut TestWorld) -> StableId {
        world.spawn(self.components)
    }
}

impl Default for TestEntityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn shared_value(resource: u128, data: &[u8]) -> ObjectRef<SharedValue> {
    ObjectRef::new(SharedValue {
        resource: ResourceId::from_u128(resource),
        data: data.to_vec(),
    })
}
