use super::resource_id::ResourceId;

/// What the change tracker needs to know about a world's resources.
pub trait ResourceQuery {
    /// Every resource currently loaded
    fn loaded_resources(&self) -> Vec<ResourceId>;

    /// Resources that transitioned to removed since the last query
    fn removed_resources(&self) -> Vec<ResourceId>;
}
