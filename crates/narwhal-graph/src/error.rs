#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("property `{key}` is not set and has no default")]
    MissingProperty { key: &'static str },

    #[error("property `{key}` holds a value of a different type")]
    PropertyType { key: &'static str },

    #[error("layer index {index} is out of bounds (graph has {len} layers)")]
    LayerOutOfBounds { index: usize, len: usize },

    #[error("new order for layer {layer} is not a permutation of its nodes")]
    NotAPermutation { layer: usize },

    #[error("element was removed from the graph")]
    RemovedElement,
}

pub type Result<T> = std::result::Result<T, GraphError>;
