/// Generates a compact arena handle.
/// Uses u32 for compact storage (supports ~4 billion entries).
macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Create a new handle from an arena index
            pub fn new(index: usize) -> Self {
                Self(index as u32)
            }

            /// Get the index into the arena
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Handle of a [`Mesh`](crate::model::Mesh) in the model.
    MeshId
);
arena_id!(
    /// Handle of an [`Interface`](crate::model::Interface) in the model.
    InterfaceId
);
arena_id!(
    /// Handle of a [`Domain`](crate::model::Domain) in the model.
    DomainId
);
