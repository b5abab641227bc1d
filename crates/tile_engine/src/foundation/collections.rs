//! Specialized collection types

pub use slotmap::{SlotMap, Key};

slotmap::new_key_type! {
    /// Stable handle to a body owned by a [`Level`](crate::level::Level)
    pub struct BodyKey;
}

/// Handle-based map of bodies with stable keys
pub type BodyMap<T> = SlotMap<BodyKey, T>;
