//! # RoomGuard Protections
//!
//! The protection trait, the built-in protections and the registry that maps
//! protection names to descriptions and factories.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Protection trait.
pub mod api;
/// Message flooding protection.
pub mod basic_flooding;
/// Image-as-first-message protection.
pub mod first_message_is_image;
/// Protection registry.
pub mod registry;

pub use api::Protection;
pub use basic_flooding::{BasicFlooding, MAX_PER_MINUTE};
pub use first_message_is_image::FirstMessageIsImage;
pub use registry::{
    ProtectionDescriptor, ProtectionFactory, ProtectionRegistry, ProtectionRegistryBuilder,
    RegistryError,
};
