//! Foundation types for the Cask backup store.
//!
//! This crate provides the identity, addressing, and metadata types shared by
//! the store and pipeline crates. Every other cask crate depends on
//! `cask-types`.
//!
//! # Key Types
//!
//! - [`Mac`] — fixed-size opaque content hash used as the store's key
//! - [`Resource`] — the three independent store keyspaces (packfiles,
//!   states, locks)
//! - [`ByteRange`] — offset+length sub-slice request, clamped at blob end
//! - [`StoreMode`] — read/write capability flags reported by a store
//! - [`LocationFlags`] — descriptive connector location flags
//! - [`FileInfo`] — file metadata carried by a pipeline record

pub mod error;
pub mod fileinfo;
pub mod flags;
pub mod mac;
pub mod range;
pub mod resource;

pub use error::TypeError;
pub use fileinfo::FileInfo;
pub use flags::{LocationFlags, StoreMode};
pub use mac::Mac;
pub use range::ByteRange;
pub use resource::Resource;
