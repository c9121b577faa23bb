//! Registry implementations backing the oracle traits.
//!
//! Real hosts wrap their own world data; the in-memory variants here back
//! tests, tools and headless fixtures.

pub mod memory;

pub use memory::{
    HostMutation, MemoryEquipmentRegistry, MemoryHost, MemorySettlementRegistry,
    MemoryTemplateRegistry, SettlementRecord,
};
