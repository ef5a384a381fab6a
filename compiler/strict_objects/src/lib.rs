//! Strict Objects - the object model of the strict-modules analyzer.
//!
//! This crate provides:
//! - Runtime values (`Value`) and the shared handle type (`Heap`)
//! - Attribute dictionaries (`DictType`, `SharedDict`)
//! - Type descriptors (`StrictType`, `BuiltinTypes`) with C3 method
//!   resolution order
//! - The `StrictInstance` capability and plain instances (`InstanceObject`)
//! - Module objects (`StrictModuleObject`) and the loader's `ModuleTable`
//! - Error types (`ObjectError`, `ObjectResult`)
//!
//! # Construction
//!
//! Objects are only created through factories
//! (`StrictModuleObject::make_strict_module`, `StrictType::make_type`,
//! `InstanceObject::make_instance`), each returning a reference-counted
//! handle. An object lives as long as its longest-lived handle.
//!
//! # Tracing
//!
//! Enable diagnostics with environment variables:
//! - `RUST_LOG=strict_objects=debug` - module creation, freezing, registration
//! - `RUST_LOG=strict_objects=trace` - every module attribute store

mod dict;
mod errors;
mod instance;
mod module;
mod module_table;
mod types;
mod value;

use std::sync::Once;

pub use dict::{DictType, SharedDict};
pub use errors::{
    duplicate_module, frozen_module, frozen_object, inconsistent_mro, no_attribute,
    no_module_attribute, ObjectError, ObjectResult,
};
pub use instance::{InstanceObject, InstanceRef, StrictInstance};
pub use module::{ModuleRef, StrictModuleObject};
pub use module_table::ModuleTable;
pub use types::{BuiltinTypes, StrictType, TypeRef};
pub use value::{Heap, Value};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
