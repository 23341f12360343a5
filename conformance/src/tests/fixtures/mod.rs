//! Source document fixtures.
//!
//! Each module holds a Turtle document, as produced by the AML / OPC-UA
//! converter, together with the partition lines the engine must derive from
//! it. Expectations list every line of a partition in output order; a
//! partition that is not listed must be empty.

mod aml_tank;
mod mixed_plant;
mod opcua_boiler;

use facts_engine::PartitionKind;

/// Expected output lines per partition.
pub type Expected = &'static [(PartitionKind, &'static [&'static str])];

pub use aml_tank::{AML_TANK, AML_TANK_CLAUSES, AML_TANK_EXPECTED};
pub use mixed_plant::{MIXED_PLANT, MIXED_PLANT_EXPECTED};
pub use opcua_boiler::{OPCUA_BOILER, OPCUA_BOILER_EXPECTED};
