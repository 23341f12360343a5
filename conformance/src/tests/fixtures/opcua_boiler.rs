//! OPC-UA document: a boiler whose drum is linked both by `parentNodeId` and
//! by containment, plus a typed pump.

use super::Expected;
use facts_engine::PartitionKind;

/// Converted OPC-UA document.
pub const OPCUA_BOILER: &str = r#"
@prefix ua: <http://opcfoundation.org/UA/#> .

ua:Boiler ua:nodeId "ns=1;i=5001" ;
    ua:hasComponent ua:Drum .
ua:Drum ua:nodeId "ns=1;i=5002" ;
    ua:parentNodeId "ns=1;i=5001" .
ua:Pump ua:nodeId "ns=1;i=6001" ;
    ua:hasTypeDefinition ua:PumpType .
ua:PumpType ua:displayName "Centrifugal pump" .
"#;

/// Partition lines for [`OPCUA_BOILER`].
pub const OPCUA_BOILER_EXPECTED: Expected = &[
    (
        PartitionKind::Document,
        &["boiler", "drum", "pump", "pumpType"],
    ),
    (
        PartitionKind::Attribute,
        &["boiler:identifier", "pump:identifier", "pump:pumpType"],
    ),
    (
        PartitionKind::InternalElement,
        &["drum:boiler", "drum:identifier"],
    ),
    (
        PartitionKind::ReferenceSemantic,
        &["pumpType:Centrifugal pump"],
    ),
    (
        PartitionKind::Identifier,
        &["boiler:ns=1;i=5001", "drum:ns=1;i=5002", "pump:ns=1;i=6001"],
    ),
];
