//! Mixed document: AML and OPC-UA statements interleaved. The AML plant lists
//! the mixer as a component but only the OPC-UA line may become its parent.

use super::Expected;
use facts_engine::PartitionKind;

/// Converted document mixing both schemas.
pub const MIXED_PLANT: &str = r#"
@prefix aml: <https://w3id.org/i40/aml#> .
@prefix ua:  <http://opcfoundation.org/UA/#> .

ua:Line ua:nodeId "i=1" .
aml:Plant ua:hasComponent ua:Mixer .
ua:Mixer ua:nodeId "i=2" .
aml:Mixer1 aml:hasRefSemantic aml:Speed .
aml:Speed aml:value "fast" .
ua:Line ua:organizes ua:Mixer .
"#;

/// Partition lines for [`MIXED_PLANT`].
pub const MIXED_PLANT_EXPECTED: Expected = &[
    (
        PartitionKind::Document,
        &["line", "plant", "mixer", "mixer1", "speed"],
    ),
    (
        PartitionKind::Attribute,
        &["line:identifier", "mixer1:speed"],
    ),
    (
        PartitionKind::InternalElement,
        &["mixer:line", "mixer:identifier"],
    ),
    (PartitionKind::ReferenceSemantic, &["speed:fast"]),
    (PartitionKind::Identifier, &["line:i=1", "mixer:i=2"]),
];
