//! AML document: a tank with a semantic reference and two identified elements.

use super::Expected;
use facts_engine::PartitionKind;

/// Converted AML document.
pub const AML_TANK: &str = r#"
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix aml: <https://w3id.org/i40/aml#> .

aml:Tank1 rdf:type aml:Tank ;
    aml:hasRefSemantic aml:Level .
aml:Level aml:value "high" ;
    aml:unit "percent" .
aml:InternalElementValve aml:identifier "IE-17" .
aml:Attr7 aml:identifier "A-7" .
"#;

/// Clause lines for [`AML_TANK`] as document 1.
pub const AML_TANK_CLAUSES: &[&str] = &[
    "clause1(type(tank11,tank),true).",
    "clause1(hasRefSemantic(tank11,level1),true).",
    "clause1(value(level1,'high'),true).",
    "clause1(unit(level1,'percent'),true).",
    "clause1(identifier(internalElementValve1,'IE-17'),true).",
    "clause1(identifier(attr71,'A-7'),true).",
];

/// Partition lines for [`AML_TANK`].
pub const AML_TANK_EXPECTED: Expected = &[
    (
        PartitionKind::Document,
        &["tank1", "level", "internalElementValve", "attr7"],
    ),
    (PartitionKind::Attribute, &["tank1:level", "attr7:identifier"]),
    (
        PartitionKind::InternalElement,
        &["internalElementValve:identifier"],
    ),
    (
        PartitionKind::ReferenceSemantic,
        &["level:high", "level:percent"],
    ),
    (
        PartitionKind::Identifier,
        &["internalElementValve:IE-17", "attr7:A-7"],
    ),
];
