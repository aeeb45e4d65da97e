//! Interface synthesis tests over the fixture workspace.

use minterface::model::Member;
use minterface::oracle::MemoryOracle;
use minterface::synthesize_interface;

use crate::helpers::*;

// =============================================================================
// SYNTHESIS - MEMBER SELECTION
// =============================================================================

#[test]
fn test_unreferenced_members_are_omitted() {
    let (oracle, _lib, _app) = lib_to_refactor();

    let spec = synthesize_interface(&oracle, NAMESPACE, "OneClass");
    let text = spec.to_source_text();

    assert!(!text.contains("NotUsedMethod"), "unused member leaked:\n{text}");
    assert!(!text.contains("NoParameterMethod"), "unused member leaked:\n{text}");
}

#[test]
fn test_one_class_scenario() {
    // Public property referenced once externally, private backing
    // field never referenced: exactly one line for IntProp, none for
    // the field.
    let (oracle, _lib, _app) = lib_to_refactor();

    let spec = synthesize_interface(&oracle, NAMESPACE, "OneClass");
    let text = spec.to_source_text();

    let intprop_lines = spec
        .members
        .iter()
        .filter(|line| line.contains("IntProp"))
        .count();
    assert_eq!(intprop_lines, 1, "expected one IntProp line:\n{text}");
    assert!(text.contains("int IntProp { get; set; } // IPropertySymbol used 1 times"));
    assert!(!text.contains("_backingInt"));
}

#[test]
fn test_accessor_methods_never_emit_standalone_lines() {
    let (mut oracle, _lib, app) = lib_to_refactor();
    // Even a directly referenced accessor stays covered by its property.
    oracle.add_reference("LibToRefactor.OneClass", "IntProp.get", app_site(app, 30));

    let spec = synthesize_interface(&oracle, NAMESPACE, "OneClass");
    let text = spec.to_source_text();

    assert!(!text.contains(".get"), "accessor leaked:\n{text}");
    assert!(!text.contains(".set"), "accessor leaked:\n{text}");
}

#[test]
fn test_non_public_field_never_emitted_regardless_of_references() {
    let (mut oracle, _lib, app) = lib_to_refactor();
    oracle.add_reference("LibToRefactor.OneClass", "_backingInt", app_site(app, 40));
    oracle.add_reference("LibToRefactor.OneClass", "_backingInt", app_site(app, 41));

    let spec = synthesize_interface(&oracle, NAMESPACE, "OneClass");

    assert!(!spec.to_source_text().contains("_backingInt"));
}

#[test]
fn test_nested_enum_renders_as_todo_comment() {
    let (mut oracle, _lib, app) = lib_to_refactor();
    oracle.add_reference("LibToRefactor.OneClass", "OneClassEnum", app_site(app, 50));

    let spec = synthesize_interface(&oracle, NAMESPACE, "OneClass");
    let text = spec.to_source_text();

    assert!(text.contains("// todo: enum OneClassEnum"));
    assert!(!text.contains("enum OneClassEnum {"), "nested enum must stay a comment");
}

// =============================================================================
// SYNTHESIS - RENDERING
// =============================================================================

#[test]
fn test_two_class_generic_method_line() {
    let (oracle, _lib, _app) = lib_to_refactor();

    let spec = synthesize_interface(&oracle, NAMESPACE, "TwoClass");

    assert!(
        spec.members
            .contains(&"T PerformGeneric<T>(T inputVal); // IMethodSymbol used 1 times".to_string()),
        "got: {:#?}",
        spec.members
    );
}

#[test]
fn test_public_field_line_carries_count_and_promotion_note() {
    let (oracle, _lib, _app) = lib_to_refactor();

    let spec = synthesize_interface(&oracle, NAMESPACE, "TwoClass");
    let line = spec
        .members
        .iter()
        .find(|l| l.contains("ClassValue"))
        .expect("ClassValue line missing");

    assert_eq!(
        line,
        "LibToRefactor.OneClass ClassValue { get; set; } // IFieldSymbol converted to Property in interface, used 1 times"
    );
}

#[test]
fn test_count_is_distinct_locations_not_projects() {
    // Two sites in the same consuming project: count is 2, not 1.
    let (mut oracle, _lib, app) = lib_to_refactor();
    oracle.add_reference("LibToRefactor.TwoClass", "Value", app_site(app, 60));
    oracle.add_reference("LibToRefactor.TwoClass", "Value", app_site(app, 61));

    let spec = synthesize_interface(&oracle, NAMESPACE, "TwoClass");
    let line = spec
        .members
        .iter()
        .find(|l| l.starts_with("string Value"))
        .expect("Value line missing");

    assert!(line.contains("used 2 times"), "got: {line}");
}

#[test]
fn test_duplicate_sites_do_not_inflate_the_count() {
    let (mut oracle, _lib, app) = lib_to_refactor();
    oracle.add_reference("LibToRefactor.TwoClass", "Value", app_site(app, 60));
    oracle.add_reference("LibToRefactor.TwoClass", "Value", app_site(app, 60));

    let spec = synthesize_interface(&oracle, NAMESPACE, "TwoClass");
    let line = spec
        .members
        .iter()
        .find(|l| l.starts_with("string Value"))
        .expect("Value line missing");

    assert!(line.contains("used 1 times"), "got: {line}");
}

#[test]
fn test_members_emit_in_declaration_order() {
    let (oracle, _lib, _app) = lib_to_refactor();

    let spec = synthesize_interface(&oracle, NAMESPACE, "TwoClass");
    let position = |needle: &str| {
        spec.members
            .iter()
            .position(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("missing line for {needle}"))
    };

    assert!(position("PerformGeneric<T>") < position("PerformGeneric2"));
    assert!(position("PerformGeneric2") < position("ClassValue"));
    assert!(position("ClassValue") < position("void TwoClass()"));
}

// =============================================================================
// SYNTHESIS - ASSEMBLY
// =============================================================================

#[test]
fn test_interface_block_shape() {
    let (oracle, _lib, _app) = lib_to_refactor();

    let spec = synthesize_interface(&oracle, NAMESPACE, "TwoClass");
    let text = spec.to_source_text();

    assert!(text.starts_with("// LibToRefactor.TwoClass in ConsuminApp\n"));
    assert!(text.contains("namespace LibToRefactor\n"));
    assert!(text.contains("interface TwoClass_ExtractedInterface\n"));
}

#[test]
fn test_declared_interfaces_become_base_list() {
    let (mut oracle, _lib, _app) = lib_to_refactor();
    oracle.set_declared_interfaces(
        "LibToRefactor.TwoClass",
        vec!["System.IDisposable".into(), "ICloneable".into()],
    );

    let spec = synthesize_interface(&oracle, NAMESPACE, "TwoClass");

    assert!(
        spec.to_source_text()
            .contains("interface TwoClass_ExtractedInterface : System.IDisposable, ICloneable")
    );
}

#[test]
fn test_unknown_type_yields_header_only() {
    let (oracle, _lib, _app) = lib_to_refactor();

    let spec = synthesize_interface(&oracle, NAMESPACE, "ThreeClass");

    assert!(spec.is_empty());
    assert_eq!(spec.to_source_text(), "// LibToRefactor.ThreeClass\n");
}

#[test]
fn test_type_with_no_external_consumers_yields_header_only() {
    let mut oracle = MemoryOracle::new();
    let lib = oracle.add_project(LIB);
    oracle.add_type(
        lib,
        "LibToRefactor.Quiet",
        vec![Member::method("LibToRefactor.Quiet", "Run", "void", Vec::new(), 0)],
    );
    // Referenced, but only from inside the declaring project.
    oracle.add_reference("LibToRefactor.Quiet", "Run", app_site(lib, 5));

    let spec = synthesize_interface(&oracle, NAMESPACE, "Quiet");

    assert!(spec.is_empty());
    assert_eq!(spec.to_source_text(), "// LibToRefactor.Quiet\n");
}

#[test]
fn test_synthesis_is_idempotent() {
    let (oracle, _lib, _app) = lib_to_refactor();

    let first = synthesize_interface(&oracle, NAMESPACE, "TwoClass").to_source_text();
    let second = synthesize_interface(&oracle, NAMESPACE, "TwoClass").to_source_text();

    assert_eq!(first, second);
}

#[test]
fn test_explicit_interface_impl_demotes_to_placeholder() {
    let mut oracle = MemoryOracle::new();
    let lib = oracle.add_project(LIB);
    let app = oracle.add_project(APP);
    let ty = "LibToRefactor.Resource";
    oracle.add_type(
        lib,
        ty,
        vec![
            Member::method(ty, "Dispose", "void", Vec::new(), 0).as_explicit_interface_impl(),
            Member::method(ty, "GetEnumerator", "System.Collections.IEnumerator", Vec::new(), 1)
                .as_enumerator_factory(),
        ],
    );
    oracle.add_reference(ty, "Dispose", app_site(app, 3));
    oracle.add_reference(ty, "GetEnumerator", app_site(app, 4));

    let spec = synthesize_interface(&oracle, NAMESPACE, "Resource");

    assert_eq!(
        spec.members,
        vec![
            "// todo: explicit interface implementation Dispose".to_string(),
            "// todo: enumerator factory GetEnumerator".to_string(),
        ]
    );
}
