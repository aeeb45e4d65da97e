//! Usage report tests.

use minterface::usage_report;

use crate::helpers::*;

#[test]
fn test_declaring_project_is_skipped() {
    let (oracle, lib, _app) = lib_to_refactor();

    let report = usage_report(&oracle, NAMESPACE, "TwoClass");

    let section = report
        .sections
        .iter()
        .find(|s| s.project == lib)
        .expect("library section missing");
    assert!(section.skipped);
    assert!(section.lines.is_empty());
}

#[test]
fn test_report_text_layout() {
    let (oracle, _lib, _app) = lib_to_refactor();

    let text = usage_report(&oracle, NAMESPACE, "TwoClass").to_text();

    assert!(text.starts_with("=== LibToRefactor\n skipped\n=== ConsuminApp\n"));
    assert!(text.contains("T PerformGeneric<T>(T inputVal); // IMethodSymbol used 1 times\n"));
}

#[test]
fn test_counts_are_scoped_per_project() {
    let (mut oracle, _lib, _app) = lib_to_refactor();
    let other = oracle.add_project("OtherApp");
    oracle.add_reference("LibToRefactor.TwoClass", "ClassValue", app_site(other, 7));
    oracle.add_reference("LibToRefactor.TwoClass", "ClassValue", app_site(other, 8));

    let report = usage_report(&oracle, NAMESPACE, "TwoClass");

    let lines_for = |name: &str| {
        report
            .sections
            .iter()
            .find(|s| s.name.as_ref() == name)
            .unwrap_or_else(|| panic!("missing section {name}"))
            .lines
            .clone()
    };

    let app_line = lines_for(APP)
        .into_iter()
        .find(|l| l.contains("ClassValue"))
        .expect("ClassValue missing from ConsuminApp");
    assert!(app_line.contains("used 1 times"));

    let other_line = lines_for("OtherApp")
        .into_iter()
        .find(|l| l.contains("ClassValue"))
        .expect("ClassValue missing from OtherApp");
    assert!(other_line.contains("used 2 times"));
}

#[test]
fn test_project_without_references_gets_empty_section() {
    let (mut oracle, _lib, _app) = lib_to_refactor();
    oracle.add_project("IdleApp");

    let report = usage_report(&oracle, NAMESPACE, "TwoClass");

    let idle = report
        .sections
        .iter()
        .find(|s| s.name.as_ref() == "IdleApp")
        .expect("IdleApp section missing");
    assert!(!idle.skipped);
    assert!(idle.lines.is_empty());
}

#[test]
fn test_unknown_type_yields_empty_report() {
    let (oracle, _lib, _app) = lib_to_refactor();

    let report = usage_report(&oracle, NAMESPACE, "Nope");

    assert!(report.sections.is_empty());
    assert!(report.to_text().is_empty());
}
