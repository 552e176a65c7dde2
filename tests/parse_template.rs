//! Integration tests for the iapp template parser.

use iapprs::{
    parse_template,
    IappError,
    Parser,
    Script,
    Value,
};
use pretty_assertions::assert_eq;

const FULL: &str = include_str!("fixtures/full.tmpl");
const QUOTED: &str = include_str!("fixtures/quoted.tmpl");

fn template(
    name: &str,
    definition: &str,
) -> String {
    format!(
        "sys application template {name} {{\n    actions {{\n        definition {{\n{definition}\n        }}\n    }}\n    partition Common\n}}\n"
    )
}

fn text(s: &str) -> Value {
    Value::Text(s.to_owned())
}

fn list(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| (*s).to_owned()).collect())
}

#[test]
fn test_full_template_sections() {
    let templ = parse_template(FULL).expect("should parse");

    assert_eq!(templ.name, "good_templ");

    let mut keys: Vec<&str> = templ
        .actions
        .definition
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();

    assert_eq!(
        keys,
        vec!["htmlHelp", "implementation", "macro", "presentation", "roleAcl"]
    );
    assert_eq!(
        templ.section("roleAcl"),
        Some(&list(&["admin", "manager", "resource-admin"]))
    );
    assert_eq!(templ.section("macro"), Some(&text("")));

    let help = templ
        .section("htmlHelp")
        .and_then(Value::as_str)
        .expect("help is text");
    assert!(help.starts_with("<p><b>Good template</b></p>"));
    assert!(help.ends_with("{address} below.</p>"));

    let implementation = templ
        .section("implementation")
        .and_then(Value::as_str)
        .expect("implementation is text");
    assert!(implementation.starts_with("iapp::template start"));
    assert!(implementation.contains(r#"[string map {\" ""} $::basic__addr]"#));
    assert!(implementation.ends_with("iapp::template stop"));

    let presentation = templ
        .section("presentation")
        .and_then(Value::as_str)
        .expect("presentation is text");
    assert!(presentation.starts_with(r#"include "/Common/f5.apl_common""#));
    assert!(presentation.ends_with('}'));
}

#[test]
fn test_full_template_attributes() {
    let templ = parse_template(FULL).expect("should parse");

    assert_eq!(
        templ.attribute("description"),
        Some(&text(r#""A template that exercises every section""#))
    );
    assert_eq!(templ.attribute("partition"), Some(&text("Common")));
    assert_eq!(templ.attribute("requiresModules"), Some(&list(&["ltm"])));
    assert_eq!(templ.attribute("ignoreVerification"), Some(&text("false")));
    assert_eq!(templ.attribute("requiresBigipVersionMax"), Some(&text("none")));
    assert_eq!(templ.attribute("requiresBigipVersionMin"), Some(&text("11.4.0")));
    assert_eq!(
        templ.attribute("totalSigningStatus"),
        Some(&text("not-all-signed"))
    );
    assert_eq!(templ.attributes.len(), 12);
}

#[test]
fn test_full_template_scripts() {
    let templ = parse_template(FULL).expect("should parse");
    let scripts = templ.scripts.as_ref().expect("scripts present");

    let names: Vec<&str> = scripts.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["f5.iapp.1.5.3.cli", "helper-procs"]);

    let first: &Script = templ.script("f5.iapp.1.5.3.cli").expect("first script");
    assert!(first.script.starts_with("proc iapp_conf { commands } {"));
    assert!(first.script.ends_with('}'));

    for value in templ.actions.definition.values() {
        if let Some(s) = value.as_str() {
            assert!(!s.contains("proc iapp_"), "script leaked into a section");
        }
    }
}

#[test]
fn test_braces_inside_quotes() {
    let templ = parse_template(QUOTED).expect("should parse");

    assert_eq!(
        templ.section("implementation"),
        Some(&text(r#"# TMSH"{}{{}}}}}""{{{{}}"implementation code"#))
    );
    assert_eq!(
        templ.section("presentation"),
        Some(&text(r#"# TMSH"{}{{}}}}}""{{{{}}"presentation code"#))
    );
    assert_eq!(templ.attribute("requiresModules"), Some(&list(&[])));
    assert!(templ.scripts.is_none());
}

#[test]
fn test_missing_optional_sections() {
    let templ = parse_template(&template(
        "no_opts",
        "implementation { tmsh::log ok }\npresentation { section s { } }",
    ))
    .expect("should parse");

    assert_eq!(templ.actions.definition.len(), 2);
    assert_eq!(templ.section("htmlHelp"), None);
    assert_eq!(templ.section("roleAcl"), None);
    assert_eq!(templ.section("macro"), None);
    assert_eq!(templ.attribute("partition"), Some(&text("Common")));
}

#[test]
fn test_missing_required_section() {
    assert_eq!(
        parse_template(&template("no_pres", "implementation { }")),
        Err(IappError::SectionNotFound {
            section: "presentation".to_owned()
        })
    );
    assert_eq!(
        parse_template(&template("no_impl", "presentation { }")),
        Err(IappError::SectionNotFound {
            section: "implementation".to_owned()
        })
    );
}

#[test]
fn test_unbalanced_section() {
    let source = "sys application template unbalanced {\n\
                  \x20   actions {\n\
                  \x20       definition {\n\
                  \x20           presentation { section s {\n";

    assert_eq!(
        parse_template(source),
        Err(IappError::CurlyBraceMismatch {
            section: "presentation".to_owned()
        })
    );
}

#[test]
fn test_name_variants() {
    let body = "implementation { }\npresentation { }";

    for (name, want) in [
        ("good.dot.templ", "good.dot.templ"),
        ("good.-dot-hyphen.templ", "good.-dot-hyphen.templ"),
        ("/Common/good_slashes_templ", "good_slashes_templ"),
    ] {
        let templ = parse_template(&template(name, body)).expect("should parse");

        assert_eq!(templ.name, want);
    }

    assert_eq!(
        parse_template(&template("bad#name", body)),
        Err(IappError::TemplateNameNotFound)
    );
}

#[test]
fn test_requires_modules_variants() {
    let body = "implementation { }\npresentation { }";

    for (raw, want) in [
        ("{ ltm }", list(&["ltm"])),
        ("{ }", list(&[])),
        ("{}", list(&[])),
        ("none", text("none")),
    ] {
        let source = template("mods", body).replace(
            "    partition Common",
            &format!("    requires-modules {raw}"),
        );

        let templ = parse_template(&source).expect("should parse");

        assert_eq!(templ.attribute("requiresModules"), Some(&want), "input: {raw}");
    }

    let source = template("mods", body).replace("    partition Common", "    requires-modules ltm");

    assert_eq!(
        parse_template(&source),
        Err(IappError::MalformedTclList {
            attribute: "requires-modules".to_owned(),
            value: "ltm".to_owned(),
        })
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(Parser::new("").map(|_| ()), Err(IappError::EmptyTemplate));
}

#[test]
fn test_json_payload() {
    let templ = parse_template(QUOTED).expect("should parse");
    let json: serde_json::Value =
        serde_json::from_str(&templ.to_json().expect("should encode")).expect("valid json");

    assert_eq!(json["name"], "quoted_templ");
    assert_eq!(json["requiresModules"], serde_json::json!([]));
    assert!(json["actions"]["definition"]["presentation"].is_string());
    assert!(json.get("scripts").is_none());
}
