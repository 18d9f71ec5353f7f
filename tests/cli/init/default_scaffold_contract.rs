use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_without_git_or_flags_uses_defaults() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "./my-site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SFRootRepo initialized successfully at ./my-site"))
        .stdout(predicate::str::contains("Site Root:").not())
        .stderr(predicate::str::contains("could not be inferred"));

    ctx.assert_skeleton("my-site", "docs", "src");

    let config = ctx.config("my-site");
    assert_eq!(config["@context"]["@base"], "http://localhost/my-site");
    assert_eq!(config["@context"]["sflo"], "http://semantic-flow.github.io/ontology/");
    assert_eq!(config["@context"]["dc"], "http://purl.org/dc/elements/1.1/");
    assert_eq!(config["@id"], "");
    assert_eq!(config["@type"], "sflo:SemanticFlowSite");
    assert_eq!(config["dc:creator"], "unknown");
    assert_eq!(config["sflo:hasSourceFolder"], "src");
    assert_eq!(config["sflo:hasOutputFolder"], "docs");
}

#[test]
fn init_records_git_user_as_creator() {
    let ctx = TestContext::new();
    ctx.set_git_identity("Ada Lovelace");

    ctx.cli().args(["init", "site"]).assert().success();

    assert_eq!(ctx.config("site")["dc:creator"], "Ada Lovelace");
}

#[test]
fn init_defaults_to_current_directory() {
    let ctx = TestContext::new();

    ctx.cli().arg("init").assert().success();

    let config: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(ctx.work_dir().join("config.jsonld")).unwrap(),
    )
    .unwrap();
    assert_eq!(config["@context"]["@base"], "http://localhost/work");
    assert!(ctx.work_dir().join("docs/_assets").is_dir());
}

#[test]
fn debug_flag_emits_diagnostics() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "site", "--debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}
