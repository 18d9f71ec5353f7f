use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_honours_explicit_flags() {
    let ctx = TestContext::new();
    ctx.add_git_remote("site", "git@github.com:acme/acme.github.io.git");

    ctx.cli()
        .args([
            "init",
            "site",
            "--siteRoot",
            "https://example.org/site",
            "--output",
            "public",
            "--src",
            "content",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Site Root: https://example.org/site"));

    ctx.assert_skeleton("site", "public", "content");
    assert!(!ctx.site_path("site").join("docs").exists());

    let config = ctx.config("site");
    assert_eq!(config["@context"]["@base"], "https://example.org/site");
    assert_eq!(config["sflo:hasOutputFolder"], "public");
    assert_eq!(config["sflo:hasSourceFolder"], "content");
}
