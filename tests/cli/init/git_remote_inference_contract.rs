use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn personal_pages_remote_maps_to_bare_domain() {
    let ctx = TestContext::new();
    ctx.add_git_remote("acme.github.io", "git@github.com:acme/acme.github.io.git");

    ctx.cli()
        .args(["init", "acme.github.io"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Site Root: https://acme.github.io\n"));

    let config = ctx.config("acme.github.io");
    assert_eq!(config["@context"]["@base"], "https://acme.github.io");
    assert_eq!(config["dc:creator"], "acme");
}

#[test]
fn project_https_remote_maps_to_sub_path() {
    let ctx = TestContext::new();
    ctx.add_git_remote("blog", "https://github.com/alice/blog");

    ctx.cli().args(["init", "blog"]).assert().success();

    assert_eq!(ctx.config("blog")["@context"]["@base"], "https://alice.github.io/blog");
}

#[test]
fn unrecognized_remote_falls_back_with_warning() {
    let ctx = TestContext::new();
    ctx.add_git_remote("site", "https://gitlab.com/alice/site.git");

    ctx.cli()
        .args(["init", "site"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unrecognized git URL format"));

    assert_eq!(ctx.config("site")["@context"]["@base"], "http://localhost/site");
}
