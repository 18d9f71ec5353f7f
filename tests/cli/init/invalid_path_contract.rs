use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_rejects_paths_without_a_name() {
    let ctx = TestContext::new();

    for path in ["", "/"] {
        ctx.cli()
            .args(["init", path])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Invalid path provided"));
    }

    let entries = std::fs::read_dir(ctx.work_dir()).unwrap().count();
    assert_eq!(entries, 0, "nothing should be written");
    assert!(!std::path::Path::new("/config.jsonld").exists());
}
