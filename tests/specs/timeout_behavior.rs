use crate::prelude::{read_json, Sandbox};
use litani_core::JobStatus;
use serde_json::Value;

#[test]
fn timeout_without_timeout_ok_fails_the_run() {
    let sandbox = Sandbox::new();
    sandbox.run(&["init", "--project-name", "demo"]);

    let run_dir = sandbox.active_run_dir();
    let job_id = sandbox.run(&[
        "add-job",
        "--pipeline-name",
        "p",
        "--ci-stage",
        "build",
        "--timeout",
        "1",
        "--",
        "sleep",
        "5",
    ]);

    sandbox.run(&["run-build"]);

    let status: JobStatus = read_json(&run_dir.join("status").join(format!("{job_id}.json")));
    assert!(status.timeout_reached);
    assert_eq!(status.wrapper_return_code, Some(1));

    let cache: Value = read_json(&run_dir.join("cache.json"));
    assert_eq!(cache["status"], "fail");
}

#[test]
fn timeout_with_timeout_ok_succeeds_the_run() {
    let sandbox = Sandbox::new();
    sandbox.run(&["init", "--project-name", "demo"]);

    let run_dir = sandbox.active_run_dir();
    let job_id = sandbox.run(&[
        "add-job",
        "--pipeline-name",
        "p",
        "--ci-stage",
        "build",
        "--timeout",
        "1",
        "--timeout-ok",
        "--",
        "sleep",
        "5",
    ]);

    sandbox.run(&["run-build"]);

    let status: JobStatus = read_json(&run_dir.join("status").join(format!("{job_id}.json")));
    assert!(status.timeout_reached);
    assert_eq!(status.wrapper_return_code, Some(0));

    let cache: Value = read_json(&run_dir.join("cache.json"));
    assert_eq!(cache["status"], "success");
}
