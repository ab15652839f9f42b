use crate::prelude::{read_json, Sandbox};
use litani_core::JobStatus;
use serde_json::Value;

#[test]
fn job_with_unignored_nonzero_exit_fails_the_run() {
    let sandbox = Sandbox::new();
    sandbox.run(&["init", "--project-name", "demo"]);

    let run_dir = sandbox.active_run_dir();
    let job_id = sandbox.run(&[
        "add-job",
        "--pipeline-name",
        "p",
        "--ci-stage",
        "build",
        "--",
        "false",
    ]);

    sandbox.run(&["run-build"]);

    let status: JobStatus = read_json(&run_dir.join("status").join(format!("{job_id}.json")));
    assert_eq!(status.command_return_code, Some(1));
    assert_eq!(status.wrapper_return_code, Some(1));

    let cache: Value = read_json(&run_dir.join("cache.json"));
    assert_eq!(cache["status"], "fail");
}
