use crate::prelude::{read_json, Sandbox};
use litani_core::JobStatus;
use serde_json::Value;

#[test]
fn job_with_zero_exit_produces_a_successful_run() {
    let sandbox = Sandbox::new();
    sandbox.run(&["init", "--project-name", "demo"]);

    let run_dir = sandbox.active_run_dir();
    let output_path = run_dir.join("a.txt");
    let job_id = sandbox.run(&[
        "add-job",
        "--pipeline-name",
        "p",
        "--ci-stage",
        "build",
        "--outputs",
        &output_path.to_string_lossy(),
        "--",
        "sh",
        "-c",
        &format!("echo hi > {}", output_path.display()),
    ]);

    sandbox.run(&["run-build"]);

    let status: JobStatus = read_json(&run_dir.join("status").join(format!("{job_id}.json")));
    assert_eq!(status.command_return_code, Some(0));
    assert_eq!(status.wrapper_return_code, Some(0));
    assert!(run_dir.join("artifacts/p/build/a.txt").exists());

    let cache: Value = read_json(&run_dir.join("cache.json"));
    assert_eq!(cache["status"], "success");
}
