use crate::prelude::Sandbox;

#[test]
fn running_a_single_pipeline_skips_jobs_from_other_pipelines() {
    let sandbox = Sandbox::new();
    sandbox.run(&["init", "--project-name", "demo"]);

    let run_dir = sandbox.active_run_dir();
    let p1_job = sandbox.run(&[
        "add-job",
        "--pipeline-name",
        "p1",
        "--ci-stage",
        "build",
        "--",
        "true",
    ]);
    let p2_job = sandbox.run(&[
        "add-job",
        "--pipeline-name",
        "p2",
        "--ci-stage",
        "build",
        "--",
        "true",
    ]);

    sandbox.run(&["run-build", "--pipelines", "p1"]);

    assert!(run_dir
        .join("status")
        .join(format!("{p1_job}.json"))
        .exists());
    assert!(!run_dir
        .join("status")
        .join(format!("{p2_job}.json"))
        .exists());
}
