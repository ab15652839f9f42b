use crate::prelude::Sandbox;
use std::sync::Arc;

#[test]
fn concurrent_add_jobs_each_land_a_distinct_descriptor() {
    let sandbox = Arc::new(Sandbox::new());
    sandbox.run(&["init", "--project-name", "demo"]);

    let run_dir = sandbox.active_run_dir();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let sandbox = Arc::clone(&sandbox);
            std::thread::spawn(move || {
                sandbox.run(&[
                    "add-job",
                    "--pipeline-name",
                    "p",
                    "--ci-stage",
                    "build",
                    "--",
                    "true",
                    &i.to_string(),
                ])
            })
        })
        .collect();

    let mut job_ids: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("add-job thread panicked"))
        .collect();

    job_ids.sort();
    job_ids.dedup();
    assert_eq!(job_ids.len(), 8, "every add-job must produce a distinct id");

    let jobs_dir = run_dir.join("jobs");
    let descriptor_count = std::fs::read_dir(&jobs_dir)
        .expect("read jobs dir")
        .count();
    assert_eq!(descriptor_count, 8, "no descriptor was lost to a write race");
}
