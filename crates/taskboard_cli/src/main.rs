//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Exercise one add/project/summarize round trip for quick sanity checks.

use chrono::{Duration, Local};
use taskboard_core::{MemoryTaskStore, TaskService, TaskSubmission, ViewOptions};

fn main() {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    let today = Local::now().date_naive();
    let mut service = TaskService::new(MemoryTaskStore::new());

    let submission = TaskSubmission {
        title: "Smoke-test the board".to_string(),
        description: "Added by the CLI probe".to_string(),
        status: String::new(),
        due_date: (today + Duration::days(7)).format("%Y-%m-%d").to_string(),
    };

    match service.create(&submission, today) {
        Ok(task) => println!("created task id={} status={}", task.id, task.status.label()),
        Err(err) => {
            eprintln!("failed to create smoke task: {err}");
            std::process::exit(1);
        }
    }

    let view = service.dashboard(&ViewOptions::default());
    println!(
        "summary total={} pending={} in_progress={} completed={}",
        view.summary.total, view.summary.pending, view.summary.in_progress, view.summary.completed
    );
}
