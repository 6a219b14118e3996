#![allow(dead_code)]

pub use reltime_test_utils::{builders, init_tracing};

use reltime::dag::{Job, Scheduler};

/// The four-job plan used throughout the docs: a chain from B into A, a
/// diamond through C, and D waiting on the ends of C and A.
///
/// With base 2000: B 122000..182000, A 152000..212000, C 152000..242000,
/// D 362000..422000.
pub fn diamond_jobs() -> Vec<Job> {
    let mut a = Job::new("A", 60_000).with_delay(30_000);
    let b = Job::new("B", 60_000).with_delay(120_000);
    let mut c = Job::new("C", 90_000);
    let mut d = Job::new("D", 60_000).with_delay(120_000);

    a.declare_after_start(["B"]).expect("A after B");
    c.declare_after_start(["A", "B"]).expect("C after A, B");
    d.declare_after_end(["C", "A"]).expect("D after C, A");

    vec![a, b, c, d]
}

pub fn scheduler_with(base_start_ms: u64, jobs: Vec<Job>) -> Scheduler {
    let mut scheduler = Scheduler::new(base_start_ms);
    for job in jobs {
        scheduler.register(job);
    }
    scheduler
}

/// Every ordering of `items`, used to check that registration order does not
/// change the outcome.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            out.push(tail);
        }
    }
    out
}
