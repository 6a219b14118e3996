// tests/property_scheduler.rs

use proptest::prelude::*;
use reltime::dag::{Dependency, Job, Scheduler};
use reltime::errors::ReltimeError;

#[derive(Debug, Clone)]
struct JobSpec {
    duration_ms: u64,
    delay_ms: u64,
    kind: u8,
    raw_deps: Vec<usize>,
}

fn job_spec() -> impl Strategy<Value = JobSpec> {
    (
        0..100_000u64,
        0..50_000u64,
        0..3u8,
        proptest::collection::vec(any::<usize>(), 0..4),
    )
        .prop_map(|(duration_ms, delay_ms, kind, raw_deps)| JobSpec {
            duration_ms,
            delay_ms,
            kind,
            raw_deps,
        })
}

// Acyclic by construction: job N only depends on jobs 0..N-1.
fn build_job(i: usize, spec: &JobSpec) -> Job {
    let mut job = Job::new(format!("job_{}", i), spec.duration_ms).with_delay(spec.delay_ms);
    let mut deps: Vec<String> = Vec::new();
    if i > 0 {
        for d in &spec.raw_deps {
            let name = format!("job_{}", d % i);
            if !deps.contains(&name) {
                deps.push(name);
            }
        }
    }
    match spec.kind {
        1 => job.declare_after_start(deps).unwrap(),
        2 => job.declare_after_end(deps).unwrap(),
        _ => {}
    }
    job
}

fn dag_strategy(max_jobs: usize) -> impl Strategy<Value = (Vec<Job>, Vec<usize>)> {
    proptest::collection::vec(job_spec(), 1..=max_jobs).prop_flat_map(|specs| {
        let jobs: Vec<Job> = specs.iter().enumerate().map(|(i, s)| build_job(i, s)).collect();
        let order: Vec<usize> = (0..jobs.len()).collect();
        (Just(jobs), Just(order).prop_shuffle())
    })
}

fn expected_start(scheduler: &Scheduler, job: &Job) -> u64 {
    let base = scheduler.base_start_ms();
    let anchor = match job.dependency() {
        Dependency::None => None,
        Dependency::AfterStart(peers) => peers
            .iter()
            .map(|p| scheduler.times_of(p).unwrap().start_ms)
            .max(),
        Dependency::AfterEnd(peers) => peers
            .iter()
            .map(|p| scheduler.times_of(p).unwrap().end_ms)
            .max(),
    };
    anchor.unwrap_or(base).max(base) + job.delay_ms()
}

proptest! {
    #[test]
    fn acyclic_plans_satisfy_timing_rules(
        (jobs, order) in dag_strategy(12),
        base in 0..1_000_000u64,
    ) {
        let mut scheduler = Scheduler::new(base);
        for &i in &order {
            scheduler.register(jobs[i].clone());
        }

        prop_assert!(scheduler.resolve().is_ok());

        for job in scheduler.jobs() {
            let t = scheduler.times_of(job.name()).unwrap();
            prop_assert!(t.start_ms >= base);
            prop_assert_eq!(t.start_ms, expected_start(&scheduler, job));
            prop_assert_eq!(t.end_ms, t.start_ms + t.duration_ms);
            prop_assert_eq!(t.duration_ms, job.duration_ms());
        }
    }

    #[test]
    fn any_ring_is_reported_as_cycle(
        ring_len in 2..6usize,
        kinds in proptest::collection::vec(any::<bool>(), 6),
        extra in proptest::collection::vec(job_spec(), 0..4),
        seed_order in Just((0..10usize).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let mut jobs = Vec::new();
        for i in 0..ring_len {
            let mut job = Job::new(format!("ring_{}", i), 1);
            let next = format!("ring_{}", (i + 1) % ring_len);
            if kinds[i] {
                job.declare_after_start([next]).unwrap();
            } else {
                job.declare_after_end([next]).unwrap();
            }
            jobs.push(job);
        }
        // Extra acyclic jobs hanging off the first ring member.
        for (i, spec) in extra.iter().enumerate() {
            let mut job = Job::new(format!("extra_{}", i), spec.duration_ms);
            if spec.kind == 1 {
                job.declare_after_start(["ring_0"]).unwrap();
            }
            jobs.push(job);
        }

        let mut scheduler = Scheduler::new(0);
        for &i in seed_order.iter().filter(|&&i| i < jobs.len()) {
            scheduler.register(jobs[i].clone());
        }

        let is_cycle = matches!(
            scheduler.resolve(),
            Err(ReltimeError::DependencyCycle { .. })
        );
        prop_assert!(is_cycle);
    }
}
