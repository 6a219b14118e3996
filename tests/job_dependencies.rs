// tests/job_dependencies.rs

use reltime::dag::{Dependency, DependencyKind, Job};
use reltime::errors::ReltimeError;

#[test]
fn new_job_has_no_dependency_and_no_timing() {
    let job = Job::new("A", 1_000).with_delay(250);

    assert_eq!(job.name(), "A");
    assert_eq!(job.duration_ms(), 1_000);
    assert_eq!(job.delay_ms(), 250);
    assert_eq!(job.dependency(), &Dependency::None);
    assert!(job.dependencies().is_empty());
    assert!(!job.is_resolved());
    assert_eq!(job.times(), None);
}

#[test]
fn cannot_declare_after_end_once_after_start_is_set() {
    let mut a = Job::new("A", 0);

    a.declare_after_start(["B"]).unwrap();
    let err = a.declare_after_end(["C"]).unwrap_err();

    match err {
        ReltimeError::ConflictingDependencyKind {
            job,
            existing,
            requested,
        } => {
            assert_eq!(job, "A");
            assert_eq!(existing, DependencyKind::AfterStart);
            assert_eq!(requested, DependencyKind::AfterEnd);
        }
        e => panic!("expected ConflictingDependencyKind, got {:?}", e),
    }
    // First declaration stays in effect.
    assert_eq!(a.dependency(), &Dependency::AfterStart(vec!["B".to_string()]));
}

#[test]
fn cannot_declare_after_start_once_after_end_is_set() {
    let mut a = Job::new("A", 0);

    a.declare_after_end(["B"]).unwrap();
    let err = a.declare_after_start(["C"]).unwrap_err();

    assert!(matches!(
        err,
        ReltimeError::ConflictingDependencyKind {
            existing: DependencyKind::AfterEnd,
            requested: DependencyKind::AfterStart,
            ..
        }
    ));
    assert_eq!(a.dependency(), &Dependency::AfterEnd(vec!["B".to_string()]));
}

#[test]
fn empty_declaration_still_fixes_the_kind() {
    let mut a = Job::new("A", 0);

    a.declare_after_start(Vec::<String>::new()).unwrap();
    assert_eq!(a.dependency().kind(), DependencyKind::AfterStart);

    assert!(a.declare_after_end(["B"]).is_err());
}

#[test]
fn job_cannot_depend_on_itself_in_either_form() {
    let mut a = Job::new("A", 0);

    let err = a.declare_after_start(["A"]).unwrap_err();
    assert!(matches!(err, ReltimeError::SelfDependency(ref name) if name == "A"));
    assert_eq!(a.dependency(), &Dependency::None);

    let err = a.declare_after_end(["B", "A"]).unwrap_err();
    assert!(matches!(err, ReltimeError::SelfDependency(_)));
    assert_eq!(a.dependency(), &Dependency::None);
}

#[test]
fn self_dependency_leaves_earlier_declaration_untouched() {
    let mut a = Job::new("A", 0);
    a.declare_after_end(["B"]).unwrap();

    assert!(a.declare_after_end(["C", "A"]).is_err());
    assert_eq!(a.dependencies(), ["B".to_string()]);
}

#[test]
fn redeclaring_the_same_kind_overwrites_peers() {
    let mut a = Job::new("A", 0);

    a.declare_after_start(["B"]).unwrap();
    a.declare_after_start(["C", "D"]).unwrap();

    assert_eq!(
        a.dependency(),
        &Dependency::AfterStart(vec!["C".to_string(), "D".to_string()])
    );
}

#[test]
fn peers_can_be_named_from_other_jobs() {
    let b = Job::new("B", 0);
    let c = Job::new("C", 0);
    let mut a = Job::new("A", 0);

    a.declare_after_end([b.name(), c.name()]).unwrap();

    assert_eq!(a.dependencies(), ["B".to_string(), "C".to_string()]);
}
