// src/dag/graph.rs

use petgraph::dot::Dot;
use petgraph::graphmap::DiGraphMap;

use crate::dag::job::DependencyKind;
use crate::dag::scheduler::Scheduler;

/// Build a directed graph of the registered jobs.
///
/// Edge direction: peer -> job, weighted with the dependency kind.
/// For `A` declared `after_end = ["B"]` we add edge `B -> A`.
pub fn dependency_graph(scheduler: &Scheduler) -> DiGraphMap<&str, DependencyKind> {
    let mut graph = DiGraphMap::new();

    for job in scheduler.jobs() {
        graph.add_node(job.name());
    }

    for job in scheduler.jobs() {
        let kind = job.dependency().kind();
        for peer in job.dependencies() {
            graph.add_edge(peer.as_str(), job.name(), kind);
        }
    }

    graph
}

/// Render the dependency graph in Graphviz DOT format.
pub fn to_dot(scheduler: &Scheduler) -> String {
    let graph = dependency_graph(scheduler);
    format!("{}", Dot::new(&graph))
}
