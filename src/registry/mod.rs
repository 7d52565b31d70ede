//! Algorithm registry
//!
//! Maps a stable algorithm id to its [`AlgorithmMeta`]: display name,
//! description, topic, parameter schema, runner constructor and visualizer.
//! The registry is built once and only read afterwards.

mod builtin;

use crate::algorithms::FrameSequence;
use crate::params::{ParamError, ParamSpec, Params};
use crate::visual::Visualizer;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Builds a fresh frame sequence from typed parameters
pub type RunFn = fn(&Params) -> Result<Box<dyn FrameSequence>, ParamError>;

#[derive(Clone, Copy)]
pub struct AlgorithmMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Grouping label for menus
    pub topic: &'static str,
    pub params: &'static [ParamSpec],
    pub run: RunFn,
    pub visualize: Visualizer,
}

impl fmt::Debug for AlgorithmMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmMeta")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("topic", &self.topic)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("algorithm '{0}' is already registered")]
    DuplicateId(String),
}

/// Algorithms grouped under one topic, in declaration order
#[derive(Debug, Clone)]
pub struct TopicGroup<'a> {
    pub topic: &'static str,
    pub algorithms: Vec<&'a AlgorithmMeta>,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<AlgorithmMeta>,
    index: FxHashMap<&'static str, usize>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with every built-in search and sort
    pub fn builtin() -> Self {
        let mut registry = Registry::new();
        for meta in builtin::ALGORITHMS {
            // ids in the built-in table are unique
            if let Err(e) = registry.register(*meta) {
                tracing::warn!(error = %e, "skipping built-in algorithm");
            }
        }
        registry
    }

    pub fn register(&mut self, meta: AlgorithmMeta) -> Result<(), RegistryError> {
        if self.index.contains_key(meta.id) {
            return Err(RegistryError::DuplicateId(meta.id.to_string()));
        }
        self.index.insert(meta.id, self.entries.len());
        self.entries.push(meta);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&AlgorithmMeta, RegistryError> {
        self.index
            .get(id)
            .and_then(|&i| self.entries.get(i))
            .ok_or_else(|| RegistryError::UnknownAlgorithm(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All algorithms in registration order
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmMeta> {
        self.entries.iter()
    }

    /// Position of `id` in registration order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group by topic. Topics appear in order of first use, algorithms in
    /// registration order within their topic.
    pub fn topics(&self) -> Vec<TopicGroup<'_>> {
        let mut groups: Vec<TopicGroup<'_>> = Vec::new();
        for meta in &self.entries {
            match groups.iter_mut().find(|g| g.topic == meta.topic) {
                Some(group) => group.algorithms.push(meta),
                None => groups.push(TopicGroup {
                    topic: meta.topic,
                    algorithms: vec![meta],
                }),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::drain;
    use crate::params::{default_inputs, parse_params};
    use crate::value::values;
    use crate::visual::Outcome;

    #[test]
    fn test_builtin_ids() {
        let registry = Registry::builtin();
        let ids: Vec<&str> = registry.iter().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec![
                "linear-search",
                "binary-search",
                "bubble-sort",
                "selection-sort",
                "insertion-sort",
                "quick-sort"
            ]
        );
    }

    #[test]
    fn test_unknown_id() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.get("heap-sort").unwrap_err(),
            RegistryError::UnknownAlgorithm("heap-sort".to_string())
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = Registry::builtin();
        let meta = *registry.get("bubble-sort").unwrap();
        assert_eq!(
            registry.register(meta),
            Err(RegistryError::DuplicateId("bubble-sort".to_string()))
        );
    }

    #[test]
    fn test_topics_preserve_order() {
        let registry = Registry::builtin();
        let topics = registry.topics();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].topic, "Searching");
        assert_eq!(topics[1].topic, "Sorting");
        let sorts: Vec<&str> = topics[1].algorithms.iter().map(|m| m.id).collect();
        assert_eq!(
            sorts,
            vec!["bubble-sort", "selection-sort", "insertion-sort", "quick-sort"]
        );
    }

    #[test]
    fn test_defaults_run_to_completion() {
        let registry = Registry::builtin();
        for meta in registry.iter() {
            let params = parse_params(meta.params, &default_inputs(meta.params)).unwrap();
            let mut sequence = (meta.run)(&params).unwrap();
            let steps = drain(&mut sequence);
            let last = steps.last().unwrap();
            assert!(last.is_done(), "{} did not finish", meta.id);
            if meta.topic == "Sorting" {
                assert_eq!(
                    last.frame().outcome,
                    Some(Outcome::Sorted(values(&[-8, -2, 0, 0, 1, 1, 2, 4, 5])))
                );
            }
        }
    }

    #[test]
    fn test_run_reports_missing_params() {
        let registry = Registry::builtin();
        let meta = registry.get("linear-search").unwrap();
        assert!(matches!(
            (meta.run)(&Params::new()),
            Err(ParamError::Missing(_))
        ));
    }
}
