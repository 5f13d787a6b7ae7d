//! Net resolution
//!
//! Maps a `NetSelector` to exactly one registered net. Substring matching is
//! literal (`str::contains`); more than one match is an error, never a pick.

use crate::config::NetSelector;
use crate::error::{ProfStatsError, Result};
use profdag_runtime::{GraphHandle, GraphRegistry, StatsProvider};
use std::sync::Arc;
use tracing::{debug, warn};

/// Names containing `partial` as a contiguous substring, in enumeration order
pub fn partial_matches(names: &[String], partial: &str) -> Vec<String> {
    names
        .iter()
        .filter(|name| name.contains(partial))
        .cloned()
        .collect()
}

/// Resolve the selector to a registry entry of any kind
pub fn resolve_handle(registry: &dyn GraphRegistry, selector: &NetSelector) -> Result<GraphHandle> {
    match selector {
        NetSelector::Exact(name) => registry
            .get_net(name)
            .ok_or_else(|| ProfStatsError::net_not_found(name)),
        NetSelector::Partial(partial) => {
            let names = registry.nets();
            let mut matches = partial_matches(&names, partial);
            debug!(
                "partial_net_name '{}' matched {} of {} nets",
                partial,
                matches.len(),
                names.len()
            );

            match matches.len() {
                0 => Err(ProfStatsError::no_partial_match(partial)),
                1 => {
                    let name = matches.remove(0);
                    registry.get_net(&name).ok_or_else(|| {
                        warn!("Net {} was removed while resolving '{}'", name, partial);
                        ProfStatsError::no_partial_match(partial)
                    })
                }
                _ => Err(ProfStatsError::ambiguous_match(partial, &matches)),
            }
        }
    }
}

/// Resolve the selector to a statistics-collecting net
pub fn resolve(
    registry: &dyn GraphRegistry,
    selector: &NetSelector,
) -> Result<Arc<dyn StatsProvider>> {
    let handle = resolve_handle(registry, selector)?;
    match handle {
        GraphHandle::Profiled(net) => Ok(net),
        GraphHandle::Plain(net) => Err(ProfStatsError::type_mismatch(net.name(), "plain")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use profdag_runtime::{NetDef, OperatorDef, ProfilingOptions, Workspace};

    fn workspace(names: &[&str]) -> Workspace {
        let ws = Workspace::new();
        for name in names {
            ws.create_net(
                NetDef::new(*name, vec![OperatorDef::of_type("FC")]),
                ProfilingOptions::default(),
            );
        }
        ws
    }

    /// Enumerates names that are not actually registered
    struct VanishingRegistry;

    impl GraphRegistry for VanishingRegistry {
        fn get_net(&self, _name: &str) -> Option<GraphHandle> {
            None
        }

        fn nets(&self) -> Vec<String> {
            vec!["train_net".to_string()]
        }
    }

    #[test]
    fn test_partial_matches_literal() {
        let names: Vec<String> = ["A", "AB", "B", "a.*"].iter().map(|s| s.to_string()).collect();
        assert_eq!(partial_matches(&names, "A"), vec!["A", "AB"]);
        assert_eq!(partial_matches(&names, ".*"), vec!["a.*"]);
        assert!(partial_matches(&names, "Z").is_empty());
    }

    #[test]
    fn test_exact_lookup() {
        let ws = workspace(&["train", "train_eval"]);
        let net = resolve(&ws, &NetSelector::Exact("train".into())).unwrap();
        assert_eq!(net.net_name(), "train");
    }

    #[test]
    fn test_exact_missing_is_not_found() {
        let ws = workspace(&["train"]);
        let err = resolve(&ws, &NetSelector::Exact("eval".into())).err().unwrap();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_exact_does_not_match_substring() {
        let ws = workspace(&["train_net"]);
        let err = resolve(&ws, &NetSelector::Exact("train".into())).err().unwrap();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_partial_unique_match() {
        let ws = workspace(&["A", "B"]);
        let net = resolve(&ws, &NetSelector::Partial("B".into())).unwrap();
        assert_eq!(net.net_name(), "B");
    }

    #[test]
    fn test_partial_ambiguous() {
        let ws = workspace(&["A", "AB", "B"]);
        let err = resolve(&ws, &NetSelector::Partial("A".into())).err().unwrap();
        assert_eq!(err.kind, ErrorKind::AmbiguousMatch);
        assert!(err.message.contains("'A'"));
    }

    #[test]
    fn test_partial_no_match() {
        let ws = workspace(&["A", "AB", "B"]);
        let err = resolve(&ws, &NetSelector::Partial("Z".into())).err().unwrap();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_plain_net_is_type_mismatch() {
        let ws = Workspace::new();
        ws.add_plain_net(NetDef::new("init", vec![]));
        let err = resolve(&ws, &NetSelector::Exact("init".into())).err().unwrap();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);

        // The untyped lookup still succeeds
        let handle = resolve_handle(&ws, &NetSelector::Exact("init".into())).unwrap();
        assert_eq!(handle.kind(), "plain");
    }

    #[test]
    fn test_name_vanishing_mid_resolution_is_not_found() {
        let err = resolve(&VanishingRegistry, &NetSelector::Partial("train".into()))
            .err()
            .unwrap();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
