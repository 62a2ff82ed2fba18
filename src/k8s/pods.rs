use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::debug;

use crate::error::IlogsError;
use crate::prompt::Prompt;

/// Sentinel label offered before the pod names; choosing it keeps every candidate.
const ALL_LABEL: &str = "All";

/// Namespace boundary for one invocation, fixed at startup.
pub enum Scope {
    Namespace(String),
    AllNamespaces,
}

/// Lists pods in scope and narrows them to the filter term, newest first.
///
/// Listing errors are propagated verbatim. An empty scope and an empty match
/// set are distinct failures so the user can tell "wrong namespace" from
/// "wrong filter".
pub async fn list_candidates(
    client: Client,
    scope: &Scope,
    filter: &str,
) -> Result<Vec<Pod>, IlogsError> {
    let api: Api<Pod> = match scope {
        Scope::AllNamespaces => Api::all(client),
        Scope::Namespace(ns) => Api::namespaced(client, ns),
    };

    let pods = api.list(&ListParams::default()).await?;
    debug!(total = pods.items.len(), filter, "listed pods in scope");

    filter_candidates(pods.items, filter)
}

fn filter_candidates(pods: Vec<Pod>, filter: &str) -> Result<Vec<Pod>, IlogsError> {
    if pods.is_empty() {
        return Err(IlogsError::EmptyScope);
    }

    let mut candidates: Vec<Pod> = pods
        .into_iter()
        .filter(|p| p.name_any().contains(filter))
        .collect();
    if candidates.is_empty() {
        return Err(IlogsError::NoMatch(filter.to_string()));
    }

    // Newest first. sort_by is stable, so ties keep the listing order.
    candidates.sort_by(|a, b| b.creation_timestamp().cmp(&a.creation_timestamp()));

    Ok(candidates)
}

/// Asks the user to pick one candidate, or "All" for every one of them.
///
/// A chosen label that matches no candidate yields an empty selection. That
/// cannot happen with labels built here, but the prompt contract does not
/// guarantee it, so it is left permissive rather than turned into a failure.
pub fn resolve_selection(
    candidates: Vec<Pod>,
    prompt: &dyn Prompt,
) -> Result<Vec<Pod>, IlogsError> {
    let mut labels = Vec::with_capacity(candidates.len() + 1);
    labels.push(ALL_LABEL.to_string());
    labels.extend(candidates.iter().map(|p| p.name_any()));

    let chosen = prompt.select("Select pods:", &labels)?;
    if chosen == ALL_LABEL {
        return Ok(candidates);
    }

    // TODO: multi select
    Ok(candidates
        .into_iter()
        .find(|p| p.name_any() == chosen)
        .into_iter()
        .collect())
}
