//! Group action scoping an inclusion under a namespace

use crate::actions::IncludeAction;
use serde::Serialize;

/// Namespaced group around a conditional inclusion.
///
/// `active` is the inclusion's condition, evaluated once when the plan is
/// composed. An inactive group contributes nothing downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAction {
    pub namespace: String,
    pub include: IncludeAction,
    pub active: bool,
}
