//! Admin workflow store: cached results of the workflow queries plus the
//! operations that refresh them.

use std::cell::RefCell;

use crate::constants::{SUCCESS_MESSAGE, WORKFLOW_DELETED_MESSAGE};
use crate::error::ApiError;
use crate::models::{
    Workflow, WorkflowCreate, WorkflowQuery, WorkflowTreeNode, WorkflowUpdate, WorkflowsTreeResponse,
};
use crate::network::WorkflowsApi;
use crate::toast::Notifier;
use crate::utils::remove_empty_keys;

/// Cached results of the three admin workflow queries.
///
/// Each field is refreshed independently by its own operation; fetching the
/// tree does not touch the flat list and vice versa.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkflowsState {
    pub workflows: Vec<Workflow>,
    pub workflows_tree: Vec<WorkflowTreeNode>,
    pub approvals_count: u64,
}

/// Stateful facade over the remote admin workflow API.
///
/// Constructed once per application session with its API client and
/// notifier, then shared (`Rc`) with every consumer; there is no global
/// instance. The state cells are owned by the store and written only by its
/// own operations; readers get clones.
///
/// Operations may overlap freely. Concurrent fetches are not sequenced: the
/// last response to resolve wins and overwrites the field. State is only
/// borrowed after an awaited call returns, so no borrow is ever held across
/// a suspension point.
pub struct AdminWorkflowStore<A, N> {
    api: A,
    notifier: N,
    state: RefCell<WorkflowsState>,
}

impl<A: WorkflowsApi, N: Notifier> AdminWorkflowStore<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            state: RefCell::new(WorkflowsState::default()),
        }
    }

    /// Snapshot of the flat workflow list.
    pub fn workflows(&self) -> Vec<Workflow> {
        self.state.borrow().workflows.clone()
    }

    /// Snapshot of the hierarchical workflow view.
    pub fn workflows_tree(&self) -> Vec<WorkflowTreeNode> {
        self.state.borrow().workflows_tree.clone()
    }

    /// Pending-approvals count from the most recent fetch.
    pub fn approvals_count(&self) -> u64 {
        self.state.borrow().approvals_count
    }

    /// Refresh the flat list. On success the list state is overwritten with
    /// the response; on failure state keeps its prior value and the error is
    /// handed back to the caller.
    pub async fn fetch_workflows(
        &self,
        query: Option<&WorkflowQuery>,
    ) -> Result<Vec<Workflow>, ApiError> {
        let text = self.api.get_workflows(query).await?;
        let workflows: Vec<Workflow> = serde_json::from_str(&text)?;

        self.state.borrow_mut().workflows = workflows.clone();
        Ok(workflows)
    }

    /// Refresh the hierarchical view. The endpoint wraps the nodes in a
    /// `data` envelope; only the nodes are kept.
    pub async fn fetch_workflows_tree(
        &self,
        query: Option<&WorkflowQuery>,
    ) -> Result<Vec<WorkflowTreeNode>, ApiError> {
        let text = self.api.get_workflows_tree(query).await?;
        let response: WorkflowsTreeResponse = serde_json::from_str(&text)?;

        self.state.borrow_mut().workflows_tree = response.data.clone();
        Ok(response.data)
    }

    /// Create a workflow. No state field changes; a generic success toast is
    /// shown once the server accepts the record.
    pub async fn create_workflow(&self, data: &WorkflowCreate) -> Result<(), ApiError> {
        let body = serde_json::to_string(data)?;
        self.api.create_workflow(body).await?;

        self.notifier.success(SUCCESS_MESSAGE);
        Ok(())
    }

    /// Partially update a workflow. Empty-valued keys are stripped from the
    /// payload before it is sent.
    pub async fn update_workflow(&self, id: u32, data: &WorkflowUpdate) -> Result<(), ApiError> {
        let payload = remove_empty_keys(&serde_json::to_value(data)?);
        self.api.update_workflow(id, payload.to_string()).await?;

        self.notifier.success(SUCCESS_MESSAGE);
        Ok(())
    }

    /// Delete a workflow. Shows the deletion toast on success.
    pub async fn delete_workflow(&self, id: u32) -> Result<(), ApiError> {
        self.api.delete_workflow(id).await?;

        self.notifier.success(WORKFLOW_DELETED_MESSAGE);
        Ok(())
    }

    /// Refresh the pending-approvals count for one workflow. Each fetch
    /// overwrites the previous value.
    pub async fn fetch_approvals_count(&self, id: u32) -> Result<u64, ApiError> {
        let text = self.api.get_approvals_count(id).await?;
        let count: u64 = serde_json::from_str(&text)?;

        self.state.borrow_mut().approvals_count = count;
        Ok(count)
    }
}
