//! WASM front-end module for the admin workflow screens: a typed layout
//! configuration for the host rendering layer, and a store that mediates
//! between UI callers and the remote `/admin/workflows` API.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

mod constants;
mod error;
mod layout;
mod models;
mod network;
mod state;
mod toast;
mod utils;

pub use error::ApiError;
pub use layout::{
    AppConfig, ContentLayoutNav, ContentWidth, FooterConfig, FooterType, I18nConfig, IconProps,
    IconsConfig, LayoutConfig, NavbarConfig, NavbarType, UnknownOption, VerticalNavConfig,
    LAYOUT_CONFIG,
};
pub use models::{
    Workflow, WorkflowCreate, WorkflowQuery, WorkflowTreeNode, WorkflowUpdate,
    WorkflowsTreeResponse,
};
pub use network::{ApiClient, ApiConfig, WorkflowsApi};
pub use state::{AdminWorkflowStore, WorkflowsState};
pub use toast::{Notifier, ToastKind, Toaster};
pub use utils::remove_empty_keys;

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
}

/// The layout configuration as a plain JS object, for the host layout
/// framework.
#[wasm_bindgen(js_name = layoutConfig)]
pub fn layout_config() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&*layout::LAYOUT_CONFIG).map_err(js_error)
}

/// JS-facing handle over the admin workflow store.
///
/// Construct it once with the API base URL and keep it for the lifetime of
/// the page; each operation returns a `Promise` that rejects with an error
/// message when the remote call fails.
#[wasm_bindgen]
pub struct AdminWorkflows {
    store: Rc<AdminWorkflowStore<ApiClient, Toaster>>,
}

#[wasm_bindgen]
impl AdminWorkflows {
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: &str) -> AdminWorkflows {
        let api = ApiClient::new(ApiConfig::from_url(base_url));
        AdminWorkflows {
            store: Rc::new(AdminWorkflowStore::new(api, Toaster::default())),
        }
    }

    /// Fetch the flat workflow list. `query` is an optional `{key: value}`
    /// object forwarded to the endpoint; resolves with the fetched list.
    #[wasm_bindgen(js_name = fetchWorkflows)]
    pub fn fetch_workflows(&self, query: JsValue) -> js_sys::Promise {
        let store = Rc::clone(&self.store);
        let query = parse_query(query);
        future_to_promise(async move {
            let query = query?;
            let workflows = store.fetch_workflows(query.as_ref()).await.map_err(js_error)?;
            serde_wasm_bindgen::to_value(&workflows).map_err(js_error)
        })
    }

    /// Fetch the hierarchical workflow view; resolves with the tree nodes.
    #[wasm_bindgen(js_name = fetchWorkflowsTree)]
    pub fn fetch_workflows_tree(&self, query: JsValue) -> js_sys::Promise {
        let store = Rc::clone(&self.store);
        let query = parse_query(query);
        future_to_promise(async move {
            let query = query?;
            let tree = store.fetch_workflows_tree(query.as_ref()).await.map_err(js_error)?;
            serde_wasm_bindgen::to_value(&tree).map_err(js_error)
        })
    }

    #[wasm_bindgen(js_name = createWorkflow)]
    pub fn create_workflow(&self, data: JsValue) -> js_sys::Promise {
        let store = Rc::clone(&self.store);
        let data: Result<WorkflowCreate, JsValue> =
            serde_wasm_bindgen::from_value(data).map_err(js_error);
        future_to_promise(async move {
            store.create_workflow(&data?).await.map_err(js_error)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    #[wasm_bindgen(js_name = updateWorkflow)]
    pub fn update_workflow(&self, id: u32, data: JsValue) -> js_sys::Promise {
        let store = Rc::clone(&self.store);
        let data: Result<WorkflowUpdate, JsValue> =
            serde_wasm_bindgen::from_value(data).map_err(js_error);
        future_to_promise(async move {
            store.update_workflow(id, &data?).await.map_err(js_error)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    #[wasm_bindgen(js_name = deleteWorkflow)]
    pub fn delete_workflow(&self, id: u32) -> js_sys::Promise {
        let store = Rc::clone(&self.store);
        future_to_promise(async move {
            store.delete_workflow(id).await.map_err(js_error)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Fetch the pending-approvals count for one workflow; resolves with the
    /// count.
    #[wasm_bindgen(js_name = fetchApprovalsCount)]
    pub fn fetch_approvals_count(&self, id: u32) -> js_sys::Promise {
        let store = Rc::clone(&self.store);
        future_to_promise(async move {
            let count = store.fetch_approvals_count(id).await.map_err(js_error)?;
            Ok(JsValue::from_f64(count as f64))
        })
    }

    /// Snapshot of the cached flat list.
    #[wasm_bindgen(js_name = workflows)]
    pub fn workflows(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.store.workflows()).map_err(js_error)
    }

    /// Snapshot of the cached tree.
    #[wasm_bindgen(js_name = workflowsTree)]
    pub fn workflows_tree(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.store.workflows_tree()).map_err(js_error)
    }

    /// Cached pending-approvals count.
    #[wasm_bindgen(js_name = approvalsCount)]
    pub fn approvals_count(&self) -> f64 {
        self.store.approvals_count() as f64
    }
}

/// Decode an optional `{key: value}` JS object into a query filter.
fn parse_query(value: JsValue) -> Result<Option<WorkflowQuery>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let pairs: std::collections::BTreeMap<String, String> =
        serde_wasm_bindgen::from_value(value).map_err(js_error)?;
    let mut query = WorkflowQuery::new();
    for (key, value) in &pairs {
        query = query.with(key, value);
    }
    Ok(Some(query))
}

/// Map an error to a JS rejection value, logging it once at the boundary.
fn js_error<E: std::fmt::Display>(err: E) -> JsValue {
    let message = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}
