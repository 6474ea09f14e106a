use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::constants::ADMIN_WORKFLOWS_PATH;
use crate::error::ApiError;
use crate::models::WorkflowQuery;
use crate::network::ApiConfig;

/// The HTTP seam the workflow store talks through.
///
/// Implementations own transport policy (base URL, CORS, whatever auth the
/// deployment needs); the store only ever sees JSON text or an [`ApiError`].
#[async_trait(?Send)]
pub trait WorkflowsApi {
    async fn get_workflows(&self, query: Option<&WorkflowQuery>) -> Result<String, ApiError>;
    async fn get_workflows_tree(&self, query: Option<&WorkflowQuery>) -> Result<String, ApiError>;
    async fn create_workflow(&self, body: String) -> Result<String, ApiError>;
    async fn update_workflow(&self, id: u32, body: String) -> Result<String, ApiError>;
    async fn delete_workflow(&self, id: u32) -> Result<(), ApiError>;
    async fn get_approvals_count(&self, id: u32) -> Result<String, ApiError>;
}

/// REST API client for the admin workflow endpoints, backed by the browser
/// `fetch` API.
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Build a full endpoint URL, appending the query string when present.
    fn endpoint(&self, path: &str, query: Option<&WorkflowQuery>) -> String {
        let mut url = self.config.url(path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let params: Vec<String> = query
                .pairs()
                .iter()
                .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
                .collect();
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }

    // Helper function to make fetch requests
    async fn fetch_json(&self, url: &str, method: &str, body: Option<&str>) -> Result<String, ApiError> {
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(ApiError::from_js)?;
        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(data));
            headers.append("Content-Type", "application/json").map_err(ApiError::from_js)?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts).map_err(ApiError::from_js)?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no global window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ApiError::from_js)?;
        let resp: Response = resp_value.dyn_into().map_err(ApiError::from_js)?;

        if !resp.ok() {
            return Err(ApiError::Http {
                status: resp.status(),
                status_text: resp.status_text(),
            });
        }

        // Body as text; the caller decodes JSON.
        let text = JsFuture::from(resp.text().map_err(ApiError::from_js)?)
            .await
            .map_err(ApiError::from_js)?;
        Ok(text.as_string().unwrap_or_default())
    }
}

#[async_trait(?Send)]
impl WorkflowsApi for ApiClient {
    async fn get_workflows(&self, query: Option<&WorkflowQuery>) -> Result<String, ApiError> {
        let url = self.endpoint(ADMIN_WORKFLOWS_PATH, query);
        self.fetch_json(&url, "GET", None).await
    }

    async fn get_workflows_tree(&self, query: Option<&WorkflowQuery>) -> Result<String, ApiError> {
        let url = self.endpoint(&format!("{}/tree", ADMIN_WORKFLOWS_PATH), query);
        self.fetch_json(&url, "GET", None).await
    }

    async fn create_workflow(&self, body: String) -> Result<String, ApiError> {
        let url = self.endpoint(ADMIN_WORKFLOWS_PATH, None);
        self.fetch_json(&url, "POST", Some(&body)).await
    }

    async fn update_workflow(&self, id: u32, body: String) -> Result<String, ApiError> {
        let url = self.endpoint(&format!("{}/{}", ADMIN_WORKFLOWS_PATH, id), None);
        self.fetch_json(&url, "PATCH", Some(&body)).await
    }

    async fn delete_workflow(&self, id: u32) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("{}/{}", ADMIN_WORKFLOWS_PATH, id), None);
        let _ = self.fetch_json(&url, "DELETE", None).await?;
        Ok(())
    }

    async fn get_approvals_count(&self, id: u32) -> Result<String, ApiError> {
        let url = self.endpoint(&format!("{}/{}/approvals-count", ADMIN_WORKFLOWS_PATH, id), None);
        self.fetch_json(&url, "GET", None).await
    }
}

fn encode(part: &str) -> String {
    js_sys::encode_uri_component(part).into()
}

// Browser-only checks; `encode_uri_component` needs a JS runtime.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn endpoint_appends_encoded_query() {
        let client = ApiClient::new(ApiConfig::from_url("http://localhost:8001"));
        let query = WorkflowQuery::new().with("status", "pending").with("name", "a b&c");

        let url = client.endpoint(ADMIN_WORKFLOWS_PATH, Some(&query));
        assert_eq!(
            url,
            "http://localhost:8001/admin/workflows?status=pending&name=a%20b%26c"
        );
    }

    #[wasm_bindgen_test]
    fn endpoint_without_query_has_no_separator() {
        let client = ApiClient::new(ApiConfig::from_url("http://localhost:8001"));
        let url = client.endpoint(ADMIN_WORKFLOWS_PATH, Some(&WorkflowQuery::new()));
        assert_eq!(url, "http://localhost:8001/admin/workflows");
    }
}
