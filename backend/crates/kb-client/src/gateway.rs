use crate::{ClientError, ClientResult, RequestCache, cache_key, with_retry};

use kb_config::{ApiConfig, CacheConfig, RetryConfig};
use kb_core::{GatewayError, Task, TaskGateway, TaskId, TaskPatch};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;

const TASKS_PATH: &str = "/api/tasks";
const PROJECT_TASKS_PATH: &str = "/api/tasks/project/";

#[derive(Deserialize)]
struct TaskListResponse {
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct TaskResponse {
    task: Task,
}

/// Request plumbing shared with cached fetches, which must own their state
#[derive(Clone)]
struct Transport {
    base_url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl Transport {
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Send and turn non-2xx responses into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                error_message(status, &text),
            ));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// `{"error": "..."}` or `{"error": {"message": "..."}}`, else "HTTP {status}"
fn error_message(status: StatusCode, body: &str) -> String {
    let from_body = serde_json::from_str::<Value>(body).ok().and_then(|body| {
        match body.get("error")? {
            Value::String(message) => Some(message.clone()),
            error => error.get("message")?.as_str().map(String::from),
        }
    });

    from_body.unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

/// Persistence gateway backed by the task REST API.
pub struct HttpTaskGateway {
    transport: Transport,
    retry: RetryConfig,
    cache: Option<RequestCache<Value>>,
}

impl HttpTaskGateway {
    /// Client with default timeout, retry and cache settings.
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `token` - Optional bearer token
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            transport: Transport {
                base_url: base_url.trim_end_matches('/').to_string(),
                token: token.filter(|t| !t.is_empty()).map(String::from),
                client: ReqwestClient::new(),
            },
            retry: RetryConfig::default(),
            cache: Some(RequestCache::default()),
        }
    }

    pub fn from_config(
        api: &ApiConfig,
        retry: &RetryConfig,
        cache: &CacheConfig,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self {
            transport: Transport {
                base_url: api.base_url.trim_end_matches('/').to_string(),
                token: api.token.clone().filter(|t| !t.is_empty()),
                client,
            },
            retry: retry.clone(),
            cache: cache.enabled.then(|| RequestCache::new(cache.ttl())),
        })
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.transport.base_url
    }

    pub fn has_token(&self) -> bool {
        self.transport.token.is_some()
    }

    pub fn cache(&self) -> Option<&RequestCache<Value>> {
        self.cache.as_ref()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All tasks of a project
    pub async fn list_project_tasks(&self, project_id: &str) -> ClientResult<Vec<Task>> {
        let path = format!("{PROJECT_TASKS_PATH}{project_id}");
        let body = self.cached_get(&path, "list_project_tasks").await?;
        let response: TaskListResponse = serde_json::from_value(body)?;
        debug!(
            "Loaded {} tasks for project {project_id}",
            response.tasks.len()
        );
        Ok(response.tasks)
    }

    pub async fn get_task(&self, id: &TaskId) -> ClientResult<Task> {
        let path = format!("{TASKS_PATH}/{id}");
        let body = self.cached_get(&path, "get_task").await?;
        let response: TaskResponse = serde_json::from_value(body)?;
        Ok(response.task)
    }

    async fn cached_get(&self, path: &str, operation_name: &'static str) -> ClientResult<Value> {
        let transport = self.transport.clone();
        let retry = self.retry.clone();
        let owned_path = path.to_string();
        let fetch = move || async move {
            with_retry(&retry, operation_name, || {
                transport.execute(transport.request(Method::GET, &owned_path))
            })
            .await
        };

        match self.cache {
            Some(ref cache) => cache.get_or_fetch(&cache_key(path, &[]), fetch).await,
            None => fetch().await,
        }
    }

    // =========================================================================
    // Writes (never retried)
    // =========================================================================

    pub async fn put_task(&self, id: &TaskId, patch: &TaskPatch) -> ClientResult<Value> {
        let req = self
            .transport
            .request(Method::PUT, &format!("{TASKS_PATH}/{id}"))
            .json(patch);
        let body = self.transport.execute(req).await?;
        self.invalidate_task(id);
        Ok(body)
    }

    pub async fn post_approval(&self, id: &TaskId) -> ClientResult<Value> {
        let req = self
            .transport
            .request(Method::POST, &format!("{TASKS_PATH}/{id}/approve"));
        let body = self.transport.execute(req).await?;
        self.invalidate_task(id);
        Ok(body)
    }

    /// Drop cached reads of the task and of every project list.
    fn invalidate_task(&self, id: &TaskId) {
        if let Some(ref cache) = self.cache {
            cache.invalidate_pattern(&format!("{TASKS_PATH}/{id}:"));
            cache.invalidate_pattern(PROJECT_TASKS_PATH);
            debug!("[Cache] {} entries left after write to {id}", cache.len());
        }
    }
}

#[async_trait]
impl TaskGateway for HttpTaskGateway {
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), GatewayError> {
        self.put_task(id, patch).await?;
        Ok(())
    }

    async fn approve_task(&self, id: &TaskId) -> Result<(), GatewayError> {
        self.post_approval(id).await?;
        Ok(())
    }
}
