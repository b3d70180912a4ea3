use crate::{ClientError, ClientResult, EndpointTemplate};

use bt_config::{ApiConfig, EndpointsConfig};
use bt_core::{
    BalanceSnapshot, BudgetSnapshot, FetchError, FetchResult, HistoricalReports, MonthlyReport,
    RemoteResource, Session, TransactionList,
};

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Stands in for an empty 2xx body so unit-like responses still decode.
const EMPTY_BODY: &[u8] = b"null";

/// HTTP client for the budget API
pub struct ApiClient {
    base_url: String,
    endpoints: EndpointsConfig,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::from_build)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            endpoints: config.endpoints.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> &EndpointsConfig {
        &self.endpoints
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send a request and classify the outcome.
    ///
    /// Transport failures are `Network`, non-2xx statuses are `Server`
    /// (with the body's `message` when present), and bodies that do not
    /// decode as `T` are `Decode`.
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> FetchResult<T> {
        let response = req
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::server(status.as_u16(), server_message(&body)));
        }

        let payload: &[u8] = if body.is_empty() {
            EMPTY_BODY
        } else {
            body.as_ref()
        };
        serde_json::from_slice(payload).map_err(|e| FetchError::decode(e.to_string()))
    }

    /// POST a JSON body to an unscoped endpoint.
    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> FetchResult<Value>
    where
        B: Serialize + ?Sized,
    {
        debug!("POST {path}");
        let req = self.request(Method::POST, path).json(body);
        let result = self.execute(req).await;

        if let Err(e) = &result {
            warn!("POST {path} failed: {e}");
        }

        result
    }

    /// GET a user-scoped resource.
    ///
    /// Never fails: any error is captured in the returned slot. There is no
    /// retry; refreshing means calling this again.
    pub async fn fetch_resource<T: DeserializeOwned>(
        &self,
        endpoint: &EndpointTemplate,
        session: &Session,
    ) -> RemoteResource<T> {
        let path = endpoint.render(&session.user_id);
        debug!("GET {path}");

        let result = self.execute(self.request(Method::GET, &path)).await;

        if let Err(e) = &result {
            warn!("GET {} failed: {e}", endpoint.as_str());
        }

        result.into()
    }

    // =========================================================================
    // Typed reads
    // =========================================================================

    pub async fn balance(&self, session: &Session) -> RemoteResource<BalanceSnapshot> {
        let endpoint = EndpointTemplate::new(self.endpoints.balance.as_str());
        self.fetch_resource(&endpoint, session).await
    }

    pub async fn budget(&self, session: &Session) -> RemoteResource<BudgetSnapshot> {
        let endpoint = EndpointTemplate::new(self.endpoints.budget.as_str());
        self.fetch_resource(&endpoint, session).await
    }

    pub async fn recent_transactions(&self, session: &Session) -> RemoteResource<TransactionList> {
        let endpoint = EndpointTemplate::new(self.endpoints.recent_transactions.as_str());
        self.fetch_resource(&endpoint, session).await
    }

    pub async fn all_transactions(&self, session: &Session) -> RemoteResource<TransactionList> {
        let endpoint = EndpointTemplate::new(self.endpoints.all_transactions.as_str());
        self.fetch_resource(&endpoint, session).await
    }

    pub async fn monthly_report(&self, session: &Session) -> RemoteResource<MonthlyReport> {
        let endpoint = EndpointTemplate::new(self.endpoints.monthly_report.as_str());
        self.fetch_resource(&endpoint, session).await
    }

    pub async fn historical_reports(&self, session: &Session) -> RemoteResource<HistoricalReports> {
        let endpoint = EndpointTemplate::new(self.endpoints.historical_reports.as_str());
        self.fetch_resource(&endpoint, session).await
    }
}

/// `message` (or a string `error`) from an error body, if it is JSON.
fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(String::from)
}
