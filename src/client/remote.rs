use crate::functions::protocol::{InvokeRequest, InvokeResponse, ENDPOINT_INVOKE};
use crate::functions::IDENTIFY_FUNCTION;
use crate::model::Customer;
use crate::region::protocol::{
    CountResponse, GetResponse, PutRequest, PutResponse, ENDPOINT_COUNT, ENDPOINT_GET,
    ENDPOINT_PUT, ENDPOINT_QUERY,
};

use anyhow::Result;
use std::net::SocketAddr;
use std::time::Duration;
use uuid::Uuid;

const REQUEST_TIMEOUT: Duration = Duration::from_millis(2_000);
const RETRY_ATTEMPTS: usize = 3;

/// HTTP client for a grid server.
///
/// Every write carries a generated operation id, so a request that is
/// retried after a transport failure applies at most once on the server.
pub struct RemoteGridClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl RemoteGridClient {
    pub fn new(server: SocketAddr) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: format!("http://{}", server),
        }
    }

    async fn post_with_retry<T: serde::Serialize>(
        &self,
        url: String,
        payload: &T,
    ) -> Result<reqwest::Response> {
        let mut delay_ms = 150u64;

        for attempt in 0..RETRY_ATTEMPTS {
            let response = self
                .http_client
                .post(url.clone())
                .json(payload)
                .timeout(REQUEST_TIMEOUT)
                .send()
                .await;

            match response {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if attempt + 1 == RETRY_ATTEMPTS {
                        return Err(anyhow::anyhow!(e));
                    }
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(anyhow::anyhow!("Retry attempts exhausted"))
    }

    async fn get_with_retry(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response> {
        let mut delay_ms = 150u64;

        for attempt in 0..RETRY_ATTEMPTS {
            let response = self
                .http_client
                .get(url.clone())
                .query(query)
                .timeout(REQUEST_TIMEOUT)
                .send()
                .await;

            match response {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if attempt + 1 == RETRY_ATTEMPTS {
                        return Err(anyhow::anyhow!(e));
                    }
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(anyhow::anyhow!("Retry attempts exhausted"))
    }

    pub async fn save(&self, customer: &Customer) -> Result<()> {
        let payload = PutRequest {
            op_id: Uuid::new_v4().to_string(),
            key: customer.id().to_string(),
            value_json: serde_json::to_string(customer)?,
        };

        let response = self
            .post_with_retry(format!("{}{}", self.base_url, ENDPOINT_PUT), &payload)
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!("Save failed: {}", response.status()));
        }

        let ack: PutResponse = response.json().await?;
        if !ack.success {
            return Err(anyhow::anyhow!("Server rejected save"));
        }

        Ok(())
    }

    pub async fn find_by_id(&self, id: u64) -> Result<Option<Customer>> {
        let url = format!("{}{}/{}", self.base_url, ENDPOINT_GET, id);

        let response = self.get_with_retry(url, &[]).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow::anyhow!("Get failed: {}", response.status()));
        }

        let get_response: GetResponse = response.json().await?;
        match get_response.value_json {
            Some(json_str) => Ok(Some(serde_json::from_str(&json_str)?)),
            None => Ok(None),
        }
    }

    pub async fn count(&self) -> Result<u64> {
        let url = format!("{}{}", self.base_url, ENDPOINT_COUNT);

        let response = self.get_with_retry(url, &[]).await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!("Count failed: {}", response.status()));
        }

        let count_response: CountResponse = response.json().await?;
        Ok(count_response.count)
    }

    pub async fn find_by_name_like(&self, pattern: &str) -> Result<Option<Customer>> {
        let url = format!("{}{}", self.base_url, ENDPOINT_QUERY);

        let response = self.get_with_retry(url, &[("name_like", pattern)]).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow::anyhow!("Query failed: {}", response.status()));
        }

        let get_response: GetResponse = response.json().await?;
        match get_response.value_json {
            Some(json_str) => Ok(Some(serde_json::from_str(&json_str)?)),
            None => Ok(None),
        }
    }

    /// Invokes the identity function on the server, returning the customer
    /// with its freshly assigned id.
    pub async fn invoke_identify(&self, customer: &Customer) -> Result<Customer> {
        let payload = InvokeRequest {
            function: IDENTIFY_FUNCTION.to_string(),
            args_json: serde_json::to_string(customer)?,
        };

        let response = self
            .post_with_retry(format!("{}{}", self.base_url, ENDPOINT_INVOKE), &payload)
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!("Invoke failed: {}", response.status()));
        }

        let invoke_response: InvokeResponse = response.json().await?;
        let result_json = invoke_response
            .result_json
            .ok_or_else(|| anyhow::anyhow!("Invoke returned no result"))?;

        Ok(serde_json::from_str(&result_json)?)
    }
}
