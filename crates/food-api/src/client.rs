//! REST Client
//!
//! Thin wrapper over `reqwest` (fetch-backed on wasm32). No retries, no
//! timeouts, no auth beyond the configured base URL.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Dish, NewDish};

/// Collection path of the food resource
pub const FOODS_PATH: &str = "/foods";

/// Path of a single food: `/foods/{id}`
pub fn food_path(id: u32) -> String {
    format!("{}/{}", FOODS_PATH, id)
}

/// Typed food endpoints
///
/// The seam between the dashboard flows and the network. Browser futures
/// are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list_foods(&self) -> ApiResult<Vec<Dish>>;

    /// `POST /foods`
    async fn create_food(&self, dish: &NewDish) -> ApiResult<Dish>;

    /// `PUT /foods/{id}`
    async fn update_food(&self, dish: &Dish) -> ApiResult<Dish>;

    /// `DELETE /foods/{id}`
    async fn delete_food(&self, id: u32) -> ApiResult<()>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Join the base URL and `path` with exactly one slash
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        let body = self.send(self.http.get(&url), &url).await?;
        decode(&url, &body)
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let body = self.send(self.http.post(&url).json(payload), &url).await?;
        decode(&url, &body)
    }

    pub async fn put<B, T>(&self, path: &str, payload: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let body = self.send(self.http.put(&url).json(payload), &url).await?;
        decode(&url, &body)
    }

    /// Any 2xx counts as success; the body is ignored
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        self.send(self.http.delete(&url), &url).await.map(|_| ())
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> ApiResult<String> {
        log::debug!("[API] {}", url);
        let request_err = |source| ApiError::Request {
            url: url.to_string(),
            source,
        };

        let response = request.send().await.map_err(request_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(request_err)
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[async_trait(?Send)]
impl FoodApi for ApiClient {
    async fn list_foods(&self) -> ApiResult<Vec<Dish>> {
        self.get(FOODS_PATH).await
    }

    async fn create_food(&self, dish: &NewDish) -> ApiResult<Dish> {
        self.post(FOODS_PATH, dish).await
    }

    async fn update_food(&self, dish: &Dish) -> ApiResult<Dish> {
        self.put(&food_path(dish.id), dish).await
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        self.delete(&food_path(id)).await
    }
}
