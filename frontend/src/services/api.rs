use domain::error::is_success;
use domain::forms::{MultipartPayload, Part};
use domain::ApiError;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{AdminExistsResponse, AuthResponse, ItemEnvelope, ListEnvelope, LoginRequest, RegisterRequest};
use web_sys::{File, FormData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// POST for a new record, PUT for an existing one
    pub fn for_save(editing: bool) -> Self {
        if editing {
            Method::Put
        } else {
            Method::Post
        }
    }
}

/// API client for the storefront backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Same client, authenticating every call with `token`
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn finish(method: Method, response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if is_success(method.as_str(), status) {
            Ok(body)
        } else {
            let error = ApiError::from_status(status, &body);
            log::warn!("{} {} failed: {}", method.as_str(), response.url(), error);
            Err(error)
        }
    }

    async fn send(&self, method: Method, path: &str, request: Request) -> Result<String, ApiError> {
        log::debug!("{} {}", method.as_str(), path);
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::finish(method, response).await
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch a whole collection, whatever envelope the backend wraps it in
    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let request = self
            .builder(Method::Get, path)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = self.send(Method::Get, path, request).await?;
        Ok(Self::decode::<ListEnvelope<T>>(&body)?.into_vec())
    }

    pub async fn item<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .builder(Method::Get, path)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = self.send(Method::Get, path, request).await?;
        Ok(Self::decode::<ItemEnvelope<T>>(&body)?.into_inner())
    }

    pub async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let request = self
            .builder(method, path)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.send(method, path, request).await
    }

    pub async fn send_multipart(
        &self,
        method: Method,
        path: &str,
        payload: MultipartPayload<File>,
    ) -> Result<String, ApiError> {
        let form = form_data(payload)?;
        let request = self
            .builder(method, path)
            .body(form)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.send(method, path, request).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .builder(Method::Delete, path)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(Method::Delete, path, request).await.map(|_| ())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let body = self.send_json(Method::Post, "auth/login", request).await?;
        Self::decode(&body)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = self.send_json(Method::Post, "auth/register", request).await?;
        Self::decode(&body)
    }

    pub async fn admin_exists(&self) -> Result<bool, ApiError> {
        let request = self
            .builder(Method::Get, "auth/admin-exists")
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = self.send(Method::Get, "auth/admin-exists", request).await?;
        Ok(Self::decode::<AdminExistsResponse>(&body)?.exists)
    }
}

fn form_data(payload: MultipartPayload<File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
    for part in payload.into_parts() {
        let appended = match &part {
            Part::Text { name, value } => form.append_with_str(name, value),
            Part::File { name, file } => form.append_with_blob_and_filename(name, file, &file.name()),
        };
        appended.map_err(|e| ApiError::Serialize(format!("{}: {:?}", part.name(), e)))?;
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.url("/users"), "http://localhost:5000/api/users");
        assert_eq!(client.url("banners/7"), "http://localhost:5000/api/banners/7");
    }

    #[wasm_bindgen_test]
    fn test_save_method() {
        assert_eq!(Method::for_save(true), Method::Put);
        assert_eq!(Method::for_save(false).as_str(), "POST");
    }

    #[wasm_bindgen_test]
    fn test_with_token() {
        let client = ApiClient::new("http://x").with_token(Some("t".to_string()));
        assert_ne!(client, ApiClient::new("http://x"));
    }
}
