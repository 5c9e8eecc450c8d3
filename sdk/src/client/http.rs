//! HTTP client implementation.
//!
//! Provides the main HTTP client for interacting with the Bookshelf
//! catalog API. Each operation is one request/response exchange: build
//! headers, issue the request, inspect the status, parse the body. The
//! client holds no cache and no shared mutable state; every read hits the
//! network.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::config::ClientConfig;
use super::error::{ClientError, Operation};
use crate::auth::SessionProvider;
use crate::notify::{LogNotifier, Notifier};
use crate::types::{
    Book, BookPatch, BookRecommendation, NewBook, NewReadingList, NewReview, ReadingList,
    ReadingListPatch, Review,
};

/// Recommendations request body.
#[derive(Debug, Serialize)]
struct RecommendationQuery<'a> {
    query: &'a str,
}

/// Recommendations response format.
///
/// The server omits the `recommendations` key when it has nothing to
/// suggest; that decodes as an empty list rather than an error.
#[derive(Debug, Deserialize)]
struct RecommendationsResponse {
    #[serde(default)]
    recommendations: Vec<BookRecommendation>,
}

/// Error body shape for server-rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for the Bookshelf catalog API.
///
/// Cloning is cheap: the underlying `reqwest::Client` pools connections
/// internally, and concurrent calls on clones never race.
#[derive(Clone)]
pub struct BookshelfClient {
    config: ClientConfig,
    http: reqwest::Client,
    session: Option<Arc<dyn SessionProvider>>,
    notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for BookshelfClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookshelfClient")
            .field("config", &self.config)
            .field("authenticated", &self.session.is_some())
            .finish_non_exhaustive()
    }
}

impl BookshelfClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            config,
            http,
            session: None,
            notifier: Arc::new(LogNotifier),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    /// Creates a new client with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Creates a new client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is invalid.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    /// Attaches a session provider. Without one, every request is
    /// anonymous.
    #[must_use]
    pub fn with_session_provider(mut self, provider: impl SessionProvider + 'static) -> Self {
        self.session = Some(Arc::new(provider));
        self
    }

    /// Replaces the notifier used to surface server messages.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds request headers, attaching `Authorization` only when a
    /// session token exists.
    ///
    /// Never fails: when no session is obtainable the request goes out
    /// with `Content-Type` alone, so anonymous access keeps working.
    async fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let Some(provider) = &self.session else {
            return headers;
        };

        match provider.id_token().await {
            Ok(Some(token)) => {
                if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                    headers.insert(AUTHORIZATION, value);
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::debug!("session lookup failed, proceeding anonymously: {err}");
            }
        }

        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Sends a request, folding transport errors into the operation's
    /// failure signal. Status is not inspected here.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        operation: Operation,
    ) -> Result<reqwest::Response, ClientError> {
        request.send().await.map_err(|err| {
            tracing::debug!(operation = operation.as_str(), "transport error: {err}");
            ClientError::Failed(operation)
        })
    }

    /// Sends a request and accepts only a success status.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        operation: Operation,
    ) -> Result<reqwest::Response, ClientError> {
        let response = self.send(request, operation).await?;

        if !response.status().is_success() {
            tracing::debug!(
                operation = operation.as_str(),
                status = response.status().as_u16(),
                "request rejected"
            );
            return Err(ClientError::Failed(operation));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Deserialization(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ClientError::Deserialization(e.to_string()))
    }

    /// Lists every book in the catalog. Anonymous.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_books(&self) -> Result<Vec<Book>, ClientError> {
        let request = self.http.get(self.url("/books"));
        let response = self.execute(request, Operation::FetchBooks).await?;
        Self::decode(response).await
    }

    /// Fetches one book by ID. Anonymous.
    ///
    /// A 404 is a valid outcome, not an error: the book does not exist and
    /// `None` is returned without fetching anything further.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails with any status other than
    /// 404.
    pub async fn get_book(&self, id: &str) -> Result<Option<Book>, ClientError> {
        let operation = Operation::FetchBook;
        let request = self.http.get(self.url(&format!("/books/{id}")));
        let response = self.send(request, operation).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ClientError::Failed(operation));
        }

        Self::decode(response).await.map(Some)
    }

    /// Creates a book. Authenticated.
    ///
    /// Returns the server's copy; the server assigns `id` and any other
    /// generated fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_book(&self, book: &NewBook) -> Result<Book, ClientError> {
        let request = self
            .http
            .post(self.url("/books"))
            .headers(self.auth_headers().await)
            .json(book);
        let response = self.execute(request, Operation::CreateBook).await?;
        Self::decode(response).await
    }

    /// Partially updates a book. Authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_book(&self, id: &str, book: &BookPatch) -> Result<Book, ClientError> {
        let request = self
            .http
            .put(self.url(&format!("/books/{id}")))
            .headers(self.auth_headers().await)
            .json(book);
        let response = self.execute(request, Operation::UpdateBook).await?;
        Self::decode(response).await
    }

    /// Deletes a book. Authenticated.
    ///
    /// Success carries no body worth returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_book(&self, id: &str) -> Result<(), ClientError> {
        let request = self
            .http
            .delete(self.url(&format!("/books/{id}")))
            .headers(self.auth_headers().await);
        self.execute(request, Operation::DeleteBook).await?;
        Ok(())
    }

    /// Requests recommendations for a free-text query. Authenticated.
    ///
    /// A success body without the `recommendations` key yields an empty
    /// list; the server omits the key when it has nothing to suggest.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn recommendations(
        &self,
        query: &str,
    ) -> Result<Vec<BookRecommendation>, ClientError> {
        let request = self
            .http
            .post(self.url("/recommendations"))
            .headers(self.auth_headers().await)
            .json(&RecommendationQuery { query });
        let response = self.execute(request, Operation::GetRecommendations).await?;
        let body: RecommendationsResponse = Self::decode(response).await?;
        Ok(body.recommendations)
    }

    /// Lists the user's reading lists. Authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_reading_lists(&self) -> Result<Vec<ReadingList>, ClientError> {
        let request = self
            .http
            .get(self.url("/reading-lists"))
            .headers(self.auth_headers().await);
        let response = self.execute(request, Operation::FetchReadingLists).await?;
        Self::decode(response).await
    }

    /// Creates a reading list. Authenticated.
    ///
    /// The server assigns `id` and both timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_reading_list(
        &self,
        list: &NewReadingList,
    ) -> Result<ReadingList, ClientError> {
        let request = self
            .http
            .post(self.url("/reading-lists"))
            .headers(self.auth_headers().await)
            .json(list);
        let response = self.execute(request, Operation::CreateReadingList).await?;
        Self::decode(response).await
    }

    /// Partially updates a reading list. Authenticated.
    ///
    /// On failure the server's `message` field is pushed through the
    /// [`Notifier`] before the error is returned. No other mutating call
    /// does this; the asymmetry is part of the API contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_reading_list(
        &self,
        id: &str,
        list: &ReadingListPatch,
    ) -> Result<ReadingList, ClientError> {
        let operation = Operation::UpdateReadingList;
        let request = self
            .http
            .put(self.url(&format!("/reading-lists/{id}")))
            .headers(self.auth_headers().await)
            .json(list);
        let response = self.send(request, operation).await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(error) = serde_json::from_str::<ErrorBody>(&body) {
                self.notifier
                    .notify(&format!("Server says: {}", error.message));
            }
            return Err(ClientError::Failed(operation));
        }

        Self::decode(response).await
    }

    /// Deletes a reading list. Authenticated.
    ///
    /// Returns `true` on success, unlike [`delete_book`](Self::delete_book)
    /// which returns nothing; callers depend on the boolean.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_reading_list(&self, id: &str) -> Result<bool, ClientError> {
        let request = self
            .http
            .delete(self.url(&format!("/reading-lists/{id}")))
            .headers(self.auth_headers().await);
        self.execute(request, Operation::DeleteReadingList).await?;
        Ok(true)
    }

    /// Lists the reviews of a book. Anonymous.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_reviews(&self, book_id: &str) -> Result<Vec<Review>, ClientError> {
        let request = self.http.get(self.url(&format!("/books/{book_id}/reviews")));
        let response = self.execute(request, Operation::FetchReviews).await?;
        Self::decode(response).await
    }

    /// Creates a review. Authenticated.
    ///
    /// The collection path is scoped by `review.book_id`; the caller must
    /// set it to the target book before calling.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_review(&self, review: &NewReview) -> Result<Review, ClientError> {
        let request = self
            .http
            .post(self.url(&format!("/books/{}/reviews", review.book_id)))
            .headers(self.auth_headers().await)
            .json(review);
        let response = self.execute(request, Operation::CreateReview).await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{SessionError, StaticSession};
    use async_trait::async_trait;

    struct FailingSession;

    #[async_trait]
    impl SessionProvider for FailingSession {
        async fn id_token(&self) -> Result<Option<String>, SessionError> {
            Err(SessionError::Unavailable("identity pool offline".to_string()))
        }
    }

    struct SignedOutSession;

    #[async_trait]
    impl SessionProvider for SignedOutSession {
        async fn id_token(&self) -> Result<Option<String>, SessionError> {
            Ok(None)
        }
    }

    #[test]
    fn test_client_new() {
        let config = ClientConfig::new("https://api.example.com");
        let client = BookshelfClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_defaults() {
        let client = BookshelfClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_base_url() {
        let client = BookshelfClient::with_base_url("https://api.example.com");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_invalid_config() {
        let config = ClientConfig::new("");
        let client = BookshelfClient::new(config);
        assert!(client.is_err());
    }

    #[test]
    fn test_client_config_access() {
        let config = ClientConfig::new("https://api.example.com").with_user_agent("shelf/2.0");
        let client = BookshelfClient::new(config).expect("client creation");
        assert_eq!(client.config().base_url, "https://api.example.com");
        assert_eq!(client.config().user_agent, "shelf/2.0");
    }

    #[tokio::test]
    async fn test_auth_headers_without_provider() {
        let client = BookshelfClient::with_defaults().expect("client creation");
        let headers = client.auth_headers().await;

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_auth_headers_with_token() {
        let client = BookshelfClient::with_defaults()
            .expect("client creation")
            .with_session_provider(StaticSession::new("T"));
        let headers = client.auth_headers().await;

        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer T")
        );
    }

    #[tokio::test]
    async fn test_auth_headers_degrade_on_provider_failure() {
        let client = BookshelfClient::with_defaults()
            .expect("client creation")
            .with_session_provider(FailingSession);
        let headers = client.auth_headers().await;

        assert_eq!(headers.len(), 1);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_auth_headers_degrade_when_signed_out() {
        let client = BookshelfClient::with_defaults()
            .expect("client creation")
            .with_session_provider(SignedOutSession);
        let headers = client.auth_headers().await;

        assert_eq!(headers.len(), 1);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_recommendations_response_defaults_to_empty() {
        let body: RecommendationsResponse = serde_json::from_str("{}").expect("deserialize");
        assert!(body.recommendations.is_empty());
    }
}
