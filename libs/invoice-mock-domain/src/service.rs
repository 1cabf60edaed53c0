//! Invoice service - request pipeline orchestration
//!
//! Runs the stages of a mocked invoice listing request:
//!
//! ```text
//! extracting → resolving → composing → responded
//!      │            │           │
//!      └────────────┴───────────┴──→ error
//! ```
//!
//! Each request resolves to exactly one `MockResponse` or one `MockError`.

use tracing::{debug, info};

use crate::error::{MockError, Result};
use crate::fixture::{compose, FixtureDocument, MockResponse, DEFAULT_FIXTURE};
use crate::ports::FixtureRepository;
use crate::subscriber::{extract_msisdn, Msisdn, Pagination, RequestParts};

/// Service serving invoice listings from fixtures
///
/// Generic over any `FixtureRepository` implementation; the repository is the
/// only shared resource and is read-only, so concurrent requests need no locking.
pub struct InvoiceService<R> {
    repository: R,
}

impl<R> InvoiceService<R>
where
    R: FixtureRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Serve an invoice listing request
    ///
    /// # Errors
    ///
    /// - `MockError::InvalidRequest` if no MSISDN can be extracted
    /// - `MockError::FixtureNotFound` if neither the subscriber nor the default fixture exists
    /// - `MockError::FixtureParseError` / `MockError::InvalidMetadata` for a broken fixture
    /// - `MockError::StorageFailure` if the repository fails
    pub async fn list_invoices(&self, request: &RequestParts) -> Result<MockResponse> {
        let msisdn = extract_msisdn(request).ok_or(MockError::InvalidRequest)?;
        let pagination = Pagination::from_query(request);
        debug!(
            msisdn = %msisdn,
            page = pagination.page,
            limit = pagination.limit,
            "Extracted subscriber"
        );

        let fixture = self.resolve_fixture(&msisdn).await?;
        let response = compose(&msisdn, pagination, &fixture);

        info!(
            msisdn = %msisdn,
            fixture = fixture.name(),
            status = response.status,
            "Serving mocked invoices"
        );
        Ok(response)
    }

    /// Load the fixture for `msisdn`, falling back to the default fixture
    ///
    /// A subscriber fixture that exists but is broken does not fall back.
    pub async fn resolve_fixture(&self, msisdn: &Msisdn) -> Result<FixtureDocument> {
        if let Some(text) = self.repository.fetch(msisdn.as_str()).await? {
            return FixtureDocument::from_json(msisdn.as_str(), &text);
        }

        debug!(msisdn = %msisdn, "No subscriber fixture, using default");
        match self.repository.fetch(DEFAULT_FIXTURE).await? {
            Some(text) => FixtureDocument::from_json(DEFAULT_FIXTURE, &text),
            None => Err(MockError::FixtureNotFound(msisdn.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // In-memory fixtures for testing
    struct InMemoryFixtures {
        files: Arc<Mutex<HashMap<String, String>>>,
        fetches: Arc<AtomicUsize>,
    }

    impl InMemoryFixtures {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: Arc::new(Mutex::new(
                    files
                        .iter()
                        .map(|(name, text)| (name.to_string(), text.to_string()))
                        .collect(),
                )),
                fetches: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl FixtureRepository for InMemoryFixtures {
        fn fetch(
            &self,
            name: &str,
        ) -> impl std::future::Future<Output = Result<Option<String>>> + Send {
            let files = self.files.clone();
            let fetches = self.fetches.clone();
            let name = name.to_string();

            async move {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(files.lock().unwrap().get(&name).cloned())
            }
        }
    }

    struct FailingFixtures;

    impl FixtureRepository for FailingFixtures {
        fn fetch(
            &self,
            _name: &str,
        ) -> impl std::future::Future<Output = Result<Option<String>>> + Send {
            async { Err(MockError::storage_failure("disk on fire")) }
        }
    }

    fn request(query: &[(&str, &str)], header: Option<&str>) -> RequestParts {
        RequestParts::new(
            query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            header.map(str::to_string),
        )
    }

    #[tokio::test]
    async fn test_specific_fixture_is_served() {
        let fixtures = InMemoryFixtures::new(&[
            ("11959597475", r#"{"invoices":[],"__status":200}"#),
            ("default", r#"{"invoices":["default"]}"#),
        ]);
        let service = InvoiceService::new(fixtures);

        let response = service
            .list_invoices(&request(
                &[("msisdn", "11959597475"), ("page", "1"), ("limit", "50")],
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            serde_json::to_string(&response.body).unwrap(),
            r#"{"invoices":[],"request":{"msisdn":"11959597475","page":1,"limit":50}}"#
        );
    }

    #[tokio::test]
    async fn test_header_msisdn_falls_back_to_default() {
        let fixtures = InMemoryFixtures::new(&[("default", r#"{"invoices":["default"]}"#)]);
        let service = InvoiceService::new(fixtures);

        let response = service
            .list_invoices(&request(&[], Some("foo=bar&msisdn=5511999990000")))
            .await
            .unwrap();

        assert_eq!(response.body["invoices"], json!(["default"]));
        assert_eq!(response.body["request"]["msisdn"], json!("5511999990000"));
    }

    #[tokio::test]
    async fn test_missing_msisdn_is_invalid_request() {
        let fixtures = InMemoryFixtures::new(&[("default", "{}")]);
        let fetches = fixtures.fetches.clone();
        let service = InvoiceService::new(fixtures);

        let err = service
            .list_invoices(&request(&[("page", "1")], Some("foo=bar")))
            .await
            .unwrap_err();

        assert!(matches!(err, MockError::InvalidRequest));
        assert_eq!(fetches.load(Ordering::SeqCst), 0, "no fixture should be read");
    }

    #[tokio::test]
    async fn test_missing_default_is_fixture_not_found() {
        let service = InvoiceService::new(InMemoryFixtures::new(&[]));

        let err = service
            .list_invoices(&request(&[("msisdn", "123")], None))
            .await
            .unwrap_err();

        assert!(matches!(err, MockError::FixtureNotFound(_)));
        assert_eq!(err.code(), "MOCK_ERROR");
    }

    #[tokio::test]
    async fn test_broken_specific_fixture_does_not_fall_back() {
        let fixtures = InMemoryFixtures::new(&[("123", "{ broken"), ("default", "{}")]);
        let service = InvoiceService::new(fixtures);

        let err = service
            .resolve_fixture(&Msisdn::parse("123").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, MockError::FixtureParseError { .. }));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let service = InvoiceService::new(FailingFixtures);

        let err = service
            .list_invoices(&request(&[("msisdn", "123")], None))
            .await
            .unwrap_err();

        assert!(matches!(err, MockError::StorageFailure(_)));
    }

    #[tokio::test]
    async fn test_fixture_is_reread_on_every_request() {
        let fixtures = InMemoryFixtures::new(&[("123", r#"{"version":1}"#)]);
        let files = fixtures.files.clone();
        let service = InvoiceService::new(fixtures);
        let req = request(&[("msisdn", "123")], None);

        let first = service.list_invoices(&req).await.unwrap();
        files
            .lock()
            .unwrap()
            .insert("123".to_string(), r#"{"version":2}"#.to_string());
        let second = service.list_invoices(&req).await.unwrap();

        assert_eq!(first.body["version"], json!(1));
        assert_eq!(second.body["version"], json!(2));
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical_except_echo() {
        let fixtures = InMemoryFixtures::new(&[("123", r#"{"invoices":[{"id":"A"}]}"#)]);
        let service = InvoiceService::new(fixtures);

        let first = service
            .list_invoices(&request(&[("msisdn", "123"), ("page", "1")], None))
            .await
            .unwrap();
        let second = service
            .list_invoices(&request(&[("msisdn", "123"), ("page", "2")], None))
            .await
            .unwrap();

        assert_eq!(first.body["invoices"], second.body["invoices"]);
        assert_eq!(first.body["request"]["page"], json!(1));
        assert_eq!(second.body["request"]["page"], json!(2));
    }
}
