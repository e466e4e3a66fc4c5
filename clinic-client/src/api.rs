use std::rc::Rc;

use async_trait::async_trait;
use clinic_common::{BookSlotRequest, Booking, BookingAck, Credentials, Identity, Slot};
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Notice shown to the user for any failed request that has no more specific wording
pub const GENERIC_FAILURE: &str = "Request failed. Please try again.";

/// Thin HTTP wrapper around the clinic backend. Requests go to `url` joined with the path and
/// carry `Authorization: Bearer` when the client holds a token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    url: &'static str,
    token: Option<String>,
}

impl ApiClient {
    pub const fn new(url: &'static str) -> Self {
        Self { url, token: None }
    }

    /// Copy of this client that authenticates with `token`
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            url: self.url,
            token: Some(token.to_owned()),
        }
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        log::debug!("GET {url}");
        self.send(Request::get(&url)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        log::debug!("POST {url}");
        let request = self.authorize(Request::post(&url)).json(body)?;
        let response = request.send().await?;
        parse_response(response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }

    fn auth_header_value(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    fn authorize(&self, req: Request) -> Request {
        match self.auth_header_value() {
            Some(value) => req.header("Authorization", &value),
            None => req,
        }
    }

    async fn send<T>(&self, req: Request) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.authorize(req).send().await?;
        parse_response(response).await
    }
}

/// Operations the pages perform against the backend, one per endpoint. Authenticated calls take
/// the session token of the current [Identity].
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ClinicApi {
    async fn login(&self, credentials: &Credentials) -> Result<Identity>;
    async fn register(&self, credentials: &Credentials) -> Result<Identity>;
    async fn slots(&self, token: &str) -> Result<Vec<Slot>>;
    async fn my_bookings(&self, token: &str) -> Result<Vec<Booking>>;
    async fn book(&self, token: &str, slot_id: &str) -> Result<()>;
    async fn all_bookings(&self, token: &str) -> Result<Vec<Booking>>;
}

/// Shared handle injected into every page
pub type SharedApi = Rc<dyn ClinicApi>;

/// [ClinicApi] backed by the real backend through an [ApiClient]
#[derive(Clone)]
pub struct HttpClinicApi {
    client: ApiClient,
}

impl HttpClinicApi {
    pub const fn new(url: &'static str) -> Self {
        Self {
            client: ApiClient::new(url),
        }
    }
}

#[async_trait(?Send)]
impl ClinicApi for HttpClinicApi {
    async fn login(&self, credentials: &Credentials) -> Result<Identity> {
        self.client.post("/login", credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<Identity> {
        self.client.post("/register", credentials).await
    }

    async fn slots(&self, token: &str) -> Result<Vec<Slot>> {
        self.client.with_token(token).get("/slots").await
    }

    async fn my_bookings(&self, token: &str) -> Result<Vec<Booking>> {
        self.client.with_token(token).get("/my-bookings").await
    }

    async fn book(&self, token: &str, slot_id: &str) -> Result<()> {
        let request = BookSlotRequest {
            slot_id: slot_id.to_owned(),
        };
        self.client
            .with_token(token)
            .post::<_, BookingAck>("/book", &request)
            .await?;
        Ok(())
    }

    async fn all_bookings(&self, token: &str) -> Result<Vec<Booking>> {
        self.client.with_token(token).get("/bookings").await
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("API error {code}\n{message}")]
    Status { code: u16, message: String },
}

async fn parse_response<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json::<T>().await?)
    } else {
        Err(Error::Status {
            code: response.status(),
            message: response.text().await?,
        })
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::ApiClient;

    #[rstest]
    #[case::leading_slash("/slots", "http://clinic.test/api/slots")]
    #[case::bare("my-bookings", "http://clinic.test/api/my-bookings")]
    fn endpoint_should_join_base_url(#[case] path: &str, #[case] expected: &str) {
        let client = ApiClient::new("http://clinic.test/api");

        assert_eq!(client.endpoint(path), expected);
    }

    #[test]
    fn auth_header_should_only_exist_with_token() {
        let client = ApiClient::new("http://clinic.test/api");
        let authorized = client.with_token("abc");

        assert_eq!(client.auth_header_value(), None);
        assert_eq!(authorized.auth_header_value().as_deref(), Some("Bearer abc"));
    }
}
