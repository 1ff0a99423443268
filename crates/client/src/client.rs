//! One-to-one wrappers over the WhatsApp gateway endpoints
//!
//! Each method builds one HTTP request, sends it, and returns the decoded
//! JSON body untouched. Phone numbers and group names are interpolated into
//! the path verbatim; the gateway owns identifier validation.

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::errors::ApiError;
use crate::http::HttpClient;

/// Client for the WhatsApp messaging gateway.
///
/// Every endpoint maps to exactly one method; responses come back as raw
/// [`serde_json::Value`] because the gateway defines the shape. One request
/// per call, no retries.
pub struct WhatsAppClient {
    config: ClientConfig,
    http_client: HttpClient,
}

impl WhatsAppClient {
    /// Create a new client from a configuration.
    ///
    /// The access token and JSON content headers are installed as default
    /// headers, so every request carries them.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the base URL is malformed, the access
    /// token is not a valid header value, or the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        url::Url::parse(&config.base_url)
            .map_err(|_| ApiError::Config(format!("invalid base URL: {}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|_| {
                ApiError::Config("access token is not a valid header value".to_string())
            })?;
        headers.insert(header::AUTHORIZATION, bearer);
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder =
            HttpClient::builder().timeout(config.timeout).default_headers(headers);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http_client = builder.build()?;

        Ok(Self { config, http_client })
    }

    /// Send a text message to a phone number.
    ///
    /// # Arguments
    /// * `phone` - Destination phone number
    /// * `message` - Text message to send
    ///
    /// # Returns
    /// The gateway's JSON response, unmodified.
    pub async fn send_message(&self, phone: &str, message: &str) -> Result<Value, ApiError> {
        let payload = TextPayload { message: message.to_string() };
        self.post(&format!("/chat/{}/message", phone), &payload).await
    }

    /// Send an image to a phone number.
    ///
    /// `image` is a base64 string or a URL. The caption is included in the
    /// request body only when provided.
    pub async fn send_image(
        &self,
        phone: &str,
        image: &str,
        caption: Option<&str>,
    ) -> Result<Value, ApiError> {
        let payload = ImagePayload {
            image: image.to_string(),
            caption: caption.map(ToString::to_string),
        };
        self.post(&format!("/chat/{}/image", phone), &payload).await
    }

    /// Send a PDF document to a phone number.
    ///
    /// `pdf` is a base64 string or a URL; `caption` doubles as the file
    /// name when provided.
    pub async fn send_pdf(
        &self,
        phone: &str,
        pdf: &str,
        caption: Option<&str>,
    ) -> Result<Value, ApiError> {
        let payload =
            PdfPayload { pdf: pdf.to_string(), caption: caption.map(ToString::to_string) };
        self.post(&format!("/chat/{}/pdf", phone), &payload).await
    }

    /// Send a location to a phone number.
    pub async fn send_location(
        &self,
        phone: &str,
        latitude: f64,
        longitude: f64,
        description: Option<&str>,
    ) -> Result<Value, ApiError> {
        let payload = LocationPayload {
            latitude,
            longitude,
            description: description.map(ToString::to_string),
        };
        self.post(&format!("/chat/{}/location", phone), &payload).await
    }

    /// Get chat information for a phone number.
    pub async fn get_chat_info(&self, phone: &str) -> Result<Value, ApiError> {
        self.get(&format!("/chat/{}", phone)).await
    }

    /// List all chats.
    pub async fn get_all_chats(&self) -> Result<Value, ApiError> {
        self.get("/chat").await
    }

    /// List all contacts.
    pub async fn get_all_contacts(&self) -> Result<Value, ApiError> {
        self.get("/contact/getcontacts").await
    }

    /// Get contact information for a phone number.
    pub async fn get_contact_info(&self, phone: &str) -> Result<Value, ApiError> {
        self.get(&format!("/contact/getcontact/{}", phone)).await
    }

    /// Get the profile picture for a phone number.
    pub async fn get_profile_picture(&self, phone: &str) -> Result<Value, ApiError> {
        self.get(&format!("/contact/getprofilepic/{}", phone)).await
    }

    /// Check whether a phone number is registered on the service.
    pub async fn is_registered_user(&self, phone: &str) -> Result<Value, ApiError> {
        self.get(&format!("/contact/isregistereduser/{}", phone)).await
    }

    /// Send a text message to a group.
    ///
    /// # Arguments
    /// * `chatname` - Group chat name
    /// * `message` - Text message to send
    pub async fn send_group_message(
        &self,
        chatname: &str,
        message: &str,
    ) -> Result<Value, ApiError> {
        let payload = TextPayload { message: message.to_string() };
        self.post(&format!("/group/sendmessage/{}", chatname), &payload).await
    }

    /// Send an image to a group.
    pub async fn send_group_image(
        &self,
        chatname: &str,
        image: &str,
        caption: Option<&str>,
    ) -> Result<Value, ApiError> {
        let payload = ImagePayload {
            image: image.to_string(),
            caption: caption.map(ToString::to_string),
        };
        self.post(&format!("/group/sendimage/{}", chatname), &payload).await
    }

    /// Send a PDF document to a group.
    pub async fn send_group_pdf(
        &self,
        chatname: &str,
        pdf: &str,
        caption: Option<&str>,
    ) -> Result<Value, ApiError> {
        let payload =
            PdfPayload { pdf: pdf.to_string(), caption: caption.map(ToString::to_string) };
        self.post(&format!("/group/sendpdf/{}", chatname), &payload).await
    }

    /// Send a location to a group.
    pub async fn send_group_location(
        &self,
        chatname: &str,
        latitude: f64,
        longitude: f64,
        description: Option<&str>,
    ) -> Result<Value, ApiError> {
        let payload = LocationPayload {
            latitude,
            longitude,
            description: description.map(ToString::to_string),
        };
        self.post(&format!("/group/sendlocation/{}", chatname), &payload).await
    }

    /// Execute a GET request against an endpoint path.
    #[instrument(skip(self), fields(path = %path))]
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        let request = self.http_client.request(Method::GET, &url);
        self.execute(url, request).await
    }

    /// Execute a POST request with a JSON body against an endpoint path.
    #[instrument(skip(self, body), fields(path = %path))]
    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        let request = self.http_client.request(Method::POST, &url).json(body);
        self.execute(url, request).await
    }

    async fn execute(&self, url: String, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = self.http_client.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status: status.as_u16(), url, body });
        }

        let value: Value =
            response.json().await.map_err(|err| ApiError::Decode(err.to_string()))?;

        debug!(%url, "request successful");
        Ok(value)
    }
}

// =============================================================================
// Request Payloads
// =============================================================================

#[derive(Debug, Serialize)]
struct TextPayload {
    message: String,
}

#[derive(Debug, Serialize)]
struct ImagePayload {
    image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
}

#[derive(Debug, Serialize)]
struct PdfPayload {
    pdf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
}

#[derive(Debug, Serialize)]
struct LocationPayload {
    latitude: f64,
    longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}
