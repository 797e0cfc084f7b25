use crate::core::{ClinicBackend, ConfigProvider, DoctorSchedule, Feedback, GalleryImage};
use crate::utils::error::{ClinicError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// `ClinicBackend` over the clinic's REST service.
#[derive(Debug, Clone)]
pub struct HttpClinicBackend {
    client: Client,
    base_url: String,
    feedback_endpoint: String,
    timeout: Duration,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl HttpClinicBackend {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            feedback_endpoint: config.feedback_endpoint(),
            timeout: config.request_timeout(),
            retry_attempts: config.retry_attempts(),
            retry_delay: config.retry_delay(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);
        let mut attempt = 0;

        loop {
            match self.get_once(resource, &url).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.retry_attempts => {
                    attempt += 1;
                    tracing::warn!(
                        "GET {} failed ({}), retry {}/{} in {:?}",
                        url,
                        e,
                        attempt,
                        self.retry_attempts,
                        self.retry_delay
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, resource: &str, url: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).timeout(self.timeout).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ClinicError::UpstreamStatus {
                resource: resource.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ClinicBackend for HttpClinicBackend {
    async fn fetch_schedules(&self) -> Result<Vec<DoctorSchedule>> {
        let schedules: Vec<DoctorSchedule> = self.get_json("schedules").await?;
        let total = schedules.len();

        let available: Vec<DoctorSchedule> =
            schedules.into_iter().filter(|s| s.is_available).collect();
        tracing::debug!("{} of {} schedules available", available.len(), total);

        Ok(available)
    }

    async fn fetch_gallery(&self) -> Result<Vec<GalleryImage>> {
        let images: Vec<GalleryImage> = self.get_json("gallery").await?;
        tracing::debug!("Fetched {} gallery images", images.len());
        Ok(images)
    }

    async fn submit_feedback(&self, feedback: &Feedback) -> Result<()> {
        tracing::debug!("Posting feedback to: {}", self.feedback_endpoint);

        // Not retried: a timed-out POST may still have been stored.
        let response = self
            .client
            .post(&self.feedback_endpoint)
            .timeout(self.timeout)
            .json(feedback)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClinicError::UpstreamStatus {
                resource: "feedback".to_string(),
                status: response.status().as_u16(),
            });
        }

        tracing::debug!("Feedback submitted");
        Ok(())
    }

    fn doctor_image_url(&self, filename: &str) -> String {
        format!("{}/uploads/doctors/{}", self.base_url, filename)
    }

    fn gallery_image_url(&self, image_url: &str) -> String {
        format!("{}{}", self.base_url, image_url)
    }
}
