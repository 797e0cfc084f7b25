use crate::domain::model::{ClinicInfo, DoctorSchedule, Feedback, GalleryImage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn feedback_endpoint(&self) -> String;
    fn bind_address(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn retry_attempts(&self) -> u32;
    fn retry_delay(&self) -> Duration;
    fn clinic_info(&self) -> ClinicInfo;
}

/// The remote service that owns schedules, gallery images and feedback.
#[async_trait]
pub trait ClinicBackend: Send + Sync {
    /// Schedules currently open for booking.
    async fn fetch_schedules(&self) -> Result<Vec<DoctorSchedule>>;
    async fn fetch_gallery(&self) -> Result<Vec<GalleryImage>>;
    async fn submit_feedback(&self, feedback: &Feedback) -> Result<()>;

    /// Public URL of a doctor's photo.
    fn doctor_image_url(&self, filename: &str) -> String;
    /// Public URL of a gallery image given its backend-relative path.
    fn gallery_image_url(&self, image_url: &str) -> String;
}
