pub mod clinic_client;
pub mod listing;
pub mod symptoms;

pub use crate::domain::model::{ClinicInfo, DoctorSchedule, Feedback, GalleryImage, OperatingHours};
pub use crate::domain::ports::{ClinicBackend, ConfigProvider};
pub use crate::utils::error::Result;
