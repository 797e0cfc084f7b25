use serde::{Deserialize, Serialize};

/// A doctor's slot as published by the clinic backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorSchedule {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
    #[serde(default)]
    pub specific_date: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub image_filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub patient_name: String,
    pub feedback_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub days: String,
    pub hours: String,
}

/// Contact details shown alongside listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicInfo {
    pub name: String,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub operating_hours: Vec<OperatingHours>,
}

impl Default for ClinicInfo {
    fn default() -> Self {
        Self {
            name: "JD Medicose".to_string(),
            location: "JD Medicose, Nokha".to_string(),
            address: "Opposite to UCO Bank, Bikaner Road, Nokha Bikaner (Raj.) 334803".to_string(),
            phone: "9461499372".to_string(),
            email: "contact@jdmedicose.com".to_string(),
            operating_hours: vec![
                OperatingHours {
                    days: "Monday - Saturday".to_string(),
                    hours: "9:00 AM - 9:00 PM".to_string(),
                },
                OperatingHours {
                    days: "Sunday".to_string(),
                    hours: "9:00 AM - 8:00 PM".to_string(),
                },
            ],
        }
    }
}

fn default_true() -> bool {
    true
}
