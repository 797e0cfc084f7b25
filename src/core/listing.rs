//! View models for the schedule and gallery listings.

use crate::core::{ClinicBackend, DoctorSchedule, GalleryImage};
use crate::utils::error::{ClinicError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// "14:30" -> "2:30 PM". Seconds are dropped; unparseable input is returned as is.
pub fn format_time(time: &str) -> String {
    let mut parts = time.split(':');
    let (Some(hours), Some(minutes)) = (parts.next(), parts.next()) else {
        return time.to_string();
    };
    let Ok(hour) = hours.trim().parse::<u32>() else {
        return time.to_string();
    };

    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{} {}", display_hour, minutes, suffix)
}

/// "2025-03-05" -> "Mar 5, 2025". Accepts RFC 3339 and naive datetimes too.
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return String::new();
    };

    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });

    match parsed {
        Some(day) => day.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleCard {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub time_range: String,
    pub when: String,
    pub contact_number: Option<String>,
    pub image_url: Option<String>,
    pub location: String,
}

impl ScheduleCard {
    pub fn from_schedule<B: ClinicBackend + ?Sized>(
        schedule: &DoctorSchedule,
        backend: &B,
        location: &str,
    ) -> Self {
        let when = match schedule.specific_date.as_deref() {
            Some(date) if !date.trim().is_empty() => format_date(Some(date)),
            _ => format!("Weekly on {}", schedule.day_of_week),
        };

        Self {
            id: schedule.id,
            name: schedule.name.clone(),
            specialization: schedule.specialization.clone(),
            time_range: format!(
                "{} - {}",
                format_time(&schedule.start_time),
                format_time(&schedule.end_time)
            ),
            when,
            contact_number: schedule.contact_number.clone(),
            image_url: schedule
                .image_filename
                .as_deref()
                .filter(|f| !f.is_empty())
                .map(|f| backend.doctor_image_url(f)),
            location: location.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    #[default]
    All,
    Facilities,
    Equipment,
    Team,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 4] = [
        GalleryCategory::All,
        GalleryCategory::Facilities,
        GalleryCategory::Equipment,
        GalleryCategory::Team,
    ];

    // The backend has no category field yet, so membership is a fixed id map.
    fn member_ids(self) -> Option<&'static [i64]> {
        match self {
            GalleryCategory::All => None,
            GalleryCategory::Facilities => Some(&[1, 4, 7]),
            GalleryCategory::Equipment => Some(&[2, 5, 8]),
            GalleryCategory::Team => Some(&[3, 6, 9]),
        }
    }

    pub fn contains(self, image: &GalleryImage) -> bool {
        self.member_ids()
            .map_or(true, |ids| ids.contains(&image.id))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GalleryCategory::All => "all",
            GalleryCategory::Facilities => "facilities",
            GalleryCategory::Equipment => "equipment",
            GalleryCategory::Team => "team",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryCategory {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        GalleryCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ClinicError::InvalidCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryCard {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: String,
    pub alt: String,
}

impl GalleryCard {
    pub fn from_image<B: ClinicBackend + ?Sized>(image: &GalleryImage, backend: &B) -> Self {
        Self {
            id: image.id,
            title: image.title.clone(),
            description: image.description.clone(),
            image_url: backend.gallery_image_url(&image.image_url),
            alt: image
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Gallery image {}", image.id)),
        }
    }
}

pub fn filter_gallery(images: &[GalleryImage], category: GalleryCategory) -> Vec<&GalleryImage> {
    images.iter().filter(|image| category.contains(image)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: i64) -> GalleryImage {
        GalleryImage {
            id,
            title: None,
            description: None,
            image_url: format!("/uploads/gallery/{}.jpg", id),
            order_index: id,
            is_active: true,
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("14:30"), "2:30 PM");
        assert_eq!(format_time("09:05:00"), "9:05 AM");
        assert_eq!(format_time("00:15"), "12:15 AM");
        assert_eq!(format_time("12:00"), "12:00 PM");
        assert_eq!(format_time("noon"), "noon");
        assert_eq!(format_time("ab:30"), "ab:30");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2025-03-05")), "Mar 5, 2025");
        assert_eq!(format_date(Some("2025-12-24T10:00:00Z")), "Dec 24, 2025");
        assert_eq!(format_date(Some("2025-01-31T08:30:00")), "Jan 31, 2025");
        assert_eq!(format_date(Some("")), "");
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some("next week")), "next week");
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Team".parse::<GalleryCategory>().unwrap(), GalleryCategory::Team);
        assert_eq!(" all ".parse::<GalleryCategory>().unwrap(), GalleryCategory::All);
        assert!(matches!(
            "rooms".parse::<GalleryCategory>(),
            Err(ClinicError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_filter_gallery() {
        let images: Vec<GalleryImage> = (1..=10).map(image).collect();

        assert_eq!(filter_gallery(&images, GalleryCategory::All).len(), 10);

        let equipment: Vec<i64> = filter_gallery(&images, GalleryCategory::Equipment)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(equipment, vec![2, 5, 8]);

        // id 10 belongs to no category
        assert!(GalleryCategory::ALL[1..]
            .iter()
            .all(|c| !c.contains(&image(10))));
    }
}
