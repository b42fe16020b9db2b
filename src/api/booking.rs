//! # Booking API
//!
//! Accepts booking submissions. Nothing is persisted: a valid payload is
//! logged with a correlation id and discarded, the response is a fixed
//! acknowledgement. This simulates success so the frontend flow can be built
//! before a real booking backend exists.

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::{AppError, AppResult};

/// Transient booking request payload
///
/// Every field is optional at the wire level so that presence validation can
/// produce the canonical 400 instead of a deserialization failure. The
/// payload lives for the duration of one request only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub property_id: Option<i32>,
    /// Check-in date, `YYYY-MM-DD`
    pub check_in: Option<String>,
    /// Check-out date, `YYYY-MM-DD`
    pub check_out: Option<String>,
    pub guests: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl BookingSubmission {
    /// Presence check over the seven required fields
    ///
    /// Follows the upstream falsy rule: a missing field, an empty string and
    /// a zero number all count as absent.
    pub fn has_required_fields(&self) -> bool {
        present_number(self.property_id)
            && present_text(&self.check_in)
            && present_text(&self.check_out)
            && present_number(self.guests)
            && present_text(&self.first_name)
            && present_text(&self.last_name)
            && present_text(&self.email)
    }
}

fn present_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn present_number(value: Option<i32>) -> bool {
    value.is_some_and(|v| v != 0)
}

/// Submits a booking
///
/// # Validations
/// - propertyId, checkIn, checkOut, guests, firstName, lastName and email
///   must all be present and non-falsy
///
/// # Response
/// ```json
/// { "message": "Booking submitted successfully" }
/// ```
/// with status `201 Created`. The payload is logged and discarded, nothing
/// is echoed back.
///
/// # Errors
/// - `400 Bad Request`: `{"error": "Missing required booking fields"}`
/// - `405 Method Not Allowed`: non-POST request
pub async fn submit_booking(data: web::Json<BookingSubmission>) -> AppResult<impl Responder> {
    if !data.has_required_fields() {
        return Err(AppError::missing_booking_fields());
    }

    // No persistence: the acknowledgement below is all the caller gets
    tracing::info!(
        booking_ref = %Uuid::new_v4(),
        payload = ?data.into_inner(),
        "Booking received"
    );

    Ok(HttpResponse::Created().json(json!({
        "message": "Booking submitted successfully"
    })))
}

/// Configures the booking routes
///
/// # Routes
/// - `POST /api/bookings` - submit a booking
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/bookings")
            .route(web::post().to(submit_booking))
            .default_service(web::to(super::post_only_fallback)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_submission() -> BookingSubmission {
        BookingSubmission {
            property_id: Some(1),
            check_in: Some("2024-08-24".to_string()),
            check_out: Some("2024-08-27".to_string()),
            guests: Some(2),
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
            email: Some("a@b.com".to_string()),
            phone: None,
            special_requests: None,
        }
    }

    #[test]
    fn complete_payload_passes_presence_check() {
        assert!(complete_submission().has_required_fields());
    }

    #[test]
    fn each_missing_required_field_fails_presence_check() {
        let variants: Vec<BookingSubmission> = vec![
            BookingSubmission { property_id: None, ..complete_submission() },
            BookingSubmission { check_in: None, ..complete_submission() },
            BookingSubmission { check_out: None, ..complete_submission() },
            BookingSubmission { guests: None, ..complete_submission() },
            BookingSubmission { first_name: None, ..complete_submission() },
            BookingSubmission { last_name: None, ..complete_submission() },
            BookingSubmission { email: None, ..complete_submission() },
        ];

        for submission in variants {
            assert!(!submission.has_required_fields(), "{:?}", submission);
        }
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let zero_guests = BookingSubmission {
            guests: Some(0),
            ..complete_submission()
        };
        assert!(!zero_guests.has_required_fields());

        let empty_email = BookingSubmission {
            email: Some(String::new()),
            ..complete_submission()
        };
        assert!(!empty_email.has_required_fields());

        let zero_property = BookingSubmission {
            property_id: Some(0),
            ..complete_submission()
        };
        assert!(!zero_property.has_required_fields());
    }

    #[test]
    fn optional_fields_do_not_affect_the_check() {
        let with_extras = BookingSubmission {
            phone: Some("+34 123 456 789".to_string()),
            special_requests: Some("Late arrival".to_string()),
            ..complete_submission()
        };
        assert!(with_extras.has_required_fields());
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let submission: BookingSubmission = serde_json::from_str(
            r#"{"propertyId":1,"checkIn":"2024-08-24","checkOut":"2024-08-27",
                "guests":2,"firstName":"A","lastName":"B","email":"a@b.com"}"#,
        )
        .unwrap();
        assert!(submission.has_required_fields());
        assert_eq!(submission.property_id, Some(1));
    }
}
