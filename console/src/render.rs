//! Result rendering
//!
//! Formats the annual estimate, its derived breakdowns, and the per-branch
//! error messages. Everything returns a `String` so the exact output stays
//! testable; only `main` prints.

use chrono::Local;

use crate::client::{ClientError, PredictionRequest};

/// Derived display values for an annual figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    pub monthly: f64,
    pub weekly: f64,
    pub hourly: f64,
}

/// Annual / 12, / 52, / 2080 (52 weeks of 40 hours).
pub fn breakdown(annual: f64) -> Breakdown {
    Breakdown {
        monthly: annual / 12.0,
        weekly: annual / 52.0,
        hourly: annual / 2080.0,
    }
}

/// `1234567.891` -> `$1,234,567.89`
pub fn format_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{frac}")
}

/// The success view: estimate, breakdown, and the submitted record.
pub fn render_success(request: &PredictionRequest, annual: f64) -> String {
    let parts = breakdown(annual);
    let date = Local::now().format("%B %d, %Y");

    format!(
        "\nPrediction successful\n\
         Estimated annual compensation: {}\n\
         \n\
         Monthly: {}   Weekly: {}   Hourly: {}\n\
         \n\
         Agency:     {}\n\
         Job title:  {}\n\
         Ethnicity:  {}\n\
         Gender:     {}\n\
         Status:     {}\n\
         Date:       {}\n",
        format_usd(annual),
        format_usd(parts.monthly),
        format_usd(parts.weekly),
        format_usd(parts.hourly),
        request.agency_name,
        request.class_title,
        request.ethnicity,
        request.gender,
        request.status,
        date,
    )
}

/// One distinct message per failure branch, each with a remediation hint.
/// None of these are retried; the user resubmits the form.
pub fn render_error(error: &ClientError, base_url: &str) -> String {
    match error {
        ClientError::Timeout => format!(
            "Connection timeout: the scoring service did not respond within 15 seconds.\n\
             Hint: check that salary-api is running and not overloaded at {base_url}."
        ),
        ClientError::Connection => format!(
            "Connection failed: cannot reach the scoring service at {base_url}.\n\
             Hint: start it with `cargo run -p salary-api`, then verify {base_url}/health."
        ),
        ClientError::ModelUnavailable => format!(
            "The scoring service is running but its model is not loaded.\n\
             Hint: check MODEL_PATH on the service at {base_url} and restart it."
        ),
        ClientError::Api { status, body } => {
            format!("Scoring service error ({status}): {body}")
        }
        ClientError::MissingEstimate => {
            "The service answered, but no salary value was found in the response.\n\
             Hint: the service and console versions may be out of sync."
                .to_string()
        }
        ClientError::Transport(message) => format!("Unexpected error: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PredictionRequest {
        PredictionRequest {
            agency_name: "TEXAS DEPARTMENT OF CRIMINAL JUSTICE".to_string(),
            class_title: "CORREC OFFICER IV".to_string(),
            ethnicity: "HISPANIC".to_string(),
            gender: "FEMALE".to_string(),
            status: "FULL-TIME".to_string(),
        }
    }

    #[test]
    fn breakdown_of_50k_rounds_to_known_values() {
        let parts = breakdown(50000.0);
        assert_eq!(format_usd(parts.monthly), "$4,166.67");
        assert_eq!(format_usd(parts.weekly), "$961.54");
        assert_eq!(format_usd(parts.hourly), "$24.04");
    }

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(50000.0), "$50,000.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(999.5), "$999.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-1200.0), "-$1,200.00");
    }

    #[test]
    fn success_view_shows_estimate_and_record() {
        let view = render_success(&request(), 50000.0);
        assert!(view.contains("$50,000.00"));
        assert!(view.contains("Monthly: $4,166.67"));
        assert!(view.contains("CORREC OFFICER IV"));
    }

    #[test]
    fn timeout_and_connection_messages_are_distinct() {
        let timeout = render_error(&ClientError::Timeout, "http://127.0.0.1:8000");
        let connection = render_error(&ClientError::Connection, "http://127.0.0.1:8000");
        assert_ne!(timeout, connection);
        assert!(timeout.contains("timeout"));
        assert!(connection.contains("cannot reach"));
    }

    #[test]
    fn model_unavailable_is_not_a_generic_error() {
        let view = render_error(&ClientError::ModelUnavailable, "http://127.0.0.1:8000");
        assert!(view.contains("model is not loaded"));
        assert!(!view.contains("Scoring service error"));
    }

    #[test]
    fn api_errors_surface_the_body_verbatim() {
        let error = ClientError::Api {
            status: 500,
            body: r#"{"error":"Prediction error"}"#.to_string(),
        };
        let view = render_error(&error, "http://127.0.0.1:8000");
        assert!(view.contains("(500)"));
        assert!(view.contains(r#"{"error":"Prediction error"}"#));
    }
}
