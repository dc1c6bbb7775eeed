//! Interactive employee form
//!
//! Collects the five fields, normalizes them (trim + uppercase) and runs the
//! local validation before anything touches the network. A failed validation
//! never builds a request, so no call is made.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::client::PredictionRequest;

pub const ETHNICITY_OPTIONS: &[&str] = &["WHITE", "BLACK", "HISPANIC", "OTHER"];
pub const GENDER_OPTIONS: &[&str] = &["MALE", "FEMALE"];
pub const STATUS_OPTIONS: &[&str] = &["FULL-TIME", "PART-TIME"];

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{0} is required. Please complete the form.")]
    Empty(&'static str),
}

/// Raw answers exactly as the user typed them.
#[derive(Debug, Clone)]
pub struct FormAnswers {
    pub agency_name: String,
    pub class_title: String,
    pub ethnicity: String,
    pub gender: String,
    pub status: String,
}

impl FormAnswers {
    /// Normalize every answer and build the wire request.
    ///
    /// Normalization is uppercasing, so feeding back an already-built request
    /// changes nothing. Category values beyond the offered options are sent
    /// as-is; the service is the authority on what it accepts.
    pub fn into_request(self) -> Result<PredictionRequest, FormError> {
        let agency_name = normalize(&self.agency_name);
        let class_title = normalize(&self.class_title);
        let ethnicity = normalize(&self.ethnicity);
        let gender = normalize(&self.gender);
        let status = normalize(&self.status);

        let required: [(&'static str, &str); 5] = [
            ("AGENCY NAME", &agency_name),
            ("JOB CLASSIFICATION", &class_title),
            ("ETHNICITY", &ethnicity),
            ("GENDER", &gender),
            ("EMPLOYMENT STATUS", &status),
        ];
        for (label, value) in required {
            if value.is_empty() {
                return Err(FormError::Empty(label));
            }
        }

        Ok(PredictionRequest {
            agency_name,
            class_title,
            ethnicity,
            gender,
            status,
        })
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Map a choice answer to an option: a number picks from the list, anything
/// else passes through as free text.
pub fn resolve_choice(input: &str, options: &[&str]) -> String {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return options[n - 1].to_string();
        }
    }
    trimmed.to_string()
}

/// Run the full interactive form on stdin/stdout.
pub fn prompt() -> io::Result<FormAnswers> {
    println!("Employee information");
    println!("--------------------");
    Ok(FormAnswers {
        agency_name: prompt_text("Agency name")?,
        class_title: prompt_text("Job classification")?,
        ethnicity: prompt_choice("Ethnicity", ETHNICITY_OPTIONS)?,
        gender: prompt_choice("Gender", GENDER_OPTIONS)?,
        status: prompt_choice("Employment status", STATUS_OPTIONS)?,
    })
}

/// Yes/no prompt, defaulting to no.
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;
    let answer = read_line()?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn prompt_text(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    read_line()
}

fn prompt_choice(label: &str, options: &[&str]) -> io::Result<String> {
    println!("{label}:");
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    print!("Select [1-{}] or type a value: ", options.len());
    io::stdout().flush()?;
    Ok(resolve_choice(&read_line()?, options))
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> FormAnswers {
        FormAnswers {
            agency_name: "  texas department of criminal justice ".to_string(),
            class_title: "correc officer iv".to_string(),
            ethnicity: "Hispanic".to_string(),
            gender: "female".to_string(),
            status: "full-time".to_string(),
        }
    }

    #[test]
    fn request_fields_are_uppercased() {
        let request = answers().into_request().unwrap();
        assert_eq!(request.agency_name, "TEXAS DEPARTMENT OF CRIMINAL JUSTICE");
        assert_eq!(request.class_title, "CORREC OFFICER IV");
        assert_eq!(request.ethnicity, "HISPANIC");
        assert_eq!(request.gender, "FEMALE");
        assert_eq!(request.status, "FULL-TIME");
    }

    #[test]
    fn normalization_is_idempotent() {
        let request = answers().into_request().unwrap();
        let again = FormAnswers {
            agency_name: request.agency_name.clone(),
            class_title: request.class_title.clone(),
            ethnicity: request.ethnicity.clone(),
            gender: request.gender.clone(),
            status: request.status.clone(),
        }
        .into_request()
        .unwrap();
        assert_eq!(again.agency_name, request.agency_name);
        assert_eq!(again.status, request.status);
    }

    #[test]
    fn empty_required_field_never_builds_a_request() {
        let mut incomplete = answers();
        incomplete.class_title = "   ".to_string();
        let err = incomplete.into_request().unwrap_err();
        assert!(matches!(err, FormError::Empty("JOB CLASSIFICATION")));
    }

    #[test]
    fn choice_by_number_maps_to_option() {
        assert_eq!(resolve_choice("3", ETHNICITY_OPTIONS), "HISPANIC");
        assert_eq!(resolve_choice(" 1 ", GENDER_OPTIONS), "MALE");
    }

    #[test]
    fn choice_out_of_range_or_text_passes_through() {
        assert_eq!(resolve_choice("9", GENDER_OPTIONS), "9");
        assert_eq!(resolve_choice("part-time", STATUS_OPTIONS), "part-time");
    }
}
