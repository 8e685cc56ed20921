use super::print_outcome;
use crate::actions::submit_feedback;
use crate::error::Result;
use crate::validation::FeedbackForm;

pub struct FeedbackOptions {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub message: String,
}

/// Validate and acknowledge user feedback. No network access is needed.
pub fn cmd_feedback(options: FeedbackOptions, output_json: bool) -> Result<()> {
    let mut form = FeedbackForm {
        name: options.name,
        email: options.email,
        rating: options.rating,
        message: options.message,
    };
    let outcome = submit_feedback(&mut form)?;
    print_outcome("feedback", &outcome, output_json)
}
