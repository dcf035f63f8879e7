use app_dto::contact::PostContactInput;
use app_dto::validate::is_valid_email;
use app_error::AppError;
use app_schema::messages::ContactMessage;
use app_state::AppState;
use askama::Template;
use axum::{
    extract::{Form, State},
    response::Html,
};
use std::sync::Arc;
use tracing::*;

const DEFAULT_SUBJECT: &str = "General Inquiry";

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactPage {
    notice: Option<String>,
    error: Option<String>,
}

pub async fn get_contact() -> Result<Html<String>, AppError> {
    let page = ContactPage {
        notice: None,
        error: None,
    };
    Ok(Html(page.render()?))
}

pub async fn post_contact(
    State(state): State<Arc<AppState>>,
    Form(args): Form<PostContactInput>,
) -> Result<Html<String>, AppError> {
    if args.name.trim().is_empty() || args.email.trim().is_empty() || args.message.trim().is_empty()
    {
        let page = ContactPage {
            notice: None,
            error: Some("Please fill in all required fields".to_owned()),
        };
        return Ok(Html(page.render()?));
    }
    if !is_valid_email(args.email.trim()) {
        let page = ContactPage {
            notice: None,
            error: Some("Please enter a valid email address".to_owned()),
        };
        return Ok(Html(page.render()?));
    }

    let subject = args
        .subject
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SUBJECT);

    sqlx::query(ContactMessage::insert_query())
        .bind(args.name.trim())
        .bind(args.email.trim())
        .bind(subject)
        .bind(args.message.trim())
        .execute(&state.pg)
        .await?;
    debug!("Contact message stored from {}", args.email.trim());

    let page = ContactPage {
        notice: Some("Thank you for your message! We will get back to you soon.".to_owned()),
        error: None,
    };
    Ok(Html(page.render()?))
}
