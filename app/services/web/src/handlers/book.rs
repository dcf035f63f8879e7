use app_dto::booking::PostBookingInput;
use app_dto::validate::is_valid_email;
use app_error::AppError;
use app_rollup::booking_total;
use app_schema::bookings::{Booking, BookingStatus, PaymentStatus};
use app_schema::tours::Tour;
use app_state::AppState;
use askama::Template;
use axum::{
    extract::{Form, Query, State},
    response::Html,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tracing::*;

#[derive(Template)]
#[template(path = "book.html")]
struct BookPage {
    tours: Vec<Tour>,
    selected: String,
    notice: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookQuery {
    pub tour: Option<String>,
}

async fn active_tours(state: &AppState) -> Result<Vec<Tour>, AppError> {
    let tours = sqlx::query_as::<_, Tour>(Tour::select_active_query())
        .fetch_all(&state.pg)
        .await?;
    Ok(tours)
}

pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookQuery>,
) -> Result<Html<String>, AppError> {
    let page = BookPage {
        tours: active_tours(&state).await?,
        selected: query.tour.unwrap_or_default(),
        notice: None,
        error: None,
    };
    Ok(Html(page.render()?))
}

pub async fn post_book(
    State(state): State<Arc<AppState>>,
    Form(args): Form<PostBookingInput>,
) -> Result<Html<String>, AppError> {
    let selected = args.tour.clone();
    match create_booking(&state, &args).await {
        Ok(()) => {
            let page = BookPage {
                tours: active_tours(&state).await?,
                selected,
                notice: Some(
                    "Booking request received! We will contact you shortly.".to_owned(),
                ),
                error: None,
            };
            Ok(Html(page.render()?))
        }
        Err(BookingRejected(reason)) => {
            let page = BookPage {
                tours: active_tours(&state).await?,
                selected,
                notice: None,
                error: Some(reason),
            };
            Ok(Html(page.render()?))
        }
    }
}

/// Rejection rendered back on the form. Database failures fold into the
/// generic retry message; validation failures carry their own text.
struct BookingRejected(String);

impl From<AppError> for BookingRejected {
    fn from(value: AppError) -> Self {
        warn!("Booking failed: {}", value);
        BookingRejected("Failed to save booking. Please try again.".to_owned())
    }
}

async fn create_booking(state: &AppState, args: &PostBookingInput) -> Result<(), BookingRejected> {
    let reject = |message: &str| Err(BookingRejected(message.to_owned()));

    if args.name.trim().is_empty() || args.email.trim().is_empty() {
        return reject("Missing required fields");
    }
    if !is_valid_email(args.email.trim()) {
        return reject("Please enter a valid email address");
    }
    let Ok(tour_date) = args.date.parse::<NaiveDate>() else {
        return reject("Please select a valid date");
    };
    let Ok(guests) = args.guests.parse::<i32>() else {
        return reject("Please enter a valid guest count");
    };
    if guests < 1 {
        return reject("Please enter a valid guest count");
    }

    // The tour must resolve; a booking is never stored without its tour.
    let tour = sqlx::query_as::<_, Tour>(&format!(
        "{} WHERE slug = $1 AND is_active = TRUE",
        Tour::select_base()
    ))
    .bind(&args.tour)
    .fetch_optional(&state.pg)
    .await
    .map_err(AppError::from)?;
    let Some(tour) = tour else {
        return reject("Tour not found");
    };
    if guests > tour.max_guests {
        return reject("Too many guests for this tour. For larger groups, please contact us.");
    }

    let total_price_dkk = booking_total(tour.price_dkk, guests);

    sqlx::query(Booking::insert_query())
        .bind(tour.id)
        .bind(args.name.trim())
        .bind(args.email.trim())
        .bind(args.phone.as_deref().filter(|p| !p.trim().is_empty()))
        .bind(tour_date)
        .bind(guests)
        .bind(total_price_dkk)
        .bind(args.comments.as_deref().filter(|c| !c.trim().is_empty()))
        .bind(BookingStatus::Pending.as_str())
        .bind(PaymentStatus::Unpaid.as_str())
        .execute(&state.pg)
        .await
        .map_err(AppError::from)?;

    info!(
        "Booking stored: {} x{} guests on {}",
        tour.slug, guests, tour_date
    );
    Ok(())
}
