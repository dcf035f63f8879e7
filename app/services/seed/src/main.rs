//! One-shot setup: applies the DDL, upserts the production tours, makes sure
//! the settings row exists, and creates the initial admin account.

use app_config::AppConfig;
use app_cryptography::hash::hash;
use app_log::init_tracing;
use app_schema::{auth::users::User, settings::Settings, tours::Tour};
use app_state::AppState;
use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

const DDL: &str = include_str!("../../../SQL/schema.sql");

struct TourSeed {
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    price_dkk: i64,
    max_guests: i32,
    image_url: Option<&'static str>,
}

const TOURS: [TourSeed; 4] = [
    TourSeed {
        slug: "hot-tub",
        title: "Floating hot tub among icebergs",
        description: "An exclusive once in a lifetime experience for adventurers! Relax in a warm hot tub while drifting through the freezing Arctic waters surrounding majestic icebergs.",
        duration: "3 hours",
        price_dkk: 1495,
        max_guests: 7,
        image_url: Some("/assets/hottub_1.png"),
    },
    TourSeed {
        slug: "icefjord-safari",
        title: "Ilulissat Icefjord Safari",
        description: "Navigate through the massive icebergs of the UNESCO World Heritage site. Witness the sheer scale of nature as you cruise past ice giants.",
        duration: "2.5 hours",
        price_dkk: 895,
        max_guests: 7,
        image_url: Some("https://images.unsplash.com/photo-1489392191049-fc10c97e64b6?w=800&q=80"),
    },
    TourSeed {
        slug: "whale-watching",
        title: "Whale Watching Adventure",
        description: "Get up close with the gentle giants of the sea. Spot Humpback, Fin, and Minke whales feeding in the nutrient-rich waters of Disko Bay.",
        duration: "3 hours",
        price_dkk: 995,
        max_guests: 7,
        image_url: Some("https://images.unsplash.com/photo-1511174511562-5f7f18b874f8?w=800&q=80"),
    },
    TourSeed {
        slug: "midnight-sun",
        title: "Midnight Sun Cruise",
        description: "Experience the endless golden hour. Watch the icebergs glow in different shades of orange and pink as the sun refuses to set.",
        duration: "2.5 hours",
        price_dkk: 795,
        max_guests: 7,
        image_url: Some("https://images.unsplash.com/photo-1568430462989-44163eb1752f?w=800&q=80"),
    },
];

#[tokio::main]
async fn main() {
    dotenv().ok();
    let config = AppConfig::new();
    init_tracing(config.log_level.clone());

    let state = match AppState::new(config).await {
        Ok(state) => state,
        Err(e) => panic!("Cannot initialize connection pools! {}", e),
    };
    let pg = state.pg.clone();

    info!("Applying schema...");
    sqlx::raw_sql(DDL)
        .execute(&pg)
        .await
        .expect("Cannot apply schema");

    info!("Seeding tours...");
    for tour in TOURS {
        sqlx::query(Tour::upsert_query())
            .bind(tour.slug)
            .bind(tour.title)
            .bind(tour.description)
            .bind(tour.duration)
            .bind(tour.price_dkk)
            .bind(tour.max_guests)
            .bind(tour.image_url)
            .execute(&pg)
            .await
            .expect("Cannot upsert tour");
        info!("  {}", tour.slug);
    }

    info!("Ensuring settings row...");
    sqlx::query(Settings::insert_default_query())
        .execute(&pg)
        .await
        .expect("Cannot insert settings row");

    info!("Ensuring admin account...");
    let admin_email =
        env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@greenlandseasafari.com".to_owned());
    match env::var("ADMIN_PASSWORD") {
        Err(_) => {
            warn!("ADMIN_PASSWORD not set; skipping admin account creation");
        }
        Ok(password) => {
            let password_hash = hash(&password).expect("Cannot hash admin password");
            sqlx::query(User::upsert_query())
                .bind("Admin")
                .bind(&admin_email)
                .bind(&password_hash)
                .execute(&pg)
                .await
                .expect("Cannot upsert admin user");
            info!("  {}", admin_email);
        }
    }

    info!("Seed complete");
}
