//! # Booking flow walkthrough
//!
//! Drives the client layer against a running Stayscape server: loads the
//! property detail page with its reviews, opens the booking page, fills the
//! form and submits it. Useful for eyeballing the whole flow end to end.
//!
//! ```bash
//! cargo run &            # the API server
//! cargo run --bin booking_demo
//! ```

use std::env;

use tracing::info;

use stayscape::client::{BookingForm, BookingView, FetchState, HttpGateway, PropertyDetailView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stayscape=info".parse().unwrap()),
        )
        .init();

    let base_url =
        env::var("STAYSCAPE_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let gateway = HttpGateway::new(&base_url);

    info!("Stayscape booking walkthrough against {}", base_url);

    // Property detail page
    let mut detail = PropertyDetailView::new(1);
    detail.refresh(&gateway).await;

    match detail.state() {
        FetchState::Loaded(property) => {
            println!("{} ({:.1} stars)", property.name, property.rating);
            println!(
                "   {}, {}, {}",
                property.address.state, property.address.city, property.address.country
            );
            println!("   Categories: {}", property.category.join(", "));
            println!(
                "   {} beds, {} showers, up to {} guests",
                property.offers.bed, property.offers.shower, property.offers.occupants
            );
            println!("   ${} / night", property.price);
        }
        FetchState::Failed(message) => {
            anyhow::bail!("{}", message);
        }
        FetchState::Loading => unreachable!("refresh completed"),
    }

    println!("\n{}", detail.reviews().headline());
    if let Some(reviews) = detail.reviews().state().loaded() {
        for review in reviews {
            println!("   {} ({}/5, {}): {}", review.author, review.rating, review.date, review.comment);
        }
    }

    // Booking page
    let mut booking = BookingView::new(1);
    booking.refresh(&gateway).await;

    let summary = booking.order_summary();
    println!("\nOrder summary for {}", summary.property_name);
    println!(
        "   {} nights from {} at ${} / night + ${} booking fee = ${}",
        summary.total_nights, summary.start_date, summary.price, summary.booking_fee,
        summary.total()
    );
    println!("   {}", BookingView::cancellation_policy());

    // Fill and submit the form
    let mut form = BookingForm::new(Some(booking.property_id()));
    let fields = form.fields_mut();
    fields.first_name = "Ada".to_string();
    fields.last_name = "Lovelace".to_string();
    fields.email = "ada@example.com".to_string();
    fields.phone_number = "+44 20 7946 0000".to_string();
    fields.billing_address = "12 St James's Square".to_string();
    fields.city = "London".to_string();
    fields.state = "Greater London".to_string();
    fields.zip_code = "SW1Y 4JH".to_string();
    fields.country = "UK".to_string();

    form.submit(&gateway).await;

    match form.error() {
        None => println!("\nBooking confirmed: {:?}", form.status()),
        Some(message) => anyhow::bail!("{}", message),
    }

    Ok(())
}
