//! Booking confirmation mail
//!
//! Confirmation emails are fire-and-forget: the send is dispatched off
//! the request path and any failure is logged inside the task, never
//! surfaced to the booking response. Without SMTP settings the mailer is
//! silently disabled.

use lettre::{
    Message, SmtpTransport, Transport, transport::smtp::authentication::Credentials,
};
use shared::models::Booking;
use tracing::{debug, info, warn};

/// SMTP settings; all-or-nothing from the environment
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Clone, Default)]
pub struct Mailer {
    settings: Option<SmtpSettings>,
}

impl Mailer {
    pub fn new(settings: Option<SmtpSettings>) -> Self {
        if settings.is_none() {
            warn!("Email not fully configured. Skipping email sending.");
        }
        Self { settings }
    }

    pub fn is_configured(&self) -> bool {
        self.settings.is_some()
    }

    /// Dispatch a confirmation email without awaiting the result.
    pub fn send_confirmation_detached(&self, booking: Booking) {
        let Some(settings) = self.settings.clone() else {
            debug!(booking_id = %booking.booking_id, "Mailer disabled, skipping confirmation");
            return;
        };

        tokio::spawn(async move {
            let email = booking.email.clone();
            let booking_id = booking.booking_id.clone();
            // lettre's SmtpTransport is blocking; keep it off the runtime.
            let result =
                tokio::task::spawn_blocking(move || send_confirmation(&settings, &booking)).await;
            match result {
                Ok(Ok(())) => info!(to = %email, booking_id = %booking_id, "Booking confirmation email sent"),
                Ok(Err(e)) => warn!(error = %e, booking_id = %booking_id, "Error sending confirmation email"),
                Err(e) => warn!(error = %e, "Confirmation email task panicked"),
            }
        });
    }
}

fn send_confirmation(settings: &SmtpSettings, booking: &Booking) -> anyhow::Result<()> {
    let body = format!(
        "Hi {name},\n\n\
         Your restaurant booking is confirmed.\n\n\
         Booking ID: {id}\n\
         Date: {date}\n\
         Time: {time}\n\
         Guests: {guests}\n\
         Cuisine: {cuisine}\n\
         Seating: {seating}\n\n\
         Thank you for booking via the Vaiu Voice Assistant.\n\n\
         Regards,\n\
         Vaiu Team",
        name = booking.customer_name,
        id = booking.booking_id,
        date = booking.booking_date,
        time = booking.booking_time,
        guests = booking.number_of_guests,
        cuisine = booking.cuisine_preference,
        seating = booking.seating_preference,
    );

    let message = Message::builder()
        .from(settings.from.parse()?)
        .to(booking.email.parse()?)
        .subject(format!(
            "Your booking is confirmed - ID {}",
            booking.booking_id
        ))
        .body(body)?;

    let transport = SmtpTransport::builder_dangerous(&settings.host)
        .port(settings.port)
        .credentials(Credentials::new(
            settings.username.clone(),
            settings.password.clone(),
        ))
        .build();

    transport.send(&message)?;
    Ok(())
}
