use std::time::Duration;

use anyhow::Result;
use palitha_client::{ContactForm, HttpTransport, NewsletterForm, SubmitOutcome, Transport};
use palitha_shared::Field;

#[derive(clap::Args, Debug)]
pub struct ContactArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub company: String,
    /// residential, commercial or industrial
    #[arg(long)]
    pub project_type: String,
    /// windows-doors, facades, custom or railings
    #[arg(long)]
    pub service: String,
    #[arg(long)]
    pub message: String,
    #[arg(long, default_value = "")]
    pub budget: String,
    /// email, phone or whatsapp
    #[arg(long, default_value = "email")]
    pub contact_method: String,
    /// Site base URL (overrides config file)
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SubscribeArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub name: Option<String>,
    /// May be repeated
    #[arg(long = "interest")]
    pub interests: Vec<String>,
    /// Site base URL (overrides config file)
    #[arg(long)]
    pub url: Option<String>,
}

fn transport(config: &crate::config::Config, url: Option<String>) -> Result<HttpTransport> {
    let base_url = url.unwrap_or(config.client.base_url.to_owned());

    Ok(HttpTransport::new(
        base_url,
        Duration::from_secs(config.client.timeout_secs),
    )?)
}

/// Fills the contact form from the command line, submits it and prints the outcome.
#[tracing::instrument(skip_all)]
pub async fn contact(config: crate::config::Config, args: ContactArgs) -> Result<()> {
    let mut form = ContactForm::new(transport(&config, args.url)?);

    for (field, value) in [
        (Field::FirstName, args.first_name),
        (Field::LastName, args.last_name),
        (Field::Email, args.email),
        (Field::Phone, args.phone),
        (Field::Company, args.company),
        (Field::ProjectType, args.project_type),
        (Field::Service, args.service),
        (Field::Message, args.message),
        (Field::Budget, args.budget),
        (Field::ContactMethod, args.contact_method),
    ] {
        form.on_field_change(field, value);
    }

    let outcome = form.on_submit().await;

    match outcome {
        SubmitOutcome::Accepted => {
            println!("{}", form.notice().unwrap_or("Message sent successfully!"));
            Ok(())
        }
        SubmitOutcome::Invalid | SubmitOutcome::Rejected => {
            for (field, message) in form.errors().iter() {
                eprintln!("{field}: {message}");
            }
            anyhow::bail!("contact request was not accepted")
        }
        SubmitOutcome::Failed => {
            anyhow::bail!(
                "{}",
                form.notice().unwrap_or("Failed to send message. Please try again.")
            )
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn subscribe(config: crate::config::Config, args: SubscribeArgs) -> Result<()> {
    let transport = transport(&config, args.url.clone())?;
    let mut form = signup_form(transport, args);

    match form.on_submit().await {
        SubmitOutcome::Accepted => {
            println!("Successfully subscribed to newsletter");
            Ok(())
        }
        _ => anyhow::bail!("{}", form.error().unwrap_or(palitha_client::SUBSCRIBE_FAILURE)),
    }
}

/// Repeated `--interest` values select the interest once.
fn signup_form<T: Transport>(transport: T, args: SubscribeArgs) -> NewsletterForm<T> {
    let mut form = NewsletterForm::new(transport);

    form.set_email(args.email);
    if let Some(name) = args.name {
        form.set_name(name);
    }
    for interest in &args.interests {
        if !form.interests().contains(interest) {
            form.toggle_interest(interest);
        }
    }

    form
}
