use frontdesk::configuration::get_configuration;
use frontdesk::startup::Application;
use frontdesk::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber(
        "frontdesk".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let configuration = get_configuration()
        .expect("Failed to read configuration");
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "frontdesk is listening");
    application.run_until_stopped().await?;
    Ok(())
}
