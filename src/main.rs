use taskdeck::commands::Cli;
use taskdeck::libs::messages::Message;
use taskdeck::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(err) = Cli::menu().await {
        msg_error!(Message::UnexpectedError(format!("{:#}", err)));
        std::process::exit(1);
    }
}
