use chrono::Utc;
use clap::Args;
use cleanslate_core::chat::{greeting, summarize, GENERIC_FAILURE};
use cleanslate_core::{ChatClient, ChatMessage, Config};

use super::open_state;

#[derive(Args)]
pub struct ChatArgs {
    /// Message to send
    #[arg(required = true, num_args = 1..)]
    message: Vec<String>,
}

pub fn run(args: ChatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let state = open_state()?;
    let now = Utc::now();

    let summary = summarize(state.addictions(), config.display.currency, now);
    let history = vec![
        ChatMessage::assistant(greeting(state.addictions(), now)),
        ChatMessage::user(args.message.join(" ")),
    ];

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = match ChatClient::from_env(&config.chat) {
        Ok(client) => runtime.block_on(client.reply(&history, &summary)),
        Err(e) => Err(e),
    };

    match result {
        Ok(reply) => {
            println!("{reply}");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "chat completion failed");
            println!("{GENERIC_FAILURE}");
            Err(e.into())
        }
    }
}
