use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use agentlabs_sdk::agent::{Agent, TypewriteOptions};
use agentlabs_sdk::realtime::client::{ChannelRealtimeClient, RealtimeClient};
use agentlabs_sdk::realtime::proto::MessageFormat;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let (client, mut rx) = ChannelRealtimeClient::channel();
        let worker = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                let payload = event.to_payload().expect("serialize payload");
                println!("emit {} {payload}", event.name());
            }
        });

        let agent = Agent::new(
            "REPLACE_WITH_AGENT_ID",
            Arc::new(client) as Arc<dyn RealtimeClient>,
        );

        agent
            .typewrite(
                "Streaming, one character at a time.",
                "REPLACE_WITH_CONVERSATION_ID",
                TypewriteOptions {
                    format: MessageFormat::Markdown,
                    interval: Duration::from_millis(25),
                    ..TypewriteOptions::default()
                },
            )
            .await?;

        drop(agent);
        worker.await?;
        Ok::<(), Box<dyn Error>>(())
    })
}
