use std::error::Error;
use std::sync::Arc;

use agentlabs_sdk::agent::Agent;
use agentlabs_sdk::realtime::client::{ChannelRealtimeClient, RealtimeClient};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        // The consumer side of the queue stands in for the connection
        // worker that would serialize events onto the live socket.
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
        agent.send("Hello from the Rust SDK!", "REPLACE_WITH_CONVERSATION_ID")?;

        drop(agent);
        worker.await?;
        Ok::<(), Box<dyn Error>>(())
    })
}
