use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::infrastructure::backends::BackendManager;

pub struct ActionsService {}

impl ActionsService {
    /// Bridges the conversation controller to the backend: chat requests are
    /// performed on their own task, and the outcome comes back to the UI as
    /// a single event. Failures never propagate past this loop; the
    /// controller turns them into a transcript entry.
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let event = rx.recv().await;
            if event.is_none() {
                continue;
            }

            let worker_tx = tx.clone();
            match event.unwrap() {
                Action::ChatRequest(prompt) => {
                    tokio::spawn(async move {
                        let res = BackendManager::get().ask(&prompt).await;

                        match res {
                            Ok(reply) => {
                                worker_tx.send(Event::ChatReply(reply))?;
                            }
                            Err(err) => {
                                tracing::error!(error = ?err, "Chat request failed");
                                worker_tx.send(Event::ChatFailure())?;
                            }
                        }

                        return Ok::<(), anyhow::Error>(());
                    });
                }
            }
        }
    }
}
