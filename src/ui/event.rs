use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{debug, error, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const POLL_RATE : Duration = Duration::from_millis(100);

pub fn is_quit_key(key: KeyCode) -> bool {
    matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
}

/*
    Key presses read from the terminal on a blocking task and forwarded over a channel,
    so the battle can keep its own schedule while still noticing input
 */
pub struct InputEvents {
    receiver: mpsc::UnboundedReceiver<KeyCode>,
    cancelled: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<()>>
}

impl InputEvents {
    pub fn spawn() -> InputEvents {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let task_cancelled = cancelled.clone();

        info!("Spawning input task");
        let join_handle = tokio::task::spawn_blocking(move || read_keys(sender, task_cancelled));
        InputEvents { receiver, cancelled, join_handle: Some(join_handle) }
    }

    /*
        An input source fed from the given channel instead of the terminal
     */
    #[cfg(test)]
    pub fn from_receiver(receiver: mpsc::UnboundedReceiver<KeyCode>) -> InputEvents {
        InputEvents { receiver, cancelled: Arc::new(AtomicBool::new(false)), join_handle: None }
    }

    /*
        Resolves on the next key press of any kind, never if the input closes first
     */
    pub async fn any_key(&mut self) {
        if let Some(key) = self.receiver.recv().await {
            debug!("Dismissed with {:?}", key);
            return;
        }
        std::future::pending::<()>().await
    }

    /*
        Resolves once a quit key arrives, never if the input closes first
     */
    pub async fn quit_requested(&mut self) {
        while let Some(key) = self.receiver.recv().await {
            if is_quit_key(key) {
                return;
            }
        }
        std::future::pending::<()>().await
    }

    pub async fn stop(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(handle) = self.join_handle.take() {
            if let Err(e) = handle.await {
                error!("Input task failed: {}", e);
            }
        }
        info!("Input task stopped");
    }
}

fn read_keys(sender: mpsc::UnboundedSender<KeyCode>, cancelled: Arc<AtomicBool>) {
    while !cancelled.load(Ordering::SeqCst) {
        match event::poll(POLL_RATE) {
            Ok(true) => {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        debug!("Key pressed: {:?}", key.code);
                        if sender.send(key.code).is_err() {
                            return;
                        }
                    },
                    Ok(_) => {},
                    Err(e) => {
                        error!("Error reading from the terminal: {}", e);
                        return;
                    }
                }
            },
            Ok(false) => {},
            Err(e) => {
                error!("Error polling the terminal: {}", e);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyCode;
    use tokio::sync::mpsc;

    use crate::ui::event::{is_quit_key, InputEvents};

    #[test]
    fn test_is_quit_key() {
        assert!(is_quit_key(KeyCode::Esc));
        assert!(is_quit_key(KeyCode::Char('q')));
        assert!(!is_quit_key(KeyCode::Enter));
        assert!(!is_quit_key(KeyCode::Char('a')));
    }

    #[tokio::test]
    async fn test_quit_requested_skips_other_keys() {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut input = InputEvents::from_receiver(receiver);
        sender.send(KeyCode::Char('a')).unwrap();
        sender.send(KeyCode::Esc).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(1), input.quit_requested()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_any_key_accepts_non_quit_keys() {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut input = InputEvents::from_receiver(receiver);
        sender.send(KeyCode::Enter).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(1), input.any_key()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_any_key_waits_when_input_closed() {
        // GIVEN the input task has gone away without a key press
        let (sender, receiver) = mpsc::unbounded_channel::<KeyCode>();
        let mut input = InputEvents::from_receiver(receiver);
        drop(sender);

        // THEN a closed channel doesn't count as a key
        let result = tokio::time::timeout(Duration::from_millis(50), input.any_key()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_quit_requested_waits_when_input_closed() {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut input = InputEvents::from_receiver(receiver);
        sender.send(KeyCode::Enter).unwrap();
        drop(sender);

        let result = tokio::time::timeout(Duration::from_millis(50), input.quit_requested()).await;
        assert!(result.is_err());
    }
}
