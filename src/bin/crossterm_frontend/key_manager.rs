use super::key_buffer::KeyBuffer;
use crossterm::event::{read, Event, KeyCode};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct KeyManager {
    stop: Arc<Mutex<bool>>,
    key_buffer: Arc<KeyBuffer>,
    _event_listener: JoinHandle<()>,
}

/// A struct for managing keypresses that will automatically
/// start a thread that grabs keypresses.
impl KeyManager {
    // Start event listener thread
    pub fn new() -> KeyManager {
        let stop = Arc::new(Mutex::new(false));
        let key_buffer = Arc::new(KeyBuffer::new(Duration::from_millis(250)));
        let event_listener = event_listener(stop.clone(), key_buffer.clone());
        KeyManager {
            stop,
            key_buffer,
            _event_listener: event_listener,
        }
    }

    /// The keys currently counted as held.
    pub fn held_keys(&self) -> Vec<KeyCode> {
        self.key_buffer.held()
    }
}

impl Drop for KeyManager {
    fn drop(&mut self) {
        // Tell the event listener to stop
        *self.stop.lock().unwrap() = true;
    }
}

/// Starts a thread that listens for key events and pushes them to the key buffer.
fn event_listener(stop: Arc<Mutex<bool>>, key_buffer: Arc<KeyBuffer>) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let event = read().unwrap();
            log::trace!("Got event {:?}", event);

            // Check the shared data, and possibly stop
            if *stop.lock().unwrap() {
                break;
            }

            // Investigate the event
            if let Event::Key(key_event) = event {
                key_buffer.push(key_event.code);
            }
        }
    })
}
