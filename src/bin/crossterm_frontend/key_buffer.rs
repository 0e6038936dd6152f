use crossterm::event::KeyCode;
use std::{
    collections::VecDeque,
    sync::Mutex,
    time::{Duration, SystemTime},
};

/// A thread-safe record of recent keypresses with timestamps.
/// Terminals report presses rather than holds, so a key counts as held until
/// its most recent press is older than `timeout`.
/// Wrap it in an `std::sync::Arc` and you are good to go.
pub struct KeyBuffer {
    timeout: Duration,
    buffer: Mutex<VecDeque<(KeyCode, SystemTime)>>,
}

impl KeyBuffer {

    /// Create a new `KeyBuffer` that forgets keypresses older than `timeout`.
    pub fn new(timeout: Duration) -> KeyBuffer {
        KeyBuffer {
            timeout,
            buffer: Mutex::new(VecDeque::new()),
        }
    }

    /// Record a new keypress.
    pub fn push(&self, key_code: KeyCode) {
        let mut guard = self.buffer.lock().unwrap();
        guard.push_back((key_code, SystemTime::now()));
    }

    /// The keys currently counted as held. Stale presses are pruned,
    /// so a key repeats in the result at most as often as it was pushed
    /// within the timeout window.
    pub fn held(&self) -> Vec<KeyCode> {
        let timeout = self.timeout;
        let mut guard = self.buffer.lock().unwrap();
        guard.retain(|(_, timestamp)| timestamp.elapsed().unwrap() < timeout);
        guard.iter().map(|(key_code, _)| *key_code).collect()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn pushed_keys_are_held() {
        let kb = Arc::new(KeyBuffer::new(Duration::from_millis(100)));

        let kb_c1 = kb.clone();
        let input = KeyCode::Null;

        let producer = thread::spawn(move || {
            kb_c1.push(input)
        });

        producer.join().unwrap(); // Ensure the push has been done
        assert_eq!(kb.held(), vec![input]);
    }

    #[test]
    fn stale_presses_expire() {
        let kb = KeyBuffer::new(Duration::from_millis(50));
        kb.push(KeyCode::Char('a'));
        thread::sleep(Duration::from_millis(60));
        assert!(kb.held().is_empty());
    }

    #[test]
    fn a_new_press_refreshes_the_key() {
        let kb = KeyBuffer::new(Duration::from_millis(50));
        kb.push(KeyCode::Char('a'));
        thread::sleep(Duration::from_millis(30));
        kb.push(KeyCode::Char('a'));
        thread::sleep(Duration::from_millis(30));
        assert_eq!(kb.held(), vec![KeyCode::Char('a')]);
    }
}
