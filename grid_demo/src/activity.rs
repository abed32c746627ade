// activity.rs - Timestamped event list shown under the grid

use std::collections::VecDeque;

/// Oldest entries are dropped past this many.
const MAX_ENTRIES: usize = 200;

#[derive(Default)]
pub struct ActivityLog {
    entries: VecDeque<String>,
}

impl ActivityLog {
    pub fn push(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.entries.push_back(format!("{stamp}: {msg}"));
        while self.entries.len() > MAX_ENTRIES {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
