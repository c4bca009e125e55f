use std::sync::{Arc, Mutex};

use crate::console::Console;

/// In-memory console for testing. Clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryConsole {
    /// Create a new empty memory console
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line logged so far, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl Console for MemoryConsole {
    fn log(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_recorded_in_order() {
        let console = MemoryConsole::new();
        console.log("test");
        console.log("Error: Task 2 failed!");
        assert_eq!(console.lines(), vec!["test", "Error: Task 2 failed!"]);
    }

    #[test]
    fn test_clones_share_buffer() {
        let console = MemoryConsole::new();
        let clone = console.clone();
        clone.log("hello");
        assert_eq!(console.lines(), vec!["hello"]);

        console.clear();
        assert!(clone.lines().is_empty());
    }
}
