use crate::console::Console;

/// Prints every line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn log(&self, line: &str) {
        println!("{}", line);
    }
}
