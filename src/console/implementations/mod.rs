pub mod memory_console;
pub mod stdout_console;
pub use memory_console::MemoryConsole;
pub use stdout_console::StdoutConsole;
