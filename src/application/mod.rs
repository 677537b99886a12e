mod scanner;

pub use scanner::{EventScanner, ScanError, ScanStats};
