pub mod diagnostics;
pub mod ntopng;
