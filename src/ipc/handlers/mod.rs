pub mod attendance;
pub mod core;
pub mod export;
pub mod qr;
