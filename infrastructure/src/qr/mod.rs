//! QR symbol encoding

mod encoder;

pub use encoder::QrCodeEncoder;
