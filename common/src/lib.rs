//! Platform-independent core of the encoder popup: the encodings and their inverses.

pub mod decode;
pub mod encoding;

pub use encoding::{EncodedResult, Encoding, encode};
