pub mod fingerprint;
pub mod sync;
