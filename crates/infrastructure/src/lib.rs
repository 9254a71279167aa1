//! freedns infrastructure: wire codec, upstream transports, answer cache
//! and the hickory-server request handler
pub mod dns;
