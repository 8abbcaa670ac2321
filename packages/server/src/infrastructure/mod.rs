//! Infrastructure layer: wire formats, outbound channels and the in-memory store.

pub mod dto;
pub mod message_pusher;
pub mod repository;
