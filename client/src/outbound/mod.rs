//! Driven adapters: durable session storage and the HTTP gateway.

pub mod gateway;
pub mod storage;
