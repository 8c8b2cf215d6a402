//! Background tasks that run alongside the HTTP server

pub mod timer_engine;

pub use timer_engine::timer_engine_task;
