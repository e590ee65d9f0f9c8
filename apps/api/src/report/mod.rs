// Downloadable analysis report: layout into pages, PDF serialization, HTTP handlers.
// Rendering is CPU-bound and runs inside tokio::task::spawn_blocking from handlers.

pub mod document;
pub mod handlers;
pub mod pdf;
pub mod renderer;

pub use renderer::render;
