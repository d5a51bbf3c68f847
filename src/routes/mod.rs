pub mod feedback;

pub use feedback::configure_feedback_routes;
