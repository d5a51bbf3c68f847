pub mod feedback;
pub mod marks;

pub use feedback::FeedbackService;
pub use marks::MarkService;
