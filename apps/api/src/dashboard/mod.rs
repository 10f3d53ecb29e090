// Dashboard widgets: mock interviews, resume feedback, aptitude quiz,
// progress tracking, and the contact form.
// Interviews, resume feedback, and progress sit behind `require_session`.

pub mod aptitude;
pub mod contact;
pub mod interviews;
pub mod progress;
pub mod resume;
