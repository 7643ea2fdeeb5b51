pub mod emailjs;
pub mod log;

pub use emailjs::EmailJsMailer;
pub use log::LogMailer;
