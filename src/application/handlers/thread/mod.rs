//! Thread command and query handlers.

mod add_thread;
mod get_thread_details;

pub use add_thread::AddThreadHandler;
pub use get_thread_details::GetThreadDetailsHandler;
