pub use category::*;
pub use content::*;
pub use event::*;
pub use event_status::*;
pub use registration::*;
pub use team_size::*;
pub use user::*;

mod category;
mod content;
mod event;
mod event_status;
mod registration;
mod team_size;
mod user;
