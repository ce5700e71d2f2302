pub mod about;
pub mod handlers;
pub mod home;
pub mod results;
pub mod sidebar;
pub mod upload_section;
pub mod utils;
