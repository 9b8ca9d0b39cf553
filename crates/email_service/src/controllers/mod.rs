pub mod email_controller;
pub mod system_controller;
