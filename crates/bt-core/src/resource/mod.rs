pub mod fetch_error;
pub mod notice;
pub mod remote_resource;
