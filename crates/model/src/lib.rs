pub mod amount;
pub mod errors;
pub mod form;
pub mod ids;
pub mod phone;
pub mod request;
