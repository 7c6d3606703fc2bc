//! Value Object Module

pub mod account_password;
pub mod contact_number;
pub mod display_name;
pub mod email;
