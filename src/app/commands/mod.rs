pub mod auth;
pub mod issues;
pub mod labels;
pub mod locate;
pub mod manual;
pub mod seed;
