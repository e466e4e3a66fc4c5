pub mod credentials;
pub mod guard;
pub mod lists;
pub mod nav;
pub mod notice;
