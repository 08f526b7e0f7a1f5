pub mod connection;
pub mod issues;
pub mod rooms;
pub mod seed;
pub mod users;
