pub mod interface;
pub mod remote;
