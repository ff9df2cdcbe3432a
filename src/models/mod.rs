mod movie;

pub use movie::*;
