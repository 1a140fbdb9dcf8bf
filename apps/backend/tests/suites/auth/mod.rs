pub mod gate;
pub mod signup;
