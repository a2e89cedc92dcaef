pub mod artifact;
pub mod lumina_protocol;
