// Adapters layer: concrete implementations of the domain ports (form, container, http).

pub mod container;
pub mod form;
pub mod http;
