// Domain layer: request/response models and the seams the submitter talks through.

pub mod model;
pub mod ports;
