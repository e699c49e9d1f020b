// Domain layer: core models and the session roster. No I/O here.

pub mod model;
pub mod roster;
