// Domain layer: models, substitution context and ports. No renderer or config knowledge here.

pub mod model;
pub mod ports;
pub mod scoped_vars;
