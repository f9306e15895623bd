mod energy;
mod observable;

pub use energy::*;
pub use observable::*;
