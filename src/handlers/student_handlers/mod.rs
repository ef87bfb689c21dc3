mod crud;
mod list;

pub use crud::*;
pub use list::*;
