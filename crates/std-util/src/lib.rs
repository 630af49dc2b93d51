pub mod result;
pub mod set;

pub mod prelude {
    pub use crate::{assert_err, assert_ok, assert_set_eq};
}
