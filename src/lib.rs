mod cast;
mod float;
mod string;
mod utils;

#[cfg(feature = "python")]
mod py;

pub use self::cast::{decompose, SourceClass, Unpacked};
pub use self::float::{NarrowFloat, Semantics, SpecialKind, BINARY32, E9S12};
#[cfg(feature = "std")]
pub use self::utils::get_special_test_values;
