//! The two position-adjustment algorithms: shifting highlights through
//! content changes, and subtracting an explicitly cleared span from a
//! highlight. Both are free functions over ranges; only the engine facade
//! connects them to the store.

pub mod shift;
pub mod subtract;

pub use shift::{ContentChange, shift_file, shift_range};
pub use subtract::{Subtraction, subtract_span};
