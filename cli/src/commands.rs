pub mod add;
pub mod bits;
