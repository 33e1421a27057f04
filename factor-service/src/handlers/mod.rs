pub mod factors;
pub mod hello;

pub use factors::factors;
pub use hello::hello;
