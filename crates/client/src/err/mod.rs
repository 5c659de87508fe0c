pub use cloud::*;

mod cloud;
