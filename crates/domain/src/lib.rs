#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod block;
mod equipment;
mod error;
mod exercise;
mod goal;
mod plan;
mod session_structure;
mod settings;
mod workout;

use std::slice::Iter;

pub use block::*;
pub use equipment::*;
pub use error::*;
pub use exercise::*;
pub use goal::*;
pub use plan::*;
pub use session_structure::*;
pub use settings::*;
pub use workout::*;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
