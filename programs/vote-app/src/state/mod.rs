pub mod treasury;
pub mod voter;
pub mod proposal;
pub mod winner;

pub use treasury::*;
pub use voter::*;
pub use proposal::*;
pub use winner::*;
