mod corners;
mod cover;
mod fill;

pub use corners::BlokusCornersProblem;
pub use cover::BlokusCoverProblem;
pub use fill::BlokusFillProblem;
