pub mod feature;
pub mod pipeline_host;
pub mod render_pass;
pub mod volume;

pub use feature::*;
pub use pipeline_host::*;
pub use render_pass::*;
pub use volume::*;
