pub mod logging;
pub mod options;
pub mod stagger;
