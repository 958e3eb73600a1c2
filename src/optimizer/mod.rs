pub mod generator;
pub mod polish;
pub mod runner;
pub mod sampler;

pub use self::generator::{letter_index, KeyGenerator};
pub use self::polish::{PolishObserver, PolishOptions, PolishReport, Polisher};
pub use self::runner::{ProgressCallback, RandomSearch, SearchReport};
pub use self::sampler::BiasedSampler;
