pub mod polish;
pub mod rank;
pub mod rescore;
pub mod search;
pub mod show;
pub mod stats;
