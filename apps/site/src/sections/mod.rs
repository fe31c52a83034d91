// One pure rendering function per résumé section. Each takes a borrowed
// slice of the curriculum and returns finished markup; no section mutates
// its input or fails on empty data.

pub mod additional_info;
pub mod education;
pub mod experience;
pub mod footer;
pub mod header;
pub mod links;
pub mod section;
pub mod skills;
pub mod summary;

pub use additional_info::additional_info;
pub use education::education;
pub use experience::companies;
pub use footer::footer;
pub use header::header;
pub use links::links;
pub use section::section;
pub use skills::skills;
pub use summary::summary;
