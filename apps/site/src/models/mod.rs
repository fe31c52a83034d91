pub mod curriculum;

pub use curriculum::{Company, Curriculum, EducationItem, Experience, LinkItem, Role};
