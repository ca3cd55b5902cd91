pub mod evaluation;
pub mod features;
pub mod selector;
pub mod similarity;
pub mod text;

pub use evaluation::{evaluate, Quality};
pub use features::TfidfVectorizer;
pub use selector::select;
pub use similarity::{similarity_matrix, validate};
