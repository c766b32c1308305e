/// Core functionality modules
///
/// Contains the recommendation logic: survey state, preference
/// vectorization, the distro registry and the ranking itself.

pub mod axis;
pub mod recommender;
pub mod registry;
pub mod scorer;
pub mod survey;
pub mod vectorizer;

pub use axis::BinaryAxis;
pub use recommender::{Ranking, Recommender};
pub use registry::{DistroProfile, DistroRegistry};
pub use scorer::{Scorer, DEFAULT_PENALTY_FACTOR};
pub use survey::Survey;
pub use vectorizer::{UserPreferences, Vectorizer};
