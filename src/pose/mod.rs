pub mod io;
pub mod landmark;
pub mod reliability;

pub use io::{load_landmarks, parse_landmarks, LandmarkFrame};
pub use landmark::{ImageSize, Landmark, LandmarkIndex, PoseLandmarks};
pub use reliability::{
    are_essential_landmarks_reliable, ensure_essential_landmarks, ensure_reliable,
    is_reliable_landmark, ESSENTIAL_LANDMARKS, RELIABILITY_THRESHOLD,
};
